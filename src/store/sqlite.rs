//! Implements a SQLite backed blob store.

use std::sync::{Arc, Mutex};

use rusqlite::{Connection, OptionalExtension};

use crate::{Error, store::BlobStore};

/// Create the blob table if it does not exist.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS blob (
            key TEXT PRIMARY KEY,
            value BLOB NOT NULL
        );",
        (),
    )?;

    Ok(())
}

/// A blob store backed by a single SQLite table.
///
/// Cloning is cheap and clones share the same underlying connection, so each
/// component can own its handle to the one store.
#[derive(Debug, Clone)]
pub struct SqliteBlobStore {
    connection: Arc<Mutex<Connection>>,
}

impl SqliteBlobStore {
    /// Create a blob store over an open SQLite connection.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl BlobStore for SqliteBlobStore {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare("SELECT value FROM blob WHERE key = :key;")?
            .query_row(&[(":key", key)], |row| row.get(0))
            .optional()
            .map_err(|error| error.into())
    }

    fn write(&mut self, key: &str, value: &[u8]) -> Result<(), Error> {
        self.connection.lock().unwrap().execute(
            "INSERT INTO blob (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            (key, value),
        )?;

        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), Error> {
        self.connection
            .lock()
            .unwrap()
            .execute("DELETE FROM blob WHERE key = ?1;", (key,))?;

        Ok(())
    }
}

#[cfg(test)]
mod sqlite_blob_store_tests {
    use std::sync::{Arc, Mutex};

    use rusqlite::Connection;

    use super::{SqliteBlobStore, initialize};
    use crate::store::BlobStore;

    fn get_test_store() -> SqliteBlobStore {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();

        SqliteBlobStore::new(Arc::new(Mutex::new(connection)))
    }

    #[test]
    fn read_missing_key_returns_none() {
        let store = get_test_store();

        assert_eq!(store.read("nothing"), Ok(None));
    }

    #[test]
    fn write_then_read_round_trips() {
        let mut store = get_test_store();

        store.write("greeting", b"hello").unwrap();

        assert_eq!(store.read("greeting"), Ok(Some(b"hello".to_vec())));
    }

    #[test]
    fn write_replaces_previous_value() {
        let mut store = get_test_store();

        store.write("key", b"first").unwrap();
        store.write("key", b"second").unwrap();

        assert_eq!(store.read("key"), Ok(Some(b"second".to_vec())));
    }

    #[test]
    fn delete_removes_key() {
        let mut store = get_test_store();

        store.write("key", b"value").unwrap();
        store.delete("key").unwrap();

        assert_eq!(store.read("key"), Ok(None));
    }

    #[test]
    fn clones_share_the_same_data() {
        let mut store = get_test_store();
        let clone = store.clone();

        store.write("shared", b"yes").unwrap();

        assert_eq!(clone.read("shared"), Ok(Some(b"yes".to_vec())));
    }

    #[test]
    fn json_helpers_round_trip() {
        let mut store = get_test_store();
        let values = vec!["a".to_owned(), "b".to_owned()];

        store.write_json("list", &values).unwrap();
        let loaded: Option<Vec<String>> = store.read_json("list").unwrap();

        assert_eq!(loaded, Some(values));
    }
}
