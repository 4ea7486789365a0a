//! The persistence adapter: an opaque key-value blob store.
//!
//! Collections are persisted whole as JSON blobs under well-known keys; the
//! store offers no query capability beyond reading and writing a named blob.

mod memory;
mod sqlite;

use serde::{Serialize, de::DeserializeOwned};

pub use memory::MemoryBlobStore;
pub use sqlite::{SqliteBlobStore, initialize};

use crate::Error;

/// The blob key holding the active session's user record.
pub const CURRENT_USER_KEY: &str = "currentUser";
/// The blob key holding the list of registered users.
pub const REGISTERED_USERS_KEY: &str = "registeredUsers";
/// The blob key holding the category list.
pub const CATEGORIES_KEY: &str = "userCategories";
/// The blob key holding the transaction list.
pub const TRANSACTIONS_KEY: &str = "userTransactions";

/// A key-value store for serialized blobs.
///
/// Implementations overwrite the previous value on write ("last write wins");
/// there is no optimistic-concurrency check, which is acceptable because the
/// system assumes a single writer.
pub trait BlobStore {
    /// Read the blob stored under `key`, or `None` if the key is absent.
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, Error>;

    /// Write `value` under `key`, replacing any previous value.
    fn write(&mut self, key: &str, value: &[u8]) -> Result<(), Error>;

    /// Remove the blob stored under `key`. Absent keys are not an error.
    fn delete(&mut self, key: &str) -> Result<(), Error>;

    /// Read and deserialize the JSON blob stored under `key`.
    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, Error> {
        match self.read(key)? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Serialize `value` as JSON and write it under `key`.
    fn write_json<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), Error> {
        let bytes = serde_json::to_vec(value)?;
        self.write(key, &bytes)
    }
}
