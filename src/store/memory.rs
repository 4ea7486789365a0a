//! Implements an in-memory blob store for tests and ephemeral runs.

use std::collections::HashMap;

use crate::{Error, store::BlobStore};

/// A blob store that keeps everything in a `HashMap`.
#[derive(Debug, Default, Clone)]
pub struct MemoryBlobStore {
    blobs: HashMap<String, Vec<u8>>,
}

impl MemoryBlobStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryBlobStore {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, Error> {
        Ok(self.blobs.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &[u8]) -> Result<(), Error> {
        self.blobs.insert(key.to_owned(), value.to_vec());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), Error> {
        self.blobs.remove(key);
        Ok(())
    }
}
