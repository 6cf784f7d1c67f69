// The seam between a store handle and the embedded engine behind it.
// Handles only ever talk to these traits so the engine can be swapped
// without touching call sites.

use log::debug;
use std::error::Error as StdError;
use std::path::Path;

/// Opens connections to an embedded key-value store
pub trait StoreEngine {
    type Connection: StoreConnection;
    type Error: StdError + Send + Sync + 'static;

    /// Open or create a store rooted at `dir` with the engine's defaults
    fn open(&self, dir: &Path) -> Result<Self::Connection, Self::Error>;
}

/// One live connection to an embedded key-value store
pub trait StoreConnection {
    type Error: StdError + Send + Sync + 'static;

    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, Self::Error>;
    fn insert(&self, key: &[u8], value: &[u8]) -> Result<Option<Vec<u8>>, Self::Error>;
    fn remove(&self, key: &[u8]) -> Result<Option<Vec<u8>>, Self::Error>;
    fn contains_key(&self, key: &[u8]) -> Result<bool, Self::Error>;
    fn flush(&self) -> Result<(), Self::Error>;

    /// Release the connection and everything the engine holds for it
    fn close(self) -> Result<(), Self::Error>;
}

/// The default engine: sled with its default configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct SledEngine;

impl StoreEngine for SledEngine {
    type Connection = sled::Db;
    type Error = sled::Error;

    fn open(&self, dir: &Path) -> Result<sled::Db, sled::Error> {
        sled::Config::default().path(dir).open()
    }
}

impl StoreConnection for sled::Db {
    type Error = sled::Error;

    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, sled::Error> {
        Ok(sled::Tree::get(self, key)?.map(|v| v.to_vec()))
    }

    fn insert(&self, key: &[u8], value: &[u8]) -> Result<Option<Vec<u8>>, sled::Error> {
        Ok(sled::Tree::insert(self, key, value)?.map(|v| v.to_vec()))
    }

    fn remove(&self, key: &[u8]) -> Result<Option<Vec<u8>>, sled::Error> {
        Ok(sled::Tree::remove(self, key)?.map(|v| v.to_vec()))
    }

    fn contains_key(&self, key: &[u8]) -> Result<bool, sled::Error> {
        sled::Tree::contains_key(self, key)
    }

    fn flush(&self) -> Result<(), sled::Error> {
        let bytes = sled::Tree::flush(self)?;
        debug!("Flushed {bytes} bytes to disk");
        Ok(())
    }

    // sled has no explicit close: flush, then dropping the last Db handle
    // stops the flusher and releases the directory lock.
    fn close(self) -> Result<(), sled::Error> {
        StoreConnection::flush(&self)?;
        drop(self);
        Ok(())
    }
}
