// This is the owning handle around the wallet's embedded database
// Other wallet components persist through it; nothing else may close the connection

use crate::error::{Result, WalletError};
use crate::storage::engine::{SledEngine, StoreConnection, StoreEngine};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

/// Sole owner of one connection to the embedded store.
///
/// A handle is either open (connection present) or unopened-or-closed.
/// `StoreHandle::default()` is a never-opened handle.
pub struct StoreHandle<E: StoreEngine = SledEngine> {
    conn: Option<E::Connection>,
    path: Option<PathBuf>,
}

impl<E: StoreEngine> Default for StoreHandle<E> {
    fn default() -> Self {
        StoreHandle {
            conn: None,
            path: None,
        }
    }
}

impl StoreHandle<SledEngine> {
    /// Open or create the store rooted at `path` using sled's defaults
    pub fn open(path: impl AsRef<Path>) -> Result<StoreHandle> {
        Self::open_with(&SledEngine, path)
    }
}

impl<E: StoreEngine> StoreHandle<E> {
    /// Open or create the store rooted at `path` with `engine`'s default configuration
    pub fn open_with(engine: &E, path: impl AsRef<Path>) -> Result<StoreHandle<E>> {
        let path = path.as_ref();
        debug!("Opening database at {}", path.display());

        let conn = engine.open(path).map_err(|e| WalletError::OpenDatabase {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;

        info!("Opened database at {}", path.display());
        Ok(StoreHandle {
            conn: Some(conn),
            path: Some(path.to_path_buf()),
        })
    }

    /// Release the connection if there is one.
    ///
    /// The connection is taken out before the engine sees it, so only the
    /// first call can reach the engine whatever it returns.
    pub fn close(&mut self) -> Result<()> {
        let Some(conn) = self.conn.take() else {
            return Ok(());
        };

        conn.close().map_err(|e| WalletError::CloseDatabase(Box::new(e)))?;

        if let Some(path) = &self.path {
            info!("Closed database at {}", path.display());
        }
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        self.conn.is_some()
    }

    /// Directory the handle was last opened against
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn get(&self, key: impl AsRef<[u8]>) -> Result<Option<Vec<u8>>> {
        self.conn()?.get(key.as_ref()).map_err(database_error)
    }

    /// Returns the value previously stored under `key`
    pub fn insert(
        &self,
        key: impl AsRef<[u8]>,
        value: impl AsRef<[u8]>,
    ) -> Result<Option<Vec<u8>>> {
        self.conn()?
            .insert(key.as_ref(), value.as_ref())
            .map_err(database_error)
    }

    pub fn remove(&self, key: impl AsRef<[u8]>) -> Result<Option<Vec<u8>>> {
        self.conn()?.remove(key.as_ref()).map_err(database_error)
    }

    pub fn contains_key(&self, key: impl AsRef<[u8]>) -> Result<bool> {
        self.conn()?.contains_key(key.as_ref()).map_err(database_error)
    }

    pub fn flush(&self) -> Result<()> {
        self.conn()?.flush().map_err(database_error)
    }

    fn conn(&self) -> Result<&E::Connection> {
        self.conn.as_ref().ok_or(WalletError::StoreClosed)
    }
}

impl<E: StoreEngine> Drop for StoreHandle<E> {
    fn drop(&mut self) {
        if self.conn.is_some() {
            debug!("Store handle dropped while open, closing it");
            if let Err(e) = self.close() {
                warn!("Could not close database on drop: {e}");
            }
        }
    }
}

fn database_error<T>(err: T) -> WalletError
where
    T: std::error::Error + Send + Sync + 'static,
{
    WalletError::Database(Box::new(err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::HashMap;
    use std::io;
    use std::rc::Rc;
    use std::sync::Mutex;

    // In-memory engine whose close can be told to fail
    struct FakeEngine {
        fail_open: bool,
        fail_close: bool,
        closes: Rc<Cell<usize>>,
    }

    impl FakeEngine {
        fn new() -> FakeEngine {
            FakeEngine {
                fail_open: false,
                fail_close: false,
                closes: Rc::new(Cell::new(0)),
            }
        }
    }

    struct FakeConnection {
        data: Mutex<HashMap<Vec<u8>, Vec<u8>>>,
        fail_close: bool,
        closes: Rc<Cell<usize>>,
    }

    impl StoreEngine for FakeEngine {
        type Connection = FakeConnection;
        type Error = io::Error;

        fn open(&self, _dir: &Path) -> io::Result<FakeConnection> {
            if self.fail_open {
                return Err(io::Error::new(io::ErrorKind::PermissionDenied, "locked"));
            }
            Ok(FakeConnection {
                data: Mutex::new(HashMap::new()),
                fail_close: self.fail_close,
                closes: Rc::clone(&self.closes),
            })
        }
    }

    impl StoreConnection for FakeConnection {
        type Error = io::Error;

        fn get(&self, key: &[u8]) -> io::Result<Option<Vec<u8>>> {
            Ok(self.data.lock().unwrap().get(key).cloned())
        }

        fn insert(&self, key: &[u8], value: &[u8]) -> io::Result<Option<Vec<u8>>> {
            Ok(self.data.lock().unwrap().insert(key.to_vec(), value.to_vec()))
        }

        fn remove(&self, key: &[u8]) -> io::Result<Option<Vec<u8>>> {
            Ok(self.data.lock().unwrap().remove(key))
        }

        fn contains_key(&self, key: &[u8]) -> io::Result<bool> {
            Ok(self.data.lock().unwrap().contains_key(key))
        }

        fn flush(&self) -> io::Result<()> {
            Ok(())
        }

        fn close(self) -> io::Result<()> {
            self.closes.set(self.closes.get() + 1);
            if self.fail_close {
                return Err(io::Error::other("close failed"));
            }
            Ok(())
        }
    }

    #[test]
    fn test_open_and_close_twice() {
        let engine = FakeEngine::new();
        let mut handle = StoreHandle::open_with(&engine, "/wallet").unwrap();
        assert!(handle.is_open());
        assert_eq!(handle.path(), Some(Path::new("/wallet")));

        assert!(handle.close().is_ok());
        assert!(!handle.is_open());
        assert!(handle.close().is_ok());
        assert_eq!(engine.closes.get(), 1);
    }

    #[test]
    fn test_failed_close_reaches_engine_once() {
        let mut engine = FakeEngine::new();
        engine.fail_close = true;
        let mut handle = StoreHandle::open_with(&engine, "/wallet").unwrap();

        let err = handle.close().unwrap_err();
        assert!(matches!(err, WalletError::CloseDatabase(_)));
        assert_eq!(err.to_string(), "close failed");

        assert!(handle.close().is_ok());
        drop(handle);
        assert_eq!(engine.closes.get(), 1);
    }

    #[test]
    fn test_open_failure_wraps_engine_error() {
        let mut engine = FakeEngine::new();
        engine.fail_open = true;

        let err = match StoreHandle::open_with(&engine, "/wallet") {
            Ok(_) => panic!("open should fail"),
            Err(e) => e,
        };
        assert!(err.to_string().contains("opening database"));
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(
            source.downcast_ref::<io::Error>().unwrap().kind(),
            io::ErrorKind::PermissionDenied
        );
    }

    #[test]
    fn test_open_can_be_retried_after_failure() {
        let mut engine = FakeEngine::new();
        engine.fail_open = true;
        assert!(StoreHandle::open_with(&engine, "/wallet").is_err());

        engine.fail_open = false;
        let handle = StoreHandle::open_with(&engine, "/wallet").unwrap();
        assert!(handle.is_open());
    }

    #[test]
    fn test_default_handle_close_is_noop() {
        let mut handle: StoreHandle<FakeEngine> = StoreHandle::default();
        assert!(!handle.is_open());
        assert!(handle.path().is_none());
        assert!(handle.close().is_ok());
    }

    #[test]
    fn test_read_write_through_handle() {
        let engine = FakeEngine::new();
        let handle = StoreHandle::open_with(&engine, "/wallet").unwrap();

        assert_eq!(handle.insert("k", "v1").unwrap(), None);
        assert_eq!(handle.insert("k", "v2").unwrap(), Some(b"v1".to_vec()));
        assert_eq!(handle.get("k").unwrap(), Some(b"v2".to_vec()));
        assert!(handle.contains_key("k").unwrap());
        assert_eq!(handle.remove("k").unwrap(), Some(b"v2".to_vec()));
        assert!(!handle.contains_key("k").unwrap());
        assert!(handle.flush().is_ok());
    }

    #[test]
    fn test_closed_handle_rejects_access() {
        let engine = FakeEngine::new();
        let mut handle = StoreHandle::open_with(&engine, "/wallet").unwrap();
        handle.close().unwrap();

        assert!(matches!(handle.get("k"), Err(WalletError::StoreClosed)));
        assert!(matches!(handle.insert("k", "v"), Err(WalletError::StoreClosed)));
        assert!(matches!(handle.flush(), Err(WalletError::StoreClosed)));
        // the path of the last open is kept for diagnostics
        assert_eq!(handle.path(), Some(Path::new("/wallet")));
    }

    #[test]
    fn test_drop_closes_open_handle() {
        let engine = FakeEngine::new();
        {
            let _handle = StoreHandle::open_with(&engine, "/wallet").unwrap();
        }
        assert_eq!(engine.closes.get(), 1);
    }
}
