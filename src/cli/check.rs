use crate::error::Result;
use crate::storage::{StoreEngine, StoreHandle};
use log::error;
use std::path::Path;

/// Open the store at `path` and close it again, describing how that went.
///
/// An open failure is returned as an error. A close failure is logged and
/// only weakens the report, since the store did open.
pub fn check_store<E: StoreEngine>(engine: &E, path: &Path) -> Result<String> {
    let mut store = StoreHandle::open_with(engine, path)?;
    let report = match store.close() {
        Ok(()) => format!("Store at {} is usable", path.display()),
        Err(e) => {
            error!("Closing {} failed: {e}", path.display());
            format!("Store at {} opened but did not close cleanly", path.display())
        }
    };
    Ok(report)
}
