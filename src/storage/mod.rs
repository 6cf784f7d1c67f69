//! Data storage and persistence
//!
//! This module owns the wallet's connection to its embedded key-value store.
//! The engine sits behind [`StoreEngine`] so callers only ever see the handle.

pub mod engine;
pub mod store_handle;

pub use engine::{SledEngine, StoreConnection, StoreEngine};
pub use store_handle::StoreHandle;
