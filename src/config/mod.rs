//! Configuration management
//!
//! Holds the few settings the wallet core reads, currently only where the
//! store directory lives (`WALLET_DB_PATH`).

pub mod settings;

pub use settings::{Config, GLOBAL_CONFIG};
