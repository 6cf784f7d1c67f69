//! # Wallet Core - persistence and address checks for the wallet
//!
//! The small layer the rest of the wallet builds on:
//!
//! - `wallet/`: address type tags and the closed set of recognized prefixes
//! - `storage/`: the owning handle around the embedded sled database
//! - `config/`: where the store lives on disk
//! - `error/`: the error type every fallible call returns
//! - `cli/`: operator commands for the `wallet-core` binary
//!
//! A store handle is opened against a directory, used, and closed once:
//!
//! ```no_run
//! use wallet_core::StoreHandle;
//!
//! let mut store = StoreHandle::open("data/wallet")?;
//! store.insert("last_sync", "42")?;
//! store.close()?;
//! # Ok::<(), wallet_core::WalletError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod storage;
pub mod wallet;

// Re-export commonly used types for convenience
pub use cli::{check_store, Command, Opt};
pub use config::{Config, GLOBAL_CONFIG};
pub use error::{Result, WalletError};
pub use storage::{SledEngine, StoreConnection, StoreEngine, StoreHandle};
pub use wallet::{AddressType, ADDRESS_PREFIX_LEN};
