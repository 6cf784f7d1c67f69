//! Command-line interface
//!
//! Small operator commands for checking address tags and the wallet store.

pub mod check;
pub mod commands;

pub use check::check_store;
pub use commands::{Command, Opt};
