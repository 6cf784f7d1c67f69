//! Address classification
//!
//! This module keeps the set of recognized address prefixes in one place so
//! address parsing elsewhere in the wallet does not repeat it.

pub mod address;

pub use address::{AddressType, ADDRESS_PREFIX_LEN};
