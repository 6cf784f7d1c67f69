use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Length of the prefix that identifies an address convention
pub const ADDRESS_PREFIX_LEN: usize = 2;

/// Tag naming the convention an account address follows.
///
/// Any string is a well-formed tag; only the prefixes in [`AddressType::ALL`]
/// are recognized by [`AddressType::is_valid`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressType(Cow<'static, str>);

impl AddressType {
    pub const F1: AddressType = AddressType(Cow::Borrowed("f1"));
    pub const F4: AddressType = AddressType(Cow::Borrowed("f4"));
    /// Hex / Ethereum-style addresses
    pub const ETH: AddressType = AddressType(Cow::Borrowed("0x"));

    /// The closed set of recognized address types
    pub const ALL: [AddressType; 3] = [Self::F1, Self::F4, Self::ETH];

    pub fn new(tag: impl Into<String>) -> AddressType {
        AddressType(Cow::Owned(tag.into()))
    }

    /// Takes the type tag off the front of a full address string.
    /// Addresses shorter than the prefix yield the whole string.
    pub fn from_address(address: &str) -> AddressType {
        let end = address
            .char_indices()
            .nth(ADDRESS_PREFIX_LEN)
            .map(|(idx, _)| idx)
            .unwrap_or(address.len());
        AddressType::new(&address[..end])
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Exact, case-sensitive membership in the recognized set
    pub fn is_valid(&self) -> bool {
        matches!(self.as_str(), "f1" | "f4" | "0x")
    }
}

impl fmt::Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AddressType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(AddressType::new(s))
    }
}

impl From<&str> for AddressType {
    fn from(tag: &str) -> Self {
        AddressType::new(tag)
    }
}

impl From<String> for AddressType {
    fn from(tag: String) -> Self {
        AddressType(Cow::Owned(tag))
    }
}

impl AsRef<str> for AddressType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
