//! Token identifiers parsed from hexadecimal strings.

use core::fmt;
use core::str::FromStr;

use crate::error::PoolError;

/// Maximum number of hex digits in an address (256 bits).
const MAX_HEX_DIGITS: usize = 64;

/// A token identifier: a 256-bit unsigned integer written in hex.
///
/// Stored as 32 big-endian bytes, so the derived ordering is the numeric
/// ordering of the address. Leading zeros and the `0x` prefix carry no
/// meaning: `0x0abc` and `abc` are the same address.
///
/// # Examples
///
/// ```
/// use ekubo_pool_math::domain::TokenAddress;
///
/// let a = TokenAddress::parse("0x0abc").expect("valid hex");
/// let b = TokenAddress::parse("ABC").expect("valid hex");
/// assert_eq!(a, b);
/// assert!(TokenAddress::parse("0xzz").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct TokenAddress([u8; 32]);

impl TokenAddress {
    /// Parses a hexadecimal address with an optional `0x`/`0X` prefix.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidAddressFormat`] if the string has no
    /// digits, more than 64 digits, or any non-hex character.
    pub fn parse(input: &str) -> crate::error::Result<Self> {
        let trimmed = input.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        if digits.is_empty() {
            return Err(PoolError::InvalidAddressFormat(
                "address has no hex digits",
            ));
        }
        if digits.len() > MAX_HEX_DIGITS {
            return Err(PoolError::InvalidAddressFormat(
                "address exceeds 64 hex digits",
            ));
        }

        let padded = format!("{digits:0>64}");
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(padded, &mut bytes).map_err(|_| {
            PoolError::InvalidAddressFormat("address contains non-hex characters")
        })?;
        Ok(Self(bytes))
    }

    /// Creates a `TokenAddress` from 32 big-endian bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying big-endian bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }
}

impl FromStr for TokenAddress {
    type Err = PoolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TokenAddress {
    type Error = PoolError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TokenAddress> for String {
    fn from(value: TokenAddress) -> Self {
        value.to_string()
    }
}

impl fmt::Display for TokenAddress {
    /// Formats as `0x` followed by 64 lowercase hex digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}
