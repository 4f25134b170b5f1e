//! Canonically ordered pair of distinct tokens.

use super::TokenAddress;
use crate::error::PoolError;

/// An ordered pair of distinct token addresses.
///
/// The canonical ordering guarantees `token0 < token1` numerically, so
/// `(A, B)` and `(B, A)` produce the same pair.
///
/// # Examples
///
/// ```
/// use ekubo_pool_math::domain::TokenPair;
///
/// let pair = TokenPair::order("0x0275", "0x00ab").expect("distinct tokens");
/// assert_eq!(pair.token0().to_string(), format!("0x{:0>64}", "ab"));
/// assert_eq!(pair, TokenPair::order("0x00ab", "0x0275").expect("distinct tokens"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawTokenPair"))]
pub struct TokenPair {
    token0: TokenAddress,
    token1: TokenAddress,
}

impl TokenPair {
    /// Parses two hex addresses and orders them.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidAddressFormat`] if either address fails to parse.
    /// - [`PoolError::DegenerateTokenPair`] if both have the same value.
    pub fn order(address_a: &str, address_b: &str) -> crate::error::Result<Self> {
        Self::new(TokenAddress::parse(address_a)?, TokenAddress::parse(address_b)?)
    }

    /// Orders two already parsed addresses.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::DegenerateTokenPair`] if both addresses are equal.
    pub fn new(a: TokenAddress, b: TokenAddress) -> crate::error::Result<Self> {
        if a == b {
            return Err(PoolError::DegenerateTokenPair);
        }

        let (token0, token1) = if a < b { (a, b) } else { (b, a) };
        Ok(Self { token0, token1 })
    }

    /// Returns the numerically smaller token.
    #[must_use]
    pub const fn token0(&self) -> TokenAddress {
        self.token0
    }

    /// Returns the numerically larger token.
    #[must_use]
    pub const fn token1(&self) -> TokenAddress {
        self.token1
    }

    /// Returns `true` if the address is one of the two tokens.
    #[must_use]
    pub fn contains(&self, token: &TokenAddress) -> bool {
        self.token0 == *token || self.token1 == *token
    }
}

/// Wire shape of [`TokenPair`]; re-ordered and checked on the way in.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawTokenPair {
    token0: TokenAddress,
    token1: TokenAddress,
}

#[cfg(feature = "serde")]
impl TryFrom<RawTokenPair> for TokenPair {
    type Error = PoolError;

    fn try_from(raw: RawTokenPair) -> Result<Self, Self::Error> {
        Self::new(raw.token0, raw.token1)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    const ADDR_SMALL: &str = "0x00abbd6f1e590eb83addd87ba5ac27960d859b1f17d11a3c1cd6a0006704b141";
    const ADDR_LARGE: &str = "0x0275d08f64e8c9da4aea46168979205d309fdd079c5a5b4df4252df1cb72ab0f";

    fn pair(a: &str, b: &str) -> TokenPair {
        let Ok(p) = TokenPair::order(a, b) else {
            panic!("expected Ok for ({a}, {b})");
        };
        p
    }

    #[test]
    fn smaller_address_becomes_token0() {
        let p = pair(ADDR_SMALL, ADDR_LARGE);
        assert_eq!(p.token0().to_string(), ADDR_SMALL);
        assert_eq!(p.token1().to_string(), ADDR_LARGE);
    }

    #[test]
    fn reversed_input_gives_same_pair() {
        assert_eq!(pair(ADDR_LARGE, ADDR_SMALL), pair(ADDR_SMALL, ADDR_LARGE));
    }

    #[test]
    fn ordering_ignores_digit_count() {
        // "0xff" has fewer digits but a smaller value than "0x0100".
        let p = pair("0x0100", "0xff");
        assert_eq!(p.token0().as_bytes()[31], 0xff);
        assert_eq!(p.token1().as_bytes()[30], 0x01);
    }

    #[test]
    fn rejects_equal_addresses() {
        assert_eq!(
            TokenPair::order(ADDR_SMALL, ADDR_SMALL),
            Err(PoolError::DegenerateTokenPair)
        );
    }

    #[test]
    fn rejects_numerically_equal_spellings() {
        assert_eq!(
            TokenPair::order("0x00ab", "AB"),
            Err(PoolError::DegenerateTokenPair)
        );
    }

    #[test]
    fn propagates_parse_failure() {
        let Err(e) = TokenPair::order("0xnothex", ADDR_LARGE) else {
            panic!("expected Err");
        };
        assert!(matches!(e, PoolError::InvalidAddressFormat(_)));
        assert!(matches!(
            TokenPair::order(ADDR_SMALL, ""),
            Err(PoolError::InvalidAddressFormat(_))
        ));
    }

    #[test]
    fn contains_both_tokens() {
        let p = pair(ADDR_SMALL, ADDR_LARGE);
        assert!(p.contains(&p.token0()));
        assert!(p.contains(&p.token1()));
        assert!(!p.contains(&TokenAddress::from_bytes([0u8; 32])));
    }
}
