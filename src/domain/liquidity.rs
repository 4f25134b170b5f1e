//! Deposit amounts and the liquidity they imply.

use core::fmt;

use crate::error::PoolError;

/// The token quantities a provider intends to deposit.
///
/// # Invariants
///
/// - Both amounts are finite and strictly positive.
///
/// # Examples
///
/// ```
/// use ekubo_pool_math::domain::LiquidityAmounts;
///
/// assert!(LiquidityAmounts::new(1_000.0, 2_000.0).is_ok());
/// assert!(LiquidityAmounts::new(0.0, 2_000.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawLiquidityAmounts"))]
pub struct LiquidityAmounts {
    token0: f64,
    token1: f64,
}

impl LiquidityAmounts {
    /// Creates validated deposit amounts.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidAmounts`] if either amount is not finite
    /// or not strictly positive.
    pub fn new(token0: f64, token1: f64) -> crate::error::Result<Self> {
        if !token0.is_finite() || !token1.is_finite() {
            return Err(PoolError::InvalidAmounts("token amounts must be finite"));
        }
        if token0 <= 0.0 || token1 <= 0.0 {
            return Err(PoolError::InvalidAmounts("token amounts must be positive"));
        }
        Ok(Self { token0, token1 })
    }

    /// Returns the token0 amount.
    #[must_use]
    pub const fn token0(&self) -> f64 {
        self.token0
    }

    /// Returns the token1 amount.
    #[must_use]
    pub const fn token1(&self) -> f64 {
        self.token1
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawLiquidityAmounts {
    token0: f64,
    token1: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawLiquidityAmounts> for LiquidityAmounts {
    type Error = PoolError;

    fn try_from(raw: RawLiquidityAmounts) -> Result<Self, Self::Error> {
        Self::new(raw.token0, raw.token1)
    }
}

/// Which deposit limits the provisioned liquidity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BindingToken {
    /// The token0 deposit yields the smaller liquidity.
    Token0,
    /// The token1 deposit yields the smaller liquidity.
    Token1,
}

/// Liquidity implied by each deposit over a price range.
///
/// `min` always equals `min(from_token0, from_token1)`: the smaller figure
/// binds the liquidity that can actually be provisioned.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LiquidityResult {
    from_token0: f64,
    from_token1: f64,
    min: f64,
}

impl LiquidityResult {
    pub(crate) fn new(from_token0: f64, from_token1: f64) -> Self {
        Self {
            from_token0,
            from_token1,
            min: from_token0.min(from_token1),
        }
    }

    /// Liquidity implied by the token0 deposit.
    #[must_use]
    pub const fn from_token0(&self) -> f64 {
        self.from_token0
    }

    /// Liquidity implied by the token1 deposit.
    #[must_use]
    pub const fn from_token1(&self) -> f64 {
        self.from_token1
    }

    /// The binding (minimum) liquidity.
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Returns the deposit that limits the liquidity. Ties go to token0.
    #[must_use]
    pub fn binding_token(&self) -> BindingToken {
        if self.from_token0 <= self.from_token1 {
            BindingToken::Token0
        } else {
            BindingToken::Token1
        }
    }
}

impl fmt::Display for LiquidityResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Liquidity(token0={}, token1={}, min={})",
            self.from_token0, self.from_token1, self.min
        )
    }
}
