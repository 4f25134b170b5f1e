//! Configuration for a full pool setup run.

use crate::domain::{FixedPointFee, LiquidityAmounts, PriceBounds, TickSpacing, TokenPair};

/// All inputs needed to derive a pool's deployment parameters.
///
/// Amounts are given in token0/token1 order, i.e. after the two addresses
/// have been sorted. `token_a` and `token_b` may be passed in any order.
///
/// # Validation
///
/// - Both addresses parse and differ.
/// - Both amounts are finite and positive.
/// - `0 <= fee_percent < 100`.
/// - `tick_spacing_percent > 0`.
/// - `0 < lower_price < upper_price`.
///
/// Validation reuses the domain constructors, so a config that passes
/// [`validate`](Self::validate) fails a setup run only on range limits
/// (prices or ratios beyond the tick range).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawPoolSetupConfig"))]
pub struct PoolSetupConfig {
    token_a: String,
    token_b: String,
    token0_amount: f64,
    token1_amount: f64,
    fee_percent: f64,
    tick_spacing_percent: f64,
    lower_price: f64,
    upper_price: f64,
}

impl PoolSetupConfig {
    /// Creates a new `PoolSetupConfig`.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by [`validate`](Self::validate).
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        token_a: impl Into<String>,
        token_b: impl Into<String>,
        token0_amount: f64,
        token1_amount: f64,
        fee_percent: f64,
        tick_spacing_percent: f64,
        lower_price: f64,
        upper_price: f64,
    ) -> crate::error::Result<Self> {
        let config = Self {
            token_a: token_a.into(),
            token_b: token_b.into(),
            token0_amount,
            token1_amount,
            fee_percent,
            tick_spacing_percent,
            lower_price,
            upper_price,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidAddressFormat`](crate::error::PoolError::InvalidAddressFormat)
    ///   or [`PoolError::DegenerateTokenPair`](crate::error::PoolError::DegenerateTokenPair)
    ///   for bad addresses.
    /// - [`PoolError::InvalidAmounts`](crate::error::PoolError::InvalidAmounts).
    /// - [`PoolError::InvalidFeePercent`](crate::error::PoolError::InvalidFeePercent).
    /// - [`PoolError::InvalidSpacingPercent`](crate::error::PoolError::InvalidSpacingPercent).
    /// - [`PoolError::InvertedBounds`](crate::error::PoolError::InvertedBounds) or
    ///   [`PoolError::InvalidPrice`](crate::error::PoolError::InvalidPrice) for the range.
    pub fn validate(&self) -> crate::error::Result<()> {
        TokenPair::order(&self.token_a, &self.token_b)?;
        LiquidityAmounts::new(self.token0_amount, self.token1_amount)?;
        FixedPointFee::from_percent(self.fee_percent)?;
        TickSpacing::from_percent(self.tick_spacing_percent)?;
        PriceBounds::new(self.lower_price, self.upper_price)?;
        Ok(())
    }

    /// Returns the first address as given.
    #[must_use]
    pub fn token_a(&self) -> &str {
        &self.token_a
    }

    /// Returns the second address as given.
    #[must_use]
    pub fn token_b(&self) -> &str {
        &self.token_b
    }

    /// Returns the token0 deposit.
    #[must_use]
    pub const fn token0_amount(&self) -> f64 {
        self.token0_amount
    }

    /// Returns the token1 deposit.
    #[must_use]
    pub const fn token1_amount(&self) -> f64 {
        self.token1_amount
    }

    /// Returns the fee in percent.
    #[must_use]
    pub const fn fee_percent(&self) -> f64 {
        self.fee_percent
    }

    /// Returns the tick spacing in percent.
    #[must_use]
    pub const fn tick_spacing_percent(&self) -> f64 {
        self.tick_spacing_percent
    }

    /// Returns the lower price bound.
    #[must_use]
    pub const fn lower_price(&self) -> f64 {
        self.lower_price
    }

    /// Returns the upper price bound.
    #[must_use]
    pub const fn upper_price(&self) -> f64 {
        self.upper_price
    }
}

/// Unvalidated wire shape of [`PoolSetupConfig`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawPoolSetupConfig {
    token_a: String,
    token_b: String,
    token0_amount: f64,
    token1_amount: f64,
    fee_percent: f64,
    tick_spacing_percent: f64,
    lower_price: f64,
    upper_price: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPoolSetupConfig> for PoolSetupConfig {
    type Error = crate::error::PoolError;

    fn try_from(raw: RawPoolSetupConfig) -> Result<Self, Self::Error> {
        Self::new(
            raw.token_a,
            raw.token_b,
            raw.token0_amount,
            raw.token1_amount,
            raw.fee_percent,
            raw.tick_spacing_percent,
            raw.lower_price,
            raw.upper_price,
        )
    }
}
