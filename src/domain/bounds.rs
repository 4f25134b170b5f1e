//! Price ranges and their tick-aligned form.

use core::fmt;

use super::Tick;
use crate::error::PoolError;

/// A price range `[lower, upper]` for liquidity provision.
///
/// # Invariants
///
/// - `0 < lower < upper`, both finite.
///
/// # Examples
///
/// ```
/// use ekubo_pool_math::domain::PriceBounds;
/// use ekubo_pool_math::error::PoolError;
///
/// assert!(PriceBounds::new(1.5, 2.5).is_ok());
/// assert_eq!(PriceBounds::new(2.5, 1.5), Err(PoolError::InvertedBounds));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawPriceBounds"))]
pub struct PriceBounds {
    lower: f64,
    upper: f64,
}

impl PriceBounds {
    /// Creates a validated price range.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvertedBounds`] if `lower >= upper`.
    /// - [`PoolError::InvalidPrice`] if either bound is not finite or
    ///   `lower <= 0`.
    pub fn new(lower: f64, upper: f64) -> crate::error::Result<Self> {
        if lower >= upper {
            return Err(PoolError::InvertedBounds);
        }
        if !lower.is_finite() || !upper.is_finite() {
            return Err(PoolError::InvalidPrice("price bounds must be finite"));
        }
        if lower <= 0.0 {
            return Err(PoolError::InvalidPrice("lower price must be positive"));
        }
        Ok(Self { lower, upper })
    }

    /// Returns the lower price.
    #[must_use]
    pub const fn lower(&self) -> f64 {
        self.lower
    }

    /// Returns the upper price.
    #[must_use]
    pub const fn upper(&self) -> f64 {
        self.upper
    }

    /// Returns `true` if `price` lies within the closed range.
    #[must_use]
    pub fn contains(&self, price: f64) -> bool {
        price >= self.lower && price <= self.upper
    }

    /// Classifies `current_price` against the range.
    ///
    /// Returns `None` when the price is inside the range.
    #[must_use]
    pub fn out_of_range(&self, current_price: f64) -> Option<OutOfRangeWarning> {
        if current_price < self.lower {
            Some(OutOfRangeWarning::BelowRange {
                current_price,
                lower_price: self.lower,
            })
        } else if current_price > self.upper {
            Some(OutOfRangeWarning::AboveRange {
                current_price,
                upper_price: self.upper,
            })
        } else {
            None
        }
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawPriceBounds {
    lower: f64,
    upper: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPriceBounds> for PriceBounds {
    type Error = PoolError;

    fn try_from(raw: RawPriceBounds) -> Result<Self, Self::Error> {
        Self::new(raw.lower, raw.upper)
    }
}

/// Non-fatal signal that the pool's current price lies outside a range.
///
/// Single-sided liquidity is legitimate, so this is informational only:
/// below the range a position holds only token0, above it only token1.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum OutOfRangeWarning {
    /// The current price is below the lower bound.
    BelowRange {
        /// Pool price the range was checked against.
        current_price: f64,
        /// Lower bound of the range.
        lower_price: f64,
    },
    /// The current price is above the upper bound.
    AboveRange {
        /// Pool price the range was checked against.
        current_price: f64,
        /// Upper bound of the range.
        upper_price: f64,
    },
}

impl fmt::Display for OutOfRangeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BelowRange {
                current_price,
                lower_price,
            } => write!(
                f,
                "current price {current_price} is below the lower bound {lower_price}"
            ),
            Self::AboveRange {
                current_price,
                upper_price,
            } => write!(
                f,
                "current price {current_price} is above the upper bound {upper_price}"
            ),
        }
    }
}

/// A price range converted to ticks, before and after spacing alignment.
///
/// Produced by [`align_bounds`](crate::math::align_bounds).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AlignedBounds {
    prices: PriceBounds,
    raw_lower: Tick,
    raw_upper: Tick,
    lower: Tick,
    upper: Tick,
    warning: Option<OutOfRangeWarning>,
}

impl AlignedBounds {
    pub(crate) const fn new(
        prices: PriceBounds,
        raw: (Tick, Tick),
        aligned: (Tick, Tick),
        warning: Option<OutOfRangeWarning>,
    ) -> Self {
        Self {
            prices,
            raw_lower: raw.0,
            raw_upper: raw.1,
            lower: aligned.0,
            upper: aligned.1,
            warning,
        }
    }

    /// Returns the price range the ticks were derived from.
    #[must_use]
    pub const fn prices(&self) -> PriceBounds {
        self.prices
    }

    /// Returns the unaligned `(lower, upper)` ticks.
    #[must_use]
    pub const fn raw_ticks(&self) -> (Tick, Tick) {
        (self.raw_lower, self.raw_upper)
    }

    /// Returns the aligned lower tick.
    #[must_use]
    pub const fn lower_tick(&self) -> Tick {
        self.lower
    }

    /// Returns the aligned upper tick.
    #[must_use]
    pub const fn upper_tick(&self) -> Tick {
        self.upper
    }

    /// Returns the out-of-range warning, if any.
    #[must_use]
    pub const fn warning(&self) -> Option<OutOfRangeWarning> {
        self.warning
    }

    /// Returns `true` if both aligned ticks are multiples of `spacing`.
    #[must_use]
    pub const fn is_aligned_to(&self, spacing: u32) -> bool {
        self.lower.is_aligned_to(spacing) && self.upper.is_aligned_to(spacing)
    }
}
