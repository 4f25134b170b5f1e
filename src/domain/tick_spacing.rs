//! Logarithmic tick-spacing encoding.

use core::fmt;

use super::TICK_BASE;
use crate::error::PoolError;

/// Largest tick spacing the protocol accepts (about a 42.6% price step).
pub const MAX_TICK_SPACING: u32 = 354_892;

/// Minimum distance, in ticks, between two usable position boundaries.
///
/// Always within `1..=MAX_TICK_SPACING`.
///
/// # Floor-to-one policy
///
/// [`from_percent`](Self::from_percent) floors
/// `log_{1.000001}(1 + percent / 100)`. A positive percentage small enough
/// to floor to zero yields a spacing of `1`, the finest grid, rather than an
/// error.
///
/// # Examples
///
/// ```
/// use ekubo_pool_math::domain::TickSpacing;
///
/// let spacing = TickSpacing::from_percent(0.1).expect("positive percent");
/// assert_eq!(spacing.get(), 999);
/// assert_eq!(TickSpacing::from_percent(1e-9).map(|s| s.get()), Ok(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u32", into = "u32"))]
pub struct TickSpacing(u32);

impl TickSpacing {
    /// The finest spacing.
    pub const ONE: Self = Self(1);

    /// The coarsest spacing.
    pub const MAX: Self = Self(MAX_TICK_SPACING);

    /// Wraps a raw spacing.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidSpacingPercent`] if `value` is zero or
    /// above [`MAX_TICK_SPACING`].
    pub const fn new(value: u32) -> crate::error::Result<Self> {
        if value == 0 {
            return Err(PoolError::InvalidSpacingPercent(
                "tick spacing must be at least 1",
            ));
        }
        if value > MAX_TICK_SPACING {
            return Err(PoolError::InvalidSpacingPercent(
                "tick spacing exceeds protocol maximum 354892",
            ));
        }
        Ok(Self(value))
    }

    /// Encodes a spacing percentage:
    /// `floor(log_{1.000001}(1 + spacing_percent / 100))`, at least `1`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidSpacingPercent`] if the percentage is not
    /// finite, not positive, or encodes to more than [`MAX_TICK_SPACING`].
    ///
    /// The upper limit is the pool contract's own maximum spacing, not a
    /// property of the log encoding: percentages above roughly 42.6 (for
    /// example `50.0`, which would encode to 405465) are rejected because
    /// the protocol cannot deploy them.
    pub fn from_percent(spacing_percent: f64) -> crate::error::Result<Self> {
        if !spacing_percent.is_finite() || spacing_percent <= 0.0 {
            return Err(PoolError::InvalidSpacingPercent(
                "spacing percent must be positive",
            ));
        }

        let raw = (spacing_percent / 100.0).ln_1p() / TICK_BASE.ln();
        if raw >= f64::from(MAX_TICK_SPACING) + 1.0 {
            return Err(PoolError::InvalidSpacingPercent(
                "tick spacing exceeds protocol maximum 354892",
            ));
        }

        // raw is finite, positive and below MAX_TICK_SPACING + 1 here.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let floored = raw.floor() as u32;
        Self::new(floored.max(1))
    }

    /// Returns the spacing in ticks.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns the price step of one spacing as a percentage,
    /// `(1.000001^spacing - 1) * 100`.
    #[must_use]
    pub fn as_percent(&self) -> f64 {
        (f64::from(self.0) * TICK_BASE.ln()).exp_m1() * 100.0
    }
}

impl TryFrom<u32> for TickSpacing {
    type Error = PoolError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TickSpacing> for u32 {
    fn from(spacing: TickSpacing) -> Self {
        spacing.0
    }
}

impl fmt::Display for TickSpacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
