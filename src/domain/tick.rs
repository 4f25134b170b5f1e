//! Discrete price point on the `1.000001` tick grid.

use core::fmt;

use crate::error::PoolError;

/// Base of the tick-price exponential: `price = TICK_BASE^tick`.
///
/// Shared by tick-spacing encoding and price/tick conversion so that both
/// measure distances on the same grid.
pub const TICK_BASE: f64 = 1.000_001;

/// Largest tick magnitude, `floor(log_{1.000001}(2^128))`.
///
/// Prices beyond `1.000001^±MAX_TICK_MAGNITUDE` do not fit the protocol's
/// Q128 sqrt-ratio domain.
pub const MAX_TICK_MAGNITUDE: i32 = 88_722_883;

/// A signed index on the tick grid where `price = 1.000001^tick`.
///
/// Valid indices range from [`MIN`](Self::MIN) (`-88722883`) to
/// [`MAX`](Self::MAX) (`88722883`).
///
/// # Examples
///
/// ```
/// use ekubo_pool_math::domain::Tick;
///
/// let tick = Tick::new(693_147);
/// assert!(tick.is_ok());
/// assert!(Tick::new(100_000_000).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "i32", into = "i32"))]
pub struct Tick(i32);

impl Tick {
    /// Minimum valid tick.
    pub const MIN: Self = Self(-MAX_TICK_MAGNITUDE);

    /// Maximum valid tick.
    pub const MAX: Self = Self(MAX_TICK_MAGNITUDE);

    /// Tick at price `1.0`.
    pub const ZERO: Self = Self(0);

    /// Creates a new `Tick` with range validation.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidPrice`] if `value` lies outside
    /// `[-88722883, 88722883]`; such a tick has no representable price.
    pub const fn new(value: i32) -> crate::error::Result<Self> {
        if value < -MAX_TICK_MAGNITUDE || value > MAX_TICK_MAGNITUDE {
            return Err(PoolError::InvalidPrice(
                "tick out of range [-88722883, 88722883]",
            ));
        }
        Ok(Self(value))
    }

    /// Returns the underlying index.
    #[must_use]
    pub const fn get(&self) -> i32 {
        self.0
    }

    /// Returns `true` if the tick is a multiple of `spacing`.
    ///
    /// A spacing of zero aligns nothing.
    #[must_use]
    pub const fn is_aligned_to(&self, spacing: u32) -> bool {
        spacing != 0 && (self.0 as i64) % (spacing as i64) == 0
    }
}

impl TryFrom<i32> for Tick {
    type Error = PoolError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Tick> for i32 {
    fn from(tick: Tick) -> Self {
        tick.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
