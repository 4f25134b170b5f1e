//! Pool starting price derived from the deposit ratio.

use super::Tick;

/// The price a pool is initialized at.
///
/// `price` is token1 per token0, `sqrt_ratio = sqrt(price)` and `tick` is the
/// floored tick of that price.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct InitialPrice {
    price: f64,
    sqrt_ratio: f64,
    tick: Tick,
}

impl InitialPrice {
    pub(crate) const fn new(price: f64, sqrt_ratio: f64, tick: Tick) -> Self {
        Self {
            price,
            sqrt_ratio,
            tick,
        }
    }

    /// Token1 per token0.
    #[must_use]
    pub const fn price(&self) -> f64 {
        self.price
    }

    /// Square root of [`price`](Self::price).
    #[must_use]
    pub const fn sqrt_ratio(&self) -> f64 {
        self.sqrt_ratio
    }

    /// Floored tick of the price.
    #[must_use]
    pub const fn tick(&self) -> Tick {
        self.tick
    }
}
