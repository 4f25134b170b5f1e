//! Read-only snapshot of a finalized session.

use crate::domain::{
    AlignedBounds, FixedPointFee, InitialPrice, LiquidityAmounts, LiquidityResult, TickSpacing,
    TokenPair,
};

/// Every parameter needed to initialize a pool and provision its first
/// position.
///
/// Produced by [`PoolSession::finalize`](super::PoolSession::finalize);
/// this is the single artifact glue code reads when exporting values to a
/// deployment tool.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PoolParameters {
    tokens: TokenPair,
    amounts: LiquidityAmounts,
    initial_price: InitialPrice,
    fee: FixedPointFee,
    tick_spacing: TickSpacing,
    bounds: AlignedBounds,
    liquidity: LiquidityResult,
}

impl PoolParameters {
    pub(crate) const fn new(
        tokens: TokenPair,
        amounts: LiquidityAmounts,
        initial_price: InitialPrice,
        fee: FixedPointFee,
        tick_spacing: TickSpacing,
        bounds: AlignedBounds,
        liquidity: LiquidityResult,
    ) -> Self {
        Self {
            tokens,
            amounts,
            initial_price,
            fee,
            tick_spacing,
            bounds,
            liquidity,
        }
    }

    /// The ordered token pair.
    #[must_use]
    pub const fn tokens(&self) -> TokenPair {
        self.tokens
    }

    /// The deposit amounts, in token0/token1 order.
    #[must_use]
    pub const fn amounts(&self) -> LiquidityAmounts {
        self.amounts
    }

    /// Initial price, sqrt ratio and tick.
    #[must_use]
    pub const fn initial_price(&self) -> InitialPrice {
        self.initial_price
    }

    /// The Q128 fee.
    #[must_use]
    pub const fn fee(&self) -> FixedPointFee {
        self.fee
    }

    /// The tick spacing.
    #[must_use]
    pub const fn tick_spacing(&self) -> TickSpacing {
        self.tick_spacing
    }

    /// Raw and aligned range ticks, plus any out-of-range warning.
    #[must_use]
    pub const fn bounds(&self) -> AlignedBounds {
        self.bounds
    }

    /// Liquidity implied by each deposit and the binding minimum.
    #[must_use]
    pub const fn liquidity(&self) -> LiquidityResult {
        self.liquidity
    }
}
