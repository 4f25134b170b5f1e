//! Workflow stages of a pool setup session.

use core::fmt;

/// The stage a [`PoolSession`](super::PoolSession) has reached.
///
/// Stages advance strictly forward in declaration order; the derived
/// ordering reflects that (`Stage::Empty < Stage::Finalized`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Stage {
    /// Nothing has been computed.
    #[default]
    Empty,
    /// The token pair is ordered.
    TokensAssigned,
    /// Deposit amounts and the initial price are set.
    AmountsAndInitialPriceSet,
    /// The Q128 fee is set.
    FeeSet,
    /// The tick spacing is set.
    TickSpacingSet,
    /// The price range is converted to aligned ticks.
    BoundsComputed,
    /// The liquidity result is computed.
    LiquidityComputed,
    /// The parameter snapshot has been taken.
    Finalized,
}

impl Stage {
    /// Returns the stage that follows this one, if any.
    #[must_use]
    pub const fn next(&self) -> Option<Self> {
        match self {
            Self::Empty => Some(Self::TokensAssigned),
            Self::TokensAssigned => Some(Self::AmountsAndInitialPriceSet),
            Self::AmountsAndInitialPriceSet => Some(Self::FeeSet),
            Self::FeeSet => Some(Self::TickSpacingSet),
            Self::TickSpacingSet => Some(Self::BoundsComputed),
            Self::BoundsComputed => Some(Self::LiquidityComputed),
            Self::LiquidityComputed => Some(Self::Finalized),
            Self::Finalized => None,
        }
    }

    /// Returns a short snake_case name for logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::TokensAssigned => "tokens_assigned",
            Self::AmountsAndInitialPriceSet => "amounts_and_initial_price_set",
            Self::FeeSet => "fee_set",
            Self::TickSpacingSet => "tick_spacing_set",
            Self::BoundsComputed => "bounds_computed",
            Self::LiquidityComputed => "liquidity_computed",
            Self::Finalized => "finalized",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
