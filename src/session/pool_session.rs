//! Stage-tagged accumulator for one pool setup workflow.

use tracing::{debug, warn};

use super::{PoolParameters, Stage};
use crate::domain::{
    AlignedBounds, FixedPointFee, InitialPrice, LiquidityAmounts, LiquidityResult, TickSpacing,
    TokenPair,
};
use crate::error::PoolError;
use crate::math::{align_price_bounds, initial_from_amounts, liquidity_for};

/// Field names reported by [`PoolError::PrerequisiteMissing`] and
/// [`PoolError::StageAlreadyCompleted`].
mod field {
    pub(super) const TOKENS: &str = "tokens";
    pub(super) const AMOUNTS: &str = "amounts";
    pub(super) const FEE: &str = "fee";
    pub(super) const TICK_SPACING: &str = "tick_spacing";
    pub(super) const BOUNDS: &str = "bounds";
    pub(super) const LIQUIDITY: &str = "liquidity";
}

/// Returns the value of a prerequisite field or names it as missing.
fn require<T: Copy>(value: Option<T>, name: &'static str) -> crate::error::Result<T> {
    value.ok_or(PoolError::PrerequisiteMissing(name))
}

/// Fails if a field has already been written.
fn ensure_unset<T>(value: Option<&T>, name: &'static str) -> crate::error::Result<()> {
    match value {
        Some(_) => Err(PoolError::StageAlreadyCompleted(name)),
        None => Ok(()),
    }
}

/// Accumulates the outputs of every setup step for one pool.
///
/// Steps must run in order; each one checks that the fields it depends on
/// are present and fails with [`PoolError::PrerequisiteMissing`] otherwise.
/// Every field is written exactly once, and a step that fails leaves the
/// session untouched.
///
/// | Step | Requires | Stage after |
/// |------|----------|-------------|
/// | [`assign_tokens`](Self::assign_tokens) | nothing | [`Stage::TokensAssigned`] |
/// | [`set_amounts`](Self::set_amounts) | `tokens` | [`Stage::AmountsAndInitialPriceSet`] |
/// | [`set_fee`](Self::set_fee) | `amounts` | [`Stage::FeeSet`] |
/// | [`set_tick_spacing`](Self::set_tick_spacing) | `fee` | [`Stage::TickSpacingSet`] |
/// | [`compute_bounds`](Self::compute_bounds) | `amounts`, `tick_spacing` | [`Stage::BoundsComputed`] |
/// | [`compute_liquidity`](Self::compute_liquidity) | `amounts`, `bounds` | [`Stage::LiquidityComputed`] |
/// | [`finalize`](Self::finalize) | `liquidity` | [`Stage::Finalized`] |
///
/// Mutation takes `&mut self`; sharing a session across threads needs a
/// caller-owned lock.
///
/// # Examples
///
/// ```
/// use ekubo_pool_math::error::PoolError;
/// use ekubo_pool_math::session::{PoolSession, Stage};
///
/// let mut session = PoolSession::new();
/// assert_eq!(
///     session.compute_bounds(1.5, 2.5),
///     Err(PoolError::PrerequisiteMissing("amounts"))
/// );
///
/// session.assign_tokens("0x0275", "0x00ab")?;
/// session.set_amounts(1_000.0, 2_000.0)?;
/// session.set_fee(0.3)?;
/// session.set_tick_spacing(0.1)?;
/// session.compute_bounds(1.5, 2.5)?;
/// session.compute_liquidity()?;
/// let params = session.finalize()?;
///
/// assert_eq!(session.stage(), Stage::Finalized);
/// assert_eq!(params.initial_price().tick().get(), 693_147);
/// assert_eq!(params.tick_spacing().get(), 999);
/// # Ok::<(), PoolError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PoolSession {
    stage: Stage,
    tokens: Option<TokenPair>,
    amounts: Option<LiquidityAmounts>,
    initial_price: Option<InitialPrice>,
    fee: Option<FixedPointFee>,
    tick_spacing: Option<TickSpacing>,
    bounds: Option<AlignedBounds>,
    liquidity: Option<LiquidityResult>,
}

impl PoolSession {
    /// Creates an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn advance(&mut self, to: Stage) {
        debug!(from = %self.stage, to = %to, "pool session advanced");
        self.stage = to;
    }

    /// Orders the two token addresses.
    ///
    /// # Errors
    ///
    /// - [`PoolError::StageAlreadyCompleted`] if tokens are already assigned.
    /// - [`PoolError::InvalidAddressFormat`] / [`PoolError::DegenerateTokenPair`]
    ///   from [`TokenPair::order`].
    pub fn assign_tokens(
        &mut self,
        address_a: &str,
        address_b: &str,
    ) -> crate::error::Result<TokenPair> {
        ensure_unset(self.tokens.as_ref(), field::TOKENS)?;

        let pair = TokenPair::order(address_a, address_b)?;
        debug!(token0 = %pair.token0(), token1 = %pair.token1(), "tokens assigned");

        self.tokens = Some(pair);
        self.advance(Stage::TokensAssigned);
        Ok(pair)
    }

    /// Stores the deposit amounts, in token0/token1 order, and derives the
    /// initial price `token1_amount / token0_amount`.
    ///
    /// # Errors
    ///
    /// - [`PoolError::PrerequisiteMissing`]`("tokens")`.
    /// - [`PoolError::StageAlreadyCompleted`]`("amounts")`.
    /// - [`PoolError::InvalidAmounts`] if either amount is not positive.
    /// - [`PoolError::InvalidPrice`] if the ratio maps beyond the tick range.
    pub fn set_amounts(
        &mut self,
        token0_amount: f64,
        token1_amount: f64,
    ) -> crate::error::Result<InitialPrice> {
        require(self.tokens, field::TOKENS)?;
        ensure_unset(self.amounts.as_ref(), field::AMOUNTS)?;

        let amounts = LiquidityAmounts::new(token0_amount, token1_amount)?;
        let initial = initial_from_amounts(amounts.token1(), amounts.token0())?;
        debug!(
            price = initial.price(),
            sqrt_ratio = initial.sqrt_ratio(),
            tick = initial.tick().get(),
            "initial price derived"
        );

        self.amounts = Some(amounts);
        self.initial_price = Some(initial);
        self.advance(Stage::AmountsAndInitialPriceSet);
        Ok(initial)
    }

    /// Encodes and stores the fee.
    ///
    /// # Errors
    ///
    /// - [`PoolError::PrerequisiteMissing`]`("amounts")`.
    /// - [`PoolError::StageAlreadyCompleted`]`("fee")`.
    /// - [`PoolError::InvalidFeePercent`] from [`FixedPointFee::from_percent`].
    pub fn set_fee(&mut self, fee_percent: f64) -> crate::error::Result<FixedPointFee> {
        require(self.amounts, field::AMOUNTS)?;
        ensure_unset(self.fee.as_ref(), field::FEE)?;

        let fee = FixedPointFee::from_percent(fee_percent)?;
        debug!(fee_percent, fee = %fee, "fee encoded");

        self.fee = Some(fee);
        self.advance(Stage::FeeSet);
        Ok(fee)
    }

    /// Encodes and stores the tick spacing.
    ///
    /// # Errors
    ///
    /// - [`PoolError::PrerequisiteMissing`]`("fee")`.
    /// - [`PoolError::StageAlreadyCompleted`]`("tick_spacing")`.
    /// - [`PoolError::InvalidSpacingPercent`] from [`TickSpacing::from_percent`].
    pub fn set_tick_spacing(&mut self, spacing_percent: f64) -> crate::error::Result<TickSpacing> {
        require(self.fee, field::FEE)?;
        ensure_unset(self.tick_spacing.as_ref(), field::TICK_SPACING)?;

        let spacing = TickSpacing::from_percent(spacing_percent)?;
        debug!(spacing_percent, tick_spacing = spacing.get(), "tick spacing encoded");

        self.tick_spacing = Some(spacing);
        self.advance(Stage::TickSpacingSet);
        Ok(spacing)
    }

    /// Converts the price range to ticks aligned to the stored spacing.
    ///
    /// The initial price is checked against the range; an out-of-range
    /// initial price is reported on the result and logged, never rejected.
    ///
    /// # Errors
    ///
    /// - [`PoolError::PrerequisiteMissing`]`("amounts")`, then
    ///   `("tick_spacing")`.
    /// - [`PoolError::StageAlreadyCompleted`]`("bounds")`.
    /// - [`PoolError::InvertedBounds`] if `lower_price >= upper_price` or
    ///   both ends align to the same tick.
    /// - [`PoolError::InvalidPrice`] if a bound is invalid.
    pub fn compute_bounds(
        &mut self,
        lower_price: f64,
        upper_price: f64,
    ) -> crate::error::Result<AlignedBounds> {
        let initial = require(self.initial_price, field::AMOUNTS)?;
        let spacing = require(self.tick_spacing, field::TICK_SPACING)?;
        ensure_unset(self.bounds.as_ref(), field::BOUNDS)?;

        let prices = crate::domain::PriceBounds::new(lower_price, upper_price)?;
        let bounds = align_price_bounds(prices, spacing, Some(initial.price()))?;
        let (raw_lower, raw_upper) = bounds.raw_ticks();
        debug!(
            raw_lower = raw_lower.get(),
            raw_upper = raw_upper.get(),
            lower_tick = bounds.lower_tick().get(),
            upper_tick = bounds.upper_tick().get(),
            tick_spacing = spacing.get(),
            "price bounds aligned"
        );
        if let Some(warning) = bounds.warning() {
            warn!(%warning, "initial price outside liquidity range");
        }

        self.bounds = Some(bounds);
        self.advance(Stage::BoundsComputed);
        Ok(bounds)
    }

    /// Computes the liquidity of the stored amounts over the stored range.
    ///
    /// # Errors
    ///
    /// - [`PoolError::PrerequisiteMissing`]`("amounts")`, then `("bounds")`.
    /// - [`PoolError::StageAlreadyCompleted`]`("liquidity")`.
    /// - Errors from [`liquidity_for`].
    pub fn compute_liquidity(&mut self) -> crate::error::Result<LiquidityResult> {
        let amounts = require(self.amounts, field::AMOUNTS)?;
        let bounds = require(self.bounds, field::BOUNDS)?;
        ensure_unset(self.liquidity.as_ref(), field::LIQUIDITY)?;

        let liquidity = liquidity_for(&amounts, &bounds.prices())?;
        debug!(
            from_token0 = liquidity.from_token0(),
            from_token1 = liquidity.from_token1(),
            min = liquidity.min(),
            "liquidity computed"
        );

        self.liquidity = Some(liquidity);
        self.advance(Stage::LiquidityComputed);
        Ok(liquidity)
    }

    /// Takes the read-only parameter snapshot.
    ///
    /// Calling it again on a finalized session returns the same snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::PrerequisiteMissing`]`("liquidity")` before
    /// liquidity is computed.
    pub fn finalize(&mut self) -> crate::error::Result<PoolParameters> {
        require(self.liquidity, field::LIQUIDITY)?;
        let params = self.snapshot()?;
        if self.stage != Stage::Finalized {
            self.advance(Stage::Finalized);
        }
        Ok(params)
    }

    fn snapshot(&self) -> crate::error::Result<PoolParameters> {
        Ok(PoolParameters::new(
            require(self.tokens, field::TOKENS)?,
            require(self.amounts, field::AMOUNTS)?,
            require(self.initial_price, field::AMOUNTS)?,
            require(self.fee, field::FEE)?,
            require(self.tick_spacing, field::TICK_SPACING)?,
            require(self.bounds, field::BOUNDS)?,
            require(self.liquidity, field::LIQUIDITY)?,
        ))
    }

    /// Returns the snapshot once the session is finalized.
    #[must_use]
    pub fn parameters(&self) -> Option<PoolParameters> {
        if self.stage == Stage::Finalized {
            self.snapshot().ok()
        } else {
            None
        }
    }

    /// Returns the current stage.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        self.stage
    }

    /// Returns the ordered token pair, if assigned.
    #[must_use]
    pub const fn tokens(&self) -> Option<TokenPair> {
        self.tokens
    }

    /// Returns the deposit amounts, if set.
    #[must_use]
    pub const fn amounts(&self) -> Option<LiquidityAmounts> {
        self.amounts
    }

    /// Returns the initial price, if derived.
    #[must_use]
    pub const fn initial_price(&self) -> Option<InitialPrice> {
        self.initial_price
    }

    /// Returns the encoded fee, if set.
    #[must_use]
    pub const fn fee(&self) -> Option<FixedPointFee> {
        self.fee
    }

    /// Returns the tick spacing, if set.
    #[must_use]
    pub const fn tick_spacing(&self) -> Option<TickSpacing> {
        self.tick_spacing
    }

    /// Returns the aligned bounds, if computed.
    #[must_use]
    pub const fn bounds(&self) -> Option<AlignedBounds> {
        self.bounds
    }

    /// Returns the liquidity result, if computed.
    #[must_use]
    pub const fn liquidity(&self) -> Option<LiquidityResult> {
        self.liquidity
    }
}
