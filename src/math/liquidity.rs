//! Liquidity implied by deposit amounts over a price range.
//!
//! With `√Pa = sqrt(lower)` and `√Pb = sqrt(upper)`:
//!
//! ```text
//! L0 = amount0 · √Pa · √Pb / (√Pb − √Pa)
//! L1 = amount1 / (√Pb − √Pa)
//! L  = min(L0, L1)
//! ```
//!
//! These are the concentrated-liquidity identities
//! `amount0 = L · (1/√Pa − 1/√Pb)` and `amount1 = L · (√Pb − √Pa)` solved
//! for `L`. Each holds when the whole range is funded by one token, i.e. at
//! a boundary price. No adjustment is made for a current price strictly
//! inside the range.

use crate::domain::{LiquidityAmounts, LiquidityResult, PriceBounds};
use crate::error::PoolError;

/// Computes the liquidity implied by each deposit and the binding minimum.
///
/// # Errors
///
/// Checked in this order:
///
/// - [`PoolError::InvertedBounds`] if `lower_price >= upper_price`.
/// - [`PoolError::InvalidPrice`] if a bound is not positive and finite.
/// - [`PoolError::InvalidAmounts`] if either amount is not strictly positive.
///
/// # Examples
///
/// ```
/// use ekubo_pool_math::math::compute_liquidity;
///
/// let result = compute_liquidity(1_000.0, 2_000.0, 1.5, 2.5).expect("valid inputs");
/// assert!((result.min() - 5_433.570_423_605).abs() < 1e-6);
/// ```
pub fn compute_liquidity(
    token0_amount: f64,
    token1_amount: f64,
    lower_price: f64,
    upper_price: f64,
) -> crate::error::Result<LiquidityResult> {
    let bounds = PriceBounds::new(lower_price, upper_price)?;
    let amounts = LiquidityAmounts::new(token0_amount, token1_amount)?;
    liquidity_for(&amounts, &bounds)
}

/// [`compute_liquidity`] for already validated inputs.
///
/// # Errors
///
/// - [`PoolError::InvertedBounds`] if the bounds are so close that
///   `√Pb − √Pa` rounds to zero.
/// - [`PoolError::InvalidAmounts`] if the resulting liquidity is not finite.
pub fn liquidity_for(
    amounts: &LiquidityAmounts,
    bounds: &PriceBounds,
) -> crate::error::Result<LiquidityResult> {
    let sqrt_lower = bounds.lower().sqrt();
    let sqrt_upper = bounds.upper().sqrt();
    let denominator = sqrt_upper - sqrt_lower;
    if denominator <= 0.0 {
        return Err(PoolError::InvertedBounds);
    }

    let from_token0 = amounts.token0() * (sqrt_lower * sqrt_upper) / denominator;
    let from_token1 = amounts.token1() / denominator;
    if !from_token0.is_finite() || !from_token1.is_finite() {
        return Err(PoolError::InvalidAmounts(
            "amounts produce non-finite liquidity",
        ));
    }

    Ok(LiquidityResult::new(from_token0, from_token1))
}
