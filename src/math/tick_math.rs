//! Conversions between prices, sqrt ratios and ticks on the `1.000001`
//! grid.
//!
//! A tick `t` has price `1.000001^t` and sqrt ratio `sqrt(1.000001)^t`.
//! Every conversion here works in the log domain with the shared base
//! [`TICK_BASE`], so price-to-tick and tick-spacing encoding
//! ([`TickSpacing::from_percent`](crate::domain::TickSpacing::from_percent))
//! measure distances on the same grid.
//!
//! # Functions
//!
//! - [`price_to_tick`]: greatest tick whose price is ≤ the given price.
//! - [`tick_to_price`]: `1.000001^tick`.
//! - [`sqrt_ratio_at_tick`]: `sqrt(1.000001)^tick`.
//! - [`initial_from_amounts`]: pool starting price, sqrt ratio and tick
//!   from a deposit ratio.
//!
//! # Precision
//!
//! `f64` logarithms carry far less error than one tick (a relative price
//! step of `1e-6`), so floating point is adequate here. Values within
//! `SNAP_EPSILON` of an integer are snapped to it before flooring so that
//! `price_to_tick(tick_to_price(t)) == t`.
//!
//! # Examples
//!
//! ```
//! use ekubo_pool_math::math::{price_to_tick, tick_to_price};
//!
//! let tick = price_to_tick(2.0).expect("positive price");
//! assert_eq!(tick.get(), 693_147);
//! assert!(tick_to_price(tick) <= 2.0);
//! ```

use crate::domain::{InitialPrice, Tick, MAX_TICK_MAGNITUDE, TICK_BASE};
use crate::error::PoolError;

/// Tolerance, in ticks, for snapping a computed tick to the nearest integer.
const SNAP_EPSILON: f64 = 1e-6;

/// `ln(sqrt(TICK_BASE))`, the log of one tick step in sqrt-ratio space.
///
/// Halving `ln(TICK_BASE)` avoids rounding `sqrt(TICK_BASE)` first.
#[inline]
fn ln_sqrt_tick_base() -> f64 {
    0.5 * TICK_BASE.ln()
}

/// Floors `ln(sqrt_ratio) / ln(sqrt(1.000001))` into a tick.
fn tick_at_sqrt_ratio(sqrt_ratio: f64) -> crate::error::Result<Tick> {
    let raw = sqrt_ratio.ln() / ln_sqrt_tick_base();
    if !raw.is_finite() {
        return Err(PoolError::InvalidPrice(
            "price produces non-finite tick value",
        ));
    }

    let rounded = raw.round();
    let floored = if (raw - rounded).abs() < SNAP_EPSILON {
        rounded
    } else {
        raw.floor()
    };

    if floored.abs() > f64::from(MAX_TICK_MAGNITUDE) {
        return Err(PoolError::InvalidPrice(
            "price maps outside the tick range",
        ));
    }

    // In range, so the cast is exact.
    #[allow(clippy::cast_possible_truncation)]
    Tick::new(floored as i32)
}

/// Converts a price (token1 per token0) to its floored tick:
/// `floor(ln(sqrt(price)) / ln(sqrt(1.000001)))`.
///
/// # Errors
///
/// Returns [`PoolError::InvalidPrice`] if `price` is not finite, not
/// positive, or maps beyond [`MAX_TICK_MAGNITUDE`].
pub fn price_to_tick(price: f64) -> crate::error::Result<Tick> {
    if !price.is_finite() || price <= 0.0 {
        return Err(PoolError::InvalidPrice("price must be positive and finite"));
    }
    tick_at_sqrt_ratio(price.sqrt())
}

/// Computes the price at a tick: `1.000001^tick`.
#[must_use]
pub fn tick_to_price(tick: Tick) -> f64 {
    (f64::from(tick.get()) * TICK_BASE.ln()).exp()
}

/// Computes the sqrt ratio at a tick: `sqrt(1.000001)^tick`.
#[must_use]
pub fn sqrt_ratio_at_tick(tick: Tick) -> f64 {
    (f64::from(tick.get()) * ln_sqrt_tick_base()).exp()
}

/// Derives the pool's starting price from the deposit ratio.
///
/// `price = token1_amount / token0_amount`, `sqrt_ratio = sqrt(price)` and
/// `tick = floor(ln(sqrt_ratio) / ln(sqrt(1.000001)))`.
///
/// # Errors
///
/// - [`PoolError::InvalidAmounts`] if either amount is not finite or not
///   strictly positive.
/// - [`PoolError::InvalidPrice`] if the ratio maps beyond the tick range.
///
/// # Examples
///
/// ```
/// use ekubo_pool_math::math::initial_from_amounts;
///
/// let initial = initial_from_amounts(2_000.0, 1_000.0).expect("positive amounts");
/// assert!((initial.price() - 2.0).abs() < f64::EPSILON);
/// assert!((initial.sqrt_ratio() - 2f64.sqrt()).abs() < 1e-15);
/// assert_eq!(initial.tick().get(), 693_147);
/// ```
pub fn initial_from_amounts(
    token1_amount: f64,
    token0_amount: f64,
) -> crate::error::Result<InitialPrice> {
    if !token0_amount.is_finite() || !token1_amount.is_finite() {
        return Err(PoolError::InvalidAmounts("token amounts must be finite"));
    }
    if token0_amount <= 0.0 || token1_amount <= 0.0 {
        return Err(PoolError::InvalidAmounts("token amounts must be positive"));
    }

    let price = token1_amount / token0_amount;
    let sqrt_ratio = price.sqrt();
    let tick = tick_at_sqrt_ratio(sqrt_ratio)?;
    Ok(InitialPrice::new(price, sqrt_ratio, tick))
}
