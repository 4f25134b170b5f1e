//! Pure numeric conversions for pool parameters.
//!
//! Every function here is deterministic, side-effect free and reentrant.
//!
//! | Function | Purpose |
//! |----------|---------|
//! | [`price_to_tick`] / [`tick_to_price`] | Price ↔ tick on the `1.000001` grid |
//! | [`sqrt_ratio_at_tick`] | Sqrt ratio of a tick |
//! | [`initial_from_amounts`] | Starting price, sqrt ratio and tick from deposits |
//! | [`align_tick`] / [`align_bounds`] | Snap ticks and ranges to a tick spacing |
//! | [`compute_liquidity`] | Liquidity implied by deposits over a range |

mod alignment;
mod liquidity;
mod tick_math;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

pub use alignment::{align_bounds, align_price_bounds, align_tick};
pub use liquidity::{compute_liquidity, liquidity_for};
pub use tick_math::{initial_from_amounts, price_to_tick, sqrt_ratio_at_tick, tick_to_price};
