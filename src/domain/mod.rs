//! Validated value types describing a pool setup.
//!
//! Each type is a newtype or small struct whose constructor enforces its
//! invariants, so a value that exists is a value that is valid: ordered
//! token pairs, Q128 fees, tick spacings, ticks, price ranges, deposit
//! amounts and liquidity results.

mod bounds;
mod fee;
mod initial_price;
mod liquidity;
mod tick;
mod tick_spacing;
mod token_address;
mod token_pair;

pub use bounds::{AlignedBounds, OutOfRangeWarning, PriceBounds};
pub use fee::FixedPointFee;
pub use initial_price::InitialPrice;
pub use liquidity::{BindingToken, LiquidityAmounts, LiquidityResult};
pub use tick::{Tick, MAX_TICK_MAGNITUDE, TICK_BASE};
pub use tick_spacing::{TickSpacing, MAX_TICK_SPACING};
pub use token_address::TokenAddress;
pub use token_pair::TokenPair;

#[cfg(test)]
pub(crate) use fee::reference_q128;
