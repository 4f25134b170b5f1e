//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use ekubo_pool_math::prelude::*;
//! ```

pub use crate::domain::{
    AlignedBounds, BindingToken, FixedPointFee, InitialPrice, LiquidityAmounts, LiquidityResult,
    OutOfRangeWarning, PriceBounds, Tick, TickSpacing, TokenAddress, TokenPair,
};

pub use crate::traits::FromConfig;

pub use crate::math::{align_bounds, align_tick, compute_liquidity, price_to_tick, tick_to_price};

pub use crate::config::PoolSetupConfig;

pub use crate::session::{PoolParameters, PoolSession, Stage};

pub use crate::error::{PoolError, Result};
