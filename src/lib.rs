//! # Ekubo Pool Math
//!
//! Parameter math for setting up a concentrated-liquidity pool on an
//! Ekubo-style exchange: from two token addresses, two deposit amounts, a
//! fee, a tick spacing and a price range to the exact values a deployment
//! transaction needs.
//!
//! The crate covers:
//!
//! - **Token ordering**: canonical `(token0, token1)` by numeric address
//! - **Fee encoding**: percent → unsigned Q128 fixed point, exact
//! - **Tick spacing encoding**: percent → count of `1.000001` ticks
//! - **Price ↔ tick conversion** on the `1.000001` geometric grid
//! - **Tick alignment** of price ranges to a spacing
//! - **Liquidity** implied by deposits over a price range
//! - **A setup session** that sequences all of the above
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `serde` | no | `Serialize` for all value types; validating `Deserialize` for inputs and configs |
//!
//! # Quick Start
//!
//! ```rust
//! use ekubo_pool_math::config::PoolSetupConfig;
//! use ekubo_pool_math::session::PoolParameters;
//! use ekubo_pool_math::traits::FromConfig;
//!
//! let config = PoolSetupConfig::new(
//!     "0x0275d08f64e8c9da4aea46168979205d309fdd079c5a5b4df4252df1cb72ab0f",
//!     "0x00abbd6f1e590eb83addd87ba5ac27960d859b1f17d11a3c1cd6a0006704b141",
//!     1_000.0, // token0 deposit
//!     2_000.0, // token1 deposit
//!     0.3,     // fee, percent
//!     0.1,     // tick spacing, percent
//!     1.5,     // lower price
//!     2.5,     // upper price
//! )
//! .expect("valid config");
//!
//! let params = PoolParameters::from_config(&config).expect("setup succeeds");
//!
//! assert_eq!(params.initial_price().tick().get(), 693_147);
//! assert_eq!(params.fee().get(), 1_020_847_100_762_815_390_390_123_822_295_304_634);
//! assert_eq!(params.tick_spacing().get(), 999);
//! assert_eq!(params.bounds().lower_tick().get(), 405_594);
//! assert_eq!(params.bounds().upper_tick().get(), 916_083);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │ PoolSetupConfig  │  declarative inputs
//! └────────┬─────────┘
//!          │ FromConfig
//!          ▼
//! ┌──────────────────┐
//! │   PoolSession    │  ordered steps, exactly-once fields
//! └────────┬─────────┘
//!          │ calls
//!          ▼
//! ┌──────────────────┐
//! │       math       │  tick math, alignment, liquidity
//! └────────┬─────────┘
//!          │ builds
//!          ▼
//! ┌──────────────────┐
//! │      domain      │  TokenPair, FixedPointFee, TickSpacing, Tick, …
//! └──────────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Validated value types: [`TokenPair`](domain::TokenPair), [`FixedPointFee`](domain::FixedPointFee), [`TickSpacing`](domain::TickSpacing), etc. |
//! | [`math`]   | Pure conversions: price ↔ tick, alignment, liquidity |
//! | [`session`] | [`PoolSession`](session::PoolSession) state machine and its [`PoolParameters`](session::PoolParameters) snapshot |
//! | [`config`] | [`PoolSetupConfig`](config::PoolSetupConfig) inputs |
//! | [`traits`] | [`FromConfig`](traits::FromConfig) construction trait |
//! | [`error`]  | [`PoolError`](error::PoolError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |
//!
//! # Logging
//!
//! Session steps emit [`tracing`] events: `debug` on each stage
//! transition, `warn` when the initial price falls outside the liquidity
//! range and `info` when a configured setup is finalized. The crate never
//! installs a subscriber.

pub mod config;
pub mod domain;
pub mod error;
pub mod math;
pub mod prelude;
pub mod session;
pub mod traits;
