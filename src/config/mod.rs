//! Declarative pool setup inputs.
//!
//! [`PoolSetupConfig`] gathers every user-facing input of a setup workflow
//! in one validated value, ready to drive a
//! [`PoolSession`](crate::session::PoolSession) through
//! [`FromConfig`](crate::traits::FromConfig).

mod pool_setup;

pub use pool_setup::PoolSetupConfig;
