//! Trait seams of the crate.
//!
//! [`FromConfig`] builds a value from a declarative configuration; the
//! crate implements it for running a whole pool setup from a
//! [`PoolSetupConfig`](crate::config::PoolSetupConfig).

mod from_config;

pub use from_config::FromConfig;
