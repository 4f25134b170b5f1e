//! Generic construction trait for building values from configuration.
//!
//! [`FromConfig`] gives a uniform entry point for turning a declarative
//! configuration into a fully computed value. Implementations validate
//! every configuration invariant during construction, so a successfully
//! built value is always consistent with its inputs.
//!
//! # Implementors
//!
//! ```text
//! PoolSession::from_config(&PoolSetupConfig)    => session at Stage::Finalized
//! PoolParameters::from_config(&PoolSetupConfig) => its finalized snapshot
//! ```
//!
//! There is no blanket implementation; each pairing is written explicitly.

use tracing::info;

use crate::config::PoolSetupConfig;
use crate::session::{PoolParameters, PoolSession};

/// Generic construction trait for building a value from a configuration.
///
/// # Type Parameters
///
/// - `C`: the configuration type that fully describes the value.
pub trait FromConfig<C> {
    /// Creates a new value from the given configuration.
    ///
    /// The configuration is taken by reference so it may be reused.
    ///
    /// # Errors
    ///
    /// Returns a [`PoolError`](crate::error::PoolError) describing the
    /// first invalid input.
    fn from_config(config: &C) -> crate::error::Result<Self>
    where
        Self: Sized;
}

impl FromConfig<PoolSetupConfig> for PoolSession {
    fn from_config(config: &PoolSetupConfig) -> crate::error::Result<Self> {
        config.validate()?;

        let mut session = Self::new();
        session.assign_tokens(config.token_a(), config.token_b())?;
        session.set_amounts(config.token0_amount(), config.token1_amount())?;
        session.set_fee(config.fee_percent())?;
        session.set_tick_spacing(config.tick_spacing_percent())?;
        session.compute_bounds(config.lower_price(), config.upper_price())?;
        session.compute_liquidity()?;
        let params = session.finalize()?;

        info!(
            token0 = %params.tokens().token0(),
            token1 = %params.tokens().token1(),
            fee = %params.fee(),
            tick_spacing = params.tick_spacing().get(),
            lower_tick = params.bounds().lower_tick().get(),
            upper_tick = params.bounds().upper_tick().get(),
            liquidity = params.liquidity().min(),
            "pool setup finalized"
        );
        Ok(session)
    }
}

impl FromConfig<PoolSetupConfig> for PoolParameters {
    fn from_config(config: &PoolSetupConfig) -> crate::error::Result<Self> {
        let mut session = PoolSession::from_config(config)?;
        session.finalize()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::error::PoolError;
    use crate::session::Stage;

    const ADDR_A: &str = "0x0275d08f64e8c9da4aea46168979205d309fdd079c5a5b4df4252df1cb72ab0f";
    const ADDR_B: &str = "0x00abbd6f1e590eb83addd87ba5ac27960d859b1f17d11a3c1cd6a0006704b141";

    fn config() -> PoolSetupConfig {
        let Ok(cfg) = PoolSetupConfig::new(ADDR_A, ADDR_B, 1_000.0, 2_000.0, 0.3, 0.1, 1.5, 2.5)
        else {
            panic!("valid config");
        };
        cfg
    }

    #[test]
    fn session_from_config_is_finalized() {
        let Ok(session) = PoolSession::from_config(&config()) else {
            panic!("expected Ok");
        };
        assert_eq!(session.stage(), Stage::Finalized);
        assert!(session.parameters().is_some());
    }

    #[test]
    fn parameters_from_config_match_session() {
        let (Ok(session), Ok(params)) = (
            PoolSession::from_config(&config()),
            PoolParameters::from_config(&config()),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(session.parameters(), Some(params));
        assert_eq!(params.tick_spacing().get(), 999);
    }

    #[test]
    fn out_of_tick_range_price_is_rejected() {
        let Ok(cfg) = PoolSetupConfig::new(ADDR_A, ADDR_B, 1_000.0, 2_000.0, 0.3, 0.1, 1.5, 1e60)
        else {
            panic!("config-level validation accepts large prices");
        };
        assert!(matches!(
            PoolSession::from_config(&cfg),
            Err(PoolError::InvalidPrice(_))
        ));
    }
}
