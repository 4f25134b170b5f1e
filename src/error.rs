//! Unified error types for the pool parameter engine.
//!
//! All fallible operations across the crate return [`PoolError`] as their
//! error type. Each computation either yields a valid value or fails with
//! exactly one variant; nothing is retried, clamped or defaulted silently.

use thiserror::Error;

/// Errors produced while deriving pool parameters.
///
/// Variants carrying a `&'static str` describe which constraint was
/// violated. [`PrerequisiteMissing`](Self::PrerequisiteMissing) and
/// [`StageAlreadyCompleted`](Self::StageAlreadyCompleted) carry the name of
/// the session field involved (`"tokens"`, `"amounts"`, `"fee"`,
/// `"tick_spacing"`, `"bounds"`, `"liquidity"`).
///
/// # Examples
///
/// ```
/// use ekubo_pool_math::domain::FixedPointFee;
/// use ekubo_pool_math::error::PoolError;
///
/// let err = FixedPointFee::from_percent(100.0);
/// assert!(matches!(err, Err(PoolError::InvalidFeePercent(_))));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum PoolError {
    /// A token address is not a valid hexadecimal integer.
    #[error("invalid address format: {0}")]
    InvalidAddressFormat(&'static str),

    /// Both token addresses have the same numeric value.
    #[error("degenerate token pair: both addresses have the same value")]
    DegenerateTokenPair,

    /// The fee percentage lies outside `[0, 100)`.
    #[error("invalid fee percent: {0}")]
    InvalidFeePercent(&'static str),

    /// The tick spacing (or its percentage) is out of range.
    #[error("invalid tick spacing: {0}")]
    InvalidSpacingPercent(&'static str),

    /// A token amount is zero, negative or not finite.
    #[error("invalid amounts: {0}")]
    InvalidAmounts(&'static str),

    /// A price is zero, negative, not finite, or maps outside the tick range.
    #[error("invalid price: {0}")]
    InvalidPrice(&'static str),

    /// The lower price bound is not strictly below the upper bound.
    #[error("inverted bounds: lower price must be less than upper price")]
    InvertedBounds,

    /// A session step was invoked before the field it depends on was set.
    #[error("prerequisite missing: {0}")]
    PrerequisiteMissing(&'static str),

    /// A session step was invoked for a field that is already set.
    #[error("stage already completed: {0}")]
    StageAlreadyCompleted(&'static str),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, PoolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context() {
        let err = PoolError::PrerequisiteMissing("amounts");
        assert_eq!(err.to_string(), "prerequisite missing: amounts");
    }

    #[test]
    fn display_unit_variants() {
        assert_eq!(
            PoolError::InvertedBounds.to_string(),
            "inverted bounds: lower price must be less than upper price"
        );
        assert!(PoolError::DegenerateTokenPair
            .to_string()
            .contains("same value"));
    }

    #[test]
    fn implements_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<PoolError>();
    }

    #[test]
    fn equality_compares_payload() {
        assert_eq!(
            PoolError::InvalidPrice("price must be positive"),
            PoolError::InvalidPrice("price must be positive")
        );
        assert_ne!(
            PoolError::PrerequisiteMissing("fee"),
            PoolError::PrerequisiteMissing("amounts")
        );
    }
}
