//! Q128 fixed-point fee encoding.

use core::fmt;

use num_bigint::BigUint;
use num_traits::ToPrimitive;

use crate::error::PoolError;

/// Bit width of the fixed-point scale (`2^128`).
const SCALE_BITS: u32 = 128;

/// A fee fraction encoded as a `u128` numerator over `2^128`.
///
/// Any `u128` is a valid fee, so `0 <= fee < 2^128` (a fee below 100%) holds
/// by construction.
///
/// # Exactness
///
/// [`from_percent`](Self::from_percent) never scales in floating point: an
/// `f64` carries 53 bits of mantissa while the encoded fee has 128. The
/// percentage is read as its shortest decimal representation (the same
/// digits `Display` prints) and `floor(percent * 2^128 / 100)` is evaluated
/// on arbitrary-precision integers.
///
/// # Examples
///
/// ```
/// use ekubo_pool_math::domain::FixedPointFee;
///
/// let fee = FixedPointFee::from_percent(0.3).expect("fee below 100%");
/// assert_eq!(fee.get(), 1_020_847_100_762_815_390_390_123_822_295_304_634);
/// assert_eq!(FixedPointFee::from_percent(0.0), Ok(FixedPointFee::ZERO));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedPointFee(u128);

impl FixedPointFee {
    /// A zero fee.
    pub const ZERO: Self = Self(0);

    /// Wraps a raw Q128 numerator.
    #[must_use]
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the raw Q128 numerator.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Encodes a fee percentage: `floor((fee_percent / 100) * 2^128)`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidFeePercent`] if `fee_percent` is not
    /// finite, negative, or `>= 100`.
    pub fn from_percent(fee_percent: f64) -> crate::error::Result<Self> {
        if !fee_percent.is_finite() {
            return Err(PoolError::InvalidFeePercent("fee percent must be finite"));
        }
        if fee_percent < 0.0 {
            return Err(PoolError::InvalidFeePercent(
                "fee percent must not be negative",
            ));
        }
        if fee_percent >= 100.0 {
            return Err(PoolError::InvalidFeePercent("fee percent must be below 100"));
        }
        if fee_percent == 0.0 {
            return Ok(Self::ZERO);
        }
        // f64 Display is the shortest representation that round-trips and
        // never uses exponent notation.
        Self::from_percent_str(&fee_percent.to_string())
    }

    /// Encodes a fee percentage given as a plain decimal string such as
    /// `"0.3"` or `"1"`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidFeePercent`] if the string is not an
    /// unsigned decimal number or its value is `>= 100`.
    pub fn from_percent_str(fee_percent: &str) -> crate::error::Result<Self> {
        let (numerator, scale) = parse_decimal(fee_percent.trim())?;
        let denominator = BigUint::from(100u32) * BigUint::from(10u32).pow(scale);
        if numerator >= denominator {
            return Err(PoolError::InvalidFeePercent("fee percent must be below 100"));
        }

        let encoded = (numerator << SCALE_BITS) / denominator;
        encoded
            .to_u128()
            .map(Self)
            .ok_or(PoolError::InvalidFeePercent("encoded fee exceeds 128 bits"))
    }

    /// Decodes the fee back into a percentage.
    ///
    /// Lossy: intended for display, not for re-encoding.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_percent(&self) -> f64 {
        self.0 as f64 / 2f64.powi(SCALE_BITS as i32) * 100.0
    }
}

impl fmt::Display for FixedPointFee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Splits `"12.345"` into `(12345, 3)`, i.e. the value `12345 / 10^3`.
fn parse_decimal(input: &str) -> crate::error::Result<(BigUint, u32)> {
    const NOT_DECIMAL: PoolError =
        PoolError::InvalidFeePercent("fee percent is not a decimal number");

    if input.starts_with('-') {
        return Err(PoolError::InvalidFeePercent(
            "fee percent must not be negative",
        ));
    }
    let unsigned = input.strip_prefix('+').unwrap_or(input);
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(NOT_DECIMAL);
    }
    if !all_digits(int_part) || !all_digits(frac_part) {
        return Err(NOT_DECIMAL);
    }

    let digits = format!("{int_part}{frac_part}");
    let numerator = BigUint::parse_bytes(digits.as_bytes(), 10).ok_or(NOT_DECIMAL)?;
    let scale = u32::try_from(frac_part.len()).map_err(|_| NOT_DECIMAL)?;
    Ok((numerator, scale))
}

/// Reference check used by tests: `floor(numerator * 2^128 / denominator)`.
#[cfg(test)]
pub(crate) fn reference_q128(numerator: u64, denominator: u64) -> BigUint {
    (BigUint::from(numerator) << SCALE_BITS) / BigUint::from(denominator)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn fee(percent: f64) -> FixedPointFee {
        let Ok(f) = FixedPointFee::from_percent(percent) else {
            panic!("expected Ok for {percent}");
        };
        f
    }

    fn as_big(f: FixedPointFee) -> BigUint {
        BigUint::from(f.get())
    }

    // -- Known values -------------------------------------------------------

    #[test]
    fn zero_percent_is_zero() {
        assert_eq!(fee(0.0), FixedPointFee::ZERO);
        assert_eq!(fee(-0.0), FixedPointFee::ZERO);
    }

    #[test]
    fn point_three_percent_is_exact() {
        // floor(0.003 * 2^128) = floor(3 * 2^128 / 1000)
        assert_eq!(as_big(fee(0.3)), reference_q128(3, 1000));
        assert_eq!(
            fee(0.3).get(),
            1_020_847_100_762_815_390_390_123_822_295_304_634
        );
    }

    #[test]
    fn one_percent_is_exact() {
        assert_eq!(as_big(fee(1.0)), reference_q128(1, 100));
    }

    #[test]
    fn five_basis_points_is_exact() {
        assert_eq!(as_big(fee(0.05)), reference_q128(5, 10_000));
    }

    #[test]
    fn fifty_percent_is_half_scale() {
        assert_eq!(fee(50.0).get(), 1u128 << 127);
    }

    #[test]
    fn tiny_percent_is_exact() {
        // Display prints 1e-7 as 0.0000001, so no exponent parsing is needed.
        assert_eq!(as_big(fee(0.000_000_1)), reference_q128(1, 1_000_000_000));
    }

    #[test]
    fn just_below_hundred_fits() {
        let f = fee(99.999_999);
        assert!(f.get() > 0);
        assert_eq!(as_big(f), reference_q128(99_999_999, 100_000_000));
    }

    // -- Rejections ---------------------------------------------------------

    #[test]
    fn hundred_percent_rejected() {
        assert_eq!(
            FixedPointFee::from_percent(100.0),
            Err(PoolError::InvalidFeePercent("fee percent must be below 100"))
        );
    }

    #[test]
    fn negative_rejected() {
        assert_eq!(
            FixedPointFee::from_percent(-0.01),
            Err(PoolError::InvalidFeePercent(
                "fee percent must not be negative"
            ))
        );
    }

    #[test]
    fn non_finite_rejected() {
        assert!(FixedPointFee::from_percent(f64::NAN).is_err());
        assert!(FixedPointFee::from_percent(f64::INFINITY).is_err());
    }

    // -- String input -------------------------------------------------------

    #[test]
    fn string_input_matches_float_input() {
        let Ok(from_str) = FixedPointFee::from_percent_str("0.3") else {
            panic!("expected Ok");
        };
        assert_eq!(from_str, fee(0.3));
    }

    #[test]
    fn string_input_accepts_bare_forms() {
        let (Ok(a), Ok(b), Ok(c)) = (
            FixedPointFee::from_percent_str("1"),
            FixedPointFee::from_percent_str("1."),
            FixedPointFee::from_percent_str("+1.000"),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(a, b);
        assert_eq!(a, c);
        let Ok(d) = FixedPointFee::from_percent_str(".5") else {
            panic!("expected Ok");
        };
        assert_eq!(d, fee(0.5));
    }

    #[test]
    fn string_input_rejects_garbage() {
        for bad in ["", ".", "abc", "1e-3", "0.3%", "1..2", " - 1"] {
            assert!(
                FixedPointFee::from_percent_str(bad).is_err(),
                "{bad:?} should be rejected"
            );
        }
        assert_eq!(
            FixedPointFee::from_percent_str("-0.1"),
            Err(PoolError::InvalidFeePercent(
                "fee percent must not be negative"
            ))
        );
    }

    #[test]
    fn string_input_rejects_hundred_with_trailing_zeros() {
        assert!(FixedPointFee::from_percent_str("100.000").is_err());
    }

    // -- Ordering / decoding ------------------------------------------------

    #[test]
    fn monotonic_over_samples() {
        let samples = [0.0, 0.001, 0.01, 0.05, 0.3, 0.30000000000000004, 1.0, 5.0, 99.9];
        for pair in samples.windows(2) {
            let [lo, hi] = pair else {
                panic!("windows(2) should yield pairs");
            };
            assert!(fee(*lo) <= fee(*hi), "fee({lo}) > fee({hi})");
        }
    }

    #[test]
    fn as_percent_recovers_input() {
        assert!((fee(0.3).as_percent() - 0.3).abs() < 1e-12);
        assert!((fee(1.0).as_percent() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn display_is_raw_integer() {
        assert_eq!(FixedPointFee::new(42).to_string(), "42");
    }
}
