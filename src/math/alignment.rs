//! Snapping ticks and price ranges onto a tick-spacing grid.
//!
//! # Rounding convention
//!
//! [`align_tick`] rounds `tick / spacing` to the nearest integer with ties
//! going **away from zero** (`-1.5 → -2`, `1.5 → 2`), the behavior of
//! [`f64::round`]. The quotient is computed in integer arithmetic, so no
//! precision is lost for large ticks.
//!
//! # Examples
//!
//! ```
//! use ekubo_pool_math::domain::Tick;
//! use ekubo_pool_math::math::align_tick;
//!
//! let tick = Tick::new(405_465).expect("in range");
//! assert_eq!(align_tick(tick, 999).map(|t| t.get()), Ok(405_594));
//! ```

use crate::domain::{AlignedBounds, PriceBounds, Tick, TickSpacing, MAX_TICK_MAGNITUDE};
use crate::error::PoolError;
use crate::math::price_to_tick;

/// Rounds `tick` to the nearest multiple of `spacing`, ties away from zero.
///
/// The result always satisfies `aligned % spacing == 0`. When rounding would
/// leave the valid tick range, the result steps one spacing back toward
/// zero.
///
/// # Errors
///
/// Returns [`PoolError::InvalidSpacingPercent`] if `spacing` is zero. A
/// [`TickSpacing`] never is, but raw spacings from outside the crate may be.
pub fn align_tick(tick: Tick, spacing: u32) -> crate::error::Result<Tick> {
    if spacing == 0 {
        return Err(PoolError::InvalidSpacingPercent(
            "tick spacing must be at least 1",
        ));
    }

    let spacing = i64::from(spacing);
    let value = i64::from(tick.get());
    let magnitude = value.abs();

    let quotient = magnitude / spacing;
    let remainder = magnitude % spacing;
    let rounded = if 2 * remainder >= spacing {
        quotient + 1
    } else {
        quotient
    };

    let largest_aligned = (i64::from(MAX_TICK_MAGNITUDE) / spacing) * spacing;
    let aligned_magnitude = (rounded * spacing).min(largest_aligned);
    let aligned = if value < 0 {
        -aligned_magnitude
    } else {
        aligned_magnitude
    };

    // |aligned| <= MAX_TICK_MAGNITUDE, which fits in i32.
    #[allow(clippy::cast_possible_truncation)]
    Tick::new(aligned as i32)
}

/// Converts a price range to ticks and aligns both ends to `spacing`.
///
/// When `current_price` is given and lies outside `[lower_price,
/// upper_price]`, the result carries an
/// [`OutOfRangeWarning`](crate::domain::OutOfRangeWarning). That is not a
/// failure: single-sided ranges are valid positions.
///
/// # Errors
///
/// - [`PoolError::InvertedBounds`] if `lower_price >= upper_price`, or if
///   the range is narrower than the spacing and both ends align to the
///   same tick.
/// - [`PoolError::InvalidPrice`] if a bound is not positive and finite, or
///   lies beyond the tick range.
///
/// # Examples
///
/// ```
/// use ekubo_pool_math::domain::TickSpacing;
/// use ekubo_pool_math::math::align_bounds;
///
/// let spacing = TickSpacing::from_percent(0.1).expect("positive percent");
/// let bounds = align_bounds(1.5, 2.5, spacing, Some(2.0)).expect("valid range");
/// assert_eq!(bounds.lower_tick().get(), 405_594);
/// assert_eq!(bounds.upper_tick().get(), 916_083);
/// assert!(bounds.warning().is_none());
/// ```
pub fn align_bounds(
    lower_price: f64,
    upper_price: f64,
    spacing: TickSpacing,
    current_price: Option<f64>,
) -> crate::error::Result<AlignedBounds> {
    let prices = PriceBounds::new(lower_price, upper_price)?;
    align_price_bounds(prices, spacing, current_price)
}

/// [`align_bounds`] for an already validated [`PriceBounds`].
///
/// # Errors
///
/// - [`PoolError::InvalidPrice`] if a bound lies beyond the tick range.
/// - [`PoolError::InvertedBounds`] if both ends round to the same multiple
///   of `spacing`, leaving no tick range between them.
pub fn align_price_bounds(
    prices: PriceBounds,
    spacing: TickSpacing,
    current_price: Option<f64>,
) -> crate::error::Result<AlignedBounds> {
    let raw_lower = price_to_tick(prices.lower())?;
    let raw_upper = price_to_tick(prices.upper())?;

    let lower = align_tick(raw_lower, spacing.get())?;
    let upper = align_tick(raw_upper, spacing.get())?;
    if lower >= upper {
        return Err(PoolError::InvertedBounds);
    }

    let warning = current_price.and_then(|p| prices.out_of_range(p));
    Ok(AlignedBounds::new(
        prices,
        (raw_lower, raw_upper),
        (lower, upper),
        warning,
    ))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::OutOfRangeWarning;

    fn aligned(t: i32, spacing: u32) -> i32 {
        let Ok(tick) = Tick::new(t) else {
            panic!("expected valid tick {t}");
        };
        let Ok(a) = align_tick(tick, spacing) else {
            panic!("expected Ok for ({t}, {spacing})");
        };
        a.get()
    }

    fn spacing(percent: f64) -> TickSpacing {
        let Ok(s) = TickSpacing::from_percent(percent) else {
            panic!("expected Ok");
        };
        s
    }

    // -- align_tick ---------------------------------------------------------

    #[test]
    fn rounds_to_nearest_multiple() {
        assert_eq!(aligned(14, 10), 10);
        assert_eq!(aligned(16, 10), 20);
        assert_eq!(aligned(-14, 10), -10);
        assert_eq!(aligned(-16, 10), -20);
    }

    #[test]
    fn ties_round_away_from_zero() {
        assert_eq!(aligned(15, 10), 20);
        assert_eq!(aligned(-15, 10), -20);
        assert_eq!(aligned(5, 10), 10);
        assert_eq!(aligned(-5, 10), -10);
    }

    #[test]
    fn already_aligned_is_unchanged() {
        assert_eq!(aligned(0, 999), 0);
        assert_eq!(aligned(1998, 999), 1998);
        assert_eq!(aligned(-1998, 999), -1998);
    }

    #[test]
    fn spacing_one_is_identity() {
        for t in [-88_722_883, -7, 0, 7, 88_722_883] {
            assert_eq!(aligned(t, 1), t);
        }
    }

    #[test]
    fn known_range_bounds() {
        assert_eq!(aligned(405_465, 999), 405_594);
        assert_eq!(aligned(916_291, 999), 916_083);
    }

    #[test]
    fn stays_inside_tick_range() {
        // 88722883 / 1000 = 88722.883 rounds up to 88723000, past the limit.
        assert_eq!(aligned(88_722_883, 1000), 88_722_000);
        assert_eq!(aligned(-88_722_883, 1000), -88_722_000);
        assert_eq!(aligned(88_722_883, 354_892), 249 * 354_892);
    }

    #[test]
    fn zero_spacing_rejected() {
        assert_eq!(
            align_tick(Tick::ZERO, 0),
            Err(PoolError::InvalidSpacingPercent(
                "tick spacing must be at least 1"
            ))
        );
    }

    // -- align_bounds -------------------------------------------------------

    #[test]
    fn bounds_keep_raw_and_aligned_ticks() {
        let Ok(b) = align_bounds(1.5, 2.5, spacing(0.1), None) else {
            panic!("expected Ok");
        };
        assert_eq!(b.raw_ticks().0.get(), 405_465);
        assert_eq!(b.raw_ticks().1.get(), 916_291);
        assert_eq!(b.lower_tick().get(), 405_594);
        assert_eq!(b.upper_tick().get(), 916_083);
        assert!(b.is_aligned_to(999));
        assert!(b.warning().is_none());
    }

    #[test]
    fn bounds_reject_inverted_range() {
        assert_eq!(
            align_bounds(2.5, 1.5, spacing(0.1), None),
            Err(PoolError::InvertedBounds)
        );
        assert_eq!(
            align_bounds(2.0, 2.0, spacing(0.1), None),
            Err(PoolError::InvertedBounds)
        );
    }

    #[test]
    fn bounds_reject_non_positive_lower() {
        assert!(matches!(
            align_bounds(0.0, 2.0, spacing(0.1), None),
            Err(PoolError::InvalidPrice(_))
        ));
    }

    #[test]
    fn bounds_warn_when_current_price_outside() {
        let Ok(b) = align_bounds(1.5, 2.5, spacing(0.1), Some(3.0)) else {
            panic!("expected Ok");
        };
        assert_eq!(
            b.warning(),
            Some(OutOfRangeWarning::AboveRange {
                current_price: 3.0,
                upper_price: 2.5
            })
        );

        let Ok(b) = align_bounds(1.5, 2.5, spacing(0.1), Some(1.0)) else {
            panic!("expected Ok");
        };
        assert!(matches!(
            b.warning(),
            Some(OutOfRangeWarning::BelowRange { .. })
        ));
    }

    #[test]
    fn bounds_below_one_align_negative_ticks() {
        let Ok(b) = align_bounds(0.5, 0.9, spacing(1.0), None) else {
            panic!("expected Ok");
        };
        assert!(b.lower_tick().get() < 0 && b.upper_tick().get() < 0);
        assert!(b.is_aligned_to(9950));
    }

    #[test]
    fn bounds_collapsing_to_one_tick_rejected() {
        let Ok(raw_lower) = price_to_tick(1.5) else {
            panic!("expected Ok");
        };
        let Ok(raw_upper) = price_to_tick(1.5001) else {
            panic!("expected Ok");
        };
        assert!(raw_lower < raw_upper);
        assert_eq!(
            align_bounds(1.5, 1.5001, spacing(0.1), None),
            Err(PoolError::InvertedBounds)
        );
        // The same range is fine on a finer grid.
        assert!(align_bounds(1.5, 1.5001, TickSpacing::ONE, None).is_ok());
    }
}
