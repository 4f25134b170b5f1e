//! Property-based tests for the conversion engine.
//!
//! 1. **Token ordering**: `token0 < token1` and argument order is irrelevant.
//! 2. **Fee encoding**: exact against a `BigUint` reference, monotone.
//! 3. **Alignment**: aligned ticks are multiples of the spacing and
//!    within half a spacing of the input.
//! 4. **Tick round-trip**: the tick price is within one grid step below
//!    the input price.
//! 5. **Liquidity scaling**: scaling both deposits scales the liquidity.
//! 6. **Inverted bounds**: rejected for every input.

use num_bigint::BigUint;
use proptest::prelude::*;

use crate::domain::{reference_q128, FixedPointFee, Tick, TokenPair, MAX_TICK_MAGNITUDE, TICK_BASE};
use crate::error::PoolError;
use crate::math::{align_tick, compute_liquidity, price_to_tick, tick_to_price};

fn hex_address(bytes: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(bytes))
}

proptest! {
    // -- 1. Token ordering --------------------------------------------------

    #[test]
    fn ordering_is_canonical(a in any::<[u8; 32]>(), b in any::<[u8; 32]>()) {
        prop_assume!(a != b);
        let (ha, hb) = (hex_address(&a), hex_address(&b));
        let (Ok(ab), Ok(ba)) = (TokenPair::order(&ha, &hb), TokenPair::order(&hb, &ha)) else {
            panic!("distinct addresses must pair");
        };
        prop_assert!(ab.token0() < ab.token1());
        prop_assert_eq!(ab, ba);
        prop_assert_eq!(ab.token0().as_bytes(), a.min(b));
    }

    #[test]
    fn equal_addresses_are_degenerate(a in any::<[u8; 32]>()) {
        let h = hex_address(&a);
        prop_assert_eq!(TokenPair::order(&h, &h), Err(PoolError::DegenerateTokenPair));
    }

    // -- 2. Fee encoding ----------------------------------------------------

    #[test]
    fn fee_matches_exact_reference(whole in 0u64..100, frac in 0u64..10_000) {
        let text = format!("{whole}.{frac:04}");
        let Ok(fee) = FixedPointFee::from_percent_str(&text) else {
            panic!("{text} is below 100");
        };
        let numerator = whole * 10_000 + frac;
        prop_assert_eq!(BigUint::from(fee.get()), reference_q128(numerator, 1_000_000));
    }

    #[test]
    fn fee_is_monotone(x in 0.0f64..100.0, y in 0.0f64..100.0) {
        let (lo, hi) = if x <= y { (x, y) } else { (y, x) };
        let (Ok(f_lo), Ok(f_hi)) = (FixedPointFee::from_percent(lo), FixedPointFee::from_percent(hi)) else {
            panic!("percentages below 100 must encode");
        };
        prop_assert!(f_lo <= f_hi);
    }

    #[test]
    fn fee_at_or_above_hundred_rejected(x in 100.0f64..1e12) {
        prop_assert!(matches!(
            FixedPointFee::from_percent(x),
            Err(PoolError::InvalidFeePercent(_))
        ));
    }

    // -- 3. Alignment -------------------------------------------------------

    #[test]
    fn aligned_tick_is_multiple_of_spacing(
        t in -MAX_TICK_MAGNITUDE..=MAX_TICK_MAGNITUDE,
        spacing in 1u32..=354_892,
    ) {
        let Ok(tick) = Tick::new(t) else {
            panic!("generated tick is in range");
        };
        let Ok(aligned) = align_tick(tick, spacing) else {
            panic!("non-zero spacing must align");
        };
        prop_assert_eq!(i64::from(aligned.get()) % i64::from(spacing), 0);
        prop_assert!(aligned.get().abs() <= MAX_TICK_MAGNITUDE);
        // Within half a spacing unless clamped at the range edge.
        let distance = (i64::from(aligned.get()) - i64::from(t)).abs();
        prop_assert!(distance <= i64::from(spacing));
    }

    #[test]
    fn alignment_is_idempotent(t in -1_000_000i32..1_000_000, spacing in 1u32..20_000) {
        let Ok(tick) = Tick::new(t) else {
            panic!("generated tick is in range");
        };
        let Ok(once) = align_tick(tick, spacing) else {
            panic!("non-zero spacing must align");
        };
        prop_assert_eq!(align_tick(once, spacing), Ok(once));
    }

    // -- 4. Tick round-trip -------------------------------------------------

    #[test]
    fn price_round_trip_within_one_step(exponent in -30.0f64..30.0) {
        let price = 10f64.powf(exponent);
        let Ok(tick) = price_to_tick(price) else {
            panic!("price {price} is inside the tick range");
        };
        let floor_price = tick_to_price(tick);
        let rel = (price - floor_price) / price;
        prop_assert!(rel >= -1e-11, "tick price above input: {}", rel);
        prop_assert!(rel < 1.0 - 1.0 / TICK_BASE + 1e-11, "gap {} exceeds one tick", rel);
    }

    // -- 5. Liquidity scaling -----------------------------------------------

    #[test]
    fn liquidity_scales_linearly(
        a0 in 1e-3f64..1e9,
        a1 in 1e-3f64..1e9,
        lower in 1e-3f64..1e3,
        width in 1e-3f64..1e3,
        k in 1.0f64..1e3,
    ) {
        let upper = lower + width;
        let (Ok(base), Ok(scaled)) = (
            compute_liquidity(a0, a1, lower, upper),
            compute_liquidity(a0 * k, a1 * k, lower, upper),
        ) else {
            panic!("valid inputs must produce liquidity");
        };
        let rel = (scaled.min() / (k * base.min()) - 1.0).abs();
        prop_assert!(rel < 1e-12, "relative error {}", rel);
        prop_assert!(base.min() <= base.from_token0() && base.min() <= base.from_token1());
    }

    // -- 6. Inverted bounds -------------------------------------------------

    #[test]
    fn inverted_bounds_always_rejected(
        a0 in -1e6f64..1e6,
        a1 in -1e6f64..1e6,
        upper in -1e6f64..1e6,
        gap in 0.0f64..1e6,
    ) {
        let lower = upper + gap;
        prop_assert_eq!(
            compute_liquidity(a0, a1, lower, upper),
            Err(PoolError::InvertedBounds)
        );
    }
}
