//! Property tests for the normalization pipeline.
//!
//! Inputs are generated as non-negative magnitudes and negated as a whole when
//! a negative period is wanted, so every generated period has a single sign.

use period_core::fixed::{DAYS_PER_MONTH_E6, FIELD_MAX, HOURS_CARRY_THRESHOLD, ONE_E5};
use period_norm::{finalize, normalise, Accumulator, NormaliseExt, Period, Precision};
use proptest::prelude::*;

fn magnitudes() -> impl Strategy<Value = [i16; 6]> {
    prop::array::uniform6(0i16..=i16::MAX)
}

fn signed(mags: [i16; 6], negative: bool) -> Period {
    Period::from(if negative { mags.map(|v| -v) } else { mags })
}

/// Whole units already inside every post-normalization bound.
fn normalized_record() -> impl Strategy<Value = Period> {
    let date = (0i16..=3276, 0i16..12, 0i16..=3248);
    let time = (0i16..=3220, 0i16..60, 0i16..60);
    (date, time, any::<bool>()).prop_map(|((y, mo, d), (h, mi, s), negative)| {
        signed([y, mo, d, h, mi, s].map(|v| v * 10), negative)
    })
}

proptest! {
    #[test]
    fn negation_mirrors_result(mags in magnitudes(), precise in any::<bool>()) {
        let pos = Period::from(mags);
        let neg = signed(mags, true);

        let a = normalise(pos, precise);
        let b = normalise(neg, precise);
        prop_assert_eq!(a.magnitudes(), b.magnitudes());
        prop_assert!(!a.is_negative());
        prop_assert_eq!(b.is_negative(), !pos.is_zero());

        match (finalize(a), finalize(b)) {
            (Ok(x), Ok(y)) => prop_assert_eq!(x.to_array().map(|v| -v), y.to_array()),
            (Err(x), Err(y)) => prop_assert_eq!(x.fields(), y.fields()),
            (x, y) => prop_assert!(false, "outcomes differ: {:?} vs {:?}", x, y),
        }
    }

    #[test]
    fn output_keeps_a_single_sign(
        mags in magnitudes(),
        negative in any::<bool>(),
        precise in any::<bool>(),
    ) {
        match signed(mags, negative).normalise(precise) {
            Ok(p) => {
                let ok = p.to_array().iter().all(|&v| if negative { v <= 0 } else { v >= 0 });
                prop_assert!(ok, "mixed signs in {:?}", p);
            }
            Err(e) => prop_assert!(!e.fields().is_empty()),
        }
    }

    #[test]
    fn in_range_normalized_records_round_trip(p in normalized_record()) {
        prop_assert_eq!(p.normalise(Precision::Precise), Ok(p));
    }

    #[test]
    fn fractions_only_remain_above_empty_fields(mags in magnitudes(), precise in any::<bool>()) {
        let m = normalise(Period::from(mags), precise).magnitudes();
        for i in 0..6 {
            if m[i] % 10 != 0 {
                let below_empty = m[i + 1..].iter().all(|&v| v == 0);
                prop_assert!(below_empty, "fraction left at {} in {:?}", i, m);
            }
        }
    }

    #[test]
    fn imprecise_carry_bounds(mags in magnitudes()) {
        let mut acc = Accumulator::from_period(Period::from(mags), "");
        acc.ripple_up(Precision::Imprecise);
        let [_, months, days, hours, minutes, seconds] = acc.magnitudes();
        prop_assert!(seconds < 600);
        prop_assert!(minutes < 600);
        prop_assert!(hours < 240);
        prop_assert!(days * ONE_E5 < DAYS_PER_MONTH_E6);
        prop_assert!(months < 120);
    }

    #[test]
    fn precise_carry_bounds(mags in magnitudes()) {
        let mut acc = Accumulator::from_period(Period::from(mags), "");
        acc.ripple_up(Precision::Precise);
        let [_, months, _, hours, minutes, seconds] = acc.magnitudes();
        prop_assert!(seconds < 600);
        prop_assert!(minutes < 600);
        prop_assert!(hours <= HOURS_CARRY_THRESHOLD);
        prop_assert!(months < 120);
    }

    #[test]
    fn days_and_hours_never_overflow(mags in magnitudes(), precise in any::<bool>()) {
        let [_, _, days, hours, _, _] = normalise(Period::from(mags), precise).magnitudes();
        prop_assert!(days <= FIELD_MAX, "days {} in {:?}", days, mags);
        prop_assert!(hours <= FIELD_MAX, "hours {} in {:?}", hours, mags);
    }
}

#[test]
fn overflow_names_the_field_and_keeps_label() {
    let p = Period::new(i16::MIN, 0, 0, 0, 0, 0);
    let acc = period_norm::normalise_labelled(p, "-P3276.8Y", true);
    let err = finalize(acc).unwrap_err();
    assert_eq!(err.to_string(), "-P3276.8Y: integer overflow occurred in years");
}
