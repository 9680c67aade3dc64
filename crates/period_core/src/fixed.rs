//! Integer-first fixed-point constants and helpers.
//!
//! Every period field carries one decimal digit: a stored `15` is 1.5 units.
//! The average month length needs more digits than that, so it is held at
//! 10⁶ scale and day quantities are lifted to the same scale before dividing.
//!
//! The precise-mode carry thresholds are derived from the 16-bit field bound
//! rather than written out; change `FIELD_MAX` and they follow.

use core::fmt;

/// Fixed-point scale shared by all six fields.
pub const SCALE: i64 = 10;

pub const ONE_E5: i64 = 100_000;
pub const ONE_E6: i64 = 1_000_000;

/// 30.436875 days (365.2425 / 12) at 10⁶ scale.
pub const DAYS_PER_MONTH_E6: i64 = 30_436_875;

pub const MONTHS_PER_YEAR: i64 = 12;
pub const HOURS_PER_DAY: i64 = 24;
pub const MINUTES_PER_HOUR: i64 = 60;
pub const SECONDS_PER_MINUTE: i64 = 60;

/// Largest magnitude a narrowed field may hold (tenths).
pub const FIELD_MAX: i64 = i16::MAX as i64;

/// Largest whole-unit value representable in a field, in tenths.
pub const SCALED_MAX: i64 = whole_tenths(FIELD_MAX);

/// Precise mode carries hours into days only above this magnitude (tenths).
pub const HOURS_CARRY_THRESHOLD: i64 = hours_carry_threshold(SCALED_MAX);

/// Precise mode carries days into months only above this magnitude (tenths).
pub const DAYS_CARRY_THRESHOLD: i64 = days_carry_threshold(SCALED_MAX);

/// Drop the tenths digit: `37 -> 30`.
#[inline]
pub const fn whole_tenths(v: i64) -> i64 {
    (v / SCALE) * SCALE
}

/// The tenths digit alone: `37 -> 7`.
#[inline]
pub const fn tenth(v: i64) -> i64 {
    v % SCALE
}

/// `max - max/60 - max/3600`, floored once at the end.
///
/// After this check only the day-fraction spill of redistribution raises hours,
/// by at most [`MAX_DAY_SPILL_HOURS`], which stays inside the gap to `FIELD_MAX`.
pub const fn hours_carry_threshold(max: i64) -> i64 {
    let per_hour = MINUTES_PER_HOUR * SECONDS_PER_MINUTE;
    max * (per_hour - SECONDS_PER_MINUTE - 1) / per_hour
}

/// `max` less the largest month-fraction spill, so days left uncarried still
/// fit once redistribution folds a month tenth into them.
pub const fn days_carry_threshold(max: i64) -> i64 {
    max - MAX_MONTH_SPILL_DAYS
}

/// Most tenth-days a 0.9 month adds during redistribution (273).
pub const MAX_MONTH_SPILL_DAYS: i64 = (SCALE - 1) * DAYS_PER_MONTH_E6 / ONE_E6;

/// Most tenth-hours a 0.9 day adds during redistribution (216).
pub const MAX_DAY_SPILL_HOURS: i64 = (SCALE - 1) * HOURS_PER_DAY;

/// Render six tenths magnitudes (years..seconds) as an ISO-8601 style period,
/// e.g. `P1.5Y3D`, `-PT2H30M`, or `P0D` when everything is zero.
pub fn write_iso(f: &mut fmt::Formatter<'_>, negative: bool, tenths: &[i64; 6]) -> fmt::Result {
    if negative {
        f.write_str("-")?;
    }
    f.write_str("P")?;
    if tenths.iter().all(|&v| v == 0) {
        return f.write_str("0D");
    }

    let mut in_time = false;
    for field in crate::Field::ALL {
        let v = tenths[field.index()].abs();
        if v == 0 {
            continue;
        }
        if field.is_time() && !in_time {
            f.write_str("T")?;
            in_time = true;
        }
        let frac = tenth(v);
        if frac == 0 {
            write!(f, "{}{}", v / SCALE, field.designator())?;
        } else {
            write!(f, "{}.{}{}", v / SCALE, frac, field.designator())?;
        }
    }
    Ok(())
}
