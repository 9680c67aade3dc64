//! The six-field period record.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::{CoreError, CoreResult};
use crate::field::Field;
use crate::fixed::{self, SCALE};

/// A calendar-agnostic span of time.
///
/// Each field is fixed-point with one decimal digit, so `Period::new(15, 0, 0, 0, 0, 0)`
/// is one and a half years. A period is negative when any field is negative;
/// well-formed periods never mix signs.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Period {
    years: i16,
    months: i16,
    days: i16,
    hours: i16,
    minutes: i16,
    seconds: i16,
}

impl Period {
    pub const ZERO: Period = Period::new(0, 0, 0, 0, 0, 0);

    /// Build from tenths of each unit.
    #[inline]
    pub const fn new(
        years: i16,
        months: i16,
        days: i16,
        hours: i16,
        minutes: i16,
        seconds: i16,
    ) -> Self {
        Self {
            years,
            months,
            days,
            hours,
            minutes,
            seconds,
        }
    }

    /// Build from whole units; fails if a value does not fit once scaled to tenths.
    pub fn from_units(
        years: i16,
        months: i16,
        days: i16,
        hours: i16,
        minutes: i16,
        seconds: i16,
    ) -> CoreResult<Self> {
        Ok(Self {
            years: scale_up(years, Field::Years)?,
            months: scale_up(months, Field::Months)?,
            days: scale_up(days, Field::Days)?,
            hours: scale_up(hours, Field::Hours)?,
            minutes: scale_up(minutes, Field::Minutes)?,
            seconds: scale_up(seconds, Field::Seconds)?,
        })
    }

    pub fn years(&self) -> i16 {
        self.years
    }

    pub fn months(&self) -> i16 {
        self.months
    }

    pub fn days(&self) -> i16 {
        self.days
    }

    pub fn hours(&self) -> i16 {
        self.hours
    }

    pub fn minutes(&self) -> i16 {
        self.minutes
    }

    pub fn seconds(&self) -> i16 {
        self.seconds
    }

    /// Field value in tenths.
    pub fn get(&self, field: Field) -> i16 {
        self.to_array()[field.index()]
    }

    /// Fields in canonical order, in tenths.
    #[inline]
    pub fn to_array(&self) -> [i16; 6] {
        [
            self.years,
            self.months,
            self.days,
            self.hours,
            self.minutes,
            self.seconds,
        ]
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.to_array().iter().all(|&v| v == 0)
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.to_array().iter().any(|&v| v < 0)
    }

    /// True when some fields are negative and others positive.
    pub fn has_mixed_signs(&self) -> bool {
        let xs = self.to_array();
        xs.iter().any(|&v| v < 0) && xs.iter().any(|&v| v > 0)
    }
}

fn scale_up(units: i16, field: Field) -> CoreResult<i16> {
    units
        .checked_mul(SCALE as i16)
        .ok_or(CoreError::DomainOutOfRange(field.name()))
}

impl From<[i16; 6]> for Period {
    fn from(xs: [i16; 6]) -> Self {
        Period::new(xs[0], xs[1], xs[2], xs[3], xs[4], xs[5])
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tenths = self.to_array().map(i64::from);
        fixed::write_iso(f, self.is_negative(), &tenths)
    }
}
