//! The six period granularities.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the six period fields, ordered from largest to smallest unit.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Field {
    Years,
    Months,
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl Field {
    /// Canonical order; overflow reports list fields in this order.
    pub const ALL: [Field; 6] = [
        Field::Years,
        Field::Months,
        Field::Days,
        Field::Hours,
        Field::Minutes,
        Field::Seconds,
    ];

    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Field::Years => "years",
            Field::Months => "months",
            Field::Days => "days",
            Field::Hours => "hours",
            Field::Minutes => "minutes",
            Field::Seconds => "seconds",
        }
    }

    /// ISO-8601 designator letter.
    #[inline]
    pub const fn designator(self) -> char {
        match self {
            Field::Years => 'Y',
            Field::Months | Field::Minutes => 'M',
            Field::Days => 'D',
            Field::Hours => 'H',
            Field::Seconds => 'S',
        }
    }

    /// True for hours, minutes and seconds (the part after `T`).
    #[inline]
    pub const fn is_time(self) -> bool {
        matches!(self, Field::Hours | Field::Minutes | Field::Seconds)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
