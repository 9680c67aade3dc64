//! Sign-separated working representation used during normalization.

use core::fmt;

use period_core::{fixed, Field, Period};

/// Six non-negative magnitudes at ×10 scale, plus the factored-out sign.
///
/// Created fresh for one normalization and consumed by [`Accumulator::into_period`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Accumulator {
    pub(crate) years: i64,
    pub(crate) months: i64,
    pub(crate) days: i64,
    pub(crate) hours: i64,
    pub(crate) minutes: i64,
    pub(crate) seconds: i64,
    pub(crate) negative: bool,
    pub(crate) label: Option<String>,
}

impl Accumulator {
    /// Absolute values of each field; the sign flag is set iff `period` is negative.
    /// An empty `label` counts as no label.
    pub fn from_period(period: Period, label: &str) -> Self {
        if period.has_mixed_signs() {
            tracing::warn!(%period, "mixed-sign period; normalizing field magnitudes");
        }
        let [years, months, days, hours, minutes, seconds] =
            period.to_array().map(|v| i64::from(v).abs());
        Self {
            years,
            months,
            days,
            hours,
            minutes,
            seconds,
            negative: period.is_negative(),
            label: (!label.is_empty()).then(|| label.to_string()),
        }
    }

    /// Magnitudes in canonical order, in tenths.
    #[inline]
    pub fn magnitudes(&self) -> [i64; 6] {
        [
            self.years,
            self.months,
            self.days,
            self.hours,
            self.minutes,
            self.seconds,
        ]
    }

    pub fn get(&self, field: Field) -> i64 {
        self.magnitudes()[field.index()]
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

impl fmt::Display for Accumulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fixed::write_iso(f, self.negative, &self.magnitudes())
    }
}
