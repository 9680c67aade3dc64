//! Fraction redistribution ("move fraction to right").
//!
//! A tenth left on the largest populated field is fine on its own (1.5 years),
//! but next to a populated smaller field it is folded into that field, where the
//! ×10 scale can hold it exactly. One top-down pass; nothing is re-examined.

use period_core::fixed::{
    tenth, whole_tenths, DAYS_PER_MONTH_E6, HOURS_PER_DAY, MINUTES_PER_HOUR, MONTHS_PER_YEAR,
    ONE_E6, SECONDS_PER_MINUTE,
};
use period_core::Field;

use crate::accumulator::Accumulator;

impl Accumulator {
    pub fn move_fraction_to_right(&mut self) -> &mut Self {
        let y = tenth(self.years);
        if y != 0 && self.any_below(Field::Years) {
            self.months += y * MONTHS_PER_YEAR;
            self.years = whole_tenths(self.years);
        }

        let m = tenth(self.months);
        if m != 0 && self.any_below(Field::Months) {
            self.days += (m * DAYS_PER_MONTH_E6) / ONE_E6;
            self.months = whole_tenths(self.months);
        }

        let d = tenth(self.days);
        if d != 0 && self.any_below(Field::Days) {
            self.hours += d * HOURS_PER_DAY;
            self.days = whole_tenths(self.days);
        }

        let h = tenth(self.hours);
        if h != 0 && self.any_below(Field::Hours) {
            self.minutes += h * MINUTES_PER_HOUR;
            self.hours = whole_tenths(self.hours);
        }

        let mm = tenth(self.minutes);
        if mm != 0 && self.any_below(Field::Minutes) {
            self.seconds += mm * SECONDS_PER_MINUTE;
            self.minutes = whole_tenths(self.minutes);
        }

        tracing::trace!(acc = %self, "move fraction to right");
        self
    }

    /// True if any field smaller than `field` is non-zero.
    fn any_below(&self, field: Field) -> bool {
        self.magnitudes()[field.index() + 1..].iter().any(|&v| v != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use period_core::Period;

    fn moved(p: Period) -> [i64; 6] {
        let mut acc = Accumulator::from_period(p, "");
        acc.move_fraction_to_right();
        acc.magnitudes()
    }

    #[test]
    fn fraction_without_lower_fields_stays() {
        assert_eq!(moved(Period::new(15, 0, 0, 0, 0, 0)), [15, 0, 0, 0, 0, 0]);
        assert_eq!(moved(Period::new(0, 0, 0, 0, 25, 0)), [0, 0, 0, 0, 25, 0]);
    }

    #[test]
    fn year_fraction_becomes_months() {
        // 0.5 y = 6 months
        assert_eq!(moved(Period::new(15, 0, 30, 0, 0, 0)), [10, 60, 30, 0, 0, 0]);
    }

    #[test]
    fn month_fraction_uses_average_month() {
        // 0.5 month = 15.2184375 days → 15.2; the 0.2 day then becomes 4.8 hours
        assert_eq!(moved(Period::new(0, 15, 0, 10, 0, 0)), [0, 10, 150, 58, 0, 0]);
    }

    #[test]
    fn cascades_down_to_seconds() {
        // 0.5 d → 12 h; 0.5 h → 30 min; 0.5 min → 30 s
        assert_eq!(moved(Period::new(0, 0, 15, 5, 5, 1)), [0, 0, 10, 120, 300, 301]);
    }

    #[test]
    fn whole_fields_pass_through() {
        // 0.5 y lands as a whole 6 months; only the days tenth moves after that.
        assert_eq!(moved(Period::new(15, 0, 5, 10, 0, 0)), [10, 60, 0, 130, 0, 0]);
    }
}
