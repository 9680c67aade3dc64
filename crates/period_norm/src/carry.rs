//! Carry propagation ("ripple up").
//!
//! Contract:
//! - seconds → minutes → hours by whole multiples of 60 (modulus 600 at ×10).
//! - hours → days by 24 and days → months by the average month length only in
//!   imprecise mode, or in precise mode once the magnitude passes the derived
//!   threshold (skipping the carry there would overflow the narrowed field).
//! - months → years by 12, always.

use period_core::fixed::{
    DAYS_CARRY_THRESHOLD, DAYS_PER_MONTH_E6, HOURS_CARRY_THRESHOLD, HOURS_PER_DAY,
    MINUTES_PER_HOUR, MONTHS_PER_YEAR, ONE_E5, SCALE, SECONDS_PER_MINUTE,
};
use period_core::Precision;

use crate::accumulator::Accumulator;

/// Move whole multiples of `ratio` units from `lo` into `hi` (both ×10).
#[inline]
fn carry(lo: &mut i64, hi: &mut i64, ratio: i64) {
    let modulus = ratio * SCALE;
    *hi += (*lo / modulus) * SCALE;
    *lo %= modulus;
}

impl Accumulator {
    pub fn ripple_up(&mut self, precision: Precision) -> &mut Self {
        let precise = precision.is_precise();

        carry(&mut self.seconds, &mut self.minutes, SECONDS_PER_MINUTE);
        carry(&mut self.minutes, &mut self.hours, MINUTES_PER_HOUR);

        if !precise || self.hours > HOURS_CARRY_THRESHOLD {
            if precise {
                tracing::debug!(
                    hours = self.hours,
                    threshold = HOURS_CARRY_THRESHOLD,
                    "carrying hours into days near field bound"
                );
            }
            carry(&mut self.hours, &mut self.days, HOURS_PER_DAY);
        }

        if !precise || self.days > DAYS_CARRY_THRESHOLD {
            if precise {
                tracing::debug!(
                    days = self.days,
                    threshold = DAYS_CARRY_THRESHOLD,
                    "carrying days into months near field bound"
                );
            }
            // Lift ×10 days to the ×10⁶ scale of the month constant.
            let days_e6 = self.days * ONE_E5;
            self.months += (days_e6 / DAYS_PER_MONTH_E6) * SCALE;
            self.days = (days_e6 % DAYS_PER_MONTH_E6) / ONE_E5;
        }

        carry(&mut self.months, &mut self.years, MONTHS_PER_YEAR);

        tracing::trace!(acc = %self, %precision, "ripple up");
        self
    }
}
