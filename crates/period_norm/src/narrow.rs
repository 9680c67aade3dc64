//! Narrowing back to 16-bit fields, with overflow detection.

use period_core::fixed::FIELD_MAX;
use period_core::{Field, Period};

use crate::accumulator::Accumulator;
use crate::errors::{NormaliseError, NormaliseResult};

impl Accumulator {
    /// Narrow to a `Period`, reapplying the sign to every field.
    ///
    /// Fails when any magnitude exceeds `i16::MAX`; the error lists every such
    /// field, largest unit first.
    pub fn into_period(self) -> NormaliseResult<Period> {
        let mags = self.magnitudes();
        let fields: Vec<Field> = Field::ALL
            .into_iter()
            .filter(|f| mags[f.index()] > FIELD_MAX)
            .collect();

        if !fields.is_empty() {
            let subject = self.label.clone().unwrap_or_else(|| self.to_string());
            tracing::debug!(%subject, ?fields, "period overflow");
            return Err(NormaliseError::Overflow { subject, fields });
        }

        let sign = if self.negative { -1 } else { 1 };
        let mut out = [0i16; 6];
        for (slot, &m) in out.iter_mut().zip(mags.iter()) {
            // in range: checked above
            *slot = (sign * m) as i16;
        }
        Ok(Period::from(out))
    }
}
