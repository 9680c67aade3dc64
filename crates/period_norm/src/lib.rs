// crates/period_norm/src/lib.rs
//! Period normalization.
//!
//! Pipeline (each stage consumes the previous stage's output):
//!   `Accumulator::from_period` → `ripple_up` → `move_fraction_to_right` → `into_period`
//!
//! - All arithmetic is on non-negative `i64` magnitudes at the shared ×10 scale;
//!   the sign is factored out up front and reapplied on narrowing.
//! - No floating point. Month length is the Gregorian average at 10⁶ scale.
//! - The only failure is overflow on narrowing back to 16-bit fields.

#![forbid(unsafe_code)]

pub use period_core::{Field, Period, Precision};

pub mod accumulator;
pub mod errors;

mod carry;
mod fraction;
mod narrow;

pub use accumulator::Accumulator;
pub use errors::{NormaliseError, NormaliseResult};

// ----------------------------- Entry points -----------------------------

/// Construction, carry propagation and fraction redistribution, in sequence.
pub fn normalise(period: Period, precise: impl Into<Precision>) -> Accumulator {
    normalise_labelled(period, "", precise)
}

/// As [`normalise`], with the caller's original text kept for overflow messages.
pub fn normalise_labelled(
    period: Period,
    label: &str,
    precise: impl Into<Precision>,
) -> Accumulator {
    let mut acc = Accumulator::from_period(period, label);
    acc.ripple_up(precise.into()).move_fraction_to_right();
    acc
}

/// Narrow a normalized accumulator back to a `Period`.
pub fn finalize(acc: Accumulator) -> NormaliseResult<Period> {
    acc.into_period()
}

/// `Period::normalise` for callers that only want the end result.
pub trait NormaliseExt {
    fn normalise<P: Into<Precision>>(self, precise: P) -> NormaliseResult<Period>;
}

impl NormaliseExt for Period {
    fn normalise<P: Into<Precision>>(self, precise: P) -> NormaliseResult<Period> {
        finalize(normalise(self, precise))
    }
}
