//! Normalization failures.

use period_core::Field;
use thiserror::Error;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum NormaliseError {
    /// One or more fields exceed the 16-bit bound after normalization.
    /// `subject` is the caller's label or, failing that, the rendered accumulator.
    #[error("{subject}: integer overflow occurred in {}", join_fields(.fields))]
    Overflow { subject: String, fields: Vec<Field> },
}

impl NormaliseError {
    /// Overflowing fields, largest unit first.
    pub fn fields(&self) -> &[Field] {
        match self {
            NormaliseError::Overflow { fields, .. } => fields,
        }
    }

    pub fn subject(&self) -> &str {
        match self {
            NormaliseError::Overflow { subject, .. } => subject,
        }
    }
}

pub type NormaliseResult<T> = Result<T, NormaliseError>;

fn join_fields(fields: &[Field]) -> String {
    fields.iter().map(|f| f.name()).collect::<Vec<_>>().join(",")
}
