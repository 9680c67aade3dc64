//! Normalization mode.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Whether calendar-lossy carries (hours→days, days→months) may run freely.
///
/// `Precise` suppresses them unless the magnitude is close enough to the field
/// bound that skipping the carry would overflow. Years↔months is exact and is
/// never suppressed.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Precision {
    #[default]
    Precise,
    Imprecise,
}

impl Precision {
    #[inline]
    pub const fn is_precise(self) -> bool {
        matches!(self, Precision::Precise)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Precision::Precise => "precise",
            Precision::Imprecise => "imprecise",
        }
    }
}

impl From<bool> for Precision {
    #[inline]
    fn from(precise: bool) -> Self {
        if precise {
            Precision::Precise
        } else {
            Precision::Imprecise
        }
    }
}

impl From<Precision> for bool {
    #[inline]
    fn from(p: Precision) -> Self {
        p.is_precise()
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Precision {
    type Err = CoreError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "precise" => Ok(Precision::Precise),
            "imprecise" => Ok(Precision::Imprecise),
            _ => Err(CoreError::InvalidPrecision),
        }
    }
}
