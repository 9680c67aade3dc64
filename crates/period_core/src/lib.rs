//! period_core — Core types, fixed-point constants, and the precision mode.
//!
//! This crate is **I/O-free**. It defines the stable types used by the
//! normalization layer (`period_norm`):
//!
//! - `Period`: six signed 16-bit fields, each fixed-point with one decimal digit
//! - `Field`: the six granularities in their canonical (largest-first) order
//! - `Precision`: precise / imprecise normalization mode
//! - Integer-only conversion constants and the derived carry thresholds
//!
//! Serialization derives are gated behind the `serde` feature.

#![forbid(unsafe_code)]

pub mod errors;
pub mod field;
pub mod fixed;
pub mod period;
pub mod precision;

pub use errors::{CoreError, CoreResult};
pub use field::Field;
pub use period::Period;
pub use precision::Precision;
