//! Hermite polynomial evaluation and coefficient generation.
//!
//! This module provides:
//! - Scalar evaluation of H_n(x) via the three-term recurrence
//! - Broadcast evaluation over sequences of points and orders
//! - Explicit coefficients of H_n from a triangular integer table

mod coefficients;
mod hermite;

pub use coefficients::hermite_coefficients;
pub use hermite::{hermite, hermite_many};
