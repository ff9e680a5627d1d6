//! Error types shared across the crate.

use thiserror::Error;

/// Result alias used by every fallible operation in this crate.
pub type Result<T> = std::result::Result<T, GhqError>;

/// Errors produced while evaluating Hermite polynomials or constructing
/// quadrature rules.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GhqError {
    /// A quadrature order of zero was requested.
    #[error("quadrature order must be at least 1, got {order}")]
    InvalidOrder {
        /// The rejected order.
        order: usize,
    },

    /// Broadcast evaluation received an empty point or order sequence.
    #[error("polynomial evaluation requires at least one point and one order")]
    EmptyInput,

    /// Root finding was asked for a polynomial whose nominal leading
    /// coefficient is zero.
    #[error("leading coefficient of the degree-{degree} polynomial is zero")]
    ZeroLeadingCoefficient {
        /// Nominal degree of the offending polynomial.
        degree: usize,
    },

    /// The integer coefficient table outgrew `i128`.
    #[error("Hermite coefficients of order {order} overflow the integer range")]
    CoefficientOverflow {
        /// First order at which the table overflowed.
        order: usize,
    },

    /// The eigensolver exhausted its iteration budget without converging.
    #[error("eigensolver failed to converge within {iterations} iterations")]
    NoConvergence {
        /// Iteration budget that was exhausted.
        iterations: usize,
    },

    /// An eigenvalue expected to be a real polynomial root carried a
    /// non-negligible imaginary part.
    #[error("polynomial root {real} + {imaginary}i is not real")]
    ComplexRoot {
        /// Real part of the offending eigenvalue.
        real: f64,
        /// Imaginary part of the offending eigenvalue.
        imaginary: f64,
    },
}
