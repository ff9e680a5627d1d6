//! # ghq-rs
//!
//! Gauss-Hermite quadrature rules for integrals weighted by exp(-x²).
//!
//! This crate provides the building blocks and two rule constructors:
//! - Hermite polynomial evaluation and explicit coefficients
//! - Companion-matrix root finding for real-rooted polynomials
//! - The Golub-Welsch eigenvalue method on the Hermite Jacobi matrix
//! - [`gauss_hermite`] (stable, eigenvalue-based) and
//!   [`gauss_hermite_direct`] (root-based, modest orders only)
//!
//! The eigenvalue backend sits behind the [`EigenSolver`] trait; the
//! provided [`DenseEigenSolver`] binds it to nalgebra.

pub mod eigen;
pub mod error;
pub mod polynomial;
pub mod quadrature;

// Re-export main types for convenience
pub use eigen::{DenseEigenSolver, EigenSolver};
pub use error::{GhqError, Result};
pub use polynomial::{hermite, hermite_coefficients, hermite_many};
pub use quadrature::{
    gauss_hermite, gauss_hermite_direct, gauss_hermite_direct_with, gauss_hermite_with,
    golub_welsch, golub_welsch_with, hermite_jacobi, polynomial_roots, polynomial_roots_with,
    GaussHermiteRule,
};
