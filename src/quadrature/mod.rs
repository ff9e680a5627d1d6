//! Quadrature rule construction.
//!
//! This module provides:
//! - Companion-matrix root finding for real-rooted polynomials
//! - The Hermite Jacobi matrix in compact tridiagonal form
//! - The Golub-Welsch conversion of eigenpairs into nodes and weights
//! - The two Gauss-Hermite rule constructors

mod companion;
mod golub_welsch;
mod jacobi;
mod rules;

pub use companion::{polynomial_roots, polynomial_roots_with};
pub use golub_welsch::{golub_welsch, golub_welsch_with};
pub use jacobi::hermite_jacobi;
pub use rules::{
    gauss_hermite, gauss_hermite_direct, gauss_hermite_direct_with, gauss_hermite_with,
    GaussHermiteRule,
};
