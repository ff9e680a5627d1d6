//! Eigenvalue backends for quadrature construction.
//!
//! Quadrature construction needs two linear-algebra capabilities: general
//! real eigenvalues for companion-matrix root finding, and symmetric
//! tridiagonal eigenpairs for the Golub-Welsch algorithm. Both sit behind
//! the [`EigenSolver`] trait so callers can substitute another backend.

mod dense;
mod general;

pub use dense::DenseEigenSolver;

use nalgebra::DMatrix;

use crate::error::Result;

/// Eigenvalue capabilities consumed by the quadrature routines.
pub trait EigenSolver {
    /// Compute the eigenvalues of a dense real matrix.
    ///
    /// The matrix is consumed. Eigenvalues are returned as separate real and
    /// imaginary parts, both of length `a.nrows()`, in no particular order.
    fn general_eigenvalues(&self, a: DMatrix<f64>) -> Result<(Vec<f64>, Vec<f64>)>;

    /// Compute eigenvalues and eigenvectors of a symmetric tridiagonal
    /// matrix given in compact form.
    ///
    /// `diag` holds the diagonal and is overwritten with the eigenvalues in
    /// ascending order. `off_diag` holds the sub/super-diagonal and must be
    /// exactly one entry shorter than `diag`; the backend may use it as
    /// scratch, so its contents are unspecified after the call. The returned
    /// matrix holds one unit-normalized eigenvector per column, ordered to
    /// match the eigenvalues.
    fn symmetric_tridiagonal_eigen(
        &self,
        diag: &mut [f64],
        off_diag: &mut [f64],
    ) -> Result<DMatrix<f64>>;
}
