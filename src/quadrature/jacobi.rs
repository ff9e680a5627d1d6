//! Jacobi matrix construction for the Hermite recurrence.

use crate::error::{GhqError, Result};

/// Build the symmetric tridiagonal Jacobi matrix for Hermite polynomials,
/// in compact form.
///
/// Returns `(diag, off_diag)` where `diag` has length `n` and is all zero
/// (the Hermite recurrence has no linear term) and `off_diag` has length
/// `n - 1` with entries `sqrt((i + 1) / 2)`, from the monic recurrence
/// coefficient A_i = i/2. Closed-form; no solver involved.
pub fn hermite_jacobi(n: usize) -> Result<(Vec<f64>, Vec<f64>)> {
    if n == 0 {
        return Err(GhqError::InvalidOrder { order: 0 });
    }

    let diag = vec![0.0; n];
    let off_diag = (0..n - 1).map(|i| ((i + 1) as f64 / 2.0).sqrt()).collect();
    Ok((diag, off_diag))
}
