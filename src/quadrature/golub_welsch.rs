//! Golub-Welsch conversion of a Jacobi matrix into nodes and weights.

use crate::eigen::{DenseEigenSolver, EigenSolver};
use crate::error::Result;

/// Compute quadrature nodes and weights from a Jacobi matrix in compact form.
///
/// `diag` and `off_diag` describe the symmetric tridiagonal Jacobi matrix of
/// an orthogonal polynomial family; `mu0` is the zeroth moment of the
/// family's weight function. The nodes are the matrix's eigenvalues,
/// ascending; the weight paired with node j is `mu0` times the squared first
/// component of unit eigenvector j. Both buffers are consumed: the
/// eigenvalues take over the diagonal's storage.
pub fn golub_welsch(diag: Vec<f64>, off_diag: Vec<f64>, mu0: f64) -> Result<(Vec<f64>, Vec<f64>)> {
    golub_welsch_with(diag, off_diag, mu0, &DenseEigenSolver::default())
}

/// [`golub_welsch`] with a caller-supplied eigenvalue backend.
pub fn golub_welsch_with(
    mut diag: Vec<f64>,
    mut off_diag: Vec<f64>,
    mu0: f64,
    solver: &impl EigenSolver,
) -> Result<(Vec<f64>, Vec<f64>)> {
    let vectors = solver.symmetric_tridiagonal_eigen(&mut diag, &mut off_diag)?;

    let weights = vectors
        .column_iter()
        .map(|col| mu0 * col[0] * col[0])
        .collect();
    Ok((diag, weights))
}
