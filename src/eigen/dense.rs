//! Dense eigenvalue backend built on nalgebra.

use nalgebra::{DMatrix, SymmetricEigen};

use super::general::{balance, hessenberg, hessenberg_eigenvalues};
use super::EigenSolver;
use crate::error::{GhqError, Result};

/// Eigensolver over dense nalgebra matrices.
///
/// General eigenvalues go through balancing, Hessenberg reduction, and
/// Francis double-shift QR sweeps; symmetric tridiagonal eigenpairs come
/// from the symmetric eigendecomposition. Both are iterative, so the solver
/// carries a convergence tolerance and an iteration budget.
#[derive(Debug, Clone, Copy)]
pub struct DenseEigenSolver {
    /// Convergence tolerance for the deflation tests.
    pub eps: f64,
    /// Iteration budget per matrix row: a matrix of size n is allowed
    /// `max_sweeps * n` sweeps overall. Zero lifts the overall cap; a block
    /// that stops deflating still fails after a fixed number of sweeps, so
    /// the iteration terminates either way.
    pub max_sweeps: usize,
}

impl Default for DenseEigenSolver {
    fn default() -> Self {
        Self {
            eps: f64::EPSILON,
            max_sweeps: 100,
        }
    }
}

impl DenseEigenSolver {
    fn iteration_budget(&self, n: usize) -> usize {
        self.max_sweeps * n
    }
}

impl EigenSolver for DenseEigenSolver {
    fn general_eigenvalues(&self, a: DMatrix<f64>) -> Result<(Vec<f64>, Vec<f64>)> {
        let n = a.nrows();
        if n == 0 {
            return Ok((Vec::new(), Vec::new()));
        }
        if n == 1 {
            return Ok((vec![a[(0, 0)]], vec![0.0]));
        }

        let mut working = a;
        balance(&mut working);
        hessenberg(&mut working);
        hessenberg_eigenvalues(working, self.eps, self.iteration_budget(n))
    }

    fn symmetric_tridiagonal_eigen(
        &self,
        diag: &mut [f64],
        off_diag: &mut [f64],
    ) -> Result<DMatrix<f64>> {
        let n = diag.len();
        assert_eq!(
            off_diag.len(),
            n.saturating_sub(1),
            "Need one fewer off-diagonal entry than diagonal"
        );
        if n <= 1 {
            // Nothing to factorize; the eigenvalue is the diagonal itself
            return Ok(DMatrix::identity(n, n));
        }

        let mut m = DMatrix::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = diag[i];
        }
        for i in 0..n - 1 {
            m[(i + 1, i)] = off_diag[i];
            m[(i, i + 1)] = off_diag[i];
        }

        let budget = self.iteration_budget(n);
        let eigen = SymmetricEigen::try_new(m, self.eps, budget)
            .ok_or(GhqError::NoConvergence { iterations: budget })?;

        // nalgebra returns eigenpairs in no guaranteed order; sort ascending
        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&a, &b| eigen.eigenvalues[a].total_cmp(&eigen.eigenvalues[b]));

        for (slot, &src) in diag.iter_mut().zip(&order) {
            *slot = eigen.eigenvalues[src];
        }
        let vectors = DMatrix::from_fn(n, n, |i, j| eigen.eigenvectors[(i, order[j])]);
        Ok(vectors)
    }
}
