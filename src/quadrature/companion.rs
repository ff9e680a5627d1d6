//! Polynomial root finding via the companion matrix.

use nalgebra::DMatrix;

use crate::eigen::{DenseEigenSolver, EigenSolver};
use crate::error::{GhqError, Result};

/// Relative tolerance below which an eigenvalue's imaginary part is treated
/// as numerical noise rather than a genuinely complex root.
const IMAGINARY_TOLERANCE: f64 = 1e-12;

/// Find all roots of a real-rooted polynomial.
///
/// Coefficients are in ascending degree order (`c[j]` multiplies x^j), so a
/// degree-n polynomial has `n + 1` entries, and `c[n]` must be nonzero. The
/// polynomial is normalized to monic form, its companion matrix built, and
/// the matrix's eigenvalues computed; those are the roots, returned sorted
/// ascending. A constant polynomial has no roots and yields an empty vector.
///
/// This routine is meant for polynomials known to have real roots, such as
/// orthogonal-family members. Any eigenvalue whose imaginary part exceeds a
/// small relative tolerance is rejected as
/// [`GhqError::ComplexRoot`](crate::GhqError::ComplexRoot) instead of being
/// silently truncated.
pub fn polynomial_roots(coefficients: &[f64]) -> Result<Vec<f64>> {
    polynomial_roots_with(coefficients, &DenseEigenSolver::default())
}

/// [`polynomial_roots`] with a caller-supplied eigenvalue backend.
pub fn polynomial_roots_with(
    coefficients: &[f64],
    solver: &impl EigenSolver,
) -> Result<Vec<f64>> {
    let companion = companion_matrix(coefficients)?;
    let (re, im) = solver.general_eigenvalues(companion)?;

    for (&real, &imaginary) in re.iter().zip(&im) {
        if imaginary.abs() > IMAGINARY_TOLERANCE * real.abs().max(1.0) {
            return Err(GhqError::ComplexRoot { real, imaginary });
        }
    }

    let mut roots = re;
    roots.sort_by(f64::total_cmp);
    Ok(roots)
}

/// Build the companion matrix of the monic normalization of `coefficients`.
///
/// Subdiagonal entries are 1; the last column holds `-c[i] / c[n]`.
fn companion_matrix(coefficients: &[f64]) -> Result<DMatrix<f64>> {
    let degree = match coefficients.len() {
        0 => return Err(GhqError::EmptyInput),
        len => len - 1,
    };
    let leading = coefficients[degree];
    if leading == 0.0 {
        return Err(GhqError::ZeroLeadingCoefficient { degree });
    }

    let mut companion = DMatrix::zeros(degree, degree);
    for i in 1..degree {
        companion[(i, i - 1)] = 1.0;
    }
    for i in 0..degree {
        companion[(i, degree - 1)] = -coefficients[i] / leading;
    }
    Ok(companion)
}
