//! Hermite polynomial coefficient generation.

use crate::error::{GhqError, Result};

/// Generate the coefficients of Hermite polynomial H_n.
///
/// Returns `n + 1` coefficients in ascending degree order, so the polynomial
/// value at x is sum over j of `c[j] * x^j`. The leading coefficient is `2^n`.
///
/// Coefficients are built as a triangular integer table, one row per degree,
/// with each row derived from the two rows above it by the recurrence
/// H_{i+1}(x) = 2x H_i(x) - 2i H_{i-1}(x) applied term-wise:
/// c_{i,j} = 2 c_{i-1,j-1} - 2(i-1) c_{i-2,j}
/// The finished row is widened to f64 on return.
///
/// Hermite coefficients grow combinatorially. The i128 table overflows in the
/// mid-forties of `n`; that is reported as
/// [`GhqError::CoefficientOverflow`](crate::GhqError::CoefficientOverflow)
/// rather than wrapping silently.
pub fn hermite_coefficients(n: usize) -> Result<Vec<f64>> {
    let mut table: Vec<Vec<i128>> = Vec::with_capacity(n + 1);
    table.push(vec![1]); // H_0 = 1
    if n >= 1 {
        table.push(vec![0, 2]); // H_1 = 2x
    }

    for i in 2..=n {
        let scale = 2 * (i as i128 - 1);
        let mut row = vec![0i128; i + 1];
        for (j, slot) in row.iter_mut().enumerate() {
            let shifted = if j > 0 { table[i - 1][j - 1] } else { 0 };
            let damped = if j + 2 <= i { table[i - 2][j] } else { 0 };
            *slot = shifted
                .checked_mul(2)
                .zip(damped.checked_mul(scale))
                .and_then(|(a, b)| a.checked_sub(b))
                .ok_or(GhqError::CoefficientOverflow { order: i })?;
        }
        table.push(row);
    }

    Ok(table[n].iter().map(|&c| c as f64).collect())
}
