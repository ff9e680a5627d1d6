//! Hermite polynomial evaluation.
//!
//! Physicists' Hermite polynomials H_n(x) are orthogonal on (-∞, ∞) with
//! weight exp(-x²):
//! ∫ H_m(x) H_n(x) exp(-x²) dx = √π 2^n n! δ_{mn}

use crate::error::{GhqError, Result};

/// Evaluate Hermite polynomial H_n(x) using three-term recurrence.
///
/// The recurrence relation is:
/// H_0(x) = 1
/// H_1(x) = 2x
/// H_{n+1}(x) = 2x H_n(x) - 2n H_{n-1}(x)
///
/// Only the last two values are kept, so evaluation is O(n) time and O(1)
/// space regardless of order.
pub fn hermite(n: usize, x: f64) -> f64 {
    if n == 0 {
        return 1.0;
    }
    if n == 1 {
        return 2.0 * x;
    }

    let mut h_prev = 1.0; // H_{n-2}
    let mut h_curr = 2.0 * x; // H_{n-1}

    for k in 1..n {
        let h_next = 2.0 * x * h_curr - 2.0 * k as f64 * h_prev;
        h_prev = h_curr;
        h_curr = h_next;
    }

    h_curr
}

/// Evaluate Hermite polynomials over sequences of points and orders.
///
/// The broadcast mode is chosen by comparing lengths:
/// - equal lengths: pairwise, result\[i\] = H_{orders\[i\]}(xs\[i\])
/// - more points than orders: `orders[0]` is held fixed over all points
/// - more orders than points: `xs[0]` is held fixed over all orders
///
/// Either sequence being empty is an error, since no broadcast mode applies.
pub fn hermite_many(xs: &[f64], orders: &[usize]) -> Result<Vec<f64>> {
    if xs.is_empty() || orders.is_empty() {
        return Err(GhqError::EmptyInput);
    }

    let values = if xs.len() == orders.len() {
        xs.iter().zip(orders).map(|(&x, &n)| hermite(n, x)).collect()
    } else if xs.len() > orders.len() {
        let n = orders[0];
        xs.iter().map(|&x| hermite(n, x)).collect()
    } else {
        let x = xs[0];
        orders.iter().map(|&n| hermite(n, x)).collect()
    };

    Ok(values)
}
