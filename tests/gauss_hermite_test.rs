//! Cross-checks between the two Gauss-Hermite constructions.
//!
//! Verifies the quadrature invariants (moment exactness, node symmetry,
//! positive weights) over a range of orders, checks small rules against
//! closed-form values, confirms the direct and Golub-Welsch routes agree
//! where the direct method is trustworthy, and checks that a failing
//! eigenvalue backend surfaces through every construction path.

use approx::assert_relative_eq;
use nalgebra::DMatrix;

use ghq_rs::{
    gauss_hermite, gauss_hermite_direct, gauss_hermite_direct_with, gauss_hermite_with,
    golub_welsch_with, polynomial_roots_with, EigenSolver, GaussHermiteRule, GhqError, Result,
};
use std::f64::consts::PI;

/// Largest pairwise mismatch between two rules, nodes and weights together.
fn rule_distance(a: &GaussHermiteRule, b: &GaussHermiteRule) -> f64 {
    a.nodes
        .iter()
        .zip(&b.nodes)
        .chain(a.weights.iter().zip(&b.weights))
        .map(|(&p, &q)| (p - q).abs())
        .fold(0.0, f64::max)
}

/// Backend whose every capability reports the same convergence failure.
struct StalledSolver;

impl EigenSolver for StalledSolver {
    fn general_eigenvalues(&self, _a: DMatrix<f64>) -> Result<(Vec<f64>, Vec<f64>)> {
        Err(GhqError::NoConvergence { iterations: 7 })
    }

    fn symmetric_tridiagonal_eigen(
        &self,
        _diag: &mut [f64],
        _off_diag: &mut [f64],
    ) -> Result<DMatrix<f64>> {
        Err(GhqError::NoConvergence { iterations: 7 })
    }
}

#[test]
fn test_weights_sum_to_sqrt_pi() {
    // Zeroth-moment exactness for every order through the stable regime
    for n in 1..=100 {
        let rule = gauss_hermite(n).unwrap();
        let total: f64 = rule.weights.iter().sum();
        assert!(
            (total - PI.sqrt()).abs() < 1e-10,
            "order {n}: weights sum to {total}, expected sqrt(pi)"
        );
    }
}

#[test]
fn test_nodes_symmetric_about_zero() {
    for n in 1..=100 {
        let rule = gauss_hermite(n).unwrap();
        for i in 0..n {
            let mirrored = -rule.nodes[n - 1 - i];
            assert!(
                (rule.nodes[i] - mirrored).abs() < 1e-10,
                "order {n}: node {i} breaks symmetry ({} vs {mirrored})",
                rule.nodes[i]
            );
        }
    }
}

#[test]
fn test_weights_positive_nodes_distinct() {
    for n in 1..=100 {
        let rule = gauss_hermite(n).unwrap();
        for &w in &rule.weights {
            assert!(w > 0.0, "order {n}: non-positive weight {w}");
        }
        for i in 1..n {
            assert!(
                rule.nodes[i] > rule.nodes[i - 1],
                "order {n}: nodes not strictly increasing"
            );
        }
    }
}

#[test]
fn test_direct_agrees_with_stable() {
    // The direct construction is reliable at modest orders; there the two
    // routes must produce the same rule. Even orders keep their ±λ root
    // pairs away from zero, the layout hardest on the eigensolver.
    for n in [2, 3, 5, 8, 10, 12] {
        let stable = gauss_hermite(n).unwrap();
        let direct = gauss_hermite_direct(n).unwrap();
        let distance = rule_distance(&stable, &direct);
        assert!(
            distance < 1e-8,
            "order {n}: stable and direct rules differ by {distance}"
        );
    }
}

#[test]
fn test_three_point_closed_form() {
    // Nodes 0, ±√(3/2); weights 2√π/3 at the origin, √π/6 outside
    let rule = gauss_hermite(3).unwrap();
    assert_relative_eq!(rule.nodes[0], -(1.5f64).sqrt(), epsilon = 1e-12);
    assert!(rule.nodes[1].abs() < 1e-12);
    assert_relative_eq!(rule.nodes[2], (1.5f64).sqrt(), epsilon = 1e-12);

    assert_relative_eq!(rule.weights[0], PI.sqrt() / 6.0, epsilon = 1e-12);
    assert_relative_eq!(rule.weights[1], 2.0 * PI.sqrt() / 3.0, epsilon = 1e-12);
    assert_relative_eq!(rule.weights[2], PI.sqrt() / 6.0, epsilon = 1e-12);
}

#[test]
fn test_four_point_closed_form() {
    // Nodes ±√((3 ∓ √6)/2); weight of each pair √π / (4(3 ∓ √6))
    let rule = gauss_hermite(4).unwrap();
    let inner = ((3.0 - 6.0f64.sqrt()) / 2.0).sqrt();
    let outer = ((3.0 + 6.0f64.sqrt()) / 2.0).sqrt();
    assert_relative_eq!(rule.nodes[1], -inner, epsilon = 1e-12);
    assert_relative_eq!(rule.nodes[2], inner, epsilon = 1e-12);
    assert_relative_eq!(rule.nodes[0], -outer, epsilon = 1e-12);
    assert_relative_eq!(rule.nodes[3], outer, epsilon = 1e-12);

    let w_inner = PI.sqrt() / (4.0 * (3.0 - 6.0f64.sqrt()));
    let w_outer = PI.sqrt() / (4.0 * (3.0 + 6.0f64.sqrt()));
    assert_relative_eq!(rule.weights[1], w_inner, epsilon = 1e-12);
    assert_relative_eq!(rule.weights[2], w_inner, epsilon = 1e-12);
    assert_relative_eq!(rule.weights[0], w_outer, epsilon = 1e-12);
    assert_relative_eq!(rule.weights[3], w_outer, epsilon = 1e-12);
}

#[test]
fn test_even_moments() {
    // ∫ x^{2k} exp(-x²) dx = (2k-1)!! √π / 2^k, exact once 2k ≤ 2n - 1
    let rule = gauss_hermite(8).unwrap();
    let mut exact = PI.sqrt();
    for k in 1..=7 {
        exact *= (2 * k - 1) as f64 / 2.0;
        let approx_moment = rule.integrate(|x| x.powi(2 * k as i32));
        assert_relative_eq!(approx_moment, exact, max_relative = 1e-10);
    }
}

#[test]
fn test_gaussian_damped_cosine() {
    // ∫ cos(bx) exp(-x²) dx = √π exp(-b²/4); smooth integrand, so a
    // 10-point rule is already far below the assert tolerance
    let rule = gauss_hermite(10).unwrap();
    for b in [0.5, 1.0, 2.0] {
        let integral = rule.integrate(|x| (b * x).cos());
        let exact = PI.sqrt() * (-b * b / 4.0).exp();
        assert_relative_eq!(integral, exact, epsilon = 1e-7);
    }
}

#[test]
fn test_direct_weights_match_log_identity() {
    // Direct weights survive moderately large orders thanks to the
    // log-domain evaluation; sums should still hit sqrt(pi)
    for n in [15, 20] {
        let rule = gauss_hermite_direct(n).unwrap();
        let total: f64 = rule.weights.iter().sum();
        assert!(
            (total - PI.sqrt()).abs() < 1e-6,
            "order {n}: direct weights sum to {total}"
        );
    }
}

#[test]
fn test_direct_construction_high_orders() {
    // Every order below the coefficient-table limit must build a rule;
    // precision degrades well before construction is allowed to fail
    for n in 1..=40 {
        let rule = gauss_hermite_direct(n).unwrap();
        assert_eq!(rule.order(), n);
        for i in 1..n {
            assert!(
                rule.nodes[i] > rule.nodes[i - 1],
                "order {n}: direct nodes not strictly increasing"
            );
        }
        for &w in &rule.weights {
            assert!(
                w.is_finite() && w > 0.0,
                "order {n}: direct weight {w} is not a positive finite value"
            );
        }
        let total: f64 = rule.weights.iter().sum();
        assert!(
            (total - PI.sqrt()).abs() < 1e-3,
            "order {n}: direct weights sum to {total}, far from sqrt(pi)"
        );
    }
}

#[test]
fn test_backend_failure_propagates_unchanged() {
    let solver = StalledSolver;
    let expected = GhqError::NoConvergence { iterations: 7 };

    assert_eq!(gauss_hermite_with(6, &solver), Err(expected.clone()));
    assert_eq!(gauss_hermite_direct_with(6, &solver), Err(expected.clone()));
    assert_eq!(
        polynomial_roots_with(&[-2.0, 0.0, 4.0], &solver),
        Err(expected.clone())
    );
    assert_eq!(
        golub_welsch_with(vec![0.0, 0.0], vec![0.5f64.sqrt()], PI.sqrt(), &solver),
        Err(expected)
    );
}
