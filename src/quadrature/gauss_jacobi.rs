//! Gauss-Jacobi rules on the interval [-1, 1].
//!
//! The points of the rule with `n` points are the roots of the Jacobi
//! polynomial `P_n^(alpha, beta)`. They are found one after another by Newton
//! iteration, starting from the Chebyshev points and deflating the roots that
//! have already been found.
use crate::quadrature::types::NumericalQuadratureDefinition;
use crate::traits::JacobiRuleProvider;
use crate::types::{QuadratureError, Result};
use log::{debug, trace};
use std::f64::consts::{LN_2, PI};

const NEWTON_TOLERANCE: f64 = 1E-14;
const NEWTON_MAX_ITERATIONS: usize = 100;

const LANCZOS_COEFFICIENTS: [f64; 9] = [
    0.999_999_999_999_809_9,
    676.520_368_121_885_1,
    -1_259.139_216_722_402_8,
    771.323_428_777_653_1,
    -176.615_029_162_140_6,
    12.507_343_278_686_905,
    -0.138_571_095_265_720_12,
    9.984_369_578_019_572E-6,
    1.505_632_735_149_311_6E-7,
];

/// Gauss-Jacobi rules computed by Newton iteration.
#[derive(Debug, Clone, Copy, Default)]
pub struct GaussJacobi;

impl JacobiRuleProvider for GaussJacobi {
    fn jacobi_rule(
        &self,
        npoints: usize,
        alpha: f64,
        beta: f64,
    ) -> Result<NumericalQuadratureDefinition> {
        gauss_jacobi_rule(npoints, alpha, beta)
    }
}

/// Return the Gauss-Jacobi rule with `npoints` points for the weight `(1 - x)^alpha (1 + x)^beta`.
///
/// The points are returned in increasing order.
pub fn gauss_jacobi_rule(
    npoints: usize,
    alpha: f64,
    beta: f64,
) -> Result<NumericalQuadratureDefinition> {
    if npoints == 0 {
        return Err(QuadratureError::InvalidOrder(npoints));
    }
    if !(alpha.is_finite() && beta.is_finite() && alpha > -1.0 && beta > -1.0) {
        return Err(QuadratureError::InvalidJacobiParameters { alpha, beta });
    }

    let points = jacobi_roots(npoints, alpha, beta)?;
    let constant = weight_constant(npoints, alpha, beta);
    let weights = points
        .iter()
        .map(|&x| {
            let (_, derivative) = jacobi_and_derivative(npoints, alpha, beta, x);
            constant / ((1.0 - x * x) * derivative * derivative)
        })
        .collect();

    debug!("Computed Gauss-Jacobi rule with {npoints} points for alpha = {alpha}, beta = {beta}");

    Ok(NumericalQuadratureDefinition {
        dim: 1,
        order: 2 * npoints - 1,
        npoints,
        weights,
        points,
    })
}

/// Evaluate `P_n^(alpha, beta)(x)` and its derivative by the three term recurrence.
pub fn jacobi_and_derivative(n: usize, alpha: f64, beta: f64, x: f64) -> (f64, f64) {
    if n == 0 {
        return (1.0, 0.0);
    }
    let ab = alpha + beta;

    let mut p_previous = 1.0;
    let mut dp_previous = 0.0;
    let mut p = 0.5 * (alpha - beta + (ab + 2.0) * x);
    let mut dp = 0.5 * (ab + 2.0);

    for k in 1..n {
        let k = k as f64;
        let a1 = 2.0 * (k + 1.0) * (k + ab + 1.0) * (2.0 * k + ab);
        let a2 = (2.0 * k + ab + 1.0) * (alpha * alpha - beta * beta);
        let a3 = (2.0 * k + ab) * (2.0 * k + ab + 1.0) * (2.0 * k + ab + 2.0);
        let a4 = 2.0 * (k + alpha) * (k + beta) * (2.0 * k + ab + 2.0);

        let p_next = ((a2 + a3 * x) * p - a4 * p_previous) / a1;
        let dp_next = ((a2 + a3 * x) * dp + a3 * p - a4 * dp_previous) / a1;

        p_previous = p;
        dp_previous = dp;
        p = p_next;
        dp = dp_next;
    }
    (p, dp)
}

fn jacobi_roots(n: usize, alpha: f64, beta: f64) -> Result<Vec<f64>> {
    let mut roots = Vec::<f64>::with_capacity(n);

    for index in 0..n {
        let mut x = -(PI * (2 * index + 1) as f64 / (2 * n) as f64).cos();
        if let Some(&previous) = roots.last() {
            x = 0.5 * (x + previous);
        }

        let mut converged = false;
        for iteration in 0..NEWTON_MAX_ITERATIONS {
            let (p, dp) = jacobi_and_derivative(n, alpha, beta, x);
            let deflation: f64 = roots.iter().map(|root| 1.0 / (x - root)).sum();
            let delta = -p / (dp - deflation * p);
            x += delta;
            if delta.abs() < NEWTON_TOLERANCE {
                trace!(
                    "Root {index} of P_{n}^({alpha}, {beta}) converged after {} iterations",
                    iteration + 1
                );
                converged = true;
                break;
            }
        }

        if !converged || !x.is_finite() {
            return Err(QuadratureError::NoConvergence { npoints: n, index });
        }
        roots.push(x);
    }

    roots.sort_by(|a, b| a.total_cmp(b));
    Ok(roots)
}

/// `2^(alpha + beta + 1) Gamma(n + alpha + 1) Gamma(n + beta + 1) / (Gamma(n + 1) Gamma(n + alpha + beta + 1))`
fn weight_constant(n: usize, alpha: f64, beta: f64) -> f64 {
    let n = n as f64;
    let ab = alpha + beta;
    ((ab + 1.0) * LN_2 + ln_gamma(n + alpha + 1.0) + ln_gamma(n + beta + 1.0)
        - ln_gamma(n + 1.0)
        - ln_gamma(n + ab + 1.0))
    .exp()
}

/// Logarithm of the gamma function for positive arguments (Lanczos approximation).
pub(crate) fn ln_gamma(x: f64) -> f64 {
    if x < 0.5 {
        (PI / (PI * x).sin()).ln() - ln_gamma(1.0 - x)
    } else {
        let x = x - 1.0;
        let t = x + 7.5;
        let series = LANCZOS_COEFFICIENTS
            .iter()
            .enumerate()
            .skip(1)
            .fold(LANCZOS_COEFFICIENTS[0], |acc, (i, c)| acc + c / (x + i as f64));
        0.5 * (2.0 * PI).ln() + (x + 0.5) * t.ln() - t + series.ln()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    /// Coefficients of (1 - x)^alpha (1 + x)^beta in the monomial basis.
    fn weight_polynomial(alpha: usize, beta: usize) -> Vec<f64> {
        let mut coefficients = vec![1.0];
        let factors = std::iter::repeat([1.0, -1.0])
            .take(alpha)
            .chain(std::iter::repeat([1.0, 1.0]).take(beta));
        for [c0, c1] in factors {
            let mut next = vec![0.0; coefficients.len() + 1];
            for (i, c) in coefficients.iter().enumerate() {
                next[i] += c0 * c;
                next[i + 1] += c1 * c;
            }
            coefficients = next;
        }
        coefficients
    }

    /// int_{-1}^{1} x^m (1 - x)^alpha (1 + x)^beta dx
    fn exact_moment(m: usize, alpha: usize, beta: usize) -> f64 {
        weight_polynomial(alpha, beta)
            .iter()
            .enumerate()
            .map(|(k, c)| {
                if (m + k) % 2 == 0 {
                    2.0 * c / (m + k + 1) as f64
                } else {
                    0.0
                }
            })
            .sum()
    }

    #[test]
    fn test_ln_gamma() {
        assert_relative_eq!(ln_gamma(1.0), 0.0, epsilon = 1E-14);
        assert_relative_eq!(ln_gamma(5.0), 24f64.ln(), max_relative = 1E-13);
        assert_relative_eq!(ln_gamma(0.5), PI.sqrt().ln(), max_relative = 1E-13);
        assert_relative_eq!(ln_gamma(0.25), 3.625_609_908_221_908f64.ln(), max_relative = 1E-13);
    }

    #[test]
    fn test_legendre_polynomial() {
        let (p, dp) = jacobi_and_derivative(2, 0.0, 0.0, 0.3);
        assert_relative_eq!(p, 0.5 * (3.0 * 0.09 - 1.0), max_relative = 1E-14);
        assert_relative_eq!(dp, 0.9, max_relative = 1E-14);

        let (p, dp) = jacobi_and_derivative(3, 0.0, 0.0, -0.7);
        assert_relative_eq!(p, 0.5 * (5.0 * -0.343 - 3.0 * -0.7), max_relative = 1E-13);
        assert_relative_eq!(dp, 0.5 * (15.0 * 0.49 - 3.0), max_relative = 1E-13);
    }

    #[test]
    fn test_legendre_rules() {
        let rule = gauss_jacobi_rule(2, 0.0, 0.0).unwrap();
        let p = 1.0 / 3f64.sqrt();
        assert_relative_eq!(rule.points[0], -p, max_relative = 1E-14);
        assert_relative_eq!(rule.points[1], p, max_relative = 1E-14);
        assert_relative_eq!(rule.weights[0], 1.0, max_relative = 1E-13);
        assert_relative_eq!(rule.weights[1], 1.0, max_relative = 1E-13);

        let rule = gauss_jacobi_rule(3, 0.0, 0.0).unwrap();
        let p = 0.6f64.sqrt();
        assert_relative_eq!(rule.points[0], -p, max_relative = 1E-14);
        assert_abs_diff_eq!(rule.points[1], 0.0, epsilon = 1E-15);
        assert_relative_eq!(rule.points[2], p, max_relative = 1E-14);
        assert_relative_eq!(rule.weights[0], 5.0 / 9.0, max_relative = 1E-13);
        assert_relative_eq!(rule.weights[1], 8.0 / 9.0, max_relative = 1E-13);
        assert_relative_eq!(rule.weights[2], 5.0 / 9.0, max_relative = 1E-13);
    }

    #[test]
    fn test_collapsed_rules() {
        let rule = gauss_jacobi_rule(1, 1.0, 0.0).unwrap();
        assert_eq!(rule.npoints, 1);
        assert_eq!(rule.order, 1);
        assert_relative_eq!(rule.points[0], -1.0 / 3.0, max_relative = 1E-14);
        assert_relative_eq!(rule.weights[0], 2.0, max_relative = 1E-13);

        // P_2^(1, 0) = (5x^2 + 2x - 1) / 2
        let rule = gauss_jacobi_rule(2, 1.0, 0.0).unwrap();
        let s = 6f64.sqrt();
        assert_relative_eq!(rule.points[0], (-1.0 - s) / 5.0, max_relative = 1E-14);
        assert_relative_eq!(rule.points[1], (-1.0 + s) / 5.0, max_relative = 1E-14);
        assert_relative_eq!(
            rule.weights.iter().sum::<f64>(),
            2.0,
            max_relative = 1E-13
        );
    }

    #[test]
    fn test_moments() {
        for (alpha, beta) in [(0, 0), (1, 0), (0, 1), (2, 1)] {
            for npoints in 1..=16 {
                let rule = gauss_jacobi_rule(npoints, alpha as f64, beta as f64).unwrap();
                for m in 0..2 * npoints {
                    let actual: f64 = rule
                        .points
                        .iter()
                        .zip(&rule.weights)
                        .map(|(x, w)| w * x.powi(m as i32))
                        .sum();
                    assert_abs_diff_eq!(actual, exact_moment(m, alpha, beta), epsilon = 1E-12);
                }
            }
        }
    }

    #[test]
    fn test_point_ordering() {
        for (alpha, beta) in [(0.0, 0.0), (1.0, 0.0), (-0.5, 0.5), (2.0, 1.0)] {
            for npoints in 1..=30 {
                let rule = gauss_jacobi_rule(npoints, alpha, beta).unwrap();
                assert_eq!(rule.points.len(), npoints);
                assert!(rule.points.iter().all(|&x| x > -1.0 && x < 1.0));
                assert!(rule.points.windows(2).all(|pair| pair[0] < pair[1]));
                assert!(rule.weights.iter().all(|&w| w > 0.0));
            }
        }
    }

    #[test]
    fn test_non_integer_mass() {
        // 2 Gamma(3/2) Gamma(1/2) / Gamma(2) = pi
        let rule = gauss_jacobi_rule(7, 0.5, -0.5).unwrap();
        assert_relative_eq!(rule.weights.iter().sum::<f64>(), PI, max_relative = 1E-12);
    }

    #[test]
    fn test_invalid_arguments() {
        assert_eq!(
            gauss_jacobi_rule(0, 0.0, 0.0).unwrap_err(),
            QuadratureError::InvalidOrder(0)
        );
        assert_eq!(
            gauss_jacobi_rule(3, -1.0, 0.0).unwrap_err(),
            QuadratureError::InvalidJacobiParameters {
                alpha: -1.0,
                beta: 0.0
            }
        );
        assert!(GaussJacobi.jacobi_rule(3, 0.0, f64::NAN).is_err());
    }
}
