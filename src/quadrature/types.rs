//! Type definitions.
use crate::types::{QuadratureError, Result};

/// Jacobi weight parameters `(alpha, beta)` of the collapsed coordinate.
///
/// The weight `(1 - x)` absorbs the Jacobian of the conical map.
pub const COLLAPSED_JACOBI_PARAMETERS: (f64, f64) = (1.0, 0.0);

/// Jacobi weight parameters `(alpha, beta)` of the second coordinate (Gauss-Legendre).
pub const LEGENDRE_JACOBI_PARAMETERS: (f64, f64) = (0.0, 0.0);

/// Definition of a numerical quadrature rule.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericalQuadratureDefinition {
    /// The dimension d of a single point.
    pub dim: usize,

    /// The order of the quadrature rule.
    ///
    /// This is the highest polynomial degree that is integrated exactly.
    pub order: usize,

    /// The number of points of the quadrature rule.
    pub npoints: usize,

    /// The weights of the quadrature rule.
    pub weights: Vec<f64>,
    /// The point coordinates of the quadrature rule.
    ///
    /// A single point has the coordinates p_1, p_2, ..., p_d,
    /// with d being the dimension of the point (typically, 1, 2, or 3).
    /// The vector points stores all points in consecutive order.
    /// Hence, the first point starts at position zero, the second point at
    /// position d, and the third point at position 2d.
    pub points: Vec<f64>,
}

impl NumericalQuadratureDefinition {
    /// Check that a one dimensional rule has `npoints` points and weights.
    pub(crate) fn check_size(&self, npoints: usize) -> Result<()> {
        match [self.npoints, self.points.len(), self.weights.len()]
            .into_iter()
            .find(|&n| n != npoints)
        {
            Some(actual) => Err(QuadratureError::RuleSizeMismatch {
                expected: npoints,
                actual,
            }),
            None => Ok(()),
        }
    }
}
