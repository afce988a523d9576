//! Quadrature rule providers
use crate::quadrature::types::NumericalQuadratureDefinition;
use crate::types::Result;

/// Provider of one dimensional Gauss-Jacobi rules.
///
/// A Gauss-Jacobi rule with `npoints` points approximates
/// `int_{-1}^{1} f(x) (1 - x)^alpha (1 + x)^beta dx` and is exact for
/// polynomials `f` up to degree `2 * npoints - 1`.
pub trait JacobiRuleProvider: Sync {
    /// Return the rule with `npoints` points for the weight parameters `alpha` and `beta`.
    ///
    /// The points must be strictly increasing and lie in (-1, 1). The weights must
    /// be positive and sum to the total mass of the weight function.
    fn jacobi_rule(
        &self,
        npoints: usize,
        alpha: f64,
        beta: f64,
    ) -> Result<NumericalQuadratureDefinition>;
}
