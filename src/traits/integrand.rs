//! Integrands
use crate::types::RealScalar;
use itertools::izip;

/// A scalar function of two physical coordinates.
///
/// Implementations must be free of side effects, as points are evaluated in
/// batches from several threads and in no particular order.
pub trait Integrand<T: RealScalar>: Sync {
    /// Evaluate the integrand at a single point.
    fn evaluate(&self, x: T, y: T) -> T;

    /// Evaluate the integrand at the points `(x[i], y[i])` and write the values into `result`.
    ///
    /// All three slices have the same length.
    fn evaluate_batch(&self, x: &[T], y: &[T], result: &mut [T]) {
        debug_assert_eq!(x.len(), y.len());
        debug_assert_eq!(x.len(), result.len());
        for (value, &px, &py) in izip!(result.iter_mut(), x, y) {
            *value = self.evaluate(px, py);
        }
    }
}

impl<T: RealScalar, F: Fn(T, T) -> T + Sync> Integrand<T> for F {
    fn evaluate(&self, x: T, y: T) -> T {
        self(x, y)
    }
}
