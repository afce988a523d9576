//! Quadrature rules
//!
//! Stroud conical rules integrate over a triangle by collapsing the unit square
//! onto it (the Duffy transformation) and using Gauss-Jacobi rules along the
//! collapsed coordinate. The method is described in M. Ainsworth,
//! G. Andriamaro and O. Davydov, *Bernstein-Bezier finite elements of arbitrary
//! order and optimal assembly procedures*, SIAM J. Sci. Comput. 33 (2011).

pub mod gauss_jacobi;
pub mod stroud;
pub mod types;

pub use gauss_jacobi::GaussJacobi;
pub use stroud::{generate_nodes, ConicalRule, StroudNodes};
