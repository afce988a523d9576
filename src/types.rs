//! Types specific to stroud

use std::fmt::Debug;
use std::iter::Sum;

/// Real scalar type used for coordinates, areas and integrand values.
pub trait RealScalar: num::Float + Send + Sync + Debug + Sum + 'static {}

impl<T: num::Float + Send + Sync + Debug + Sum + 'static> RealScalar for T {}

/// Cast an `f64` rule value into the working scalar type.
pub(crate) fn cast<T: RealScalar>(value: f64) -> T {
    // Float to float casts never fail, out of range values become infinite.
    num::cast::<f64, T>(value).unwrap()
}

/// Quadrature error
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum QuadratureError {
    /// The number of points per axis must be at least one.
    #[error("Invalid quadrature order {0}, the order must be at least 1")]
    InvalidOrder(usize),
    /// Jacobi weight parameters outside of (-1, inf).
    #[error("Invalid Jacobi parameters alpha = {alpha}, beta = {beta}, both must be finite and greater than -1")]
    InvalidJacobiParameters {
        /// Exponent of (1 - x)
        alpha: f64,
        /// Exponent of (1 + x)
        beta: f64,
    },
    /// Root finding for a Jacobi polynomial failed.
    #[error("Newton iteration for root {index} of the Jacobi polynomial of degree {npoints} did not converge")]
    NoConvergence {
        /// Degree of the polynomial
        npoints: usize,
        /// Index of the root
        index: usize,
    },
    /// A rule provider returned a rule of the wrong size.
    #[error("Rule provider returned {actual} points and weights, expected {expected}")]
    RuleSizeMismatch {
        /// Requested number of points
        expected: usize,
        /// Returned number of points
        actual: usize,
    },
    /// Vertex buffer that does not hold pairs of coordinates.
    #[error("Vertex buffer of length {0} does not hold (x, y) pairs")]
    MalformedVertices(usize),
    /// Cell buffer that does not hold triples of indices.
    #[error("Cell buffer of length {0} does not hold vertex index triples")]
    MalformedCells(usize),
    /// A cell references a vertex that does not exist.
    #[error("Cell {cell} references vertex {vertex}, but the mesh has {nvertices} vertices")]
    InvalidVertexIndex {
        /// Cell index
        cell: usize,
        /// Offending vertex index
        vertex: usize,
        /// Number of vertices in the mesh
        nvertices: usize,
    },
    /// A cell added to a builder references an unknown point id.
    #[error("Unknown point id {0}")]
    UnknownPointId(usize),
    /// Supplied areas do not match the number of cells.
    #[error("Expected one area per cell ({expected}), got {actual}")]
    AreaCountMismatch {
        /// Number of cells
        expected: usize,
        /// Number of areas supplied
        actual: usize,
    },
}

/// Result type
pub type Result<T> = std::result::Result<T, QuadratureError>;

/// Sign convention for per-cell areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AreaConvention {
    /// Positive for counter-clockwise cells, negative for clockwise cells.
    #[default]
    Signed,
    /// Magnitude of the signed area.
    Absolute,
}
