//! Stroud conical rules on triangles.
//!
//! A point `(u, s)` of the unit square is mapped to the barycentric
//! coordinates `(u, s (1 - u), (1 - u) (1 - s))` of a triangle. The map
//! collapses the edge `u = 1` onto the first vertex of the triangle and has the
//! Jacobian `1 - u`, which is absorbed into a Gauss-Jacobi rule with weight
//! `(1 - x)` in the first coordinate. The second coordinate uses a
//! Gauss-Legendre rule.
use crate::mesh::TriangleMesh;
use crate::quadrature::gauss_jacobi::GaussJacobi;
use crate::quadrature::types::{COLLAPSED_JACOBI_PARAMETERS, LEGENDRE_JACOBI_PARAMETERS};
use crate::traits::JacobiRuleProvider;
use crate::types::{cast, QuadratureError, RealScalar, Result};
use itertools::{iproduct, izip};
use log::{debug, warn};
use rayon::prelude::*;

/// Number of points per cell above which a warning is logged.
const LARGE_POINT_COUNT: usize = 10_000;

/// Stroud conical rule on a triangle.
///
/// The rule has `order * order` points. Point `k = i * order + j` combines
/// point `j` of the collapsed (1, 0) rule with point `i` of the Gauss-Legendre
/// rule. The weights are the outer product of the two one dimensional weight
/// vectors, scaled so that they sum to 1/2, the area of the reference triangle.
/// A polynomial of degree at most `2 * order - 1` is integrated exactly.
#[derive(Debug, Clone)]
pub struct ConicalRule<T: RealScalar> {
    order: usize,
    barycentric: Vec<T>,
    weights: Vec<T>,
}

impl<T: RealScalar> ConicalRule<T> {
    /// Create the rule with `order` points per axis from the one dimensional rules of `provider`.
    pub fn new(provider: &impl JacobiRuleProvider, order: usize) -> Result<Self> {
        if order == 0 {
            return Err(QuadratureError::InvalidOrder(order));
        }
        let npoints = order * order;
        if npoints > LARGE_POINT_COUNT {
            warn!("Conical rule of order {order} uses {npoints} points per cell");
        }

        let (alpha, beta) = COLLAPSED_JACOBI_PARAMETERS;
        let collapsed = provider.jacobi_rule(order, alpha, beta)?;
        collapsed.check_size(order)?;

        let (alpha, beta) = LEGENDRE_JACOBI_PARAMETERS;
        let legendre = provider.jacobi_rule(order, alpha, beta)?;
        legendre.check_size(order)?;

        let mut barycentric = Vec::<T>::with_capacity(3 * npoints);
        let mut weights = Vec::<T>::with_capacity(npoints);

        for ((&s, &ws), (&u, &wu)) in iproduct!(
            izip!(&legendre.points, &legendre.weights),
            izip!(&collapsed.points, &collapsed.weights)
        ) {
            // Map from [-1, 1] to [0, 1]
            let u = 0.5 + 0.5 * u;
            let s = 0.5 + 0.5 * s;

            let v = s * (1.0 - u);
            let w = 1.0 - u - v;
            barycentric.extend([u, v, w].map(cast::<T>));

            // 1/2 for each interval map and 1/2 for (1 - x) = 2 (1 - u)
            weights.push(cast::<T>(0.25 * wu * 0.5 * ws));
        }

        debug!("Created conical rule of order {order} with {npoints} points");

        Ok(Self {
            order,
            barycentric,
            weights,
        })
    }

    /// Number of points per axis
    pub fn order(&self) -> usize {
        self.order
    }

    /// Number of points per cell
    pub fn number_of_points(&self) -> usize {
        self.weights.len()
    }

    /// The `order x order` weight grid, stored row by row.
    pub fn weights(&self) -> &[T] {
        &self.weights
    }

    /// Barycentric coordinates `(u, v, w)` of every point, stored consecutively.
    pub fn barycentric_coordinates(&self) -> &[T] {
        &self.barycentric
    }

    /// Map the points of the rule into the triangle with the given vertices.
    ///
    /// `x` and `y` must have one entry per point of the rule.
    pub fn map_to_cell(&self, vertices: &[[T; 2]; 3], x: &mut [T], y: &mut [T]) {
        let [p0, p1, p2] = vertices;
        for (px, py, coords) in izip!(
            x.iter_mut(),
            y.iter_mut(),
            self.barycentric.chunks_exact(3)
        ) {
            *px = coords[0] * p0[0] + coords[1] * p1[0] + coords[2] * p2[0];
            *py = coords[0] * p0[1] + coords[1] * p1[1] + coords[2] * p2[1];
        }
    }

    /// Weighted sum of the values of a function at the points of the rule.
    pub fn contract(&self, values: &[T]) -> T {
        izip!(values, &self.weights)
            .map(|(&value, &weight)| value * weight)
            .sum()
    }

    /// Map the points of the rule into every cell of a mesh.
    pub fn generate_nodes(&self, mesh: &TriangleMesh<T>) -> StroudNodes<T> {
        let npoints = self.number_of_points();
        let total = npoints * mesh.number_of_cells();

        let mut x = vec![T::zero(); total];
        let mut y = vec![T::zero(); total];
        x.par_chunks_mut(npoints)
            .zip(y.par_chunks_mut(npoints))
            .enumerate()
            .for_each(|(cell, (cell_x, cell_y))| {
                self.map_to_cell(&mesh.cell_vertices(cell), cell_x, cell_y)
            });

        StroudNodes {
            order: self.order,
            x,
            y,
        }
    }
}

/// Physical coordinates of the Stroud points of all cells of a mesh.
///
/// The points of a cell are stored contiguously, cell after cell, so the cell
/// that owns a point is found by dividing its index by `order * order`.
#[derive(Debug, Clone)]
pub struct StroudNodes<T: RealScalar> {
    order: usize,
    x: Vec<T>,
    y: Vec<T>,
}

impl<T: RealScalar> StroudNodes<T> {
    /// Number of points per axis
    pub fn order(&self) -> usize {
        self.order
    }

    /// Number of points per cell
    pub fn points_per_cell(&self) -> usize {
        self.order * self.order
    }

    /// Total number of points
    pub fn number_of_points(&self) -> usize {
        self.x.len()
    }

    /// Number of cells
    pub fn number_of_cells(&self) -> usize {
        self.x.len() / self.points_per_cell()
    }

    /// Index of the cell that contains a point
    pub fn owning_cell(&self, point_index: usize) -> usize {
        point_index / self.points_per_cell()
    }

    /// x coordinates of all points
    pub fn x(&self) -> &[T] {
        &self.x
    }

    /// y coordinates of all points
    pub fn y(&self) -> &[T] {
        &self.y
    }

    /// x and y coordinates of the points of a single cell
    pub fn cell_points(&self, cell: usize) -> (&[T], &[T]) {
        let npoints = self.points_per_cell();
        let range = cell * npoints..(cell + 1) * npoints;
        (&self.x[range.clone()], &self.y[range])
    }
}

/// Compute the Stroud points with `order` points per axis for every cell of a mesh.
pub fn generate_nodes<T: RealScalar>(
    mesh: &TriangleMesh<T>,
    order: usize,
) -> Result<StroudNodes<T>> {
    let rule = ConicalRule::<T>::new(&GaussJacobi, order)?;
    Ok(rule.generate_nodes(mesh))
}
