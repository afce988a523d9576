//! Triangle meshes in the plane
use crate::types::{cast, AreaConvention, QuadratureError, RealScalar, Result};
use itertools::Itertools;
use std::collections::HashMap;

/// A mesh of triangles in two dimensions.
///
/// The vertices are stored as `[x0, y0, x1, y1, ...]` and the cells as
/// `[a0, b0, c0, a1, b1, c1, ...]`, where each entry of a cell is an index into
/// the vertices. Every cell index is checked on construction. Orientation and
/// degeneracy of the cells are not checked.
#[derive(Debug, Clone)]
pub struct TriangleMesh<T: RealScalar> {
    vertices: Vec<T>,
    cells: Vec<usize>,
}

impl<T: RealScalar> TriangleMesh<T> {
    /// Create a mesh from flat vertex and cell buffers.
    pub fn new(vertices: Vec<T>, cells: Vec<usize>) -> Result<Self> {
        if vertices.len() % 2 != 0 {
            return Err(QuadratureError::MalformedVertices(vertices.len()));
        }
        if cells.len() % 3 != 0 {
            return Err(QuadratureError::MalformedCells(cells.len()));
        }
        let nvertices = vertices.len() / 2;
        if let Some((position, &vertex)) = cells.iter().find_position(|&&v| v >= nvertices) {
            return Err(QuadratureError::InvalidVertexIndex {
                cell: position / 3,
                vertex,
                nvertices,
            });
        }
        Ok(Self { vertices, cells })
    }

    /// Number of vertices
    pub fn number_of_vertices(&self) -> usize {
        self.vertices.len() / 2
    }

    /// Number of cells
    pub fn number_of_cells(&self) -> usize {
        self.cells.len() / 3
    }

    /// Flat vertex coordinates
    pub fn vertices(&self) -> &[T] {
        &self.vertices
    }

    /// Flat cell vertex indices
    pub fn cells(&self) -> &[usize] {
        &self.cells
    }

    /// Coordinates of a vertex
    pub fn vertex(&self, index: usize) -> [T; 2] {
        [self.vertices[2 * index], self.vertices[2 * index + 1]]
    }

    /// Vertex indices of a cell
    pub fn cell(&self, index: usize) -> [usize; 3] {
        [
            self.cells[3 * index],
            self.cells[3 * index + 1],
            self.cells[3 * index + 2],
        ]
    }

    /// Coordinates of the three vertices of a cell
    pub fn cell_vertices(&self, index: usize) -> [[T; 2]; 3] {
        self.cell(index).map(|vertex| self.vertex(vertex))
    }

    /// Signed area of every cell.
    ///
    /// The area is positive if the vertices of the cell are ordered counter-clockwise.
    pub fn signed_areas(&self) -> Vec<T> {
        let half = cast::<T>(0.5);
        (0..self.number_of_cells())
            .map(|index| {
                let [p0, p1, p2] = self.cell_vertices(index);
                let a = [p1[0] - p0[0], p1[1] - p0[1]];
                let b = [p2[0] - p0[0], p2[1] - p0[1]];
                half * (a[0] * b[1] - a[1] * b[0])
            })
            .collect()
    }

    /// Area of every cell with the given sign convention.
    pub fn areas(&self, convention: AreaConvention) -> Vec<T> {
        let areas = self.signed_areas();
        match convention {
            AreaConvention::Signed => areas,
            AreaConvention::Absolute => areas.into_iter().map(|area| area.abs()).collect(),
        }
    }
}

/// Builder for a triangle mesh
///
/// Points and cells are added with user chosen ids. Cells refer to points by
/// id and are stored in the order in which they were added.
pub struct TriangleMeshBuilder<T: RealScalar> {
    points: Vec<T>,
    cells: Vec<usize>,
    point_indices_to_ids: Vec<usize>,
    point_ids_to_indices: HashMap<usize, usize>,
    cell_indices_to_ids: Vec<usize>,
}

impl<T: RealScalar> Default for TriangleMeshBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: RealScalar> TriangleMeshBuilder<T> {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            points: vec![],
            cells: vec![],
            point_indices_to_ids: vec![],
            point_ids_to_indices: HashMap::new(),
            cell_indices_to_ids: vec![],
        }
    }

    /// Create a new builder with space reserved for `npoints` points and `ncells` cells
    pub fn new_with_capacity(npoints: usize, ncells: usize) -> Self {
        Self {
            points: Vec::with_capacity(2 * npoints),
            cells: Vec::with_capacity(3 * ncells),
            point_indices_to_ids: Vec::with_capacity(npoints),
            point_ids_to_indices: HashMap::with_capacity(npoints),
            cell_indices_to_ids: Vec::with_capacity(ncells),
        }
    }

    /// Add a point
    pub fn add_point(&mut self, id: usize, coords: [T; 2]) {
        self.point_ids_to_indices
            .insert(id, self.point_indices_to_ids.len());
        self.point_indices_to_ids.push(id);
        self.points.extend_from_slice(&coords);
    }

    /// Add a cell given the ids of its three points
    pub fn add_cell(&mut self, id: usize, point_ids: [usize; 3]) {
        self.cell_indices_to_ids.push(id);
        self.cells.extend_from_slice(&point_ids);
    }

    /// Id of the point stored at `index`
    pub fn point_id(&self, index: usize) -> Option<usize> {
        self.point_indices_to_ids.get(index).copied()
    }

    /// Id of the cell stored at `index`
    pub fn cell_id(&self, index: usize) -> Option<usize> {
        self.cell_indices_to_ids.get(index).copied()
    }

    /// Create the mesh
    pub fn create_mesh(self) -> Result<TriangleMesh<T>> {
        let cells = self
            .cells
            .iter()
            .map(|id| {
                self.point_ids_to_indices
                    .get(id)
                    .copied()
                    .ok_or(QuadratureError::UnknownPointId(*id))
            })
            .collect::<Result<Vec<_>>>()?;
        TriangleMesh::new(self.points, cells)
    }
}
