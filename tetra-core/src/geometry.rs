/// Static vertex data for wireframe rendering
use nalgebra::Point3;

use crate::error::MatrixError;
use crate::matrix::Matrix;

/// Tetrahedron vertices: a unit equilateral base triangle at z = -0.375 and
/// an apex at (0, 0, 0.375). The apex is not over the base centroid, so the
/// solid is not regular; the edge from vertex 2 to the apex is √0.75.
pub const TETRAHEDRON_VERTICES: [[f32; 3]; 4] = [
    [-0.5, -0.433_012_7, -0.375],
    [0.5, -0.433_012_7, -0.375],
    [0.0, 0.433_012_7, -0.375],
    [0.0, 0.0, 0.375],
];

/// A set of 3D points stored column-wise: row 0 is x, row 1 is y, row 2 is z,
/// and column `i` is vertex `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    coords: Matrix,
}

impl PointSet {
    /// Build from row-major `(x, y, z)` triples, transposing once into
    /// column-per-vertex form.
    pub fn from_vertices(vertices: &[[f32; 3]]) -> Result<Self, MatrixError> {
        let row_major = Matrix::from_rows(vertices)?;
        Self::from_matrix(row_major.transpose())
    }

    /// Wrap an existing 3×N matrix.
    pub fn from_matrix(coords: Matrix) -> Result<Self, MatrixError> {
        if coords.rows() != 3 {
            return Err(MatrixError::NotPointSet {
                rows: coords.rows(),
            });
        }
        Ok(Self { coords })
    }

    pub fn tetrahedron() -> Self {
        Self {
            coords: Matrix::from_array(TETRAHEDRON_VERTICES).transpose(),
        }
    }

    pub fn len(&self) -> usize {
        self.coords.cols()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn vertex(&self, index: usize) -> Point3<f32> {
        self.coords.column_point(index)
    }

    pub fn matrix(&self) -> &Matrix {
        &self.coords
    }

    /// Apply `transform` (3×3) to every vertex: `transform · points`.
    pub fn transformed(&self, transform: &Matrix) -> Result<PointSet, MatrixError> {
        Self::from_matrix(transform.multiply(&self.coords)?)
    }

    /// Every unordered pair of distinct vertex indices, `(i, j)` with `i < j`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> {
        complete_graph_edges(self.len())
    }
}

/// Edges of the complete graph on `n` vertices, in lexicographic order.
pub fn complete_graph_edges(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n).flat_map(move |i| (i + 1..n).map(move |j| (i, j)))
}
