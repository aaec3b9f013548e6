/// Small dense matrices with checked multiplication
use nalgebra::{DMatrix, Point3};
use std::fmt;

use crate::error::MatrixError;

/// A non-empty, rectangular matrix of `f32` values stored as rows of columns.
///
/// Also used to hold point sets: 3 rows (x, y, z) and one column per vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    inner: DMatrix<f32>,
}

impl Matrix {
    /// Build a matrix from a slice of rows.
    ///
    /// Fails if there are no rows, the rows are empty, or any row length
    /// differs from the first.
    pub fn from_rows<R: AsRef<[f32]>>(rows: &[R]) -> Result<Self, MatrixError> {
        let cols = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if cols == 0 {
            return Err(MatrixError::Empty);
        }

        for (row, values) in rows.iter().enumerate() {
            let found = values.as_ref().len();
            if found != cols {
                return Err(MatrixError::Ragged {
                    row,
                    expected: cols,
                    found,
                });
            }
        }

        Ok(Self {
            inner: DMatrix::from_fn(rows.len(), cols, |r, c| rows[r].as_ref()[c]),
        })
    }

    /// Build a matrix from a fixed-size row literal.
    pub fn from_array<const R: usize, const C: usize>(rows: [[f32; C]; R]) -> Self {
        const { assert!(R > 0 && C > 0, "matrix literal must be non-empty") };
        Self {
            inner: DMatrix::from_fn(R, C, |r, c| rows[r][c]),
        }
    }

    /// `size`×`size` identity. A size of 0 is raised to 1 so the result is
    /// never empty.
    pub fn identity(size: usize) -> Self {
        Self {
            inner: DMatrix::identity(size.max(1), size.max(1)),
        }
    }

    pub fn rows(&self) -> usize {
        self.inner.nrows()
    }

    pub fn cols(&self) -> usize {
        self.inner.ncols()
    }

    /// Element at `(row, col)`. Panics when out of bounds, like slice indexing.
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.inner[(row, col)]
    }

    /// Read column `col` of a matrix with at least 3 rows as a point.
    pub fn column_point(&self, col: usize) -> Point3<f32> {
        Point3::new(
            self.inner[(0, col)],
            self.inner[(1, col)],
            self.inner[(2, col)],
        )
    }

    /// Matrix product `self · rhs`.
    pub fn multiply(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        multiply(self, rhs)
    }

    pub fn transpose(&self) -> Matrix {
        transpose(self)
    }

    /// Element-wise comparison with an absolute tolerance.
    pub fn approx_eq(&self, other: &Matrix, epsilon: f32) -> bool {
        self.inner.shape() == other.inner.shape()
            && self
                .inner
                .iter()
                .zip(other.inner.iter())
                .all(|(a, b)| (a - b).abs() <= epsilon)
    }
}

/// Multiply `a` (m×n) by `b` (n×p) into an m×p matrix.
///
/// `c[r][c] = Σ a[r][i] * b[i][c]`. The inner dimensions must agree.
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    if a.cols() != b.rows() {
        return Err(MatrixError::DimensionMismatch {
            left_rows: a.rows(),
            left_cols: a.cols(),
            right_rows: b.rows(),
            right_cols: b.cols(),
        });
    }

    Ok(Matrix {
        inner: &a.inner * &b.inner,
    })
}

pub fn transpose(m: &Matrix) -> Matrix {
    Matrix {
        inner: m.inner.transpose(),
    }
}

impl fmt::Display for Matrix {
    /// One line per row, each value printed with a sign slot and six decimals.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows() {
            for c in 0..self.cols() {
                let value = self.inner[(r, c)];
                if value.is_sign_negative() {
                    write!(f, "{value:.6} ")?;
                } else {
                    write!(f, " {value:.6} ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
