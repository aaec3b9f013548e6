/// Axis-aligned rotation matrices and the combined rotate transform
use crate::error::MatrixError;
use crate::matrix::{multiply, Matrix};

/// One of the three rotation axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// Rotation about the three axes (in radians)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotationAngles {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl RotationAngles {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn get(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    pub fn get_mut(&mut self, axis: Axis) -> &mut f32 {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        }
    }

    /// Combined transform for these angles, see [`compose`].
    pub fn compose(&self) -> Result<Matrix, MatrixError> {
        compose(self.x, self.y, self.z)
    }
}

pub fn rotation_x(theta: f32) -> Matrix {
    let (sin, cos) = theta.sin_cos();
    Matrix::from_array([
        [1.0, 0.0, 0.0],
        [0.0, cos, -sin],
        [0.0, sin, cos],
    ])
}

pub fn rotation_y(theta: f32) -> Matrix {
    let (sin, cos) = theta.sin_cos();
    Matrix::from_array([
        [cos, 0.0, -sin],
        [0.0, 1.0, 0.0],
        [sin, 0.0, cos],
    ])
}

pub fn rotation_z(theta: f32) -> Matrix {
    let (sin, cos) = theta.sin_cos();
    Matrix::from_array([
        [cos, sin, 0.0],
        [-sin, cos, 0.0],
        [0.0, 0.0, 1.0],
    ])
}

/// Build the rotate transform `Rx(x) · Ry(y) · Rz(z)`.
///
/// The product is evaluated left to right in exactly this order. Rotations
/// do not commute, so any other order produces a different on-screen spin.
pub fn compose(x: f32, y: f32, z: f32) -> Result<Matrix, MatrixError> {
    let xy = multiply(&rotation_x(x), &rotation_y(y))?;
    multiply(&xy, &rotation_z(z))
}
