/// Orthographic projection recomputed on every window reshape
use nalgebra::{Matrix4, Point2, Point3};

/// Window width (and height) in pixels that spans exactly [-1, 1] in world units.
pub const REFERENCE_EXTENT_PX: f32 = 250.0;

/// Drawable area in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// Zero-sized dimensions are clamped to one pixel.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }
}

/// Orthographic projection where the visible world half-extent on each axis
/// grows with the window, so resizing never distorts the model.
#[derive(Debug, Clone, PartialEq)]
pub struct OrthoProjection {
    viewport: Viewport,
    half_width: f32,
    half_height: f32,
    matrix: Matrix4<f32>,
}

impl OrthoProjection {
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_reference_extent(width, height, REFERENCE_EXTENT_PX)
    }

    /// Projection for a `width`×`height` pixel viewport, where
    /// `reference_extent` pixels span two world units (-1 to 1).
    pub fn with_reference_extent(width: u32, height: u32, reference_extent: f32) -> Self {
        let viewport = Viewport::new(width, height);
        let half_width = viewport.width as f32 / reference_extent;
        let half_height = viewport.height as f32 / reference_extent;
        let matrix = Matrix4::new_orthographic(
            -half_width,
            half_width,
            -half_height,
            half_height,
            -1.0,
            1.0,
        );

        Self {
            viewport,
            half_width,
            half_height,
            matrix,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Visible world half-extents `(x, y)`.
    pub fn half_extents(&self) -> (f32, f32) {
        (self.half_width, self.half_height)
    }

    pub fn projection_matrix(&self) -> Matrix4<f32> {
        self.matrix
    }

    /// Map a world point to viewport pixels, origin top-left, y down.
    ///
    /// Points outside the visible area map outside `[0, width] x [0, height]`;
    /// clipping is left to the rasterizer.
    pub fn project_to_screen(&self, point: &Point3<f32>) -> Point2<f32> {
        let ndc = self.matrix.transform_point(point);
        let screen_x = (ndc.x + 1.0) * 0.5 * self.viewport.width as f32;
        let screen_y = (1.0 - ndc.y) * 0.5 * self.viewport.height as f32;
        Point2::new(screen_x, screen_y)
    }
}

impl Default for OrthoProjection {
    fn default() -> Self {
        Self::new(REFERENCE_EXTENT_PX as u32, REFERENCE_EXTENT_PX as u32)
    }
}
