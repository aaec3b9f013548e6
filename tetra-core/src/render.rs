/// Frame rendering: rotate the point set and emit every edge as a line
use nalgebra::Point3;

use crate::error::MatrixError;
use crate::geometry::PointSet;
use crate::rotation::RotationAngles;

/// Destination for line primitives, implemented by the host's drawing surface.
pub trait LineSink {
    /// Erase the previous frame.
    fn clear(&mut self);

    /// Draw a segment between two points in world coordinates.
    fn draw_line(&mut self, from: &Point3<f32>, to: &Point3<f32>);

    /// Finish the frame.
    fn flush(&mut self);
}

/// A transformed edge ready for drawing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point3<f32>,
    pub to: Point3<f32>,
}

/// Draws the complete-graph wireframe of a fixed point set
#[derive(Debug, Clone)]
pub struct FrameRenderer {
    points: PointSet,
}

impl FrameRenderer {
    pub fn new(points: PointSet) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &PointSet {
        &self.points
    }

    /// Rotate the point set by `angles` and pair up every two vertices.
    pub fn segments(&self, angles: &RotationAngles) -> Result<Vec<Segment>, MatrixError> {
        let transform = angles.compose()?;
        tracing::trace!("rotate transform:\n{transform}");

        let rotated = self.points.transformed(&transform)?;
        Ok(rotated
            .edges()
            .map(|(i, j)| Segment {
                from: rotated.vertex(i),
                to: rotated.vertex(j),
            })
            .collect())
    }

    /// Display handler: clear, draw every edge, flush.
    pub fn render<S: LineSink>(
        &self,
        angles: &RotationAngles,
        sink: &mut S,
    ) -> Result<(), MatrixError> {
        let segments = self.segments(angles)?;

        sink.clear();
        for segment in &segments {
            sink.draw_line(&segment.from, &segment.to);
        }
        sink.flush();
        Ok(())
    }
}

impl Default for FrameRenderer {
    fn default() -> Self {
        Self::new(PointSet::tetrahedron())
    }
}
