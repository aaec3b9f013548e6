/// ASCII line rasterizer for terminal rendering
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use nalgebra::{Point2, Point3};
use std::io::Write;
use tetra_core::{LineSink, OrthoProjection, WindowConfig};

/// Draws wireframe edges into a grid of terminal cells.
///
/// Lines are stamped into a back buffer; `flush` publishes it to the front
/// buffer that [`AsciiRenderer::draw`] writes out.
pub struct AsciiRenderer {
    cols: usize,
    rows: usize,
    cell_width: u32,
    cell_height: u32,
    reference_extent: f32,
    glyph: char,
    projection: OrthoProjection,
    back: Vec<char>,
    front: Vec<char>,
}

impl AsciiRenderer {
    pub fn new(cols: u16, rows: u16, window: &WindowConfig) -> Self {
        let mut renderer = Self {
            cols: 0,
            rows: 0,
            cell_width: window.cell_width_px,
            cell_height: window.cell_height_px,
            reference_extent: window.reference_extent_px,
            glyph: window.line_glyph,
            projection: OrthoProjection::default(),
            back: Vec::new(),
            front: Vec::new(),
        };
        renderer.resize(cols, rows);
        renderer
    }

    /// Reshape: resize the buffers and recompute the projection for the new
    /// pixel dimensions.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols as usize;
        self.rows = rows as usize;
        self.projection = OrthoProjection::with_reference_extent(
            u32::from(cols).saturating_mul(self.cell_width),
            u32::from(rows).saturating_mul(self.cell_height),
            self.reference_extent,
        );

        let size = self.cols * self.rows;
        self.back = vec![' '; size];
        self.front = vec![' '; size];
    }

    pub fn size(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    pub fn projection(&self) -> &OrthoProjection {
        &self.projection
    }

    /// Published cell at `(col, row)`.
    pub fn cell(&self, col: usize, row: usize) -> char {
        self.front[row * self.cols + col]
    }

    /// Published row as text.
    pub fn row_text(&self, row: usize) -> String {
        self.front[row * self.cols..(row + 1) * self.cols]
            .iter()
            .collect()
    }

    /// Count of published cells holding the line glyph.
    pub fn lit_cells(&self) -> usize {
        self.front.iter().filter(|c| **c == self.glyph).count()
    }

    /// World point to fractional cell coordinates.
    fn to_cell(&self, point: &Point3<f32>) -> Point2<f32> {
        let pixel = self.projection.project_to_screen(point);
        Point2::new(
            pixel.x / self.cell_width as f32,
            pixel.y / self.cell_height as f32,
        )
    }

    fn plot(&mut self, x: f32, y: f32) {
        let (col, row) = (x.floor(), y.floor());
        if col < 0.0 || row < 0.0 {
            return;
        }
        let (col, row) = (col as usize, row as usize);
        if col < self.cols && row < self.rows {
            self.back[row * self.cols + col] = self.glyph;
        }
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.queue(SetForegroundColor(Color::Cyan))?;
        for row in 0..self.rows {
            writer.queue(cursor::MoveTo(0, row as u16))?;
            writer.queue(Print(self.row_text(row)))?;
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

impl LineSink for AsciiRenderer {
    fn clear(&mut self) {
        self.back.fill(' ');
    }

    /// Step along the longer screen axis one cell at a time, never more steps
    /// than the grid's width plus height.
    fn draw_line(&mut self, from: &Point3<f32>, to: &Point3<f32>) {
        let start = self.to_cell(from);
        let end = self.to_cell(to);
        let delta = end - start;

        let steps = delta.x.abs().max(delta.y.abs()).ceil();
        if !steps.is_finite() {
            return;
        }
        let max_steps = (self.cols + self.rows).max(1);
        let steps = (steps as usize).clamp(1, max_steps);

        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            self.plot(start.x + delta.x * t, start.y + delta.y * t);
        }
    }

    fn flush(&mut self) {
        self.front.copy_from_slice(&self.back);
    }
}
