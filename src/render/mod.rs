//! Rendering seam between actors and macroquad
//!
//! Actors draw through `Canvas` rather than calling macroquad directly, so the
//! scene can be driven without a window in tests. Text goes through the batch
//! pass; filled shapes need a shape pass that suspends it (see `ShapePass`).

mod canvas;
mod projection;
#[cfg(test)]
mod recording;

pub use canvas::MacroquadCanvas;
pub use projection::Projection;
#[cfg(test)]
pub use recording::{DrawOp, RecordingCanvas};

use crate::font::GlyphFont;
use macroquad::prelude::{Color, Vec2};

/// Which pass the canvas is currently in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    /// Batched text drawing (the default)
    Batch,
    /// Immediate-mode shapes; text must not be drawn until the pass ends
    Shapes,
}

/// Corner of the text box placed at the anchor point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    TopLeft,
    /// Text sits on top of the anchor, extending up and right
    BottomLeft,
}

/// Draw target shared by every actor in a frame
pub trait Canvas {
    /// Clear the whole surface
    fn clear(&mut self, color: Color);

    /// Projection applied to positions passed to this canvas from now on
    fn set_projection(&mut self, projection: Projection);

    /// Draw text with its `anchor` corner at `at` (projection units).
    /// Glyphs keep their rasterized pixel size regardless of the projection.
    fn draw_text(&mut self, text: &str, at: Vec2, anchor: TextAnchor, font: &GlyphFont);

    /// Suspend the batch and start issuing shapes with the current projection
    fn begin_shapes(&mut self);

    /// Axis-aligned filled rectangle growing right and up from (`x`, `y`)
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);

    /// End the shape pass and resume the batch
    fn end_shapes(&mut self);
}

/// Scoped shape pass: begins on creation, resumes the batch on drop
pub struct ShapePass<'a> {
    canvas: &'a mut dyn Canvas,
}

impl<'a> ShapePass<'a> {
    pub fn begin(canvas: &'a mut dyn Canvas) -> Self {
        canvas.begin_shapes();
        Self { canvas }
    }

    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.canvas.fill_rect(x, y, w, h, color);
    }
}

impl Drop for ShapePass<'_> {
    fn drop(&mut self) {
        self.canvas.end_shapes();
    }
}
