//! Canvas that records draw operations instead of rendering them

use macroquad::prelude::*;

use super::{Canvas, Pass, Projection, TextAnchor};
use crate::font::GlyphFont;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear,
    SetProjection(Projection),
    /// Text with its anchor already mapped to pixels
    Text { text: String, x: f32, y: f32, anchor: TextAnchor },
    BeginShapes,
    Rect { x: f32, y: f32, w: f32, h: f32 },
    EndShapes,
}

pub struct RecordingCanvas {
    surface: Vec2,
    projection: Projection,
    pass: Pass,
    ops: Vec<DrawOp>,
}

impl RecordingCanvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            surface: vec2(width, height),
            projection: Projection::screen(width, height),
            pass: Pass::Batch,
            ops: Vec::new(),
        }
    }

    pub fn pass(&self) -> Pass {
        self.pass
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self, _color: Color) {
        self.ops.push(DrawOp::Clear);
    }

    fn set_projection(&mut self, projection: Projection) {
        self.projection = projection;
        self.ops.push(DrawOp::SetProjection(projection));
    }

    fn draw_text(&mut self, text: &str, at: Vec2, anchor: TextAnchor, _font: &GlyphFont) {
        assert_eq!(self.pass, Pass::Batch, "text drawn during a shape pass");
        let px = self.projection.to_pixels(at, self.surface);
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            x: px.x,
            y: px.y,
            anchor,
        });
    }

    fn begin_shapes(&mut self) {
        assert_eq!(self.pass, Pass::Batch, "nested shape pass");
        self.pass = Pass::Shapes;
        self.ops.push(DrawOp::BeginShapes);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, _color: Color) {
        assert_eq!(self.pass, Pass::Shapes, "fill_rect outside a shape pass");
        self.ops.push(DrawOp::Rect { x, y, w, h });
    }

    fn end_shapes(&mut self) {
        assert_eq!(self.pass, Pass::Shapes, "end_shapes without begin_shapes");
        self.pass = Pass::Batch;
        self.ops.push(DrawOp::EndShapes);
    }
}
