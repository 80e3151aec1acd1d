//! macroquad-backed canvas
//!
//! macroquad flushes its batch whenever the active camera changes, so the
//! pass switch maps onto camera switches: shapes are drawn under the
//! projection's `Camera2D`, text under the default pixel camera.

use macroquad::prelude::*;

use super::{Canvas, Pass, Projection, TextAnchor};
use crate::font::GlyphFont;

pub struct MacroquadCanvas {
    projection: Projection,
    pass: Pass,
}

impl MacroquadCanvas {
    /// Canvas for the current frame, starting in pixel projection
    pub fn new() -> Self {
        set_default_camera();
        Self {
            projection: Projection::screen(screen_width(), screen_height()),
            pass: Pass::Batch,
        }
    }

    fn surface() -> Vec2 {
        vec2(screen_width(), screen_height())
    }
}

impl Default for MacroquadCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas for MacroquadCanvas {
    fn clear(&mut self, color: Color) {
        clear_background(color);
    }

    fn set_projection(&mut self, projection: Projection) {
        self.projection = projection;
    }

    fn draw_text(&mut self, text: &str, at: Vec2, anchor: TextAnchor, font: &GlyphFont) {
        if self.pass == Pass::Shapes {
            log::warn!("text {:?} drawn during a shape pass; ignoring", text);
            return;
        }
        let px = self.projection.to_pixels(at, Self::surface());
        font.draw(text, px.x.round(), px.y.round(), anchor);
    }

    fn begin_shapes(&mut self) {
        debug_assert_eq!(self.pass, Pass::Batch, "nested shape pass");
        set_camera(&self.projection.camera());
        self.pass = Pass::Shapes;
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        debug_assert_eq!(self.pass, Pass::Shapes, "fill_rect outside a shape pass");
        draw_rectangle(x, y, w, h, color);
    }

    fn end_shapes(&mut self) {
        set_default_camera();
        self.pass = Pass::Batch;
    }
}
