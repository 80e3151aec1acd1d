//! Frame rate overlay

use macroquad::prelude::Vec2;

use crate::render::TextAnchor;
use crate::stage::{Actor, DrawContext};

/// Draws "<n> fps" at a fixed screen position
#[derive(Debug, Clone)]
pub struct Fps {
    position: Vec2,
    text: String,
}

impl Fps {
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            text: String::from("- fps"),
        }
    }

    /// Text drawn by the most recent `draw`
    #[cfg(test)]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Default for Fps {
    fn default() -> Self {
        Self::new()
    }
}

impl Actor for Fps {
    /// Top-left corner of the label, in screen units (y up)
    fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    fn draw(&mut self, ctx: &mut DrawContext<'_>) {
        self.text = format!("{} fps", ctx.frame.fps);
        ctx.canvas.draw_text(&self.text, self.position, TextAnchor::TopLeft, ctx.font);
    }
}
