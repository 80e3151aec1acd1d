//! A labelled track segment

use macroquad::prelude::{Color, Vec2, WHITE};

use crate::render::{ShapePass, TextAnchor};
use crate::stage::{Actor, DrawContext};

/// Height of the drawn segment, in world units
pub const LINE_THICKNESS: f32 = 0.1;

const LINE_COLOR: Color = WHITE;

/// Horizontal segment of fixed length with its name drawn above the start
#[derive(Debug, Clone)]
pub struct Line {
    name: String,
    position: Vec2,
    length: f32,
}

impl Line {
    pub fn new(name: impl Into<String>, position: Vec2, length: f32) -> Self {
        debug_assert!(length > 0.0, "line length must be positive");
        Self {
            name: name.into(),
            position,
            length,
        }
    }

    #[cfg(test)]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[cfg(test)]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[cfg(test)]
    pub fn length(&self) -> f32 {
        self.length
    }

    /// World x where the segment ends
    #[cfg(test)]
    pub fn end_x(&self) -> f32 {
        self.position.x + self.length
    }
}

impl Actor for Line {
    fn draw(&mut self, ctx: &mut DrawContext<'_>) {
        // Label sits on top of the bar
        let label_at = self.position + Vec2::new(0.0, LINE_THICKNESS);
        ctx.canvas.draw_text(&self.name, label_at, TextAnchor::BottomLeft, ctx.font);

        let mut shapes = ShapePass::begin(&mut *ctx.canvas);
        shapes.fill_rect(self.position.x, self.position.y, self.length, LINE_THICKNESS, LINE_COLOR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{FontStyle, GlyphFont};
    use crate::render::{Canvas, DrawOp, Pass, Projection, RecordingCanvas};
    use crate::stage::Frame;
    use macroquad::prelude::{vec2, BLACK};

    fn font() -> GlyphFont {
        GlyphFont::builtin(FontStyle {
            size: 16,
            color: BLACK,
            border_color: WHITE,
            border_width: 2,
        })
    }

    #[test]
    fn test_label_then_rect_in_shape_pass() {
        let mut line = Line::new("B", vec2(0.56, 0.0), 0.56);
        let font = font();
        let frame = Frame::default();
        let mut canvas = RecordingCanvas::new(800.0, 800.0);
        canvas.set_projection(Projection::new(0.0, 8.0, 0.0, 8.0));

        let mut ctx = DrawContext { canvas: &mut canvas, font: &font, frame: &frame };
        line.draw(&mut ctx);

        let ops = &canvas.ops()[1..];
        assert_eq!(ops.len(), 4);
        match &ops[0] {
            DrawOp::Text { text, x, y, anchor } => {
                assert_eq!(text, "B");
                // 0.56 world units at 100 px/unit, resting on the bar top (0.1 units up)
                assert!((x - 56.0).abs() < 0.01);
                assert!((y - 790.0).abs() < 0.01);
                assert_eq!(*anchor, TextAnchor::BottomLeft);
            }
            other => panic!("expected label first, got {:?}", other),
        }
        assert_eq!(ops[1], DrawOp::BeginShapes);
        match ops[2] {
            DrawOp::Rect { x, y, w, h } => {
                assert!((x - 0.56).abs() < 0.0001);
                assert!(y.abs() < 0.0001);
                assert!((w - 0.56).abs() < 0.0001);
                assert!((h - LINE_THICKNESS).abs() < 0.0001);
            }
            ref other => panic!("expected rect, got {:?}", other),
        }
        assert_eq!(ops[3], DrawOp::EndShapes);
        assert_eq!(canvas.pass(), Pass::Batch);
    }

    #[test]
    fn test_label_does_not_overlap_bar() {
        let mut line = Line::new("C", vec2(1.0, 2.0), 0.56);
        let font = font();
        let frame = Frame::default();
        let mut canvas = RecordingCanvas::new(800.0, 800.0);
        let projection = Projection::new(0.0, 8.0, 0.0, 8.0);
        canvas.set_projection(projection);

        let mut ctx = DrawContext { canvas: &mut canvas, font: &font, frame: &frame };
        line.draw(&mut ctx);

        let bar_top = projection.to_pixels(vec2(1.0, 2.0 + LINE_THICKNESS), vec2(800.0, 800.0));
        let label = canvas.ops().iter().find_map(|op| match op {
            DrawOp::Text { x, y, anchor, .. } => Some((*x, *y, *anchor)),
            _ => None,
        });
        let (x, y, anchor) = label.expect("label drawn");
        // Bottom edge of the label at or above the bar's top edge (pixel y grows down)
        assert_eq!(anchor, TextAnchor::BottomLeft);
        assert!((x - bar_top.x).abs() < 0.01);
        assert!(y <= bar_top.y + 0.01);
    }

    #[test]
    fn test_end_x() {
        let line = Line::new("A", vec2(0.0, 0.0), 0.56);
        assert_eq!(line.name(), "A");
        assert!((line.end_x() - 0.56).abs() < 0.0001);
    }
}
