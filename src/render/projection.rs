//! Orthographic projection boxes
//!
//! Both the world camera and the screen viewport reduce to an axis-aligned
//! box of visible units with +Y pointing up. The canvas uses it to place
//! shapes (through a macroquad `Camera2D`) and to map text anchors to pixels.

use macroquad::prelude::{vec2, vec3, Camera2D, Mat4, Vec2};

/// Visible region in the units of whatever is being drawn (world units or pixels)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

impl Projection {
    pub fn new(left: f32, right: f32, bottom: f32, top: f32) -> Self {
        Self { left, right, bottom, top }
    }

    /// Projection covering a `width` x `height` pixel surface, origin bottom-left
    pub fn screen(width: f32, height: f32) -> Self {
        Self::new(0.0, width, 0.0, height)
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.top - self.bottom
    }

    pub fn center(&self) -> Vec2 {
        vec2((self.left + self.right) * 0.5, (self.bottom + self.top) * 0.5)
    }

    /// Combined projection matrix mapping the box onto NDC [-1, 1]
    pub fn matrix(&self) -> Mat4 {
        Mat4::orthographic_rh_gl(self.left, self.right, self.bottom, self.top, -1.0, 1.0)
    }

    /// Map a point in projection units to pixel coordinates (origin top-left, +Y down)
    pub fn to_pixels(&self, point: Vec2, surface: Vec2) -> Vec2 {
        let ndc = self.matrix().project_point3(vec3(point.x, point.y, 0.0));
        vec2(
            (ndc.x + 1.0) * 0.5 * surface.x,
            (1.0 - ndc.y) * 0.5 * surface.y,
        )
    }

    /// Equivalent macroquad camera, used for immediate-mode shape drawing.
    /// `Camera2D` flips y when drawing to the screen, so zoom.y is negated to keep +Y up.
    pub fn camera(&self) -> Camera2D {
        Camera2D {
            target: self.center(),
            zoom: vec2(2.0 / self.width(), -2.0 / self.height()),
            ..Default::default()
        }
    }
}
