//! Cameras for the 2D diagram
//!
//! `OrthoCamera` is the world camera: a center, a viewport size in world
//! units and a zoom factor (larger zoom shows more of the world).
//! `ScreenViewport` maps one unit to one pixel for the overlay.

use macroquad::prelude::{vec2, Vec2};

use crate::render::Projection;

/// Orthographic world camera
#[derive(Clone, Debug)]
pub struct OrthoCamera {
    pub position: Vec2,
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub zoom: f32,

    /// Cached by `update`
    projection: Projection,
}

impl OrthoCamera {
    pub fn new() -> Self {
        let mut cam = Self {
            position: Vec2::ZERO,
            viewport_width: 1.0,
            viewport_height: 1.0,
            zoom: 1.0,
            projection: Projection::new(-0.5, 0.5, -0.5, 0.5),
        };
        cam.update();
        cam
    }

    /// Size the viewport and center it so the world origin is the bottom-left corner
    pub fn set_to_ortho(&mut self, viewport_width: f32, viewport_height: f32) {
        self.viewport_width = viewport_width;
        self.viewport_height = viewport_height;
        self.position = vec2(viewport_width / 2.0, viewport_height / 2.0);
        self.update();
    }

    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.position.x += dx;
        self.position.y += dy;
    }

    /// Recompute the projection after changing position, size or zoom
    pub fn update(&mut self) {
        let half_w = self.zoom * self.viewport_width / 2.0;
        let half_h = self.zoom * self.viewport_height / 2.0;
        self.projection = Projection::new(
            self.position.x - half_w,
            self.position.x + half_w,
            self.position.y - half_h,
            self.position.y + half_h,
        );
    }

    /// Projection as of the last `update`
    pub fn projection(&self) -> Projection {
        self.projection
    }
}

impl Default for OrthoCamera {
    fn default() -> Self {
        Self::new()
    }
}

/// Pixel-space viewport for screen-anchored overlays
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScreenViewport {
    pub width: f32,
    pub height: f32,
}

impl ScreenViewport {
    pub fn update(&mut self, width: u32, height: u32) {
        self.width = width as f32;
        self.height = height as f32;
    }

    pub fn projection(&self) -> Projection {
        Projection::screen(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_to_ortho_centers_viewport() {
        let mut cam = OrthoCamera::new();
        cam.set_to_ortho(8.0, 8.0);
        assert!((cam.position.x - 4.0).abs() < 0.001);
        assert!((cam.position.y - 4.0).abs() < 0.001);

        let p = cam.projection();
        assert!(p.left.abs() < 0.001);
        assert!(p.bottom.abs() < 0.001);
        assert!((p.right - 8.0).abs() < 0.001);
        assert!((p.top - 8.0).abs() < 0.001);
    }

    #[test]
    fn test_zoom_scales_visible_extent() {
        let mut cam = OrthoCamera::new();
        cam.set_to_ortho(20.0, 10.0);
        cam.zoom = 2.0;
        cam.update();
        let p = cam.projection();
        assert!((p.width() - 40.0).abs() < 0.001);
        assert!((p.height() - 20.0).abs() < 0.001);
        assert!((p.center().x - 10.0).abs() < 0.001);
    }

    #[test]
    fn test_projection_is_stale_until_update() {
        let mut cam = OrthoCamera::new();
        cam.set_to_ortho(8.0, 8.0);
        cam.translate(1.0, -1.0);
        assert!((cam.projection().center().x - 4.0).abs() < 0.001);
        cam.update();
        assert!((cam.projection().center().x - 5.0).abs() < 0.001);
        assert!((cam.projection().center().y - 3.0).abs() < 0.001);
    }

    #[test]
    fn test_screen_viewport_projection() {
        let mut vp = ScreenViewport::default();
        vp.update(1280, 720);
        let p = vp.projection();
        assert!((p.right - 1280.0).abs() < 0.001);
        assert!((p.top - 720.0).abs() < 0.001);
    }
}
