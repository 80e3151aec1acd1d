//! Line diagram screen
//!
//! World stage of track segments viewed through a pan/zoom camera, plus a
//! screen-space overlay with the frame rate.

use macroquad::prelude::{vec2, Color};

use crate::actors::{Fps, Line};
use crate::app::Screen;
use crate::camera::{OrthoCamera, ScreenViewport};
use crate::font::GlyphFont;
use crate::input::Action;
use crate::render::Canvas;
use crate::stage::{DrawContext, Frame, Stage};

/// Zoom change per frame while a zoom action is held
pub const ZOOM_STEP: f32 = 0.02;

/// Pan distance per frame, multiplied by the current zoom
pub const PAN_STEP: f32 = 3.0;

/// Camera viewport width after a resize, in world units
pub const WORLD_WIDTH: f32 = 20.0;

/// Viewport the camera starts with before the first resize
const INITIAL_VIEWPORT: f32 = 8.0;

/// Segment length of the hardcoded layout
pub const SEGMENT_LENGTH: f32 = 0.560;

const SEGMENT_NAMES: [&str; 4] = ["A", "B", "C", "D"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagramState {
    Active,
    Disposed,
}

pub struct LineDiagram {
    camera: OrthoCamera,
    ui_viewport: ScreenViewport,
    stage: Stage,
    ui_stage: Stage,
    /// Index of the `Fps` actor in `ui_stage`
    fps_actor: usize,
    clear_color: Color,
    state: DiagramState,
}

impl LineDiagram {
    pub fn new(clear_color: Color) -> Self {
        let mut camera = OrthoCamera::new();
        camera.set_to_ortho(INITIAL_VIEWPORT, INITIAL_VIEWPORT);

        let mut stage = Stage::new();
        for line in layout() {
            stage.add_actor(Box::new(line));
        }

        let mut ui_stage = Stage::new();
        let fps_actor = ui_stage.len();
        ui_stage.add_actor(Box::new(Fps::new()));

        Self {
            camera,
            ui_viewport: ScreenViewport::default(),
            stage,
            ui_stage,
            fps_actor,
            clear_color,
            state: DiagramState::Active,
        }
    }

    #[cfg(test)]
    pub fn camera(&self) -> &OrthoCamera {
        &self.camera
    }

    #[cfg(test)]
    pub fn camera_mut(&mut self) -> &mut OrthoCamera {
        &mut self.camera
    }

    #[cfg(test)]
    pub fn state(&self) -> DiagramState {
        self.state
    }

    #[cfg(test)]
    pub fn line_count(&self) -> usize {
        self.stage.len()
    }

    /// Apply this frame's held actions to the camera
    fn handle_movement(&mut self, frame: &Frame) {
        let actions = &frame.actions;
        if actions.is_held(Action::ZoomIn) {
            self.camera.zoom += ZOOM_STEP;
        }
        if actions.is_held(Action::ZoomOut) {
            self.camera.zoom -= ZOOM_STEP;
        }
        for action in [Action::PanLeft, Action::PanRight, Action::PanDown, Action::PanUp] {
            if !actions.is_held(action) {
                continue;
            }
            if let Some((dx, dy)) = action.pan_direction() {
                let step = PAN_STEP * self.camera.zoom;
                self.camera.translate(dx * step, dy * step);
            }
        }
        self.camera.update();
    }
}

/// Segments placed end to end along the x axis
pub fn layout() -> Vec<Line> {
    SEGMENT_NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| Line::new(*name, vec2(SEGMENT_LENGTH * i as f32, 0.0), SEGMENT_LENGTH))
        .collect()
}

impl Screen for LineDiagram {
    fn render(&mut self, frame: &Frame, font: &GlyphFont, canvas: &mut dyn Canvas) {
        if self.state == DiagramState::Disposed {
            log::warn!("render on a disposed line diagram");
            return;
        }

        canvas.clear(self.clear_color);
        self.handle_movement(frame);

        self.stage.act(frame.delta);
        self.ui_stage.act(frame.delta);

        let mut ctx = DrawContext { canvas, font, frame };
        self.stage.draw(self.camera.projection(), &mut ctx);

        self.ui_stage.draw(self.ui_viewport.projection(), &mut ctx);
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            log::debug!("ignoring resize to {}x{}", width, height);
            return;
        }
        self.ui_viewport.update(width, height);
        self.camera.viewport_width = WORLD_WIDTH;
        self.camera.viewport_height = WORLD_WIDTH * height as f32 / width as f32;
        self.camera.update();
        if let Some(fps) = self.ui_stage.actor_mut(self.fps_actor) {
            fps.set_position(vec2(0.0, height as f32));
        }
        log::debug!(
            "resized to {}x{}, camera viewport {:.3}x{:.3}",
            width,
            height,
            self.camera.viewport_width,
            self.camera.viewport_height
        );
    }

    fn dispose(&mut self) {
        if self.state == DiagramState::Disposed {
            return;
        }
        let released = self.stage.dispose() + self.ui_stage.dispose();
        self.state = DiagramState::Disposed;
        log::info!("line diagram disposed ({} actors released)", released);
    }
}
