//! Actors and stages
//!
//! An actor is anything that can draw itself through a `DrawContext`.
//! A stage is an ordered list of actors drawn under one projection.

use macroquad::prelude::Vec2;

use crate::font::GlyphFont;
use crate::input::ActionSet;
use crate::render::{Canvas, Projection};

/// Per-frame inputs from the host loop
#[derive(Debug, Clone, Copy, Default)]
pub struct Frame {
    /// Seconds since the previous frame
    pub delta: f32,
    /// Measured frames per second
    pub fps: u32,
    /// Actions held this frame
    pub actions: ActionSet,
}

/// Everything an actor may use while drawing
pub struct DrawContext<'a> {
    pub canvas: &'a mut dyn Canvas,
    pub font: &'a GlyphFont,
    pub frame: &'a Frame,
}

/// Drawable scene element
pub trait Actor {
    /// Advance per-frame state. Most actors are static.
    fn act(&mut self, _delta: f32) {}

    /// Move the actor. Actors with a fixed placement ignore this.
    fn set_position(&mut self, _position: Vec2) {}

    fn draw(&mut self, ctx: &mut DrawContext<'_>);
}

/// Ordered actor collection; insertion order is draw order
#[derive(Default)]
pub struct Stage {
    actors: Vec<Box<dyn Actor>>,
}

impl Stage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_actor(&mut self, actor: Box<dyn Actor>) {
        self.actors.push(actor);
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn actor_mut(&mut self, index: usize) -> Option<&mut (dyn Actor + 'static)> {
        self.actors.get_mut(index).map(|actor| actor.as_mut())
    }

    pub fn act(&mut self, delta: f32) {
        for actor in &mut self.actors {
            actor.act(delta);
        }
    }

    /// Draw every actor under `projection`
    pub fn draw(&mut self, projection: Projection, ctx: &mut DrawContext<'_>) {
        ctx.canvas.set_projection(projection);
        for actor in &mut self.actors {
            actor.draw(ctx);
        }
    }

    /// Drop all actors. Returns how many were released.
    pub fn dispose(&mut self) -> usize {
        let released = self.actors.len();
        self.actors.clear();
        released
    }
}
