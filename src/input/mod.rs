//! Keyboard input
//!
//! Keys are polled once per frame into an `ActionSet` snapshot that the
//! scene receives explicitly, so camera logic never touches macroquad's
//! global input state.

mod actions;
mod state;

pub use actions::*;
pub use state::*;
