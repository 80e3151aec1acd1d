//! Keyboard polling

use macroquad::prelude::*;
use super::{Action, ActionSet};

/// Fixed key bindings
pub fn binding(action: Action) -> KeyCode {
    match action {
        Action::ZoomIn => KeyCode::A,
        Action::ZoomOut => KeyCode::Q,
        Action::PanLeft => KeyCode::Left,
        Action::PanRight => KeyCode::Right,
        Action::PanUp => KeyCode::Up,
        Action::PanDown => KeyCode::Down,
    }
}

/// Snapshot the held actions for this frame.
/// Call once per frame, after macroquad has processed input events.
pub fn poll_actions() -> ActionSet {
    Action::ALL
        .into_iter()
        .filter(|&action| is_key_down(binding(action)))
        .collect()
}
