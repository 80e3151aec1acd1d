//! Camera control actions

/// Logical inputs the diagram camera responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Grow the zoom factor (shows more of the world)
    ZoomIn = 0,
    /// Shrink the zoom factor
    ZoomOut = 1,
    PanLeft = 2,
    PanRight = 3,
    PanUp = 4,
    PanDown = 5,
}

impl Action {
    pub const COUNT: usize = 6;

    pub const ALL: [Action; Action::COUNT] = [
        Action::ZoomIn,
        Action::ZoomOut,
        Action::PanLeft,
        Action::PanRight,
        Action::PanUp,
        Action::PanDown,
    ];

    /// Unit direction for pan actions, `None` for zoom
    pub fn pan_direction(self) -> Option<(f32, f32)> {
        match self {
            Action::PanLeft => Some((-1.0, 0.0)),
            Action::PanRight => Some((1.0, 0.0)),
            Action::PanUp => Some((0.0, 1.0)),
            Action::PanDown => Some((0.0, -1.0)),
            Action::ZoomIn | Action::ZoomOut => None,
        }
    }
}

/// Set of actions held during one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionSet {
    held: [bool; Action::COUNT],
}

impl ActionSet {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with(mut self, action: Action) -> Self {
        self.insert(action);
        self
    }

    pub fn insert(&mut self, action: Action) {
        self.held[action as usize] = true;
    }

    pub fn is_held(&self, action: Action) -> bool {
        self.held[action as usize]
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        !self.held.iter().any(|&h| h)
    }

    /// Held actions in declaration order
    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = Action> + '_ {
        Action::ALL.into_iter().filter(|&a| self.is_held(a))
    }
}

impl FromIterator<Action> for ActionSet {
    fn from_iter<I: IntoIterator<Item = Action>>(iter: I) -> Self {
        let mut set = ActionSet::new();
        for action in iter {
            set.insert(action);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_set() {
        let set = ActionSet::new();
        assert!(set.is_empty());
        assert!(Action::ALL.iter().all(|&a| !set.is_held(a)));
    }

    #[test]
    fn test_collect_and_iter_order() {
        let set: ActionSet = [Action::PanDown, Action::ZoomIn, Action::PanDown].into_iter().collect();
        assert!(set.is_held(Action::ZoomIn));
        assert!(set.is_held(Action::PanDown));
        assert!(!set.is_held(Action::PanUp));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Action::ZoomIn, Action::PanDown]);
    }

    #[test]
    fn test_pan_directions_are_unit() {
        for action in Action::ALL {
            if let Some((x, y)) = action.pan_direction() {
                assert!(((x * x + y * y).sqrt() - 1.0).abs() < 0.001);
            }
        }
        assert_eq!(Action::ZoomIn.pan_direction(), None);
    }
}
