use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchAction {
    /// A pointer went down.
    Down,
    /// The pointer moved while down.
    Move,
    /// The pointer was lifted.
    Up,
    /// The gesture was aborted by the host.
    Cancel,
}

/// A positional touch event in the local coordinate space of the widget receiving it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchEvent {
    pub action: TouchAction,
    pub position: Vec2,
}

impl TouchEvent {
    pub fn new(action: TouchAction, x: f32, y: f32) -> Self {
        Self {
            action,
            position: Vec2::new(x, y),
        }
    }

    pub fn down(x: f32, y: f32) -> Self {
        Self::new(TouchAction::Down, x, y)
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self::new(TouchAction::Move, x, y)
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self::new(TouchAction::Up, x, y)
    }

    pub fn cancel(x: f32, y: f32) -> Self {
        Self::new(TouchAction::Cancel, x, y)
    }
}
