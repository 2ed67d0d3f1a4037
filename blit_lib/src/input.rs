use crate::geometry::Point;

/// Keys the demos react to. Everything else arrives as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Q,
    W,
    E,
    A,
    S,
    D,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
    PointerMove(Point),
    ButtonDown(Point),
    ButtonUp(Point),
    Other,
}

impl InputEvent {
    /// Pointer position carried by mouse events
    pub fn pointer(&self) -> Option<Point> {
        match *self {
            InputEvent::PointerMove(p) | InputEvent::ButtonDown(p) | InputEvent::ButtonUp(p) => Some(p),
            _ => None,
        }
    }
}
