use num_derive::ToPrimitive;
use num_traits::ToPrimitive;

use crate::geometry::{Point, Rect};
use crate::input::InputEvent;

/// Visual state of a button. The discriminant is the row of the button sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ToPrimitive)]
pub enum Visual {
    #[default]
    Idle = 0,
    Hovered = 1,
    Pressed = 2,
    Released = 3,
}

impl Visual {
    pub const COUNT: u32 = 4;
}

/// A fixed-size rectangle reacting to pointer events.
///
/// Every pointer event first hit-tests against `[x, x + w) × [y, y + h)`.
/// Outside always means `Idle`; inside, the event kind picks the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteractiveRegion {
    position: Point,
    width: u32,
    height: u32,
    state: Visual,
}

impl InteractiveRegion {
    pub fn new(width: u32, height: u32) -> Self {
        InteractiveRegion {
            position: Point::default(),
            width,
            height,
            state: Visual::Idle,
        }
    }

    pub fn set_position(&mut self, x: i32, y: i32) {
        self.position = Point::new(x, y);
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, self.width, self.height)
    }

    pub fn state(&self) -> Visual {
        self.state
    }

    pub fn handle_event(&mut self, event: &InputEvent) {
        let Some(pointer) = event.pointer() else {
            return;
        };

        self.state = if !self.bounds().contains(pointer) {
            Visual::Idle
        } else {
            match event {
                InputEvent::PointerMove(_) => Visual::Hovered,
                InputEvent::ButtonDown(_) => Visual::Pressed,
                InputEvent::ButtonUp(_) => Visual::Released,
                _ => self.state,
            }
        };
    }

    /// Index of the sprite sheet region to draw for the current state.
    pub fn current_visual(&self) -> usize {
        self.state.to_usize().unwrap_or_default()
    }
}

/// Four equally sized buttons, one in each corner of a `screen_w` x `screen_h` window.
pub fn corner_buttons(width: u32, height: u32, screen_w: u32, screen_h: u32) -> [InteractiveRegion; 4] {
    let right = screen_w as i32 - width as i32;
    let bottom = screen_h as i32 - height as i32;
    let corners = [(0, 0), (right, 0), (0, bottom), (right, bottom)];

    corners.map(|(x, y)| {
        let mut button = InteractiveRegion::new(width, height);
        button.set_position(x, y);
        button
    })
}
