use std::ops::Deref;

use blit_lib::{EventSource, InputEvent, Key, Point};
use sdl3::event::Event;
use sdl3::keyboard::Keycode;

use crate::error::InitError;
use crate::sdl::Context;

const KEYS: [(Keycode, Key); 10] = [
    (Keycode::Up, Key::Up),
    (Keycode::Down, Key::Down),
    (Keycode::Left, Key::Left),
    (Keycode::Right, Key::Right),
    (Keycode::Q, Key::Q),
    (Keycode::W, Key::W),
    (Keycode::E, Key::E),
    (Keycode::A, Key::A),
    (Keycode::S, Key::S),
    (Keycode::D, Key::D),
];

fn key(code: Keycode) -> Key {
    KEYS.iter()
        .find(|(k, _)| *k == code)
        .map_or(Key::Other, |&(_, key)| key)
}

fn pointer(x: f32, y: f32) -> Point {
    Point::new(x as i32, y as i32)
}

fn translate(event: Event) -> InputEvent {
    match event {
        Event::Quit { .. } => InputEvent::Quit,
        Event::KeyDown {
            keycode: Some(keycode),
            ..
        } => InputEvent::KeyDown(key(keycode)),
        Event::MouseMotion { x, y, .. } => InputEvent::PointerMove(pointer(x, y)),
        Event::MouseButtonDown { x, y, .. } => InputEvent::ButtonDown(pointer(x, y)),
        Event::MouseButtonUp { x, y, .. } => InputEvent::ButtonUp(pointer(x, y)),
        _ => InputEvent::Other,
    }
}

pub struct EventPump {
    pump: sdl3::EventPump,
}

impl EventPump {
    pub fn new(context: &Context) -> Result<Self, InitError> {
        let pump = context.event_pump().map_err(|e| InitError::Subsystem {
            subsystem: "events",
            message: e.to_string(),
        })?;
        Ok(EventPump { pump })
    }
}

impl EventSource for EventPump {
    fn poll(&mut self) -> Vec<InputEvent> {
        self.pump.poll_iter().map(translate).collect()
    }
}

impl Deref for EventPump {
    type Target = sdl3::EventPump;
    fn deref(&self) -> &Self::Target {
        &self.pump
    }
}
