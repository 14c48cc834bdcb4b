//! Keyboard, mouse and touch translation
//!
//! Platform adapters forward raw events here as they arrive; once per frame
//! the driver calls `frame()` to get the `TickInput` for the next tick.

use crate::sim::TickInput;

/// Keys the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    /// Serve
    Space,
    Pause,
    Reset,
    Other,
}

/// Platform-neutral input event. Coordinates are field-space x.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    PointerMove(f32),
    TouchStart(f32),
    TouchMove(f32),
    TouchEnd,
}

/// Accumulates events between frames
#[derive(Debug, Clone, Default)]
pub struct InputTranslator {
    left_held: bool,
    right_held: bool,
    /// Last pointer/touch x (0 until the pointer has moved)
    pointer_x: f32,
    touching: bool,
    start: bool,
    toggle_pause: bool,
    reset: bool,
    advance_level: bool,
}

impl InputTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown(key) => match key {
                Key::Left => self.left_held = true,
                Key::Right => self.right_held = true,
                Key::Space => self.start = true,
                Key::Pause => self.toggle_pause = true,
                Key::Reset => self.reset = true,
                Key::Other => {}
            },
            InputEvent::KeyUp(key) => match key {
                Key::Left => self.left_held = false,
                Key::Right => self.right_held = false,
                _ => {}
            },
            InputEvent::PointerMove(x) => self.pointer_x = x,
            // The paddle follows a touch only once it moves
            InputEvent::TouchStart(_) => self.touching = true,
            InputEvent::TouchMove(x) => {
                if self.touching {
                    self.pointer_x = x;
                } else {
                    log::warn!("Touch move without touch start ignored");
                }
            }
            InputEvent::TouchEnd => {
                self.touching = false;
                // Lifting a finger serves; ignored by the sim outside Waiting
                self.start = true;
            }
        }
    }

    /// Request the next level (UI "next level" button)
    pub fn request_next_level(&mut self) {
        self.advance_level = true;
    }

    /// Request a restart (UI "restart" button)
    pub fn request_reset(&mut self) {
        self.reset = true;
    }

    /// Input for the coming tick. Clears the one-shot signals; held keys persist.
    pub fn frame(&mut self) -> TickInput {
        let pointer_active = self.pointer_x > 0.0 || self.touching;
        let input = TickInput {
            left: self.left_held,
            right: self.right_held,
            pointer_x: pointer_active.then_some(self.pointer_x),
            start: self.start,
            toggle_pause: self.toggle_pause,
            reset: self.reset,
            advance_level: self.advance_level,
        };
        self.start = false;
        self.toggle_pause = false;
        self.reset = false;
        self.advance_level = false;
        input
    }
}
