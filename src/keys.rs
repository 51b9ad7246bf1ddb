//! Keyboard input for the desktop host.
//!
//! SDL reports key presses as events, while the viewer samples button levels
//! once per tick through [`PolledButtons`](statusview_common::input::PolledButtons).
//! [`KeyState`] bridges the two: a key-down is latched until the next sample,
//! so a tap that starts and ends between two ticks is still seen as a press.
//!
//! # Key Map
//!
//! | Key                  | Button     |
//! |----------------------|------------|
//! | Escape, Backspace, Q | Exit       |
//! | Right, Down          | Next       |
//! | Left, Up             | Previous   |
//! | Return, Space        | Select     |
//!
//! Closing the window counts as Exit.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use embedded_graphics_simulator::sdl2::Keycode;
use statusview_common::input::{Button, ButtonLevels};

/// Button for a key, if the key is mapped.
pub fn button_for_key(keycode: Keycode) -> Option<Button> {
    match keycode {
        Keycode::Escape | Keycode::Backspace | Keycode::Q => Some(Button::Exit),
        Keycode::Right | Keycode::Down => Some(Button::Next),
        Keycode::Left | Keycode::Up => Some(Button::Previous),
        Keycode::Return | Keycode::Space => Some(Button::Select),
        _ => None,
    }
}

/// Held and latched state of the four buttons.
#[derive(Default, Debug)]
pub struct KeyState {
    held: [bool; 4],
    latched: [bool; 4],
}

impl KeyState {
    pub fn key_down(
        &mut self,
        button: Button,
    ) {
        self.held[button as usize] = true;
        self.latched[button as usize] = true;
    }

    pub fn key_up(
        &mut self,
        button: Button,
    ) {
        self.held[button as usize] = false;
    }

    /// Level of `button` for this tick; clears the latch.
    pub fn sample(
        &mut self,
        button: Button,
    ) -> bool {
        let i = button as usize;
        let down = self.held[i] || self.latched[i];
        self.latched[i] = false;
        down
    }
}

/// Key state shared between the window (writer) and the input (reader).
pub type SharedKeys = Rc<RefCell<KeyState>>;

/// [`ButtonLevels`] over the shared key state, timed from creation.
pub struct KeyLevels {
    keys: SharedKeys,
    started: Instant,
}

impl KeyLevels {
    pub fn new(keys: SharedKeys) -> Self {
        Self {
            keys,
            started: Instant::now(),
        }
    }
}

impl ButtonLevels for KeyLevels {
    fn is_down(
        &mut self,
        button: Button,
    ) -> bool {
        self.keys.borrow_mut().sample(button)
    }

    fn now_ms(&self) -> u64 { self.started.elapsed().as_millis() as u64 }
}

// =============================================================================
// Tests
// =============================================================================
