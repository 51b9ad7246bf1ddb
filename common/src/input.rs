//! Button input for the viewer loop.
//!
//! The loop consumes four edge-triggered events through the [`Input`] trait.
//! Hardware buttons are usually read as levels, so [`PolledButtons`] turns
//! sampled levels into edges with time-based debouncing, one
//! [`ButtonState`] per button.

use crate::config::DEBOUNCE_MS;

/// Edge-triggered button events, each reported at most once per press.
pub trait Input {
    /// Exit the viewer.
    fn exit_pressed(&mut self) -> bool;

    /// Go to the next page.
    fn next_pressed(&mut self) -> bool;

    /// Go to the previous page.
    fn previous_pressed(&mut self) -> bool;

    /// Repaint the current page.
    fn select_pressed(&mut self) -> bool;
}

/// Logical buttons of the viewer.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    Exit,
    Next,
    Previous,
    Select,
}

/// Level-sampled button source with a millisecond clock.
pub trait ButtonLevels {
    /// Whether `button` is currently held down.
    fn is_down(
        &mut self,
        button: Button,
    ) -> bool;

    /// Monotonic time in milliseconds, used for debouncing.
    fn now_ms(&self) -> u64;
}

/// Button debounce state with time-based edge detection.
#[derive(Debug)]
pub struct ButtonState {
    was_pressed: bool,
    last_change: Option<u64>,
}

impl ButtonState {
    /// Create a new button state (not pressed).
    pub const fn new() -> Self {
        Self {
            was_pressed: false,
            last_change: None,
        }
    }

    /// Returns true only on the press edge.
    ///
    /// Level changes closer than [`DEBOUNCE_MS`] to the previous accepted
    /// change are ignored as contact bounce.
    pub fn just_pressed(
        &mut self,
        is_down: bool,
        now_ms: u64,
    ) -> bool {
        if is_down != self.was_pressed {
            if let Some(last) = self.last_change
                && now_ms.saturating_sub(last) < DEBOUNCE_MS
            {
                return false;
            }

            self.was_pressed = is_down;
            self.last_change = Some(now_ms);

            return is_down;
        }

        false
    }
}

impl Default for ButtonState {
    fn default() -> Self { Self::new() }
}

/// [`Input`] built from level-sampled buttons.
pub struct PolledButtons<L> {
    levels: L,
    exit: ButtonState,
    next: ButtonState,
    previous: ButtonState,
    select: ButtonState,
}

impl<L: ButtonLevels> PolledButtons<L> {
    pub const fn new(levels: L) -> Self {
        Self {
            levels,
            exit: ButtonState::new(),
            next: ButtonState::new(),
            previous: ButtonState::new(),
            select: ButtonState::new(),
        }
    }

    /// Borrow the underlying level source.
    pub const fn levels(&self) -> &L { &self.levels }

    fn poll(
        &mut self,
        button: Button,
    ) -> bool {
        let is_down = self.levels.is_down(button);
        let now = self.levels.now_ms();
        let state = match button {
            Button::Exit => &mut self.exit,
            Button::Next => &mut self.next,
            Button::Previous => &mut self.previous,
            Button::Select => &mut self.select,
        };
        state.just_pressed(is_down, now)
    }
}

impl<L: ButtonLevels> Input for PolledButtons<L> {
    fn exit_pressed(&mut self) -> bool { self.poll(Button::Exit) }

    fn next_pressed(&mut self) -> bool { self.poll(Button::Next) }

    fn previous_pressed(&mut self) -> bool { self.poll(Button::Previous) }

    fn select_pressed(&mut self) -> bool { self.poll(Button::Select) }
}

// =============================================================================
// Tests
// =============================================================================
