//! Input/refresh loop.
//!
//! [`Viewer`] is an explicit two-state machine, `Running → Exiting`. Each
//! [`Viewer::tick`] polls the buttons in a fixed priority order and decides
//! how often the current page is repainted:
//!
//! 1. exit: switch to `Exiting` and stop; nothing else is polled this tick
//! 2. next: advance page, repaint, reset the refresh counter
//! 3. previous: go back a page, repaint, reset the refresh counter
//! 4. select: repaint, reset the refresh counter
//! 5. count the tick; at [`REFRESH_THRESHOLD`] repaint and reset
//!
//! [`run`] drives ticks at [`TICK_MS`] until the viewer exits. Keeping the
//! sleep outside `tick` lets the state machine be tested without a timer.

use log::info;

use crate::config::{PAGE_COUNT, REFRESH_THRESHOLD, TICK_MS};
use crate::controller::PageController;
use crate::device::Device;
use crate::display::Display;
use crate::error::Error;
use crate::input::Input;
use crate::layout::Layout;
use crate::pages::default_pages;
use crate::scheduler::Scheduler;

/// Loop state.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LoopState {
    Running,
    /// Terminal: no further input is processed.
    Exiting,
}

/// What a single tick did.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TickOutcome {
    /// State after the tick.
    pub state: LoopState,
    /// Number of page repaints performed during the tick.
    pub renders: u8,
}

/// Page controller, refresh counter and loop state for one display.
pub struct Viewer<Dsp, Dev> {
    controller: PageController<Dsp, Dev>,
    layout: Layout,
    refresh_tick: u16,
    state: LoopState,
}

impl<Dsp: Display, Dev: Device> Viewer<Dsp, Dev> {
    /// Viewer over the standard Device Info / Memory Info pages.
    pub fn with_default_pages(layout: Layout) -> Result<Self, Error> {
        let controller = PageController::new(PAGE_COUNT, &default_pages())?;
        Ok(Self::new(controller, layout))
    }
}

impl<Dsp, Dev> Viewer<Dsp, Dev> {
    pub const fn new(
        controller: PageController<Dsp, Dev>,
        layout: Layout,
    ) -> Self {
        Self {
            controller,
            layout,
            refresh_tick: 0,
            state: LoopState::Running,
        }
    }

    #[inline]
    pub const fn state(&self) -> LoopState { self.state }

    /// Index of the page currently shown.
    #[inline]
    pub const fn current_page(&self) -> usize { self.controller.current() }

    /// Ticks since the last repaint.
    #[inline]
    pub const fn refresh_tick(&self) -> u16 { self.refresh_tick }

    #[inline]
    pub const fn layout(&self) -> &Layout { &self.layout }

    /// Paint the initial page.
    pub fn start(
        &mut self,
        display: &mut Dsp,
        device: &Dev,
    ) {
        info!("viewer started on page {}", self.controller.current_title());
        self.controller.render_current(display, &self.layout, device);
        self.refresh_tick = 0;
    }

    /// Run one polling tick.
    pub fn tick<I: Input>(
        &mut self,
        display: &mut Dsp,
        input: &mut I,
        device: &Dev,
    ) -> TickOutcome {
        let mut renders = 0;

        if self.state == LoopState::Exiting {
            return TickOutcome {
                state: self.state,
                renders,
            };
        }

        if input.exit_pressed() {
            info!("exit requested");
            self.state = LoopState::Exiting;
            return TickOutcome {
                state: self.state,
                renders,
            };
        }

        if input.next_pressed() {
            self.controller.next();
            self.repaint(display, device, &mut renders);
        }

        if input.previous_pressed() {
            self.controller.previous();
            self.repaint(display, device, &mut renders);
        }

        if input.select_pressed() {
            self.controller.render(display, &self.layout, device);
            self.refresh_tick = 0;
            renders += 1;
        }

        self.refresh_tick += 1;
        if self.refresh_tick >= REFRESH_THRESHOLD {
            self.repaint(display, device, &mut renders);
        }

        TickOutcome {
            state: self.state,
            renders,
        }
    }

    fn repaint(
        &mut self,
        display: &mut Dsp,
        device: &Dev,
        renders: &mut u8,
    ) {
        self.controller.render_current(display, &self.layout, device);
        self.refresh_tick = 0;
        *renders += 1;
    }
}

/// Drive `viewer` until it exits: paint the first page, then tick, present
/// and sleep [`TICK_MS`] per iteration.
pub fn run<Dsp, Dev, I, S>(
    viewer: &mut Viewer<Dsp, Dev>,
    display: &mut Dsp,
    input: &mut I,
    device: &Dev,
    scheduler: &mut S,
) where
    Dsp: Display,
    I: Input,
    S: Scheduler,
{
    viewer.start(display, device);
    display.present();

    while viewer.tick(display, input, device).state == LoopState::Running {
        display.present();
        scheduler.sleep_ms(TICK_MS);
    }
}

// =============================================================================
// Tests
// =============================================================================
