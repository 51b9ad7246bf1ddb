//! Simulated panel: a [`Canvas`] over a `SimulatorDisplay` shown in an SDL window.
//!
//! Drawing goes to the in-memory simulator framebuffer; [`Display::present`]
//! pushes it to the window and pumps SDL events into the shared key state.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Alignment, Baseline};
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use log::debug;
use statusview_common::colors::BACKGROUND;
use statusview_common::display::{Canvas, Display};
use statusview_common::input::Button;

use crate::config::{PIXEL_SCALE, SCREEN_HEIGHT, SCREEN_WIDTH, WINDOW_TITLE};
use crate::keys::{SharedKeys, button_for_key};

pub struct HostScreen {
    canvas: Canvas<SimulatorDisplay<Rgb565>>,
    window: Window,
    keys: SharedKeys,
}

impl HostScreen {
    pub fn new(keys: SharedKeys) -> Self {
        let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        display.clear(BACKGROUND).ok();

        let output_settings = OutputSettingsBuilder::new().scale(PIXEL_SCALE).build();
        let window = Window::new(WINDOW_TITLE, &output_settings);

        Self {
            canvas: Canvas::new(display),
            window,
            keys,
        }
    }

    fn pump_events(&mut self) {
        for event in self.window.events() {
            match event {
                SimulatorEvent::Quit => {
                    debug!("window closed");
                    self.keys.borrow_mut().key_down(Button::Exit);
                }
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    if let Some(button) = button_for_key(keycode) {
                        self.keys.borrow_mut().key_down(button);
                    }
                }
                SimulatorEvent::KeyUp { keycode, .. } => {
                    if let Some(button) = button_for_key(keycode) {
                        self.keys.borrow_mut().key_up(button);
                    }
                }
                _ => {}
            }
        }
    }
}

impl Display for HostScreen {
    fn fill(
        &mut self,
        color: Rgb565,
    ) {
        self.canvas.fill(color);
    }

    fn set_text_align(
        &mut self,
        horizontal: Alignment,
        vertical: Baseline,
    ) {
        self.canvas.set_text_align(horizontal, vertical);
    }

    fn set_text_size(
        &mut self,
        size: u8,
    ) {
        self.canvas.set_text_size(size);
    }

    fn set_text_color(
        &mut self,
        color: Rgb565,
    ) {
        self.canvas.set_text_color(color);
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
    ) {
        self.canvas.draw_text(text, x, y);
    }

    fn width(&self) -> u32 { self.canvas.width() }

    fn height(&self) -> u32 { self.canvas.height() }

    fn present(&mut self) {
        self.window.update(self.canvas.target());
        self.pump_events();
    }
}
