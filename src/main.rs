//! statusview desktop host.
//!
//! Runs the status viewer in an SDL window through `embedded-graphics-simulator`,
//! with the host keyboard as buttons and `/proc/meminfo` as the memory source.
//!
//! # Controls
//!
//! - Right/Down: next page
//! - Left/Up: previous page
//! - Return/Space: refresh
//! - Escape/Backspace/Q or closing the window: exit
//!
//! Set `RUST_LOG` (e.g. `RUST_LOG=debug`) to change log verbosity.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]

mod config;
mod host_device;
mod keys;
mod screen;
mod timing;

use std::process::ExitCode;
use std::rc::Rc;

use log::{error, info};
use statusview_common::input::PolledButtons;
use statusview_common::{Layout, Viewer, run};

use crate::host_device::HostDevice;
use crate::keys::{KeyLevels, SharedKeys};
use crate::screen::HostScreen;
use crate::timing::ThreadScheduler;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let keys = SharedKeys::default();
    let mut screen = HostScreen::new(Rc::clone(&keys));
    let mut input = PolledButtons::new(KeyLevels::new(keys));
    let device = HostDevice::new();
    let mut scheduler = ThreadScheduler;

    let layout = Layout::for_display(&screen);
    info!(
        "display {}x{}, font scale {}",
        layout.width(),
        layout.height(),
        layout.font_scale()
    );

    let mut viewer = match Viewer::with_default_pages(layout) {
        Ok(viewer) => viewer,
        Err(e) => {
            error!("invalid page configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    run(&mut viewer, &mut screen, &mut input, &device, &mut scheduler);

    info!("bye");
    ExitCode::SUCCESS
}
