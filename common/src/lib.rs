//! Core of the statusview device viewer.
//!
//! This crate contains everything that decides *what* is on screen and *when*,
//! independent of the panel, buttons and device it runs against:
//!
//! - [`format`]: Byte-count formatting (`B`/`KB`/`MB`/`GB`)
//! - [`layout`]: Display layout context derived once from the panel size
//! - [`pages`]: The Device Info and Memory Info page renderers
//! - [`controller`]: Current page index and renderer table
//! - [`viewer`]: Input/refresh loop state machine and the `run` driver
//!
//! The collaborators the core consumes are expressed as traits:
//!
//! - [`display::Display`] (with [`display::Canvas`] for any embedded-graphics target)
//! - [`input::Input`] (with [`input::PolledButtons`] for level-sampled buttons)
//! - [`device::Device`]
//! - [`scheduler::Scheduler`]
//!
//! # no_std Compatibility
//!
//! The crate is `no_std` and allocation-free; tests run with `std` enabled
//! (via `cfg_attr`) so they can use the standard test harness.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod colors;
pub mod config;
pub mod controller;
pub mod device;
pub mod display;
pub mod error;
pub mod format;
pub mod input;
pub mod layout;
pub mod pages;
pub mod scheduler;
pub mod viewer;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used items
pub use controller::PageController;
pub use error::Error;
pub use format::format_bytes;
pub use layout::Layout;
pub use viewer::{LoopState, TickOutcome, Viewer, run};
