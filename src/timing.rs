//! Tick pacing for the desktop host.

use std::thread;
use std::time::Duration;

use statusview_common::scheduler::Scheduler;

/// [`Scheduler`] backed by `std::thread::sleep`.
#[derive(Default)]
pub struct ThreadScheduler;

impl Scheduler for ThreadScheduler {
    fn sleep_ms(
        &mut self,
        ms: u32,
    ) {
        thread::sleep(Duration::from_millis(u64::from(ms)));
    }
}
