//! Tick pacing capability.

/// Blocking sleep between loop ticks.
pub trait Scheduler {
    fn sleep_ms(
        &mut self,
        ms: u32,
    );
}
