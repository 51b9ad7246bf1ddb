//! Desktop host configuration.
//!
//! The default panel is 320x240 (large font scale). Build with the
//! `small-display` feature to simulate a 240x135 panel (small font scale).

// =============================================================================
// Display Configuration
// =============================================================================

/// Simulated panel width in pixels.
#[cfg(not(feature = "small-display"))]
pub const SCREEN_WIDTH: u32 = 320;

/// Simulated panel height in pixels.
#[cfg(not(feature = "small-display"))]
pub const SCREEN_HEIGHT: u32 = 240;

/// Simulated panel width in pixels (M5StickC-class panel).
#[cfg(feature = "small-display")]
pub const SCREEN_WIDTH: u32 = 240;

/// Simulated panel height in pixels.
#[cfg(feature = "small-display")]
pub const SCREEN_HEIGHT: u32 = 135;

/// Window pixels per panel pixel.
pub const PIXEL_SCALE: u32 = 2;

pub const WINDOW_TITLE: &str = "statusview";

// =============================================================================
// Host Device
// =============================================================================

/// Source of host memory statistics.
pub const MEMINFO_PATH: &str = "/proc/meminfo";

/// Model string reported by the host device.
pub const HOST_MODEL: &str = "Simulator";

/// Fallback device name when the host name cannot be read.
pub const DEFAULT_NAME: &str = "statusview";

/// Simulated battery loses one percent every this many seconds.
pub const BATTERY_SECS_PER_PERCENT: u64 = 36;
