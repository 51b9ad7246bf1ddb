//! Compile-time configuration of the viewer.
//!
//! The only runtime-relevant knob is the page count; everything else is fixed
//! here so it can be tuned in one place.

// =============================================================================
// Loop Timing
// =============================================================================

/// Duration of one polling tick in milliseconds.
pub const TICK_MS: u32 = 50;

/// Idle ticks after which the current page is repainted (100 * 50ms = 5s).
pub const REFRESH_THRESHOLD: u16 = 100;

/// Minimum time between two accepted level changes of a button.
///
/// Kept below `TICK_MS` so a press released on the next tick is still seen.
pub const DEBOUNCE_MS: u64 = 20;

const _: () = assert!(REFRESH_THRESHOLD > 0);
const _: () = assert!(DEBOUNCE_MS < TICK_MS as u64);

// =============================================================================
// Pages
// =============================================================================

/// Number of pages the viewer cycles through (Device Info, Memory Info).
pub const PAGE_COUNT: usize = 2;

/// Capacity of the page controller's renderer table.
pub const MAX_PAGES: usize = 8;

const _: () = assert!(PAGE_COUNT >= 1);
const _: () = assert!(PAGE_COUNT <= MAX_PAGES);

// =============================================================================
// Text
// =============================================================================

/// Displays wider than this many pixels use the larger font scale.
pub const FONT_SCALE_MIN_WIDTH: u32 = 300;

/// Drawn in place of a field whose value could not be read.
pub const PLACEHOLDER: &str = "N/A";

/// Footer credit drawn at the bottom of every page.
pub const CREDIT_LINE: &str = "By github.com/emericklaw";

/// Maximum length of a device string (name, board, model).
pub const DEVICE_STRING_LEN: usize = 32;
