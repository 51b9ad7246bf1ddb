//! Color palette for the status pages.
//!
//! All colors are `Rgb565`, the native format of the small SPI panels this
//! viewer targets. Standard colors come from the `RgbColor` trait constants.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black. Page background.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. Field values and the footer credit.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure yellow. Highlighted values (battery charge).
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

/// Pure red. Placeholder text for fields that could not be read.
pub const RED: Rgb565 = Rgb565::RED;

// =============================================================================
// Custom Colors (application-specific)
// =============================================================================

/// Mid grey for labels and navigation hints.
/// RGB565: (15, 31, 15) - roughly 50% brightness.
pub const GREY: Rgb565 = Rgb565::new(15, 31, 15);

/// Theme primary color used for page titles.
/// RGB565: (20, 0, 31) - violet.
pub const PRIMARY: Rgb565 = Rgb565::new(20, 0, 31);

// =============================================================================
// Semantic Aliases
// =============================================================================

/// Background every page is cleared to before drawing.
pub const BACKGROUND: Rgb565 = BLACK;

/// Label column color.
pub const LABEL: Rgb565 = GREY;

/// Default value column color.
pub const VALUE: Rgb565 = WHITE;

/// Color of the placeholder drawn for an unavailable field.
pub const ERROR: Rgb565 = RED;
