//! Display layout context.
//!
//! Every position on the status pages is derived from the panel size and a
//! single discrete font scale, computed once at startup:
//!
//! - `font_scale = 1` when the panel is wider than [`FONT_SCALE_MIN_WIDTH`]
//!   (e.g. 320x240), `0` otherwise (e.g. 240x135)
//! - text sizes and row spacing grow with the scale
//!
//! Renderers read these values; they never recompute the scale per field.

use crate::config::FONT_SCALE_MIN_WIDTH;
use crate::display::Display;

/// Left margin of titles, labels and navigation hints.
pub const MARGIN_X: i32 = 10;

/// Vertical center of the page title.
pub const TITLE_Y: i32 = 12;

/// Pre-computed layout for one panel size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    width: u32,
    height: u32,
    font_scale: u8,
}

impl Layout {
    /// Layout for a `width` x `height` panel.
    pub const fn new(
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            width,
            height,
            font_scale: if width > FONT_SCALE_MIN_WIDTH { 1 } else { 0 },
        }
    }

    /// Layout for the panel behind `display`.
    pub fn for_display<D: Display + ?Sized>(display: &D) -> Self { Self::new(display.width(), display.height()) }

    #[inline]
    pub const fn width(&self) -> u32 { self.width }

    #[inline]
    pub const fn height(&self) -> u32 { self.height }

    /// Discrete font scale, `0` or `1`.
    #[inline]
    pub const fn font_scale(&self) -> u8 { self.font_scale }

    /// Text size of page titles.
    #[inline]
    pub const fn title_size(&self) -> u8 { 2 + self.font_scale }

    /// Text size of labels, values, hints and the footer.
    #[inline]
    pub const fn body_size(&self) -> u8 { 1 + self.font_scale }

    /// Vertical center of field row `row` (0-based).
    pub const fn row_y(
        &self,
        row: usize,
    ) -> i32 {
        let scale = self.font_scale as i32;
        let first = 25 + scale * 10;
        let step = 12 + scale * 5;
        first + step * row as i32
    }

    /// Left edge of left-aligned values (label column takes the left third).
    pub const fn value_x(&self) -> i32 { (self.width / 3) as i32 + MARGIN_X }

    /// Right edge of right-aligned values (7/8 of the width).
    pub const fn value_right_x(&self) -> i32 { (self.width / 8 * 7) as i32 }

    /// Vertical center of the "Next: ..." hint.
    pub const fn next_hint_y(&self) -> i32 { self.bottom_offset(42) }

    /// Vertical center of the "Exit: ..." hint.
    pub const fn exit_hint_y(&self) -> i32 { self.bottom_offset(25) }

    /// Vertical center of the footer credit.
    pub const fn footer_y(&self) -> i32 { self.bottom_offset(5) }

    /// Horizontal center of the panel.
    pub const fn center_x(&self) -> i32 { (self.width / 2) as i32 }

    const fn bottom_offset(
        &self,
        base: i32,
    ) -> i32 {
        self.height as i32 - base - self.font_scale as i32 * 5
    }
}

// =============================================================================
// Tests
// =============================================================================
