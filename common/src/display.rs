//! Display capability and its embedded-graphics implementation.
//!
//! The page renderers only talk to the [`Display`] trait: a small, stateful
//! text-drawing surface (current size, color and alignment apply to every
//! following `draw_text`). [`Canvas`] implements it for any
//! `DrawTarget<Color = Rgb565>`, so the same renderers drive a hardware
//! framebuffer, the desktop simulator, or a test double.
//!
//! # Text Sizes
//!
//! Sizes are small integers, mapped onto `ProFont` point sizes:
//!
//! | size | font            |
//! |------|-----------------|
//! | 1    | `PROFONT_9_POINT`  |
//! | 2    | `PROFONT_12_POINT` |
//! | 3    | `PROFONT_14_POINT` |
//! | 4+   | `PROFONT_18_POINT` |
//!
//! # Draw Errors
//!
//! Errors from the draw target are dropped per call (`.ok()`): a failed
//! frame must never stop the polling loop, and the next repaint redraws
//! everything anyway.

use embedded_graphics::{
    mono_font::{MonoFont, MonoTextStyle},
    pixelcolor::Rgb565,
    prelude::*,
    text::{Alignment, Baseline, Text, TextStyle, TextStyleBuilder},
};
use profont::{PROFONT_9_POINT, PROFONT_12_POINT, PROFONT_14_POINT, PROFONT_18_POINT};

use crate::colors::WHITE;

/// Stateful text-drawing surface consumed by the page renderers.
pub trait Display {
    /// Fill the whole screen with `color`.
    fn fill(
        &mut self,
        color: Rgb565,
    );

    /// Set horizontal and vertical anchoring for subsequent text.
    fn set_text_align(
        &mut self,
        horizontal: Alignment,
        vertical: Baseline,
    );

    /// Set the text size for subsequent text.
    fn set_text_size(
        &mut self,
        size: u8,
    );

    /// Set the text color for subsequent text.
    fn set_text_color(
        &mut self,
        color: Rgb565,
    );

    /// Draw `text` anchored at `(x, y)` using the current text state.
    fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
    );

    /// Display width in pixels.
    fn width(&self) -> u32;

    /// Display height in pixels.
    fn height(&self) -> u32;

    /// Push the finished frame to the panel. No-op for direct-drawing targets.
    fn present(&mut self) {}
}

/// `ProFont` used for a given text size.
pub const fn font_for_size(size: u8) -> &'static MonoFont<'static> {
    match size {
        0 | 1 => &PROFONT_9_POINT,
        2 => &PROFONT_12_POINT,
        3 => &PROFONT_14_POINT,
        _ => &PROFONT_18_POINT,
    }
}

/// Left-aligned, vertically centered text. The state every page starts from.
pub const LEFT_MIDDLE: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Middle)
    .build();

/// [`Display`] over an embedded-graphics draw target.
pub struct Canvas<D> {
    target: D,
    text_size: u8,
    text_color: Rgb565,
    text_style: TextStyle,
}

impl<D> Canvas<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    /// Wrap a draw target. Text state starts as size 1, white, left/middle.
    pub const fn new(target: D) -> Self {
        Self {
            target,
            text_size: 1,
            text_color: WHITE,
            text_style: LEFT_MIDDLE,
        }
    }

    /// Borrow the underlying draw target.
    pub const fn target(&self) -> &D { &self.target }

    /// Mutably borrow the underlying draw target.
    pub fn target_mut(&mut self) -> &mut D { &mut self.target }

    /// Unwrap the underlying draw target.
    pub fn into_inner(self) -> D { self.target }

    fn character_style(&self) -> MonoTextStyle<'static, Rgb565> {
        MonoTextStyle::new(font_for_size(self.text_size), self.text_color)
    }
}

impl<D> Display for Canvas<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    fn fill(
        &mut self,
        color: Rgb565,
    ) {
        self.target.clear(color).ok();
    }

    fn set_text_align(
        &mut self,
        horizontal: Alignment,
        vertical: Baseline,
    ) {
        self.text_style = TextStyleBuilder::new()
            .alignment(horizontal)
            .baseline(vertical)
            .build();
    }

    fn set_text_size(
        &mut self,
        size: u8,
    ) {
        self.text_size = size;
    }

    fn set_text_color(
        &mut self,
        color: Rgb565,
    ) {
        self.text_color = color;
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
    ) {
        Text::with_text_style(text, Point::new(x, y), self.character_style(), self.text_style)
            .draw(&mut self.target)
            .ok();
    }

    fn width(&self) -> u32 { self.target.bounding_box().size.width }

    fn height(&self) -> u32 { self.target.bounding_box().size.height }
}

// =============================================================================
// Tests
// =============================================================================
