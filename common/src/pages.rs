//! Status page renderers.
//!
//! Each page is a plain function that repaints the whole screen from live
//! device readings:
//!
//! 1. clear to [`BACKGROUND`]
//! 2. title
//! 3. one row per field, label on the left, value on the right
//! 4. navigation hints
//! 5. footer credit
//!
//! # Pages
//!
//! - [`render_device_info`]: name, board, model and battery charge
//! - [`render_memory_info`]: RAM and PSRAM statistics as byte counts
//!
//! # Unavailable Fields
//!
//! A field whose read fails is drawn as [`PLACEHOLDER`] in the error color
//! and logged; the rest of the page renders normally.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::text::{Alignment, Baseline};
use heapless::String;
use log::warn;

use crate::colors::{BACKGROUND, ERROR, LABEL, PRIMARY, VALUE, WHITE, YELLOW};
use crate::config::{CREDIT_LINE, PAGE_COUNT, PLACEHOLDER};
use crate::device::{Device, DeviceError, MemoryField, checked_charge};
use crate::display::Display;
use crate::format::format_bytes;
use crate::layout::{Layout, MARGIN_X, TITLE_Y};

/// Renders one page onto a display from live device readings.
pub type PageRenderer<Dsp, Dev> = fn(&mut Dsp, &Layout, &Dev);

/// A page: its title and the function that paints it.
pub struct Page<Dsp, Dev> {
    pub title: &'static str,
    pub render: PageRenderer<Dsp, Dev>,
}

// Manual impls: a fn pointer is always Copy, whatever `Dsp`/`Dev` are
impl<Dsp, Dev> Clone for Page<Dsp, Dev> {
    fn clone(&self) -> Self { *self }
}

impl<Dsp, Dev> Copy for Page<Dsp, Dev> {}

pub const DEVICE_INFO_TITLE: &str = "Device Info";
pub const MEMORY_INFO_TITLE: &str = "Memory Info";

/// The viewer's pages in navigation order.
pub fn default_pages<Dsp: Display, Dev: Device>() -> [Page<Dsp, Dev>; PAGE_COUNT] {
    [
        Page {
            title: DEVICE_INFO_TITLE,
            render: render_device_info::<Dsp, Dev>,
        },
        Page {
            title: MEMORY_INFO_TITLE,
            render: render_memory_info::<Dsp, Dev>,
        },
    ]
}

// =============================================================================
// Device Info (page 0)
// =============================================================================

/// Device identity and battery charge.
pub fn render_device_info<Dsp: Display, Dev: Device>(
    display: &mut Dsp,
    layout: &Layout,
    device: &Dev,
) {
    begin_page(display, layout, DEVICE_INFO_TITLE);

    let x = layout.value_x();
    draw_label(display, "Name:", layout.row_y(0));
    draw_value(display, "name", device.name(), VALUE, x, layout.row_y(0));

    draw_label(display, "Board:", layout.row_y(1));
    draw_value(display, "board", device.board(), VALUE, x, layout.row_y(1));

    draw_label(display, "Model:", layout.row_y(2));
    draw_value(display, "model", device.model(), VALUE, x, layout.row_y(2));

    let battery = device.battery_charge().and_then(checked_charge).map(|percent| {
        let mut s: String<8> = String::new();
        let _ = write!(s, "{percent}%");
        s
    });
    draw_label(display, "Battery:", layout.row_y(3));
    draw_value(display, "battery", battery, YELLOW, x, layout.row_y(3));

    draw_navigation(display, layout, MEMORY_INFO_TITLE);
}

// =============================================================================
// Memory Info (page 1)
// =============================================================================

/// RAM and PSRAM statistics, right-aligned at 7/8 of the width.
pub fn render_memory_info<Dsp: Display, Dev: Device>(
    display: &mut Dsp,
    layout: &Layout,
    device: &Dev,
) {
    begin_page(display, layout, MEMORY_INFO_TITLE);

    let stats = device.memory_stats();
    if let Err(e) = stats {
        warn!("memory stats {e}, drawing placeholders");
    }

    let x = layout.value_right_x();
    for (row, field) in MemoryField::ALL.into_iter().enumerate() {
        let y = layout.row_y(row);
        draw_label(display, field.label(), y);

        display.set_text_align(Alignment::Right, Baseline::Middle);
        match stats {
            Ok(stats) => {
                display.set_text_color(VALUE);
                display.draw_text(&format_bytes(stats.get(field)), x, y);
            }
            Err(_) => {
                display.set_text_color(ERROR);
                display.draw_text(PLACEHOLDER, x, y);
            }
        }
    }

    draw_navigation(display, layout, DEVICE_INFO_TITLE);
}

// =============================================================================
// Shared Page Parts
// =============================================================================

/// Clear the screen and draw the title; leaves body size, left alignment.
fn begin_page<Dsp: Display>(
    display: &mut Dsp,
    layout: &Layout,
    title: &str,
) {
    display.fill(BACKGROUND);
    display.set_text_align(Alignment::Left, Baseline::Middle);

    display.set_text_size(layout.title_size());
    display.set_text_color(PRIMARY);
    display.draw_text(title, MARGIN_X, TITLE_Y);

    display.set_text_size(layout.body_size());
}

fn draw_label<Dsp: Display>(
    display: &mut Dsp,
    label: &str,
    y: i32,
) {
    display.set_text_align(Alignment::Left, Baseline::Middle);
    display.set_text_color(LABEL);
    display.draw_text(label, MARGIN_X, y);
}

/// Draw a left-aligned value, or the placeholder if it could not be read.
fn draw_value<Dsp: Display, S: AsRef<str>>(
    display: &mut Dsp,
    field: &str,
    value: Result<S, DeviceError>,
    color: Rgb565,
    x: i32,
    y: i32,
) {
    match value {
        Ok(text) => {
            display.set_text_color(color);
            display.draw_text(text.as_ref(), x, y);
        }
        Err(e) => {
            warn!("device {field} {e}, drawing placeholder");
            display.set_text_color(ERROR);
            display.draw_text(PLACEHOLDER, x, y);
        }
    }
}

/// Navigation hints and footer credit.
fn draw_navigation<Dsp: Display>(
    display: &mut Dsp,
    layout: &Layout,
    next_title: &str,
) {
    display.set_text_size(layout.body_size());
    display.set_text_align(Alignment::Left, Baseline::Middle);
    display.set_text_color(LABEL);

    let mut hint: String<32> = String::new();
    let _ = write!(hint, "Next: {next_title}");
    display.draw_text(&hint, MARGIN_X, layout.next_hint_y());
    display.draw_text("Exit: Close", MARGIN_X, layout.exit_hint_y());

    display.set_text_align(Alignment::Center, Baseline::Middle);
    display.set_text_color(WHITE);
    display.draw_text(CREDIT_LINE, layout.center_x(), layout.footer_y());
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::MemoryStats;
    use crate::testing::{FakeDevice, Op, RecordingDisplay};

    fn render_page(
        render: PageRenderer<RecordingDisplay, FakeDevice>,
        device: &FakeDevice,
        width: u32,
        height: u32,
    ) -> RecordingDisplay {
        let mut display = RecordingDisplay::new(width, height);
        let layout = Layout::for_display(&display);
        render(&mut display, &layout, device);
        display
    }

    #[test]
    fn test_default_pages_order() {
        let pages = default_pages::<RecordingDisplay, FakeDevice>();
        assert_eq!(pages.len(), PAGE_COUNT);
        assert_eq!(pages[0].title, DEVICE_INFO_TITLE);
        assert_eq!(pages[1].title, MEMORY_INFO_TITLE);
    }

    #[test]
    fn test_pages_start_with_full_clear() {
        let device = FakeDevice::default();
        for page in default_pages::<RecordingDisplay, FakeDevice>() {
            let display = render_page(page.render, &device, 240, 135);
            assert_eq!(display.ops[0], Op::Fill(BACKGROUND));
            assert_eq!(display.fills(), 1);
            assert_eq!(display.last_title(), Some(page.title));
        }
    }

    #[test]
    fn test_device_info_fields() {
        let display = render_page(render_device_info, &FakeDevice::default(), 240, 135);

        let name = display.find("Bruce").unwrap();
        assert_eq!((name.x, name.y), (90, 25));
        assert_eq!(name.color, VALUE);
        assert_eq!(name.align, Alignment::Left);

        assert_eq!(display.find("m5stack-cplus2").unwrap().y, 37);
        assert_eq!(display.find("M5StickC Plus2").unwrap().y, 49);

        let battery = display.find("87%").unwrap();
        assert_eq!(battery.y, 61);
        assert_eq!(battery.color, YELLOW);

        let label = display.find("Battery:").unwrap();
        assert_eq!((label.x, label.color), (MARGIN_X, LABEL));
    }

    #[test]
    fn test_device_info_navigation_and_footer() {
        let display = render_page(render_device_info, &FakeDevice::default(), 240, 135);

        let next = display.find("Next: Memory Info").unwrap();
        assert_eq!((next.x, next.y), (MARGIN_X, 93));
        assert_eq!(display.find("Exit: Close").unwrap().y, 110);

        let credit = display.find(CREDIT_LINE).unwrap();
        assert_eq!((credit.x, credit.y), (120, 130));
        assert_eq!(credit.align, Alignment::Center);
        assert_eq!(credit.color, WHITE);
    }

    #[test]
    fn test_font_scale_applies_to_sizes_and_rows() {
        let display = render_page(render_device_info, &FakeDevice::default(), 320, 240);

        let title = display.find(DEVICE_INFO_TITLE).unwrap();
        assert_eq!((title.size, title.color), (3, PRIMARY));
        let name = display.find("Bruce").unwrap();
        assert_eq!((name.x, name.y, name.size), (116, 35, 2));
        assert_eq!(display.find("Exit: Close").unwrap().size, 2);
    }

    #[test]
    fn test_device_info_failed_field_is_placeholder() {
        let device = FakeDevice {
            board: Err(DeviceError::Unavailable),
            ..FakeDevice::default()
        };
        let display = render_page(render_device_info, &device, 240, 135);

        let placeholder = display.find(PLACEHOLDER).unwrap();
        assert_eq!(placeholder.y, 37);
        assert_eq!(placeholder.color, ERROR);
        // Other fields still drawn
        assert!(display.find("Bruce").is_some());
        assert!(display.find("87%").is_some());
        assert!(display.find(CREDIT_LINE).is_some());
    }

    #[test]
    fn test_device_info_malformed_battery() {
        let device = FakeDevice {
            battery: Ok(180),
            ..FakeDevice::default()
        };
        let display = render_page(render_device_info, &device, 240, 135);

        assert!(display.find("180%").is_none());
        let placeholder = display.find(PLACEHOLDER).unwrap();
        assert_eq!(placeholder.y, 61);
    }

    #[test]
    fn test_memory_info_rows() {
        let device = FakeDevice::default();
        let display = render_page(render_memory_info, &device, 240, 135);

        let expected = [
            ("RAM Free:", "150.0 KB"),
            ("RAM Size:", "320.0 KB"),
            ("RAM Min Free:", "96.0 KB"),
            ("PSRAM Free:", "1.5 MB"),
            ("PSRAM Size:", "2.0 MB"),
        ];
        for (row, (label, value)) in expected.into_iter().enumerate() {
            let y = 25 + 12 * row as i32;
            let label = display.find(label).unwrap();
            assert_eq!((label.x, label.y, label.align), (MARGIN_X, y, Alignment::Left));
            let value = display.find(value).unwrap();
            assert_eq!((value.x, value.y, value.align), (210, y, Alignment::Right));
        }
        assert!(display.find("Next: Device Info").is_some());
        assert_eq!(device.memory_reads.get(), 1);
    }

    #[test]
    fn test_memory_info_reads_fresh_values() {
        let mut device = FakeDevice::default();
        let first = render_page(render_memory_info, &device, 240, 135);
        assert!(first.find("150.0 KB").is_some());

        device.memory = Ok(MemoryStats {
            ram_free: 100 * 1024,
            ..device.memory.unwrap()
        });
        let second = render_page(render_memory_info, &device, 240, 135);
        assert!(second.find("100.0 KB").is_some());
        assert!(second.find("150.0 KB").is_none());
    }

    #[test]
    fn test_memory_info_unavailable() {
        let device = FakeDevice {
            memory: Err(DeviceError::Unavailable),
            ..FakeDevice::default()
        };
        let display = render_page(render_memory_info, &device, 240, 135);

        let placeholders: Vec<_> = display.texts().filter(|t| t.text == PLACEHOLDER).collect();
        assert_eq!(placeholders.len(), MemoryField::ALL.len());
        assert!(placeholders.iter().all(|t| t.color == ERROR && t.align == Alignment::Right));
        assert!(display.find("RAM Min Free:").is_some());
        assert!(display.find(CREDIT_LINE).is_some());
    }
}
