//! Test doubles for the capability traits.

use std::cell::Cell;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::text::{Alignment, Baseline};

use crate::device::{Device, DeviceError, DeviceString, MemoryStats, device_string};
use crate::display::Display;
use crate::input::{Button, Input};
use crate::scheduler::Scheduler;

/// A `draw_text` call with the text state it was drawn with.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawnText {
    pub text: String,
    pub x: i32,
    pub y: i32,
    pub size: u8,
    pub color: Rgb565,
    pub align: Alignment,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Fill(Rgb565),
    Text(DrawnText),
    Present,
}

/// Display that records every call instead of drawing.
pub struct RecordingDisplay {
    width: u32,
    height: u32,
    size: u8,
    color: Rgb565,
    align: Alignment,
    pub ops: Vec<Op>,
}

impl RecordingDisplay {
    pub fn new(
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            width,
            height,
            size: 1,
            color: Rgb565::new(0, 0, 0),
            align: Alignment::Left,
            ops: Vec::new(),
        }
    }

    pub fn texts(&self) -> impl Iterator<Item = &DrawnText> {
        self.ops.iter().filter_map(|op| match op {
            Op::Text(t) => Some(t),
            _ => None,
        })
    }

    pub fn find(
        &self,
        text: &str,
    ) -> Option<&DrawnText> {
        self.texts().find(|t| t.text == text)
    }

    /// Number of full-screen fills, i.e. page renders.
    pub fn fills(&self) -> usize { self.ops.iter().filter(|op| matches!(op, Op::Fill(_))).count() }

    /// Title of the most recently rendered page (first text after the last fill).
    pub fn last_title(&self) -> Option<&str> {
        let start = self.ops.iter().rposition(|op| matches!(op, Op::Fill(_)))?;
        self.ops[start..].iter().find_map(|op| match op {
            Op::Text(t) => Some(t.text.as_str()),
            _ => None,
        })
    }
}

impl Display for RecordingDisplay {
    fn fill(
        &mut self,
        color: Rgb565,
    ) {
        self.ops.push(Op::Fill(color));
    }

    fn set_text_align(
        &mut self,
        horizontal: Alignment,
        _vertical: Baseline,
    ) {
        self.align = horizontal;
    }

    fn set_text_size(
        &mut self,
        size: u8,
    ) {
        self.size = size;
    }

    fn set_text_color(
        &mut self,
        color: Rgb565,
    ) {
        self.color = color;
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
    ) {
        self.ops.push(Op::Text(DrawnText {
            text: text.to_string(),
            x,
            y,
            size: self.size,
            color: self.color,
            align: self.align,
        }));
    }

    fn width(&self) -> u32 { self.width }

    fn height(&self) -> u32 { self.height }

    fn present(&mut self) { self.ops.push(Op::Present); }
}

/// Device with fixed readings; counts memory reads.
pub struct FakeDevice {
    pub name: Result<&'static str, DeviceError>,
    pub board: Result<&'static str, DeviceError>,
    pub model: Result<&'static str, DeviceError>,
    pub battery: Result<u8, DeviceError>,
    pub memory: Result<MemoryStats, DeviceError>,
    pub memory_reads: Cell<u32>,
}

impl Default for FakeDevice {
    fn default() -> Self {
        Self {
            name: Ok("Bruce"),
            board: Ok("m5stack-cplus2"),
            model: Ok("M5StickC Plus2"),
            battery: Ok(87),
            memory: Ok(MemoryStats {
                ram_free: 150 * 1024,
                ram_size: 320 * 1024,
                ram_min_free: 96 * 1024,
                psram_free: 1536 * 1024,
                psram_size: 2 * 1024 * 1024,
            }),
            memory_reads: Cell::new(0),
        }
    }
}

impl Device for FakeDevice {
    fn name(&self) -> Result<DeviceString, DeviceError> { self.name.map(device_string) }

    fn board(&self) -> Result<DeviceString, DeviceError> { self.board.map(device_string) }

    fn model(&self) -> Result<DeviceString, DeviceError> { self.model.map(device_string) }

    fn battery_charge(&self) -> Result<u8, DeviceError> { self.battery }

    fn memory_stats(&self) -> Result<MemoryStats, DeviceError> {
        self.memory_reads.set(self.memory_reads.get() + 1);
        self.memory
    }
}

/// Input whose pending presses are set by the test; records every query.
#[derive(Default)]
pub struct ScriptedInput {
    pending: [bool; 4],
    pub polled: Vec<Button>,
}

impl ScriptedInput {
    pub fn press(
        &mut self,
        button: Button,
    ) {
        self.pending[button as usize] = true;
    }

    fn take(
        &mut self,
        button: Button,
    ) -> bool {
        self.polled.push(button);
        core::mem::take(&mut self.pending[button as usize])
    }
}

impl Input for ScriptedInput {
    fn exit_pressed(&mut self) -> bool { self.take(Button::Exit) }

    fn next_pressed(&mut self) -> bool { self.take(Button::Next) }

    fn previous_pressed(&mut self) -> bool { self.take(Button::Previous) }

    fn select_pressed(&mut self) -> bool { self.take(Button::Select) }
}

/// Scheduler that records requested sleeps instead of sleeping.
#[derive(Default)]
pub struct RecordingScheduler {
    pub sleeps: Vec<u32>,
}

impl Scheduler for RecordingScheduler {
    fn sleep_ms(
        &mut self,
        ms: u32,
    ) {
        self.sleeps.push(ms);
    }
}
