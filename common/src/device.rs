//! Device identity and memory statistics capability.
//!
//! Every accessor is fallible: a read that fails or returns something out of
//! range is reported as a [`DeviceError`] and the page renderers draw a
//! placeholder for that one field instead of giving up on the page.

use core::fmt;

use heapless::String;

use crate::config::DEVICE_STRING_LEN;

/// Fixed-capacity string returned by the identity accessors.
pub type DeviceString = String<DEVICE_STRING_LEN>;

/// Why a device field could not be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceError {
    /// The value could not be read at all.
    Unavailable,
    /// The value was read but is outside its valid range.
    Malformed,
}

impl fmt::Display for DeviceError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Unavailable => f.write_str("unavailable"),
            Self::Malformed => f.write_str("malformed"),
        }
    }
}

impl core::error::Error for DeviceError {}

/// Memory statistics snapshot, all values in bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoryStats {
    /// Internal RAM currently free.
    pub ram_free: u64,
    /// Total internal RAM.
    pub ram_size: u64,
    /// Lowest free internal RAM observed since boot.
    pub ram_min_free: u64,
    /// External PSRAM currently free.
    pub psram_free: u64,
    /// Total external PSRAM.
    pub psram_size: u64,
}

impl MemoryStats {
    /// Value of a single field.
    pub const fn get(
        &self,
        field: MemoryField,
    ) -> u64 {
        match field {
            MemoryField::RamFree => self.ram_free,
            MemoryField::RamSize => self.ram_size,
            MemoryField::RamMinFree => self.ram_min_free,
            MemoryField::PsramFree => self.psram_free,
            MemoryField::PsramSize => self.psram_size,
        }
    }
}

/// Fields of [`MemoryStats`], in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryField {
    RamFree,
    RamSize,
    RamMinFree,
    PsramFree,
    PsramSize,
}

impl MemoryField {
    /// All fields, in the order the Memory Info page lists them.
    pub const ALL: [Self; 5] = [
        Self::RamFree,
        Self::RamSize,
        Self::RamMinFree,
        Self::PsramFree,
        Self::PsramSize,
    ];

    /// Row label drawn in the left column.
    pub const fn label(self) -> &'static str {
        match self {
            Self::RamFree => "RAM Free:",
            Self::RamSize => "RAM Size:",
            Self::RamMinFree => "RAM Min Free:",
            Self::PsramFree => "PSRAM Free:",
            Self::PsramSize => "PSRAM Size:",
        }
    }
}

/// Live device readings. Values are read fresh on every render, never cached.
pub trait Device {
    /// Human-readable device name.
    fn name(&self) -> Result<DeviceString, DeviceError>;

    /// Board identifier.
    fn board(&self) -> Result<DeviceString, DeviceError>;

    /// Model identifier.
    fn model(&self) -> Result<DeviceString, DeviceError>;

    /// Battery charge in percent. Values above 100 are treated as malformed.
    fn battery_charge(&self) -> Result<u8, DeviceError>;

    /// Current memory statistics.
    fn memory_stats(&self) -> Result<MemoryStats, DeviceError>;
}

/// Copy `s` into a [`DeviceString`], truncating on a character boundary if it
/// is too long.
pub fn device_string(s: &str) -> DeviceString {
    let mut out = DeviceString::new();
    for c in s.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

/// Validate a raw battery reading.
pub const fn checked_charge(percent: u8) -> Result<u8, DeviceError> {
    if percent <= 100 { Ok(percent) } else { Err(DeviceError::Malformed) }
}
