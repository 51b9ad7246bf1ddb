//! Device readings for the desktop host.
//!
//! - Name: `HOSTNAME`, then `/etc/hostname`, then a fixed fallback
//! - Board: `<os>-<arch>` of the host
//! - Battery: simulated, discharging slowly from 100% since start
//! - Memory: `/proc/meminfo`; `MemAvailable`/`MemTotal` stand in for RAM and
//!   `SwapFree`/`SwapTotal` for PSRAM. The minimum free RAM is tracked across
//!   reads, like a heap low-water mark.
//!
//! On hosts without `/proc/meminfo` the memory read fails and the Memory Info
//! page shows placeholders.

use std::cell::Cell;
use std::fmt::Write as _;
use std::time::Instant;
use std::{env, fs};

use log::warn;
use statusview_common::device::{Device, DeviceError, DeviceString, MemoryStats, device_string};

use crate::config::{BATTERY_SECS_PER_PERCENT, DEFAULT_NAME, HOST_MODEL, MEMINFO_PATH};

/// Raw `/proc/meminfo` values in bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemInfo {
    pub mem_total: u64,
    pub mem_available: u64,
    pub swap_total: u64,
    pub swap_free: u64,
}

/// Parse the fields the viewer needs out of `/proc/meminfo` text.
///
/// Values are reported in `kB` (KiB); a missing or unparsable field makes the
/// whole read malformed.
pub fn parse_meminfo(text: &str) -> Result<MemInfo, DeviceError> {
    let mut mem_total = None;
    let mut mem_available = None;
    let mut swap_total = None;
    let mut swap_free = None;

    for line in text.lines() {
        let Some((key, rest)) = line.split_once(':') else {
            continue;
        };
        let slot = match key.trim() {
            "MemTotal" => &mut mem_total,
            "MemAvailable" => &mut mem_available,
            "SwapTotal" => &mut swap_total,
            "SwapFree" => &mut swap_free,
            _ => continue,
        };
        *slot = Some(parse_kib(rest)?);
    }

    match (mem_total, mem_available, swap_total, swap_free) {
        (Some(mem_total), Some(mem_available), Some(swap_total), Some(swap_free)) => Ok(MemInfo {
            mem_total,
            mem_available,
            swap_total,
            swap_free,
        }),
        _ => Err(DeviceError::Malformed),
    }
}

/// `"   16318412 kB"` → bytes.
fn parse_kib(value: &str) -> Result<u64, DeviceError> {
    let mut parts = value.split_whitespace();
    let number = parts.next().ok_or(DeviceError::Malformed)?;
    let kib: u64 = number.parse().map_err(|_| DeviceError::Malformed)?;
    match parts.next() {
        Some("kB") | None => kib.checked_mul(1024).ok_or(DeviceError::Malformed),
        Some(_) => Err(DeviceError::Malformed),
    }
}

pub struct HostDevice {
    name: DeviceString,
    board: DeviceString,
    started: Instant,
    ram_min_free: Cell<Option<u64>>,
}

impl HostDevice {
    pub fn new() -> Self {
        let name = env::var("HOSTNAME")
            .ok()
            .or_else(|| fs::read_to_string("/etc/hostname").ok())
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_NAME.to_owned());

        let mut board = DeviceString::new();
        let _ = write!(board, "{}-{}", env::consts::OS, env::consts::ARCH);

        Self {
            name: device_string(&name),
            board,
            started: Instant::now(),
            ram_min_free: Cell::new(None),
        }
    }

    /// Combine a meminfo reading with the tracked RAM low-water mark.
    fn stats_from(
        &self,
        info: MemInfo,
    ) -> MemoryStats {
        let min_free = self
            .ram_min_free
            .get()
            .map_or(info.mem_available, |min| min.min(info.mem_available));
        self.ram_min_free.set(Some(min_free));

        MemoryStats {
            ram_free: info.mem_available,
            ram_size: info.mem_total,
            ram_min_free: min_free,
            psram_free: info.swap_free,
            psram_size: info.swap_total,
        }
    }
}

impl Default for HostDevice {
    fn default() -> Self { Self::new() }
}

impl Device for HostDevice {
    fn name(&self) -> Result<DeviceString, DeviceError> { Ok(self.name.clone()) }

    fn board(&self) -> Result<DeviceString, DeviceError> { Ok(self.board.clone()) }

    fn model(&self) -> Result<DeviceString, DeviceError> { Ok(device_string(HOST_MODEL)) }

    fn battery_charge(&self) -> Result<u8, DeviceError> {
        let drained = self.started.elapsed().as_secs() / BATTERY_SECS_PER_PERCENT;
        Ok(100u64.saturating_sub(drained) as u8)
    }

    fn memory_stats(&self) -> Result<MemoryStats, DeviceError> {
        let text = fs::read_to_string(MEMINFO_PATH).map_err(|e| {
            warn!("cannot read {MEMINFO_PATH}: {e}");
            DeviceError::Unavailable
        })?;
        let info = parse_meminfo(&text)?;
        Ok(self.stats_from(info))
    }
}

// =============================================================================
// Tests
// =============================================================================
