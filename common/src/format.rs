//! Human-readable byte counts.
//!
//! Values are scaled by powers of 1024 and printed with exactly one decimal
//! digit, e.g. `1536` → `"1.5 KB"`.
//!
//! # Integer Arithmetic
//!
//! Neither the magnitude nor the rounding goes through floating point: the
//! magnitude is found by repeated division and the one-decimal value is
//! rounded in `u128`, so boundaries like `1024` land exactly on `"1.0 KB"`.
//!
//! # Rounding
//!
//! The tenths digit is rounded half-up on the exact value, which for
//! non-negative inputs is the same as round-half-away-from-zero.
//!
//! # Large Values
//!
//! The unit table stops at `GB`. Inputs of `1024^4` and above stay in `GB`
//! with a correspondingly large integer part (`1024^4` → `"1024.0 GB"`).

use core::fmt::Write;

use heapless::String;

/// Unit suffixes, indexed by magnitude.
pub const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Capacity of a formatted byte count. `u64::MAX` needs 16 characters.
pub const BYTE_STRING_LEN: usize = 24;

/// Formatted byte count.
pub type ByteString = String<BYTE_STRING_LEN>;

const KIB: u64 = 1024;

/// Index into [`UNITS`] for `bytes`: `floor(log1024(bytes))`, clamped to `GB`.
///
/// `0` maps to `B`.
pub const fn magnitude(bytes: u64) -> usize {
    let mut index = 0;
    let mut scaled = bytes;
    while scaled >= KIB && index < UNITS.len() - 1 {
        scaled /= KIB;
        index += 1;
    }
    index
}

/// Format a byte count as `"<value>.<tenth> <unit>"`.
pub fn format_bytes(bytes: u64) -> ByteString {
    let mut out = ByteString::new();
    if bytes == 0 {
        out.push_str("0.0 B").ok();
        return out;
    }

    let index = magnitude(bytes);
    let divisor = u128::from(KIB).pow(index as u32);
    // floor(10 * bytes / divisor + 1/2)
    let tenths = (u128::from(bytes) * 20 + divisor) / (divisor * 2);

    // Cannot overflow: the longest output is 16 characters
    let _ = write!(out, "{}.{} {}", tenths / 10, tenths % 10, UNITS[index]);
    out
}

// =============================================================================
// Tests
// =============================================================================
