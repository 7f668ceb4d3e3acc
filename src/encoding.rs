// CLASSIFICATION: COMMUNITY
// Filename: encoding.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-18

//! Narrow and wide text encodings.
//!
//! The whole pipeline is written once against [`Encoding`]; [`Narrow`] and
//! [`Wide`] supply the unit type, the level-name tables, the conversion from
//! Rust text and the transport entry point. The trait is sealed because the
//! transport only has two entry points.

use alloc::collections::TryReserveError;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Write};

use crate::sink::DebugTransport;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Narrow {}
    impl Sealed for super::Wide {}
}

/// Display names of the four severities plus the fallback, in one encoding.
#[derive(Debug, Clone, Copy)]
pub struct LevelNames<U: 'static> {
    /// `DEBUG`
    pub debug: &'static [U],
    /// `INFO`
    pub info: &'static [U],
    /// `WARNING`
    pub warning: &'static [U],
    /// `ERROR`
    pub error: &'static [U],
    /// `UNKNOWN`, used for out-of-range raw severities.
    pub unknown: &'static [U],
}

/// Capabilities a text representation must provide to the log pipeline.
pub trait Encoding: sealed::Sealed + Send + Sync + 'static {
    /// Code unit stored in a [`LogBuffer`](crate::buffer::LogBuffer).
    type Unit: Copy + Eq + fmt::Debug + Send + Sync + 'static;

    /// `'\n'` in this encoding.
    const NEWLINE: Self::Unit;

    /// Level names rendered in this encoding.
    const LEVEL_NAMES: LevelNames<Self::Unit>;

    /// Append `text` to `out`, growing it fallibly.
    fn encode(text: &str, out: &mut Vec<Self::Unit>) -> Result<(), TryReserveError>;

    /// Hand a finished line to the matching transport entry point.
    fn transmit<T: DebugTransport + ?Sized>(transport: &T, line: &[Self::Unit]);

    /// Lossy conversion back to Rust text, for host sinks and inspection.
    fn decode_lossy(units: &[Self::Unit]) -> String;
}

/// Single-byte text. Rust text is passed through as its UTF-8 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Narrow {}

/// Double-byte text (UTF-16), the kernel's `UNICODE_STRING` representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wide {}

const fn widen<const N: usize>(ascii: &[u8; N]) -> [u16; N] {
    let mut out = [0u16; N];
    let mut i = 0;
    while i < N {
        out[i] = ascii[i] as u16;
        i += 1;
    }
    out
}

const WIDE_DEBUG: [u16; 5] = widen(b"DEBUG");
const WIDE_INFO: [u16; 4] = widen(b"INFO");
const WIDE_WARNING: [u16; 7] = widen(b"WARNING");
const WIDE_ERROR: [u16; 5] = widen(b"ERROR");
const WIDE_UNKNOWN: [u16; 7] = widen(b"UNKNOWN");

impl Encoding for Narrow {
    type Unit = u8;

    const NEWLINE: u8 = b'\n';

    const LEVEL_NAMES: LevelNames<u8> = LevelNames {
        debug: b"DEBUG",
        info: b"INFO",
        warning: b"WARNING",
        error: b"ERROR",
        unknown: b"UNKNOWN",
    };

    fn encode(text: &str, out: &mut Vec<u8>) -> Result<(), TryReserveError> {
        out.try_reserve(text.len())?;
        out.extend_from_slice(text.as_bytes());
        Ok(())
    }

    fn transmit<T: DebugTransport + ?Sized>(transport: &T, line: &[u8]) {
        transport.write_narrow(line);
    }

    fn decode_lossy(units: &[u8]) -> String {
        String::from_utf8_lossy(units).into_owned()
    }
}

impl Encoding for Wide {
    type Unit = u16;

    const NEWLINE: u16 = b'\n' as u16;

    const LEVEL_NAMES: LevelNames<u16> = LevelNames {
        debug: &WIDE_DEBUG,
        info: &WIDE_INFO,
        warning: &WIDE_WARNING,
        error: &WIDE_ERROR,
        unknown: &WIDE_UNKNOWN,
    };

    fn encode(text: &str, out: &mut Vec<u16>) -> Result<(), TryReserveError> {
        // UTF-16 never needs more units than UTF-8 needs bytes.
        out.try_reserve(text.len())?;
        out.extend(text.encode_utf16());
        Ok(())
    }

    fn transmit<T: DebugTransport + ?Sized>(transport: &T, line: &[u16]) {
        transport.write_wide(line);
    }

    fn decode_lossy(units: &[u16]) -> String {
        String::from_utf16_lossy(units)
    }
}

/// Formats borrowed UTF-16 text, such as a registry path, as a log argument.
///
/// Usable from either encoding; unpaired surrogates print as U+FFFD.
///
/// ```
/// use kmlog::WideStr;
/// let path: Vec<u16> = "\\Registry\\Machine".encode_utf16().collect();
/// assert_eq!(format!("{}", WideStr(&path)), "\\Registry\\Machine");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WideStr<'a>(pub &'a [u16]);

impl<'a> WideStr<'a> {
    /// View of `units` up to, not including, the first NUL.
    pub fn until_nul(units: &'a [u16]) -> Self {
        let end = units.iter().position(|&u| u == 0).unwrap_or(units.len());
        Self(&units[..end])
    }
}

impl fmt::Display for WideStr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in char::decode_utf16(self.0.iter().copied()) {
            f.write_char(c.unwrap_or(char::REPLACEMENT_CHARACTER))?;
        }
        Ok(())
    }
}
