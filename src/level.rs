// CLASSIFICATION: COMMUNITY
// Filename: level.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-18

//! Severity values and their display names.

use core::fmt;

use crate::encoding::Encoding;

/// Log severity. Used only to pick a display name; there is no filtering.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Verbose implementation detail.
    Debug = 0,
    /// Expected progress.
    Info = 1,
    /// Recoverable problem.
    Warning = 2,
    /// Failure.
    Error = 3,
}

impl Severity {
    /// All severities in declaration order.
    pub const ALL: [Severity; 4] = [Self::Debug, Self::Info, Self::Warning, Self::Error];

    /// Interpret a raw value, as received across an FFI boundary.
    pub const fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            0 => Some(Self::Debug),
            1 => Some(Self::Info),
            2 => Some(Self::Warning),
            3 => Some(Self::Error),
            _ => None,
        }
    }

    /// Uppercase display name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display name of `severity` in encoding `E`.
pub fn name_for<E: Encoding>(severity: Severity) -> &'static [E::Unit] {
    let names = E::LEVEL_NAMES;
    match severity {
        Severity::Debug => names.debug,
        Severity::Info => names.info,
        Severity::Warning => names.warning,
        Severity::Error => names.error,
    }
}

/// Display name of a raw severity value; unknown values give `UNKNOWN`.
pub fn name_for_raw<E: Encoding>(raw: u32) -> &'static [E::Unit] {
    match Severity::from_raw(raw) {
        Some(severity) => name_for::<E>(severity),
        None => E::LEVEL_NAMES.unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::{Narrow, Wide};

    #[test]
    fn names_in_both_encodings() {
        for severity in Severity::ALL {
            let expected = severity.as_str();
            assert_eq!(name_for::<Narrow>(severity), expected.as_bytes());
            let wide: alloc::vec::Vec<u16> = expected.encode_utf16().collect();
            assert_eq!(name_for::<Wide>(severity), wide.as_slice());
        }
    }

    #[test]
    fn out_of_range_raw_is_unknown() {
        assert_eq!(name_for_raw::<Narrow>(4), b"UNKNOWN");
        assert_eq!(name_for_raw::<Narrow>(u32::MAX), b"UNKNOWN");
        let wide: alloc::vec::Vec<u16> = "UNKNOWN".encode_utf16().collect();
        assert_eq!(name_for_raw::<Wide>(17), wide.as_slice());
    }

    #[test]
    fn raw_round_trips_discriminant() {
        for severity in Severity::ALL {
            assert_eq!(Severity::from_raw(severity as u32), Some(severity));
        }
        assert_eq!(name_for_raw::<Narrow>(Severity::Warning as u32), b"WARNING");
    }
}
