// CLASSIFICATION: COMMUNITY
// Filename: buffer.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-18

//! Line composition.
//!
//! A [`LogBuffer`] is created by one log call, filled with the prefix and the
//! message, handed to the sink and dropped. All growth goes through
//! `try_reserve`, so an exhausted (non-paged) allocator surfaces as
//! [`LogError::OutOfMemory`] instead of aborting the driver.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::encoding::Encoding;
use crate::error::{LogError, LogResult};
use crate::level::{self, Severity};
use crate::time::{self, Clock, TimeFields};

/// Room for the prefix and a short message before the first regrowth.
const INITIAL_CAPACITY: usize = 128;

/// Owned text of one log line in encoding `E`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogBuffer<E: Encoding> {
    units: Vec<E::Unit>,
    exhausted: bool,
}

impl<E: Encoding> LogBuffer<E> {
    /// Empty buffer; allocates nothing until written.
    pub const fn new() -> Self {
        Self {
            units: Vec::new(),
            exhausted: false,
        }
    }

    /// Empty buffer with room for `capacity` units.
    pub fn with_capacity(capacity: usize) -> LogResult<Self> {
        let mut buffer = Self::new();
        buffer
            .units
            .try_reserve(capacity)
            .map_err(|_| LogError::OutOfMemory)?;
        Ok(buffer)
    }

    /// Code units written so far.
    pub fn as_units(&self) -> &[E::Unit] {
        &self.units
    }

    /// Consume the buffer, keeping its code units.
    pub fn into_units(self) -> Vec<E::Unit> {
        self.units
    }

    /// Number of code units.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// True when nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Append units already in this encoding.
    pub fn push_units(&mut self, units: &[E::Unit]) -> LogResult<()> {
        self.units
            .try_reserve(units.len())
            .map_err(|_| LogError::OutOfMemory)?;
        self.units.extend_from_slice(units);
        Ok(())
    }

    /// Append Rust text, converted to this encoding.
    pub fn push_str(&mut self, text: &str) -> LogResult<()> {
        E::encode(text, &mut self.units).map_err(|_| LogError::OutOfMemory)
    }

    /// Render `args` onto the end of the buffer.
    ///
    /// A formatting error leaves the buffer partially written; callers
    /// discard it rather than emit it.
    pub fn write_args(&mut self, args: fmt::Arguments<'_>) -> LogResult<()> {
        self.exhausted = false;
        match fmt::write(self, args) {
            Ok(()) => Ok(()),
            Err(_) if self.exhausted => Err(LogError::OutOfMemory),
            Err(_) => Err(LogError::Format),
        }
    }

    /// True if the last unit is a newline.
    pub fn ends_with_newline(&self) -> bool {
        self.units.last() == Some(&E::NEWLINE)
    }

    /// Append a newline unless the buffer already ends with one.
    pub fn terminate_line(&mut self) -> LogResult<()> {
        if self.ends_with_newline() {
            return Ok(());
        }
        self.push_units(&[E::NEWLINE])
    }

    /// Lossy Rust text of the buffer.
    pub fn to_string_lossy(&self) -> String {
        E::decode_lossy(&self.units)
    }
}

impl<E: Encoding> Default for LogBuffer<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Encoding> fmt::Write for LogBuffer<E> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        E::encode(s, &mut self.units).map_err(|_| {
            self.exhausted = true;
            fmt::Error
        })
    }
}

/// Render `[timestamp] [LEVEL] message` using the current time from `clock`.
pub fn compose<E, C>(clock: &C, severity: Severity, args: fmt::Arguments<'_>) -> LogResult<LogBuffer<E>>
where
    E: Encoding,
    C: Clock + ?Sized,
{
    compose_at(time::now(clock), severity, args)
}

/// Render `[timestamp] [LEVEL] message` for an explicit timestamp.
pub fn compose_at<E: Encoding>(
    time: TimeFields,
    severity: Severity,
    args: fmt::Arguments<'_>,
) -> LogResult<LogBuffer<E>> {
    let mut buffer = LogBuffer::with_capacity(INITIAL_CAPACITY)?;
    buffer.write_args(format_args!("[{}] [", time))?;
    buffer.push_units(level::name_for::<E>(severity))?;
    buffer.push_str("] ")?;
    buffer.write_args(args)?;
    Ok(buffer)
}
