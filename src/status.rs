// CLASSIFICATION: COMMUNITY
// Filename: status.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-18

//! Driver-entry boundary.
//!
//! Nothing may unwind back into the kernel. Driver entry points run their
//! body through [`guarded`], which turns an error (or, on hosts, a panic)
//! into an [`NtStatus`] after reporting it on the debug channel.

use core::fmt;

use crate::encoding::Narrow;
use crate::error::LogError;
use crate::logger::Logger;
use crate::sink::DebugTransport;
use crate::time::Clock;

/// An `NTSTATUS` value.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NtStatus(pub i32);

impl NtStatus {
    /// `STATUS_SUCCESS`
    pub const SUCCESS: Self = Self(0);
    /// `STATUS_UNSUCCESSFUL`
    pub const UNSUCCESSFUL: Self = Self(0xC000_0001_u32 as i32);
    /// `STATUS_INVALID_PARAMETER`
    pub const INVALID_PARAMETER: Self = Self(0xC000_000D_u32 as i32);
    /// `STATUS_NO_MEMORY`
    pub const NO_MEMORY: Self = Self(0xC000_0017_u32 as i32);
    /// `STATUS_UNHANDLED_EXCEPTION`
    pub const UNHANDLED_EXCEPTION: Self = Self(0xC000_0144_u32 as i32);

    /// `NT_SUCCESS`: success and informational codes are non-negative.
    pub const fn is_success(self) -> bool {
        self.0 >= 0
    }

    /// The status as the unsigned code debuggers print.
    pub const fn code(self) -> u32 {
        self.0 as u32
    }
}

impl fmt::LowerHex for NtStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.code(), f)
    }
}

impl fmt::Display for NtStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.code())
    }
}

impl From<LogError> for NtStatus {
    fn from(err: LogError) -> Self {
        match err {
            LogError::Format => Self::INVALID_PARAMETER,
            LogError::OutOfMemory => Self::NO_MEMORY,
        }
    }
}

/// Errors that know which status they should surface as.
pub trait StatusCode: fmt::Display {
    /// Status returned to the kernel for this failure.
    fn status(&self) -> NtStatus;
}

impl StatusCode for LogError {
    fn status(&self) -> NtStatus {
        NtStatus::from(*self)
    }
}

impl StatusCode for NtStatus {
    fn status(&self) -> NtStatus {
        *self
    }
}

/// Run `entry` and convert its outcome into a status, reporting failures
/// through `logger` at error level.
pub fn guarded_with<C, T, F, E>(logger: &Logger<C, T>, entry: F) -> NtStatus
where
    C: Clock,
    T: DebugTransport,
    F: FnOnce() -> Result<(), E>,
    E: StatusCode,
{
    match run(entry) {
        Ok(Ok(())) => NtStatus::SUCCESS,
        Ok(Err(err)) => {
            let status = err.status();
            report(logger, &err, status);
            status
        }
        Err(panic) => {
            report(logger, &panic, NtStatus::UNHANDLED_EXCEPTION);
            NtStatus::UNHANDLED_EXCEPTION
        }
    }
}

/// [`guarded_with`] over the platform logger.
#[cfg(any(feature = "std", feature = "wdk"))]
pub fn guarded<F, E>(entry: F) -> NtStatus
where
    F: FnOnce() -> Result<(), E>,
    E: StatusCode,
{
    guarded_with(crate::logger::platform(), entry)
}

fn report<C, T, D>(logger: &Logger<C, T>, failure: &D, status: NtStatus)
where
    C: Clock,
    T: DebugTransport,
    D: fmt::Display + ?Sized,
{
    // The boundary has nowhere left to send a failure of its own report.
    let _ = logger.error::<Narrow>(format_args!(
        "Unhandled failure caught: {} with code {:#x}",
        failure, status
    ));
}

/// Panic payload rendered for the report.
#[cfg_attr(not(feature = "std"), allow(dead_code))]
struct PanicMessage(alloc::string::String);

impl fmt::Display for PanicMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "panic: {}", self.0)
    }
}

#[cfg(feature = "std")]
fn run<F, E>(entry: F) -> Result<Result<(), E>, PanicMessage>
where
    F: FnOnce() -> Result<(), E>,
{
    std::panic::catch_unwind(std::panic::AssertUnwindSafe(entry)).map_err(|payload| {
        let text = payload
            .downcast_ref::<&str>()
            .map(|s| String::from(*s))
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "<non-string payload>".into());
        PanicMessage(text)
    })
}

#[cfg(not(feature = "std"))]
fn run<F, E>(entry: F) -> Result<Result<(), E>, PanicMessage>
where
    F: FnOnce() -> Result<(), E>,
{
    // Kernel builds abort on panic; there is nothing to catch.
    Ok(entry())
}
