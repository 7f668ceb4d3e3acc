// CLASSIFICATION: COMMUNITY
// Filename: bridge.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-18

//! `log` facade backend.
//!
//! Installing [`DebugLogger`] sends `log::info!` and friends from any crate
//! linked into the driver through the same narrow pipeline as [`crate::info`].
//! Every record is forwarded; there is no level filter.

use log::{Level, Log, Metadata, Record};

use crate::encoding::Narrow;
use crate::level::Severity;
use crate::logger::Logger;
use crate::sink::DebugTransport;
use crate::time::Clock;

/// Map a `log` level onto the four severities. Trace folds into debug.
pub const fn severity_of(level: Level) -> Severity {
    match level {
        Level::Error => Severity::Error,
        Level::Warn => Severity::Warning,
        Level::Info => Severity::Info,
        Level::Debug | Level::Trace => Severity::Debug,
    }
}

/// [`Log`] implementation over a borrowed [`Logger`].
#[derive(Debug)]
pub struct DebugLogger<'a, C, T> {
    inner: &'a Logger<C, T>,
}

impl<'a, C, T> DebugLogger<'a, C, T> {
    /// Forward records to `inner`.
    pub const fn new(inner: &'a Logger<C, T>) -> Self {
        Self { inner }
    }
}

impl<C, T> Log for DebugLogger<'_, C, T>
where
    C: Clock + Sync,
    T: DebugTransport + Sync,
{
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        // `Log::log` cannot report failure; a line that fails to format is dropped.
        let _ = self.inner.log::<Narrow>(
            severity_of(record.level()),
            format_args!("{}: {}", record.target(), record.args()),
        );
    }

    fn flush(&self) {}
}

#[cfg(any(feature = "std", feature = "wdk"))]
static PLATFORM_BRIDGE: DebugLogger<'static, crate::PlatformClock, crate::PlatformTransport> =
    DebugLogger::new(&crate::logger::PLATFORM);

/// Install the platform logger as the `log` backend with no level cap.
#[cfg(any(feature = "std", feature = "wdk"))]
pub fn init() -> Result<(), log::SetLoggerError> {
    log::set_logger(&PLATFORM_BRIDGE)?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}
