// CLASSIFICATION: COMMUNITY
// Filename: logger.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-18

//! The four level entry points.
//!
//! [`Logger`] binds a clock to a transport; every call composes a fresh
//! [`LogBuffer`](crate::buffer::LogBuffer) and emits it. Nothing is cached between
//! calls and no lock is taken, so one `Logger` may be shared freely.

use core::fmt;

use crate::buffer;
use crate::encoding::Encoding;
use crate::error::LogResult;
use crate::level::Severity;
use crate::sink::{self, DebugTransport};
use crate::time::Clock;

/// Log pipeline over an explicit clock and transport.
#[derive(Debug, Clone, Copy, Default)]
pub struct Logger<C, T> {
    clock: C,
    transport: T,
}

impl<C, T> Logger<C, T> {
    /// Bind `clock` to `transport`.
    pub const fn new(clock: C, transport: T) -> Self {
        Self { clock, transport }
    }

    /// The time source.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// The debug transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }
}

impl<C: Clock, T: DebugTransport> Logger<C, T> {
    /// Compose one line at `severity` in encoding `E` and emit it.
    pub fn log<E: Encoding>(&self, severity: Severity, args: fmt::Arguments<'_>) -> LogResult<()> {
        let line = buffer::compose::<E, C>(&self.clock, severity, args)?;
        sink::emit(&self.transport, line)
    }

    /// Log at debug level.
    pub fn debug<E: Encoding>(&self, args: fmt::Arguments<'_>) -> LogResult<()> {
        self.log::<E>(Severity::Debug, args)
    }

    /// Log at info level.
    pub fn info<E: Encoding>(&self, args: fmt::Arguments<'_>) -> LogResult<()> {
        self.log::<E>(Severity::Info, args)
    }

    /// Log at warning level.
    pub fn warning<E: Encoding>(&self, args: fmt::Arguments<'_>) -> LogResult<()> {
        self.log::<E>(Severity::Warning, args)
    }

    /// Log at error level.
    pub fn error<E: Encoding>(&self, args: fmt::Arguments<'_>) -> LogResult<()> {
        self.log::<E>(Severity::Error, args)
    }
}

#[cfg(feature = "wdk")]
mod platform_types {
    /// Clock used by the free functions.
    pub type PlatformClock = crate::time::KernelClock;
    /// Transport used by the free functions.
    pub type PlatformTransport = crate::sink::KernelTransport;

    pub(super) const CLOCK: PlatformClock = crate::time::KernelClock;
    pub(super) const TRANSPORT: PlatformTransport =
        crate::sink::KernelTransport::new(crate::config::DebugChannelConfig::DEFAULT);
}

#[cfg(all(feature = "std", not(feature = "wdk")))]
mod platform_types {
    /// Clock used by the free functions.
    pub type PlatformClock = crate::time::SystemClock;
    /// Transport used by the free functions.
    pub type PlatformTransport = crate::sink::HostTransport;

    pub(super) const CLOCK: PlatformClock = crate::time::SystemClock;
    pub(super) const TRANSPORT: PlatformTransport = crate::sink::HostTransport;
}

#[cfg(any(feature = "std", feature = "wdk"))]
pub use platform_types::{PlatformClock, PlatformTransport};

#[cfg(any(feature = "std", feature = "wdk"))]
pub(crate) static PLATFORM: Logger<PlatformClock, PlatformTransport> =
    Logger::new(platform_types::CLOCK, platform_types::TRANSPORT);

/// The process-wide logger behind [`debug`], [`info`], [`warning`] and [`error`].
#[cfg(any(feature = "std", feature = "wdk"))]
pub fn platform() -> &'static Logger<PlatformClock, PlatformTransport> {
    &PLATFORM
}

/// Log at debug level through the platform logger.
#[cfg(any(feature = "std", feature = "wdk"))]
pub fn debug<E: Encoding>(args: fmt::Arguments<'_>) -> LogResult<()> {
    PLATFORM.debug::<E>(args)
}

/// Log at info level through the platform logger.
#[cfg(any(feature = "std", feature = "wdk"))]
pub fn info<E: Encoding>(args: fmt::Arguments<'_>) -> LogResult<()> {
    PLATFORM.info::<E>(args)
}

/// Log at warning level through the platform logger.
#[cfg(any(feature = "std", feature = "wdk"))]
pub fn warning<E: Encoding>(args: fmt::Arguments<'_>) -> LogResult<()> {
    PLATFORM.warning::<E>(args)
}

/// Log at error level through the platform logger.
#[cfg(any(feature = "std", feature = "wdk"))]
pub fn error<E: Encoding>(args: fmt::Arguments<'_>) -> LogResult<()> {
    PLATFORM.error::<E>(args)
}

/// Debug-level line through the platform logger.
///
/// `debug!("...", args)` is narrow; `debug!(wide: "...", args)` is wide.
/// Evaluates to `Result<(), LogError>`.
#[cfg(any(feature = "std", feature = "wdk"))]
#[macro_export]
macro_rules! debug {
    (wide: $($arg:tt)+) => {
        $crate::debug::<$crate::Wide>(::core::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::debug::<$crate::Narrow>(::core::format_args!($($arg)+))
    };
}

/// Info-level line through the platform logger. See [`debug!`].
#[cfg(any(feature = "std", feature = "wdk"))]
#[macro_export]
macro_rules! info {
    (wide: $($arg:tt)+) => {
        $crate::info::<$crate::Wide>(::core::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::info::<$crate::Narrow>(::core::format_args!($($arg)+))
    };
}

/// Warning-level line through the platform logger. See [`debug!`].
#[cfg(any(feature = "std", feature = "wdk"))]
#[macro_export]
macro_rules! warning {
    (wide: $($arg:tt)+) => {
        $crate::warning::<$crate::Wide>(::core::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::warning::<$crate::Narrow>(::core::format_args!($($arg)+))
    };
}

/// Error-level line through the platform logger. See [`debug!`].
#[cfg(any(feature = "std", feature = "wdk"))]
#[macro_export]
macro_rules! error {
    (wide: $($arg:tt)+) => {
        $crate::error::<$crate::Wide>(::core::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::error::<$crate::Narrow>(::core::format_args!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::{Narrow, Wide};
    use crate::error::LogError;
    use crate::time::{FixedClock, TimeFields};
    use alloc::string::String;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    #[derive(Default)]
    struct Lines(RefCell<Vec<String>>);

    impl DebugTransport for Lines {
        fn write_narrow(&self, line: &[u8]) {
            self.0.borrow_mut().push(String::from_utf8_lossy(line).into_owned());
        }

        fn write_wide(&self, line: &[u16]) {
            self.0.borrow_mut().push(String::from_utf16_lossy(line));
        }
    }

    fn logger() -> Logger<FixedClock, Lines> {
        let at = TimeFields {
            year: 2024,
            month: 3,
            day: 7,
            hour: 9,
            minute: 5,
            second: 0,
            millisecond: 12,
        };
        Logger::new(FixedClock::at_fields(at).unwrap(), Lines::default())
    }

    #[test]
    fn each_level_tags_its_line() {
        let log = logger();
        log.debug::<Narrow>(format_args!("d")).unwrap();
        log.info::<Wide>(format_args!("i")).unwrap();
        log.warning::<Narrow>(format_args!("w")).unwrap();
        log.error::<Wide>(format_args!("e")).unwrap();
        let lines = log.transport().0.borrow();
        assert_eq!(
            lines.as_slice(),
            &[
                "[2024-03-07 09:05:00.012] [DEBUG] d\n",
                "[2024-03-07 09:05:00.012] [INFO] i\n",
                "[2024-03-07 09:05:00.012] [WARNING] w\n",
                "[2024-03-07 09:05:00.012] [ERROR] e\n",
            ]
        );
    }

    #[test]
    fn identical_calls_give_identical_lines() {
        let log = logger();
        for _ in 0..2 {
            log.info::<Narrow>(format_args!("tick {:>4}", 7)).unwrap();
        }
        let lines = log.transport().0.borrow();
        assert_eq!(lines[0], lines[1]);
        assert!(lines[0].ends_with("[INFO] tick    7\n"));
    }

    #[test]
    fn format_error_emits_nothing() {
        struct Broken;
        impl fmt::Display for Broken {
            fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
                Err(fmt::Error)
            }
        }
        let log = logger();
        assert_eq!(log.error::<Narrow>(format_args!("{}", Broken)), Err(LogError::Format));
        assert!(log.transport().0.borrow().is_empty());
    }
}
