// CLASSIFICATION: COMMUNITY
// Filename: sink.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-18

//! Debug-channel transports and the encoding dispatch in front of them.

use crate::buffer::LogBuffer;
use crate::encoding::Encoding;
use crate::error::LogResult;

/// Platform debug output: one entry point per encoding.
///
/// Delivery is best effort. Implementations must not block and have no way
/// to report a dropped line.
pub trait DebugTransport {
    /// Write one narrow line.
    fn write_narrow(&self, line: &[u8]);
    /// Write one wide line.
    fn write_wide(&self, line: &[u16]);
}

impl<T: DebugTransport + ?Sized> DebugTransport for &T {
    fn write_narrow(&self, line: &[u8]) {
        (**self).write_narrow(line);
    }

    fn write_wide(&self, line: &[u16]) {
        (**self).write_wide(line);
    }
}

/// Terminate `buffer` with a newline and pass it to the matching entry point.
///
/// The only failure is being unable to grow the buffer for the newline.
pub fn emit<E, T>(transport: &T, mut buffer: LogBuffer<E>) -> LogResult<()>
where
    E: Encoding,
    T: DebugTransport + ?Sized,
{
    buffer.terminate_line()?;
    E::transmit(transport, buffer.as_units());
    Ok(())
}

/// Host stand-in for the debugger: stderr, one write per line.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct HostTransport;

#[cfg(feature = "std")]
impl DebugTransport for HostTransport {
    fn write_narrow(&self, line: &[u8]) {
        use std::io::Write;
        let _ = std::io::stderr().lock().write_all(line);
    }

    fn write_wide(&self, line: &[u16]) {
        use std::io::Write;
        let text = String::from_utf16_lossy(line);
        let _ = std::io::stderr().lock().write_all(text.as_bytes());
    }
}

/// Longest prefix of `line` a counted `ANSI_STRING` can describe, cut on a
/// UTF-8 character boundary.
#[cfg_attr(not(feature = "wdk"), allow(dead_code))]
fn counted_narrow(line: &[u8]) -> &[u8] {
    let max = usize::from(u16::MAX);
    if line.len() <= max {
        return line;
    }
    let mut end = max;
    while end > 0 && (line[end] & 0xC0) == 0x80 {
        end -= 1;
    }
    &line[..end]
}

/// Longest prefix of `line` a counted `UNICODE_STRING` can describe, never
/// ending on a high surrogate.
#[cfg_attr(not(feature = "wdk"), allow(dead_code))]
fn counted_wide(line: &[u16]) -> &[u16] {
    let max = usize::from(u16::MAX) / 2;
    if line.len() <= max {
        return line;
    }
    let mut end = max;
    if (0xD800..0xDC00).contains(&line[end - 1]) {
        end -= 1;
    }
    &line[..end]
}

#[cfg(feature = "wdk")]
pub use kernel::KernelTransport;

#[cfg(feature = "wdk")]
mod kernel {
    use core::ffi::c_char;

    use super::{counted_narrow, counted_wide, DebugTransport};
    use crate::config::DebugChannelConfig;

    #[repr(C)]
    struct AnsiString {
        length: u16,
        maximum_length: u16,
        buffer: *const u8,
    }

    #[repr(C)]
    struct UnicodeString {
        length: u16,
        maximum_length: u16,
        buffer: *const u16,
    }

    extern "C" {
        fn DbgPrintEx(component_id: u32, level: u32, format: *const c_char, ...) -> i32;
    }

    /// `DbgPrintEx` with counted strings (`%Z` / `%wZ`), so the line needs no
    /// NUL terminator and `%` in the text is never interpreted.
    ///
    /// Each line is one `DbgPrintEx` call. The debugger keeps at most 512
    /// bytes of a call; anything past that is dropped by the platform.
    #[derive(Debug, Clone, Copy)]
    pub struct KernelTransport {
        config: DebugChannelConfig,
    }

    impl KernelTransport {
        /// Transport addressing the given filter component.
        pub const fn new(config: DebugChannelConfig) -> Self {
            Self { config }
        }
    }

    impl Default for KernelTransport {
        fn default() -> Self {
            Self::new(DebugChannelConfig::DEFAULT)
        }
    }

    impl DebugTransport for KernelTransport {
        fn write_narrow(&self, line: &[u8]) {
            let line = counted_narrow(line);
            let bytes = line.len() as u16;
            let desc = AnsiString {
                length: bytes,
                maximum_length: bytes,
                buffer: line.as_ptr(),
            };
            // SAFETY: `desc` describes `line`, which outlives the call.
            unsafe {
                DbgPrintEx(
                    self.config.component_id,
                    self.config.level,
                    b"%Z\0".as_ptr().cast(),
                    &desc as *const AnsiString,
                );
            }
        }

        fn write_wide(&self, line: &[u16]) {
            let line = counted_wide(line);
            let bytes = (line.len() * 2) as u16;
            let desc = UnicodeString {
                length: bytes,
                maximum_length: bytes,
                buffer: line.as_ptr(),
            };
            // SAFETY: `desc` describes `line`, which outlives the call.
            unsafe {
                DbgPrintEx(
                    self.config.component_id,
                    self.config.level,
                    b"%wZ\0".as_ptr().cast(),
                    &desc as *const UnicodeString,
                );
            }
        }
    }
}
