// CLASSIFICATION: COMMUNITY
// Filename: buffer_exhaustion.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-18

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;
use std::fmt;
use std::ptr;
use std::sync::Mutex;

use kmlog::buffer::{compose_at, LogBuffer};
use kmlog::{DebugTransport, FixedClock, LogError, Logger, Narrow, TimeFields, Wide};

/// Largest allocation granted while a [`CapGuard`] is alive on this thread.
const CAP: usize = 1024;

thread_local! {
    static CAPPED: Cell<bool> = const { Cell::new(false) };
}

struct CappingAllocator;

impl CappingAllocator {
    fn refuses(layout: &Layout) -> bool {
        layout.size() > CAP && CAPPED.try_with(Cell::get).unwrap_or(false)
    }
}

unsafe impl GlobalAlloc for CappingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if Self::refuses(&layout) {
            return ptr::null_mut();
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let grown = Layout::from_size_align_unchecked(new_size, layout.align());
        if Self::refuses(&grown) {
            return ptr::null_mut();
        }
        System.realloc(ptr, layout, new_size)
    }
}

#[global_allocator]
static ALLOCATOR: CappingAllocator = CappingAllocator;

/// Caps allocations on the current thread until dropped.
struct CapGuard;

impl CapGuard {
    fn arm() -> Self {
        CAPPED.with(|capped| capped.set(true));
        CapGuard
    }
}

impl Drop for CapGuard {
    fn drop(&mut self) {
        CAPPED.with(|capped| capped.set(false));
    }
}

/// Right-aligns nothing in a 5000-column field.
struct Big;

impl fmt::Display for Big {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>5000}", "")
    }
}

struct Poisoned;

impl fmt::Display for Poisoned {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Err(fmt::Error)
    }
}

#[derive(Default)]
struct Capture {
    narrow: Mutex<Vec<Vec<u8>>>,
    wide: Mutex<Vec<Vec<u16>>>,
}

impl DebugTransport for Capture {
    fn write_narrow(&self, line: &[u8]) {
        self.narrow.lock().unwrap().push(line.to_vec());
    }

    fn write_wide(&self, line: &[u16]) {
        self.wide.lock().unwrap().push(line.to_vec());
    }
}

#[test]
fn oversized_argument_reports_out_of_memory() {
    let result = {
        let _cap = CapGuard::arm();
        compose_at::<Narrow>(TimeFields::SENTINEL, kmlog::Severity::Info, format_args!("{}", Big))
    };
    assert_eq!(result.unwrap_err(), LogError::OutOfMemory);

    let wide = {
        let _cap = CapGuard::arm();
        compose_at::<Wide>(TimeFields::SENTINEL, kmlog::Severity::Debug, format_args!("{}", Big))
    };
    assert_eq!(wide.unwrap_err(), LogError::OutOfMemory);
}

#[test]
fn exhausted_logger_emits_nothing() {
    let logger = Logger::new(FixedClock::unavailable(), Capture::default());
    let (narrow, wide) = {
        let _cap = CapGuard::arm();
        (
            logger.info::<Narrow>(format_args!("payload {}", Big)),
            logger.error::<Wide>(format_args!("payload {}", Big)),
        )
    };
    assert_eq!(narrow, Err(LogError::OutOfMemory));
    assert_eq!(wide, Err(LogError::OutOfMemory));
    assert!(logger.transport().narrow.lock().unwrap().is_empty());
    assert!(logger.transport().wide.lock().unwrap().is_empty());
}

#[test]
fn small_lines_fit_under_the_cap() {
    let logger = Logger::new(FixedClock::unavailable(), Capture::default());
    let result = {
        let _cap = CapGuard::arm();
        logger.warning::<Narrow>(format_args!("link {} down", 2))
    };
    assert_eq!(result, Ok(()));
    assert_eq!(
        logger.transport().narrow.lock().unwrap()[0],
        b"[0000-00-00 00:00:00.000] [WARNING] link 2 down\n"
    );
}

#[test]
fn display_failure_under_cap_stays_a_format_error() {
    let result = {
        let _cap = CapGuard::arm();
        compose_at::<Narrow>(TimeFields::SENTINEL, kmlog::Severity::Error, format_args!("{}", Poisoned))
    };
    assert_eq!(result.unwrap_err(), LogError::Format);
}

#[test]
fn buffer_recovers_after_exhaustion() {
    let mut buffer = LogBuffer::<Narrow>::with_capacity(16).unwrap();
    let exhausted = {
        let _cap = CapGuard::arm();
        buffer.write_args(format_args!("{}", Big))
    };
    assert_eq!(exhausted, Err(LogError::OutOfMemory));
    assert_eq!(
        buffer.write_args(format_args!("{}", Poisoned)),
        Err(LogError::Format)
    );
}

#[test]
fn unsatisfiable_capacity_is_out_of_memory() {
    assert_eq!(
        LogBuffer::<Narrow>::with_capacity(usize::MAX).unwrap_err(),
        LogError::OutOfMemory
    );
    assert_eq!(
        LogBuffer::<Wide>::with_capacity(usize::MAX).unwrap_err(),
        LogError::OutOfMemory
    );
}
