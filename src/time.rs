// CLASSIFICATION: COMMUNITY
// Filename: time.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-18

//! Timestamp acquisition and calendar decomposition.
//!
//! Clocks report kernel system time: 100 ns ticks since 1601-01-01 UTC.
//! Decomposition goes through `chrono`, which needs neither `std` nor a heap.

use core::fmt;

use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};

/// Ticks between 1601-01-01 and 1970-01-01.
pub const UNIX_EPOCH_TICKS: i64 = 116_444_736_000_000_000;
/// Ticks per second.
pub const TICKS_PER_SECOND: i64 = 10_000_000;

/// Calendar fields of one timestamp, as `RtlTimeToTimeFields` produces them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeFields {
    /// Four-digit year.
    pub year: u16,
    /// 1–12.
    pub month: u8,
    /// 1–31.
    pub day: u8,
    /// 0–23.
    pub hour: u8,
    /// 0–59.
    pub minute: u8,
    /// 0–59.
    pub second: u8,
    /// 0–999.
    pub millisecond: u16,
}

impl TimeFields {
    /// All-zero stand-in used when the clock cannot be read.
    pub const SENTINEL: Self = Self {
        year: 0,
        month: 0,
        day: 0,
        hour: 0,
        minute: 0,
        second: 0,
        millisecond: 0,
    };

    /// Inverse of [`decompose`]; `None` for fields that name no instant.
    pub fn to_ticks(&self) -> Option<i64> {
        let date = NaiveDate::from_ymd_opt(i32::from(self.year), self.month.into(), self.day.into())?;
        let stamp = date
            .and_hms_milli_opt(
                self.hour.into(),
                self.minute.into(),
                self.second.into(),
                self.millisecond.into(),
            )?
            .and_utc();
        let secs = stamp.timestamp().checked_mul(TICKS_PER_SECOND)?;
        let sub = i64::from(stamp.timestamp_subsec_millis()) * 10_000;
        secs.checked_add(sub)?.checked_add(UNIX_EPOCH_TICKS)
    }
}

/// `YYYY-MM-DD HH:MM:SS.mmm`, zero padded.
impl fmt::Display for TimeFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}.{:03}",
            self.year, self.month, self.day, self.hour, self.minute, self.second, self.millisecond
        )
    }
}

/// Split kernel system time into calendar fields.
///
/// Returns `None` for instants before 1601 or past year 9999.
pub fn decompose(ticks: i64) -> Option<TimeFields> {
    if ticks < 0 {
        return None;
    }
    let unix = ticks - UNIX_EPOCH_TICKS;
    let secs = unix.div_euclid(TICKS_PER_SECOND);
    let nanos = (unix.rem_euclid(TICKS_PER_SECOND) * 100) as u32;
    let stamp = DateTime::<Utc>::from_timestamp(secs, nanos)?;
    if stamp.year() > 9999 {
        return None;
    }
    Some(TimeFields {
        year: u16::try_from(stamp.year()).ok()?,
        month: stamp.month() as u8,
        day: stamp.day() as u8,
        hour: stamp.hour() as u8,
        minute: stamp.minute() as u8,
        second: stamp.second() as u8,
        millisecond: (stamp.nanosecond() / 1_000_000) as u16,
    })
}

/// Source of the current time.
pub trait Clock {
    /// Current kernel system time, or `None` if it cannot be read.
    fn current_time_count(&self) -> Option<i64>;

    /// Calendar decomposition of `ticks`.
    fn decompose(&self, ticks: i64) -> Option<TimeFields> {
        decompose(ticks)
    }
}

/// Current time fields from `clock`, or [`TimeFields::SENTINEL`] on any failure.
pub fn now<C: Clock + ?Sized>(clock: &C) -> TimeFields {
    clock
        .current_time_count()
        .and_then(|ticks| clock.decompose(ticks))
        .unwrap_or(TimeFields::SENTINEL)
}

/// Clock pinned to one reading, for reproducible output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    ticks: Option<i64>,
}

impl FixedClock {
    /// Always reads `ticks`.
    pub const fn at(ticks: i64) -> Self {
        Self { ticks: Some(ticks) }
    }

    /// Always reads the instant described by `fields`.
    pub fn at_fields(fields: TimeFields) -> Option<Self> {
        fields.to_ticks().map(Self::at)
    }

    /// Never yields a reading.
    pub const fn unavailable() -> Self {
        Self { ticks: None }
    }
}

impl Clock for FixedClock {
    fn current_time_count(&self) -> Option<i64> {
        self.ticks
    }
}

/// Host wall clock.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[cfg(feature = "std")]
impl Clock for SystemClock {
    fn current_time_count(&self) -> Option<i64> {
        let since = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .ok()?;
        let secs = i64::try_from(since.as_secs()).ok()?;
        secs.checked_mul(TICKS_PER_SECOND)?
            .checked_add(i64::from(since.subsec_nanos() / 100))?
            .checked_add(UNIX_EPOCH_TICKS)
    }
}

#[cfg(feature = "wdk")]
extern "system" {
    // LARGE_INTEGER is layout-compatible with i64.
    fn KeQuerySystemTimePrecise(current_time: *mut i64);
}

/// Kernel system clock (`KeQuerySystemTimePrecise`). Callable at any IRQL.
#[cfg(feature = "wdk")]
#[derive(Debug, Clone, Copy, Default)]
pub struct KernelClock;

#[cfg(feature = "wdk")]
impl Clock for KernelClock {
    fn current_time_count(&self) -> Option<i64> {
        let mut ticks: i64 = 0;
        // SAFETY: the routine only writes one LARGE_INTEGER through the pointer.
        unsafe { KeQuerySystemTimePrecise(&mut ticks) };
        Some(ticks)
    }
}
