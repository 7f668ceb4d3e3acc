// CLASSIFICATION: COMMUNITY
// Filename: lib.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-18

//! Leveled debug-channel logging for kernel-mode drivers.
//
// ─────────────────────────────────────────────────────────────────────────────
// kmlog – timestamped, severity-tagged lines for the kernel debugger
//
// Every log call renders one owned line
//
//     [YYYY-MM-DD HH:MM:SS.mmm] [LEVEL] <message>\n
//
// in either the narrow (byte) or wide (UTF-16) encoding and hands it to the
// platform debug transport in a single call. No locks are taken and no state
// is kept between calls, so the entry points may be used from any context the
// allocator itself tolerates.
//
// # Public Surface
// * [`debug`], [`info`], [`warning`], [`error`] – platform entry points.
// * [`Logger`] – the same pipeline over an explicit clock and transport.
// * [`Narrow`] / [`Wide`] – the two encodings, see [`Encoding`].
// * [`status::guarded`] – driver-entry boundary turning failures into status codes.
//
// Line assembly (`buffer`) and dispatch (`sink::emit`) stay behind their
// module paths; callers outside the crate only need the level entry points.
// ─────────────────────────────────────────────────────────────────────────────

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod bridge;
pub mod buffer;
pub mod config;
pub mod encoding;
pub mod error;
pub mod level;
pub mod logger;
pub mod sink;
pub mod status;
pub mod time;

pub use config::DebugChannelConfig;
pub use encoding::{Encoding, Narrow, Wide, WideStr};
pub use error::LogError;
pub use level::Severity;
pub use logger::Logger;
pub use sink::DebugTransport;
pub use status::{guarded_with, NtStatus, StatusCode};
pub use time::{Clock, FixedClock, TimeFields};

#[cfg(any(feature = "std", feature = "wdk"))]
pub use logger::{debug, error, info, platform, warning, PlatformClock, PlatformTransport};
#[cfg(any(feature = "std", feature = "wdk"))]
pub use status::guarded;
