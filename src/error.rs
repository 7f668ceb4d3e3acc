// CLASSIFICATION: COMMUNITY
// Filename: error.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-18

//! Failures a log call can surface to its caller.

use thiserror::Error;

/// Errors returned by the buffer composer and the level entry points.
///
/// Clock and transport failures never appear here: those degrade to a
/// sentinel timestamp or a silently dropped line.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LogError {
    /// An argument's formatting implementation reported an error.
    #[error("log message formatting failed")]
    Format,
    /// The line buffer could not grow.
    #[error("log buffer allocation failed")]
    OutOfMemory,
}

/// Result alias used throughout the crate.
pub type LogResult<T> = Result<T, LogError>;
