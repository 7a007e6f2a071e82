//! crates/logging/src/errors.rs
//! Errors reported when configuring the threshold.

use thiserror::Error;

/// Integer level code outside the accepted `0..=5` range.
///
/// Returned by [`LevelLogger::set_level`](crate::LevelLogger::set_level) and
/// [`Level::from_code`](crate::Level::from_code). The threshold in effect
/// before the failed call is left untouched.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("invalid log level: {value}")]
pub struct InvalidLevel {
    value: i64,
}

impl InvalidLevel {
    pub(crate) const fn new(value: i64) -> Self {
        Self { value }
    }

    /// The rejected value.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.value
    }
}

/// Text that names no level.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unrecognised log level {input:?}; expected debug, info, warn, error, fatal, off or 0-5")]
pub struct ParseLevelError {
    input: String,
}

impl ParseLevelError {
    pub(crate) fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// The text that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}
