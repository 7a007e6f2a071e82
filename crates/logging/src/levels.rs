//! crates/logging/src/levels.rs
//! Severity levels and the threshold sentinel.

use std::fmt;
use std::str::FromStr;

use crate::errors::{InvalidLevel, ParseLevelError};

/// Severity of a logged line, ordered from least to most severe.
///
/// [`Level::Off`] is a threshold sentinel above every emittable level: setting
/// it as the threshold silences all output, FATAL included. The integer codes
/// `0..=5` returned by [`code`](Self::code) are the values accepted by
/// [`LevelLogger::set_level`](crate::LevelLogger::set_level).
///
/// # Examples
///
/// ```
/// use logging::Level;
///
/// assert!(Level::Debug < Level::Info);
/// assert!(Level::Fatal < Level::Off);
/// assert_eq!(Level::Warn.code(), 2);
/// assert_eq!("error".parse::<Level>(), Ok(Level::Error));
/// assert_eq!(Level::from_code(4), Ok(Level::Fatal));
/// assert!(Level::from_code(6).is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Level {
    /// Diagnostic detail for developers.
    #[default]
    Debug = 0,
    /// Routine progress information.
    Info = 1,
    /// Something unexpected that does not stop the program.
    Warn = 2,
    /// A failed operation.
    Error = 3,
    /// An unrecoverable state; logging at this level terminates the process.
    Fatal = 4,
    /// Threshold sentinel that suppresses every level.
    Off = 5,
}

impl Level {
    /// Levels that can be emitted, in ascending severity.
    pub const EMITTABLE: [Self; 5] = [
        Self::Debug,
        Self::Info,
        Self::Warn,
        Self::Error,
        Self::Fatal,
    ];

    /// Every level including [`Level::Off`], in ascending order.
    pub const ALL: [Self; 6] = [
        Self::Debug,
        Self::Info,
        Self::Warn,
        Self::Error,
        Self::Fatal,
        Self::Off,
    ];

    /// Converts an integer code into a level.
    ///
    /// Codes outside `0..=5` yield [`InvalidLevel`] carrying the rejected value.
    pub const fn from_code(code: i64) -> Result<Self, InvalidLevel> {
        match code {
            0 => Ok(Self::Debug),
            1 => Ok(Self::Info),
            2 => Ok(Self::Warn),
            3 => Ok(Self::Error),
            4 => Ok(Self::Fatal),
            5 => Ok(Self::Off),
            _ => Err(InvalidLevel::new(code)),
        }
    }

    /// Returns the integer code of the level.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    // Only ever fed values produced by `code`.
    pub(crate) const fn from_repr(raw: u8) -> Self {
        match raw {
            0 => Self::Debug,
            1 => Self::Info,
            2 => Self::Warn,
            3 => Self::Error,
            4 => Self::Fatal,
            _ => Self::Off,
        }
    }

    /// Returns the upper-case name of the level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
            Self::Off => "OFF",
        }
    }

    /// Returns the prefix written at the start of every line of this level.
    ///
    /// [`Level::Off`] never emits and therefore has an empty prefix.
    ///
    /// ```
    /// use logging::Level;
    ///
    /// assert_eq!(Level::Debug.default_prefix(), "[DEBUG]:");
    /// assert_eq!(Level::Fatal.default_prefix(), "[FATAL]:");
    /// ```
    #[must_use]
    pub const fn default_prefix(self) -> &'static str {
        match self {
            Self::Debug => "[DEBUG]:",
            Self::Info => "[INFO]:",
            Self::Warn => "[WARN]:",
            Self::Error => "[ERROR]:",
            Self::Fatal => "[FATAL]:",
            Self::Off => "",
        }
    }

    /// Reports whether lines can be logged at this level.
    #[must_use]
    pub const fn is_emittable(self) -> bool {
        !matches!(self, Self::Off)
    }

    /// Position of the level's configuration slot, `None` for [`Level::Off`].
    pub(crate) const fn slot(self) -> Option<usize> {
        match self {
            Self::Off => None,
            other => Some(other as usize),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<i64> for Level {
    type Error = InvalidLevel;

    fn try_from(code: i64) -> Result<Self, InvalidLevel> {
        Self::from_code(code)
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.code()
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Parses a level name (case-insensitive, surrounding whitespace ignored)
    /// or an integer code `0..=5`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if let Some(level) = Self::ALL
            .into_iter()
            .find(|level| trimmed.eq_ignore_ascii_case(level.as_str()))
        {
            return Ok(level);
        }

        if trimmed.eq_ignore_ascii_case("warning") {
            return Ok(Self::Warn);
        }

        trimmed
            .parse::<i64>()
            .ok()
            .and_then(|code| Self::from_code(code).ok())
            .ok_or_else(|| ParseLevelError::new(s))
    }
}
