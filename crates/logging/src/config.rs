//! crates/logging/src/config.rs
//! Per-level destination, prefix and header flags.

use std::fmt;
use std::io::{self, Write};

use logging_sink::{LineFlags, LineLogger};

use super::levels::Level;

/// Output stream a level writes to.
pub enum Destination {
    /// The process's standard output.
    Stdout,
    /// The process's standard error.
    Stderr,
    /// Any other writer, such as a file or a [`SharedBuffer`](logging_sink::SharedBuffer).
    Writer(Box<dyn Write + Send>),
}

impl Destination {
    /// Wraps an arbitrary writer.
    #[must_use]
    pub fn writer<W>(writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Self::Writer(Box::new(writer))
    }

    /// Standard error for FATAL, standard output for every other level.
    #[must_use]
    pub const fn default_for(level: Level) -> Self {
        match level {
            Level::Fatal | Level::Off => Self::Stderr,
            _ => Self::Stdout,
        }
    }

    fn into_writer(self) -> Box<dyn Write + Send> {
        match self {
            Self::Stdout => Box::new(io::stdout()),
            Self::Stderr => Box::new(io::stderr()),
            Self::Writer(writer) => writer,
        }
    }
}

impl fmt::Debug for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => f.write_str("Stdout"),
            Self::Stderr => f.write_str("Stderr"),
            Self::Writer(_) => f.write_str("Writer(..)"),
        }
    }
}

/// Configuration of one level's underlying [`LineLogger`].
///
/// # Examples
///
/// ```
/// use logging::{Level, LevelConfig};
/// use logging_sink::LineFlags;
///
/// let info = LevelConfig::default_for(Level::Info);
/// assert_eq!(info.prefix, "[INFO]:");
/// assert_eq!(info.flags, LineFlags::STANDARD);
///
/// let warn = LevelConfig::default_for(Level::Warn);
/// assert_eq!(warn.flags, LineFlags::STANDARD | LineFlags::SHORT_FILE);
/// ```
#[derive(Debug)]
pub struct LevelConfig {
    /// Where lines are written.
    pub destination: Destination,
    /// Literal text rendered at the start of each line.
    pub prefix: String,
    /// Header fields rendered before the message.
    pub flags: LineFlags,
}

impl LevelConfig {
    /// Creates a configuration from explicit parts.
    #[must_use]
    pub fn new(destination: Destination, prefix: impl Into<String>, flags: LineFlags) -> Self {
        Self {
            destination,
            prefix: prefix.into(),
            flags,
        }
    }

    /// Default destination, prefix and flags for `level`.
    #[must_use]
    pub fn default_for(level: Level) -> Self {
        Self::new(
            Destination::default_for(level),
            level.default_prefix(),
            Self::default_flags(level),
        )
    }

    /// Date and time for every level, plus the short call site for all but INFO.
    #[must_use]
    pub const fn default_flags(level: Level) -> LineFlags {
        match level {
            Level::Info => LineFlags::STANDARD,
            _ => LineFlags::STANDARD.union(LineFlags::SHORT_FILE),
        }
    }

    /// Replaces the destination.
    #[must_use]
    pub fn with_destination(mut self, destination: Destination) -> Self {
        self.destination = destination;
        self
    }

    /// Replaces the prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Replaces the header flags.
    #[must_use]
    pub fn with_flags(mut self, flags: LineFlags) -> Self {
        self.flags = flags;
        self
    }

    pub(crate) fn into_line_logger(self) -> LineLogger {
        LineLogger::from_boxed(self.destination.into_writer(), self.prefix, self.flags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fatal_defaults_to_standard_error() {
        assert!(matches!(
            LevelConfig::default_for(Level::Fatal).destination,
            Destination::Stderr
        ));
        for level in [Level::Debug, Level::Info, Level::Warn, Level::Error] {
            assert!(matches!(
                LevelConfig::default_for(level).destination,
                Destination::Stdout
            ));
        }
    }

    #[test]
    fn only_info_omits_call_site() {
        for level in Level::EMITTABLE {
            let flags = LevelConfig::default_flags(level);
            assert!(flags.contains(LineFlags::STANDARD));
            assert_eq!(flags.has_call_site(), level != Level::Info, "{level}");
        }
    }

    #[test]
    fn builder_methods_replace_fields() {
        let config = LevelConfig::default_for(Level::Error)
            .with_prefix("E ")
            .with_flags(LineFlags::EMPTY)
            .with_destination(Destination::writer(Vec::new()));

        assert_eq!(config.prefix, "E ");
        assert_eq!(config.flags, LineFlags::EMPTY);
        assert_eq!(format!("{:?}", config.destination), "Writer(..)");
    }

    #[test]
    fn into_line_logger_carries_prefix_and_flags() {
        let logger = LevelConfig::default_for(Level::Warn).into_line_logger();
        assert_eq!(logger.prefix(), "[WARN]:");
        assert_eq!(logger.flags(), LineFlags::STANDARD | LineFlags::SHORT_FILE);
    }
}
