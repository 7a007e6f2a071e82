//! crates/logging-sink/src/call_site.rs
//! Source location attached to a logged line.

use std::fmt;
use std::panic::Location;

/// File and line that issued a log call.
///
/// Facade entry points are annotated with `#[track_caller]`, so
/// [`CallSite::caller`] resolves to the user's call site rather than a line
/// inside the logging crates.
///
/// ```
/// use logging_sink::CallSite;
///
/// let expected = line!() + 1;
/// let site = CallSite::caller();
/// assert_eq!(site.line(), expected);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct CallSite {
    file: &'static str,
    line: u32,
}

impl CallSite {
    /// Creates a call site from explicit parts.
    #[must_use]
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// Placeholder used when the origin of a line is not known.
    #[must_use]
    pub const fn unknown() -> Self {
        Self::new("???", 0)
    }

    /// Captures the location of the innermost caller that is not `#[track_caller]`.
    #[track_caller]
    #[must_use]
    pub fn caller() -> Self {
        Self::from(Location::caller())
    }

    /// Source path as recorded by the compiler.
    #[must_use]
    pub const fn file(&self) -> &'static str {
        self.file
    }

    /// Final component of [`file`](Self::file).
    #[must_use]
    pub fn short_file(&self) -> &'static str {
        self.file
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(self.file)
    }

    /// One-based line number.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }
}

impl From<&'static Location<'static>> for CallSite {
    fn from(location: &'static Location<'static>) -> Self {
        Self::new(location.file(), location.line())
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}
