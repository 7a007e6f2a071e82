//! crates/logging-sink/src/line_logger.rs
//! Mutex-guarded logger that writes one complete line per call.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard};

use time::OffsetDateTime;

use crate::header::{current_timestamp, render_header};
use crate::{CallSite, LineFlags};

/// Line-oriented logger bound to a single destination.
///
/// Each call to [`output`](Self::output) renders the header selected by the
/// logger's [`LineFlags`], appends the message body and a trailing newline
/// (unless the body already ends with one), and hands the finished line to the
/// destination with a single `write_all` while holding the logger's mutex.
/// Concurrent callers therefore never interleave within a line.
///
/// # Examples
///
/// ```
/// use logging_sink::{CallSite, LineFlags, LineLogger, SharedBuffer};
///
/// let buffer = SharedBuffer::new();
/// let logger = LineLogger::new(buffer.clone(), "[INFO]:", LineFlags::SHORT_FILE);
///
/// logger.output(&CallSite::new("src/main.rs", 7), "ready")?;
/// assert_eq!(buffer.contents_lossy(), "[INFO]:main.rs:7: ready\n");
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct LineLogger {
    prefix: String,
    flags: LineFlags,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl LineLogger {
    /// Creates a logger that writes to `writer`.
    #[must_use]
    pub fn new<W>(writer: W, prefix: impl Into<String>, flags: LineFlags) -> Self
    where
        W: Write + Send + 'static,
    {
        Self::from_boxed(Box::new(writer), prefix, flags)
    }

    /// Creates a logger from an already boxed writer.
    #[must_use]
    pub fn from_boxed(
        writer: Box<dyn Write + Send>,
        prefix: impl Into<String>,
        flags: LineFlags,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            flags,
            writer: Mutex::new(writer),
        }
    }

    /// Returns the literal prefix rendered on every line.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the header flags.
    #[must_use]
    pub const fn flags(&self) -> LineFlags {
        self.flags
    }

    /// Writes `message` stamped with the current time.
    pub fn output(&self, call_site: &CallSite, message: &str) -> io::Result<()> {
        self.output_at(current_timestamp(self.flags), call_site, message)
    }

    /// Writes `message` stamped with `now`.
    ///
    /// The timestamp is converted to UTC when the logger carries
    /// [`LineFlags::UTC`]; otherwise it is rendered in its own offset.
    pub fn output_at(
        &self,
        now: OffsetDateTime,
        call_site: &CallSite,
        message: &str,
    ) -> io::Result<()> {
        let mut line = Vec::with_capacity(self.prefix.len() + message.len() + 48);
        render_header(&mut line, &self.prefix, self.flags, call_site, now)?;
        line.extend_from_slice(message.as_bytes());
        if !message.ends_with('\n') {
            line.push(b'\n');
        }

        let mut writer = self.lock_writer();
        writer.write_all(&line)?;
        writer.flush()
    }

    /// Flushes the destination.
    pub fn flush(&self) -> io::Result<()> {
        self.lock_writer().flush()
    }

    // A panic while writing must not silence the logger for every other thread.
    fn lock_writer(&self) -> MutexGuard<'_, Box<dyn Write + Send>> {
        self.writer
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
    }
}

impl fmt::Debug for LineLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineLogger")
            .field("prefix", &self.prefix)
            .field("flags", &self.flags)
            .finish_non_exhaustive()
    }
}
