//! crates/logging-sink/src/shared_buffer.rs
//! Cloneable in-memory destination used to capture logged lines.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard};

/// In-memory writer whose clones share one byte buffer.
///
/// Hand one clone to a [`LineLogger`](crate::LineLogger) and keep another to
/// inspect what was written.
///
/// ```
/// use std::io::Write;
/// use logging_sink::SharedBuffer;
///
/// let buffer = SharedBuffer::new();
/// let mut writer = buffer.clone();
/// writer.write_all(b"one\ntwo\n")?;
///
/// assert_eq!(buffer.lines(), vec!["one", "two"]);
/// assert_eq!(buffer.take(), b"one\ntwo\n".to_vec());
/// assert!(buffer.is_empty());
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the captured bytes.
    #[must_use]
    pub fn contents(&self) -> Vec<u8> {
        self.lock().clone()
    }

    /// Returns the captured bytes as text, replacing invalid UTF-8.
    #[must_use]
    pub fn contents_lossy(&self) -> String {
        String::from_utf8_lossy(&self.lock()).into_owned()
    }

    /// Returns the captured text split into lines.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.contents_lossy().lines().map(str::to_owned).collect()
    }

    /// Removes and returns the captured bytes.
    pub fn take(&self) -> Vec<u8> {
        std::mem::take(&mut *self.lock())
    }

    /// Reports whether nothing has been captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<u8>> {
        self.bytes
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.lock().extend_from_slice(buf);
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_storage() {
        let buffer = SharedBuffer::new();
        let mut writer = buffer.clone();
        writer.write_all(b"abc").expect("write succeeds");
        assert_eq!(buffer.contents(), b"abc".to_vec());
    }

    #[test]
    fn take_drains_the_buffer() {
        let buffer = SharedBuffer::new();
        let mut writer = buffer.clone();
        writer.write_all(b"line\n").expect("write succeeds");

        assert_eq!(buffer.take(), b"line\n".to_vec());
        assert!(buffer.is_empty());
        assert!(buffer.lines().is_empty());
    }
}
