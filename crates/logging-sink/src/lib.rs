#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` provides the line-oriented logger underneath the `logging`
//! facade. A [`LineLogger`] owns one destination, a literal prefix, and a set
//! of [`LineFlags`] selecting which header fields (date, time, microseconds,
//! call site) precede every message.
//!
//! # Design
//!
//! Each line is rendered into a scratch buffer first and then written to the
//! destination with a single `write_all` while the logger's mutex is held, so
//! concurrent callers never interleave within a line. Call sites are carried
//! as [`CallSite`] values that callers capture with `#[track_caller]`.
//!
//! # Invariants
//!
//! - Every call to [`LineLogger::output`] produces exactly one line ending in
//!   `\n`; a trailing newline already present in the message is not doubled.
//! - The prefix is written verbatim with no separator; with
//!   [`LineFlags::MSG_PREFIX`] it moves to just before the message body.
//! - [`LineFlags::SHORT_FILE`] takes precedence over [`LineFlags::LONG_FILE`].
//!
//! # Errors
//!
//! [`LineLogger::output`] surfaces [`std::io::Error`] values from the
//! destination and from timestamp formatting.
//!
//! # Examples
//!
//! ```
//! use logging_sink::{CallSite, LineFlags, LineLogger, SharedBuffer};
//!
//! let buffer = SharedBuffer::new();
//! let logger = LineLogger::new(
//!     buffer.clone(),
//!     "[WARN]:",
//!     LineFlags::STANDARD | LineFlags::SHORT_FILE | LineFlags::UTC,
//! );
//!
//! logger.output(&CallSite::new("src/disk.rs", 9), "disk low")?;
//!
//! let line = buffer.contents_lossy();
//! assert!(line.starts_with("[WARN]:"));
//! assert!(line.ends_with(" disk.rs:9: disk low\n"));
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! # See also
//!
//! - `logging` crate for severity levels, threshold filtering and the emit macros.

mod call_site;
mod flags;
mod header;
mod line_logger;
mod shared_buffer;

pub use call_site::CallSite;
pub use flags::LineFlags;
pub use header::current_timestamp;
pub use line_logger::LineLogger;
pub use shared_buffer::SharedBuffer;
