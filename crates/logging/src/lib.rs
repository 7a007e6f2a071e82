#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging/src/lib.rs
//!
//! # Overview
//!
//! `logging` is a leveled logging facade. A [`LevelLogger`] owns one
//! [`LineLogger`](logging_sink::LineLogger) per severity (DEBUG, INFO, WARN,
//! ERROR, FATAL) plus a threshold; a line is written only when its level is at
//! or above the threshold. A process-wide default logger backs the free
//! functions in [`global`] and the emit macros ([`debug!`], [`infof!`], ...).
//!
//! # Design
//!
//! - [`Level`] orders severities and carries the [`Level::Off`] sentinel that
//!   silences everything.
//! - [`LevelConfig`] chooses each level's [`Destination`], prefix and header
//!   flags. Defaults send FATAL to standard error and the rest to standard
//!   output, with the short call site on every level except INFO.
//! - The threshold is an atomic, so changing it never blocks emitters.
//! - FATAL writes its line, flushes, and aborts the process.
//! - With the `tracing` feature, [`LevelLayer`] forwards `tracing` events to a
//!   [`LevelLogger`].
//!
//! # Invariants
//!
//! - A line at level `L` appears iff `L >= threshold`.
//! - Suppressed calls perform no formatting and no I/O.
//! - Each emitted line is written atomically with respect to other lines of the
//!   same level.
//!
//! # Errors
//!
//! Emitting never fails: destination errors are dropped. Threshold updates from
//! integers report [`InvalidLevel`]; parsing a level name reports
//! [`ParseLevelError`].
//!
//! # Examples
//!
//! ```
//! use logging::{Level, LevelLogger, error, info, warnf};
//! use logging_sink::{LineFlags, SharedBuffer};
//!
//! let buffer = SharedBuffer::new();
//! let logger = LevelLogger::builder()
//!     .destination_for_all(buffer.clone())
//!     .flags_for_all(LineFlags::EMPTY)
//!     .threshold(Level::Info)
//!     .build();
//!
//! info!(logger: &logger; "listening on ", 8080);
//! warnf!(logger: &logger; "{} retries left", 2);
//! logger.set_threshold(Level::Error);
//! info!(logger: &logger; "hidden");
//! error!(logger: &logger; "shutting down");
//!
//! assert_eq!(
//!     buffer.lines(),
//!     vec![
//!         "[INFO]:listening on 8080",
//!         "[WARN]:2 retries left",
//!         "[ERROR]:shutting down",
//!     ]
//! );
//! ```
//!
//! # See also
//!
//! - `logging-sink` for line rendering and the header flags.

mod config;
mod errors;
pub mod global;
mod level_logger;
mod levels;
mod macros;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::{Destination, LevelConfig};
pub use errors::{InvalidLevel, ParseLevelError};
pub use global::{
    LEVEL_ENV_VAR, default_logger, enabled, init_from_env, install, level, level_from_env_value,
    set_level, set_threshold,
};
pub use level_logger::{LevelLogger, LevelLoggerBuilder};
pub use levels::Level;
#[cfg(feature = "tracing")]
pub use tracing_bridge::{LevelLayer, init_tracing, init_tracing_with_filter, map_level};
