//! crates/logging/src/tracing_bridge.rs
//! Bridge from the `tracing` crate onto a [`LevelLogger`].
//!
//! [`LevelLayer`] is a `tracing-subscriber` layer that renders each event as a
//! single line on a [`LevelLogger`], so code instrumented with the standard
//! `tracing` macros shares the leveled logger's destinations, prefixes and
//! threshold.
//!
//! # Level mapping
//!
//! | `tracing` | [`Level`] |
//! |-----------|-----------|
//! | `TRACE`   | `Debug`   |
//! | `DEBUG`   | `Debug`   |
//! | `INFO`    | `Info`    |
//! | `WARN`    | `Warn`    |
//! | `ERROR`   | `Error`   |
//!
//! Events never map to [`Level::Fatal`], so a `tracing` event cannot end the
//! process.
//!
//! # Usage
//!
//! ```rust,ignore
//! logging::init_tracing()?;
//! tracing::warn!(shard = 3, "replica lagging");
//! // [WARN]:2026/10/19 08:05:03 main.rs:2: replica lagging shard=3
//! ```

use std::fmt::{self, Write as _};

use logging_sink::CallSite;
use tracing::Subscriber;
use tracing::field::{Field, Visit};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

use super::global::default_logger;
use super::level_logger::LevelLogger;
use super::levels::Level;

/// A tracing layer that writes events through a [`LevelLogger`].
///
/// The default instance targets the process-wide logger returned by
/// [`default_logger`]. Any owner of a logger (`Arc<LevelLogger>`, `Box`, a
/// `&'static` reference) can be bridged with [`LevelLayer::new`].
#[derive(Debug, Clone)]
pub struct LevelLayer<L = &'static LevelLogger> {
    logger: L,
}

impl<L> LevelLayer<L>
where
    L: AsRef<LevelLogger>,
{
    /// Creates a layer writing to `logger`.
    #[must_use]
    pub const fn new(logger: L) -> Self {
        Self { logger }
    }

    /// Returns the logger events are written to.
    #[must_use]
    pub fn logger(&self) -> &LevelLogger {
        self.logger.as_ref()
    }
}

impl Default for LevelLayer {
    fn default() -> Self {
        Self::new(default_logger())
    }
}

/// Maps a `tracing` level onto the logger's levels.
#[must_use]
pub const fn map_level(level: &tracing::Level) -> Level {
    match *level {
        tracing::Level::TRACE | tracing::Level::DEBUG => Level::Debug,
        tracing::Level::INFO => Level::Info,
        tracing::Level::WARN => Level::Warn,
        tracing::Level::ERROR => Level::Error,
    }
}

impl<S, L> Layer<S> for LevelLayer<L>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    L: AsRef<LevelLogger> + Send + Sync + 'static,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let level = map_level(metadata.level());
        let logger = self.logger.as_ref();
        if !logger.enabled(level) {
            return;
        }

        let call_site = match (metadata.file(), metadata.line()) {
            (Some(file), Some(line)) => CallSite::new(file, line),
            _ => CallSite::unknown(),
        };

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        logger.log_at(level, &call_site, format_args!("{}", visitor.finish()));
    }
}

/// Collects the `message` field followed by the remaining fields as `name=value`.
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl MessageVisitor {
    fn finish(self) -> String {
        match (self.message.is_empty(), self.fields.is_empty()) {
            (_, true) => self.message,
            (true, false) => self.fields,
            (false, false) => format!("{} {}", self.message, self.fields),
        }
    }

    fn push_field(&mut self, field: &Field, value: fmt::Arguments<'_>) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        let _ = write!(self.fields, "{}={value}", field.name());
    }
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.push_field(field, format_args!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            value.clone_into(&mut self.message);
        } else {
            self.push_field(field, format_args!("{value}"));
        }
    }
}

/// Installs a global `tracing` subscriber that forwards every event to the
/// default logger.
///
/// Fails if a global subscriber has already been set.
pub fn init_tracing() -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(LevelLayer::default())
        .try_init()
}

/// Like [`init_tracing`], with `filter` applied before events reach the logger.
///
/// ```rust,ignore
/// use tracing_subscriber::EnvFilter;
///
/// logging::init_tracing_with_filter(EnvFilter::from_default_env())?;
/// ```
pub fn init_tracing_with_filter<F>(filter: F) -> Result<(), TryInitError>
where
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(filter)
        .with(LevelLayer::default())
        .try_init()
}
