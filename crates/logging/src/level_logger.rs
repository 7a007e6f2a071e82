//! crates/logging/src/level_logger.rs
//! Threshold-filtered facade over one line logger per level.

use std::fmt::{self, Display};
use std::io::Write;
use std::process;
use std::sync::atomic::{AtomicU8, Ordering};

use logging_sink::{CallSite, LineFlags, LineLogger};

use super::config::{Destination, LevelConfig};
use super::errors::InvalidLevel;
use super::levels::Level;

/// Leveled logger holding one [`LineLogger`] per emittable level and a
/// mutable threshold.
///
/// A line at level `L` is written if and only if `L >= threshold`. Lines below
/// the threshold cost one atomic load: nothing is formatted and nothing is
/// written.
///
/// # Threshold consistency
///
/// The threshold lives in an [`AtomicU8`]. [`set_level`](Self::set_level)
/// stores with `Release` ordering and every emit loads with `Acquire`, so an
/// emit that starts after `set_level` returns observes the new threshold. An
/// emit racing with `set_level` on another thread observes either the old or
/// the new value. Emitting never blocks on the threshold.
///
/// # FATAL
///
/// [`fatal`](Self::fatal) and [`fatalf`](Self::fatalf) write and flush the
/// line, then call [`std::process::abort`]. The termination is not a panic: it
/// cannot be intercepted with `catch_unwind`. With the threshold at
/// [`Level::Off`] both calls are no-ops and the process carries on.
///
/// # Examples
///
/// ```
/// use logging::{Level, LevelLogger};
/// use logging_sink::{LineFlags, SharedBuffer};
///
/// let buffer = SharedBuffer::new();
/// let logger = LevelLogger::builder()
///     .destination_for_all(buffer.clone())
///     .flags_for_all(LineFlags::EMPTY)
///     .build();
///
/// logger.set_level(3)?;
/// logger.debug(&[&"suppressed"]);
/// logger.error(&[&"disk ", &3, &" failed"]);
/// logger.errorf(format_args!("retry in {}s", 5));
///
/// assert_eq!(logger.level(), Level::Error);
/// assert_eq!(buffer.lines(), vec!["[ERROR]:disk 3 failed", "[ERROR]:retry in 5s"]);
/// # Ok::<(), logging::InvalidLevel>(())
/// ```
pub struct LevelLogger {
    loggers: [LineLogger; 5],
    threshold: AtomicU8,
}

impl LevelLogger {
    /// Creates a logger with the default configuration for every level and a
    /// threshold of [`Level::Debug`].
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Starts configuring a logger.
    #[must_use]
    pub fn builder() -> LevelLoggerBuilder {
        LevelLoggerBuilder::new()
    }

    /// Sets the threshold from an integer code in `0..=5`.
    ///
    /// Out-of-range codes are rejected with [`InvalidLevel`] and the current
    /// threshold is kept.
    pub fn set_level(&self, level: i64) -> Result<(), InvalidLevel> {
        let level = Level::from_code(level)?;
        self.set_threshold(level);
        Ok(())
    }

    /// Sets the threshold.
    pub fn set_threshold(&self, level: Level) {
        self.threshold.store(level.code(), Ordering::Release);
    }

    /// Returns the current threshold.
    #[must_use]
    pub fn level(&self) -> Level {
        Level::from_repr(self.threshold.load(Ordering::Acquire))
    }

    /// Reports whether a line at `level` would be written.
    #[must_use]
    pub fn enabled(&self, level: Level) -> bool {
        level.is_emittable() && level >= self.level()
    }

    /// Returns the underlying logger of an emittable level.
    #[must_use]
    pub fn line_logger(&self, level: Level) -> Option<&LineLogger> {
        level.slot().map(|slot| &self.loggers[slot])
    }

    /// Logs the concatenation of `values` at DEBUG.
    #[track_caller]
    pub fn debug(&self, values: &[&dyn Display]) {
        self.print(Level::Debug, values);
    }

    /// Logs formatted arguments at DEBUG.
    #[track_caller]
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.printf(Level::Debug, args);
    }

    /// Logs the concatenation of `values` at INFO.
    #[track_caller]
    pub fn info(&self, values: &[&dyn Display]) {
        self.print(Level::Info, values);
    }

    /// Logs formatted arguments at INFO.
    #[track_caller]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.printf(Level::Info, args);
    }

    /// Logs the concatenation of `values` at WARN.
    #[track_caller]
    pub fn warn(&self, values: &[&dyn Display]) {
        self.print(Level::Warn, values);
    }

    /// Logs formatted arguments at WARN.
    #[track_caller]
    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        self.printf(Level::Warn, args);
    }

    /// Logs the concatenation of `values` at ERROR.
    #[track_caller]
    pub fn error(&self, values: &[&dyn Display]) {
        self.print(Level::Error, values);
    }

    /// Logs formatted arguments at ERROR.
    #[track_caller]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.printf(Level::Error, args);
    }

    /// Logs the concatenation of `values` at FATAL, then aborts the process.
    ///
    /// Returns without doing anything when the threshold is [`Level::Off`].
    #[track_caller]
    pub fn fatal(&self, values: &[&dyn Display]) {
        self.print(Level::Fatal, values);
    }

    /// Logs formatted arguments at FATAL, then aborts the process.
    ///
    /// Returns without doing anything when the threshold is [`Level::Off`].
    #[track_caller]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) {
        self.printf(Level::Fatal, args);
    }

    /// Logs formatted arguments at `level`.
    ///
    /// [`Level::Fatal`] follows the FATAL contract; [`Level::Off`] is ignored.
    #[track_caller]
    pub fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        self.printf(level, args);
    }

    /// Logs formatted arguments at `level`, attributed to an explicit call site.
    ///
    /// Used by integrations that already know where a record originated, such
    /// as the `tracing` bridge.
    pub fn log_at(&self, level: Level, call_site: &CallSite, args: fmt::Arguments<'_>) {
        if self.enabled(level) {
            self.emit(level, call_site, &args.to_string());
        }
    }

    #[track_caller]
    fn print(&self, level: Level, values: &[&dyn Display]) {
        if self.enabled(level) {
            self.emit(level, &CallSite::caller(), &Concat(values).to_string());
        }
    }

    #[track_caller]
    fn printf(&self, level: Level, args: fmt::Arguments<'_>) {
        if self.enabled(level) {
            self.emit(level, &CallSite::caller(), &args.to_string());
        }
    }

    fn emit(&self, level: Level, call_site: &CallSite, message: &str) {
        let Some(logger) = self.line_logger(level) else {
            return;
        };
        // Destination failures are not reported to callers.
        let _ = logger.output(call_site, message);

        if level == Level::Fatal {
            terminate();
        }
    }
}

impl Default for LevelLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Self> for LevelLogger {
    fn as_ref(&self) -> &Self {
        self
    }
}

impl fmt::Debug for LevelLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LevelLogger")
            .field("threshold", &self.level())
            .field("loggers", &self.loggers)
            .finish()
    }
}

/// Ends the process after a FATAL line has been written.
fn terminate() -> ! {
    process::abort()
}

/// Renders each value's `Display` output back to back, with no separator.
struct Concat<'a>(&'a [&'a dyn Display]);

impl Display for Concat<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.0 {
            Display::fmt(value, f)?;
        }
        Ok(())
    }
}

/// Builder for [`LevelLogger`].
///
/// Starts from [`LevelConfig::default_for`] for every level and a threshold of
/// [`Level::Debug`]. Settings addressed to [`Level::Off`] are ignored since
/// that level never emits.
#[derive(Debug)]
pub struct LevelLoggerBuilder {
    configs: [LevelConfig; 5],
    threshold: Level,
}

impl LevelLoggerBuilder {
    fn new() -> Self {
        Self {
            configs: Level::EMITTABLE.map(LevelConfig::default_for),
            threshold: Level::Debug,
        }
    }

    /// Replaces the whole configuration of `level`.
    #[must_use]
    pub fn config(mut self, level: Level, config: LevelConfig) -> Self {
        if let Some(slot) = level.slot() {
            self.configs[slot] = config;
        }
        self
    }

    /// Replaces the destination of `level`.
    #[must_use]
    pub fn destination(mut self, level: Level, destination: Destination) -> Self {
        if let Some(slot) = level.slot() {
            self.configs[slot].destination = destination;
        }
        self
    }

    /// Sends every level to its own clone of `writer`.
    #[must_use]
    pub fn destination_for_all<W>(mut self, writer: W) -> Self
    where
        W: Write + Send + Clone + 'static,
    {
        for config in &mut self.configs {
            config.destination = Destination::writer(writer.clone());
        }
        self
    }

    /// Replaces the prefix of `level`.
    #[must_use]
    pub fn prefix(mut self, level: Level, prefix: impl Into<String>) -> Self {
        if let Some(slot) = level.slot() {
            self.configs[slot].prefix = prefix.into();
        }
        self
    }

    /// Replaces the header flags of `level`.
    #[must_use]
    pub fn flags(mut self, level: Level, flags: LineFlags) -> Self {
        if let Some(slot) = level.slot() {
            self.configs[slot].flags = flags;
        }
        self
    }

    /// Replaces the header flags of every level.
    #[must_use]
    pub fn flags_for_all(mut self, flags: LineFlags) -> Self {
        for config in &mut self.configs {
            config.flags = flags;
        }
        self
    }

    /// Sets the initial threshold.
    #[must_use]
    pub fn threshold(mut self, level: Level) -> Self {
        self.threshold = level;
        self
    }

    /// Builds the logger. Per-level configuration is fixed from here on.
    #[must_use]
    pub fn build(self) -> LevelLogger {
        LevelLogger {
            loggers: self.configs.map(LevelConfig::into_line_logger),
            threshold: AtomicU8::new(self.threshold.code()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logging_sink::SharedBuffer;

    fn capture(threshold: Level) -> (LevelLogger, SharedBuffer) {
        let buffer = SharedBuffer::new();
        let logger = LevelLogger::builder()
            .destination_for_all(buffer.clone())
            .flags_for_all(LineFlags::EMPTY)
            .threshold(threshold)
            .build();
        (logger, buffer)
    }

    #[test]
    fn new_logger_shows_everything() {
        let logger = LevelLogger::new();
        assert_eq!(logger.level(), Level::Debug);
        assert!(Level::EMITTABLE.iter().all(|level| logger.enabled(*level)));
        assert!(!logger.enabled(Level::Off));
    }

    #[test]
    fn print_concatenates_without_separator() {
        let (logger, buffer) = capture(Level::Debug);
        logger.info(&[&"a", &1, &"b"]);
        assert_eq!(buffer.lines(), vec!["[INFO]:a1b"]);
    }

    #[test]
    fn printf_substitutes_positionally() {
        let (logger, buffer) = capture(Level::Debug);
        logger.infof(format_args!("x={}", 5));
        logger.warnf(format_args!("{1}-{0}", "b", "a"));
        assert_eq!(buffer.lines(), vec!["[INFO]:x=5", "[WARN]:a-b"]);
    }

    #[test]
    fn empty_value_list_logs_empty_body() {
        let (logger, buffer) = capture(Level::Debug);
        logger.debug(&[]);
        assert_eq!(buffer.contents_lossy(), "[DEBUG]:\n");
    }

    #[test]
    fn lines_below_threshold_are_dropped() {
        let (logger, buffer) = capture(Level::Warn);
        logger.debug(&[&"d"]);
        logger.info(&[&"i"]);
        logger.warn(&[&"w"]);
        logger.error(&[&"e"]);
        assert_eq!(buffer.lines(), vec!["[WARN]:w", "[ERROR]:e"]);
    }

    #[test]
    fn suppressed_calls_do_not_format_arguments() {
        struct Panics;

        impl Display for Panics {
            fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
                panic!("formatted a suppressed value");
            }
        }

        let (logger, buffer) = capture(Level::Error);
        logger.debug(&[&Panics]);
        logger.warnf(format_args!("{}", Panics));
        assert!(buffer.is_empty());
    }

    #[test]
    fn set_level_rejects_out_of_range_codes() {
        let (logger, _) = capture(Level::Warn);
        let error = logger.set_level(99).expect_err("invalid level");
        assert_eq!(error.value(), 99);
        assert_eq!(logger.level(), Level::Warn);

        assert!(logger.set_level(-1).is_err());
        assert_eq!(logger.level(), Level::Warn);
    }

    #[test]
    fn set_level_accepts_every_code() {
        let (logger, _) = capture(Level::Debug);
        for level in Level::ALL {
            logger
                .set_level(i64::from(level.code()))
                .expect("valid level");
            assert_eq!(logger.level(), level);
        }
    }

    #[test]
    fn fatal_is_a_no_op_when_off() {
        let (logger, buffer) = capture(Level::Off);
        logger.fatal(&[&"not logged"]);
        logger.fatalf(format_args!("{}", "not logged"));
        logger.log(Level::Fatal, format_args!("not logged"));
        assert!(buffer.is_empty());
    }

    #[test]
    fn log_dispatches_by_level() {
        let (logger, buffer) = capture(Level::Debug);
        logger.log(Level::Error, format_args!("boom"));
        logger.log(Level::Off, format_args!("never"));
        assert_eq!(buffer.lines(), vec!["[ERROR]:boom"]);
    }

    #[test]
    fn log_at_uses_the_given_call_site() {
        let buffer = SharedBuffer::new();
        let logger = LevelLogger::builder()
            .destination_for_all(buffer.clone())
            .flags_for_all(LineFlags::SHORT_FILE)
            .build();

        logger.log_at(
            Level::Warn,
            &CallSite::new("src/cache/evict.rs", 31),
            format_args!("evicted {}", 4),
        );
        assert_eq!(buffer.lines(), vec!["[WARN]:evict.rs:31: evicted 4"]);
    }

    #[test]
    fn call_site_points_at_the_caller() {
        let buffer = SharedBuffer::new();
        let logger = LevelLogger::builder()
            .destination_for_all(buffer.clone())
            .flags_for_all(LineFlags::SHORT_FILE)
            .build();

        let line = line!() + 1;
        logger.error(&[&"here"]);
        assert_eq!(
            buffer.lines(),
            vec![format!("[ERROR]:level_logger.rs:{line}: here")]
        );
    }

    #[test]
    fn builder_overrides_single_level() {
        let info = SharedBuffer::new();
        let rest = SharedBuffer::new();
        let logger = LevelLogger::builder()
            .destination_for_all(rest.clone())
            .flags_for_all(LineFlags::EMPTY)
            .destination(Level::Info, Destination::writer(info.clone()))
            .prefix(Level::Info, "I ")
            .prefix(Level::Off, "ignored")
            .flags(Level::Off, LineFlags::UTC)
            .build();

        logger.info(&[&"to info"]);
        logger.warn(&[&"to rest"]);

        assert_eq!(info.lines(), vec!["I to info"]);
        assert_eq!(rest.lines(), vec!["[WARN]:to rest"]);
        assert!(logger.line_logger(Level::Off).is_none());
    }

    #[test]
    fn builder_config_replaces_everything() {
        let buffer = SharedBuffer::new();
        let logger = LevelLogger::builder()
            .config(
                Level::Debug,
                LevelConfig::new(Destination::writer(buffer.clone()), "dbg|", LineFlags::EMPTY),
            )
            .build();

        logger.debugf(format_args!("{}", 1));
        assert_eq!(buffer.lines(), vec!["dbg|1"]);
        let line_logger = logger.line_logger(Level::Debug).expect("debug logger");
        assert_eq!(line_logger.prefix(), "dbg|");
    }

    #[test]
    fn debug_output_reports_threshold() {
        let (logger, _) = capture(Level::Error);
        assert!(format!("{logger:?}").contains("threshold: Error"));
    }
}
