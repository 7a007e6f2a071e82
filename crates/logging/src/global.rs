//! crates/logging/src/global.rs
//! Process-wide default [`LevelLogger`] and free-function wrappers around it.

use std::env;
use std::ffi::OsStr;
use std::fmt::{self, Display};
use std::sync::OnceLock;

use super::errors::{InvalidLevel, ParseLevelError};
use super::level_logger::LevelLogger;
use super::levels::Level;

/// Environment variable consulted by [`init_from_env`].
pub const LEVEL_ENV_VAR: &str = "SLOG_LEVEL";

static DEFAULT_LOGGER: OnceLock<LevelLogger> = OnceLock::new();

/// Returns the process-wide logger, creating it with the default
/// configuration on first use.
pub fn default_logger() -> &'static LevelLogger {
    DEFAULT_LOGGER.get_or_init(LevelLogger::new)
}

/// Installs `logger` as the process-wide logger.
///
/// Must run before anything touches the default logger; once it exists the
/// rejected logger is handed back.
#[allow(clippy::result_large_err)]
pub fn install(logger: LevelLogger) -> Result<(), LevelLogger> {
    DEFAULT_LOGGER.set(logger)
}

/// Sets the default logger's threshold from an integer code in `0..=5`.
pub fn set_level(level: i64) -> Result<(), InvalidLevel> {
    default_logger().set_level(level)
}

/// Sets the default logger's threshold.
pub fn set_threshold(level: Level) {
    default_logger().set_threshold(level);
}

/// Returns the default logger's threshold.
pub fn level() -> Level {
    default_logger().level()
}

/// Reports whether the default logger writes lines at `level`.
pub fn enabled(level: Level) -> bool {
    default_logger().enabled(level)
}

/// Applies [`LEVEL_ENV_VAR`] to the default logger's threshold.
///
/// Returns the level that was applied, or `None` when the variable is unset.
/// An unparsable value is reported and the threshold is left as it was.
pub fn init_from_env() -> Result<Option<Level>, ParseLevelError> {
    let level = level_from_env_value(env::var_os(LEVEL_ENV_VAR).as_deref())?;
    if let Some(level) = level {
        set_threshold(level);
    }
    Ok(level)
}

/// Interprets the raw value of [`LEVEL_ENV_VAR`].
///
/// An unset or blank variable yields `None`.
///
/// ```
/// use std::ffi::OsStr;
/// use logging::{Level, level_from_env_value};
///
/// assert_eq!(level_from_env_value(None), Ok(None));
/// assert_eq!(level_from_env_value(Some(OsStr::new("warn"))), Ok(Some(Level::Warn)));
/// assert!(level_from_env_value(Some(OsStr::new("loud"))).is_err());
/// ```
pub fn level_from_env_value(value: Option<&OsStr>) -> Result<Option<Level>, ParseLevelError> {
    let Some(value) = value else {
        return Ok(None);
    };
    let text = value.to_string_lossy();
    if text.trim().is_empty() {
        return Ok(None);
    }
    text.parse().map(Some)
}

/// Logs the concatenation of `values` at DEBUG on the default logger.
#[track_caller]
pub fn debug(values: &[&dyn Display]) {
    default_logger().debug(values);
}

/// Logs formatted arguments at DEBUG on the default logger.
#[track_caller]
pub fn debugf(args: fmt::Arguments<'_>) {
    default_logger().debugf(args);
}

/// Logs the concatenation of `values` at INFO on the default logger.
#[track_caller]
pub fn info(values: &[&dyn Display]) {
    default_logger().info(values);
}

/// Logs formatted arguments at INFO on the default logger.
#[track_caller]
pub fn infof(args: fmt::Arguments<'_>) {
    default_logger().infof(args);
}

/// Logs the concatenation of `values` at WARN on the default logger.
#[track_caller]
pub fn warn(values: &[&dyn Display]) {
    default_logger().warn(values);
}

/// Logs formatted arguments at WARN on the default logger.
#[track_caller]
pub fn warnf(args: fmt::Arguments<'_>) {
    default_logger().warnf(args);
}

/// Logs the concatenation of `values` at ERROR on the default logger.
#[track_caller]
pub fn error(values: &[&dyn Display]) {
    default_logger().error(values);
}

/// Logs formatted arguments at ERROR on the default logger.
#[track_caller]
pub fn errorf(args: fmt::Arguments<'_>) {
    default_logger().errorf(args);
}

/// Logs at FATAL on the default logger and aborts, unless the threshold is OFF.
#[track_caller]
pub fn fatal(values: &[&dyn Display]) {
    default_logger().fatal(values);
}

/// Logs formatted arguments at FATAL on the default logger and aborts, unless
/// the threshold is OFF.
#[track_caller]
pub fn fatalf(args: fmt::Arguments<'_>) {
    default_logger().fatalf(args);
}
