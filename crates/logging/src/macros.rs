//! crates/logging/src/macros.rs
//! Emit macros for the default logger or an explicit [`LevelLogger`](crate::LevelLogger).
//!
//! The unformatted macros (`debug!`, `info!`, ...) concatenate the `Display`
//! output of their arguments with no separator. The formatted macros
//! (`debugf!`, `infof!`, ...) accept [`format_args!`] syntax. Every macro
//! checks the threshold before evaluating its arguments and accepts an
//! explicit logger as `logger: <expr>;` in front of the arguments.

#[doc(hidden)]
#[macro_export]
macro_rules! __emit_values {
    ($logger:expr, $method:ident, $level:expr, $($value:expr),+) => {{
        let logger: &$crate::LevelLogger = $logger;
        if logger.enabled($level) {
            logger.$method(&[$(&$value as &dyn ::core::fmt::Display),+]);
        }
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __emit_format {
    ($logger:expr, $method:ident, $level:expr, $($arg:tt)+) => {{
        let logger: &$crate::LevelLogger = $logger;
        if logger.enabled($level) {
            logger.$method(::core::format_args!($($arg)+));
        }
    }};
}

/// Logs the concatenation of the arguments at DEBUG.
///
/// ```
/// use logging::{LevelLogger, debug};
/// use logging_sink::{LineFlags, SharedBuffer};
///
/// let buffer = SharedBuffer::new();
/// let logger = LevelLogger::builder()
///     .destination_for_all(buffer.clone())
///     .flags_for_all(LineFlags::EMPTY)
///     .build();
///
/// debug!(logger: &logger; "cache ", "hit ", 3);
/// assert_eq!(buffer.lines(), vec!["[DEBUG]:cache hit 3"]);
/// ```
#[macro_export]
macro_rules! debug {
    (logger: $logger:expr; $($value:expr),+ $(,)?) => {
        $crate::__emit_values!($logger, debug, $crate::Level::Debug, $($value),+)
    };
    ($($value:expr),+ $(,)?) => {
        $crate::__emit_values!($crate::default_logger(), debug, $crate::Level::Debug, $($value),+)
    };
}

/// Logs formatted arguments at DEBUG.
#[macro_export]
macro_rules! debugf {
    (logger: $logger:expr; $($arg:tt)+) => {
        $crate::__emit_format!($logger, debugf, $crate::Level::Debug, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__emit_format!($crate::default_logger(), debugf, $crate::Level::Debug, $($arg)+)
    };
}

/// Logs the concatenation of the arguments at INFO.
#[macro_export]
macro_rules! info {
    (logger: $logger:expr; $($value:expr),+ $(,)?) => {
        $crate::__emit_values!($logger, info, $crate::Level::Info, $($value),+)
    };
    ($($value:expr),+ $(,)?) => {
        $crate::__emit_values!($crate::default_logger(), info, $crate::Level::Info, $($value),+)
    };
}

/// Logs formatted arguments at INFO.
///
/// ```
/// use logging::{LevelLogger, infof};
/// use logging_sink::{LineFlags, SharedBuffer};
///
/// let buffer = SharedBuffer::new();
/// let logger = LevelLogger::builder()
///     .destination_for_all(buffer.clone())
///     .flags_for_all(LineFlags::EMPTY)
///     .build();
///
/// infof!(logger: &logger; "x={}", 5);
/// assert_eq!(buffer.lines(), vec!["[INFO]:x=5"]);
/// ```
#[macro_export]
macro_rules! infof {
    (logger: $logger:expr; $($arg:tt)+) => {
        $crate::__emit_format!($logger, infof, $crate::Level::Info, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__emit_format!($crate::default_logger(), infof, $crate::Level::Info, $($arg)+)
    };
}

/// Logs the concatenation of the arguments at WARN.
#[macro_export]
macro_rules! warn {
    (logger: $logger:expr; $($value:expr),+ $(,)?) => {
        $crate::__emit_values!($logger, warn, $crate::Level::Warn, $($value),+)
    };
    ($($value:expr),+ $(,)?) => {
        $crate::__emit_values!($crate::default_logger(), warn, $crate::Level::Warn, $($value),+)
    };
}

/// Logs formatted arguments at WARN.
#[macro_export]
macro_rules! warnf {
    (logger: $logger:expr; $($arg:tt)+) => {
        $crate::__emit_format!($logger, warnf, $crate::Level::Warn, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__emit_format!($crate::default_logger(), warnf, $crate::Level::Warn, $($arg)+)
    };
}

/// Logs the concatenation of the arguments at ERROR.
#[macro_export]
macro_rules! error {
    (logger: $logger:expr; $($value:expr),+ $(,)?) => {
        $crate::__emit_values!($logger, error, $crate::Level::Error, $($value),+)
    };
    ($($value:expr),+ $(,)?) => {
        $crate::__emit_values!($crate::default_logger(), error, $crate::Level::Error, $($value),+)
    };
}

/// Logs formatted arguments at ERROR.
#[macro_export]
macro_rules! errorf {
    (logger: $logger:expr; $($arg:tt)+) => {
        $crate::__emit_format!($logger, errorf, $crate::Level::Error, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__emit_format!($crate::default_logger(), errorf, $crate::Level::Error, $($arg)+)
    };
}

/// Logs the concatenation of the arguments at FATAL and aborts the process.
///
/// Does nothing when the threshold is [`Level::Off`](crate::Level::Off).
#[macro_export]
macro_rules! fatal {
    (logger: $logger:expr; $($value:expr),+ $(,)?) => {
        $crate::__emit_values!($logger, fatal, $crate::Level::Fatal, $($value),+)
    };
    ($($value:expr),+ $(,)?) => {
        $crate::__emit_values!($crate::default_logger(), fatal, $crate::Level::Fatal, $($value),+)
    };
}

/// Logs formatted arguments at FATAL and aborts the process.
///
/// Does nothing when the threshold is [`Level::Off`](crate::Level::Off).
#[macro_export]
macro_rules! fatalf {
    (logger: $logger:expr; $($arg:tt)+) => {
        $crate::__emit_format!($logger, fatalf, $crate::Level::Fatal, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__emit_format!($crate::default_logger(), fatalf, $crate::Level::Fatal, $($arg)+)
    };
}
