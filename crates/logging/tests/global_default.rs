//! Integration tests for the process-wide default logger.
//!
//! Every test in this binary shares one default logger, installed once with a
//! captured destination. Tests that touch it hold `GUARD` so threshold changes
//! and captured output do not leak between them.

use std::sync::{Mutex, MutexGuard, OnceLock};

use logging::{Level, LevelLogger, debug, errorf, fatal, info, warnf};
use logging_sink::{LineFlags, SharedBuffer};

static BUFFER: OnceLock<SharedBuffer> = OnceLock::new();
static GUARD: Mutex<()> = Mutex::new(());

/// Installs the captured default logger on first use and resets it.
fn setup() -> (MutexGuard<'static, ()>, &'static SharedBuffer) {
    let guard = GUARD.lock().unwrap_or_else(|poison| poison.into_inner());
    let buffer = BUFFER.get_or_init(|| {
        let buffer = SharedBuffer::new();
        let logger = LevelLogger::builder()
            .destination_for_all(buffer.clone())
            .flags_for_all(LineFlags::EMPTY)
            .build();
        logging::install(logger).expect("default logger not yet created");
        buffer
    });
    logging::set_threshold(Level::Debug);
    buffer.take();
    (guard, buffer)
}

// ============================================================================
// Macros and Free Functions
// ============================================================================

/// Verifies the macros write through the installed default logger.
#[test]
fn macros_use_default_logger() {
    let (_guard, buffer) = setup();

    info!("a", 1, "b");
    warnf!("x={}", 5);

    assert_eq!(buffer.lines(), vec!["[INFO]:a1b", "[WARN]:x=5"]);
}

/// Verifies the free functions share the default logger's threshold.
#[test]
fn free_functions_follow_threshold() {
    let (_guard, buffer) = setup();

    logging::set_level(3).expect("valid level");
    assert_eq!(logging::level(), Level::Error);
    assert!(!logging::enabled(Level::Warn));

    logging::global::debug(&[&"x"]);
    logging::global::error(&[&"y"]);
    logging::global::errorf(format_args!("{}-{}", "z", 2));

    assert_eq!(buffer.lines(), vec!["[ERROR]:y", "[ERROR]:z-2"]);
}

/// Verifies a rejected code leaves the default threshold alone.
#[test]
fn invalid_code_is_rejected() {
    let (_guard, buffer) = setup();

    logging::set_threshold(Level::Warn);
    assert!(logging::set_level(99).is_err());
    assert_eq!(logging::level(), Level::Warn);

    debug!("hidden");
    errorf!("{}", "shown");
    assert_eq!(buffer.lines(), vec!["[ERROR]:shown"]);
}

/// Verifies FATAL on the default logger is a no-op once the threshold is OFF.
#[test]
fn fatal_is_silent_when_off() {
    let (_guard, buffer) = setup();

    logging::set_threshold(Level::Off);
    fatal!("unreachable");
    logging::global::fatalf(format_args!("unreachable"));

    assert!(buffer.is_empty());
}

// ============================================================================
// Installation
// ============================================================================

/// Verifies a second install is refused and the logger handed back.
#[test]
fn second_install_is_rejected() {
    let (_guard, _buffer) = setup();

    let rejected = logging::install(LevelLogger::new()).expect_err("already installed");
    assert_eq!(rejected.level(), Level::Debug);
    assert!(std::ptr::eq(logging::default_logger(), logging::default_logger()));
}
