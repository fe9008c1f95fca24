#![deny(missing_docs)]
//! Shared logging utilities for the board workspace.
//!
//! This crate provides the `board_*` logging macros used across the codebase
//! and a minimal test initializer for the global logger. Every message is
//! prefixed with the sequence number of the gesture being handled so that a
//! log line can be traced back to the user action that caused it.

use std::cell::Cell;

thread_local! {
    /// Thread-local storage for the sequence number of the current gesture.
    static GESTURE_SEQ: Cell<u64> = const { Cell::new(0) };
}

/// Sets the gesture sequence number for the current thread.
/// Hosts call this once per dispatched message.
pub fn set_gesture_seq(seq: u64) {
    GESTURE_SEQ.with(|v| v.set(seq));
}

/// Retrieves the gesture sequence number for the current thread.
/// Returns 0 if no gesture has been dispatched yet.
pub fn gesture_seq() -> u64 {
    GESTURE_SEQ.with(|v| v.get())
}

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! board_trace {
    ($($arg:tt)*) => {{
        log::trace!("[g{}] {}", $crate::gesture_seq(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! board_info {
    ($($arg:tt)*) => {{
        log::info!("[g{}] {}", $crate::gesture_seq(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! board_debug {
    ($($arg:tt)*) => {{
        log::debug!("[g{}] {}", $crate::gesture_seq(), format_args!($($arg)*));
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! board_warn {
    ($($arg:tt)*) => {{
        log::warn!("[g{}] {}", $crate::gesture_seq(), format_args!($($arg)*));
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! board_error {
    ($($arg:tt)*) => {{
        log::error!("[g{}] {}", $crate::gesture_seq(), format_args!($($arg)*));
    }};
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
