//! Leveled logging with compile-time feature gates.
//!
//! The CLI talks to the user on stdout, so diagnostics ride on these macros
//! where they can be filtered, silenced, or redirected without disturbing
//! command output. `error!` and `warn!` are always compiled in and print to
//! stderr. `info!` and `debug!` exist behind the `log-info` and `log-debug`
//! features and print to stdout. Once a log file has been registered
//! (`file-logging` feature), every leveled message is appended there with a
//! UTC timestamp instead of reaching the terminal.
//!
//! `verbose!` sits apart from the leveled macros: it prints plain status
//! lines when the user asked for chatty output, and never lands in the log
//! file.

use std::fmt::Arguments;
use std::path::Path;
#[cfg(any(feature = "log-debug", feature = "verbose"))]
use std::sync::atomic::AtomicBool;
use std::sync::atomic::{AtomicU8, Ordering};

#[cfg(feature = "file-logging")]
use std::{
    fs::{File, OpenOptions},
    io::Write,
    sync::Mutex,
};

#[cfg(feature = "file-logging")]
use chrono::Utc;

/// Severity attached to every log message.
///
/// Discriminants order the levels so one threshold comparison decides
/// whether a message passes the runtime filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Level {
    /// Failures the user must act on.
    Error = 1,
    /// Recoverable problems worth surfacing.
    Warn = 2,
    /// High-level progress notes (`log-info` feature).
    Info = 3,
    /// Diagnostic detail (`log-debug` feature, toggleable at runtime).
    Debug = 4,
}

impl Level {
    /// Bracketed tag that prefixes terminal and file output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Error => "[ERROR]",
            Self::Warn => "[WARN]",
            Self::Info => "[INFO]",
            Self::Debug => "[DEBUG]",
        }
    }

    /// Whether this level prints to stderr rather than stdout.
    const fn routes_to_stderr(self) -> bool {
        matches!(self, Self::Error | Self::Warn)
    }

    /// Case-insensitive parse of a level name, accepting common aliases.
    fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "error" | "err" => Some(Self::Error),
            "warn" | "warning" => Some(Self::Warn),
            "info" => Some(Self::Info),
            "debug" => Some(Self::Debug),
            _ => None,
        }
    }
}

/// Highest level this build can emit, used as the starting threshold.
const fn compiled_default() -> u8 {
    if cfg!(feature = "log-debug") {
        Level::Debug as u8
    } else if cfg!(feature = "log-info") {
        Level::Info as u8
    } else {
        Level::Warn as u8
    }
}

// Runtime threshold; messages above it are dropped.
static MAX_LEVEL: AtomicU8 = AtomicU8::new(compiled_default());

// Runtime switch for debug! output, on by default in debug-capable builds.
#[cfg(feature = "log-debug")]
static DEBUG_ENABLED: AtomicBool = AtomicBool::new(true);

// Runtime switch for verbose! output, off until requested.
#[cfg(feature = "verbose")]
static VERBOSE_ENABLED: AtomicBool = AtomicBool::new(false);

// Registered log file, if any.
#[cfg(feature = "file-logging")]
static LOG_SINK: Mutex<Option<File>> = Mutex::new(None);

/// Set the runtime level threshold.
pub fn set_level(level: Level) {
    MAX_LEVEL.store(level as u8, Ordering::SeqCst);
}

/// Set the threshold from a level name such as `"warn"`.
///
/// Returns `false` when the name is not a known level, leaving the current
/// threshold in place.
#[must_use]
pub fn set_level_from_str(name: &str) -> bool {
    match Level::parse(name) {
        Some(level) => {
            set_level(level);
            true
        }
        None => false,
    }
}

/// Let `debug!` messages through the runtime filter.
#[cfg(feature = "log-debug")]
pub fn enable_debug() {
    DEBUG_ENABLED.store(true, Ordering::SeqCst);
}

/// Let `debug!` messages through the runtime filter (no-op in this build).
#[cfg(not(feature = "log-debug"))]
pub fn enable_debug() {}

/// Drop `debug!` messages regardless of the level threshold.
#[cfg(feature = "log-debug")]
pub fn disable_debug() {
    DEBUG_ENABLED.store(false, Ordering::SeqCst);
}

/// Drop `debug!` messages regardless of the level threshold (no-op in this
/// build).
#[cfg(not(feature = "log-debug"))]
pub fn disable_debug() {}

/// Whether `debug!` output is currently allowed.
#[cfg(feature = "log-debug")]
#[must_use]
pub fn is_debug_enabled() -> bool {
    DEBUG_ENABLED.load(Ordering::SeqCst)
}

/// Whether `debug!` output is currently allowed. Always `false` in this
/// build.
#[cfg(not(feature = "log-debug"))]
#[must_use]
pub const fn is_debug_enabled() -> bool {
    false
}

/// Turn on `verbose!` status lines.
#[cfg(feature = "verbose")]
pub fn enable_verbose() {
    VERBOSE_ENABLED.store(true, Ordering::SeqCst);
}

/// Turn on `verbose!` status lines (no-op in this build).
#[cfg(not(feature = "verbose"))]
pub fn enable_verbose() {}

/// Turn off `verbose!` status lines.
#[cfg(feature = "verbose")]
pub fn disable_verbose() {
    VERBOSE_ENABLED.store(false, Ordering::SeqCst);
}

/// Turn off `verbose!` status lines (no-op in this build).
#[cfg(not(feature = "verbose"))]
pub fn disable_verbose() {}

/// Whether `verbose!` status lines are currently printed.
#[cfg(feature = "verbose")]
#[must_use]
pub fn is_verbose_enabled() -> bool {
    VERBOSE_ENABLED.load(Ordering::SeqCst)
}

/// Whether `verbose!` status lines are currently printed. Always `false` in
/// this build.
#[cfg(not(feature = "verbose"))]
#[must_use]
pub const fn is_verbose_enabled() -> bool {
    false
}

/// Append subsequent leveled log output to the file at `path`.
///
/// Returns `false` when the file cannot be opened; terminal logging then
/// continues unchanged.
#[cfg(feature = "file-logging")]
#[must_use]
pub fn init_file_logging(path: &Path) -> bool {
    let Ok(file) = OpenOptions::new().create(true).append(true).open(path) else {
        return false;
    };
    match LOG_SINK.lock() {
        Ok(mut sink) => {
            *sink = Some(file);
            true
        }
        Err(_) => false,
    }
}

/// Append subsequent leveled log output to a file. Built without the
/// `file-logging` feature, so this always returns `false`.
#[cfg(not(feature = "file-logging"))]
#[must_use]
pub fn init_file_logging(_path: &Path) -> bool {
    false
}

/// Append a timestamped line to the registered log file.
///
/// Returns `true` when the sink took the message, in which case terminal
/// output is skipped.
#[cfg(feature = "file-logging")]
fn write_to_sink(line: &str) -> bool {
    let Ok(mut sink) = LOG_SINK.lock() else {
        return false;
    };
    let Some(file) = sink.as_mut() else {
        return false;
    };
    let stamp = Utc::now().format("%Y-%m-%d %H:%M:%S");
    let _ = writeln!(file, "{stamp} {line}");
    let _ = file.flush();
    true
}

#[cfg(not(feature = "file-logging"))]
fn write_to_sink(_line: &str) -> bool {
    false
}

/// Apply the compile-time gates and the runtime threshold.
fn enabled(level: Level) -> bool {
    let compiled_in = match level {
        Level::Error | Level::Warn => true,
        Level::Info => cfg!(feature = "log-info"),
        Level::Debug => cfg!(feature = "log-debug") && is_debug_enabled(),
    };
    compiled_in && level as u8 <= MAX_LEVEL.load(Ordering::SeqCst)
}

/// Dispatcher behind the logging macros; application code should prefer the
/// macros.
pub fn log_impl(level: Level, args: Arguments) {
    if !enabled(level) {
        return;
    }
    let line = format!("{} {args}", level.label());
    if write_to_sink(&line) {
        return;
    }
    if level.routes_to_stderr() {
        eprintln!("{line}");
    } else {
        println!("{line}");
    }
}

/// Log an unrecoverable failure. Always compiled in.
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::logger::log_impl($crate::logger::Level::Error, format_args!($($arg)*))
    };
}

/// Log a recoverable problem. Always compiled in.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::logger::log_impl($crate::logger::Level::Warn, format_args!($($arg)*))
    };
}

/// Log a progress note. Compiled out without the `log-info` feature.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::logger::log_impl($crate::logger::Level::Info, format_args!($($arg)*))
    };
}

/// Log diagnostic detail. Compiled out without the `log-debug` feature.
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        $crate::logger::log_impl($crate::logger::Level::Debug, format_args!($($arg)*))
    };
}

/// Print a status line when verbose output has been requested.
///
/// Unlike the leveled macros this writes straight to stdout and is never
/// captured by the log file.
#[macro_export]
macro_rules! verbose {
    ($($arg:tt)*) => {
        if $crate::logger::is_verbose_enabled() {
            println!($($arg)*);
        }
    };
}
