//! # Logging Macros
//!
//! Thin wrappers over `tracing` events. Each kind of line gets its own event
//! target so the terminal formatter can pick a symbol and color for it
//! without the core knowing anything about terminals.

/// Plain status line.
pub const INFO_TARGET: &str = "bluetap";
/// A step that completed.
pub const SUCCESS_TARGET: &str = "bluetap::success";
/// Echo of an external command line (verbose mode).
pub const COMMAND_TARGET: &str = "bluetap::command";
/// Raw stdout of an external command (verbose mode).
pub const OUTPUT_TARGET: &str = "bluetap::output";
/// Pre-formatted terminal output.
pub const PRINT_TARGET: &str = "bluetap::print";

#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        $crate::tracing::info!(target: $crate::log::INFO_TARGET, $($arg)+)
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)+) => {
        $crate::tracing::info!(target: $crate::log::SUCCESS_TARGET, $($arg)+)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => {
        $crate::tracing::warn!(target: $crate::log::INFO_TARGET, $($arg)+)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        $crate::tracing::error!(target: $crate::log::INFO_TARGET, $($arg)+)
    };
}

#[macro_export]
macro_rules! command {
    ($($arg:tt)+) => {
        $crate::tracing::info!(target: $crate::log::COMMAND_TARGET, $($arg)+)
    };
}

#[macro_export]
macro_rules! output {
    ($($arg:tt)+) => {
        $crate::tracing::info!(target: $crate::log::OUTPUT_TARGET, $($arg)+)
    };
}
