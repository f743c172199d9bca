#![warn(clippy::all, rust_2018_idioms)]

//! Logging macros that stamp every record with `[file:module:line]`.
//!
//! `log_*!` write to both the `log` facade and `tracing` so that records reach
//! the file subscriber whether or not the `log` bridge is installed.
//! `trace_*!` only go through `tracing`.
//!
//! Keep render paths quiet: `PromptForm::ui` runs every frame, so anything
//! logged there must be tied to a user event, never to the frame itself.

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        log::debug!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
        tracing::debug!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
    };
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        log::info!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
        tracing::info!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        log::warn!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
        tracing::warn!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        log::error!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
        tracing::error!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
    };
}

/// Tracing-only variants, for debug chatter that does not need the `log` facade.
#[macro_export]
macro_rules! trace_debug {
    ($($arg:tt)*) => {
        tracing::debug!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
    };
}

#[macro_export]
macro_rules! trace_info {
    ($($arg:tt)*) => {
        tracing::info!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
    };
}

#[macro_export]
macro_rules! trace_warn {
    ($($arg:tt)*) => {
        tracing::warn!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
    };
}

/*
Level guide for this crate:

DEBUG: clipboard worker results for the "open tool" convenience copy,
       scroll requests, probe results
INFO:  user actions (prompt generated, form reset, tool opened), startup
WARN:  fallbacks (system clipboard unavailable, settings file ignored)
ERROR: QR encoding failures, clipboard write failures on explicit copy,
       browser launch failures
*/
