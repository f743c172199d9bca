//! Stamp Prompt - postage stamp image prompt generator
//!
//! A small desktop tool that asks for three things (country or issuer, stamp
//! title or value, main subject), drops them into a fixed image-generation
//! prompt, and offers the result as text, as a QR code, on the clipboard, and
//! as a one-click hand-off to an AI studio in the browser.
//!
//! # Architecture Overview
//!
//! - **UI Layer** ([`app::dashui`]): egui/eframe window, with
//!   [`app::dashui::PromptForm`] as the single controller that owns all state
//! - **Prompt** ([`app::prompt_template`]): pure template substitution
//! - **Outputs** ([`app::qr_code`], [`app::clipboard`], [`app::external_tool`]):
//!   each wraps an outside capability behind a trait so it can be swapped in
//!   tests
//!
//! Everything lives for one process run; nothing about the form is saved.

#![warn(clippy::all, rust_2018_idioms)]

// Include logging macros first
#[macro_use]
pub mod logging_macros;

pub mod app;
pub use app::StampPromptApp;
