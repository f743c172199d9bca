//! Core application modules for the stamp prompt tool.
//!
//! # Module Organization
//!
//! ## Prompt and outputs
//! - [`prompt_template`] - fixed template and the placeholder substitution
//! - [`qr_code`] - QR encoding behind an encoder trait, plus the panel that shows it
//! - [`clipboard`] - background system-clipboard writes with an egui fallback
//! - [`feedback`] - temporary button labels after a copy
//! - [`external_tool`] - opening the AI studio in the browser
//!
//! ## UI and Infrastructure
//! - [`dashui`] - egui interface and the form controller
//! - [`settings`] - optional `settings.toml`

pub mod clipboard;
pub mod dashui;
pub mod external_tool;
pub mod feedback;
pub mod prompt_template;
pub mod qr_code;
pub mod settings;

pub use dashui::app::StampPromptApp;
