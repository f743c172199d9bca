//! egui user interface for the stamp prompt tool.
//!
//! - [`app::StampPromptApp`] - eframe application shell (menu bar, central panel)
//! - [`prompt_form::PromptForm`] - the form controller and its widgets
//! - [`alert_window::AlertWindow`] - blocking message for validation errors
//! - [`help_window::HelpWindow`] - usage notes
//! - [`window_focus::FocusableWindow`] - shared interface of the floating windows

pub mod alert_window;
pub mod app;
pub mod help_window;
pub mod menu;
pub mod prompt_form;
pub mod window_focus;

pub use alert_window::AlertWindow;
pub use app::StampPromptApp;
pub use help_window::HelpWindow;
pub use prompt_form::{FormAction, PromptForm, ScrollRequest};
pub use window_focus::{FocusableWindow, SimpleShowParams};
