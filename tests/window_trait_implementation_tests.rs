//! Trait implementation tests for the floating windows
//!
//! These tests verify that every window implements FocusableWindow
//! consistently and draws inside a real egui frame.

use stampprompt::app::dashui::{
    alert_window::AlertWindow, help_window::HelpWindow, window_focus::FocusableWindow,
};

#[cfg(test)]
mod tests {
    use super::*;
    use egui_kittest::kittest::Queryable;
    use egui_kittest::Harness;

    #[test]
    fn test_help_window_trait_implementation() {
        let mut window = HelpWindow::new();

        assert_eq!(window.window_id(), "help_window");
        assert_eq!(window.window_title(), "Help");
        assert!(!window.is_open());

        window.open = true;
        assert!(window.is_open());

        let mut harness = Harness::new_state(
            |ctx, window: &mut HelpWindow| {
                FocusableWindow::show_with_focus(window, ctx, (), true);
            },
            window,
        );
        harness.step();

        assert!(harness.query_by_label("Using the form").is_some());
        assert!(harness.query_by_label("QR code").is_some());
    }

    #[test]
    fn test_closed_help_window_draws_nothing() {
        let mut harness = Harness::new_state(
            |ctx, window: &mut HelpWindow| {
                FocusableWindow::show_with_focus(window, ctx, (), false);
            },
            HelpWindow::new(),
        );
        harness.step();

        assert!(harness.query_by_label("Using the form").is_none());
    }

    #[test]
    fn test_alert_window_trait_implementation() {
        let mut window = AlertWindow::new();

        assert_eq!(window.window_id(), "alert_window");
        assert_eq!(window.window_title(), "Missing information");
        assert!(!window.is_open());

        window.show_message("Please fill in all fields.");
        assert!(window.is_open());

        let mut harness = Harness::new_state(
            |ctx, window: &mut AlertWindow| {
                FocusableWindow::show_with_focus(window, ctx, (), true);
            },
            window,
        );
        harness.step();
        assert!(harness.query_by_label("Please fill in all fields.").is_some());

        harness.get_by_label("OK").click();
        harness.step();
        harness.step();

        assert!(!harness.state().is_open());
        assert!(harness.query_by_label("Please fill in all fields.").is_none());
    }

    #[test]
    fn test_window_ids_are_unique() {
        let help = HelpWindow::new();
        let alert = AlertWindow::new();
        assert_ne!(help.window_id(), alert.window_id());
    }
}
