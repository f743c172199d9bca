use super::window_focus::{apply_focus_order, FocusableWindow, SimpleShowParams};
use eframe::egui;
use egui::{Color32, RichText};

/// Blocking message box. The form stays disabled until it is dismissed.
#[derive(Debug, Default)]
pub struct AlertWindow {
    message: Option<String>,
}

impl AlertWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn dismiss(&mut self) {
        self.message = None;
    }
}

impl FocusableWindow for AlertWindow {
    type ShowParams = SimpleShowParams;

    fn window_id(&self) -> &'static str {
        "alert_window"
    }

    fn window_title(&self) -> String {
        "Missing information".to_string()
    }

    fn is_open(&self) -> bool {
        self.message.is_some()
    }

    fn show_with_focus(
        &mut self,
        ctx: &egui::Context,
        _params: Self::ShowParams,
        bring_to_front: bool,
    ) {
        let Some(message) = self.message.clone() else {
            return;
        };

        let window = egui::Window::new(self.window_title())
            .id(egui::Id::new(self.window_id()))
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .collapsible(false)
            .resizable(false);

        let mut dismissed = false;
        apply_focus_order(window, bring_to_front).show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(Color32::from_rgb(255, 150, 0), RichText::new("⚠").size(18.0));
                ui.label(message.as_str());
            });
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        });

        if dismissed || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.dismiss();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_lifecycle() {
        let mut alert = AlertWindow::new();
        assert!(!alert.is_open());

        alert.show_message("Please fill in all fields.");
        assert!(alert.is_open());
        assert_eq!(alert.message(), Some("Please fill in all fields."));

        alert.dismiss();
        assert!(!alert.is_open());
    }
}
