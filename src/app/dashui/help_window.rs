use super::window_focus::{apply_focus_order, FocusableWindow};
use crate::app::external_tool::AI_STUDIO_URL;
use crate::app::qr_code::QR_MAX_CHARS;
use eframe::egui;
use egui::{Context, RichText, Ui};

#[derive(Default)]
pub struct HelpWindow {
    pub open: bool,
}

impl HelpWindow {
    pub fn new() -> Self {
        Self::default()
    }

    fn ui_content(ui: &mut Ui) {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.add_space(5.0);

            ui.heading("Using the form");
            ui.add_space(5.0);
            ui.label("1. Enter the country or issuer, the stamp title or value, and the main subject.");
            ui.label("2. Press Generate Prompt (or Enter in any field).");
            ui.label("3. Copy the prompt, or use Open AI Studio to copy it and open the studio in your browser.");

            ui.add_space(15.0);

            ui.heading("QR code");
            ui.add_space(5.0);
            ui.label(format!(
                "The QR code holds the first {} characters of the prompt; longer prompts end with \"...\".",
                QR_MAX_CHARS
            ));

            ui.add_space(15.0);

            ui.heading("Keyboard Shortcuts");
            ui.add_space(5.0);
            ui.horizontal(|ui| {
                ui.label(RichText::new("Enter").strong());
                ui.label("- Generate the prompt from a text field");
            });
            ui.horizontal(|ui| {
                ui.label(RichText::new("Escape").strong());
                ui.label("- Dismiss a message");
            });

            ui.add_space(15.0);
            ui.label(RichText::new(format!("AI studio: {}", AI_STUDIO_URL)).weak());
            ui.label(
                RichText::new(format!(
                    "Build {}@{}",
                    env!("GIT_BRANCH"),
                    env!("GIT_COMMIT")
                ))
                .weak(),
            );
        });
    }
}

impl FocusableWindow for HelpWindow {
    type ShowParams = super::window_focus::SimpleShowParams;

    fn window_id(&self) -> &'static str {
        "help_window"
    }

    fn window_title(&self) -> String {
        "Help".to_string()
    }

    fn is_open(&self) -> bool {
        self.open
    }

    fn show_with_focus(&mut self, ctx: &Context, _params: Self::ShowParams, bring_to_front: bool) {
        if !self.open {
            return;
        }

        let available = ctx.available_rect().size();
        let window = egui::Window::new(self.window_title())
            .id(egui::Id::new(self.window_id()))
            .open(&mut self.open)
            .default_size([available.x.min(480.0), available.y.min(360.0)])
            .collapsible(false);

        apply_focus_order(window, bring_to_front).show(ctx, Self::ui_content);
    }
}
