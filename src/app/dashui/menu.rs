use crate::app::settings::ThemeChoice;
use eframe::egui;
use egui::RichText;

#[derive(Debug, PartialEq)]
pub enum MenuAction {
    None,
    ThemeChanged,
    ResetForm,
    Quit,
}

pub fn build_menu(
    ui: &mut egui::Ui,
    ctx: &egui::Context,
    theme: &mut ThemeChoice,
    help_window_open: &mut bool,
    reset_enabled: bool,
) -> MenuAction {
    let mut menu_action = MenuAction::None;

    ui.menu_button("File", |ui| {
        if ui
            .add_enabled(reset_enabled, egui::Button::new("Reset form"))
            .clicked()
        {
            menu_action = MenuAction::ResetForm;
        }
        ui.separator();
        if ui.button("Quit").clicked() {
            menu_action = MenuAction::Quit;
        }
    });

    ui.menu_button(RichText::new("🎨").size(18.0), |ui| {
        for choice in ThemeChoice::ALL {
            if ui.selectable_label(*theme == choice, choice.to_string()).clicked() {
                choice.apply(ctx);
                *theme = choice;
                menu_action = MenuAction::ThemeChanged;
            }
        }
    });

    if ui.button("Help").clicked() {
        *help_window_open = !*help_window_open;
    }

    menu_action
}
