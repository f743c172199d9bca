use super::help_window::HelpWindow;
use super::menu::{self, MenuAction};
use super::prompt_form::{FormAction, PromptForm};
use super::window_focus::FocusableWindow;
use crate::app::settings::{AppSettings, ThemeChoice};
use crate::trace_info;
use eframe::egui;
use std::time::Instant;

/// Top-level eframe application: menu bar, the prompt form, and the help
/// window.
pub struct StampPromptApp {
    pub theme: ThemeChoice,
    pub form: PromptForm,
    pub help_window: HelpWindow,
}

impl Default for StampPromptApp {
    fn default() -> Self {
        Self::with_form(AppSettings::default(), PromptForm::default())
    }
}

impl StampPromptApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: AppSettings) -> Self {
        let app = Self::with_form(settings, PromptForm::default());
        app.apply_theme(&cc.egui_ctx);
        app
    }

    pub fn with_form(settings: AppSettings, form: PromptForm) -> Self {
        Self {
            theme: settings.theme,
            form,
            help_window: HelpWindow::new(),
        }
    }

    pub fn apply_theme(&self, ctx: &egui::Context) {
        self.theme.apply(ctx);

        let mut style = (*ctx.style()).clone();
        style.visuals.window_corner_radius = egui::CornerRadius::same(2);
        ctx.set_style(style);
    }

    /// Apply a menu choice. Form actions are ignored while the alert blocks
    /// the form.
    pub fn handle_menu_action(&mut self, action: MenuAction, ctx: &egui::Context) {
        match action {
            MenuAction::ThemeChanged => {
                trace_info!("Theme changed to {}", self.theme);
            }
            MenuAction::ResetForm if self.form.alert().is_open() => {
                trace_info!("Ignoring menu reset while the alert is open");
            }
            MenuAction::ResetForm => {
                self.form.dispatch(FormAction::Reset, ctx, Instant::now());
            }
            MenuAction::Quit => {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
            MenuAction::None => {}
        }
    }

    fn render_top_menu_bar(&mut self, ctx: &egui::Context) {
        let reset_enabled = !self.form.alert().is_open();
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                let action = menu::build_menu(
                    ui,
                    ctx,
                    &mut self.theme,
                    &mut self.help_window.open,
                    reset_enabled,
                );
                self.handle_menu_action(action, ctx);
            });
        });
    }

    fn render_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.form.ui(ui);
        });
    }
}

impl eframe::App for StampPromptApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_top_menu_bar(ctx);
        self.render_central_panel(ctx);
        self.help_window.show_with_focus(ctx, (), false);
    }
}
