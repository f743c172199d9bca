#![warn(clippy::all, rust_2018_idioms)]

//! The stamp prompt form: three inputs, the generated prompt, its QR code,
//! and the copy/open buttons.
//!
//! [`PromptForm`] is built once when the application starts and owns every
//! piece of form state. Widgets only record a [`FormAction`]; the matching
//! `on_*` handler runs after the frame's widgets are laid out.

use super::alert_window::AlertWindow;
use super::window_focus::FocusableWindow;
use crate::app::clipboard::{ClipboardHelper, CopyOutcome, CopySource};
use crate::app::external_tool::{open_ai_studio, SystemBrowser, UrlOpener};
use crate::app::feedback::{FeedbackKind, TransientFeedback};
use crate::app::prompt_template::PromptInputs;
use crate::app::qr_code::{default_encoder, QrEncoder, QrPanel};
use crate::{log_error, log_info, trace_debug};
use eframe::egui;
use egui::{Align, RichText, TextEdit};
use std::time::Instant;

pub const GENERATE_LABEL: &str = "Generate Prompt";
pub const RESET_LABEL: &str = "Reset";
pub const COPY_LABEL: &str = "Copy Prompt";
pub const OPEN_TOOL_LABEL: &str = "Open AI Studio";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Submit,
    Reset,
    Copy,
    OpenTool,
}

/// One-shot scroll instruction for the next frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollRequest {
    /// Bring the generated prompt into view.
    Output,
    /// Back to the top of the form.
    Top,
}

pub struct PromptForm {
    pub country: String,
    pub title: String,
    pub symbol: String,

    generated_prompt: String,
    output_visible: bool,
    scroll_request: Option<ScrollRequest>,

    qr_panel: QrPanel,
    qr_encoder: Option<Box<dyn QrEncoder>>,
    clipboard: ClipboardHelper,
    copy_feedback: TransientFeedback,
    opener: Box<dyn UrlOpener>,
    alert: AlertWindow,
}

impl Default for PromptForm {
    fn default() -> Self {
        Self::new(
            default_encoder(),
            ClipboardHelper::default(),
            Box::new(SystemBrowser),
        )
    }
}

impl PromptForm {
    pub fn new(
        qr_encoder: Option<Box<dyn QrEncoder>>,
        clipboard: ClipboardHelper,
        opener: Box<dyn UrlOpener>,
    ) -> Self {
        Self {
            country: String::new(),
            title: String::new(),
            symbol: String::new(),
            generated_prompt: String::new(),
            output_visible: false,
            scroll_request: None,
            qr_panel: QrPanel::new(),
            qr_encoder,
            clipboard,
            copy_feedback: TransientFeedback::new(COPY_LABEL),
            opener,
            alert: AlertWindow::new(),
        }
    }

    pub fn generated_prompt(&self) -> &str {
        &self.generated_prompt
    }

    pub fn is_output_visible(&self) -> bool {
        self.output_visible
    }

    pub fn qr_panel(&self) -> &QrPanel {
        &self.qr_panel
    }

    pub fn copy_feedback(&self) -> &TransientFeedback {
        &self.copy_feedback
    }

    pub fn alert(&self) -> &AlertWindow {
        &self.alert
    }

    /// Clipboard writes still waiting on the worker.
    pub fn copies_in_flight(&self) -> usize {
        self.clipboard.in_flight()
    }

    pub fn scroll_request(&self) -> Option<ScrollRequest> {
        self.scroll_request
    }

    /// Validate the fields and, if all are filled, build and show the prompt.
    ///
    /// Returns `false` when validation failed; the alert is then open and no
    /// other state has changed.
    pub fn on_submit(&mut self) -> bool {
        let inputs = PromptInputs::new(&self.country, &self.title, &self.symbol);
        if let Err(e) = inputs.validate() {
            log_info!("Prompt not generated: {:?}", e);
            self.alert.show_message(e.to_string());
            return false;
        }

        self.generated_prompt = inputs.build_prompt();
        self.output_visible = true;
        self.scroll_request = Some(ScrollRequest::Output);
        self.qr_panel
            .render(self.qr_encoder.as_deref(), &self.generated_prompt);

        log_info!(
            "Generated prompt ({} chars) for country='{}' title='{}'",
            self.generated_prompt.chars().count(),
            inputs.country,
            inputs.title
        );
        true
    }

    pub fn on_reset(&mut self) {
        self.country.clear();
        self.title.clear();
        self.symbol.clear();
        self.generated_prompt.clear();
        self.output_visible = false;
        self.qr_panel.clear();
        self.scroll_request = Some(ScrollRequest::Top);
        log_info!("Form reset");
    }

    /// Copy the generated prompt for the "Copy Prompt" button.
    pub fn on_copy(&mut self, ctx: &egui::Context, now: Instant) {
        let outcome = self
            .clipboard
            .copy(ctx, &self.generated_prompt, CopySource::CopyButton);
        if outcome == CopyOutcome::Fallback {
            self.copy_feedback.show(FeedbackKind::Confirmation, now);
        }
    }

    /// Best-effort copy, then open the AI studio no matter how the copy went.
    pub fn on_open_tool(&mut self, ctx: &egui::Context) {
        self.clipboard
            .copy(ctx, &self.generated_prompt, CopySource::OpenTool);
        if open_ai_studio(self.opener.as_ref()) {
            log_info!("Opened AI studio");
        }
    }

    /// Apply finished clipboard writes and expire old button feedback.
    pub fn poll(&mut self, now: Instant) {
        for completion in self.clipboard.poll() {
            match (completion.source, completion.result) {
                (CopySource::CopyButton, Ok(())) => {
                    self.copy_feedback.show(FeedbackKind::Confirmation, now);
                }
                (CopySource::CopyButton, Err(e)) => {
                    log_error!("Failed to copy prompt to clipboard: {:#}", e);
                    self.copy_feedback.show(FeedbackKind::Error, now);
                }
                (CopySource::OpenTool, result) => {
                    trace_debug!("Convenience copy before opening AI studio: {:?}", result);
                }
            }
        }
        self.copy_feedback.tick(now);
    }

    pub fn dispatch(&mut self, action: FormAction, ctx: &egui::Context, now: Instant) {
        match action {
            FormAction::Submit => {
                self.on_submit();
            }
            FormAction::Reset => self.on_reset(),
            FormAction::Copy => self.on_copy(ctx, now),
            FormAction::OpenTool => self.on_open_tool(ctx),
        }
    }

    pub fn ui(&mut self, ui: &mut egui::Ui) {
        let now = Instant::now();
        self.poll(now);

        let mut action = None;
        ui.add_enabled_ui(!self.alert.is_open(), |ui| {
            action = self.draw(ui);
        });
        if let Some(action) = action {
            self.dispatch(action, ui.ctx(), now);
        }

        self.alert.show_with_focus(ui.ctx(), (), true);

        if let Some(remaining) = self.copy_feedback.remaining(now) {
            ui.ctx().request_repaint_after(remaining);
        }
    }

    fn draw(&mut self, ui: &mut egui::Ui) -> Option<FormAction> {
        let mut action = None;
        let scroll_request = self.scroll_request.take();
        if let Some(request) = scroll_request {
            trace_debug!("Applying scroll request {:?}", request);
        }

        let mut scroll_area = egui::ScrollArea::vertical()
            .id_salt("prompt_form_scroll")
            .auto_shrink([false, false]);
        if scroll_request == Some(ScrollRequest::Top) {
            scroll_area = scroll_area.vertical_scroll_offset(0.0);
        }

        scroll_area.show(ui, |ui| {
            ui.heading("Stamp Prompt Generator");
            ui.label("Describe your stamp and get a ready-to-use image prompt.");
            ui.add_space(10.0);

            egui::Grid::new("prompt_form_fields")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    let fields = [
                        ("Country / issuer:", "e.g. Freedonia", &mut self.country),
                        ("Stamp title / value:", "e.g. First Flight 50c", &mut self.title),
                        ("Main subject:", "e.g. a biplane over mountains", &mut self.symbol),
                    ];
                    for (label, hint, value) in fields {
                        ui.label(label);
                        let response = ui.add(
                            TextEdit::singleline(value)
                                .hint_text(hint)
                                .desired_width(f32::INFINITY),
                        );
                        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                            action = Some(FormAction::Submit);
                        }
                        ui.end_row();
                    }
                });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button(GENERATE_LABEL).clicked() {
                    action = Some(FormAction::Submit);
                }
                if ui.button(RESET_LABEL).clicked() {
                    action = Some(FormAction::Reset);
                }
            });

            if !self.output_visible {
                return;
            }

            ui.add_space(12.0);
            ui.separator();
            let heading = ui.heading("Generated Prompt");
            if scroll_request == Some(ScrollRequest::Output) {
                heading.scroll_to_me(Some(Align::TOP));
            }

            let mut shown = self.generated_prompt.as_str();
            ui.add(
                TextEdit::multiline(&mut shown)
                    .desired_rows(12)
                    .desired_width(f32::INFINITY)
                    .font(egui::TextStyle::Monospace),
            );

            ui.horizontal(|ui| {
                let copy = ui.add_enabled(
                    !self.copy_feedback.is_disabled(),
                    egui::Button::new(self.copy_feedback.label()),
                );
                if copy.clicked() {
                    action = Some(FormAction::Copy);
                }
                if ui
                    .button(OPEN_TOOL_LABEL)
                    .on_hover_text("Copies the prompt and opens the AI studio in your browser")
                    .clicked()
                {
                    action = Some(FormAction::OpenTool);
                }
            });

            ui.add_space(10.0);
            ui.label(RichText::new("Scan to take the prompt to your phone").weak());
            self.qr_panel.ui(ui);
        });

        action
    }
}
