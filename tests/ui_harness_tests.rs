//! Drives the prompt form through its widgets with egui_kittest.

use egui_kittest::kittest::Queryable;
use egui_kittest::Harness;
use stampprompt::app::clipboard::ClipboardHelper;
use stampprompt::app::dashui::prompt_form::{
    PromptForm, COPY_LABEL, GENERATE_LABEL, OPEN_TOOL_LABEL, RESET_LABEL,
};
use stampprompt::app::dashui::window_focus::FocusableWindow;
use stampprompt::app::external_tool::UrlOpener;
use stampprompt::app::qr_code::{QrEncoder, QrError, QrMatrix, QrRenderOptions};

struct FakeEncoder;

impl QrEncoder for FakeEncoder {
    fn encode(&self, _text: &str, _options: &QrRenderOptions) -> Result<QrMatrix, QrError> {
        Ok(QrMatrix::new(1, vec![true]).unwrap())
    }
}

struct NoBrowser;

impl UrlOpener for NoBrowser {
    fn open_url(&self, _url: &str) -> std::io::Result<()> {
        Ok(())
    }
}

fn harness() -> Harness<'static, PromptForm> {
    let form = PromptForm::new(
        Some(Box::new(FakeEncoder)),
        ClipboardHelper::with_writer(None),
        Box::new(NoBrowser),
    );
    Harness::new_ui_state(|ui, form: &mut PromptForm| form.ui(ui), form)
}

/// A few frames so clicks are processed and the layout settles. Scroll
/// animations keep requesting repaints, so `run()` is not used here.
fn settle(harness: &mut Harness<'_, PromptForm>) {
    for _ in 0..3 {
        harness.step();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_hidden_on_start() {
        let mut harness = harness();
        settle(&mut harness);

        assert!(harness.query_by_label(GENERATE_LABEL).is_some());
        assert!(harness.query_by_label(RESET_LABEL).is_some());
        assert!(harness.query_by_label(COPY_LABEL).is_none());
        assert!(harness.query_by_label(OPEN_TOOL_LABEL).is_none());
    }

    #[test]
    fn test_empty_submit_opens_alert_until_ok() {
        let mut harness = harness();
        settle(&mut harness);

        harness.get_by_label(GENERATE_LABEL).click();
        settle(&mut harness);

        assert!(harness.state().alert().is_open());
        assert!(!harness.state().is_output_visible());

        harness.get_by_label("OK").click();
        settle(&mut harness);

        assert!(!harness.state().alert().is_open());
    }

    #[test]
    fn test_generate_then_reset() {
        let mut harness = harness();
        {
            let form = harness.state_mut();
            form.country = "Freedonia".to_string();
            form.title = "First Flight".to_string();
            form.symbol = "a biplane".to_string();
        }
        settle(&mut harness);

        harness.get_by_label(GENERATE_LABEL).click();
        settle(&mut harness);

        assert!(harness.state().is_output_visible());
        assert!(harness
            .state()
            .generated_prompt()
            .contains("MAIN SUBJECT: a biplane"));
        assert!(harness.query_by_label(COPY_LABEL).is_some());
        assert!(harness.query_by_label(OPEN_TOOL_LABEL).is_some());

        harness.get_by_label(RESET_LABEL).click();
        settle(&mut harness);

        assert!(!harness.state().is_output_visible());
        assert_eq!(harness.state().country, "");
        assert!(harness.query_by_label(COPY_LABEL).is_none());
    }
}
