//! QR code rendering for the generated prompt.
//!
//! The encoder itself is treated as an outside capability behind
//! [`QrEncoder`]. [`QrPanel`] is the container the form draws into: every
//! render starts from an empty panel, long prompts are cut down by
//! [`qr_payload`], and any failure ends up as an inline notice instead of an
//! error returned to the caller.

use eframe::egui;
use egui::Color32;
use std::borrow::Cow;
use thiserror::Error;

use crate::{log_error, log_warn, trace_debug};

/// Longest text, in characters, that is encoded without truncation.
pub const QR_MAX_CHARS: usize = 500;
/// Appended to a truncated payload.
pub const QR_ELLIPSIS: &str = "...";

pub const QR_UNAVAILABLE_NOTICE: &str = "QR code library not available";
pub const QR_FAILED_NOTICE: &str = "Could not generate QR code";

const NOTICE_COLOR: Color32 = Color32::from_rgb(220, 50, 50);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CorrectLevel {
    Low,
    #[default]
    Medium,
    Quartile,
    High,
}

/// Fixed rendering options handed to the encoder.
#[derive(Debug, Clone, PartialEq)]
pub struct QrRenderOptions {
    pub width: u32,
    pub height: u32,
    /// `#2c3e50`
    pub color_dark: Color32,
    /// `#ffffff`
    pub color_light: Color32,
    pub correct_level: CorrectLevel,
}

impl Default for QrRenderOptions {
    fn default() -> Self {
        Self {
            width: 128,
            height: 128,
            color_dark: Color32::from_rgb(0x2c, 0x3e, 0x50),
            color_light: Color32::from_rgb(0xff, 0xff, 0xff),
            correct_level: CorrectLevel::Medium,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QrError {
    #[error("text does not fit in a QR code: {0}")]
    DataTooLong(String),
    #[error("QR encoder failed: {0}")]
    Encoder(String),
}

/// Square module grid produced by an encoder. `true` is a dark module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrMatrix {
    size: usize,
    modules: Vec<bool>,
}

impl QrMatrix {
    /// Returns `None` unless `modules` holds exactly `size * size` entries.
    pub fn new(size: usize, modules: Vec<bool>) -> Option<Self> {
        if size == 0 || modules.len() != size * size {
            return None;
        }
        Some(Self { size, modules })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size && self.modules[y * self.size + x]
    }
}

pub trait QrEncoder {
    fn encode(&self, text: &str, options: &QrRenderOptions) -> Result<QrMatrix, QrError>;
}

/// Encoder backed by the `qrcodegen` crate.
#[cfg(feature = "qr")]
#[derive(Debug, Default, Clone, Copy)]
pub struct QrcodegenEncoder;

#[cfg(feature = "qr")]
impl QrEncoder for QrcodegenEncoder {
    fn encode(&self, text: &str, options: &QrRenderOptions) -> Result<QrMatrix, QrError> {
        use qrcodegen::{QrCode, QrCodeEcc};

        let ecc = match options.correct_level {
            CorrectLevel::Low => QrCodeEcc::Low,
            CorrectLevel::Medium => QrCodeEcc::Medium,
            CorrectLevel::Quartile => QrCodeEcc::Quartile,
            CorrectLevel::High => QrCodeEcc::High,
        };
        let code = QrCode::encode_text(text, ecc)
            .map_err(|e| QrError::DataTooLong(format!("{:?}", e)))?;

        let size = code.size();
        if size <= 0 {
            return Err(QrError::Encoder(format!("unexpected symbol size {}", size)));
        }
        let mut modules = Vec::with_capacity((size * size) as usize);
        for y in 0..size {
            for x in 0..size {
                modules.push(code.get_module(x, y));
            }
        }
        QrMatrix::new(size as usize, modules)
            .ok_or_else(|| QrError::Encoder("module grid does not match symbol size".to_string()))
    }
}

/// The encoder compiled into this build, if any.
pub fn default_encoder() -> Option<Box<dyn QrEncoder>> {
    #[cfg(feature = "qr")]
    {
        Some(Box::new(QrcodegenEncoder))
    }
    #[cfg(not(feature = "qr"))]
    {
        None
    }
}

/// Text that actually goes into the QR code.
///
/// Counts Unicode scalar values, so a multi-byte character is never split.
pub fn qr_payload(text: &str) -> Cow<'_, str> {
    match text.char_indices().nth(QR_MAX_CHARS) {
        None => Cow::Borrowed(text),
        Some((cut, _)) => Cow::Owned(format!("{}{}", &text[..cut], QR_ELLIPSIS)),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum QrState {
    #[default]
    Empty,
    Rendered(QrMatrix),
    /// No encoder in this build.
    Unavailable,
    /// The encoder rejected the payload.
    Failed,
}

/// Region of the output area that holds the QR code or its error notice.
#[derive(Debug, Default)]
pub struct QrPanel {
    options: QrRenderOptions,
    state: QrState,
    payload: Option<String>,
}

impl QrPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn options(&self) -> &QrRenderOptions {
        &self.options
    }

    pub fn state(&self) -> &QrState {
        &self.state
    }

    /// Text that was handed to the encoder on the last render attempt.
    pub fn payload(&self) -> Option<&str> {
        self.payload.as_deref()
    }

    pub fn has_widget(&self) -> bool {
        matches!(self.state, QrState::Rendered(_))
    }

    pub fn clear(&mut self) {
        self.state = QrState::Empty;
        self.payload = None;
    }

    /// Replace whatever the panel shows with a fresh code for `text`.
    pub fn render(&mut self, encoder: Option<&dyn QrEncoder>, text: &str) {
        self.clear();

        let Some(encoder) = encoder else {
            log_warn!("No QR encoder available; showing notice instead of a code");
            self.state = QrState::Unavailable;
            return;
        };

        let payload = qr_payload(text).into_owned();
        trace_debug!(
            "Encoding QR payload of {} chars (source {} chars)",
            payload.chars().count(),
            text.chars().count()
        );

        self.state = match encoder.encode(&payload, &self.options) {
            Ok(matrix) => QrState::Rendered(matrix),
            Err(e) => {
                log_error!("QR encoding failed for {} byte payload: {}", payload.len(), e);
                QrState::Failed
            }
        };
        self.payload = Some(payload);
    }

    pub fn ui(&self, ui: &mut egui::Ui) {
        match &self.state {
            QrState::Empty => {}
            QrState::Rendered(matrix) => self.paint_matrix(ui, matrix),
            QrState::Unavailable => {
                ui.colored_label(NOTICE_COLOR, QR_UNAVAILABLE_NOTICE);
            }
            QrState::Failed => {
                ui.colored_label(NOTICE_COLOR, QR_FAILED_NOTICE);
            }
        }
    }

    fn paint_matrix(&self, ui: &mut egui::Ui, matrix: &QrMatrix) {
        let size = egui::vec2(self.options.width as f32, self.options.height as f32);
        let (rect, response) = ui.allocate_exact_size(size, egui::Sense::hover());
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, self.options.color_light);

        let cell = egui::vec2(
            rect.width() / matrix.size() as f32,
            rect.height() / matrix.size() as f32,
        );
        for y in 0..matrix.size() {
            for x in 0..matrix.size() {
                if !matrix.is_dark(x, y) {
                    continue;
                }
                let min = rect.min + egui::vec2(x as f32 * cell.x, y as f32 * cell.y);
                // Slight overlap hides hairline seams between fractional cells
                let module = egui::Rect::from_min_size(min, cell).expand(0.2);
                painter.rect_filled(module, 0.0, self.options.color_dark);
            }
        }

        response.on_hover_text("Scan to read the prompt");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = QrRenderOptions::default();
        assert_eq!(options.width, 128);
        assert_eq!(options.height, 128);
        assert_eq!(options.color_dark, Color32::from_rgb(44, 62, 80));
        assert_eq!(options.color_light, Color32::WHITE);
        assert_eq!(options.correct_level, CorrectLevel::Medium);
        assert_eq!(QrPanel::new().options(), &options);
    }

    #[test]
    fn test_payload_boundary() {
        let exact = "x".repeat(QR_MAX_CHARS);
        assert!(matches!(qr_payload(&exact), Cow::Borrowed(_)));

        let long = "y".repeat(QR_MAX_CHARS + 1);
        let payload = qr_payload(&long);
        assert_eq!(payload.chars().count(), QR_MAX_CHARS + QR_ELLIPSIS.len());
        assert!(payload.ends_with("y..."));
    }

    #[test]
    fn test_payload_counts_characters_not_bytes() {
        let text = "é".repeat(QR_MAX_CHARS + 10);
        let payload = qr_payload(&text);
        assert_eq!(payload, format!("{}...", "é".repeat(QR_MAX_CHARS)));
    }

    #[test]
    fn test_matrix_rejects_wrong_module_count() {
        assert!(QrMatrix::new(3, vec![false; 8]).is_none());
        assert!(QrMatrix::new(0, vec![]).is_none());
        let matrix = QrMatrix::new(2, vec![true, false, false, true]).unwrap();
        assert!(matrix.is_dark(0, 0));
        assert!(!matrix.is_dark(1, 0));
        assert!(!matrix.is_dark(5, 5));
    }

    #[cfg(feature = "qr")]
    #[test]
    fn test_qrcodegen_encoder_produces_square_grid() {
        let matrix = QrcodegenEncoder
            .encode("MAIN SUBJECT: a biplane", &QrRenderOptions::default())
            .unwrap();
        // Version 1 is 21 modules wide; every version adds 4
        assert!(matrix.size() >= 21);
        assert_eq!((matrix.size() - 21) % 4, 0);
        // Top-left finder pattern corner is always dark
        assert!(matrix.is_dark(0, 0));
    }

    struct Solid;

    impl QrEncoder for Solid {
        fn encode(&self, _text: &str, _options: &QrRenderOptions) -> Result<QrMatrix, QrError> {
            Ok(QrMatrix::new(2, vec![true; 4]).unwrap())
        }
    }

    #[test]
    fn test_render_short_text_uses_it_unchanged_and_replaces_previous() {
        let mut panel = QrPanel::new();
        panel.render(Some(&Solid), "first");
        panel.render(Some(&Solid), "second");

        assert_eq!(panel.payload(), Some("second"));
        assert!(panel.has_widget());

        panel.clear();
        assert_eq!(panel.state(), &QrState::Empty);
        assert!(panel.payload().is_none());
    }

    #[test]
    fn test_render_without_encoder_shows_notice() {
        let mut panel = QrPanel::new();
        panel.render(None, "hello");
        assert_eq!(panel.state(), &QrState::Unavailable);
        assert!(!panel.has_widget());
        assert!(panel.payload().is_none());
    }
}
