//! Stamp design prompt template and the builder that fills it.
//!
//! The template is fixed at compile time. Three placeholders, each present
//! exactly once, are replaced with the user's text:
//!
//! | Placeholder    | Source field       |
//! |----------------|--------------------|
//! | `{{SYMBOL}}`   | main subject       |
//! | `{{TITLE}}`    | stamp title/value  |
//! | `{{COUNTRY}}`  | country or issuer  |

use thiserror::Error;

pub const SYMBOL_PLACEHOLDER: &str = "{{SYMBOL}}";
pub const TITLE_PLACEHOLDER: &str = "{{TITLE}}";
pub const COUNTRY_PLACEHOLDER: &str = "{{COUNTRY}}";

/// The postage stamp design prompt handed to the image model.
pub const PROMPT_TEMPLATE: &str = "\
Create a high-resolution illustration of a single postage stamp, viewed straight on and centered on a plain off-white background.

STAMP DESIGN BRIEF
MAIN SUBJECT: {{SYMBOL}}
STAMP TITLE/VALUE: {{TITLE}}
COUNTRY/ISSUER TEXT: {{COUNTRY}}

STYLE
- Classic engraved (intaglio) look with fine line work and cross-hatching, printed in two or three muted inks.
- The main subject fills the central vignette and is drawn with clear, recognisable detail.
- A thin decorative frame surrounds the vignette; the perforated edge is visible on all four sides with evenly spaced teeth.

TYPOGRAPHY
- Render the country/issuer text along the top margin in small serif capitals.
- Render the title/value text along the bottom margin; if it contains a denomination, place the number in the lower right corner.
- All lettering must be spelled exactly as given above, legible, and free of extra words.

OUTPUT
- Portrait orientation, aspect ratio 4:5, no watermark, no mockup props, no hands, no envelope.
- Slight paper texture and gentle ink spread are welcome; avoid photographic lighting and drop shadows.";

/// Which required field was left empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptField {
    Country,
    Title,
    Symbol,
}

impl std::fmt::Display for PromptField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromptField::Country => write!(f, "country"),
            PromptField::Title => write!(f, "title"),
            PromptField::Symbol => write!(f, "symbol"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The user-facing text never names the fields; the list is for the log.
    #[error("Please fill in all fields.")]
    MissingFields(Vec<PromptField>),
}

/// The three form values, trimmed of surrounding whitespace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptInputs {
    pub country: String,
    pub title: String,
    pub symbol: String,
}

impl PromptInputs {
    pub fn new(country: &str, title: &str, symbol: &str) -> Self {
        Self {
            country: country.trim().to_string(),
            title: title.trim().to_string(),
            symbol: symbol.trim().to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing: Vec<PromptField> = [
            (PromptField::Country, &self.country),
            (PromptField::Title, &self.title),
            (PromptField::Symbol, &self.symbol),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::MissingFields(missing))
        }
    }

    pub fn build_prompt(&self) -> String {
        build_prompt(&self.country, &self.title, &self.symbol)
    }
}

/// Fill the template with the given values.
///
/// Each placeholder is located in the template itself, never in text that was
/// already substituted, so a value that happens to contain `{{TITLE}}` is
/// copied verbatim.
pub fn build_prompt(country: &str, title: &str, symbol: &str) -> String {
    let mut slots: Vec<(usize, &str, &str)> = [
        (SYMBOL_PLACEHOLDER, symbol),
        (TITLE_PLACEHOLDER, title),
        (COUNTRY_PLACEHOLDER, country),
    ]
    .into_iter()
    .filter_map(|(token, value)| {
        PROMPT_TEMPLATE
            .find(token)
            .map(|offset| (offset, token, value))
    })
    .collect();
    slots.sort_by_key(|(offset, _, _)| *offset);

    let mut prompt = String::with_capacity(
        PROMPT_TEMPLATE.len() + country.len() + title.len() + symbol.len(),
    );
    let mut cursor = 0;
    for (offset, token, value) in slots {
        prompt.push_str(&PROMPT_TEMPLATE[cursor..offset]);
        prompt.push_str(value);
        cursor = offset + token.len();
    }
    prompt.push_str(&PROMPT_TEMPLATE[cursor..]);
    prompt
}
