//! Inline styles for the live preview column, derived from the same
//! clamp expressions as the exported CSS.

use serde::Serialize;

use crate::labels::{ColorLabel, Label, LabelTable, SizeLabel};
use crate::panel::PanelState;

/// One sample element in the preview.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewElement {
    /// DOM id, `preview-<size label>`.
    pub id: String,
    pub tag: &'static str,
    pub class: Option<&'static str>,
    pub text: &'static str,
    pub font_size: String,
    pub color: String,
}

impl PreviewElement {
    /// Server-rendered `style` attribute. A color that would add extra
    /// declarations is left out.
    pub fn inline_style(&self) -> String {
        let mut style = format!("font-size: {};", self.font_size);
        if is_single_value(&self.color) {
            style.push_str(&format!(" color: {};", self.color));
        }
        style
    }
}

/// True when `value` can stand alone as one inline declaration value.
pub fn is_single_value(value: &str) -> bool {
    !value.contains([';', '{', '}'])
}

/// Everything the preview column needs to restyle itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewStyles {
    pub background: String,
    pub elements: Vec<PreviewElement>,
    pub gradient: String,
}

fn sample(label: SizeLabel) -> (&'static str, Option<&'static str>, &'static str, ColorLabel) {
    match label {
        SizeLabel::H1 => ("h1", None, "Heading 1", ColorLabel::Heading),
        SizeLabel::H2 => ("h2", None, "Heading 2", ColorLabel::Heading),
        SizeLabel::H3 => ("h3", None, "Heading 3", ColorLabel::Heading),
        SizeLabel::H4 => ("h4", None, "Heading 4", ColorLabel::Heading),
        SizeLabel::H5 => ("h5", None, "Heading 5", ColorLabel::Heading),
        SizeLabel::H6 => ("h6", None, "Heading 6", ColorLabel::Heading),
        SizeLabel::Body => (
            "p",
            None,
            "The quick brown fox jumps over the lazy dog.",
            ColorLabel::Body,
        ),
        SizeLabel::Small => (
            "p",
            Some("small-text"),
            "Small sample text goes here.",
            ColorLabel::Body,
        ),
    }
}

pub fn preview_styles(state: &PanelState) -> PreviewStyles {
    let elements = SizeLabel::ALL
        .iter()
        .map(|&label| {
            let (tag, class, text, color) = sample(label);
            PreviewElement {
                id: format!("preview-{}", label.as_str()),
                tag,
                class,
                text,
                font_size: state.clamp(label),
                color: state.colors[color].clone(),
            }
        })
        .collect();

    PreviewStyles {
        background: state.colors[ColorLabel::Background].clone(),
        elements,
        gradient: format!(
            "linear-gradient(90deg, {}, {})",
            state.colors[ColorLabel::GradientStart],
            state.colors[ColorLabel::GradientEnd],
        ),
    }
}

/// Value for a native color swatch, which only accepts `#rrggbb`.
///
/// Display only: the stored color keeps whatever the user typed.
pub fn swatch_value(raw: &str) -> String {
    let raw = raw.trim();
    let is_hex = raw.len() == 7
        && raw.starts_with('#')
        && raw[1..].bytes().all(|b| b.is_ascii_hexdigit());
    if is_hex {
        raw.to_ascii_lowercase()
    } else {
        "#000000".to_string()
    }
}

pub fn swatches(state: &PanelState) -> LabelTable<ColorLabel, String> {
    LabelTable::from_fn(|label| swatch_value(&state.colors[label]))
}
