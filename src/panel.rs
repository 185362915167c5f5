//! Panel state: an immutable snapshot of the three labeled mappings, the
//! setters that replace it, and the `Panel` that keeps its derived CSS in
//! step.

use serde::{Deserialize, Serialize};

use crate::fluid::{FluidSize, Viewport};
use crate::labels::{ColorLabel, LabelTable, SizeLabel};
use crate::stylesheet;

pub type SizeTable = LabelTable<SizeLabel, f64>;
pub type ColorTable = LabelTable<ColorLabel, String>;

/// Built-in minimum size in rem.
pub fn default_min_size(label: SizeLabel) -> f64 {
    match label {
        SizeLabel::H1 => 1.25,
        SizeLabel::H2 => 1.875,
        SizeLabel::H3 => 1.625,
        SizeLabel::H4 => 1.5,
        SizeLabel::H5 => 1.375,
        SizeLabel::H6 => 1.25,
        SizeLabel::Body => 1.125,
        SizeLabel::Small => 0.875,
    }
}

/// Built-in maximum size in rem.
pub fn default_max_size(label: SizeLabel) -> f64 {
    match label {
        SizeLabel::H1 => 3.125,
        SizeLabel::H2 => 2.5,
        SizeLabel::H3 => 2.25,
        SizeLabel::H4 => 2.0,
        SizeLabel::H5 => 1.625,
        SizeLabel::H6 => 1.25,
        SizeLabel::Body => 1.125,
        SizeLabel::Small => 0.875,
    }
}

/// Built-in palette value.
pub fn default_color(label: ColorLabel) -> &'static str {
    match label {
        ColorLabel::Heading => "#1c1c1c",
        ColorLabel::Body => "#333333",
        ColorLabel::Primary => "#001de7",
        ColorLabel::Secondary => "#333333",
        ColorLabel::Tertiary => "#ffa500",
        ColorLabel::Highlight => "#ff6600",
        ColorLabel::GradientStart => "#001de7",
        ColorLabel::GradientEnd => "#ff6600",
        ColorLabel::Background => "#f7f7f7",
        ColorLabel::Section => "#ffffff",
        ColorLabel::LineColor => "#e5e5e5",
    }
}

/// One snapshot of everything the user can tune.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelState {
    pub viewport: Viewport,
    pub min_sizes: SizeTable,
    pub max_sizes: SizeTable,
    pub colors: ColorTable,
}

impl Default for PanelState {
    fn default() -> Self {
        Self {
            viewport: Viewport::DEFAULT,
            min_sizes: LabelTable::from_fn(default_min_size),
            max_sizes: LabelTable::from_fn(default_max_size),
            colors: LabelTable::from_fn(|l| default_color(l).to_string()),
        }
    }
}

/// A single setter call, in the shape the browser panel sends it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", rename_all = "lowercase")]
pub enum Edit {
    Min { label: SizeLabel, value: String },
    Max { label: SizeLabel, value: String },
    Color { label: ColorLabel, value: String },
}

impl PanelState {
    pub fn fluid_size(&self, label: SizeLabel) -> FluidSize {
        FluidSize::new(self.min_sizes[label], self.max_sizes[label])
    }

    /// Clamp expression for one size label.
    pub fn clamp(&self, label: SizeLabel) -> String {
        self.fluid_size(label).to_clamp(&self.viewport)
    }

    /// The snapshot that replaces this one after `edit`.
    pub fn with_edit(&self, edit: &Edit) -> PanelState {
        let mut next = self.clone();
        match edit {
            Edit::Min { label, value } => next.min_sizes.set(*label, coerce_size(value)),
            Edit::Max { label, value } => next.max_sizes.set(*label, coerce_size(value)),
            Edit::Color { label, value } => next.colors.set(*label, value.clone()),
        }
        next
    }

    /// Rebuild the CSS block for this snapshot.
    pub fn regenerate(&self) -> String {
        stylesheet::generate_css(self)
    }
}

/// The live panel: current snapshot plus the CSS derived from it.
///
/// Every setter replaces the snapshot and regenerates before returning.
#[derive(Debug, Clone)]
pub struct Panel {
    state: PanelState,
    css: String,
}

impl Default for Panel {
    fn default() -> Self {
        Self::new(PanelState::default())
    }
}

impl Panel {
    pub fn new(state: PanelState) -> Self {
        let css = state.regenerate();
        Self { state, css }
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    pub fn css(&self) -> &str {
        &self.css
    }

    pub fn into_parts(self) -> (PanelState, String) {
        (self.state, self.css)
    }

    pub fn set_min_size(&mut self, label: SizeLabel, raw: &str) {
        self.apply(Edit::Min {
            label,
            value: raw.to_string(),
        });
    }

    pub fn set_max_size(&mut self, label: SizeLabel, raw: &str) {
        self.apply(Edit::Max {
            label,
            value: raw.to_string(),
        });
    }

    pub fn set_color(&mut self, label: ColorLabel, raw: &str) {
        self.apply(Edit::Color {
            label,
            value: raw.to_string(),
        });
    }

    pub fn apply(&mut self, edit: Edit) {
        tracing::trace!(?edit, "applying panel edit");
        self.state = self.state.with_edit(&edit);
        self.regenerate();
    }

    /// Recompute the CSS from the current snapshot.
    pub fn regenerate(&mut self) {
        self.css = self.state.regenerate();
    }
}

/// Coerce raw input text to a size the way a browser's `parseFloat(x) || 0`
/// does: longest numeric prefix, zero on failure.
///
/// Unlike `parseFloat(x) || 0`, a non-finite result (`"Infinity"`,
/// `"Infinityx"`, `"1e400"`) is also stored as zero, so a generated
/// `clamp()` never carries `Infinity` or `NaN`.
pub fn coerce_size(raw: &str) -> f64 {
    match parse_float_prefix(raw) {
        Some(v) if v.is_finite() && v != 0.0 => v,
        _ => 0.0,
    }
}

fn parse_float_prefix(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    if s[end..].starts_with("Infinity") {
        let negative = bytes.first() == Some(&b'-');
        return Some(if negative { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;
    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    // Exponent only counts when followed by at least one digit.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerce_matches_parse_float() {
        assert_eq!(coerce_size("1.5"), 1.5);
        assert_eq!(coerce_size("  2.25rem"), 2.25);
        assert_eq!(coerce_size(".5"), 0.5);
        assert_eq!(coerce_size("5."), 5.0);
        assert_eq!(coerce_size("-1.2e1x"), -12.0);
        assert_eq!(coerce_size("3e"), 3.0);
        assert_eq!(coerce_size("+4"), 4.0);
        assert_eq!(coerce_size("1.2.3"), 1.2);
    }

    #[test]
    fn coerce_failures_become_zero() {
        assert_eq!(coerce_size("abc"), 0.0);
        assert_eq!(coerce_size(""), 0.0);
        assert_eq!(coerce_size("."), 0.0);
        assert_eq!(coerce_size("-"), 0.0);
        assert_eq!(coerce_size("Infinity"), 0.0);
        assert_eq!(coerce_size("1e400"), 0.0);
        assert_eq!(coerce_size("Infinityx"), 0.0);
        assert_eq!(coerce_size("-Infinity"), 0.0);
        assert!(coerce_size("-0").is_sign_positive());
    }

    #[test]
    fn set_min_size_coerces_garbage_to_zero() {
        let mut panel = Panel::default();
        panel.set_min_size(SizeLabel::H3, "abc");
        assert_eq!(panel.state().min_sizes[SizeLabel::H3], 0.0);
        assert!(panel.css().contains("--h3-size: clamp(0rem, "));
    }

    #[test]
    fn set_max_size_updates_only_its_label() {
        let mut panel = Panel::default();
        panel.set_max_size(SizeLabel::Body, "1.5");
        assert_eq!(panel.state().max_sizes[SizeLabel::Body], 1.5);
        assert_eq!(panel.state().min_sizes[SizeLabel::Body], 1.125);
        assert_eq!(panel.state().max_sizes[SizeLabel::Small], 0.875);
    }

    #[test]
    fn set_color_stores_text_verbatim() {
        let mut panel = Panel::default();
        panel.set_color(ColorLabel::Primary, "not a color");
        assert_eq!(panel.state().colors[ColorLabel::Primary], "not a color");
        assert!(panel.css().contains("  --color-primary: not a color;\n"));
    }

    #[test]
    fn with_edit_leaves_original_snapshot_untouched() {
        let before = PanelState::default();
        let after = before.with_edit(&Edit::Min {
            label: SizeLabel::H1,
            value: "2".into(),
        });
        assert_eq!(before.min_sizes[SizeLabel::H1], 1.25);
        assert_eq!(after.min_sizes[SizeLabel::H1], 2.0);
    }

    #[test]
    fn css_tracks_every_edit() {
        let mut panel = Panel::default();
        panel.set_min_size(SizeLabel::H2, "1");
        panel.set_max_size(SizeLabel::H2, "2");
        assert_eq!(panel.css(), panel.state().regenerate());
        let expected = format!("--h2-size: {};", panel.state().clamp(SizeLabel::H2));
        assert!(panel.css().contains(&expected));
    }

    #[test]
    fn inverted_sizes_are_kept() {
        let mut panel = Panel::default();
        panel.set_max_size(SizeLabel::H1, "0.5");
        assert_eq!(panel.state().max_sizes[SizeLabel::H1], 0.5);
        assert!(panel.state().fluid_size(SizeLabel::H1).slope_vw(&Viewport::DEFAULT) < 0.0);
    }

    #[test]
    fn edit_json_shape() {
        let edit: Edit =
            serde_json::from_str(r##"{"field":"color","label":"lineColor","value":"#000"}"##)
                .unwrap();
        assert_eq!(
            edit,
            Edit::Color {
                label: ColorLabel::LineColor,
                value: "#000".into()
            }
        );
        let edit: Edit =
            serde_json::from_str(r#"{"field":"max","label":"h6","value":"2"}"#).unwrap();
        assert!(matches!(edit, Edit::Max { label: SizeLabel::H6, .. }));
    }

    #[test]
    fn snapshot_json_round_trips() {
        let state = PanelState::default().with_edit(&Edit::Color {
            label: ColorLabel::GradientEnd,
            value: "red".into(),
        });
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.starts_with(
            r#"{"viewport":{"min":320.0,"max":1240.0},"minSizes":{"h1":1.25"#
        ));
        let back: PanelState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
