//! CSS text generation: the `:root` custom-property block and the example
//! rules that consume it.

use std::fmt::Write;

use crate::labels::{ColorLabel, Label, SizeLabel};
use crate::panel::PanelState;

pub const HEADER_COMMENT: &str = "/* Auto-generated clamp typography and color system */";
pub const USAGE_COMMENT: &str = "/* Example usage */";

/// Custom property name for a size label, e.g. `--h1-size`.
pub fn size_property(label: SizeLabel) -> String {
    format!("--{}-size", label.as_str())
}

/// Custom property name for a color label, e.g. `--color-gradientStart`.
pub fn color_property(label: ColorLabel) -> String {
    format!("--color-{}", label.as_str())
}

/// Render the full stylesheet for one snapshot.
///
/// Declarations follow declared label order regardless of edit history.
pub fn generate_css(state: &PanelState) -> String {
    let mut css = String::with_capacity(1536);
    css.push_str(HEADER_COMMENT);
    css.push_str("\n:root {\n");
    for &label in SizeLabel::ALL {
        let _ = writeln!(css, "  {}: {};", size_property(label), state.clamp(label));
    }
    for (label, value) in state.colors.iter() {
        let _ = writeln!(css, "  {}: {};", color_property(label), value);
    }
    css.push_str("}\n\n");
    css.push_str(USAGE_COMMENT);
    css.push('\n');
    css.push_str(&example_rules());
    css
}

/// The fixed selector rules appended after the `:root` block.
pub fn example_rules() -> String {
    let mut rules = String::new();
    for label in SizeLabel::HEADINGS {
        let _ = writeln!(
            rules,
            "{} {{ font-size: var({}); color: var({}); }}",
            label.as_str(),
            size_property(label),
            color_property(ColorLabel::Heading),
        );
    }
    let _ = writeln!(
        rules,
        "p {{ font-size: var({}); color: var({}); }}",
        size_property(SizeLabel::Body),
        color_property(ColorLabel::Body),
    );
    let _ = writeln!(
        rules,
        ".small-text {{ font-size: var({}); }}",
        size_property(SizeLabel::Small),
    );
    rules
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::{Edit, Panel};

    #[test]
    fn root_block_lists_sizes_then_colors() {
        let css = generate_css(&PanelState::default());
        let lines: Vec<&str> = css.lines().collect();
        assert_eq!(lines[0], HEADER_COMMENT);
        assert_eq!(lines[1], ":root {");
        assert_eq!(lines[2], "  --h1-size: clamp(1.25rem, 0.2038vw + 0.5978rem, 3.125rem);");
        assert_eq!(lines[9], "  --small-size: clamp(0.875rem, 0.0000vw + 0.8750rem, 0.875rem);");
        assert_eq!(lines[10], "  --color-heading: #1c1c1c;");
        assert_eq!(lines[20], "  --color-lineColor: #e5e5e5;");
        assert_eq!(lines[21], "}");
        assert_eq!(lines[22], "");
        assert_eq!(lines[23], USAGE_COMMENT);
        assert_eq!(lines.len(), 32);
    }

    #[test]
    fn example_rules_reference_properties() {
        let rules = example_rules();
        assert!(
            rules.starts_with("h1 { font-size: var(--h1-size); color: var(--color-heading); }\n")
        );
        assert!(rules.contains("p { font-size: var(--body-size); color: var(--color-body); }\n"));
        assert!(rules.ends_with(".small-text { font-size: var(--small-size); }\n"));
        assert_eq!(rules.lines().count(), 8);
    }

    #[test]
    fn regeneration_is_idempotent() {
        let state = PanelState::default();
        assert_eq!(generate_css(&state), generate_css(&state));

        let mut panel = Panel::default();
        panel.set_color(ColorLabel::Section, "#abcdef");
        let first = panel.css().to_string();
        panel.regenerate();
        assert_eq!(panel.css(), first);
    }

    #[test]
    fn order_ignores_edit_history() {
        let edits = [
            Edit::Color {
                label: ColorLabel::LineColor,
                value: "#111".into(),
            },
            Edit::Min {
                label: SizeLabel::Small,
                value: "0.75".into(),
            },
            Edit::Color {
                label: ColorLabel::Heading,
                value: "#222".into(),
            },
            Edit::Max {
                label: SizeLabel::H1,
                value: "4".into(),
            },
        ];
        let mut forward = PanelState::default();
        for e in &edits {
            forward = forward.with_edit(e);
        }
        let mut backward = PanelState::default();
        for e in edits.iter().rev() {
            backward = backward.with_edit(e);
        }
        let css = generate_css(&forward);
        assert_eq!(css, generate_css(&backward));

        let positions: Vec<usize> = SizeLabel::ALL
            .iter()
            .map(|&l| size_property(l))
            .chain(ColorLabel::ALL.iter().map(|&l| color_property(l)))
            .map(|p| css.find(&format!("  {p}: ")).expect("declaration present"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
