use crate::fluid::js_number;
use crate::labels::{Label, SizeLabel};
use crate::panel::PanelState;
use crate::preview::{is_single_value, preview_styles, swatch_value};
use super::util::{attr_escape, html_escape};

/// Left column, typography half: one min/max pair per size label.
pub(super) fn build_typography_controls(state: &PanelState) -> String {
    let mut html = String::from(r#"<h2 class="section-title">Typography</h2>"#);
    for &label in SizeLabel::ALL {
        let name = label.as_str();
        html.push_str(&format!(
            r#"
<div class="size-row">
  <label class="row-label" for="min-{name}">{name}</label>
  <div class="size-inputs">
    <input type="number" step="0.05" id="min-{name}" data-field="min" data-label="{name}" value="{min}">
    <span>-</span>
    <input type="number" step="0.05" id="max-{name}" data-field="max" data-label="{name}" value="{max}">
    <span>rem</span>
  </div>
</div>"#,
            min = js_number(state.min_sizes[label]),
            max = js_number(state.max_sizes[label]),
        ));
    }
    html
}

/// Left column, palette half: swatch plus free text per color label.
pub(super) fn build_color_controls(state: &PanelState) -> String {
    let mut html = String::from(r#"<h2 class="section-title spaced">Colors</h2>"#);
    for (label, value) in state.colors.iter() {
        let name = label.as_str();
        html.push_str(&format!(
            r#"
<div class="color-row">
  <label class="row-label" for="text-{name}">{name}</label>
  <input type="color" class="swatch" id="swatch-{name}" data-field="color" data-label="{name}" value="{swatch}">
  <input type="text" class="color-text" id="text-{name}" data-field="color" data-label="{name}" value="{value}">
</div>"#,
            swatch = swatch_value(value),
            value = attr_escape(value),
        ));
    }
    html
}

/// Right column: styled sample text and the gradient bar.
pub(super) fn build_preview(state: &PanelState) -> String {
    let styles = preview_styles(state);
    let mut html = format!(
        r#"<h2 class="section-title">Preview</h2>
<div class="preview" id="preview" style="{}">"#,
        declaration("background-color", &styles.background),
    );
    for el in &styles.elements {
        let class = el
            .class
            .map(|c| format!(r#" class="{c}""#))
            .unwrap_or_default();
        html.push_str(&format!(
            "\n  <{tag} id=\"{id}\"{class} style=\"{style}\">{text}</{tag}>",
            tag = el.tag,
            id = el.id,
            style = attr_escape(&el.inline_style()),
            text = html_escape(el.text),
        ));
    }
    html.push_str(&format!(
        "\n  <div class=\"gradient-bar\" id=\"preview-gradient\" style=\"{}\"></div>\n</div>",
        declaration("background", &styles.gradient),
    ));
    html
}

/// `property: value;` for a style attribute, or nothing when the value would
/// add declarations of its own.
fn declaration(property: &str, value: &str) -> String {
    if is_single_value(value) {
        attr_escape(&format!("{property}: {value};"))
    } else {
        String::new()
    }
}

/// Read-only generated CSS with copy and download actions.
pub(super) fn build_output(css: &str) -> String {
    format!(
        r#"<div class="output-header">
  <h2 class="section-title">Generated CSS</h2>
  <div class="actions">
    <button id="copy-css" onclick="copyCss(this)">Copy</button>
    <button id="download-css" onclick="downloadCss()">Download</button>
  </div>
</div>
<textarea class="css-output" id="css-output" readonly>{}</textarea>"#,
        html_escape(css),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::ColorLabel;
    use crate::panel::Edit;

    #[test]
    fn typography_controls_cover_every_label() {
        let html = build_typography_controls(&PanelState::default());
        for &label in SizeLabel::ALL {
            assert!(html.contains(&format!(r#"id="min-{}""#, label.as_str())));
            assert!(html.contains(&format!(r#"id="max-{}""#, label.as_str())));
        }
        assert!(html.contains(r#"id="max-h4" data-field="max" data-label="h4" value="2""#));
        assert_eq!(html.matches(r#"step="0.05""#).count(), 16);
    }

    #[test]
    fn color_controls_escape_raw_text() {
        let state = PanelState::default().with_edit(&Edit::Color {
            label: ColorLabel::Section,
            value: r#""><script>"#.into(),
        });
        let html = build_color_controls(&state);
        assert!(!html.contains("<script>"));
        assert!(html.contains(
            r##"id="swatch-section" data-field="color" data-label="section" value="#000000""##
        ));
        assert!(html.contains(
            r##"id="swatch-gradientStart" data-field="color" data-label="gradientStart" value="#001de7""##
        ));
    }

    #[test]
    fn preview_renders_samples_in_order() {
        let html = build_preview(&PanelState::default());
        let h1 = html.find(r#"<h1 id="preview-h1""#).unwrap();
        let h6 = html.find(r#"<h6 id="preview-h6""#).unwrap();
        let small = html.find(r#"<p id="preview-small" class="small-text""#).unwrap();
        assert!(h1 < h6 && h6 < small);
        assert!(html.contains("background-color: #f7f7f7;"));
        assert!(html.contains("linear-gradient(90deg, #001de7, #ff6600)"));
    }

    #[test]
    fn preview_skips_colors_that_inject_declarations() {
        let state = PanelState::default()
            .with_edit(&Edit::Color {
                label: ColorLabel::Background,
                value: "red; position:fixed; inset:0".into(),
            })
            .with_edit(&Edit::Color {
                label: ColorLabel::GradientEnd,
                value: "blue;height:100vh".into(),
            })
            .with_edit(&Edit::Color {
                label: ColorLabel::Heading,
                value: "red; position:fixed".into(),
            });
        let html = build_preview(&state);
        assert!(!html.contains("position:fixed"));
        assert!(!html.contains("height:100vh"));
        assert!(html.contains(r#"<div class="preview" id="preview" style="">"#));
        assert!(html.contains(r#"id="preview-gradient" style="""#));
        assert!(html.contains(r#"<p id="preview-body" style="font-size: "#));
        assert!(html.contains("color: #333333;"));
    }

    #[test]
    fn output_is_escaped_textarea() {
        let html = build_output("a { content: '<b>'; }");
        assert!(html.contains(r#"onclick="downloadCss()""#));
        assert!(!html.contains("href=\"/export/css\""));
        assert!(html.contains("readonly>a { content: '&lt;b&gt;'; }</textarea>"));
    }
}
