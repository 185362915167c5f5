use crate::panel::Panel;
use super::css::build_css;
use super::inline_js::build_inline_js;
use super::panels::{build_color_controls, build_output, build_preview, build_typography_controls};
use super::util::{html_escape, json_for_script};

pub(super) const PAGE_TITLE: &str = "Clamp Typography &amp; Color Generator";

/// The full panel page for a freshly mounted panel.
pub(super) fn build_panel_page(panel: &Panel) -> serde_json::Result<String> {
    let state = panel.state();
    let state_json = json_for_script(state)?;

    let css = build_css();
    let typography = build_typography_controls(state);
    let colors = build_color_controls(state);
    let preview = build_preview(state);
    let output = build_output(panel.css());
    let inline_js = build_inline_js(&state_json);

    Ok(format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Clamp Studio</title>
<style>
{css}
</style>
</head>
<body>
<div class="page">
<h1 class="page-title">{title}</h1>
<div class="columns">
  <div class="controls">
{typography}
{colors}
  </div>
  <div class="preview-column">
{preview}
  </div>
</div>
{output}
</div>
{inline_js}
</body>
</html>"##,
        title = PAGE_TITLE,
    ))
}

pub(super) fn build_error_page(error: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Clamp Studio — Error</title>
<style>
  * {{ margin: 0; padding: 0; box-sizing: border-box; }}
  body {{ font-family: system-ui, sans-serif; color: #1F1F1F; }}
  .error-container {{
    max-width: 640px; margin: 80px auto; padding: 32px;
    border: 1px solid #FCA5A5; border-radius: 8px; background: #FEF2F2;
  }}
  .error-header {{ font-size: 14px; color: #B91C1C; margin-bottom: 16px; }}
  .error-message {{
    font-family: ui-monospace, monospace; font-size: 12px; line-height: 1.7;
    white-space: pre-wrap; word-break: break-word; color: #B91C1C;
  }}
</style>
</head>
<body>
<div class="error-container">
  <div class="error-header">Clamp Studio — panel could not be rendered</div>
  <div class="error-message">{}</div>
</div>
</body>
</html>"##,
        html_escape(error),
    )
}
