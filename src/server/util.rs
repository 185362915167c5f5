use serde::Serialize;

pub(super) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// Escape for a double-quoted attribute value.
pub(super) fn attr_escape(s: &str) -> String {
    html_escape(s).replace('"', "&quot;")
}

/// JSON for embedding in an inline `<script>` block.
///
/// `</` becomes `<\/` so a value containing `</script>` cannot close the
/// block early.
pub(super) fn json_for_script<T: Serialize>(value: &T) -> serde_json::Result<String> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}
