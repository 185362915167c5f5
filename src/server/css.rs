/// Stylesheet for the panel chrome. Preview elements are styled inline and
/// only inherit box spacing from here.
pub(super) fn build_css() -> &'static str {
    r#"* { margin: 0; padding: 0; box-sizing: border-box; }
html, body { background: #FFFFFF; color: #1F1F1F;
  font-family: system-ui, -apple-system, 'Segoe UI', sans-serif; font-size: 16px; }

/* ── Page ────────────────────────────────────────── */
.page { max-width: 80rem; margin: 0 auto; padding: 2rem 1rem; }
.page-title { font-size: 1.875rem; font-weight: 700; margin-bottom: 1rem; }
.section-title { font-size: 1.25rem; font-weight: 600; margin-bottom: 0.5rem; }
.section-title.spaced { margin-top: 1rem; }

/* ── Split view ──────────────────────────────────── */
.columns { display: grid; grid-template-columns: 1fr; gap: 1.5rem; }
@media (min-width: 768px) {
  .columns { grid-template-columns: 1fr 1fr; }
}

/* ── Controls ────────────────────────────────────── */
.size-row { margin-bottom: 0.5rem; }
.size-row .row-label { display: block; text-transform: capitalize; }
.size-inputs { display: flex; align-items: center; gap: 0.5rem; }
.size-inputs input {
  width: 5rem; padding: 0.25rem 0.5rem; border: 1px solid #D4D4D4;
  border-radius: 4px; font: inherit;
}
.color-row { display: flex; align-items: center; margin-bottom: 0.5rem; }
.color-row .row-label { width: 8rem; text-transform: capitalize; }
.color-row .swatch {
  width: 4rem; height: 2rem; border: 1px solid #D4D4D4; border-radius: 4px;
  background: none; cursor: pointer;
}
.color-row .color-text {
  flex: 1; margin-left: 0.5rem; padding: 0.25rem 0.5rem;
  border: 1px solid #D4D4D4; border-radius: 4px; font: inherit;
}

/* ── Preview ─────────────────────────────────────── */
.preview { border: 1px solid #D4D4D4; border-radius: 4px; padding: 1rem; }
.preview > * + * { margin-top: 0.5rem; }
.gradient-bar { height: 2.5rem; width: 100%; border-radius: 4px; }

/* ── Output ──────────────────────────────────────── */
.output-header { display: flex; align-items: center; gap: 0.5rem; margin: 1rem 0 0.5rem; }
.output-header .section-title { margin: 0; }
.output-header .actions { margin-left: auto; display: flex; gap: 0.5rem; }
.output-header .actions button, .output-header .actions a {
  background: #F5F5F5; border: 1px solid #D4D4D4; color: #1F1F1F;
  padding: 0.25rem 0.75rem; border-radius: 4px; font-size: 0.875rem;
  cursor: pointer; font-family: inherit; text-decoration: none;
}
.output-header .actions button.copied { color: #16A34A; border-color: #16A34A; }
.css-output {
  width: 100%; height: 15rem; padding: 0.5rem; border: 1px solid #D4D4D4;
  border-radius: 4px; font-family: 'JetBrains Mono', ui-monospace, monospace;
  font-size: 0.875rem; resize: vertical;
}
"#
}
