pub mod config;
pub mod error;
pub mod fluid;
pub mod labels;
pub mod panel;
pub mod preview;
pub mod stylesheet;

#[cfg(not(target_arch = "wasm32"))]
pub mod logging;
#[cfg(not(target_arch = "wasm32"))]
pub mod server;

#[cfg(feature = "wasm")]
pub mod wasm;

use serde::Serialize;

use error::Result;
use labels::{ColorLabel, LabelTable};
use panel::{Edit, Panel, PanelState};
use preview::PreviewStyles;

pub use fluid::{generate_clamp, FluidSize, Viewport};

/// Everything a panel view needs after an edit: the replacement snapshot
/// and the output derived from it.
#[derive(Debug, Clone, Serialize)]
pub struct EditResponse {
    pub state: PanelState,
    pub css: String,
    pub preview: PreviewStyles,
    pub swatches: LabelTable<ColorLabel, String>,
}

impl EditResponse {
    pub fn from_panel(panel: Panel) -> Self {
        let preview = preview::preview_styles(panel.state());
        let swatches = preview::swatches(panel.state());
        let (state, css) = panel.into_parts();
        Self {
            state,
            css,
            preview,
            swatches,
        }
    }
}

/// Apply one edit to a snapshot and derive the new output.
pub fn apply_edit(state: PanelState, edit: Edit) -> EditResponse {
    let mut panel = Panel::new(state);
    panel.apply(edit);
    EditResponse::from_panel(panel)
}

/// JSON-in, JSON-out form of [`apply_edit`], shared by the host and the
/// wasm bindings.
pub fn apply_edit_json(state_json: &str, edit_json: &str) -> Result<String> {
    let state: PanelState = serde_json::from_str(state_json)?;
    let edit: Edit = serde_json::from_str(edit_json)?;
    Ok(serde_json::to_string(&apply_edit(state, edit))?)
}

/// Generated CSS for the built-in defaults.
pub fn default_css() -> String {
    PanelState::default().regenerate()
}
