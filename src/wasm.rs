//! WASM bindings for Clamp Studio.
//!
//! Exposes the panel core to JavaScript via wasm-bindgen, so a page can run
//! the same formula and CSS generation without the local host.
//! Build with: `wasm-pack build --target web --features wasm`

use wasm_bindgen::prelude::*;

use crate::panel::PanelState;

/// Clamp expression for one min/max pair across the default viewport.
#[wasm_bindgen]
pub fn generate_clamp(min_rem: f64, max_rem: f64) -> String {
    crate::fluid::generate_clamp(min_rem, max_rem, &crate::fluid::Viewport::DEFAULT)
}

/// The default snapshot as JSON.
#[wasm_bindgen]
pub fn default_state() -> Result<String, JsError> {
    serde_json::to_string(&PanelState::default()).map_err(|e| JsError::new(&e.to_string()))
}

/// Generated CSS for a JSON snapshot.
///
/// Throws a JS error if the snapshot is missing labels or names unknown ones.
#[wasm_bindgen]
pub fn generate_css(state_json: &str) -> Result<String, JsError> {
    let state: PanelState =
        serde_json::from_str(state_json).map_err(|e| JsError::new(&e.to_string()))?;
    Ok(state.regenerate())
}

/// Apply one edit (`{"field", "label", "value"}`) to a JSON snapshot.
///
/// Returns the same JSON object the local host answers `POST /edit` with:
/// `state`, `css`, `preview` and `swatches`.
#[wasm_bindgen]
pub fn apply_edit(state_json: &str, edit_json: &str) -> Result<String, JsError> {
    crate::apply_edit_json(state_json, edit_json).map_err(|e| JsError::new(&e.to_string()))
}
