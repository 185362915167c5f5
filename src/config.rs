//! Optional TOML configuration seeding the panel's initial snapshot.
//!
//! ```toml
//! [viewport]
//! min = 320
//! max = 1240
//!
//! [sizes.h1]
//! min = 1.25
//! max = 3.125
//!
//! [colors]
//! gradientStart = "#001de7"
//! ```
//!
//! Every section and key is optional. Unknown labels or keys, non-finite
//! sizes, and an empty or inverted viewport are rejected.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, StudioError};
use crate::fluid::Viewport;
use crate::labels::{ColorLabel, Label, SizeLabel};
use crate::panel::PanelState;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    viewport: RawBounds,
    #[serde(default)]
    sizes: BTreeMap<SizeLabel, RawBounds>,
    #[serde(default)]
    colors: BTreeMap<ColorLabel, String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawBounds {
    min: Option<f64>,
    max: Option<f64>,
}

/// Read and validate a configuration file into an initial snapshot.
pub fn load_config(path: &Path) -> Result<PanelState> {
    let text = std::fs::read_to_string(path).map_err(|source| StudioError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let state = parse_config(&text, path)?;
    tracing::info!(path = %path.display(), "loaded config");
    Ok(state)
}

/// Parse configuration text; `path` is only used in error messages.
pub fn parse_config(text: &str, path: &Path) -> Result<PanelState> {
    let raw: RawConfig = toml::from_str(text).map_err(|source| StudioError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;
    apply(raw).map_err(|e| StudioError::ConfigInvalid {
        path: path.to_path_buf(),
        source: Box::new(e),
    })
}

fn apply(raw: RawConfig) -> Result<PanelState> {
    let mut state = PanelState::default();

    let min = raw.viewport.min.unwrap_or(state.viewport.min());
    let max = raw.viewport.max.unwrap_or(state.viewport.max());
    state.viewport = Viewport::new(min, max)?;

    for (label, bounds) in raw.sizes {
        if let Some(v) = bounds.min {
            state.min_sizes.set(label, finite_size(label, v)?);
        }
        if let Some(v) = bounds.max {
            state.max_sizes.set(label, finite_size(label, v)?);
        }
        tracing::debug!(label = label.as_str(), "size override");
    }

    for (label, value) in raw.colors {
        tracing::debug!(label = label.as_str(), value = %value, "color override");
        state.colors.set(label, value);
    }

    Ok(state)
}

fn finite_size(label: SizeLabel, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(StudioError::NonFiniteSize {
            label: label.as_str(),
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn parse(text: &str) -> Result<PanelState> {
        parse_config(text, Path::new("studio.toml"))
    }

    #[test]
    fn empty_config_is_defaults() {
        assert_eq!(parse("").unwrap(), PanelState::default());
    }

    #[test]
    fn overrides_apply_to_named_labels_only() {
        let state = parse(
            r##"
            [viewport]
            max = 1440

            [sizes.h2]
            max = 3

            [sizes.small]
            min = 0.75

            [colors]
            gradientStart = "#123456"
            lineColor = "hsl(0 0% 90%)"
            "##,
        )
        .unwrap();

        assert_eq!(state.viewport, Viewport::new(320.0, 1440.0).unwrap());
        assert_eq!(state.max_sizes[SizeLabel::H2], 3.0);
        assert_eq!(state.min_sizes[SizeLabel::H2], 1.875);
        assert_eq!(state.min_sizes[SizeLabel::Small], 0.75);
        assert_eq!(state.colors[ColorLabel::GradientStart], "#123456");
        assert_eq!(state.colors[ColorLabel::LineColor], "hsl(0 0% 90%)");
        assert_eq!(state.colors[ColorLabel::Heading], "#1c1c1c");
    }

    #[test]
    fn rejects_degenerate_viewport() {
        let err = parse("[viewport]\nmin = 800\nmax = 800\n").unwrap_err();
        assert!(matches!(
            err,
            StudioError::ConfigInvalid { ref source, .. }
                if matches!(**source, StudioError::InvalidViewport { .. })
        ));
    }

    #[test]
    fn rejects_unknown_labels() {
        assert!(matches!(
            parse("[sizes.h7]\nmin = 1\n"),
            Err(StudioError::ConfigParse { .. })
        ));
        assert!(matches!(
            parse("[colors]\naccent = \"#fff\"\n"),
            Err(StudioError::ConfigParse { .. })
        ));
        assert!(matches!(
            parse("[sizes.h1]\nmid = 1\n"),
            Err(StudioError::ConfigParse { .. })
        ));
    }

    #[test]
    fn rejects_non_finite_sizes() {
        let err = parse("[sizes.body]\nmax = inf\n").unwrap_err();
        assert!(err.to_string().contains("size for `body` must be finite"), "{err}");
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.toml");
        assert!(matches!(load_config(&path), Err(StudioError::ConfigRead { .. })));
    }

    #[test]
    fn load_reads_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("studio.toml");
        std::fs::write(&path, "[colors]\nbody = \"#000000\"\n").unwrap();
        let state = load_config(&path).unwrap();
        assert_eq!(state.colors[ColorLabel::Body], "#000000");
    }
}
