//! The fluid-size formula: a (min, max) rem pair interpolated linearly across
//! the viewport range and printed as a CSS `clamp()` expression.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StudioError};

/// Default narrowest viewport width in px.
pub const MIN_SCREEN: f64 = 320.0;
/// Default widest viewport width in px.
pub const MAX_SCREEN: f64 = 1240.0;

/// The viewport range a fluid size interpolates across.
///
/// Construction rejects `min >= max` and non-finite bounds, so the slope
/// computation can never divide by zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawViewport")]
pub struct Viewport {
    min: f64,
    max: f64,
}

#[derive(Deserialize)]
struct RawViewport {
    min: f64,
    max: f64,
}

impl TryFrom<RawViewport> for Viewport {
    type Error = StudioError;

    fn try_from(raw: RawViewport) -> Result<Self> {
        Viewport::new(raw.min, raw.max)
    }
}

impl Viewport {
    pub const DEFAULT: Viewport = Viewport {
        min: MIN_SCREEN,
        max: MAX_SCREEN,
    };

    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(StudioError::InvalidViewport { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A minimum/maximum size pair in rem.
///
/// No ordering is enforced: `max_rem < min_rem` yields a negative slope,
/// i.e. text that shrinks as the viewport grows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluidSize {
    pub min_rem: f64,
    pub max_rem: f64,
}

impl FluidSize {
    pub fn new(min_rem: f64, max_rem: f64) -> Self {
        Self { min_rem, max_rem }
    }

    /// Slope in vw: rem gained per 1% of viewport width.
    pub fn slope_vw(&self, viewport: &Viewport) -> f64 {
        ((self.max_rem - self.min_rem) / (viewport.max - viewport.min)) * 100.0
    }

    /// Value of the line at a zero-width viewport, in rem.
    pub fn intercept_rem(&self, viewport: &Viewport) -> f64 {
        self.min_rem - (self.slope_vw(viewport) * viewport.min) / 100.0
    }

    /// Unclamped interpolated size in rem at `width` px.
    pub fn evaluate(&self, viewport: &Viewport, width: f64) -> f64 {
        self.intercept_rem(viewport) + self.slope_vw(viewport) * width / 100.0
    }

    /// Render as `clamp(<min>rem, <slope>vw + <intercept>rem, <max>rem)`.
    pub fn to_clamp(&self, viewport: &Viewport) -> String {
        let slope = self.slope_vw(viewport);
        let intercept = self.min_rem - (slope * viewport.min) / 100.0;
        format!(
            "clamp({}rem, {}vw + {}rem, {}rem)",
            js_number(self.min_rem),
            to_fixed_4(slope),
            to_fixed_4(intercept),
            js_number(self.max_rem),
        )
    }
}

/// Build the clamp expression for one size pair.
pub fn generate_clamp(min_rem: f64, max_rem: f64, viewport: &Viewport) -> String {
    FluidSize::new(min_rem, max_rem).to_clamp(viewport)
}

/// Shortest round-trip rendering of a number, as a browser prints it.
///
/// Plain decimal between `1e-6` and `1e21`, exponent form outside that
/// range, and `0` for negative zero.
pub(crate) fn js_number(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if v == 0.0 {
        return "0".to_string();
    }
    let abs = v.abs();
    if (1e-6..1e21).contains(&abs) {
        return format!("{v}");
    }
    let exp = format!("{v:e}");
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
        _ => exp,
    }
}

/// Fixed four-decimal rendering with round-half-up on exact ties.
pub(crate) fn to_fixed_4(v: f64) -> String {
    if !v.is_finite() || v.abs() >= 1e21 {
        return js_number(v);
    }
    if v == 0.0 {
        return "0.0000".to_string();
    }
    // An exact tie at the fifth decimal only happens for odd multiples of 1/32.
    let t = v.abs() * 32.0;
    if t.fract() == 0.0 && t % 2.0 == 1.0 {
        return format!("{:.4}", v + v.signum() * 0.000005);
    }
    format!("{v:.4}")
}
