//! Tunables for every interactive component
//!
//! Defaults reproduce the stock look. A page can override any subset by
//! putting JSON on `<body data-fx-config='...'>`; keys are camelCase.

use serde::{Deserialize, Deserializer};

use crate::error::FxError;
use crate::primitives::{Opacity, Scale};

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct FxConfig {
    pub rotation: RotationConfig,
    pub tilt: TiltConfig,
    pub particles: ParticleConfig,
    pub color: ColorConfig,
    pub progress: ProgressConfig,
    pub layout: Breakpoints,
}

impl FxConfig {
    pub fn from_json(raw: &str) -> Result<Self, FxError> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RotationConfig {
    pub period_ms: u32,
    /// Degrees added to both X and Y per tick
    pub step_deg: f32,
    /// Degrees of tilt per pixel of pointer offset from center
    pub pointer_gain: f32,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            period_ms: 50,
            step_deg: 0.5,
            pointer_gain: 0.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TiltConfig {
    #[serde(deserialize_with = "positive_finite")]
    pub card_divisor: f32,
    pub perspective_px: f32,
    #[serde(deserialize_with = "positive_finite")]
    pub parallax_divisor: f32,
    pub lift_px: f32,
    /// Seconds between consecutive floating cards' animation starts
    pub float_stagger_s: f32,
    pub glow_inner: Opacity,
    pub glow_outer: Opacity,
    pub glow_rest: Opacity,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            card_divisor: 25.0,
            perspective_px: 1000.0,
            parallax_divisor: 20.0,
            lift_px: -10.0,
            float_stagger_s: 0.2,
            glow_inner: Opacity::new(0.2),
            glow_outer: Opacity::new(0.05),
            glow_rest: Opacity::new(0.1),
        }
    }
}

fn positive_finite<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f32, D::Error> {
    let value = f32::deserialize(deserializer)?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(serde::de::Error::custom(format!("divisor {value} must be positive")))
    }
}

/// Half-open sampling range `[min, max)`
///
/// Deserialized spans have finite bounds and a finite width.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "SpanBounds")]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

#[derive(Deserialize)]
struct SpanBounds {
    min: f32,
    max: f32,
}

impl TryFrom<SpanBounds> for Span {
    type Error = String;

    fn try_from(SpanBounds { min, max }: SpanBounds) -> Result<Self, Self::Error> {
        if (max - min).is_finite() {
            Ok(Self { min, max })
        } else {
            Err(format!("span [{min}, {max}) has no finite width"))
        }
    }
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    #[cfg(test)]
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value < self.max
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParticleConfig {
    pub delay_s: Span,
    pub duration_s: Span,
    pub size_px: Span,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            delay_s: Span::new(0.0, 5.0),
            duration_s: Span::new(3.0, 10.0),
            size_px: Span::new(5.0, 20.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColorConfig {
    pub period_ms: u32,
    pub step: u16,
    /// Hue distance between the two gradient stops
    pub spread: u16,
    pub saturation: u8,
    pub lightness: u8,
    pub angle_deg: f32,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            period_ms: 100,
            step: 1,
            spread: 60,
            saturation: 100,
            lightness: 60,
            angle_deg: 45.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProgressConfig {
    pub reveal_delay_ms: u32,
    pub hover_scale: Scale,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            reveal_delay_ms: 1000,
            hover_scale: Scale::HOVER,
        }
    }
}

/// Viewport widths (px) at which button layouts change
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Breakpoints {
    /// General button groups drop to icons below this width
    pub compact_below: f32,
    /// Trip-view buttons stack vertically below this width
    pub stack_below: f32,
    /// Trip-view buttons wrap below this width
    pub wrap_below: f32,
    /// Trip-view sync label hides below this width
    pub sync_label_below: f32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            compact_below: 576.0,
            stack_below: 400.0,
            wrap_below: 768.0,
            sync_label_below: 576.0,
        }
    }
}
