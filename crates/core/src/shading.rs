//! Shading policies: how a wheel position is painted.
//!
//! The pointer mapper always reports linear radial saturation. What the
//! rendered wheel *shows* is a separate decision captured by a [`Shading`]
//! implementation. [`VisualShading`] is the product look: full saturation
//! everywhere (the visual saturation override) with brightness softened toward
//! the center. [`LinearShading`] paints exactly what the mapper reports.

use serde_json::{json, Value};

use crate::color::Hsb;
use crate::geometry::Polar;
use crate::params::param_f64;

/// Default exponent applied to the raw radial saturation when painting.
/// `x^0 == 1`, so the default paints every pixel fully saturated.
const DEFAULT_SATURATION_EXPONENT: f64 = 0.0;
/// Default brightness at the rim of the wheel.
const DEFAULT_BRIGHTNESS_FLOOR: f64 = 0.8;
/// Default brightness used by [`LinearShading`].
const DEFAULT_LINEAR_BRIGHTNESS: f64 = 1.0;

/// A policy mapping wheel coordinates to the color painted there.
///
/// Object-safe; `Sync` so one policy can be shared by parallel row workers.
pub trait Shading: Sync {
    /// Color painted at the given wheel position.
    fn shade(&self, polar: Polar) -> Hsb;

    /// Current parameter values as a JSON object.
    fn params(&self) -> Value;

    /// Schema describing the parameters, their types, ranges, and defaults.
    fn param_schema(&self) -> Value;
}

/// The default wheel look.
///
/// `saturation = raw ^ saturation_exponent` and
/// `brightness = brightness_floor + (1 - brightness_floor) * (1 - raw)`,
/// where `raw` is the linear radial saturation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualShading {
    pub saturation_exponent: f64,
    pub brightness_floor: f64,
}

impl Default for VisualShading {
    fn default() -> Self {
        Self {
            saturation_exponent: DEFAULT_SATURATION_EXPONENT,
            brightness_floor: DEFAULT_BRIGHTNESS_FLOOR,
        }
    }
}

impl VisualShading {
    /// Extracts parameters from a JSON object, falling back to defaults.
    ///
    /// `saturation_exponent` is clamped to be non-negative and
    /// `brightness_floor` to [0, 1].
    pub fn from_json(params: &Value) -> Self {
        Self {
            saturation_exponent: param_f64(
                params,
                "saturation_exponent",
                DEFAULT_SATURATION_EXPONENT,
            )
            .max(0.0),
            brightness_floor: param_f64(params, "brightness_floor", DEFAULT_BRIGHTNESS_FLOOR)
                .clamp(0.0, 1.0),
        }
    }
}

impl Shading for VisualShading {
    fn shade(&self, polar: Polar) -> Hsb {
        let raw = polar.raw_saturation;
        let saturation = raw.powf(self.saturation_exponent);
        let brightness = self.brightness_floor + (1.0 - self.brightness_floor) * (1.0 - raw);
        Hsb::new(polar.hue, saturation, brightness)
    }

    fn params(&self) -> Value {
        json!({
            "saturation_exponent": self.saturation_exponent,
            "brightness_floor": self.brightness_floor,
        })
    }

    fn param_schema(&self) -> Value {
        json!({
            "saturation_exponent": {
                "type": "f64",
                "min": 0.0,
                "default": DEFAULT_SATURATION_EXPONENT,
                "description": "Exponent applied to radial saturation; 0 paints full saturation everywhere"
            },
            "brightness_floor": {
                "type": "f64",
                "min": 0.0,
                "max": 1.0,
                "default": DEFAULT_BRIGHTNESS_FLOOR,
                "description": "Brightness at the rim; rises linearly to 1 at the center"
            }
        })
    }
}

/// Paints the same color the pointer mapper reports: linear radial saturation
/// at a fixed brightness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearShading {
    pub brightness: f64,
}

impl Default for LinearShading {
    fn default() -> Self {
        Self {
            brightness: DEFAULT_LINEAR_BRIGHTNESS,
        }
    }
}

impl LinearShading {
    /// Extracts parameters from a JSON object, falling back to defaults.
    pub fn from_json(params: &Value) -> Self {
        Self {
            brightness: param_f64(params, "brightness", DEFAULT_LINEAR_BRIGHTNESS)
                .clamp(0.0, 1.0),
        }
    }
}

impl Shading for LinearShading {
    fn shade(&self, polar: Polar) -> Hsb {
        Hsb::new(polar.hue, polar.raw_saturation, self.brightness)
    }

    fn params(&self) -> Value {
        json!({ "brightness": self.brightness })
    }

    fn param_schema(&self) -> Value {
        json!({
            "brightness": {
                "type": "f64",
                "min": 0.0,
                "max": 1.0,
                "default": DEFAULT_LINEAR_BRIGHTNESS,
                "description": "Brightness painted across the whole wheel"
            }
        })
    }
}
