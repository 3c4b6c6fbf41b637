#![deny(unsafe_code)]
//! Shading registry and CPU-side snapshot output for hue-wheel.
//!
//! Sits between `hue-wheel-core` (which defines the `Shading` trait and the
//! renderer) and the front ends, so the CLI and any embedding host share one
//! name-based dispatch.

pub mod pixel;

#[cfg(feature = "png")]
pub mod snapshot;

use hue_wheel_core::error::WheelError;
use hue_wheel_core::geometry::Polar;
use hue_wheel_core::{Hsb, LinearShading, Shading, VisualShading};
use serde_json::Value;

/// All available shading names.
const SHADING_NAMES: &[&str] = &["visual", "linear"];

/// Enumeration of the shading policies selectable by name.
///
/// Wraps each policy and delegates `Shading` trait methods.
/// Use [`ShadingKind::from_name`] for string-based construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShadingKind {
    /// Full saturation with brightness softened toward the center.
    Visual(VisualShading),
    /// Linear radial saturation at a fixed brightness.
    Linear(LinearShading),
}

impl Default for ShadingKind {
    fn default() -> Self {
        ShadingKind::Visual(VisualShading::default())
    }
}

impl ShadingKind {
    /// Constructs a shading policy by name.
    ///
    /// Returns `WheelError::UnknownShading` if the name is not recognized.
    pub fn from_name(name: &str, params: &Value) -> Result<Self, WheelError> {
        match name {
            "visual" => Ok(ShadingKind::Visual(VisualShading::from_json(params))),
            "linear" => Ok(ShadingKind::Linear(LinearShading::from_json(params))),
            _ => Err(WheelError::UnknownShading(name.to_string())),
        }
    }

    /// Returns a slice of all recognized shading names.
    pub fn list_shadings() -> &'static [&'static str] {
        SHADING_NAMES
    }

    /// Registry name of this policy.
    pub fn name(&self) -> &'static str {
        match self {
            ShadingKind::Visual(_) => "visual",
            ShadingKind::Linear(_) => "linear",
        }
    }
}

impl Shading for ShadingKind {
    fn shade(&self, polar: Polar) -> Hsb {
        match self {
            ShadingKind::Visual(s) => s.shade(polar),
            ShadingKind::Linear(s) => s.shade(polar),
        }
    }

    fn params(&self) -> Value {
        match self {
            ShadingKind::Visual(s) => s.params(),
            ShadingKind::Linear(s) => s.params(),
        }
    }

    fn param_schema(&self) -> Value {
        match self {
            ShadingKind::Visual(s) => s.param_schema(),
            ShadingKind::Linear(s) => s.param_schema(),
        }
    }
}
