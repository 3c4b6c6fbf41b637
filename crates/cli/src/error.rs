//! Failures of the `hue-wheel` commands and their process exit codes.
//!
//! Input problems are caught before any pixel is allocated; only failures that
//! happen while rendering or writing reach the wheel/snapshot variants.
//!
//! | code | meaning |
//! |------|---------|
//! | 2    | clap argument error (before `run`) |
//! | 10   | wheel error (unknown shading) |
//! | 11   | snapshot could not be written |
//! | 12   | unusable viewport or `--params` |
//! | 13   | JSON report could not be produced |

use hue_wheel_core::WheelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// Negative, NaN, or infinite viewport size.
    #[error("viewport {width}x{height} is invalid: sizes must be finite and non-negative")]
    Viewport { width: f64, height: f64 },

    /// The viewport covers no whole pixel, so there is nothing to write.
    #[error("viewport {width}x{height} covers no pixels; nothing to render")]
    EmptyRender { width: f64, height: f64 },

    /// The viewport would need more pixels than a snapshot may hold.
    #[error("viewport {width}x{height} is too large to render (limit {max_side} px per side, {max_pixels} px total)")]
    RenderTooLarge {
        width: usize,
        height: usize,
        max_side: usize,
        max_pixels: usize,
    },

    /// `--params` was not a JSON value.
    #[error("invalid --params JSON: {0}")]
    Params(String),

    /// Shading lookup or rendering failed.
    #[error(transparent)]
    Wheel(WheelError),

    /// The PNG could not be written.
    #[error("could not write snapshot: {0}")]
    Snapshot(String),

    /// The JSON report could not be serialized.
    #[error("could not serialize report: {0}")]
    Report(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Wheel(_) => 10,
            CliError::Snapshot(_) => 11,
            CliError::Viewport { .. }
            | CliError::EmptyRender { .. }
            | CliError::RenderTooLarge { .. }
            | CliError::Params(_) => 12,
            CliError::Report(_) => 13,
        }
    }
}

impl From<WheelError> for CliError {
    fn from(e: WheelError) -> Self {
        match e {
            WheelError::Io(msg) => CliError::Snapshot(msg),
            other => CliError::Wheel(other),
        }
    }
}
