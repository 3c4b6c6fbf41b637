#![deny(unsafe_code)]
//! Core types for the hue-wheel color picker.
//!
//! Provides the HSB/RGB color types (`Hsb`, `Rgb`), wheel geometry (`Viewport`,
//! `Point`, `polar`), the `Shading` policies that decide what the wheel paints,
//! the per-pixel renderer with its `WheelCache`, the pointer mapper
//! (`color_at`), and the host-side `SelectionState`.

pub mod color;
pub mod error;
pub mod geometry;
pub mod mapper;
pub mod params;
pub mod raster;
pub mod render;
pub mod selection;
pub mod shading;

pub use color::{hsb_to_rgb, rgb_to_hsb, Hsb, Rgb};
pub use error::WheelError;
pub use geometry::{polar, Point, Polar, Viewport};
pub use mapper::{color_at, to_rgb};
pub use raster::Raster;
pub use render::{paint_color, render, render_with, WheelCache};
pub use selection::{PointerEvent, SelectionState};
pub use shading::{LinearShading, Shading, VisualShading};
