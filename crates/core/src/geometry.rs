//! Wheel geometry: viewports, points, and the polar decomposition shared by the
//! renderer and the pointer mapper.
//!
//! Every coordinate is measured relative to the viewport center
//! `(width / 2, height / 2)`, and distances are normalized by the bounding
//! radius `sqrt((width / 2)^2 + (height / 2)^2)`, i.e. half the diagonal.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};

use crate::color::wrap_unit;

/// A coordinate in raster space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<Point> for DVec2 {
    fn from(p: Point) -> Self {
        DVec2::new(p.x, p.y)
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Point::new(v.x, v.y)
    }
}

/// The rectangular surface the wheel is drawn into.
///
/// Dimensions are expected to be non-negative; a zero-size viewport is
/// tolerated and yields zero saturation everywhere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Center of the viewport.
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Bounding radius: distance from the center to a corner.
    pub fn radius(&self) -> f64 {
        DVec2::new(self.width / 2.0, self.height / 2.0).length()
    }

    /// Number of whole pixel columns and rows covered by this viewport.
    ///
    /// Fractional sizes are truncated; negative or non-finite sizes yield 0.
    pub fn pixel_dims(&self) -> (usize, usize) {
        (to_pixels(self.width), to_pixels(self.height))
    }
}

fn to_pixels(extent: f64) -> usize {
    if extent.is_finite() && extent > 0.0 {
        extent as usize
    } else {
        0
    }
}

/// A point expressed in wheel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polar {
    /// Angle from the center mapped to [0, 1): `(atan2(dy, dx) + PI) / TAU`.
    pub hue: f64,
    /// Euclidean distance from the center, in pixels.
    pub distance: f64,
    /// `min(distance / radius, 1)`, or 0 for a zero-radius viewport.
    pub raw_saturation: f64,
}

/// Decomposes `point` into wheel coordinates for `viewport`.
///
/// The center maps to hue 0.5 (`atan2(0, 0) == 0`) and zero saturation. The
/// seam at angle `PI` wraps to hue 0 so the result stays inside [0, 1).
pub fn polar(point: Point, viewport: Viewport) -> Polar {
    let delta = DVec2::from(point) - DVec2::from(viewport.center());
    let angle = delta.y.atan2(delta.x);
    let distance = delta.length();
    let radius = viewport.radius();

    let raw_saturation = if radius > 0.0 && distance.is_finite() {
        (distance / radius).min(1.0)
    } else {
        0.0
    };

    Polar {
        hue: wrap_unit((angle + PI) / TAU),
        distance,
        raw_saturation,
    }
}
