//! Pointer mapping: which color sits under a pointer on the wheel.
//!
//! Shares the polar decomposition with the renderer so hue always agrees with
//! what was painted at the same pixel. Saturation here is the true linear
//! radial saturation; brightness is supplied by the caller.

use crate::color::{hsb_to_rgb, Hsb, Rgb};
use crate::geometry::{polar, Point, Viewport};

/// HSB color selected by a pointer at `point` on a wheel filling `viewport`.
///
/// `saturation = min(distance / radius, 1)`, or 0 for a zero-size viewport.
/// `brightness` is clamped to [0, 1]. Never returns NaN components.
pub fn color_at(point: Point, viewport: Viewport, brightness: f64) -> Hsb {
    let p = polar(point, viewport);
    Hsb::new(p.hue, p.raw_saturation, brightness)
}

/// RGB channels of an HSB color. Alias of [`hsb_to_rgb`] named for host use.
pub fn to_rgb(color: Hsb) -> Rgb {
    hsb_to_rgb(color)
}
