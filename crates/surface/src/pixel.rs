//! Pure-computation RGBA8 buffer conversion from a [`Raster`].
//!
//! Always available (no feature gate) so hosts that blit into their own
//! surfaces can share the conversion with the `png` snapshot path.

use hue_wheel_core::raster::Raster;

/// Quantizes a raster to an RGBA8 pixel buffer.
///
/// Each pixel is written as four bytes (R, G, B, 255). The buffer length is
/// `width * height * 4`.
pub fn raster_to_rgba(raster: &Raster) -> Vec<u8> {
    raster
        .pixels()
        .iter()
        .flat_map(|&rgb| {
            let [r, g, b] = rgb.to_rgb8();
            [r, g, b, 255u8]
        })
        .collect()
}
