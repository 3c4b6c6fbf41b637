//! CPU-side PNG output of a rendered wheel.
//!
//! Feature-gated behind `png` (default on) so embedders that only need the
//! RGBA buffer from [`crate::pixel`] do not pull in the `image` crate.

use hue_wheel_core::error::WheelError;
use hue_wheel_core::raster::Raster;
use std::path::Path;

use crate::pixel::raster_to_rgba;

/// Writes a raster as a PNG image.
///
/// Returns `WheelError::InvalidDimensions` if the raster is empty or its
/// dimensions overflow `u32`, or `WheelError::Io` on write failure.
pub fn write_png(raster: &Raster, path: &Path) -> Result<(), WheelError> {
    if raster.is_empty() {
        return Err(WheelError::InvalidDimensions);
    }
    let w = u32::try_from(raster.width()).map_err(|_| WheelError::InvalidDimensions)?;
    let h = u32::try_from(raster.height()).map_err(|_| WheelError::InvalidDimensions)?;
    let img = image::RgbaImage::from_raw(w, h, raster_to_rgba(raster))
        .ok_or_else(|| WheelError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| WheelError::Io(e.to_string()))?;
    log::debug!("wrote {w}x{h} wheel to {}", path.display());
    Ok(())
}
