//! Per-pixel wheel rendering and the per-viewport raster cache.
//!
//! Each pixel `(x, y)` is decomposed with [`polar`] and painted through a
//! [`Shading`] policy. No pixel depends on another, so with the `parallel`
//! feature rows are rendered on rayon workers; the output is identical to the
//! sequential path.

use crate::color::{hsb_to_rgb, Hsb, Rgb};
use crate::error::WheelError;
use crate::geometry::{polar, Point, Viewport};
use crate::raster::Raster;
use crate::shading::{Shading, VisualShading};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Renders the wheel for `viewport` with the default [`VisualShading`].
pub fn render(viewport: Viewport) -> Result<Raster, WheelError> {
    render_with(viewport, &VisualShading::default())
}

/// HSB color painted at `point` under `shading`.
pub fn paint_color<S: Shading + ?Sized>(point: Point, viewport: Viewport, shading: &S) -> Hsb {
    shading.shade(polar(point, viewport))
}

/// Renders the wheel for `viewport` under the given shading policy.
///
/// The raster covers `viewport.pixel_dims()`; a degenerate viewport yields an
/// empty raster. Returns `WheelError::InvalidDimensions` only if the pixel
/// count overflows `usize`.
pub fn render_with<S: Shading + ?Sized>(
    viewport: Viewport,
    shading: &S,
) -> Result<Raster, WheelError> {
    let (width, height) = viewport.pixel_dims();
    let mut raster = Raster::new(width, height)?;
    if raster.is_empty() {
        return Ok(raster);
    }

    log::debug!("rendering {width}x{height} wheel");

    let shade_row = |y: usize, row: &mut [Rgb]| {
        for (x, pixel) in row.iter_mut().enumerate() {
            let point = Point::new(x as f64, y as f64);
            *pixel = hsb_to_rgb(paint_color(point, viewport, shading));
        }
    };

    #[cfg(feature = "parallel")]
    raster
        .pixels_mut()
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| shade_row(y, row));

    #[cfg(not(feature = "parallel"))]
    raster
        .pixels_mut()
        .chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| shade_row(y, row));

    Ok(raster)
}

/// Caches the most recently rendered wheel.
///
/// The wheel depends only on the viewport size and shading, never on the
/// selection, so the raster is reused until the viewport changes.
pub struct WheelCache<S: Shading = VisualShading> {
    shading: S,
    entry: Option<(Viewport, Raster)>,
    renders: usize,
}

impl Default for WheelCache<VisualShading> {
    fn default() -> Self {
        Self::new(VisualShading::default())
    }
}

impl<S: Shading> WheelCache<S> {
    /// Creates an empty cache that renders with `shading`.
    pub fn new(shading: S) -> Self {
        Self {
            shading,
            entry: None,
            renders: 0,
        }
    }

    /// Returns the wheel for `viewport`, rendering only if the cached raster was
    /// made for a different viewport (or none exists).
    pub fn get(&mut self, viewport: Viewport) -> Result<&Raster, WheelError> {
        if self
            .entry
            .as_ref()
            .is_some_and(|(cached, _)| *cached != viewport)
        {
            log::debug!("viewport changed, invalidating cached wheel");
            self.entry = None;
        }

        let (_, raster) = match self.entry.take() {
            Some(entry) => self.entry.insert(entry),
            None => {
                let raster = render_with(viewport, &self.shading)?;
                self.renders += 1;
                self.entry.insert((viewport, raster))
            }
        };
        Ok(&*raster)
    }

    /// Drops the cached raster; the next `get` re-renders.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    /// Replaces the shading policy and drops the cached raster.
    pub fn set_shading(&mut self, shading: S) {
        self.shading = shading;
        self.invalidate();
    }

    /// The shading policy used for rendering.
    pub fn shading(&self) -> &S {
        &self.shading
    }

    /// Number of renders performed so far.
    pub fn render_count(&self) -> usize {
        self.renders
    }
}
