//! Host-side selection state driven by pointer events.
//!
//! The host owns a [`SelectionState`], feeds it [`PointerEvent`]s, and redraws
//! the indicator whenever [`SelectionState::apply`] reports a change.

use serde::{Deserialize, Serialize};

use crate::color::{clamp_unit, hsb_to_rgb, Hsb, Rgb};
use crate::geometry::{Point, Viewport};
use crate::mapper::color_at;

/// Hue shown before the first interaction.
const INITIAL_HUE: f64 = 0.40;

/// A single-pointer input event in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PointerEvent {
    Press(Point),
    Drag(Point),
    Release,
}

/// The currently selected color, the point that produced it, and whether a
/// press/drag is in progress (which controls the selection indicator).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionState {
    pub color: Hsb,
    pub point: Point,
    pub active: bool,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            color: Hsb::new(INITIAL_HUE, 0.0, 1.0),
            point: Point::default(),
            active: false,
        }
    }
}

impl SelectionState {
    /// Applies a pointer event and returns whether anything visible changed.
    ///
    /// Press and drag select the color under the point, keeping the current
    /// brightness, and activate the indicator. Release hides the indicator and
    /// keeps the last color.
    pub fn apply(&mut self, event: PointerEvent, viewport: Viewport) -> bool {
        let before = *self;
        match event {
            PointerEvent::Press(point) | PointerEvent::Drag(point) => {
                self.color = color_at(point, viewport, self.color.brightness);
                self.point = point;
                self.active = true;
            }
            PointerEvent::Release => self.active = false,
        }
        let changed = *self != before;
        if changed {
            log::trace!("selection -> {:?} at {:?}", self.color, self.point);
        }
        changed
    }

    /// Sets the brightness, clamped to [0, 1]. Returns whether it changed.
    pub fn set_brightness(&mut self, brightness: f64) -> bool {
        let brightness = clamp_unit(brightness);
        let changed = brightness != self.color.brightness;
        self.color.brightness = brightness;
        changed
    }

    /// RGB channels of the selected color.
    pub fn rgb(&self) -> Rgb {
        hsb_to_rgb(self.color)
    }
}
