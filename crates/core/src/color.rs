//! HSB and RGB color types and the conversions between them.
//!
//! [`Hsb`] is the cylindrical representation the wheel is defined in; [`Rgb`]
//! is derived from it on demand and never stored independently. All components
//! are `f64` in [0, 1].

use crate::error::WheelError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Hue/saturation/brightness color.
///
/// Use [`Hsb::new`] to build a normalized value: hue wraps into [0, 1),
/// saturation and brightness are clamped to [0, 1], and NaN components become 0.
/// Deserialization goes through the same normalization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "HsbFields")]
pub struct Hsb {
    pub hue: f64,
    pub saturation: f64,
    pub brightness: f64,
}

#[derive(Deserialize)]
struct HsbFields {
    hue: f64,
    saturation: f64,
    brightness: f64,
}

impl From<HsbFields> for Hsb {
    fn from(f: HsbFields) -> Self {
        Hsb::new(f.hue, f.saturation, f.brightness)
    }
}

/// RGB color with components in [0, 1].
///
/// Serializes as a hex string `"#rrggbb"`, so the serialized form carries
/// 8-bit quantization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl Hsb {
    /// Creates a normalized HSB color.
    pub fn new(hue: f64, saturation: f64, brightness: f64) -> Self {
        Self {
            hue: wrap_unit(hue),
            saturation: clamp_unit(saturation),
            brightness: clamp_unit(brightness),
        }
    }

    /// Converts to RGB. Shorthand for [`hsb_to_rgb`].
    pub fn to_rgb(self) -> Rgb {
        hsb_to_rgb(self)
    }
}

impl Rgb {
    pub const WHITE: Rgb = Rgb {
        red: 1.0,
        green: 1.0,
        blue: 1.0,
    };

    pub const BLACK: Rgb = Rgb {
        red: 0.0,
        green: 0.0,
        blue: 0.0,
    };

    /// Parses a hex color string like "#ff00aa" or "ff00aa" (case insensitive).
    ///
    /// Returns `WheelError::InvalidColor` if the input is not a valid 6-digit hex color.
    pub fn from_hex(hex: &str) -> Result<Rgb, WheelError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(WheelError::InvalidColor(format!(
                "expected 6 hex digits, got {hex:?}"
            )));
        }
        let channel = |range: std::ops::Range<usize>, name: &str| {
            u8::from_str_radix(&hex[range], 16)
                .map(|v| v as f64 / 255.0)
                .map_err(|e| WheelError::InvalidColor(format!("invalid {name} component: {e}")))
        };
        Ok(Rgb {
            red: channel(0..2, "red")?,
            green: channel(2..4, "green")?,
            blue: channel(4..6, "blue")?,
        })
    }

    /// Converts the color to a hex string like `"#rrggbb"`.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Quantizes each channel to 8 bits with rounding, clamping out-of-range values.
    pub fn to_rgb8(self) -> [u8; 3] {
        [
            (self.red.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.green.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.blue.clamp(0.0, 1.0) * 255.0).round() as u8,
        ]
    }

    /// Converts to HSB. Shorthand for [`rgb_to_hsb`].
    pub fn to_hsb(self) -> Hsb {
        rgb_to_hsb(self)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Wraps a value into [0, 1). Non-finite input maps to 0.
pub(crate) fn wrap_unit(v: f64) -> f64 {
    if !v.is_finite() {
        return 0.0;
    }
    let w = v.rem_euclid(1.0);
    // rem_euclid rounds tiny negatives up to exactly 1.0
    if w >= 1.0 {
        0.0
    } else {
        w
    }
}

/// Clamps a value into [0, 1]. NaN maps to 0.
pub(crate) fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

/// Converts HSB to RGB by exact piecewise-linear interpolation over the six
/// hue sectors.
pub fn hsb_to_rgb(c: Hsb) -> Rgb {
    let Hsb {
        hue: h,
        saturation: s,
        brightness: v,
    } = c;

    let scaled = h * 6.0;
    let sector = scaled.floor();
    let f = scaled - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (red, green, blue) = match (sector as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    Rgb { red, green, blue }
}

/// Converts RGB to HSB.
///
/// Achromatic input (all channels equal) reports hue 0; black reports
/// saturation 0.
pub fn rgb_to_hsb(c: Rgb) -> Hsb {
    let max = c.red.max(c.green).max(c.blue);
    let min = c.red.min(c.green).min(c.blue);
    let delta = max - min;

    let saturation = if max > 0.0 { delta / max } else { 0.0 };
    let hue = if delta <= 0.0 {
        0.0
    } else if max == c.red {
        ((c.green - c.blue) / delta).rem_euclid(6.0) / 6.0
    } else if max == c.green {
        ((c.blue - c.red) / delta + 2.0) / 6.0
    } else {
        ((c.red - c.green) / delta + 4.0) / 6.0
    };

    Hsb::new(hue, saturation, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    fn assert_rgb(actual: Rgb, r: f64, g: f64, b: f64) {
        assert!(
            approx_eq(actual.red, r) && approx_eq(actual.green, g) && approx_eq(actual.blue, b),
            "expected ({r}, {g}, {b}), got {actual:?}"
        );
    }

    // -- HSB -> RGB fixed points --

    #[test]
    fn zero_saturation_full_brightness_is_white() {
        assert_rgb(hsb_to_rgb(Hsb::new(0.0, 0.0, 1.0)), 1.0, 1.0, 1.0);
    }

    #[test]
    fn hue_zero_is_red() {
        assert_rgb(hsb_to_rgb(Hsb::new(0.0, 1.0, 1.0)), 1.0, 0.0, 0.0);
    }

    #[test]
    fn hue_one_third_is_green() {
        assert_rgb(hsb_to_rgb(Hsb::new(1.0 / 3.0, 1.0, 1.0)), 0.0, 1.0, 0.0);
    }

    #[test]
    fn hue_two_thirds_is_blue() {
        assert_rgb(hsb_to_rgb(Hsb::new(2.0 / 3.0, 1.0, 1.0)), 0.0, 0.0, 1.0);
    }

    #[test]
    fn secondary_colors_land_on_sector_boundaries() {
        assert_rgb(hsb_to_rgb(Hsb::new(1.0 / 6.0, 1.0, 1.0)), 1.0, 1.0, 0.0);
        assert_rgb(hsb_to_rgb(Hsb::new(0.5, 1.0, 1.0)), 0.0, 1.0, 1.0);
        assert_rgb(hsb_to_rgb(Hsb::new(5.0 / 6.0, 1.0, 1.0)), 1.0, 0.0, 1.0);
    }

    #[test]
    fn zero_brightness_is_black() {
        assert_rgb(hsb_to_rgb(Hsb::new(0.37, 0.8, 0.0)), 0.0, 0.0, 0.0);
    }

    #[test]
    fn interpolation_is_linear_within_a_sector() {
        // Halfway between red and yellow.
        assert_rgb(hsb_to_rgb(Hsb::new(1.0 / 12.0, 1.0, 1.0)), 1.0, 0.5, 0.0);
    }

    #[test]
    fn unnormalized_hue_of_one_wraps_to_red() {
        let raw = Hsb {
            hue: 1.0,
            saturation: 1.0,
            brightness: 1.0,
        };
        assert_rgb(hsb_to_rgb(raw), 1.0, 0.0, 0.0);
    }

    // -- Normalization --

    #[test]
    fn new_wraps_hue_and_clamps_channels() {
        let c = Hsb::new(1.25, 1.5, -0.2);
        assert!(approx_eq(c.hue, 0.25));
        assert!(approx_eq(c.saturation, 1.0));
        assert!(approx_eq(c.brightness, 0.0));
    }

    #[test]
    fn new_wraps_negative_hue() {
        let c = Hsb::new(-0.25, 0.5, 0.5);
        assert!(approx_eq(c.hue, 0.75));
    }

    #[test]
    fn new_maps_tiny_negative_hue_below_one() {
        let c = Hsb::new(-1e-18, 0.5, 0.5);
        assert!(c.hue >= 0.0 && c.hue < 1.0, "hue {} escaped [0, 1)", c.hue);
    }

    #[test]
    fn new_replaces_nan_with_zero() {
        let c = Hsb::new(f64::NAN, f64::NAN, f64::NAN);
        assert_eq!(c.hue, 0.0);
        assert_eq!(c.saturation, 0.0);
        assert_eq!(c.brightness, 0.0);
    }

    // -- RGB -> HSB --

    #[test]
    fn rgb_to_hsb_recovers_primaries() {
        let red = rgb_to_hsb(Rgb {
            red: 1.0,
            green: 0.0,
            blue: 0.0,
        });
        assert!(approx_eq(red.hue, 0.0));
        let green = rgb_to_hsb(Rgb {
            red: 0.0,
            green: 1.0,
            blue: 0.0,
        });
        assert!(approx_eq(green.hue, 1.0 / 3.0));
        let blue = rgb_to_hsb(Rgb {
            red: 0.0,
            green: 0.0,
            blue: 1.0,
        });
        assert!(approx_eq(blue.hue, 2.0 / 3.0));
    }

    #[test]
    fn rgb_to_hsb_gray_has_zero_saturation() {
        let gray = rgb_to_hsb(Rgb {
            red: 0.4,
            green: 0.4,
            blue: 0.4,
        });
        assert_eq!(gray.hue, 0.0);
        assert_eq!(gray.saturation, 0.0);
        assert!(approx_eq(gray.brightness, 0.4));
    }

    #[test]
    fn rgb_to_hsb_black_has_zero_saturation() {
        let black = rgb_to_hsb(Rgb::BLACK);
        assert_eq!(black.saturation, 0.0);
        assert_eq!(black.brightness, 0.0);
    }

    // -- Hex --

    #[test]
    fn from_hex_parses_with_and_without_hash() {
        let a = Rgb::from_hex("#ff0000").unwrap();
        let b = Rgb::from_hex("FF0000").unwrap();
        assert_eq!(a, b);
        assert_rgb(a, 1.0, 0.0, 0.0);
    }

    #[test]
    fn from_hex_rejects_wrong_length() {
        assert!(matches!(
            Rgb::from_hex("#fff"),
            Err(WheelError::InvalidColor(_))
        ));
    }

    #[test]
    fn from_hex_rejects_non_hex_digits() {
        assert!(matches!(
            Rgb::from_hex("zz0000"),
            Err(WheelError::InvalidColor(_))
        ));
    }

    #[test]
    fn from_hex_rejects_multibyte_input() {
        assert!(Rgb::from_hex("ééé").is_err());
    }

    #[test]
    fn to_hex_formats_known_colors() {
        assert_eq!(Rgb::WHITE.to_hex(), "#ffffff");
        assert_eq!(Rgb::BLACK.to_hex(), "#000000");
        assert_eq!(hsb_to_rgb(Hsb::new(0.0, 1.0, 1.0)).to_hex(), "#ff0000");
    }

    #[test]
    fn to_hex_clamps_out_of_range() {
        let c = Rgb {
            red: 1.5,
            green: -0.5,
            blue: 0.5,
        };
        assert_eq!(c.to_hex(), "#ff0080");
    }

    #[test]
    fn rgb_serializes_as_hex_string() {
        let json = serde_json::to_string(&Rgb::WHITE).unwrap();
        assert_eq!(json, "\"#ffffff\"");
    }

    #[test]
    fn rgb_deserialize_rejects_invalid_hex() {
        assert!(serde_json::from_str::<Rgb>("\"nope\"").is_err());
    }

    #[test]
    fn hsb_serializes_as_named_fields() {
        let json = serde_json::to_value(Hsb::new(0.5, 0.25, 1.0)).unwrap();
        assert_eq!(json["hue"], 0.5);
        assert_eq!(json["saturation"], 0.25);
        assert_eq!(json["brightness"], 1.0);
    }

    #[test]
    fn hsb_deserialize_normalizes_components() {
        let hsb: Hsb = serde_json::from_str(
            r#"{"hue": 1.25, "saturation": 2.0, "brightness": -1.0}"#,
        )
        .unwrap();
        assert_eq!(hsb, Hsb::new(0.25, 1.0, 0.0));
        assert_eq!(hsb.hue, 0.25);
        assert_eq!(hsb.saturation, 1.0);
        assert_eq!(hsb.brightness, 0.0);
    }

    #[test]
    fn hsb_deserialize_wraps_negative_hue() {
        let hsb: Hsb = serde_json::from_value(serde_json::json!({
            "hue": -0.25, "saturation": 0.5, "brightness": 0.5
        }))
        .unwrap();
        assert_eq!(hsb.hue, 0.75);
    }

    #[test]
    fn hsb_deserialize_requires_every_field() {
        assert!(serde_json::from_str::<Hsb>(r#"{"hue": 0.5}"#).is_err());
    }

    // -- Property-based tests --

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn unit() -> impl Strategy<Value = f64> {
            0.0_f64..=1.0
        }

        proptest! {
            #[test]
            fn hsb_to_rgb_stays_in_unit_cube(h in 0.0_f64..1.0, s in unit(), b in unit()) {
                let rgb = hsb_to_rgb(Hsb::new(h, s, b));
                for (name, v) in [("r", rgb.red), ("g", rgb.green), ("b", rgb.blue)] {
                    prop_assert!((-1e-12..=1.0 + 1e-12).contains(&v), "{name} out of range: {v}");
                }
            }

            #[test]
            fn max_channel_equals_brightness(h in 0.0_f64..1.0, s in unit(), b in unit()) {
                let rgb = hsb_to_rgb(Hsb::new(h, s, b));
                let max = rgb.red.max(rgb.green).max(rgb.blue);
                prop_assert!((max - b).abs() < 1e-12, "max {max} vs brightness {b}");
            }

            #[test]
            fn rgb_to_hsb_inverts_chromatic_colors(
                h in 0.0_f64..1.0,
                s in 0.05_f64..=1.0,
                b in 0.05_f64..=1.0,
            ) {
                let back = rgb_to_hsb(hsb_to_rgb(Hsb::new(h, s, b)));
                let dh = (back.hue - h).abs();
                prop_assert!(dh.min(1.0 - dh) < 1e-9, "hue {} vs {h}", back.hue);
                prop_assert!((back.saturation - s).abs() < 1e-9);
                prop_assert!((back.brightness - b).abs() < 1e-9);
            }

            #[test]
            fn normalized_hue_is_always_in_half_open_unit(h in -1.0e6_f64..1.0e6) {
                let c = Hsb::new(h, 0.5, 0.5);
                prop_assert!(c.hue >= 0.0 && c.hue < 1.0, "hue {} for input {h}", c.hue);
            }
        }
    }
}
