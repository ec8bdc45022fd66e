//! Perceptual brightness and saturation of 8-bit RGB colors.
//!
//! Brightness is the luma estimate `0.299 r + 0.587 g + 0.114 b`, scaled to
//! `[0, 1]`. Saturation is the HSV saturation component.

use std::fmt;

use crate::error::{Error, Result};
use crate::hsv::HSVColor;

const RED_WEIGHT: f64 = 0.299;
const GREEN_WEIGHT: f64 = 0.587;
const BLUE_WEIGHT: f64 = 0.114;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Apparent brightness in `[0, 1]`, weighted by how sensitive the eye is to
/// each channel.
pub fn apparent_brightness(color: Color) -> f64 {
    (RED_WEIGHT * color.r as f64 + GREEN_WEIGHT * color.g as f64 + BLUE_WEIGHT * color.b as f64)
        / u8::MAX as f64
}

/// Rescales `color` so that its apparent brightness becomes `brightness`.
///
/// Black has no hue to keep and becomes the grey of that brightness. Any other
/// color is multiplied by a common factor; channels that overflow are clamped
/// to 255 one by one, so the hue drifts once a channel saturates.
pub fn adjust_brightness(color: Color, brightness: f64) -> Result<Color> {
    if !(0.0..=1.0).contains(&brightness) {
        return Err(Error::InvalidArgument(format!(
            "brightness must be within [0, 1], got {brightness}"
        )));
    }

    let base = apparent_brightness(color);
    if base == 0.0 {
        let grey = (u8::MAX as f64 * brightness).round() as u8;
        return Ok(Color::new(grey, grey, grey));
    }

    let scale = brightness / base;
    let channel = |c: u8| (c as f64 * scale).min(u8::MAX as f64) as u8;

    Ok(Color::new(channel(color.r), channel(color.g), channel(color.b)))
}

/// HSV saturation in `[0, 1]`.
pub fn saturation(color: Color) -> f64 {
    HSVColor::from_rgb(color.r, color.g, color.b).sat
}

/// Replaces the HSV saturation of `color`, keeping hue and value.
///
/// `saturation` is expected in `[0, 1]`; the conversion is not defined
/// outside it.
pub fn adjust_saturation(color: Color, saturation: f64) -> Color {
    let mut hsv = HSVColor::from_rgb(color.r, color.g, color.b);
    hsv.sat = saturation;
    hsv.to_rgb().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [Color; 8] = [
        Color::new(0, 0, 0),
        Color::new(255, 255, 255),
        Color::new(255, 0, 0),
        Color::new(0, 255, 0),
        Color::new(0, 0, 255),
        Color::new(3, 5, 17),
        Color::new(120, 200, 40),
        Color::new(250, 30, 180),
    ];

    fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() <= tolerance
    }

    #[test]
    fn test_brightness_bounds() {
        for r in (0..=255).step_by(15) {
            for g in (0..=255).step_by(15) {
                for b in (0..=255).step_by(15) {
                    let v = apparent_brightness(Color::new(r, g, b));
                    assert!((0.0..=1.0).contains(&v), "{v} out of range for ({r}, {g}, {b})");
                }
            }
        }
        assert_eq!(apparent_brightness(Color::new(0, 0, 0)), 0.0);
        assert!(approx_eq(apparent_brightness(Color::new(255, 255, 255)), 1.0, 1e-12));
    }

    #[test]
    fn test_brightness_weights() {
        assert!(approx_eq(apparent_brightness(Color::new(255, 0, 0)), 0.299, 1e-12));
        assert!(approx_eq(apparent_brightness(Color::new(0, 255, 0)), 0.587, 1e-12));
        assert!(approx_eq(apparent_brightness(Color::new(0, 0, 255)), 0.114, 1e-12));
    }

    #[test]
    fn test_brightness_is_pure() {
        let c = Color::new(7, 8, 19);
        assert_eq!(apparent_brightness(c), apparent_brightness(c));
    }

    #[test]
    fn test_adjust_black_gives_grey() {
        assert_eq!(adjust_brightness(Color::new(0, 0, 0), 0.5).unwrap(), Color::new(128, 128, 128));
        assert_eq!(adjust_brightness(Color::new(0, 0, 0), 0.0).unwrap(), Color::new(0, 0, 0));
        assert_eq!(adjust_brightness(Color::new(0, 0, 0), 1.0).unwrap(), Color::new(255, 255, 255));
        for i in 0..=100 {
            let b = i as f64 / 100.0;
            let expected = (255.0 * b).round() as u8;
            assert_eq!(
                adjust_brightness(Color::new(0, 0, 0), b).unwrap(),
                Color::new(expected, expected, expected)
            );
        }
    }

    #[test]
    fn test_adjust_rejects_out_of_range() {
        for bad in [-0.01, 1.01, f64::NAN, f64::INFINITY] {
            let result = adjust_brightness(Color::new(10, 10, 10), bad);
            assert!(matches!(result, Err(Error::InvalidArgument(_))), "accepted {bad}");
        }
    }

    #[test]
    fn test_adjust_greys_hit_target() {
        for grey in 1..=255u8 {
            for i in 0..=20 {
                let target = i as f64 / 20.0;
                let out = adjust_brightness(Color::new(grey, grey, grey), target).unwrap();
                let got = apparent_brightness(out);
                assert!(
                    approx_eq(got, target, 1.0 / 255.0 + 1e-9),
                    "grey {grey} -> {out} has brightness {got}, wanted {target}"
                );
            }
        }
    }

    #[test]
    fn test_adjust_darkening_hits_target() {
        for color in SAMPLES.iter().copied().filter(|c| apparent_brightness(*c) > 0.0) {
            let base = apparent_brightness(color);
            for i in 0..=10 {
                let target = base * i as f64 / 10.0;
                let got = apparent_brightness(adjust_brightness(color, target).unwrap());
                assert!(approx_eq(got, target, 1.0 / 255.0 + 1e-9), "{color}: {got} vs {target}");
            }
        }
    }

    #[test]
    fn test_adjust_clamps_per_channel() {
        // blue saturates first; red and green keep growing
        let out = adjust_brightness(Color::new(10, 20, 200), 0.9).unwrap();
        assert_eq!(out.b, 255);
        assert!(out.r < out.g);
        assert!(out.g < 255);

        let out = adjust_brightness(Color::new(0, 0, 1), 1.0).unwrap();
        assert_eq!(out, Color::new(0, 0, 255));
    }

    #[test]
    fn test_adjust_truncates() {
        // 3 * 2.5 = 7.5 truncates to 7
        let c = Color::new(3, 3, 3);
        let out = adjust_brightness(c, apparent_brightness(c) * 2.5).unwrap();
        assert_eq!(out, Color::new(7, 7, 7));
    }

    #[test]
    fn test_saturation_of_known_colors() {
        assert_eq!(saturation(Color::new(0, 0, 0)), 0.0);
        assert_eq!(saturation(Color::new(90, 90, 90)), 0.0);
        assert!(approx_eq(saturation(Color::new(0, 0, 255)), 1.0, 1e-12));
        assert!(approx_eq(saturation(Color::new(100, 100, 200)), 0.5, 1e-12));
    }

    #[test]
    fn test_adjust_saturation_round_trip() {
        let colors = [
            Color::new(255, 0, 0),
            Color::new(120, 200, 40),
            Color::new(250, 30, 180),
            Color::new(60, 80, 255),
            Color::new(200, 200, 100),
        ];
        for color in colors {
            let max = color.r.max(color.g).max(color.b) as f64;
            for i in 0..=10 {
                let target = i as f64 / 10.0;
                let out = adjust_saturation(color, target);
                let got = saturation(out);
                assert!(
                    approx_eq(got, target, 3.0 / max),
                    "{color} -> {out}: saturation {got}, wanted {target}"
                );
            }
        }
    }

    #[test]
    fn test_desaturate_keeps_value() {
        let out = adjust_saturation(Color::new(40, 80, 250), 0.0);
        assert_eq!(out.r, out.g);
        assert_eq!(out.g, out.b);
        assert!(out.b >= 249);
    }
}
