use log::info;
use rand::Rng;

use crate::color::Color;
use crate::error::{Error, Result};

pub const DEFAULT_RADIUS_MIN: f64 = 0.5;
pub const DEFAULT_RADIUS_MAX: f64 = 3.0;
pub const DEFAULT_EXPONENT: f64 = -1.5;

const SKY_RED_MAX: f64 = 8.0;
const SKY_GREEN_MAX: f64 = 8.0;
const SKY_BLUE_MAX: f64 = 20.0;

/// Checks the parameters of the radius power law.
pub fn validate_radius_law(r_min: f64, r_max: f64, exponent: f64) -> Result<()> {
    if exponent == 0.0 || !exponent.is_finite() {
        return Err(Error::Domain(format!("exponent must be finite and non-zero, got {exponent}")));
    }
    if !(r_min >= 0.0 && r_min < r_max && r_max.is_finite()) {
        return Err(Error::Domain(format!(
            "radius bounds must satisfy 0 <= min < max, got [{r_min}, {r_max}]"
        )));
    }
    if exponent < 0.0 && r_min == 0.0 {
        return Err(Error::Domain("a negative exponent needs a radius minimum above 0".into()));
    }
    Ok(())
}

/// Draws a radius from a power law over `[r_min, r_max]` by inverting its CDF.
///
/// A negative `exponent` favours small radii: many dim stars, few bright ones.
pub fn sample_radius<R: Rng + ?Sized>(
    rng: &mut R,
    r_min: f64,
    r_max: f64,
    exponent: f64,
) -> Result<f64> {
    validate_radius_law(r_min, r_max, exponent)?;
    draw_radius(rng, r_min, r_max, exponent)
}

/// [`sample_radius`] for parameters that already passed
/// [`validate_radius_law`].
pub fn draw_radius<R: Rng + ?Sized>(
    rng: &mut R,
    r_min: f64,
    r_max: f64,
    exponent: f64,
) -> Result<f64> {
    let u: f64 = rng.gen();
    let lo = r_min.powf(exponent);
    let hi = r_max.powf(exponent);
    let radius = (u * (hi - lo) + lo).powf(1.0 / exponent);

    if !radius.is_finite() {
        return Err(Error::Domain(format!(
            "radius law [{r_min}, {r_max}] with exponent {exponent} is undefined"
        )));
    }

    Ok(radius.clamp(r_min, r_max))
}

fn draw_channel<R: Rng + ?Sized>(rng: &mut R, max: f64) -> u8 {
    (max * rng.gen::<f64>()).round() as u8
}

/// Picks a dark sky color that is grey or blue, never tinted red or green.
///
/// Whole triples are redrawn until `red <= green <= blue`.
pub fn pick_sky_color<R: Rng + ?Sized>(rng: &mut R) -> Color {
    let color = loop {
        let r = draw_channel(rng, SKY_RED_MAX);
        let g = draw_channel(rng, SKY_GREEN_MAX);
        let b = draw_channel(rng, SKY_BLUE_MAX);

        if r <= g && g <= b {
            break Color::new(r, g, b);
        }
    };

    info!("night sky colour: {color}");
    color
}
