use log::{debug, info, trace};
use rand::Rng;

use crate::canvas::Canvas;
use crate::color::{adjust_brightness, adjust_saturation, apparent_brightness, saturation, Color};
use crate::error::{Error, Result};
use crate::range::shift;
use crate::sample::{
    draw_radius, pick_sky_color, validate_radius_law, DEFAULT_EXPONENT, DEFAULT_RADIUS_MAX,
    DEFAULT_RADIUS_MIN,
};

pub const DEFAULT_STAR_DENSITY: f64 = 0.001;

/// Stars keep this share of the saturation they inherit from the sky.
const SATURATION_MULTIPLIER: f64 = 0.2;

/// Parameters of one generated sky.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarField {
    /// Stars per pixel.
    pub star_density: f64,
    pub radius_min: f64,
    pub radius_max: f64,
    /// Power law exponent of the radius distribution.
    pub exponent: f64,
}

impl Default for StarField {
    fn default() -> Self {
        Self {
            star_density: DEFAULT_STAR_DENSITY,
            radius_min: DEFAULT_RADIUS_MIN,
            radius_max: DEFAULT_RADIUS_MAX,
            exponent: DEFAULT_EXPONENT,
        }
    }
}

impl StarField {
    pub fn validate(&self) -> Result<()> {
        if !(self.star_density.is_finite() && self.star_density >= 0.0) {
            return Err(Error::InvalidArgument(format!(
                "star density must be a finite non-negative number, got {}",
                self.star_density
            )));
        }
        validate_radius_law(self.radius_min, self.radius_max, self.exponent)
    }

    pub fn star_count(&self, width: u32, height: u32) -> usize {
        (self.star_density * width as f64 * height as f64).round_ties_even() as usize
    }

    /// Color of a star of `radius` against `background`.
    ///
    /// Small stars sink toward the sky's own brightness, large ones approach
    /// white, and all of them are mostly desaturated.
    pub fn star_color(&self, radius: f64, background: Color) -> Result<Color> {
        let screen_brightness = apparent_brightness(background);
        let brightness = shift(
            radius,
            [self.radius_min, self.radius_max],
            [screen_brightness, 1.0],
            false,
        )?;

        let color = adjust_brightness(background, brightness)?;
        Ok(adjust_saturation(color, saturation(color) * SATURATION_MULTIPLIER))
    }

    /// Paints a sky and its stars onto `canvas`, then flushes it.
    ///
    /// Returns the number of stars drawn. Any failure aborts the whole run.
    pub fn generate<C, R>(&self, canvas: &mut C, rng: &mut R) -> Result<usize>
    where
        C: Canvas + ?Sized,
        R: Rng + ?Sized,
    {
        self.validate()?;
        debug!("generating {self:?}");

        canvas.set_background(pick_sky_color(rng));

        let (width, height) = (canvas.width(), canvas.height());
        let count = self.star_count(width, height);
        info!("drawing {count} stars on a {width}x{height} sky");

        let (x_lo, x_hi) = half_extent(width);
        let (y_lo, y_hi) = half_extent(height);

        for _ in 0..count {
            let x = rng.gen_range(x_lo..=x_hi);
            let y = rng.gen_range(y_lo..=y_hi);
            let radius = draw_radius(rng, self.radius_min, self.radius_max, self.exponent)?;

            let color = self.star_color(radius, canvas.background())?;
            trace!("star at ({x}, {y}) radius {radius:.3} color {color}");

            canvas.fill_disc(x, y, radius, color);
        }

        canvas.flush()?;
        Ok(count)
    }
}

/// Inclusive coordinate bounds around the center; odd sizes reach one
/// further on the negative side.
fn half_extent(size: u32) -> (i32, i32) {
    let size = size as i64;
    ((-size).div_euclid(2) as i32, (size / 2) as i32)
}
