use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use log::{debug, info, warn};

use crate::color::Color;
use crate::error::{Error, Result};

/// A drawing surface addressed from its center, y pointing up.
pub trait Canvas {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    /// Repaints the whole surface.
    fn set_background(&mut self, color: Color);
    fn background(&self) -> Color;
    fn fill_disc(&mut self, x: i32, y: i32, radius: f64, color: Color);
    /// Makes everything drawn so far visible.
    fn flush(&mut self) -> Result<()>;
}

/// RGB8 raster that is written out as a PNG on flush.
pub struct PngCanvas {
    width: u32,
    height: u32,
    background: Color,
    buf: Vec<u8>,
    path: PathBuf,
}

impl PngCanvas {
    pub fn new(width: u32, height: u32, path: PathBuf) -> Self {
        Self {
            width,
            height,
            background: Color::new(0, 0, 0),
            buf: vec![0; width as usize * height as usize * 3],
            path,
        }
    }

    #[cfg(test)]
    pub fn pixel(&self, px: u32, py: u32) -> Option<Color> {
        if px >= self.width || py >= self.height {
            return None;
        }
        let i = (py as usize * self.width as usize + px as usize) * 3;
        Some(Color::new(self.buf[i], self.buf[i + 1], self.buf[i + 2]))
    }

    fn put(&mut self, px: i64, py: i64, color: Color) {
        if px < 0 || py < 0 || px >= self.width as i64 || py >= self.height as i64 {
            return;
        }
        let i = (py as usize * self.width as usize + px as usize) * 3;
        self.buf[i..i + 3].copy_from_slice(&color.to_array());
    }
}

impl Canvas for PngCanvas {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_background(&mut self, color: Color) {
        self.background = color;
        for p in self.buf.chunks_exact_mut(3) {
            p.copy_from_slice(&color.to_array());
        }
    }

    fn background(&self) -> Color {
        self.background
    }

    fn fill_disc(&mut self, x: i32, y: i32, radius: f64, color: Color) {
        let cx = x as i64 + (self.width / 2) as i64;
        let cy = (self.height / 2) as i64 - y as i64;

        // the center pixel is always covered, however small the disc
        self.put(cx, cy, color);

        let reach = radius.max(0.0).ceil() as i64;
        let r2 = radius * radius;
        for dy in -reach..=reach {
            for dx in -reach..=reach {
                if ((dx * dx + dy * dy) as f64) <= r2 {
                    self.put(cx + dx, cy + dy, color);
                }
            }
        }
    }

    fn flush(&mut self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            warn!(
                "{}x{} sky has no pixels, not writing {}",
                self.width,
                self.height,
                self.path.display()
            );
            return Ok(());
        }

        let file = File::create(&self.path).map_err(|source| Error::Io {
            path: self.path.clone(),
            source,
        })?;
        let w = &mut BufWriter::new(file);

        let mut encoder = png::Encoder::new(w, self.width, self.height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);

        let encoding = |source| Error::Encoding {
            path: self.path.clone(),
            source,
        };
        let mut writer = encoder.write_header().map_err(encoding)?;
        writer.write_image_data(&self.buf).map_err(encoding)?;
        writer.finish().map_err(encoding)?;

        debug!("wrote {} bytes of pixel data", self.buf.len());
        info!("sky written to {}", self.path.display());
        Ok(())
    }
}
