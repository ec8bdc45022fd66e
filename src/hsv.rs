/// Hue is a fraction of a full turn in `[0, 1)`, saturation and value are
/// in `[0, 1]`.
#[derive(Debug, Clone)]
pub struct HSVColor {
    pub hue: f64,
    pub sat: f64,
    pub val: f64,
}

impl HSVColor {
    /// Channels are normalized from `0..=255` before conversion.
    pub fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        let n = u8::MAX as f64;
        let (r, g, b) = (red as f64 / n, green as f64 / n, blue as f64 / n);

        let v = r.max(g.max(b));
        let min = r.min(g.min(b));
        if min == v {
            return HSVColor { hue: 0.0, sat: 0.0, val: v };
        }

        let c = v - min;
        let s = c / v;

        // distance of each channel from the max, relative to the chroma
        let (rc, gc, bc) = ((v - r) / c, (v - g) / c, (v - b) / c);
        let h = if r == v {
            bc - gc
        } else if g == v {
            2.0 + rc - bc
        } else {
            4.0 + gc - rc
        };

        HSVColor { hue: (h / 6.0).rem_euclid(1.0), sat: s, val: v }
    }

    /// Channels are truncated, not rounded, on the way back to `0..=255`.
    pub fn to_rgb(&self) -> [u8; 3] {
        let (v, s) = (self.val, self.sat);

        let (r, g, b) = if s == 0.0 {
            (v, v, v)
        } else {
            let sector = (self.hue * 6.0).floor();
            let f = self.hue * 6.0 - sector;
            let p = v * (1.0 - s);
            let q = v * (1.0 - s * f);
            let t = v * (1.0 - s * (1.0 - f));

            match (sector as i64).rem_euclid(6) {
                0 => (v, t, p),
                1 => (q, v, p),
                2 => (p, v, t),
                3 => (p, q, v),
                4 => (t, p, v),
                _ => (v, p, q),
            }
        };

        let n = u8::MAX as f64;
        [(r * n) as u8, (g * n) as u8, (b * n) as u8]
    }
}
