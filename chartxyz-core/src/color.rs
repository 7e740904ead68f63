//! Value to color mapping for color-coded points

use crate::point::{Rgb, COLOR_COMPONENTS};
use serde::{Deserialize, Serialize};

/// Maps scalar values onto colors over a configurable range
pub trait ColorLookup {
    /// Set the value range mapped onto the ends of the table
    fn set_range(&mut self, min: f64, max: f64);

    /// Color for a single value. Values outside the range clamp to the ends.
    fn map_value(&self, value: f64) -> Rgb;

    /// Map every value into a flat RGB buffer, 3 bytes per value
    fn map_values(&self, values: &[f64]) -> Vec<u8> {
        let mut out = Vec::with_capacity(values.len() * COLOR_COMPONENTS);
        for &v in values {
            out.extend_from_slice(&self.map_value(v));
        }
        out
    }
}

/// A fixed-size table sweeping hue at full saturation and value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HueLookupTable {
    table: Vec<Rgb>,
    hue_range: (f64, f64),
    range: (f64, f64),
}

impl HueLookupTable {
    pub const DEFAULT_SIZE: usize = 256;
    /// Red at the low end, blue at the high end
    pub const DEFAULT_HUE_RANGE: (f64, f64) = (0.0, 0.66667);

    pub fn new(size: usize, hue_range: (f64, f64)) -> Self {
        let size = size.max(1);
        let step = if size > 1 {
            (hue_range.1 - hue_range.0) / (size - 1) as f64
        } else {
            0.0
        };
        let table = (0..size)
            .map(|i| hsv_to_rgb(hue_range.0 + i as f64 * step, 1.0, 1.0))
            .collect();
        Self {
            table,
            hue_range,
            range: (0.0, 1.0),
        }
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    pub fn hue_range(&self) -> (f64, f64) {
        self.hue_range
    }

    fn index_of(&self, value: f64) -> usize {
        let (lo, hi) = self.range;
        let last = self.table.len() - 1;
        if value.is_nan() {
            return 0;
        }
        if hi <= lo {
            return if value < lo { 0 } else { last };
        }
        let scaled = (value - lo) * (self.table.len() as f64 / (hi - lo));
        (scaled.max(0.0) as usize).min(last)
    }
}

impl Default for HueLookupTable {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SIZE, Self::DEFAULT_HUE_RANGE)
    }
}

impl ColorLookup for HueLookupTable {
    fn set_range(&mut self, min: f64, max: f64) {
        self.range = (min, max);
    }

    fn map_value(&self, value: f64) -> Rgb {
        self.table[self.index_of(value)]
    }
}

/// HSV in [0, 1] to 8-bit RGB
pub fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> Rgb {
    let h = (hue.rem_euclid(1.0)) * 6.0;
    let sector = h.floor();
    let f = h - sector;
    let p = value * (1.0 - saturation);
    let q = value * (1.0 - saturation * f);
    let t = value * (1.0 - saturation * (1.0 - f));
    let (r, g, b) = match sector as u8 {
        0 => (value, t, p),
        1 => (q, value, p),
        2 => (p, value, t),
        3 => (p, q, value),
        4 => (t, p, value),
        _ => (value, p, q),
    };
    let to_byte = |c: f64| (c.clamp(0.0, 1.0) * 255.0 + 0.5) as u8;
    [to_byte(r), to_byte(g), to_byte(b)]
}
