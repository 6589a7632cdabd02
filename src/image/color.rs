//! YCbCr color samples and the 4:2:2 → 4:4:4 expansion.
use serde::{Deserialize, Serialize};

/// One packed 4:2:2 cell: two luma samples sharing a chroma pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YCbCr422 {
    pub y1: u8,
    pub cb: u8,
    pub y2: u8,
    pub cr: u8,
}

/// A single fully sampled pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YCbCr444 {
    pub y: u8,
    pub cb: u8,
    pub cr: u8,
}

impl YCbCr422 {
    pub const fn new(y1: u8, cb: u8, y2: u8, cr: u8) -> Self {
        Self { y1, cb, y2, cr }
    }

    /// Cell where both pixels have the same color.
    pub const fn uniform(y: u8, cb: u8, cr: u8) -> Self {
        Self {
            y1: y,
            cb,
            y2: y,
            cr,
        }
    }

    /// Mean of the two luma samples.
    #[inline]
    pub fn average_luma(&self) -> u8 {
        ((self.y1 as u16 + self.y2 as u16) / 2) as u8
    }

    /// Expands the cell into its two pixels; both share the cell's chroma.
    #[inline]
    pub fn expand(&self) -> [YCbCr444; 2] {
        [
            YCbCr444 {
                y: self.y1,
                cb: self.cb,
                cr: self.cr,
            },
            YCbCr444 {
                y: self.y2,
                cb: self.cb,
                cr: self.cr,
            },
        ]
    }
}

impl YCbCr444 {
    pub const fn new(y: u8, cb: u8, cr: u8) -> Self {
        Self { y, cb, cr }
    }

    /// Full-range BT.601 conversion from 8-bit RGB.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        let (r, g, b) = (r as f32, g as f32, b as f32);
        let y = 0.299 * r + 0.587 * g + 0.114 * b;
        let cb = 128.0 - 0.168_736 * r - 0.331_264 * g + 0.5 * b;
        let cr = 128.0 + 0.5 * r - 0.418_688 * g - 0.081_312 * b;
        Self {
            y: y.round().clamp(0.0, 255.0) as u8,
            cb: cb.round().clamp(0.0, 255.0) as u8,
            cr: cr.round().clamp(0.0, 255.0) as u8,
        }
    }
}

/// Expands a row of 4:2:2 cells into `out` (cleared first).
pub fn expand_row(cells: &[YCbCr422], out: &mut Vec<YCbCr444>) {
    out.clear();
    out.reserve(cells.len() * 2);
    for cell in cells {
        out.extend_from_slice(&cell.expand());
    }
}

/// Packs two 4:4:4 pixels into one cell, averaging their chroma.
pub fn pack_pair(left: YCbCr444, right: YCbCr444) -> YCbCr422 {
    YCbCr422 {
        y1: left.y,
        cb: ((left.cb as u16 + right.cb as u16) / 2) as u8,
        y2: right.y,
        cr: ((left.cr as u16 + right.cr as u16) / 2) as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_expands_to_two_pixels_sharing_chroma() {
        let cell = YCbCr422::new(10, 100, 200, 50);
        let [a, b] = cell.expand();
        assert_eq!(a, YCbCr444::new(10, 100, 50));
        assert_eq!(b, YCbCr444::new(200, 100, 50));
    }

    #[test]
    fn expand_row_doubles_length_in_order() {
        let cells = [YCbCr422::new(1, 2, 3, 4), YCbCr422::new(5, 6, 7, 8)];
        let mut out = vec![YCbCr444::default(); 7];
        expand_row(&cells, &mut out);
        let lumas: Vec<u8> = out.iter().map(|p| p.y).collect();
        assert_eq!(lumas, vec![1, 3, 5, 7]);
        assert_eq!(out[3].cb, 6);
        assert_eq!(out[3].cr, 8);
    }

    #[test]
    fn rgb_conversion_maps_gray_to_neutral_chroma() {
        let gray = YCbCr444::from_rgb(128, 128, 128);
        assert_eq!(gray.y, 128);
        assert_eq!(gray.cb, 128);
        assert_eq!(gray.cr, 128);
        let green = YCbCr444::from_rgb(0, 160, 0);
        assert!(green.cb < 128 && green.cr < 128, "green={green:?}");
    }
}
