//! Owned camera frames in row-major layout (stride == width).
use super::color::{expand_row, YCbCr422, YCbCr444};
use super::traits::ImageView;

/// Packed 4:2:2 frame as delivered by the camera.
///
/// `width` is measured in pixels and must be even; the backing storage holds
/// `width / 2` cells per row.
#[derive(Clone, Debug)]
pub struct YCbCr422Image {
    width: usize,
    height: usize,
    data: Vec<YCbCr422>,
}

impl YCbCr422Image {
    /// Wraps raw cells. `data.len()` must equal `width / 2 * height`.
    pub fn new(width: usize, height: usize, data: Vec<YCbCr422>) -> Self {
        debug_assert!(width % 2 == 0, "4:2:2 frames need an even width, got {width}");
        debug_assert_eq!(data.len(), width / 2 * height);
        Self {
            width,
            height,
            data,
        }
    }

    /// Frame where every pixel has the same color.
    pub fn filled(width: usize, height: usize, color: YCbCr422) -> Self {
        Self::new(width, height, vec![color; width / 2 * height])
    }

    /// Width in pixels.
    #[inline]
    pub fn width_px(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height_px(&self) -> usize {
        self.height
    }

    #[inline]
    fn cell_index(&self, x: usize, y: usize) -> usize {
        debug_assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{}",
            self.width,
            self.height
        );
        y * (self.width / 2) + x / 2
    }

    /// The cell containing pixel `(x, y)`.
    #[inline]
    pub fn cell(&self, x: usize, y: usize) -> YCbCr422 {
        self.data[self.cell_index(x, y)]
    }

    #[inline]
    pub fn cell_mut(&mut self, x: usize, y: usize) -> &mut YCbCr422 {
        let idx = self.cell_index(x, y);
        &mut self.data[idx]
    }

    /// Luma of pixel `(x, y)`.
    #[inline]
    pub fn luma(&self, x: usize, y: usize) -> u8 {
        let cell = self.cell(x, y);
        if x % 2 == 0 {
            cell.y1
        } else {
            cell.y2
        }
    }

    /// Overwrites the luma of one pixel, leaving the shared chroma untouched.
    pub fn set_luma(&mut self, x: usize, y: usize, luma: u8) {
        let even = x % 2 == 0;
        let cell = self.cell_mut(x, y);
        if even {
            cell.y1 = luma;
        } else {
            cell.y2 = luma;
        }
    }

    /// Median of the luma at rows `y - 1`, `y`, `y + 1` (clamped at the border).
    pub fn median_luma_3(&self, x: usize, y: usize) -> u8 {
        let above = self.luma(x, y.saturating_sub(1));
        let center = self.luma(x, y);
        let below = self.luma(x, (y + 1).min(self.height - 1));
        above.max(center).min(above.min(center).max(below))
    }

    /// Luma plane, one byte per pixel.
    pub fn luma_plane(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.width * self.height);
        for row in self.rows() {
            for cell in row {
                out.push(cell.y1);
                out.push(cell.y2);
            }
        }
        out
    }

    /// Fully sampled copy of the frame.
    pub fn to_ycbcr444(&self) -> YCbCr444Image {
        let mut data = Vec::with_capacity(self.width * self.height);
        let mut row_buf = Vec::with_capacity(self.width);
        for row in self.rows() {
            expand_row(row, &mut row_buf);
            data.extend_from_slice(&row_buf);
        }
        YCbCr444Image {
            width: self.width,
            height: self.height,
            data,
        }
    }
}

impl ImageView for YCbCr422Image {
    type Pixel = YCbCr422;

    #[inline]
    fn width(&self) -> usize {
        self.width / 2
    }
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
    #[inline]
    fn row(&self, y: usize) -> &[YCbCr422] {
        let cells = self.width / 2;
        let start = y * cells;
        &self.data[start..start + cells]
    }
}

/// Fully sampled frame (one entry per pixel).
#[derive(Clone, Debug)]
pub struct YCbCr444Image {
    width: usize,
    height: usize,
    data: Vec<YCbCr444>,
}

impl YCbCr444Image {
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> YCbCr444 {
        self.data[y * self.width + x]
    }
}

impl ImageView for YCbCr444Image {
    type Pixel = YCbCr444;

    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
    #[inline]
    fn row(&self, y: usize) -> &[YCbCr444] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }
}
