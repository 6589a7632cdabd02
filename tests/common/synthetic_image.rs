use field_vision::image::{YCbCr422, YCbCr422Image};

/// Carpet color matching `ChromaFieldColor::default()`.
pub const FIELD_GREEN: YCbCr422 = YCbCr422::uniform(80, 100, 90);
/// Dark, neutral robot body.
pub const ROBOT_DARK: YCbCr422 = YCbCr422::uniform(40, 128, 128);
pub const LINE_WHITE: YCbCr422 = YCbCr422::uniform(220, 128, 128);

/// Frame covered entirely by field carpet.
pub fn field_frame(width: usize, height: usize) -> YCbCr422Image {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(width % 2 == 0, "4:2:2 frames need an even width");
    YCbCr422Image::filled(width, height, FIELD_GREEN)
}

/// Paints the inclusive pixel rectangle `[x0, x1] x [y0, y1]`.
pub fn paint_rect(
    frame: &mut YCbCr422Image,
    (x0, y0): (usize, usize),
    (x1, y1): (usize, usize),
    color: YCbCr422,
) {
    for y in y0..=y1.min(frame.height_px() - 1) {
        for x in x0..=x1.min(frame.width_px() - 1) {
            *frame.cell_mut(x, y) = color;
        }
    }
}

/// Gray frame with luma `low` above row `split` and `high` from `split` on.
pub fn luma_step_frame(
    width: usize,
    height: usize,
    split: usize,
    low: u8,
    high: u8,
) -> YCbCr422Image {
    let mut frame = YCbCr422Image::filled(width, height, YCbCr422::uniform(low, 128, 128));
    paint_rect(
        &mut frame,
        (0, split),
        (width - 1, height - 1),
        YCbCr422::uniform(high, 128, 128),
    );
    frame
}
