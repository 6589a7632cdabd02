//! Detection box sizing and edge-density window search.
use super::column::Column;
use crate::services::Projection;
use crate::types::GroundPoint;

/// Horizontal placement of a detection box over the columns.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Window {
    /// First column index covered by the box.
    pub start: usize,
    /// Number of columns covered.
    pub len: usize,
    /// Edge points per covered column.
    pub density: f32,
}

/// Image width in pixels of an object `width_m` wide standing at `ground`.
pub(crate) fn box_width_px(
    projection: &dyn Projection,
    ground: &GroundPoint,
    width_m: f32,
) -> Option<f32> {
    let half = width_m * 0.5;
    let left = projection.ground_to_pixel(&GroundPoint::new(ground.x, ground.y + half))?;
    let right = projection.ground_to_pixel(&GroundPoint::new(ground.x, ground.y - half))?;
    let width = (right.x - left.x).abs();
    (width.is_finite() && width > 0.0).then_some(width)
}

/// Finds the `len`-column window containing `seed` with the most edge points
/// between rows `top` and `bottom`. Ties resolve to the middle of the tied
/// range of start offsets.
pub(crate) fn best_window(
    columns: &[Column],
    seed: usize,
    len: usize,
    top: i32,
    bottom: i32,
) -> Option<Window> {
    if columns.is_empty() || seed >= columns.len() {
        return None;
    }
    let len = len.clamp(1, columns.len());
    let mut prefix = Vec::with_capacity(columns.len() + 1);
    prefix.push(0usize);
    for column in columns {
        let last = prefix.last().copied().unwrap_or(0);
        prefix.push(last + column.count_between(top, bottom));
    }

    let first = (seed + 1).saturating_sub(len);
    let last = seed.min(columns.len() - len);
    let mut best_count = 0usize;
    let mut tied = (first, first);
    for start in first..=last {
        let count = prefix[start + len] - prefix[start];
        if start == first || count > best_count {
            best_count = count;
            tied = (start, start);
        } else if count == best_count && tied.1 + 1 == start {
            tied.1 = start;
        }
    }
    Some(Window {
        start: (tied.0 + tied.1) / 2,
        len,
        density: best_count as f32 / len as f32,
    })
}
