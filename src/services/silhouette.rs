//! Polygon-based silhouette and field boundary.
use super::{FieldBoundary, Silhouette};
use crate::types::Pixel;
use serde::Deserialize;

/// Own-body silhouette given as a closed polygon in pixel coordinates.
#[derive(Clone, Debug, Default)]
pub struct PolygonSilhouette {
    vertices: Vec<Pixel>,
    lines: Vec<[Pixel; 2]>,
}

impl PolygonSilhouette {
    pub fn new(vertices: Vec<Pixel>) -> Self {
        let lines = if vertices.len() < 3 {
            Vec::new()
        } else {
            vertices
                .iter()
                .zip(vertices.iter().cycle().skip(1))
                .map(|(a, b)| [*a, *b])
                .collect()
        };
        Self { vertices, lines }
    }

    /// No silhouette in view.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn vertices(&self) -> &[Pixel] {
        &self.vertices
    }
}

impl Silhouette for PolygonSilhouette {
    fn lines(&self) -> &[[Pixel; 2]] {
        &self.lines
    }

    /// Even-odd rule.
    fn is_on_silhouette(&self, pixel: &Pixel) -> bool {
        let mut inside = false;
        for [a, b] in &self.lines {
            if (a.y > pixel.y) != (b.y > pixel.y) {
                let x_cross = a.x + (pixel.y - a.y) * (b.x - a.x) / (b.y - a.y);
                if pixel.x < x_cross {
                    inside = !inside;
                }
            }
        }
        inside
    }
}

/// Field boundary as a polyline in image space; everything below it is field.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(from = "Vec<Pixel>")]
pub struct PolylineBoundary {
    points: Vec<Pixel>,
}

impl PolylineBoundary {
    /// `points` are sorted by `x` on construction.
    pub fn new(mut points: Vec<Pixel>) -> Self {
        points.sort_by(|a, b| a.x.total_cmp(&b.x));
        Self { points }
    }

    /// Boundary at a constant image row.
    pub fn horizontal(y: f32, width: f32) -> Self {
        Self::new(vec![Pixel::new(0.0, y), Pixel::new(width, y)])
    }

    fn boundary_y(&self, x: f32) -> Option<f32> {
        let first = self.points.first()?;
        let last = self.points.last()?;
        if x <= first.x {
            return Some(first.y);
        }
        if x >= last.x {
            return Some(last.y);
        }
        self.points.windows(2).find_map(|w| {
            let (a, b) = (w[0], w[1]);
            if x < a.x || x > b.x {
                return None;
            }
            let dx = b.x - a.x;
            if dx <= f32::EPSILON {
                Some(a.y.max(b.y))
            } else {
                Some(a.y + (b.y - a.y) * (x - a.x) / dx)
            }
        })
    }
}

impl From<Vec<Pixel>> for PolylineBoundary {
    fn from(points: Vec<Pixel>) -> Self {
        Self::new(points)
    }
}

impl FieldBoundary for PolylineBoundary {
    fn is_inside_field(&self, pixel: &Pixel) -> bool {
        match self.boundary_y(pixel.x) {
            Some(y) => pixel.y >= y,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> PolygonSilhouette {
        PolygonSilhouette::new(vec![
            Pixel::new(10.0, 40.0),
            Pixel::new(30.0, 30.0),
            Pixel::new(30.0, 60.0),
            Pixel::new(10.0, 60.0),
        ])
    }

    #[test]
    fn polygon_membership() {
        let s = square();
        assert!(s.is_on_silhouette(&Pixel::new(20.0, 50.0)));
        assert!(!s.is_on_silhouette(&Pixel::new(5.0, 50.0)));
        assert!(!s.is_on_silhouette(&Pixel::new(20.0, 20.0)));
    }

    #[test]
    fn top_at_column_interpolates_slanted_edge() {
        let s = square();
        let top = s.top_at_column(20.0).expect("column crosses polygon");
        assert!((top - 35.0).abs() < 1e-4, "top={top}");
        assert!(s.top_at_column(50.0).is_none());
        assert!(PolygonSilhouette::empty().top_at_column(20.0).is_none());
    }

    #[test]
    fn boundary_interpolates_between_points() {
        let b = PolylineBoundary::new(vec![Pixel::new(100.0, 20.0), Pixel::new(0.0, 10.0)]);
        assert!(b.is_inside_field(&Pixel::new(50.0, 16.0)));
        assert!(!b.is_inside_field(&Pixel::new(50.0, 14.0)));
        assert!(PolylineBoundary::default().is_inside_field(&Pixel::new(0.0, 0.0)));
    }
}
