//! 2D geometry primitives.

use serde::{Deserialize, Serialize};

/// A point in sheet coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounding box of a vertex run. Returns `None` for an empty
/// slice.
pub fn bounding_box(points: &[Point]) -> Option<(Point, Point)> {
    let first = points.first()?;
    let mut min = *first;
    let mut max = *first;
    for p in points {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    Some((min, max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_box() {
        let pts = vec![
            Point::new(1.0, 2.0),
            Point::new(-3.0, 5.0),
            Point::new(4.0, 0.5),
        ];
        let (min, max) = bounding_box(&pts).unwrap();
        assert_eq!(min, Point::new(-3.0, 0.5));
        assert_eq!(max, Point::new(4.0, 5.0));

        assert!(bounding_box(&[]).is_none());
    }
}
