//! Panel outline generation.
//!
//! A panel is an axis-aligned rectangle whose four edges carry a tab
//! profile so adjoining panels interlock. The outline walk visits the
//! edges in a fixed order (left, top, right, bottom), starting and ending
//! at the lower-left corner, and both tab styles share that walk: they
//! differ only in where an edge is broken into segments.

use boxkit_core::Point;
use serde::{Deserialize, Serialize};

/// Divisions per castled edge. Fixed, so tab size scales inversely with
/// panel dimension.
const CASTLE_DIVISIONS: usize = 9;

/// Edge tab profile for panel outlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TabStyle {
    /// Finger-joint profile: alternating inward/outward tabs along the
    /// whole edge.
    Castled,
    /// A single thickness-sized notch at each end of the edge ("pretty"
    /// edges).
    Straight,
}

impl TabStyle {
    /// Positions along an edge of length `len` where the profile changes
    /// side.
    fn breaks(self, len: f64, thickness: f64) -> Vec<f64> {
        match self {
            TabStyle::Castled => (0..=CASTLE_DIVISIONS)
                .map(|i| len * i as f64 / CASTLE_DIVISIONS as f64)
                .collect(),
            TabStyle::Straight => vec![0.0, thickness, len - thickness, len],
        }
    }
}

/// A placed panel: two opposite corners in sheet coordinates, material
/// thickness, and the starting tab phase for each edge pair.
///
/// Invariant: `p2.x > p1.x` and `p2.y > p1.y`. The phase flags determine
/// which side of an edge the first tab offsets to; adjoining panels are
/// planned with complementary phases so their edges interlock. No
/// validation is performed here; the planner guarantees thickness is
/// smaller than the panel span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    pub p1: Point,
    pub p2: Point,
    pub thickness: f64,
    /// Starting phase of the left/right edges (0 or 1).
    pub lr: u8,
    /// Starting phase of the top/bottom edges (0 or 1).
    pub tb: u8,
}

impl Panel {
    pub fn new(p1x: f64, p1y: f64, p2x: f64, p2y: f64, thickness: f64, lr: u8, tb: u8) -> Self {
        Self {
            p1: Point::new(p1x, p1y),
            p2: Point::new(p2x, p2y),
            thickness,
            lr,
            tb,
        }
    }

    pub fn width(&self) -> f64 {
        self.p2.x - self.p1.x
    }

    pub fn height(&self) -> f64 {
        self.p2.y - self.p1.y
    }

    /// Ordered boundary vertices of the tabbed outline, closed (first
    /// vertex equals the last).
    pub fn outline(&self, style: TabStyle) -> Vec<Point> {
        let corners = [
            self.p1,
            Point::new(self.p1.x, self.p2.y),
            self.p2,
            Point::new(self.p2.x, self.p1.y),
            self.p1,
        ];
        // Outward normals in traversal order: left, top, right, bottom.
        let normals = [(-1.0, 0.0), (0.0, 1.0), (1.0, 0.0), (0.0, -1.0)];
        let phases = [self.lr, self.tb, self.lr, self.tb];

        let mut points = vec![self.p1];
        for i in 0..4 {
            self.walk_edge(
                &mut points,
                corners[i],
                corners[i + 1],
                normals[i],
                phases[i],
                style,
            );
            points.push(corners[i + 1]);
        }
        points
    }

    /// Plain closed rectangle, no tabs. Used for lid panels.
    pub fn plain_outline(&self) -> Vec<Point> {
        vec![
            self.p1,
            Point::new(self.p1.x, self.p2.y),
            self.p2,
            Point::new(self.p2.x, self.p1.y),
            self.p1,
        ]
    }

    /// Emit one edge: for each segment between consecutive break positions,
    /// push both segment endpoints offset by `phase * thickness` along the
    /// outward normal, flipping the phase after every segment.
    fn walk_edge(
        &self,
        out: &mut Vec<Point>,
        start: Point,
        end: Point,
        normal: (f64, f64),
        phase: u8,
        style: TabStyle,
    ) {
        // Edges are axis-aligned, so the span is whichever delta is nonzero.
        let len = (end.x - start.x).abs().max((end.y - start.y).abs());
        let (ux, uy) = ((end.x - start.x) / len, (end.y - start.y) / len);

        let mut t = phase % 2;
        for pair in style.breaks(len, self.thickness).windows(2) {
            let off = f64::from(t) * self.thickness;
            out.push(Point::new(
                start.x + ux * pair[0] + normal.0 * off,
                start.y + uy * pair[0] + normal.1 * off,
            ));
            out.push(Point::new(
                start.x + ux * pair[1] + normal.0 * off,
                start.y + uy * pair[1] + normal.1 * off,
            ));
            t = (t + 1) % 2;
        }
    }
}
