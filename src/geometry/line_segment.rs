use std::sync::Arc;

use bigdecimal::BigDecimal;
use num_traits::Zero;

use super::{Envelope, FiniteGeometry, Geometry, Point};
use crate::environment::Environment;

/// A straight segment between two points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSegment {
    start: Point,
    end: Point,
}

impl LineSegment {
    /// Creates a segment from `start` to `end`. The segment uses the
    /// environment of `start`.
    #[must_use]
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn start(&self) -> &Point {
        &self.start
    }

    #[must_use]
    pub fn end(&self) -> &Point {
        &self.end
    }

    /// Length of the segment rounded to `precision` decimal places.
    #[must_use]
    pub fn length(&self, precision: i64) -> BigDecimal {
        self.start.distance(&self.end, precision)
    }

    /// Returns whether `point` lies on this segment within `tolerance`.
    ///
    /// Collinear points inside the envelope match exactly. Otherwise the
    /// detour `|start→point| + |point→end| − |start→end|`, evaluated at the
    /// environment scale, must not exceed `tolerance`.
    #[must_use]
    pub fn intersects_point(&self, point: &Point, tolerance: &BigDecimal) -> bool {
        let tolerance = tolerance.abs();
        let bounds = self.envelope();
        if !bounds.expanded(&tolerance).contains(point) {
            return false;
        }
        if bounds.contains(point) && self.cross(point).is_zero() {
            return true;
        }
        let scale = self.start.environment().scale();
        let detour = self.start.distance(point, scale) + point.distance(&self.end, scale)
            - self.length(scale);
        detour <= tolerance
    }

    /// Cross product of `end - start` and `point - start`; zero when the
    /// three are collinear.
    fn cross(&self, point: &Point) -> BigDecimal {
        let dx = self.end.x() - self.start.x();
        let dy = self.end.y() - self.start.y();
        let px = point.x() - self.start.x();
        let py = point.y() - self.start.y();
        dx * py - dy * px
    }
}

impl Geometry for LineSegment {
    fn environment(&self) -> &Arc<Environment> {
        self.start.environment()
    }
}

impl FiniteGeometry for LineSegment {
    fn envelope(&self) -> Envelope {
        Envelope::from_points(&self.start, &self.end)
    }
}
