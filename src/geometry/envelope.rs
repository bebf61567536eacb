use std::fmt;
use std::sync::Arc;

use bigdecimal::BigDecimal;

use super::{FiniteGeometry, Geometry, Point};
use crate::environment::Environment;

/// An axis-aligned bounding box with decimal bounds.
#[derive(Debug, Clone)]
pub struct Envelope {
    x_min: BigDecimal,
    x_max: BigDecimal,
    y_min: BigDecimal,
    y_max: BigDecimal,
    env: Arc<Environment>,
}

impl Envelope {
    /// Creates a degenerate envelope covering the single position `(x, y)`.
    #[must_use]
    pub fn new(env: &Arc<Environment>, x: BigDecimal, y: BigDecimal) -> Self {
        Self {
            x_min: x.clone(),
            x_max: x,
            y_min: y.clone(),
            y_max: y,
            env: Arc::clone(env),
        }
    }

    /// Creates the smallest envelope containing both points.
    #[must_use]
    pub fn from_points(a: &Point, b: &Point) -> Self {
        a.envelope().union(&b.envelope())
    }

    #[must_use]
    pub fn x_min(&self) -> &BigDecimal {
        &self.x_min
    }

    #[must_use]
    pub fn x_max(&self) -> &BigDecimal {
        &self.x_max
    }

    #[must_use]
    pub fn y_min(&self) -> &BigDecimal {
        &self.y_min
    }

    #[must_use]
    pub fn y_max(&self) -> &BigDecimal {
        &self.y_max
    }

    /// Returns the smallest envelope containing `self` and `other`.
    #[must_use]
    pub fn union(&self, other: &Envelope) -> Envelope {
        Self {
            x_min: (&self.x_min).min(&other.x_min).clone(),
            x_max: (&self.x_max).max(&other.x_max).clone(),
            y_min: (&self.y_min).min(&other.y_min).clone(),
            y_max: (&self.y_max).max(&other.y_max).clone(),
            env: Arc::clone(&self.env),
        }
    }

    /// Returns this envelope grown by `margin` on every side.
    #[must_use]
    pub fn expanded(&self, margin: &BigDecimal) -> Envelope {
        Self {
            x_min: &self.x_min - margin,
            x_max: &self.x_max + margin,
            y_min: &self.y_min - margin,
            y_max: &self.y_max + margin,
            env: Arc::clone(&self.env),
        }
    }

    /// Returns whether `point` lies inside or on the boundary.
    #[must_use]
    pub fn contains(&self, point: &Point) -> bool {
        point.x() >= &self.x_min
            && point.x() <= &self.x_max
            && point.y() >= &self.y_min
            && point.y() <= &self.y_max
    }

    /// Returns whether the two envelopes share at least one position.
    #[must_use]
    pub fn intersects(&self, other: &Envelope) -> bool {
        self.x_min <= other.x_max
            && other.x_min <= self.x_max
            && self.y_min <= other.y_max
            && other.y_min <= self.y_max
    }
}

impl Geometry for Envelope {
    fn environment(&self) -> &Arc<Environment> {
        &self.env
    }
}

impl FiniteGeometry for Envelope {
    fn envelope(&self) -> Envelope {
        self.clone()
    }
}

impl PartialEq for Envelope {
    fn eq(&self, other: &Self) -> bool {
        self.x_min == other.x_min
            && self.x_max == other.x_max
            && self.y_min == other.y_min
            && self.y_max == other.y_max
    }
}

impl fmt::Display for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Envelope2D(xMin={} xMax={} yMin={} yMax={})",
            self.x_min, self.x_max, self.y_min, self.y_max
        )
    }
}
