mod envelope;
mod line_segment;
mod point;

pub use envelope::Envelope;
pub use line_segment::LineSegment;
pub use point::{Point, RoundingTargets};

use std::any::Any;
use std::cmp::Ordering;
use std::sync::Arc;

use crate::environment::Environment;

/// Anything that lives in a numeric [`Environment`].
pub trait Geometry {
    /// Returns the shared environment.
    fn environment(&self) -> &Arc<Environment>;
}

/// Geometry with a finite extent.
pub trait FiniteGeometry: Geometry {
    /// Returns the axis-aligned envelope bounding this geometry.
    fn envelope(&self) -> Envelope;
}

/// Comparison against values of unknown type.
pub trait Ordered {
    /// Orders `self` against `other`. Values of a foreign type sort before
    /// `self`, so the result is [`Ordering::Greater`].
    fn compare_to(&self, other: &dyn Any) -> Ordering;
}
