pub mod environment;
pub mod error;
pub mod geometry;
pub mod math;

pub use bigdecimal::{BigDecimal, RoundingMode};
pub use environment::{Environment, EnvironmentConfig};
pub use error::{Decimal2dError, Result};
pub use geometry::{
    Envelope, FiniteGeometry, Geometry, LineSegment, Ordered, Point, RoundingTargets,
};
