use std::any::Any;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::Arc;

use bigdecimal::{BigDecimal, ParseBigDecimalError, RoundingMode};
use num_traits::{One, ToPrimitive, Zero};

use super::{Envelope, FiniteGeometry, Geometry, LineSegment, Ordered};
use crate::environment::Environment;
use crate::error::{Decimal2dError, ParseError, Result};
use crate::math::bearing::{clockwise_from_y, DecimalBearing, F64Bearing};
use crate::math::sqrt::sqrt_magnitude;
use crate::math::{decimal, Point2};

/// Per-axis rounding units used when building or copying a point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundingTargets {
    /// Unit `x` is rounded to.
    pub x: BigDecimal,
    /// Unit `y` is rounded to.
    pub y: BigDecimal,
}

impl RoundingTargets {
    #[must_use]
    pub fn new(x: BigDecimal, y: BigDecimal) -> Self {
        Self { x, y }
    }

    /// Uses the same unit for both axes.
    #[must_use]
    pub fn uniform(target: BigDecimal) -> Self {
        Self {
            x: target.clone(),
            y: target,
        }
    }
}

/// A 2D point with arbitrary-precision decimal coordinates.
///
/// Equality, hashing and ordering look only at the coordinate values, never
/// at their representation (`1.0 == 1.00`) or at the environment. Points
/// order by `y` first, then by `x`.
///
/// The coordinates can only change through [`Point::round_to`].
#[derive(Debug, Clone)]
pub struct Point {
    x: BigDecimal,
    y: BigDecimal,
    env: Arc<Environment>,
}

impl Point {
    /// Creates a point at the origin.
    #[must_use]
    pub fn origin(env: &Arc<Environment>) -> Self {
        Self::from_decimals(env, BigDecimal::zero(), BigDecimal::zero())
    }

    /// Creates a point from decimal coordinates, kept exactly as given.
    #[must_use]
    pub fn from_decimals(env: &Arc<Environment>, x: BigDecimal, y: BigDecimal) -> Self {
        Self {
            x,
            y,
            env: Arc::clone(env),
        }
    }

    /// Creates a point from decimal coordinates rounded to `targets`.
    ///
    /// # Errors
    ///
    /// Returns an error if either rounding target is zero.
    pub fn from_decimals_rounded(
        env: &Arc<Environment>,
        x: BigDecimal,
        y: BigDecimal,
        targets: &RoundingTargets,
    ) -> Result<Self> {
        let x = env.round(&x, &targets.x)?;
        let y = env.round(&y, &targets.y)?;
        Ok(Self::from_decimals(env, x, y))
    }

    /// Parses a point from two decimal literals such as `"-1.25"` or `"3e2"`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidDecimal`] naming the offending axis.
    pub fn from_strings(env: &Arc<Environment>, x: &str, y: &str) -> Result<Self> {
        let x = parse_axis("x", x)?;
        let y = parse_axis("y", y)?;
        Ok(Self::from_decimals(env, x, y))
    }

    /// Creates a point from doubles.
    ///
    /// Each value converts through its shortest round-trip decimal form, so
    /// `0.1` becomes exactly `0.1` rather than its binary expansion.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::NonFinite`] for NaN or infinite input.
    pub fn from_doubles(env: &Arc<Environment>, x: f64, y: f64) -> Result<Self> {
        let x = decimal_from_f64("x", x)?;
        let y = decimal_from_f64("y", y)?;
        Ok(Self::from_decimals(env, x, y))
    }

    /// Creates a point from doubles rounded to `targets`.
    ///
    /// # Errors
    ///
    /// Returns an error for non-finite input or a zero rounding target.
    pub fn from_doubles_rounded(
        env: &Arc<Environment>,
        x: f64,
        y: f64,
        targets: &RoundingTargets,
    ) -> Result<Self> {
        let x = decimal_from_f64("x", x)?;
        let y = decimal_from_f64("y", y)?;
        Self::from_decimals_rounded(env, x, y, targets)
    }

    /// Copies this point with its coordinates rounded to `targets`.
    ///
    /// # Errors
    ///
    /// Returns an error if either rounding target is zero.
    pub fn copy_rounded(&self, targets: &RoundingTargets) -> Result<Self> {
        let x = self.env.round(&self.x, &targets.x)?;
        let y = self.env.round(&self.y, &targets.y)?;
        Ok(Self::from_decimals(&self.env, x, y))
    }

    /// Returns the x coordinate.
    #[must_use]
    pub fn x(&self) -> &BigDecimal {
        &self.x
    }

    /// Returns the y coordinate.
    #[must_use]
    pub fn y(&self) -> &BigDecimal {
        &self.y
    }

    /// Rounds both coordinates in place to the nearest multiple of `target`,
    /// using the environment's rounding mode.
    ///
    /// # Errors
    ///
    /// Returns an error if `target` is zero; the point is left unchanged.
    pub fn round_to(&mut self, target: &BigDecimal) -> Result<()> {
        let x = self.env.round(&self.x, target)?;
        let y = self.env.round(&self.y, target)?;
        self.x = x;
        self.y = y;
        Ok(())
    }

    /// Returns whether this point lies on `segment` within `tolerance`.
    #[must_use]
    pub fn intersects(&self, segment: &LineSegment, tolerance: &BigDecimal) -> bool {
        segment.intersects_point(self, tolerance)
    }

    /// Euclidean distance to `other`, rounded to `precision` decimal places
    /// with the environment's rounding mode. Equal points are exactly zero
    /// apart.
    #[must_use]
    pub fn distance(&self, other: &Point, precision: i64) -> BigDecimal {
        if self == other {
            return BigDecimal::zero();
        }
        let dx = &self.x - &other.x;
        let dy = &self.y - &other.y;
        sqrt_magnitude(
            &(dx.square() + dy.square()),
            precision,
            self.env.rounding_mode(),
        )
    }

    /// Angle from the positive Y axis, clockwise, of the direction from this
    /// point to `other`, in `[0, 2π]`. Computed in double precision.
    #[must_use]
    pub fn angle_double(&self, other: &Point) -> f64 {
        let dx = to_f64(&other.x) - to_f64(&self.x);
        let dy = to_f64(&other.y) - to_f64(&self.y);
        clockwise_from_y(&F64Bearing, &dx, &dy)
    }

    /// Decimal form of [`Point::angle_double`], at the environment's
    /// precision and using its π constants.
    #[must_use]
    pub fn angle_decimal(&self, other: &Point) -> BigDecimal {
        let dx = &other.x - &self.x;
        let dy = &other.y - &self.y;
        clockwise_from_y(&DecimalBearing::new(&self.env), &dx, &dy)
    }

    /// `(x - other.x) / (y - other.y)` rounded to `scale` places with `mode`.
    ///
    /// Returns exactly `1` when the y values are equal and exactly `0` when
    /// only the x values are equal.
    #[must_use]
    pub fn gradient(&self, other: &Point, scale: i64, mode: RoundingMode) -> BigDecimal {
        let x_diff = &self.x - &other.x;
        let y_diff = &self.y - &other.y;
        if y_diff.is_zero() {
            return BigDecimal::one();
        }
        if x_diff.is_zero() {
            return BigDecimal::zero();
        }
        decimal::divide(&x_diff, &y_diff, scale, mode)
    }

    /// Returns `[x, y]` narrowed to doubles.
    #[must_use]
    pub fn to_double_array(&self) -> [f64; 2] {
        [to_f64(&self.x), to_f64(&self.y)]
    }

    /// Returns the point narrowed to a double-precision `Point2`.
    #[must_use]
    pub fn to_point2(&self) -> Point2 {
        Point2::new(to_f64(&self.x), to_f64(&self.y))
    }
}

/// Parses a plain decimal literal: sign, digits, point and exponent only.
fn parse_axis(axis: &'static str, literal: &str) -> Result<BigDecimal> {
    let invalid = |source| -> Decimal2dError {
        ParseError::InvalidDecimal {
            axis,
            literal: literal.to_owned(),
            source,
        }
        .into()
    };
    if let Some(c) = literal
        .chars()
        .find(|c| !(c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')))
    {
        return Err(invalid(ParseBigDecimalError::Other(format!(
            "unexpected character {c:?}"
        ))));
    }
    BigDecimal::from_str(literal).map_err(invalid)
}

fn decimal_from_f64(axis: &'static str, value: f64) -> Result<BigDecimal> {
    if !value.is_finite() {
        return Err(ParseError::NonFinite { axis, value }.into());
    }
    // `Display` for f64 is the shortest string that round-trips.
    parse_axis(axis, &value.to_string())
}

fn to_f64(value: &BigDecimal) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

impl Geometry for Point {
    fn environment(&self) -> &Arc<Environment> {
        &self.env
    }
}

impl FiniteGeometry for Point {
    fn envelope(&self) -> Envelope {
        Envelope::new(&self.env, self.x.clone(), self.y.clone())
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.normalized().hash(state);
        self.y.normalized().hash(state);
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then_with(|| self.x.cmp(&other.x))
    }
}

impl Ordered for Point {
    fn compare_to(&self, other: &dyn Any) -> Ordering {
        other
            .downcast_ref::<Point>()
            .map_or(Ordering::Greater, |p| self.cmp(p))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point2D(x={} y={})", self.x, self.y)
    }
}
