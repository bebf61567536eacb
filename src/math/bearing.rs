//! Clockwise bearing from the positive Y axis.
//!
//! One case table serves both the `f64` and the decimal angle, so the two
//! only differ in the arithmetic they plug in.

use std::cmp::Ordering;

use bigdecimal::BigDecimal;
use num_traits::Zero;

use crate::environment::Environment;

/// Arithmetic needed to evaluate a bearing.
pub trait BearingArithmetic {
    type Value;

    /// Sign of `v` relative to zero.
    fn sign(&self, v: &Self::Value) -> Ordering;

    fn zero(&self) -> Self::Value;
    fn half_pi(&self) -> Self::Value;
    fn pi(&self) -> Self::Value;
    fn three_half_pi(&self) -> Self::Value;
    fn two_pi(&self) -> Self::Value;

    /// `atan(|num| / |den|)`; `den` is never zero.
    fn atan_ratio(&self, num: &Self::Value, den: &Self::Value) -> Self::Value;

    fn add(&self, a: Self::Value, b: Self::Value) -> Self::Value;
    fn sub(&self, a: Self::Value, b: Self::Value) -> Self::Value;
}

/// Angle in `[0, 2π]` of the vector `(dx, dy)`, measured clockwise from +Y.
///
/// The upper edge is reached only when `dy > 0` and `dx < 0` is so small
/// that `2π − atan(|dx|/dy)` rounds back to `2π`.
pub fn clockwise_from_y<A: BearingArithmetic>(a: &A, dx: &A::Value, dy: &A::Value) -> A::Value {
    match (a.sign(dy), a.sign(dx)) {
        (Ordering::Equal | Ordering::Greater, Ordering::Equal) => a.zero(),
        (Ordering::Equal, Ordering::Greater) => a.half_pi(),
        (Ordering::Equal, Ordering::Less) => a.three_half_pi(),
        (Ordering::Greater, Ordering::Greater) => a.atan_ratio(dx, dy),
        (Ordering::Greater, Ordering::Less) => a.sub(a.two_pi(), a.atan_ratio(dx, dy)),
        (Ordering::Less, Ordering::Equal) => a.pi(),
        (Ordering::Less, Ordering::Greater) => a.sub(a.pi(), a.atan_ratio(dx, dy)),
        (Ordering::Less, Ordering::Less) => a.add(a.pi(), a.atan_ratio(dx, dy)),
    }
}

/// Double-precision bearing arithmetic.
#[derive(Debug, Clone, Copy, Default)]
pub struct F64Bearing;

impl BearingArithmetic for F64Bearing {
    type Value = f64;

    fn sign(&self, v: &f64) -> Ordering {
        v.partial_cmp(&0.0).unwrap_or(Ordering::Equal)
    }

    fn zero(&self) -> f64 {
        0.0
    }

    fn half_pi(&self) -> f64 {
        std::f64::consts::FRAC_PI_2
    }

    fn pi(&self) -> f64 {
        std::f64::consts::PI
    }

    fn three_half_pi(&self) -> f64 {
        3.0 * std::f64::consts::PI / 2.0
    }

    fn two_pi(&self) -> f64 {
        std::f64::consts::TAU
    }

    fn atan_ratio(&self, num: &f64, den: &f64) -> f64 {
        (num.abs() / den.abs()).atan()
    }

    fn add(&self, a: f64, b: f64) -> f64 {
        a + b
    }

    fn sub(&self, a: f64, b: f64) -> f64 {
        a - b
    }
}

/// Decimal bearing arithmetic at the precision of an [`Environment`].
#[derive(Debug, Clone, Copy)]
pub struct DecimalBearing<'a> {
    env: &'a Environment,
}

impl<'a> DecimalBearing<'a> {
    #[must_use]
    pub fn new(env: &'a Environment) -> Self {
        Self { env }
    }
}

impl BearingArithmetic for DecimalBearing<'_> {
    type Value = BigDecimal;

    fn sign(&self, v: &BigDecimal) -> Ordering {
        v.cmp(&BigDecimal::zero())
    }

    fn zero(&self) -> BigDecimal {
        BigDecimal::zero()
    }

    fn half_pi(&self) -> BigDecimal {
        self.env.half_pi().clone()
    }

    fn pi(&self) -> BigDecimal {
        self.env.pi().clone()
    }

    fn three_half_pi(&self) -> BigDecimal {
        self.env.three_half_pi().clone()
    }

    fn two_pi(&self) -> BigDecimal {
        self.env.two_pi().clone()
    }

    fn atan_ratio(&self, num: &BigDecimal, den: &BigDecimal) -> BigDecimal {
        let ratio = self.env.divide(&num.abs(), &den.abs());
        self.env.atan(&ratio)
    }

    fn add(&self, a: BigDecimal, b: BigDecimal) -> BigDecimal {
        a + b
    }

    fn sub(&self, a: BigDecimal, b: BigDecimal) -> BigDecimal {
        a - b
    }
}
