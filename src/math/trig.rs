use bigdecimal::{BigDecimal, RoundingMode};
use num_traits::{One, Signed, Zero};

use super::decimal::divide;
use super::sqrt::sqrt_magnitude;

/// Extra decimal places carried through intermediate steps.
const GUARD_DIGITS: i64 = 10;

const WORKING_MODE: RoundingMode = RoundingMode::HalfEven;

/// π rounded half-even to `dp` decimal places.
#[must_use]
pub fn pi(dp: i64) -> BigDecimal {
    working_pi(dp).with_scale_round(dp, WORKING_MODE)
}

/// π carried to `dp` plus the guard digits, for callers that derive further
/// constants from it.
pub(crate) fn working_pi(dp: i64) -> BigDecimal {
    machin_pi(dp + GUARD_DIGITS)
}

/// Halves a [`working_pi`] result at the working scale
/// [`atan_with_half_pi`] expects for `dp`.
pub(crate) fn working_half_pi(working_pi: &BigDecimal, dp: i64) -> BigDecimal {
    divide(working_pi, &BigDecimal::from(2u8), dp + GUARD_DIGITS, WORKING_MODE)
}

/// Arctangent of `x` in radians, rounded half-even to `dp` decimal places.
#[must_use]
pub fn atan(x: &BigDecimal, dp: i64) -> BigDecimal {
    atan_with_half_pi(x, dp, None)
}

/// [`atan`] with π/2 supplied at the working scale of [`working_half_pi`].
/// When `half_pi` is `None` it is computed only if `|x| > 1` needs it.
pub(crate) fn atan_with_half_pi(
    x: &BigDecimal,
    dp: i64,
    half_pi: Option<&BigDecimal>,
) -> BigDecimal {
    let w = dp + GUARD_DIGITS;
    let result = if x.is_negative() {
        -atan_non_negative(&x.abs(), w, half_pi)
    } else {
        atan_non_negative(x, w, half_pi)
    };
    result.with_scale_round(dp, WORKING_MODE)
}

/// π = 16·atan(1/5) − 4·atan(1/239)
fn machin_pi(w: i64) -> BigDecimal {
    let one = BigDecimal::one();
    let a = atan_series(&divide(&one, &BigDecimal::from(5u8), w, WORKING_MODE), w);
    let b = atan_series(&divide(&one, &BigDecimal::from(239u8), w, WORKING_MODE), w);
    a * BigDecimal::from(16u8) - b * BigDecimal::from(4u8)
}

fn atan_non_negative(x: &BigDecimal, w: i64, half_pi: Option<&BigDecimal>) -> BigDecimal {
    let one = BigDecimal::one();
    if x > &one {
        let half_pi = match half_pi {
            Some(h) => h.clone(),
            None => divide(&machin_pi(w), &BigDecimal::from(2u8), w, WORKING_MODE),
        };
        let reciprocal = divide(&one, x, w, WORKING_MODE);
        return half_pi - atan_non_negative(&reciprocal, w, None);
    }

    // atan(x) = 2·atan(x / (1 + sqrt(1 + x²)))
    let threshold = BigDecimal::new(1.into(), 1);
    let mut x = x.clone();
    let mut doublings = 0u32;
    while x > threshold {
        let root = sqrt_magnitude(&(&one + x.square()), w, WORKING_MODE);
        x = divide(&x, &(&one + root), w, WORKING_MODE);
        doublings += 1;
    }
    atan_series(&x, w) * BigDecimal::from(1u64 << doublings)
}

/// Taylor series `x − x³/3 + x⁵/5 − …` for `|x| < 1`, truncated once terms
/// vanish at scale `w`.
fn atan_series(x: &BigDecimal, w: i64) -> BigDecimal {
    let x2 = x.square().with_scale_round(w, WORKING_MODE);
    let mut power = x.clone();
    let mut sum = x.clone();
    let mut n: u64 = 1;
    loop {
        power = (&power * &x2).with_scale_round(w, WORKING_MODE);
        let term = divide(&power, &BigDecimal::from(2 * n + 1), w, WORKING_MODE);
        if term.is_zero() {
            break;
        }
        if n % 2 == 1 {
            sum -= term;
        } else {
            sum += term;
        }
        n += 1;
    }
    tracing::trace!(terms = n, scale = w, "atan series converged");
    sum
}
