use bigdecimal::{BigDecimal, RoundingMode};
use num_traits::{Signed, Zero};

use super::decimal::{round_sticky, shift_truncate};
use crate::error::{GeometryError, Result};

/// Square root of `x` correctly rounded to `dp` decimal places using `mode`.
///
/// # Errors
///
/// Returns [`GeometryError::NegativeSquareRoot`] if `x` is negative.
pub fn sqrt(x: &BigDecimal, dp: i64, mode: RoundingMode) -> Result<BigDecimal> {
    if x.is_negative() {
        return Err(GeometryError::NegativeSquareRoot(x.to_string()).into());
    }
    Ok(sqrt_magnitude(x, dp, mode))
}

/// Square root of `|x|`, for callers that already know `x` is non-negative.
pub(crate) fn sqrt_magnitude(x: &BigDecimal, dp: i64, mode: RoundingMode) -> BigDecimal {
    if x.is_zero() {
        return BigDecimal::zero().with_scale(dp);
    }
    let (m, scale) = x.abs().as_bigint_and_exponent();
    // sqrt(x) * 10^k == sqrt(m * 10^(2k - scale)), one guard digit past dp.
    let k = dp + 1;
    let (radicand, truncated) = shift_truncate(&m, 2 * k - scale);
    let root = radicand.sqrt();
    let inexact = truncated || &root * &root != radicand;
    tracing::trace!(dp, inexact, "decimal sqrt");
    round_sticky(root, k, inexact, false, dp, mode)
}
