use bigdecimal::{BigDecimal, RoundingMode};
use num_bigint::BigInt;
use num_traits::{Signed, Zero};

use crate::error::{GeometryError, Result};

/// Returns `10^exp` as a big integer.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn ten_pow(exp: u64) -> BigInt {
    num_traits::pow(BigInt::from(10u8), exp as usize)
}

/// Scales the integer `n` by `10^shift`, truncating toward zero when `shift`
/// is negative. The second value reports whether any nonzero digits were
/// dropped.
pub(crate) fn shift_truncate(n: &BigInt, shift: i64) -> (BigInt, bool) {
    if shift >= 0 {
        (n * ten_pow(shift.unsigned_abs()), false)
    } else {
        let d = ten_pow(shift.unsigned_abs());
        (n / &d, !(n % &d).is_zero())
    }
}

/// Builds a decimal from a truncated mantissa at `scale`, then rounds it to
/// `target_scale` with `mode`.
///
/// When `inexact` is set, a trailing sticky digit records that the true value
/// lies strictly beyond the mantissa (away from zero when `negative`), which
/// is enough for every rounding mode to round correctly.
pub(crate) fn round_sticky(
    mantissa: BigInt,
    scale: i64,
    inexact: bool,
    negative: bool,
    target_scale: i64,
    mode: RoundingMode,
) -> BigDecimal {
    let value = if inexact {
        let sticky = if negative { -1 } else { 1 };
        BigDecimal::new(mantissa * 10 + sticky, scale + 1)
    } else {
        BigDecimal::new(mantissa, scale)
    };
    value.with_scale_round(target_scale, mode)
}

/// Divides `num` by `den`, correctly rounded to `scale` decimal places.
///
/// `den` must be nonzero; callers special-case zero before dividing.
#[must_use]
pub fn divide(num: &BigDecimal, den: &BigDecimal, scale: i64, mode: RoundingMode) -> BigDecimal {
    let (n, n_scale) = num.as_bigint_and_exponent();
    let (d, d_scale) = den.as_bigint_and_exponent();
    // num / den * 10^(scale + 1) == n / d * 10^shift
    let shift = d_scale - n_scale + scale + 1;
    let (n, d) = if shift >= 0 {
        (n * ten_pow(shift.unsigned_abs()), d)
    } else {
        (n, d * ten_pow(shift.unsigned_abs()))
    };
    let q = &n / &d;
    let inexact = !(&n % &d).is_zero();
    let negative = n.is_negative() != d.is_negative();
    round_sticky(q, scale + 1, inexact, negative, scale, mode)
}

/// Rounds `value` to the nearest multiple of `target` using `mode`.
///
/// Only the magnitude of `target` matters, so directed modes such as `Floor`
/// keep their direction for negative targets. The result carries the scale
/// of `target`, so rounding an already rounded value returns it unchanged.
///
/// # Errors
///
/// Returns [`GeometryError::InvalidRoundingTarget`] if `target` is zero.
pub fn round_to_multiple(
    value: &BigDecimal,
    target: &BigDecimal,
    mode: RoundingMode,
) -> Result<BigDecimal> {
    if target.is_zero() {
        return Err(GeometryError::InvalidRoundingTarget.into());
    }
    let unit = target.abs();
    let multiples = divide(value, &unit, 0, mode);
    Ok(multiples * unit)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn d(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn divide_exact() {
        assert_eq!(divide(&d("1"), &d("8"), 3, RoundingMode::HalfUp), d("0.125"));
    }

    #[test]
    fn divide_repeating_respects_mode() {
        assert_eq!(divide(&d("1"), &d("3"), 2, RoundingMode::Up), d("0.34"));
        assert_eq!(divide(&d("1"), &d("3"), 2, RoundingMode::Down), d("0.33"));
        assert_eq!(divide(&d("2"), &d("3"), 2, RoundingMode::HalfUp), d("0.67"));
    }

    #[test]
    fn divide_halfway_cases() {
        // 0.125 exactly halfway between 0.12 and 0.13.
        assert_eq!(divide(&d("1"), &d("8"), 2, RoundingMode::HalfEven), d("0.12"));
        assert_eq!(divide(&d("1"), &d("8"), 2, RoundingMode::HalfUp), d("0.13"));
        assert_eq!(divide(&d("1"), &d("8"), 2, RoundingMode::HalfDown), d("0.12"));
    }

    #[test]
    fn divide_negative_quotient() {
        assert_eq!(divide(&d("-1"), &d("3"), 2, RoundingMode::Floor), d("-0.34"));
        assert_eq!(divide(&d("1"), &d("-3"), 2, RoundingMode::Ceiling), d("-0.33"));
        assert_eq!(divide(&d("-0.5"), &d("-0.25"), 0, RoundingMode::HalfUp), d("2"));
    }

    #[test]
    fn divide_mixed_scales() {
        assert_eq!(divide(&d("1.5"), &d("0.05"), 1, RoundingMode::HalfUp), d("30.0"));
        assert_eq!(divide(&d("12e3"), &d("4"), 0, RoundingMode::HalfUp), d("3000"));
    }

    #[test]
    fn round_to_multiple_of_hundredth() {
        let r = round_to_multiple(&d("1.23456"), &d("0.01"), RoundingMode::HalfUp).unwrap();
        assert_eq!(r, d("1.23"));
        assert_eq!(r.to_string(), "1.23");
    }

    #[test]
    fn round_to_multiple_non_power_of_ten() {
        let r = round_to_multiple(&d("1.3"), &d("0.5"), RoundingMode::HalfUp).unwrap();
        assert_eq!(r, d("1.5"));
    }

    #[test]
    fn negative_target_keeps_directed_modes() {
        let round = |v: &str, t: &str, mode| round_to_multiple(&d(v), &d(t), mode).unwrap();
        assert_eq!(round("1.3", "-0.5", RoundingMode::Floor), d("1.0"));
        assert_eq!(round("-1.3", "-0.5", RoundingMode::Floor), d("-1.5"));
        assert_eq!(round("1.3", "-0.5", RoundingMode::Ceiling), d("1.5"));
        assert_eq!(round("-1.3", "-0.5", RoundingMode::Ceiling), d("-1.0"));
        assert_eq!(
            round("1.26", "-0.1", RoundingMode::HalfUp),
            round("1.26", "0.1", RoundingMode::HalfUp)
        );
    }

    #[test]
    fn round_to_multiple_is_idempotent() {
        let t = d("0.001");
        let once = round_to_multiple(&d("-7.12345"), &t, RoundingMode::HalfEven).unwrap();
        let twice = round_to_multiple(&once, &t, RoundingMode::HalfEven).unwrap();
        assert_eq!(once, twice);
        assert_eq!(once.to_string(), twice.to_string());
    }

    #[test]
    fn round_to_zero_target_fails() {
        let err = round_to_multiple(&d("1"), &d("0"), RoundingMode::HalfUp).unwrap_err();
        assert!(err.to_string().contains("zero"));
    }

    #[test]
    fn shift_truncate_reports_lost_digits() {
        let (v, lost) = shift_truncate(&BigInt::from(1234), -2);
        assert_eq!(v, BigInt::from(12));
        assert!(lost);
        let (v, lost) = shift_truncate(&BigInt::from(1200), -2);
        assert_eq!(v, BigInt::from(12));
        assert!(!lost);
    }
}
