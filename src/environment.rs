use std::sync::Arc;

use bigdecimal::{BigDecimal, RoundingMode};

use crate::error::{EnvironmentError, Result};
use crate::math::{decimal, trig};

/// Largest number of decimal places an environment may carry constants at.
pub const MAX_PRECISION: i64 = 1000;

/// Parameters controlling decimal arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvironmentConfig {
    /// Rounding mode for rounding to targets and for square roots.
    pub rounding_mode: RoundingMode,
    /// Default number of decimal places for fixed-precision operations.
    pub scale: i64,
    /// Decimal places for constants and transcendental functions.
    pub precision: i64,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            rounding_mode: RoundingMode::HalfUp,
            scale: 10,
            precision: 34,
        }
    }
}

/// Shared, read-only numeric environment.
///
/// Holds the rounding configuration and the decimal constants derived from
/// it. Points hold an `Arc<Environment>`; many points and threads may share
/// one since nothing in it changes after construction.
#[derive(Debug)]
pub struct Environment {
    config: EnvironmentConfig,
    pi: BigDecimal,
    half_pi: BigDecimal,
    three_half_pi: BigDecimal,
    two_pi: BigDecimal,
    /// π/2 with guard digits, reused by [`Environment::atan`].
    working_half_pi: BigDecimal,
}

impl Environment {
    /// Validates `config` and computes its constants.
    ///
    /// # Errors
    ///
    /// Returns [`EnvironmentError::InvalidEnvironment`] if the scale is
    /// negative or the precision is outside `1..=MAX_PRECISION`.
    pub fn new(config: EnvironmentConfig) -> Result<Arc<Self>> {
        if config.scale < 0 {
            return Err(EnvironmentError::InvalidEnvironment(format!(
                "scale must be non-negative, got {}",
                config.scale
            ))
            .into());
        }
        if !(1..=MAX_PRECISION).contains(&config.precision) {
            return Err(EnvironmentError::InvalidEnvironment(format!(
                "precision must be in 1..={MAX_PRECISION}, got {}",
                config.precision
            ))
            .into());
        }

        let dp = config.precision;
        let working_pi = trig::working_pi(dp);
        let working_half_pi = trig::working_half_pi(&working_pi, dp);
        let pi = working_pi.with_scale_round(dp, RoundingMode::HalfEven);
        let half_pi = decimal::divide(&pi, &BigDecimal::from(2u8), dp, RoundingMode::HalfEven);
        let three_half_pi = &half_pi * BigDecimal::from(3u8);
        let two_pi = &pi * BigDecimal::from(2u8);
        tracing::debug!(
            rounding_mode = ?config.rounding_mode,
            scale = config.scale,
            precision = config.precision,
            "created decimal environment"
        );
        Ok(Arc::new(Self {
            config,
            pi,
            half_pi,
            three_half_pi,
            two_pi,
            working_half_pi,
        }))
    }

    /// Creates an environment with [`EnvironmentConfig::default`].
    ///
    /// # Errors
    ///
    /// Never fails for the default configuration; the `Result` mirrors
    /// [`Environment::new`].
    pub fn default_shared() -> Result<Arc<Self>> {
        Self::new(EnvironmentConfig::default())
    }

    #[must_use]
    pub fn config(&self) -> &EnvironmentConfig {
        &self.config
    }

    #[must_use]
    pub fn rounding_mode(&self) -> RoundingMode {
        self.config.rounding_mode
    }

    #[must_use]
    pub fn scale(&self) -> i64 {
        self.config.scale
    }

    #[must_use]
    pub fn precision(&self) -> i64 {
        self.config.precision
    }

    #[must_use]
    pub fn pi(&self) -> &BigDecimal {
        &self.pi
    }

    #[must_use]
    pub fn half_pi(&self) -> &BigDecimal {
        &self.half_pi
    }

    #[must_use]
    pub fn three_half_pi(&self) -> &BigDecimal {
        &self.three_half_pi
    }

    #[must_use]
    pub fn two_pi(&self) -> &BigDecimal {
        &self.two_pi
    }

    /// Rounds `value` to the nearest multiple of `target` with this
    /// environment's rounding mode.
    ///
    /// # Errors
    ///
    /// Returns an error if `target` is zero.
    pub fn round(&self, value: &BigDecimal, target: &BigDecimal) -> Result<BigDecimal> {
        decimal::round_to_multiple(value, target, self.config.rounding_mode)
    }

    /// `num / den` at this environment's precision. `den` must be nonzero.
    #[must_use]
    pub fn divide(&self, num: &BigDecimal, den: &BigDecimal) -> BigDecimal {
        decimal::divide(num, den, self.config.precision, self.config.rounding_mode)
    }

    /// Arctangent of `x` at this environment's precision.
    #[must_use]
    pub fn atan(&self, x: &BigDecimal) -> BigDecimal {
        trig::atan_with_half_pi(x, self.config.precision, Some(&self.working_half_pi))
    }
}
