use thiserror::Error;

/// Top-level error type for decimal 2D geometry.
#[derive(Debug, Error)]
pub enum Decimal2dError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Environment(#[from] EnvironmentError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors raised while turning raw input into decimal coordinates.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("{axis} coordinate {literal:?} is not a decimal literal")]
    InvalidDecimal {
        axis: &'static str,
        literal: String,
        #[source]
        source: bigdecimal::ParseBigDecimalError,
    },

    #[error("{axis} coordinate {value} is not finite")]
    NonFinite { axis: &'static str, value: f64 },
}

/// Errors related to the numeric environment.
#[derive(Debug, Error)]
pub enum EnvironmentError {
    #[error("invalid environment: {0}")]
    InvalidEnvironment(String),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("cannot round to a multiple of zero")]
    InvalidRoundingTarget,

    #[error("square root of negative value {0}")]
    NegativeSquareRoot(String),
}

/// Convenience type alias for results using [`Decimal2dError`].
pub type Result<T> = std::result::Result<T, Decimal2dError>;
