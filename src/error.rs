use thiserror::Error;

/// Top-level error type for the radial clip library.
#[derive(Debug, Error)]
pub enum RadialClipError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric inputs.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("parameter {parameter} must be finite, got {value}")]
    NonFinite { parameter: &'static str, value: f64 },
}

/// Errors related to outline operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`RadialClipError`].
pub type Result<T> = std::result::Result<T, RadialClipError>;

/// Checks that `value` is finite and inside `[min, max]`.
///
/// # Errors
///
/// Returns [`GeometryError::NonFinite`] or [`GeometryError::ParameterOutOfRange`].
pub(crate) fn check_range(parameter: &'static str, value: f64, min: f64, max: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(GeometryError::NonFinite { parameter, value }.into());
    }
    if value < min || value > max {
        return Err(GeometryError::ParameterOutOfRange {
            parameter,
            value,
            min,
            max,
        }
        .into());
    }
    Ok(value)
}
