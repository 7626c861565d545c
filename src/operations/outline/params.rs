use crate::error::{check_range, Result};

/// Tolerances controlling outline construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlineParams {
    /// Sweeps smaller than this (degrees) produce no visible segment.
    pub sweep_epsilon: f64,
    /// Absolute distance within which a boundary point counts as lying on a
    /// rectangle side. Same units as the rectangle.
    pub side_tolerance: f64,
}

impl Default for OutlineParams {
    fn default() -> Self {
        Self {
            sweep_epsilon: 0.01,
            side_tolerance: 0.001,
        }
    }
}

impl OutlineParams {
    /// Creates validated outline parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if either tolerance is negative or non-finite, or if
    /// `sweep_epsilon` exceeds 180 degrees.
    pub fn new(sweep_epsilon: f64, side_tolerance: f64) -> Result<Self> {
        Ok(Self {
            sweep_epsilon: check_range("sweep_epsilon", sweep_epsilon, 0.0, 180.0)?,
            side_tolerance: check_range("side_tolerance", side_tolerance, 0.0, f64::MAX)?,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let params = OutlineParams::default();
        assert!((params.sweep_epsilon - 0.01).abs() < f64::EPSILON);
        assert!((params.side_tolerance - 0.001).abs() < f64::EPSILON);
    }

    #[test]
    fn new_with_valid_values() {
        let params = OutlineParams::new(0.5, 1e-6).unwrap();
        assert!((params.sweep_epsilon - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn new_with_negative_fails() {
        assert!(OutlineParams::new(-0.1, 0.001).is_err());
        assert!(OutlineParams::new(0.01, -1.0).is_err());
    }

    #[test]
    fn new_with_nan_fails() {
        assert!(OutlineParams::new(f64::NAN, 0.001).is_err());
    }
}
