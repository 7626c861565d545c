use std::f64::consts::FRAC_PI_2;

use nalgebra::Isometry2;

use crate::error::{OperationError, Result};
use crate::geometry::{RectSize, Region};
use crate::math::Vector2;

/// Slack allowed when checking that a region belongs to its rectangle.
const FIT_TOLERANCE: f64 = 1e-6;

/// Rotates a region together with its rectangle by quarter turns clockwise
/// (in screen coordinates).
///
/// One turn maps `(x, y)` to `(h - y, x)` and the rectangle `w × h` to
/// `h × w`, so the rotated region stays anchored at the top-left origin.
#[derive(Debug)]
pub struct RotateQuarterTurn {
    size: RectSize,
    turns: u8,
}

impl RotateQuarterTurn {
    /// Creates a single clockwise quarter turn for a region built in `size`.
    #[must_use]
    pub fn new(size: RectSize) -> Self {
        Self { size, turns: 1 }
    }

    /// Sets the number of quarter turns. Taken modulo 4.
    #[must_use]
    pub fn with_turns(mut self, turns: u8) -> Self {
        self.turns = turns % 4;
        self
    }

    /// Executes the rotation, returning the rotated rectangle and region.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the region has vertices
    /// outside the rectangle it is claimed to belong to.
    pub fn execute(&self, region: &Region) -> Result<(RectSize, Region)> {
        if let Some(outside) = region
            .vertices()
            .find(|p| !self.size.contains(p, FIT_TOLERANCE))
        {
            return Err(OperationError::InvalidInput(format!(
                "vertex ({}, {}) lies outside the {} x {} rectangle",
                outside.x,
                outside.y,
                self.size.width(),
                self.size.height()
            ))
            .into());
        }

        let mut size = self.size;
        let mut rotated = region.clone();
        for _ in 0..self.turns {
            // Screen y points down, so a +90° math rotation turns clockwise.
            let iso = Isometry2::new(Vector2::new(size.height(), 0.0), FRAC_PI_2);
            rotated = rotated.map_points(|p| iso.transform_point(p));
            size = RectSize::new(size.height(), size.width())?;
        }
        Ok((size, rotated))
    }
}
