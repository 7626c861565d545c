use crate::error::{check_range, Result};
use crate::geometry::{RectSize, Region};
use crate::math::angle::{clamp_progress, FULL_TURN};
use crate::operations::outline::{OutlineParams, SegmentOutline};

/// A clip shape covering the segment swept clockwise from `start_angle`.
///
/// Holds angles only; the rectangle is supplied when the outline is built,
/// so one shape serves any layout size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressShape {
    start_angle: f64,
    sweep_angle: f64,
}

impl ProgressShape {
    /// Creates a shape from explicit angles in degrees.
    #[must_use]
    pub fn new(start_angle: f64, sweep_angle: f64) -> Self {
        Self {
            start_angle,
            sweep_angle,
        }
    }

    /// Creates a shape whose sweep is `max_sweep * clamp(progress, 0, 1)`.
    #[must_use]
    pub fn from_progress(start_angle: f64, max_sweep: f64, progress: f64) -> Self {
        Self::new(start_angle, max_sweep * clamp_progress(progress))
    }

    #[must_use]
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    #[must_use]
    pub fn sweep_angle(&self) -> f64 {
        self.sweep_angle
    }

    /// Builds the clip region for a rectangle of the given size.
    #[must_use]
    pub fn outline(&self, size: RectSize) -> Region {
        self.outline_with(size, OutlineParams::default())
    }

    /// Builds the clip region with custom tolerances.
    #[must_use]
    pub fn outline_with(&self, size: RectSize, params: OutlineParams) -> Region {
        SegmentOutline::new(size, self.start_angle, self.sweep_angle)
            .with_params(params)
            .execute()
    }
}

/// Static configuration of a circular progress indicator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressIndicator {
    start_angle: f64,
    max_sweep: f64,
}

impl Default for ProgressIndicator {
    /// Starts at 12 o'clock and fills the full circle.
    fn default() -> Self {
        Self {
            start_angle: 0.0,
            max_sweep: FULL_TURN,
        }
    }
}

impl ProgressIndicator {
    /// Creates an indicator configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `start_angle` is non-finite or `max_sweep` is
    /// outside `[0, 360]`.
    pub fn new(start_angle: f64, max_sweep: f64) -> Result<Self> {
        Ok(Self {
            start_angle: check_range("start_angle", start_angle, f64::MIN, f64::MAX)?,
            max_sweep: check_range("max_sweep", max_sweep, 0.0, FULL_TURN)?,
        })
    }

    #[must_use]
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    #[must_use]
    pub fn max_sweep(&self) -> f64 {
        self.max_sweep
    }

    /// Sweep angle drawn for `progress`, clamped to `[0, max_sweep]`.
    #[must_use]
    pub fn sweep_for(&self, progress: f64) -> f64 {
        self.max_sweep * clamp_progress(progress)
    }

    #[must_use]
    pub fn shape(&self, progress: f64) -> ProgressShape {
        ProgressShape::from_progress(self.start_angle, self.max_sweep, progress)
    }

    /// Builds the clip region for `progress` in a rectangle of `size`.
    #[must_use]
    pub fn outline(&self, size: RectSize, progress: f64) -> Region {
        self.shape(progress).outline(size)
    }
}
