use tracing::{debug, trace};

use crate::geometry::{Polygon, RectSize, Region};
use crate::math::angle::{clamp_sweep, normalize_degrees, FULL_TURN, HALF_TURN};

use super::{ConvexSegment, OutlineParams};

/// Builds the clip region of a pie segment clipped to a rectangle.
///
/// The segment starts at `start_angle` (degrees clockwise from 12 o'clock)
/// and sweeps clockwise by `sweep_angle` degrees.
///
/// # Algorithm
///
/// 1. The start is reduced to `[0, 360)` and the sweep clamped to
///    `[0, 360]`; non-finite starts and NaN sweeps count as `0`.
/// 2. Sweeps up to 180° are built directly by [`ConvexSegment`].
/// 3. Larger sweeps are built as the full rectangle minus the convex
///    complement that starts where the segment ends and sweeps the
///    remaining `360 - sweep` degrees.
///
/// The operation is total: every input yields a region whose vertices lie
/// inside `[0, width] × [0, height]`.
#[derive(Debug)]
pub struct SegmentOutline {
    size: RectSize,
    start_angle: f64,
    sweep_angle: f64,
    params: OutlineParams,
}

impl SegmentOutline {
    /// Creates a new outline operation. Angles are in degrees.
    #[must_use]
    pub fn new(size: RectSize, start_angle: f64, sweep_angle: f64) -> Self {
        Self {
            size,
            start_angle,
            sweep_angle,
            params: OutlineParams::default(),
        }
    }

    /// Sets custom tolerances.
    #[must_use]
    pub fn with_params(mut self, params: OutlineParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the operation, returning the visible region.
    #[must_use]
    pub fn execute(&self) -> Region {
        if !self.start_angle.is_finite() {
            debug!(start = self.start_angle, "non-finite start angle, using 0");
        }
        // Reduce before adding the sweep; large starts would swallow it.
        let start = normalize_degrees(self.start_angle);
        let sweep = clamp_sweep(self.sweep_angle);
        if sweep.to_bits() != self.sweep_angle.to_bits() {
            debug!(requested = self.sweep_angle, sweep, "sweep clamped");
        }

        if sweep <= HALF_TURN {
            trace!(start, sweep, "convex segment");
            let poly = self.convex(start, sweep);
            return if poly.is_empty() {
                Region::Empty
            } else {
                Region::Polygon(poly)
            };
        }

        trace!(start, sweep, "reflex segment via complement");
        let outer = Polygon::new(self.size.ring());
        let hole = self.convex(start + sweep, FULL_TURN - sweep);
        if hole.is_empty() {
            Region::Polygon(outer)
        } else {
            Region::Difference { outer, hole }
        }
    }

    fn convex(&self, start: f64, sweep: f64) -> Polygon {
        ConvexSegment::new(self.size, start, sweep)
            .with_params(self.params)
            .execute()
    }
}
