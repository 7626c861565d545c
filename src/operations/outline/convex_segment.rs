use tracing::trace;

use crate::geometry::{Polygon, RectSize};
use crate::math::angle::{normalize_degrees, HALF_TURN};
use crate::math::polygon_2d::dedup_ring;

use super::{ray_rect_intersection, OutlineParams};

/// Builds the fan polygon of a segment whose sweep is at most 180 degrees.
///
/// The ring runs center → start boundary point → every rectangle corner
/// passed while walking clockwise → end boundary point, and closes back to
/// the center.
///
/// # Corner Walk
///
/// Starting at the side holding the start point, the corner ending that
/// side is emitted and the walk advances clockwise until it reaches the side
/// holding the end point. When both points share a side nothing is emitted.
/// For a sweep of at most 180° that is always the short way round, because
/// no single side of a non-degenerate rectangle subtends 180° or more from
/// its center.
#[derive(Debug)]
pub struct ConvexSegment {
    size: RectSize,
    start_angle: f64,
    sweep_angle: f64,
    params: OutlineParams,
}

impl ConvexSegment {
    /// Creates a new convex segment operation. Angles are in degrees.
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

    /// Builds the segment polygon.
    ///
    /// Sweeps below `sweep_epsilon` (including negative and NaN sweeps) give
    /// an empty polygon; sweeps above 180° are treated as 180°.
    #[must_use]
    pub fn execute(&self) -> Polygon {
        if self.sweep_angle.is_nan() || self.sweep_angle < self.params.sweep_epsilon {
            trace!(sweep = self.sweep_angle, "sweep below epsilon, empty segment");
            return Polygon::empty();
        }

        let size = &self.size;
        let tol = self.params.side_tolerance;
        let start = normalize_degrees(self.start_angle);
        let sweep = self.sweep_angle.min(HALF_TURN);
        let start_point = ray_rect_intersection(size, start);
        let end_point = ray_rect_intersection(size, start + sweep);
        let start_side = size.side_of(&start_point, tol);
        let end_side = size.side_of(&end_point, tol);

        let mut ring = Vec::with_capacity(7);
        ring.push(size.center());
        ring.push(start_point);

        let mut side = start_side;
        while side != end_side {
            ring.push(size.corner(side.end_corner()));
            side = side.next();
        }

        ring.push(end_point);
        trace!(
            ?start_side,
            ?end_side,
            corners = ring.len() - 3,
            "built convex segment"
        );
        Polygon::new(dedup_ring(&ring))
    }
}
