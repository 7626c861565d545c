//! Angle helpers for the clock-face convention used throughout the crate.
//!
//! Angles are in degrees, measured clockwise from 12 o'clock:
//! - `0°`: straight up
//! - `90°`: right
//! - `180°`: down
//! - `270°`: left

use super::Vector2;

/// A full turn in degrees.
pub const FULL_TURN: f64 = 360.0;

/// Half a turn in degrees.
pub const HALF_TURN: f64 = 180.0;

/// Normalizes an angle to `[0, 360)`.
///
/// Non-finite angles normalize to `0`.
#[must_use]
pub fn normalize_degrees(angle: f64) -> f64 {
    if !angle.is_finite() {
        return 0.0;
    }
    let r = angle.rem_euclid(FULL_TURN);
    // rem_euclid may round tiny negative inputs up to exactly 360.
    if r >= FULL_TURN {
        0.0
    } else {
        r
    }
}

/// Clamps a sweep angle to `[0, 360]`. NaN becomes `0`.
#[must_use]
pub fn clamp_sweep(sweep: f64) -> f64 {
    if sweep.is_nan() {
        return 0.0;
    }
    sweep.clamp(0.0, FULL_TURN)
}

/// Clamps a progress fraction to `[0, 1]`. NaN becomes `0`.
#[must_use]
pub fn clamp_progress(progress: f64) -> f64 {
    if progress.is_nan() {
        return 0.0;
    }
    progress.clamp(0.0, 1.0)
}

/// Converts a clock-face angle to a standard math angle in radians
/// (counter-clockwise from +x, with +y pointing up).
#[must_use]
pub fn clock_to_radians(angle: f64) -> f64 {
    (90.0 - angle).to_radians()
}

/// Unit direction of a clock-face angle in screen coordinates (y down).
#[must_use]
pub fn clock_direction(angle: f64) -> Vector2 {
    let rad = angle.to_radians();
    Vector2::new(rad.sin(), -rad.cos())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn normalize_wraps_both_ways() {
        assert_abs_diff_eq!(normalize_degrees(370.0), 10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(normalize_degrees(-90.0), 270.0, epsilon = 1e-12);
        assert_abs_diff_eq!(normalize_degrees(720.0), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn normalize_never_returns_full_turn() {
        let r = normalize_degrees(-1e-20);
        assert!((0.0..FULL_TURN).contains(&r), "got {r}");
    }

    #[test]
    fn normalize_non_finite_is_zero() {
        assert_eq!(normalize_degrees(f64::NAN), 0.0);
        assert_eq!(normalize_degrees(f64::INFINITY), 0.0);
    }

    #[test]
    fn sweep_and_progress_clamp() {
        assert_eq!(clamp_sweep(-5.0), 0.0);
        assert_eq!(clamp_sweep(400.0), 360.0);
        assert_eq!(clamp_sweep(f64::NAN), 0.0);
        assert_eq!(clamp_progress(1.5), 1.0);
        assert_eq!(clamp_progress(f64::NAN), 0.0);
    }

    #[test]
    fn clock_direction_points_clockwise_from_top() {
        let up = clock_direction(0.0);
        assert_abs_diff_eq!(up.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(up.y, -1.0, epsilon = 1e-12);
        let right = clock_direction(90.0);
        assert_abs_diff_eq!(right.x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(right.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn clock_to_radians_matches_standard_orientation() {
        assert_abs_diff_eq!(clock_to_radians(0.0), std::f64::consts::FRAC_PI_2, epsilon = 1e-12);
        assert_abs_diff_eq!(clock_to_radians(90.0), 0.0, epsilon = 1e-12);
    }
}
