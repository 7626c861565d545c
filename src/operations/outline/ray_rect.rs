use crate::geometry::RectSize;
use crate::math::angle::{clock_to_radians, normalize_degrees};
use crate::math::Point2;

/// Finds where a ray cast from the rectangle's center at a clock-face angle
/// exits the rectangle.
///
/// The four axis-aligned angles return exact edge midpoints. Any other angle
/// is intersected first against the left/right edges and, if the hit falls
/// outside them, against the top/bottom edges. The result is clamped into
/// the rectangle.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn ray_rect_intersection(size: &RectSize, angle_from_top: f64) -> Point2 {
    let angle = normalize_degrees(angle_from_top);
    let (w, h) = (size.width(), size.height());
    let center = size.center();

    if angle == 0.0 {
        return Point2::new(center.x, 0.0);
    }
    if angle == 90.0 {
        return Point2::new(w, center.y);
    }
    if angle == 180.0 {
        return Point2::new(center.x, h);
    }
    if angle == 270.0 {
        return Point2::new(0.0, center.y);
    }

    let rad = clock_to_radians(angle);
    let tan = rad.tan();

    // Vertical edges at x = ±w/2 from the center.
    let dy = center.x * tan;
    let hit = if dy.abs() <= center.y {
        if rad.cos() > 0.0 {
            Point2::new(w, center.y - dy)
        } else {
            Point2::new(0.0, center.y + dy)
        }
    } else {
        // Horizontal edges at y = ±h/2 from the center.
        let dx = center.y / tan;
        if rad.sin() > 0.0 {
            Point2::new(center.x + dx, 0.0)
        } else {
            Point2::new(center.x - dx, h)
        }
    };
    size.clamp(hit)
}
