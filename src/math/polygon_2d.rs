use super::{Point2, TOLERANCE};

/// Computes the signed area of a closed ring (shoelace formula).
///
/// In screen coordinates (y down) a clockwise ring yields a positive value.
#[must_use]
pub fn signed_area(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Even-odd point-in-ring test (crossing number).
///
/// Points exactly on the boundary may land on either side.
#[must_use]
pub fn ring_contains(points: &[Point2], p: &Point2) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let a = &points[i];
        let b = &points[j];
        if (a.y > p.y) != (b.y > p.y) {
            let x_cross = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Removes consecutive duplicate vertices (including the wrap-around pair).
#[must_use]
pub fn dedup_ring(points: &[Point2]) -> Vec<Point2> {
    let mut out: Vec<Point2> = Vec::with_capacity(points.len());
    for &pt in points {
        if out.last().is_some_and(|last| (pt - *last).norm() < TOLERANCE) {
            continue;
        }
        out.push(pt);
    }
    while out.len() > 1
        && out
            .first()
            .zip(out.last())
            .is_some_and(|(f, l)| (*f - *l).norm() < TOLERANCE)
    {
        out.pop();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn square() -> Vec<Point2> {
        vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)]
    }

    #[test]
    fn signed_area_clockwise_on_screen_is_positive() {
        assert!((signed_area(&square()) - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_reversed_is_negative() {
        let mut pts = square();
        pts.reverse();
        assert!((signed_area(&pts) + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_degenerate() {
        assert!(signed_area(&[p(0.0, 0.0)]).abs() < TOLERANCE);
        assert!(signed_area(&[]).abs() < TOLERANCE);
    }

    #[test]
    fn contains_inside_and_outside() {
        let sq = square();
        assert!(ring_contains(&sq, &p(0.5, 0.5)));
        assert!(!ring_contains(&sq, &p(1.5, 0.5)));
        assert!(!ring_contains(&sq, &p(0.5, -0.1)));
        assert!(!ring_contains(&[p(0.0, 0.0), p(1.0, 1.0)], &p(0.5, 0.5)));
    }

    #[test]
    fn dedup_drops_repeats_and_closing_point() {
        let pts = vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 0.0)];
        let out = dedup_ring(&pts);
        assert_eq!(out, vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0)]);
    }
}
