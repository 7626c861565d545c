use crate::error::{check_range, Result};
use crate::math::Point2;

/// Width and height of the clipped rectangle.
///
/// The rectangle spans `[0, width] × [0, height]` with the origin at the
/// top-left corner and y growing downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectSize {
    width: f64,
    height: f64,
}

impl RectSize {
    /// Creates a new rectangle size.
    ///
    /// Zero dimensions are accepted; the outlines built for them are
    /// degenerate but never panic.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is negative or non-finite.
    pub fn new(width: f64, height: f64) -> Result<Self> {
        let width = check_range("width", width, 0.0, f64::MAX)?;
        let height = check_range("height", height, 0.0, f64::MAX)?;
        Ok(Self { width, height })
    }

    /// Creates a square of side `side`.
    ///
    /// # Errors
    ///
    /// Returns an error if `side` is negative or non-finite.
    pub fn square(side: f64) -> Result<Self> {
        Self::new(side, side)
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Returns the center of the rectangle.
    #[must_use]
    pub fn center(&self) -> Point2 {
        Point2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Returns the coordinate of a corner.
    #[must_use]
    pub fn corner(&self, corner: Corner) -> Point2 {
        match corner {
            Corner::TopRight => Point2::new(self.width, 0.0),
            Corner::BottomRight => Point2::new(self.width, self.height),
            Corner::BottomLeft => Point2::new(0.0, self.height),
            Corner::TopLeft => Point2::new(0.0, 0.0),
        }
    }

    /// Returns the four corners clockwise, starting at the top-left.
    #[must_use]
    pub fn ring(&self) -> Vec<Point2> {
        vec![
            self.corner(Corner::TopLeft),
            self.corner(Corner::TopRight),
            self.corner(Corner::BottomRight),
            self.corner(Corner::BottomLeft),
        ]
    }

    /// Returns `true` if `p` lies within the rectangle, boundary included,
    /// allowing `tolerance` of slack.
    #[must_use]
    pub fn contains(&self, p: &Point2, tolerance: f64) -> bool {
        p.x >= -tolerance
            && p.x <= self.width + tolerance
            && p.y >= -tolerance
            && p.y <= self.height + tolerance
    }

    /// Clamps a point into the rectangle.
    #[must_use]
    pub fn clamp(&self, p: Point2) -> Point2 {
        Point2::new(p.x.clamp(0.0, self.width), p.y.clamp(0.0, self.height))
    }

    /// Classifies a boundary point by the side it lies on.
    ///
    /// Checks run top, right, bottom, then fall back to left, so a corner is
    /// attributed to the side that ends at it when walking clockwise, except
    /// the top-left corner, which is attributed to the top.
    #[must_use]
    pub fn side_of(&self, p: &Point2, tolerance: f64) -> Side {
        if p.y.abs() < tolerance {
            Side::Top
        } else if (p.x - self.width).abs() < tolerance {
            Side::Right
        } else if (p.y - self.height).abs() < tolerance {
            Side::Bottom
        } else {
            Side::Left
        }
    }
}

/// The four rectangle corners, indexed clockwise from the top-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopRight = 0,
    BottomRight = 1,
    BottomLeft = 2,
    TopLeft = 3,
}

/// The four rectangle sides, indexed clockwise from the top.
///
/// Walking clockwise, side `i` ends at corner `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Top = 0,
    Right = 1,
    Bottom = 2,
    Left = 3,
}

impl Side {
    /// The corner where this side ends when walking clockwise.
    #[must_use]
    pub fn end_corner(self) -> Corner {
        match self {
            Side::Top => Corner::TopRight,
            Side::Right => Corner::BottomRight,
            Side::Bottom => Corner::BottomLeft,
            Side::Left => Corner::TopLeft,
        }
    }

    /// The next side clockwise.
    #[must_use]
    pub fn next(self) -> Side {
        match self {
            Side::Top => Side::Right,
            Side::Right => Side::Bottom,
            Side::Bottom => Side::Left,
            Side::Left => Side::Top,
        }
    }
}

/// A 2D axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb2 {
    /// Minimum corner of the bounding box.
    pub min: Point2,
    /// Maximum corner of the bounding box.
    pub max: Point2,
}

impl Aabb2 {
    /// Computes the bounding box of a set of points, or `None` if empty.
    #[must_use]
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point2>,
    {
        let mut iter = points.into_iter();
        let first = *iter.next()?;
        let mut bb = Self {
            min: first,
            max: first,
        };
        for p in iter {
            bb.min.x = bb.min.x.min(p.x);
            bb.min.y = bb.min.y.min(p.y);
            bb.max.x = bb.max.x.max(p.x);
            bb.max.y = bb.max.y.max(p.y);
        }
        Some(bb)
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_negative_and_nan() {
        assert!(RectSize::new(-1.0, 10.0).is_err());
        assert!(RectSize::new(10.0, f64::NAN).is_err());
        assert!(RectSize::new(10.0, f64::INFINITY).is_err());
        assert!(RectSize::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn center_and_corners() {
        let size = RectSize::new(200.0, 100.0).unwrap();
        assert_eq!(size.center(), Point2::new(100.0, 50.0));
        assert_eq!(size.corner(Corner::TopRight), Point2::new(200.0, 0.0));
        assert_eq!(size.corner(Corner::BottomLeft), Point2::new(0.0, 100.0));
        assert!((size.area() - 20_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn side_of_midpoints() {
        let size = RectSize::new(200.0, 100.0).unwrap();
        let tol = 1e-3;
        assert_eq!(size.side_of(&Point2::new(100.0, 0.0), tol), Side::Top);
        assert_eq!(size.side_of(&Point2::new(200.0, 50.0), tol), Side::Right);
        assert_eq!(size.side_of(&Point2::new(100.0, 100.0), tol), Side::Bottom);
        assert_eq!(size.side_of(&Point2::new(0.0, 50.0), tol), Side::Left);
    }

    #[test]
    fn side_of_corners_follow_check_order() {
        let size = RectSize::square(100.0).unwrap();
        let tol = 1e-3;
        assert_eq!(size.side_of(&size.corner(Corner::TopLeft), tol), Side::Top);
        assert_eq!(size.side_of(&size.corner(Corner::TopRight), tol), Side::Top);
        assert_eq!(size.side_of(&size.corner(Corner::BottomRight), tol), Side::Right);
        assert_eq!(size.side_of(&size.corner(Corner::BottomLeft), tol), Side::Bottom);
    }

    #[test]
    fn side_walk_is_clockwise() {
        let mut side = Side::Top;
        let mut corners = Vec::new();
        for _ in 0..4 {
            corners.push(side.end_corner() as usize);
            side = side.next();
        }
        assert_eq!(corners, vec![0, 1, 2, 3]);
        assert_eq!(side, Side::Top);
    }

    #[test]
    fn clamp_and_contains() {
        let size = RectSize::new(10.0, 5.0).unwrap();
        assert_eq!(size.clamp(Point2::new(11.0, -1.0)), Point2::new(10.0, 0.0));
        assert!(size.contains(&Point2::new(10.0, 5.0), 0.0));
        assert!(!size.contains(&Point2::new(10.1, 5.0), 0.0));
    }

    #[test]
    fn aabb_from_points() {
        let pts = [Point2::new(1.0, 4.0), Point2::new(-2.0, 3.0), Point2::new(0.5, 7.0)];
        let bb = Aabb2::from_points(&pts).unwrap();
        assert_eq!(bb.min, Point2::new(-2.0, 3.0));
        assert_eq!(bb.max, Point2::new(1.0, 7.0));
        assert!((bb.width() - 3.0).abs() < f64::EPSILON);
        assert!(Aabb2::from_points(&Vec::<Point2>::new()).is_none());
    }
}
