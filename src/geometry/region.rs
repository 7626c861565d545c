use crate::math::polygon_2d::{ring_contains, signed_area};
use crate::math::Point2;

use super::Aabb2;

/// A closed polygon ring. The last point connects back to the first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    points: Vec<Point2>,
}

impl Polygon {
    /// Creates a polygon from its ring of vertices.
    #[must_use]
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    /// Creates a polygon with no vertices.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    #[must_use]
    pub fn into_points(self) -> Vec<Point2> {
        self.points
    }

    /// A polygon with fewer than three vertices encloses nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.len() < 3
    }

    /// Unsigned enclosed area.
    #[must_use]
    pub fn area(&self) -> f64 {
        signed_area(&self.points).abs()
    }

    /// Even-odd containment test.
    #[must_use]
    pub fn contains(&self, p: &Point2) -> bool {
        ring_contains(&self.points, p)
    }
}

/// The visible area of a clipped segment.
///
/// A `Difference` is filled as its outer ring minus its hole. The hole
/// always lies inside the outer ring, so filling both rings with the
/// even-odd rule renders the same area.
#[derive(Debug, Clone, PartialEq)]
pub enum Region {
    /// Nothing is visible.
    Empty,
    /// A single closed ring.
    Polygon(Polygon),
    /// `outer` with `hole` cut out of it.
    Difference { outer: Polygon, hole: Polygon },
}

impl Region {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Region::Empty => true,
            Region::Polygon(poly) => poly.is_empty(),
            Region::Difference { outer, .. } => outer.is_empty(),
        }
    }

    /// Returns the rings in even-odd order: outer first, then the hole.
    #[must_use]
    pub fn rings(&self) -> Vec<&Polygon> {
        match self {
            Region::Empty => Vec::new(),
            Region::Polygon(poly) => vec![poly],
            Region::Difference { outer, hole } => vec![outer, hole],
        }
    }

    /// Iterates over every vertex of every ring.
    pub fn vertices(&self) -> impl Iterator<Item = &Point2> {
        self.rings().into_iter().flat_map(|ring| ring.points().iter())
    }

    /// Enclosed area of the visible region.
    #[must_use]
    pub fn area(&self) -> f64 {
        match self {
            Region::Empty => 0.0,
            Region::Polygon(poly) => poly.area(),
            Region::Difference { outer, hole } => (outer.area() - hole.area()).max(0.0),
        }
    }

    /// Returns `true` if `p` is inside the visible region.
    #[must_use]
    pub fn contains(&self, p: &Point2) -> bool {
        match self {
            Region::Empty => false,
            Region::Polygon(poly) => poly.contains(p),
            Region::Difference { outer, hole } => outer.contains(p) && !hole.contains(p),
        }
    }

    /// Bounding box of all vertices, or `None` for an empty region.
    #[must_use]
    pub fn bounding_box(&self) -> Option<Aabb2> {
        Aabb2::from_points(self.vertices())
    }

    /// Applies `f` to every vertex, keeping the region's shape.
    #[must_use]
    pub fn map_points<F>(&self, f: F) -> Region
    where
        F: Fn(&Point2) -> Point2,
    {
        let map = |poly: &Polygon| Polygon::new(poly.points().iter().map(&f).collect());
        match self {
            Region::Empty => Region::Empty,
            Region::Polygon(poly) => Region::Polygon(map(poly)),
            Region::Difference { outer, hole } => Region::Difference {
                outer: map(outer),
                hole: map(hole),
            },
        }
    }
}
