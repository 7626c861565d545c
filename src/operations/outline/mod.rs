mod convex_segment;
mod params;
mod ray_rect;
mod segment_outline;

pub use convex_segment::ConvexSegment;
pub use params::OutlineParams;
pub use ray_rect::ray_rect_intersection;
pub use segment_outline::SegmentOutline;
