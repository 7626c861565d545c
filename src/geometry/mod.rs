mod rect;
mod region;

pub use rect::{Aabb2, Corner, RectSize, Side};
pub use region::{Polygon, Region};
