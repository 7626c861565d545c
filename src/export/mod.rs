//! Hand-off formats for renderers that consume clip paths.

mod path;
mod svg;

pub use path::{to_path_commands, PathCommand};
pub use svg::SvgClipPath;
