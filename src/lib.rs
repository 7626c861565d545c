//! Clip outlines for circular progress indicators.
//!
//! A progress value in `[0, 1]` maps to a sweep angle; the visible part of
//! an image is the pie segment of that sweep, cut by straight rays from the
//! center to the bounding rectangle. [`operations::outline::SegmentOutline`]
//! builds that segment as a [`geometry::Region`] ready for a clip mask.
//!
//! ```
//! use radial_clip::geometry::RectSize;
//! use radial_clip::progress::ProgressIndicator;
//!
//! let size = RectSize::new(100.0, 100.0)?;
//! let region = ProgressIndicator::default().outline(size, 0.25);
//! assert!((region.area() - 2500.0).abs() < 1e-9);
//! # Ok::<(), radial_clip::RadialClipError>(())
//! ```

pub mod error;
pub mod export;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod progress;

pub use error::{RadialClipError, Result};
