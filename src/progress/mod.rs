//! Progress-driven clip shapes.
//!
//! A UI layer owns a [`ProgressState`], maps its value through a
//! [`ProgressIndicator`] into a [`ProgressShape`], and asks the shape for the
//! outline of whatever rectangle it is laid out in. Animation is left to the
//! caller: it simply calls [`ProgressState::set`] on every tick.

mod shape;
mod state;

pub use shape::{ProgressIndicator, ProgressShape};
pub use state::ProgressState;
