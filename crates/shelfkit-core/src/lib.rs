//! # ShelfKit Core
//!
//! Geometry primitives and error types shared by the ShelfKit crates.

pub mod error;
pub mod geometry;

pub use error::{ParameterError, ParameterResult};
pub use geometry::{clamp, Point, Rect};
