#![doc = include_str!("../README.md")]

mod coord;
mod error;
pub mod geom;
pub mod kdtree;
pub mod naive;
mod util;

pub use coord::CoordNum;
pub use error::PointIndexError;
pub use geom::{Axis, Point, Rect};
pub use kdtree::PointSet;
