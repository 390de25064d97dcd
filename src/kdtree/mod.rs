//! A mutable planar point set backed by a lazily rebuilt, balanced k-d tree.

#![warn(missing_docs)]

mod builder;
mod index;
mod set;
mod traversal;

pub use set::{Iter, PointSet};
