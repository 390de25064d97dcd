use std::fmt::Debug;

use num_traits::Float;

/// A trait for scalar types that can be used as point coordinates.
///
/// This trait is sealed and cannot be implemented for external types. Every public
/// operation assumes real floating-point arithmetic: Euclidean distances take a
/// square root and the root slab of the tree spans the finite coordinate range,
/// which narrows the choice to `f64` and `f32`.
///
/// NaN coordinates are outside the contract; ordering-sensitive operations may
/// panic when handed one.
pub trait CoordNum: private::Sealed + Float + Debug + Send + Sync {}

impl CoordNum for f32 {}
impl CoordNum for f64 {}

// https://rust-lang.github.io/api-guidelines/future-proofing.html#sealed-traits-protect-against-downstream-implementations-c-sealed
mod private {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
}
