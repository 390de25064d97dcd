//! Planar primitives shared by the tree-backed and brute-force point sets.

use std::cmp::Ordering;
use std::fmt;

use crate::coord::CoordNum;

/// One of the two partitioning directions of the plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Split on the x coordinate.
    X,
    /// Split on the y coordinate.
    Y,
}

impl Axis {
    /// The axis a tree level at `depth` partitions on: x on even depths, y on odd.
    #[inline]
    pub(crate) fn at_depth(depth: usize) -> Self {
        if depth % 2 == 0 {
            Axis::X
        } else {
            Axis::Y
        }
    }

    /// The other axis.
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }

    /// Axis-specific point order: the coordinate on this axis first, ties broken by
    /// the other coordinate.
    ///
    /// The build partition and the membership descent must rank points identically,
    /// including the tie-break, or a point stored among equal coordinates can end up
    /// on the side the descent never visits. Both call this one comparator.
    #[inline]
    pub(crate) fn cmp_points<N: CoordNum>(self, a: &Point<N>, b: &Point<N>) -> Ordering {
        // We don't allow NaN. This should only panic on NaN
        a.coord(self)
            .partial_cmp(&b.coord(self))
            .unwrap()
            .then_with(|| {
                let other = self.other();
                a.coord(other).partial_cmp(&b.coord(other)).unwrap()
            })
    }
}

/// An immutable point in the plane.
///
/// The `Ord` impl is the storage order used for deduplication: primarily by y,
/// ties broken by x. Tree descent ranks points per axis instead (see
/// [`Point::coord`]); the two orders are deliberately distinct.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<N: CoordNum> {
    x: N,
    y: N,
}

impl<N: CoordNum> Point<N> {
    /// Create a point from its coordinates.
    pub fn new(x: N, y: N) -> Self {
        Self { x, y }
    }

    /// The x coordinate.
    #[inline]
    pub fn x(&self) -> N {
        self.x
    }

    /// The y coordinate.
    #[inline]
    pub fn y(&self) -> N {
        self.y
    }

    /// The coordinate on the given axis.
    #[inline]
    pub fn coord(&self, axis: Axis) -> N {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, that: &Point<N>) -> N {
        let dx = self.x - that.x;
        let dy = self.y - that.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl<N: CoordNum> Eq for Point<N> {}

impl<N: CoordNum> Ord for Point<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        // We don't allow NaN. This should only panic on NaN
        self.y
            .partial_cmp(&other.y)
            .unwrap()
            .then_with(|| self.x.partial_cmp(&other.x).unwrap())
    }
}

impl<N: CoordNum> PartialOrd for Point<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N: CoordNum> fmt::Display for Point<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.x, self.y)
    }
}

/// An immutable axis-aligned rectangle, defined by its lower-left and upper-right
/// corners. All bounds are inclusive: points on an edge or corner are inside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect<N: CoordNum> {
    lower_left: Point<N>,
    upper_right: Point<N>,
}

impl<N: CoordNum> Rect<N> {
    /// Create a rect from its lower-left and upper-right corners.
    pub fn new(lower_left: Point<N>, upper_right: Point<N>) -> Self {
        Self {
            lower_left,
            upper_right,
        }
    }

    /// The smallest x coordinate inside the rect.
    #[inline]
    pub fn min_x(&self) -> N {
        self.lower_left.x
    }

    /// The smallest y coordinate inside the rect.
    #[inline]
    pub fn min_y(&self) -> N {
        self.lower_left.y
    }

    /// The largest x coordinate inside the rect.
    #[inline]
    pub fn max_x(&self) -> N {
        self.upper_right.x
    }

    /// The largest y coordinate inside the rect.
    #[inline]
    pub fn max_y(&self) -> N {
        self.upper_right.y
    }

    /// The lower bound on the given axis.
    #[inline]
    pub(crate) fn min_coord(&self, axis: Axis) -> N {
        self.lower_left.coord(axis)
    }

    /// The upper bound on the given axis.
    #[inline]
    pub(crate) fn max_coord(&self, axis: Axis) -> N {
        self.upper_right.coord(axis)
    }

    /// This rect with its upper bound on `axis` lowered to `value`.
    pub(crate) fn with_max(&self, axis: Axis, value: N) -> Self {
        match axis {
            Axis::X => Self::new(self.lower_left, Point::new(value, self.upper_right.y)),
            Axis::Y => Self::new(self.lower_left, Point::new(self.upper_right.x, value)),
        }
    }

    /// This rect with its lower bound on `axis` raised to `value`.
    pub(crate) fn with_min(&self, axis: Axis, value: N) -> Self {
        match axis {
            Axis::X => Self::new(Point::new(value, self.lower_left.y), self.upper_right),
            Axis::Y => Self::new(Point::new(self.lower_left.x, value), self.upper_right),
        }
    }

    /// Whether the point lies inside the rect.
    pub fn contains(&self, p: &Point<N>) -> bool {
        p.x >= self.min_x() && p.x <= self.max_x() && p.y >= self.min_y() && p.y <= self.max_y()
    }

    /// Whether the two rects overlap. Shared edges and corners count as overlap.
    pub fn intersects(&self, that: &Rect<N>) -> bool {
        self.max_x() >= that.min_x()
            && self.max_y() >= that.min_y()
            && that.max_x() >= self.min_x()
            && that.max_y() >= self.min_y()
    }

    /// Minimum Euclidean distance from `p` to the rect: zero when `p` lies inside,
    /// otherwise the distance to the nearest edge or corner.
    ///
    /// Nothing inside the rect can be closer to `p` than this, which is what lets
    /// nearest-neighbor search discard whole subtrees by their slab.
    pub fn distance(&self, p: &Point<N>) -> N {
        let dx = axis_dist(p.x, self.min_x(), self.max_x());
        let dy = axis_dist(p.y, self.min_y(), self.max_y());
        (dx * dx + dy * dy).sqrt()
    }
}

impl<N: CoordNum> fmt::Display for Rect<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lower_left, self.upper_right)
    }
}

/// 1D distance from a value to a range.
#[inline]
fn axis_dist<N: CoordNum>(k: N, min: N, max: N) -> N {
    if k < min {
        min - k
    } else if k <= max {
        N::zero()
    } else {
        k - max
    }
}
