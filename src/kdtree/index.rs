use crate::coord::CoordNum;
use crate::geom::{Axis, Point, Rect};

/// A node of a built tree.
///
/// Children are arena slots rather than owned boxes. Every rebuild produces a whole
/// fresh arena, so subtrees are never shared or spliced and an index is all a link
/// needs to be.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Node<N: CoordNum> {
    /// The pivot stored at this node.
    pub(crate) point: Point<N>,
    /// The slab of the plane this subtree is confined to.
    pub(crate) rect: Rect<N>,
    /// The axis this node's level partitions on.
    pub(crate) axis: Axis,
    pub(crate) left: Option<usize>,
    pub(crate) right: Option<usize>,
}

/// A balanced tree over one snapshot of the stored points.
///
/// Nodes live in the arena in preorder: the builder pushes a node before either of
/// its subtrees, so slot 0 is the root and walking the arena front to back is the
/// preorder listing the set iterates in.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Tree<N: CoordNum> {
    pub(crate) nodes: Vec<Node<N>>,
}

impl<N: CoordNum> Tree<N> {
    /// The number of points held.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The arena slot of the root, unless the tree is empty.
    #[inline]
    pub(crate) fn root(&self) -> Option<usize> {
        if self.nodes.is_empty() {
            None
        } else {
            Some(0)
        }
    }

    /// All points in preorder.
    pub(crate) fn points(&self) -> impl Iterator<Item = Point<N>> + '_ {
        self.nodes.iter().map(|node| node.point)
    }
}
