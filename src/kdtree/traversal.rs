//! Query traversals over a built tree.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tinyvec::TinyVec;

use crate::coord::CoordNum;
use crate::geom::{Point, Rect};
use crate::kdtree::index::Tree;

impl<N: CoordNum> Tree<N> {
    /// Whether `p` is stored in the tree: one root-to-leaf descent.
    ///
    /// The descent ranks `p` against each pivot with the pivot's axis comparator,
    /// the same order the build partitioned with, going left when the pivot ranks
    /// greater and right otherwise.
    pub(crate) fn contains(&self, p: &Point<N>) -> bool {
        let mut current = self.root();
        while let Some(slot) = current {
            let node = &self.nodes[slot];
            if node.point == *p {
                return true;
            }
            // Equal is impossible here, it would have matched above.
            current = match node.axis.cmp_points(&node.point, p) {
                Ordering::Greater => node.left,
                _ => node.right,
            };
        }
        false
    }

    /// All points inside `query`, in traversal order.
    pub(crate) fn range(&self, query: &Rect<N>) -> Vec<Point<N>> {
        let mut results = vec![];

        // Use TinyVec to avoid heap allocations. The stack peaks at one entry per
        // level, and 33 levels cover any balanced tree of u32-many points.
        let mut stack: TinyVec<[usize; 33]> = TinyVec::new();
        if let Some(root) = self.root() {
            stack.push(root);
        }

        while let Some(slot) = stack.pop() {
            let node = &self.nodes[slot];
            if !query.intersects(&node.rect) {
                continue;
            }
            if query.contains(&node.point) {
                results.push(node.point);
            }

            // Descend into the halves the query straddles: both when the split
            // coordinate falls inside the query's extent on this axis, one when the
            // query lies entirely at or beyond the split.
            let split = node.point.coord(node.axis);
            let min = query.min_coord(node.axis);
            let max = query.max_coord(node.axis);
            if min <= split && split <= max {
                stack.extend(node.left);
                stack.extend(node.right);
            } else if max <= split {
                stack.extend(node.left);
            } else {
                // min >= split holds here.
                stack.extend(node.right);
            }
        }

        results
    }

    /// The k points closest to `query`, sorted by ascending distance.
    ///
    /// Callers guarantee `0 < k < self.len()`; the boundary cases short-circuit in
    /// [`PointSet::neighbors`][crate::kdtree::PointSet::neighbors] without touching
    /// the tree.
    pub(crate) fn nearest(&self, query: &Point<N>, k: usize) -> Vec<Point<N>> {
        let mut heap: BinaryHeap<Candidate<N>> = BinaryHeap::with_capacity(k + 1);
        self.nearest_into(self.root(), query, k, &mut heap);
        heap.into_sorted_vec()
            .into_iter()
            .map(|candidate| self.nodes[candidate.slot].point)
            .collect()
    }

    fn nearest_into(
        &self,
        subtree: Option<usize>,
        query: &Point<N>,
        k: usize,
        heap: &mut BinaryHeap<Candidate<N>>,
    ) {
        let Some(slot) = subtree else {
            return;
        };
        let node = &self.nodes[slot];

        // Once k candidates are held, a slab farther away than the worst of them
        // cannot contribute. A short heap never prunes.
        if heap.len() == k
            && heap
                .peek()
                .is_some_and(|worst| node.rect.distance(query) > worst.dist)
        {
            return;
        }

        let dist = query.distance(&node.point);
        if heap.len() < k || heap.peek().is_some_and(|worst| dist < worst.dist) {
            heap.push(Candidate { dist, slot });
            if heap.len() > k {
                heap.pop();
            }
        }

        // Nearer half first, so the bound tightens before the far half is judged.
        // The far half only matters if the splitting line itself is no farther than
        // the current worst candidate.
        let coord = query.coord(node.axis);
        let split = node.point.coord(node.axis);
        let (near, far) = if coord < split {
            (node.left, node.right)
        } else {
            (node.right, node.left)
        };
        self.nearest_into(near, query, k, heap);
        if heap
            .peek()
            .is_some_and(|worst| (coord - split).abs() <= worst.dist)
        {
            self.nearest_into(far, query, k, heap);
        }
    }
}

/// A wrapper around an arena slot and its distance for use in the candidate heap.
///
/// The heap is a max-heap over the distance, so the worst of the best k found so
/// far sits on top, ready to be evicted by anything closer.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Candidate<N: CoordNum> {
    dist: N,
    slot: usize,
}

impl<N: CoordNum> Eq for Candidate<N> {}

impl<N: CoordNum> Ord for Candidate<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        // We don't allow NaN. This should only panic on NaN
        self.dist.partial_cmp(&other.dist).unwrap()
    }
}

impl<N: CoordNum> PartialOrd for Candidate<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
