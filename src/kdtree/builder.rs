use crate::coord::CoordNum;
use crate::geom::{Axis, Point, Rect};
use crate::kdtree::index::{Node, Tree};

/// Build a balanced tree over `points`. The input order does not matter.
///
/// Each level selects its median along the level's axis with a linear-time partial
/// sort, so the build is the classic recursive-median construction: O(n log n)
/// overall and a guaranteed O(log n) depth regardless of insertion history.
pub(crate) fn build<N: CoordNum>(mut points: Vec<Point<N>>) -> Tree<N> {
    let mut nodes = Vec::with_capacity(points.len());
    // The root slab spans the whole plane.
    let everything = Rect::new(
        Point::new(N::min_value(), N::min_value()),
        Point::new(N::max_value(), N::max_value()),
    );
    build_subtree(&mut nodes, &mut points, everything, 0);
    Tree { nodes }
}

/// Recursively build the subtree holding `points`, confined to the slab `rect` at
/// tree depth `depth`. Returns the arena slot of the subtree root.
///
/// The node is pushed before either subtree, which keeps the arena in preorder.
fn build_subtree<N: CoordNum>(
    nodes: &mut Vec<Node<N>>,
    points: &mut [Point<N>],
    rect: Rect<N>,
    depth: usize,
) -> Option<usize> {
    if points.is_empty() {
        return None;
    }
    let axis = Axis::at_depth(depth);
    let slot = nodes.len();
    if let [point] = points {
        nodes.push(Node {
            point: *point,
            rect,
            axis,
            left: None,
            right: None,
        });
        return Some(slot);
    }

    // Median selection along this level's axis. The comparator carries the
    // other-coordinate tie-break, so the partition ranks points exactly like the
    // membership descent will and equal coordinates cannot strand a point on the
    // unvisited side.
    let middle = points.len() / 2;
    points.select_nth_unstable_by(middle, |a, b| axis.cmp_points(a, b));
    let pivot = points[middle];
    let split = pivot.coord(axis);

    nodes.push(Node {
        point: pivot,
        rect,
        axis,
        left: None,
        right: None,
    });
    let left = build_subtree(
        nodes,
        &mut points[..middle],
        rect.with_max(axis, split),
        depth + 1,
    );
    let right = build_subtree(
        nodes,
        &mut points[middle + 1..],
        rect.with_min(axis, split),
        depth + 1,
    );
    let node = &mut nodes[slot];
    node.left = left;
    node.right = right;
    Some(slot)
}
