use std::cell::{Ref, RefCell};
use std::collections::BTreeSet;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::iter::FusedIterator;
use std::path::Path;

use geo_traits::{CoordTrait, RectTrait};

use crate::coord::CoordNum;
use crate::error::Result;
use crate::geom::{Point, Rect};
use crate::kdtree::builder;
use crate::kdtree::index::Tree;
use crate::util::read_points;

/// A deduplicated set of planar points with tree-accelerated queries.
///
/// Inserts are cheap: [`put`][PointSet::put] only updates the dedup collection and
/// marks the cached tree stale. The next read rebuilds the tree once for the whole
/// batch of pending inserts, so every query answers against a balanced tree that
/// reflects all points stored so far, and a rebuild is never paid twice without a
/// mutation in between.
///
/// The tree cache lives in a [`RefCell`], which makes the type `!Sync`. The set is
/// single-threaded; callers that share one across threads must add their own
/// exclusion.
///
/// # Example
///
/// ```
/// use point_index::{Point, PointSet, Rect};
///
/// let mut set = PointSet::new();
/// set.put(Point::new(2.0, 3.0));
/// set.put(Point::new(5.0, 4.0));
/// set.put(Point::new(9.0, 6.0));
///
/// let rect = Rect::new(Point::new(0.0, 0.0), Point::new(6.0, 6.0));
/// assert_eq!(set.range(&rect).len(), 2);
/// assert_eq!(set.nearest(&Point::new(3.0, 3.0)), Some(Point::new(2.0, 3.0)));
/// ```
#[derive(Debug, Clone)]
pub struct PointSet<N: CoordNum> {
    points: BTreeSet<Point<N>>,
    /// `None` marks the tree stale; every read path goes through [`Self::tree`].
    cache: RefCell<Option<Tree<N>>>,
}

impl<N: CoordNum> PointSet<N> {
    /// Create an empty point set.
    pub fn new() -> Self {
        Self {
            points: BTreeSet::new(),
            cache: RefCell::new(None),
        }
    }

    /// Bulk-load a point set from a reader of whitespace-separated coordinate
    /// pairs. Pairs may span line breaks.
    ///
    /// Loading is best effort: the first token that fails to parse stops it
    /// silently and the points read before it are kept, with a trailing unpaired
    /// coordinate dropped. I/O errors do propagate.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut set = Self::new();
        for point in read_points(reader)? {
            set.put(point);
        }
        Ok(set)
    }

    /// Bulk-load a point set from a file of whitespace-separated coordinate pairs,
    /// under the same contract as [`from_reader`][PointSet::from_reader].
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_reader(BufReader::new(File::open(path)?))
    }

    /// Insert a point.
    ///
    /// Inserting a point already present is a no-op and leaves the cached tree
    /// valid; only an actual insertion marks it stale.
    pub fn put(&mut self, p: Point<N>) {
        if self.points.insert(p) {
            *self.cache.get_mut() = None;
        }
    }

    /// Whether a point with exactly these coordinates is stored.
    pub fn contains(&self, p: &Point<N>) -> bool {
        self.tree().contains(p)
    }

    /// The number of stored points.
    pub fn len(&self) -> usize {
        self.tree().len()
    }

    /// Whether the set holds no points.
    pub fn is_empty(&self) -> bool {
        self.tree().is_empty()
    }

    /// Iterate over all stored points, in the tree's preorder.
    ///
    /// The order is deterministic between mutations: iterating twice without a
    /// `put` in between yields the same sequence.
    pub fn iter(&self) -> Iter<'_, N> {
        Iter {
            tree: self.tree(),
            pos: 0,
        }
    }

    /// All stored points inside `rect`, bounds inclusive, as a snapshot in
    /// traversal order.
    ///
    /// Subtrees whose slab does not intersect `rect` are pruned without a visit.
    pub fn range(&self, rect: &Rect<N>) -> Vec<Point<N>> {
        self.tree().range(rect)
    }

    /// All stored points inside a [`geo_traits`] rect, bounds inclusive.
    pub fn range_rect(&self, rect: &impl RectTrait<T = N>) -> Vec<Point<N>> {
        self.range(&Rect::new(
            Point::new(rect.min().x(), rect.min().y()),
            Point::new(rect.max().x(), rect.max().y()),
        ))
    }

    /// The closest stored point to `p`, or `None` if the set is empty.
    ///
    /// Between equidistant points the winner is arbitrary but deterministic.
    pub fn nearest(&self, p: &Point<N>) -> Option<Point<N>> {
        self.neighbors(p, 1).into_iter().next()
    }

    /// The closest stored point to a [`geo_traits`] coordinate.
    pub fn nearest_coord(&self, coord: &impl CoordTrait<T = N>) -> Option<Point<N>> {
        self.nearest(&Point::new(coord.x(), coord.y()))
    }

    /// The up to `k` stored points closest to `p`, sorted by ascending distance.
    ///
    /// `k == 0` yields nothing. `k >= self.len()` yields every stored point in
    /// iteration order without running the search. Ties between equidistant points
    /// resolve in an arbitrary but deterministic order.
    pub fn neighbors(&self, p: &Point<N>, k: usize) -> Vec<Point<N>> {
        let tree = self.tree();
        if k == 0 || tree.is_empty() {
            return vec![];
        }
        if k >= tree.len() {
            return tree.points().collect();
        }
        tree.nearest(p, k)
    }

    /// The up to `k` stored points closest to a [`geo_traits`] coordinate.
    pub fn neighbors_coord(&self, coord: &impl CoordTrait<T = N>, k: usize) -> Vec<Point<N>> {
        self.neighbors(&Point::new(coord.x(), coord.y()), k)
    }

    /// The current tree, rebuilt first if inserts are pending.
    ///
    /// A clean cache is only borrowed, never borrowed mutably, so concurrent reads
    /// through live [`Iter`]s stay fine; the stale case cannot overlap with one
    /// because making the cache stale requires `&mut self`.
    fn tree(&self) -> Ref<'_, Tree<N>> {
        if self.cache.borrow().is_none() {
            let rebuilt = builder::build(self.points.iter().copied().collect());
            *self.cache.borrow_mut() = Some(rebuilt);
        }
        // Just rebuilt above if it was stale.
        Ref::map(self.cache.borrow(), |cache| cache.as_ref().unwrap())
    }
}

impl<N: CoordNum> Default for PointSet<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: CoordNum> fmt::Display for PointSet<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for point in self {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}", point)?;
            first = false;
        }
        Ok(())
    }
}

/// Iterator over the points of a [`PointSet`], in the tree's preorder.
///
/// Holds the set's cache borrow for as long as it lives, which is also what keeps
/// `put` away: mutation needs `&mut self` and cannot overlap a live iterator.
#[derive(Debug)]
pub struct Iter<'a, N: CoordNum> {
    tree: Ref<'a, Tree<N>>,
    pos: usize,
}

impl<N: CoordNum> Iterator for Iter<'_, N> {
    type Item = Point<N>;

    fn next(&mut self) -> Option<Point<N>> {
        let node = self.tree.nodes.get(self.pos)?;
        self.pos += 1;
        Some(node.point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.tree.len() - self.pos;
        (remaining, Some(remaining))
    }
}

impl<N: CoordNum> ExactSizeIterator for Iter<'_, N> {}

impl<N: CoordNum> FusedIterator for Iter<'_, N> {}

impl<'a, N: CoordNum> IntoIterator for &'a PointSet<N> {
    type Item = Point<N>;
    type IntoIter = Iter<'a, N>;

    fn into_iter(self) -> Iter<'a, N> {
        self.iter()
    }
}
