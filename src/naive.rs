//! A brute-force point set with the same contract as the tree-backed one.
//!
//! Every query is a linear scan over the stored points, which makes this the
//! reference implementation: trivially correct, easy to read, and the oracle the
//! differential tests and benchmarks compare [`crate::kdtree::PointSet`] against.

#![warn(missing_docs)]

use std::collections::btree_set;
use std::collections::BTreeSet;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::iter::Copied;
use std::path::Path;

use crate::coord::CoordNum;
use crate::error::Result;
use crate::geom::{Point, Rect};
use crate::util::read_points;

/// A deduplicated set of planar points answering every query by linear scan.
#[derive(Debug, Clone, Default)]
pub struct PointSet<N: CoordNum> {
    points: BTreeSet<Point<N>>,
}

impl<N: CoordNum> PointSet<N> {
    /// Create an empty point set.
    pub fn new() -> Self {
        Self {
            points: BTreeSet::new(),
        }
    }

    /// Bulk-load a point set from a reader of whitespace-separated coordinate
    /// pairs, under the same best-effort contract as
    /// [`kdtree::PointSet::from_reader`][crate::kdtree::PointSet::from_reader].
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut set = Self::new();
        for point in read_points(reader)? {
            set.put(point);
        }
        Ok(set)
    }

    /// Bulk-load a point set from a file of whitespace-separated coordinate pairs.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_reader(BufReader::new(File::open(path)?))
    }

    /// Insert a point. Inserting a point already present is a no-op.
    pub fn put(&mut self, p: Point<N>) {
        self.points.insert(p);
    }

    /// Whether a point with exactly these coordinates is stored.
    pub fn contains(&self, p: &Point<N>) -> bool {
        self.points.contains(p)
    }

    /// The number of stored points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the set holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over all stored points, in storage order (ascending y, then x).
    pub fn iter(&self) -> Iter<'_, N> {
        self.points.iter().copied()
    }

    /// All stored points inside `rect`, bounds inclusive, by scanning everything.
    pub fn range(&self, rect: &Rect<N>) -> Vec<Point<N>> {
        self.iter().filter(|p| rect.contains(p)).collect()
    }

    /// The closest stored point to `p`, or `None` if the set is empty.
    pub fn nearest(&self, p: &Point<N>) -> Option<Point<N>> {
        // We don't allow NaN. This should only panic on NaN
        self.iter()
            .min_by(|a, b| a.distance(p).partial_cmp(&b.distance(p)).unwrap())
    }

    /// The up to `k` stored points closest to `p`, sorted by ascending distance.
    ///
    /// Matches the tree-backed policy: `k == 0` yields nothing and `k >= len`
    /// yields every point in iteration order without sorting by distance.
    pub fn neighbors(&self, p: &Point<N>, k: usize) -> Vec<Point<N>> {
        if k == 0 {
            return vec![];
        }
        let mut all: Vec<Point<N>> = self.iter().collect();
        if k < all.len() {
            // We don't allow NaN. This should only panic on NaN
            all.sort_unstable_by(|a, b| a.distance(p).partial_cmp(&b.distance(p)).unwrap());
            all.truncate(k);
        }
        all
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

/// Iterator over the points of a naive [`PointSet`], in storage order.
pub type Iter<'a, N> = Copied<btree_set::Iter<'a, Point<N>>>;

impl<'a, N: CoordNum> IntoIterator for &'a PointSet<N> {
    type Item = Point<N>;
    type IntoIter = Iter<'a, N>;

    fn into_iter(self) -> Iter<'a, N> {
        self.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn set_of(coords: &[(f64, f64)]) -> PointSet<f64> {
        let mut set = PointSet::new();
        for &(x, y) in coords {
            set.put(Point::new(x, y));
        }
        set
    }

    #[test]
    fn deduplicates_on_put() {
        let set = set_of(&[(1.0, 1.0), (2.0, 2.0), (1.0, 1.0)]);
        assert_eq!(set.len(), 2);
        assert!(set.contains(&Point::new(1.0, 1.0)));
        assert!(!set.contains(&Point::new(1.0, 2.0)));
    }

    #[test]
    fn range_scans_inclusively() {
        let set = set_of(&[(0.0, 0.0), (2.0, 2.0), (2.0, 3.0), (-1.0, 1.0)]);
        let rect = Rect::new(Point::new(0.0, 0.0), Point::new(2.0, 2.0));
        assert_eq!(
            set.range(&rect),
            vec![Point::new(0.0, 0.0), Point::new(2.0, 2.0)]
        );
    }

    #[test]
    fn neighbors_sorts_and_truncates() {
        let set = set_of(&[(0.0, 0.0), (5.0, 0.0), (1.0, 0.0), (3.0, 0.0)]);
        let origin = Point::new(0.0, 0.0);
        assert_eq!(
            set.neighbors(&origin, 2),
            vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)]
        );
        assert_eq!(set.neighbors(&origin, 0), vec![]);
        // k >= len keeps storage order.
        assert_eq!(set.neighbors(&origin, 9), set.iter().collect::<Vec<_>>());
        assert_eq!(set.nearest(&Point::new(2.9, 0.0)), Some(Point::new(3.0, 0.0)));
        assert_eq!(PointSet::<f64>::new().nearest(&origin), None);
    }
}
