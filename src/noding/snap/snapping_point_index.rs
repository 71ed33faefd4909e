use crate::math::{Point, Real};
use crate::partitioning::KdTree;

/// An index of points snapping every new point to an existing one within a tolerance.
#[derive(Clone, Debug, Default)]
pub struct SnappingPointIndex {
    tree: KdTree<()>,
}

impl SnappingPointIndex {
    /// An empty index snapping points closer than `snap_tolerance`.
    pub fn new(snap_tolerance: Real) -> Self {
        Self {
            tree: KdTree::with_tolerance(snap_tolerance),
        }
    }

    /// The snapping tolerance of this index.
    pub fn tolerance(&self) -> Real {
        self.tree.tolerance()
    }

    /// The number of distinct points of this index.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Is this index empty?
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Snaps `pt` to the nearest indexed point within tolerance, or inserts it if there is
    /// none.
    pub fn snap(&mut self, pt: Point<Real>) -> Point<Real> {
        let id = self.tree.insert(pt, ());
        *self.tree.node(id).point()
    }
}
