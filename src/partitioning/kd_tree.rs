//! A 2D KD-tree of points with optional snapping tolerance.

use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::{Point, Real};
use alloc::vec::Vec;
use core::cmp::Ordering;
use smallvec::SmallVec;

/// A point stored in a [`KdTree`], with its associated data.
#[derive(Clone, Debug)]
pub struct KdNode<T> {
    point: Point<Real>,
    data: T,
    count: usize,
    left: Option<usize>,
    right: Option<usize>,
}

impl<T> KdNode<T> {
    fn new(point: Point<Real>, data: T) -> Self {
        Self {
            point,
            data,
            count: 1,
            left: None,
            right: None,
        }
    }

    /// The location of this node.
    #[inline]
    pub fn point(&self) -> &Point<Real> {
        &self.point
    }

    /// The data given when this node was first inserted.
    #[inline]
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Mutable reference to the data of this node.
    #[inline]
    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    /// The number of inserted points that were merged into this node.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Was more than one point merged into this node?
    #[inline]
    pub fn is_repeated(&self) -> bool {
        self.count > 1
    }

    #[inline]
    fn split_value(&self, is_x_level: bool) -> Real {
        if is_x_level {
            self.point.x
        } else {
            self.point.y
        }
    }

    #[inline]
    fn is_range_over_left(&self, is_x_level: bool, range: &Aabb) -> bool {
        if is_x_level {
            range.mins.x < self.point.x
        } else {
            range.mins.y < self.point.y
        }
    }

    #[inline]
    fn is_range_over_right(&self, is_x_level: bool, range: &Aabb) -> bool {
        if is_x_level {
            self.point.x <= range.maxs.x
        } else {
            self.point.y <= range.maxs.y
        }
    }

    #[inline]
    fn is_point_on_left(&self, is_x_level: bool, pt: &Point<Real>) -> bool {
        if is_x_level {
            pt.x < self.point.x
        } else {
            pt.y < self.point.y
        }
    }
}

/// A 2D KD-tree with alternating x/y splitting levels.
///
/// If the tree has a positive snapping tolerance, inserting a point within that distance of an
/// existing node does not create a new node: the nearest such node is returned instead (ties are
/// broken in favor of the lexicographically smallest point) and its count is incremented.
///
/// Nodes are stored in an arena and identified by their insertion index. The tree is never
/// rebalanced so its shape depends on the insertion order.
#[derive(Clone, Debug)]
pub struct KdTree<T> {
    nodes: Vec<KdNode<T>>,
    tolerance: Real,
}

impl<T> Default for KdTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> KdTree<T> {
    /// An empty tree that only merges exactly equal points.
    pub fn new() -> Self {
        Self::with_tolerance(0.0)
    }

    /// An empty tree that snaps inserted points to existing nodes within `tolerance`.
    pub fn with_tolerance(tolerance: Real) -> Self {
        Self {
            nodes: Vec::new(),
            tolerance,
        }
    }

    /// The snapping tolerance of this tree.
    pub fn tolerance(&self) -> Real {
        self.tolerance
    }

    /// Is this tree empty?
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The number of distinct nodes of this tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// The node with the given identifier.
    #[inline]
    pub fn node(&self, id: usize) -> &KdNode<T> {
        &self.nodes[id]
    }

    /// Mutable reference to the node with the given identifier.
    #[inline]
    pub fn node_mut(&mut self, id: usize) -> &mut KdNode<T> {
        &mut self.nodes[id]
    }

    /// Inserts a point and returns the identifier of the node representing it.
    ///
    /// If the point is snapped to an existing node, `data` is dropped.
    pub fn insert(&mut self, pt: Point<Real>, data: T) -> usize {
        if self.nodes.is_empty() {
            self.nodes.push(KdNode::new(pt, data));
            return 0;
        }

        if self.tolerance > 0.0 {
            if let Some(matched) = self.find_best_match_node(&pt) {
                self.nodes[matched].count += 1;
                return matched;
            }
        }

        self.insert_exact(pt, data)
    }

    fn find_best_match_node(&self, pt: &Point<Real>) -> Option<usize> {
        let query = Aabb::new(*pt, *pt).loosened(self.tolerance);
        let mut candidates = Vec::new();
        self.query(&query, &mut candidates);

        let mut best: Option<(usize, Real)> = None;
        for id in candidates {
            let node_pt = &self.nodes[id].point;
            let dist = na::distance(pt, node_pt);
            if dist > self.tolerance {
                continue;
            }

            let update = match best {
                None => true,
                Some((best_id, best_dist)) => {
                    dist < best_dist
                        || (dist == best_dist
                            && lexicographic_cmp(node_pt, &self.nodes[best_id].point)
                                != Ordering::Greater)
                }
            };

            if update {
                best = Some((id, dist));
            }
        }

        best.map(|(id, _)| id)
    }

    fn insert_exact(&mut self, pt: Point<Real>, data: T) -> usize {
        let tolerance_sq = self.tolerance * self.tolerance;
        let mut current = Some(0);
        let mut leaf = 0;
        let mut is_x_level = true;
        let mut is_less_than = true;

        while let Some(id) = current {
            let node = &mut self.nodes[id];
            if na::distance_squared(&pt, &node.point) <= tolerance_sq {
                node.count += 1;
                return id;
            }

            let split_value = node.split_value(is_x_level);
            is_less_than = if is_x_level {
                pt.x < split_value
            } else {
                pt.y < split_value
            };

            leaf = id;
            current = if is_less_than { node.left } else { node.right };
            is_x_level = !is_x_level;
        }

        let new_id = self.nodes.len();
        self.nodes.push(KdNode::new(pt, data));

        if is_less_than {
            self.nodes[leaf].left = Some(new_id);
        } else {
            self.nodes[leaf].right = Some(new_id);
        }

        new_id
    }

    /// Collects, in x/y in-order, the identifiers of every node contained in `range`.
    pub fn query(&self, range: &Aabb, out: &mut Vec<usize>) {
        let mut stack: SmallVec<[(usize, bool); 32]> = SmallVec::new();
        let mut current = (!self.nodes.is_empty()).then_some(0);
        let mut is_x_level = true;

        loop {
            if let Some(id) = current {
                stack.push((id, is_x_level));
                let node = &self.nodes[id];

                if node.is_range_over_left(is_x_level, range) {
                    current = node.left;
                    if current.is_some() {
                        is_x_level = !is_x_level;
                    }
                } else {
                    current = None;
                }
            } else if let Some((id, level)) = stack.pop() {
                is_x_level = level;
                let node = &self.nodes[id];

                if range.contains_local_point(&node.point) {
                    out.push(id);
                }

                if node.is_range_over_right(is_x_level, range) {
                    current = node.right;
                    if current.is_some() {
                        is_x_level = !is_x_level;
                    }
                } else {
                    current = None;
                }
            } else {
                return;
            }
        }
    }

    /// Finds the node located exactly at `pt`.
    pub fn query_point(&self, pt: &Point<Real>) -> Option<usize> {
        let mut current = (!self.nodes.is_empty()).then_some(0);
        let mut is_x_level = true;

        while let Some(id) = current {
            let node = &self.nodes[id];
            if node.point == *pt {
                return Some(id);
            }

            current = if node.is_point_on_left(is_x_level, pt) {
                node.left
            } else {
                node.right
            };
            is_x_level = !is_x_level;
        }

        None
    }
}

fn lexicographic_cmp(a: &Point<Real>, b: &Point<Real>) -> Ordering {
    a.x.partial_cmp(&b.x)
        .unwrap_or(Ordering::Equal)
        .then(a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal))
}
