use super::{BasicSegmentString, SegmentNode, SegmentNodeList, SegmentString};
use crate::math::{Point, Real};
use crate::utils::LineIntersector;
use alloc::vec::Vec;

/// A chain accumulating the nodes found on it during noding.
///
/// Nodes are added by intersection detectors while the chain is processed; the chain can then
/// be split at its nodes with [`NodedSegmentString::noded_substrings`].
#[derive(Clone, Debug)]
pub struct NodedSegmentString<D> {
    points: Vec<Point<Real>>,
    data: D,
    node_list: SegmentNodeList,
}

impl<D> NodedSegmentString<D> {
    /// Creates a new chain without any node.
    pub fn new(points: Vec<Point<Real>>, data: D) -> Self {
        Self {
            points,
            data,
            node_list: SegmentNodeList::new(),
        }
    }

    /// The nodes added to this chain so far.
    pub fn node_list(&self) -> &SegmentNodeList {
        &self.node_list
    }

    /// Were some nodes added to this chain?
    pub fn has_nodes(&self) -> bool {
        !self.node_list.is_empty()
    }

    /// Adds a node for every intersection point computed by `li`.
    ///
    /// `segment_index` is the index of the segment of this chain that was given to the
    /// intersector as its `geom_index`-th input.
    pub fn add_intersections(
        &mut self,
        li: &LineIntersector,
        segment_index: usize,
        geom_index: usize,
    ) {
        debug_assert!(geom_index < 2);
        for pt in li.intersections() {
            let _ = self.add_intersection(*pt, segment_index);
        }
    }

    /// Adds a node at `pt` on the `segment_index`-th segment.
    ///
    /// A point equal to the end vertex of the segment is recorded on the next segment, so a
    /// given location always yields the same node.
    pub fn add_intersection(&mut self, pt: Point<Real>, segment_index: usize) -> SegmentNode {
        let mut normalized_segment_index = segment_index;
        let next = normalized_segment_index + 1;
        if next < self.points.len() && pt == self.points[next] {
            normalized_segment_index = next;
        }

        let octant = self.segment_octant(normalized_segment_index);
        self.node_list
            .add(&self.points, pt, normalized_segment_index, octant)
    }

    /// The vertices of this chain with every node inserted, without consecutive duplicates.
    pub fn noded_coordinates(&self) -> Vec<Point<Real>> {
        let mut node_list = self.node_list.clone();
        node_list.split_coordinates(&self.points)
    }

    /// Consumes this chain, returning its vertices, payload and nodes.
    pub fn into_parts(self) -> (Vec<Point<Real>>, D, SegmentNodeList) {
        (self.points, self.data, self.node_list)
    }
}

impl<D: Clone> NodedSegmentString<D> {
    /// Splits this chain at every one of its nodes.
    ///
    /// The endpoints of the chain and the vertices where it collapses on itself are always
    /// nodes. Every resulting chain carries a copy of this chain's payload.
    pub fn noded_substrings(&self) -> Vec<BasicSegmentString<D>> {
        let mut node_list = self.node_list.clone();
        node_list
            .add_split_edges(&self.points)
            .into_iter()
            .map(|pts| BasicSegmentString::new(pts, self.data.clone()))
            .collect()
    }
}

impl<D> From<BasicSegmentString<D>> for NodedSegmentString<D> {
    fn from(string: BasicSegmentString<D>) -> Self {
        let (points, data) = string.into_parts();
        Self::new(points, data)
    }
}

impl<D> SegmentString for NodedSegmentString<D> {
    type Data = D;

    #[inline]
    fn points(&self) -> &[Point<Real>] {
        &self.points
    }

    #[inline]
    fn data(&self) -> &D {
        &self.data
    }
}

/// Wraps every chain of `strings` into a chain accumulating nodes.
pub fn to_noded_strings<D>(strings: Vec<BasicSegmentString<D>>) -> Vec<NodedSegmentString<D>> {
    strings.into_iter().map(NodedSegmentString::from).collect()
}

/// Splits every chain of `strings` at its nodes.
pub fn noded_substrings<D: Clone>(
    strings: &[NodedSegmentString<D>],
) -> Vec<BasicSegmentString<D>> {
    strings.iter().flat_map(|s| s.noded_substrings()).collect()
}
