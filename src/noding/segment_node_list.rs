use super::octant::segment_octant;
use super::{Octant, SegmentNode};
use crate::math::{Point, Real};
use alloc::collections::BTreeSet;
use alloc::vec::Vec;

/// The ordered set of nodes found on a single chain.
///
/// The list does not own the chain vertices: they are given to every operation needing them,
/// and must be the same every time.
#[derive(Clone, Debug, Default)]
pub struct SegmentNodeList {
    nodes: BTreeSet<SegmentNode>,
}

impl SegmentNodeList {
    /// An empty node list.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of nodes of this list.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Does this list contain no node?
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The nodes of this list, in chain order.
    pub fn iter(&self) -> impl Iterator<Item = &SegmentNode> {
        self.nodes.iter()
    }

    /// Adds a node at `pt` on the `segment_index`-th segment of the chain with vertices `pts`.
    ///
    /// If an equal node already exists, it is kept and returned.
    pub fn add(
        &mut self,
        pts: &[Point<Real>],
        pt: Point<Real>,
        segment_index: usize,
        segment_octant: Octant,
    ) -> SegmentNode {
        let node = SegmentNode::new(pts, pt, segment_index, segment_octant);

        if let Some(existing) = self.nodes.get(&node) {
            debug_assert_eq!(
                existing.coord(),
                &pt,
                "found equal nodes with different coordinates"
            );
            return *existing;
        }

        let _ = self.nodes.insert(node);
        node
    }

    fn add_vertex(&mut self, pts: &[Point<Real>], vertex_index: usize) {
        let octant = segment_octant(pts, vertex_index);
        let _ = self.add(pts, pts[vertex_index], vertex_index, octant);
    }

    /// Adds nodes for the first and last vertices of the chain.
    fn add_endpoints(&mut self, pts: &[Point<Real>]) {
        if pts.is_empty() {
            return;
        }

        self.add_vertex(pts, 0);
        self.add_vertex(pts, pts.len() - 1);
    }

    /// Adds nodes for the vertices where the chain collapses on itself.
    ///
    /// A collapse is either two nodes with identical coordinates exactly one vertex apart, or
    /// two vertices two positions apart with identical coordinates. In both cases the vertex in
    /// between must be a node, otherwise the zero-area split between them would be lost.
    fn add_collapsed_nodes(&mut self, pts: &[Point<Real>]) {
        let mut collapsed = self.find_collapses_from_inserted_nodes();
        collapsed.extend(find_collapses_from_existing_vertices(pts));

        for vertex_index in collapsed {
            self.add_vertex(pts, vertex_index);
        }
    }

    fn find_collapses_from_inserted_nodes(&self) -> Vec<usize> {
        let mut result = Vec::new();
        let mut it = self.nodes.iter();
        let Some(mut prev) = it.next() else {
            return result;
        };

        for node in it {
            if let Some(collapsed) = find_collapse_index(prev, node) {
                result.push(collapsed);
            }
            prev = node;
        }

        result
    }

    /// Computes the point sequences of the chains resulting from splitting the chain with
    /// vertices `pts` at every node of this list.
    ///
    /// Endpoint and collapse nodes are added to this list first.
    pub fn add_split_edges(&mut self, pts: &[Point<Real>]) -> Vec<Vec<Point<Real>>> {
        self.add_endpoints(pts);
        self.add_collapsed_nodes(pts);

        let mut result = Vec::with_capacity(self.nodes.len().saturating_sub(1));
        let mut it = self.nodes.iter();
        let Some(mut prev) = it.next() else {
            return result;
        };

        for node in it {
            result.push(split_edge_points(pts, prev, node));
            prev = node;
        }

        result
    }

    /// The vertices of the chain with vertices `pts` once every node of this list has been
    /// inserted into it.
    ///
    /// Consecutive repeated points are collapsed, both at the junctions between splits and
    /// inside them.
    pub fn split_coordinates(&mut self, pts: &[Point<Real>]) -> Vec<Point<Real>> {
        self.add_endpoints(pts);

        let mut result: Vec<Point<Real>> = Vec::with_capacity(pts.len() + self.nodes.len());
        let mut it = self.nodes.iter();
        let Some(mut prev) = it.next() else {
            return result;
        };

        for node in it {
            for pt in split_edge_points(pts, prev, node) {
                if result.last() != Some(&pt) {
                    result.push(pt);
                }
            }
            prev = node;
        }

        result
    }
}

fn find_collapses_from_existing_vertices(
    pts: &[Point<Real>],
) -> impl Iterator<Item = usize> + '_ {
    pts.windows(3)
        .enumerate()
        .filter(|(_, w)| w[0] == w[2])
        .map(|(i, _)| i + 1)
}

/// If two consecutive nodes have the same coordinates and exactly one vertex between them,
/// returns the index of that vertex.
fn find_collapse_index(node0: &SegmentNode, node1: &SegmentNode) -> Option<usize> {
    if node0.coord() != node1.coord() {
        return None;
    }

    let mut num_vertices_between = node1.segment_index() - node0.segment_index();
    if !node1.is_interior() {
        num_vertices_between = num_vertices_between.checked_sub(1)?;
    }

    (num_vertices_between == 1).then_some(node0.segment_index() + 1)
}

/// The points of the chain section between two consecutive nodes.
///
/// The end node coordinate is only added if it differs from the last vertex copied from the
/// chain.
fn split_edge_points(
    pts: &[Point<Real>],
    node0: &SegmentNode,
    node1: &SegmentNode,
) -> Vec<Point<Real>> {
    let last_segment_start = &pts[node1.segment_index()];
    let use_node1 = node1.is_interior() || node1.coord() != last_segment_start;

    let mut result = Vec::with_capacity(node1.segment_index() - node0.segment_index() + 2);
    result.push(*node0.coord());
    result.extend_from_slice(&pts[node0.segment_index() + 1..=node1.segment_index()]);

    if use_node1 {
        result.push(*node1.coord());
    }

    result
}
