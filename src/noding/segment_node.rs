use super::Octant;
use crate::math::{Point, Real};
use core::cmp::Ordering;

/// An intersection location on a segment of a chain.
///
/// Nodes of the same chain are ordered by segment index first, then by their position along
/// that segment as given by [`Octant::compare`]. Raw coordinate comparisons are never used to
/// order nodes of the same segment since rounding may move them slightly off the segment.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct SegmentNode {
    coord: Point<Real>,
    segment_index: usize,
    segment_octant: Octant,
    is_interior: bool,
}

impl SegmentNode {
    /// Creates a node at `coord` on the `segment_index`-th segment of the chain with vertices
    /// `pts`.
    pub fn new(
        pts: &[Point<Real>],
        coord: Point<Real>,
        segment_index: usize,
        segment_octant: Octant,
    ) -> Self {
        Self {
            coord,
            segment_index,
            segment_octant,
            is_interior: coord != pts[segment_index],
        }
    }

    /// The location of this node.
    #[inline]
    pub fn coord(&self) -> &Point<Real> {
        &self.coord
    }

    /// The index of the segment this node lies on.
    #[inline]
    pub fn segment_index(&self) -> usize {
        self.segment_index
    }

    /// The octant of the segment this node lies on.
    #[inline]
    pub fn segment_octant(&self) -> Octant {
        self.segment_octant
    }

    /// Is this node different from the start vertex of its segment?
    #[inline]
    pub fn is_interior(&self) -> bool {
        self.is_interior
    }

    /// Is this node located at the end vertex of the chain with `max_segment_index` segments,
    /// or at its start vertex?
    pub fn is_endpoint(&self, max_segment_index: usize) -> bool {
        (self.segment_index == 0 && !self.is_interior) || self.segment_index == max_segment_index
    }
}

impl Ord for SegmentNode {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.segment_index.cmp(&other.segment_index) {
            Ordering::Equal => {}
            ord => return ord,
        }

        if self.coord == other.coord {
            return Ordering::Equal;
        }

        // A node which is not interior is the segment start point, so always sorts first.
        if !self.is_interior {
            return Ordering::Less;
        }
        if !other.is_interior {
            return Ordering::Greater;
        }

        self.segment_octant.compare(&self.coord, &other.coord)
    }
}

impl PartialOrd for SegmentNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SegmentNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SegmentNode {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nodes_are_ordered_along_the_chain() {
        let pts = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, -10.0),
        ];
        let node = |x, y, seg| {
            let octant = Octant::from_segment(&pts[seg], &pts[seg + 1]).unwrap();
            SegmentNode::new(&pts, Point::new(x, y), seg, octant)
        };

        let start = node(0.0, 0.0, 0);
        let a = node(3.0, 0.0, 0);
        let b = node(7.0, 0.0, 0);
        let c = node(10.0, 0.0, 1);
        let d = node(10.0, -2.0, 1);

        assert!(!start.is_interior());
        assert!(a.is_interior());
        assert!(!c.is_interior());
        assert!(start < a && a < b && b < c && c < d);
        assert_eq!(a, node(3.0, 0.0, 0));
        assert!(start.is_endpoint(2));
        assert!(!a.is_endpoint(2));
    }
}
