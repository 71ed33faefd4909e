use super::{SegmentIntersector, SegmentString, SegmentStringPair};
use crate::utils::LineIntersector;

/// Computes the intersections between segments and adds them as nodes to both chains.
///
/// Trivial intersections, i.e., the vertex shared by two adjacent segments of the same chain,
/// are not recorded. Counters of the intersections found are kept so that callers can
/// decide whether noding must be repeated.
#[derive(Clone, Debug, Default)]
pub struct IntersectionAdder {
    li: LineIntersector,
    has_intersection: bool,
    has_proper: bool,
    has_proper_interior: bool,
    has_interior: bool,
    /// The number of segment pairs found to intersect.
    pub num_intersections: usize,
    /// The number of segment pairs having an intersection interior to at least one of them.
    pub num_interior_intersections: usize,
    /// The number of proper intersections.
    pub num_proper_intersections: usize,
    /// The number of candidate segment pairs tested.
    pub num_tests: usize,
}

impl IntersectionAdder {
    /// Creates an intersection adder using the given line intersector.
    pub fn new(li: LineIntersector) -> Self {
        Self {
            li,
            ..Self::default()
        }
    }

    /// The line intersector used by this adder.
    pub fn line_intersector(&self) -> &LineIntersector {
        &self.li
    }

    /// Was any non-trivial intersection found?
    pub fn has_intersection(&self) -> bool {
        self.has_intersection
    }

    /// Was any proper intersection found?
    pub fn has_proper_intersection(&self) -> bool {
        self.has_proper
    }

    /// Was any intersection found that is proper and not located at an input vertex?
    pub fn has_proper_interior_intersection(&self) -> bool {
        self.has_proper_interior
    }

    /// Was any intersection found that is interior to at least one segment?
    pub fn has_interior_intersection(&self) -> bool {
        self.has_interior
    }

    /// Is the intersection just computed the vertex shared by two adjacent segments of the
    /// same chain?
    ///
    /// For closed chains, the first and last segments are adjacent too.
    fn is_trivial_intersection<D>(
        &self,
        pair: &SegmentStringPair<'_, D>,
        segment_index0: usize,
        segment_index1: usize,
    ) -> bool {
        if !pair.is_same() || self.li.intersection_num() != 1 {
            return false;
        }

        if segment_index0.abs_diff(segment_index1) == 1 {
            return true;
        }

        let string = pair.first();
        if string.is_closed() {
            let max_segment_index = string.len() - 2;
            if (segment_index0 == 0 && segment_index1 == max_segment_index)
                || (segment_index1 == 0 && segment_index0 == max_segment_index)
            {
                return true;
            }
        }

        false
    }
}

impl<D> SegmentIntersector<D> for IntersectionAdder {
    fn process_intersections(
        &mut self,
        mut pair: SegmentStringPair<'_, D>,
        segment_index0: usize,
        segment_index1: usize,
    ) {
        if pair.is_same() && segment_index0 == segment_index1 {
            return;
        }

        self.num_tests += 1;
        let p00 = pair.first().point(segment_index0);
        let p01 = pair.first().point(segment_index0 + 1);
        let p10 = pair.second().point(segment_index1);
        let p11 = pair.second().point(segment_index1 + 1);

        self.li.compute_intersection(&p00, &p01, &p10, &p11);

        if !self.li.has_intersection() {
            return;
        }

        self.num_intersections += 1;
        if self.li.is_interior_intersection() {
            self.num_interior_intersections += 1;
            self.has_interior = true;
        }

        if !self.is_trivial_intersection(&pair, segment_index0, segment_index1) {
            self.has_intersection = true;
            add_intersections(&self.li, &mut pair, segment_index0, segment_index1);

            if self.li.is_proper() {
                self.num_proper_intersections += 1;
                self.has_proper = true;
                self.has_proper_interior = true;
            }
        }
    }
}

/// Adds the intersection points computed by `li` as nodes of both chains of `pair`.
pub(crate) fn add_intersections<D>(
    li: &LineIntersector,
    pair: &mut SegmentStringPair<'_, D>,
    segment_index0: usize,
    segment_index1: usize,
) {
    pair.first_mut().add_intersections(li, segment_index0, 0);
    pair.second_mut().add_intersections(li, segment_index1, 1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Point;
    use crate::noding::NodedSegmentString;

    fn string(coords: &[[f64; 2]]) -> NodedSegmentString<()> {
        NodedSegmentString::new(coords.iter().map(|c| Point::new(c[0], c[1])).collect(), ())
    }

    #[test]
    fn adjacent_segments_are_trivial() {
        let mut strings = vec![string(&[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 0.0]])];
        let mut adder = IntersectionAdder::default();

        for (i0, i1) in [(0, 1), (1, 2), (0, 2), (2, 0)] {
            adder.process_intersections(SegmentStringPair::from_slice(&mut strings, 0, 0), i0, i1);
        }

        assert_eq!(adder.num_intersections, 4);
        assert!(!adder.has_intersection());
        assert!(!strings[0].has_nodes());
    }

    #[test]
    fn crossing_adds_nodes_to_both_chains() {
        let mut strings = vec![
            string(&[[0.0, 0.0], [10.0, 10.0]]),
            string(&[[0.0, 10.0], [10.0, 0.0]]),
        ];
        let mut adder = IntersectionAdder::default();
        adder.process_intersections(SegmentStringPair::from_slice(&mut strings, 0, 1), 0, 0);

        assert!(adder.has_intersection());
        assert!(adder.has_proper_intersection());
        assert_eq!(adder.num_interior_intersections, 1);
        assert_eq!(strings[0].noded_substrings().len(), 2);
        assert_eq!(strings[1].noded_substrings().len(), 2);
    }
}
