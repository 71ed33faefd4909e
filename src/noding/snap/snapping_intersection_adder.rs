use super::SnappingPointIndex;
use crate::math::{Point, Real};
use crate::noding::{NodedSegmentString, SegmentIntersector, SegmentString, SegmentStringPair};
use crate::utils::{point_segment_distance, LineIntersector};

/// Adds nodes for proper intersections and for vertices lying close to a segment.
///
/// Proper intersection points are snapped to the vertices of a [`SnappingPointIndex`]. A
/// vertex closer than the snapping tolerance to the interior of a segment becomes a node of
/// both chains, unless it is also that close to an endpoint of the segment.
///
/// Proper intersections between adjacent segments of a chain are ignored. Adjacency is tested
/// on segment indices only, and includes the first and last segments of a closed chain.
pub struct SnappingIntersectionAdder<'a> {
    li: LineIntersector,
    snap_tolerance: Real,
    snap_index: &'a mut SnappingPointIndex,
}

impl<'a> SnappingIntersectionAdder<'a> {
    /// An adder snapping intersection points with `snap_index`.
    pub fn new(snap_tolerance: Real, snap_index: &'a mut SnappingPointIndex) -> Self {
        Self {
            li: LineIntersector::new(),
            snap_tolerance,
            snap_index,
        }
    }

    /// The snapping tolerance.
    pub fn snap_tolerance(&self) -> Real {
        self.snap_tolerance
    }

    /// Is `pt` close to the interior of `[p0, p1]` but not to its endpoints?
    fn is_near_interior(&self, pt: &Point<Real>, [p0, p1]: &[Point<Real>; 2]) -> bool {
        na::distance(pt, p0) >= self.snap_tolerance
            && na::distance(pt, p1) >= self.snap_tolerance
            && point_segment_distance(pt, p0, p1) < self.snap_tolerance
    }
}

impl<D> SegmentIntersector<D> for SnappingIntersectionAdder<'_> {
    fn process_intersections(
        &mut self,
        mut pair: SegmentStringPair<'_, D>,
        segment_index0: usize,
        segment_index1: usize,
    ) {
        if pair.is_same() && segment_index0 == segment_index1 {
            return;
        }

        let seg0 = [
            pair.first().point(segment_index0),
            pair.first().point(segment_index0 + 1),
        ];
        let seg1 = [
            pair.second().point(segment_index1),
            pair.second().point(segment_index1 + 1),
        ];

        if !is_adjacent(&pair, segment_index0, segment_index1) {
            self.li
                .compute_intersection(&seg0[0], &seg0[1], &seg1[0], &seg1[1]);
            if self.li.is_proper() {
                for i in 0..self.li.intersection_num() {
                    let pt = self.snap_index.snap(self.li.intersection(i));
                    let _ = pair.first_mut().add_intersection(pt, segment_index0);
                    let _ = pair.second_mut().add_intersection(pt, segment_index1);
                }
            }
        }

        for pt in seg0 {
            if self.is_near_interior(&pt, &seg1) {
                add_node_pair(&mut pair, pt, segment_index1, segment_index0, false);
            }
        }

        for pt in seg1 {
            if self.is_near_interior(&pt, &seg0) {
                add_node_pair(&mut pair, pt, segment_index0, segment_index1, true);
            }
        }
    }
}

/// Adds `pt` as a node of the segment it is close to and of the segment it is a vertex of.
///
/// The first index refers to the chain `pair.first()` if `target_is_first` is set, and to
/// `pair.second()` otherwise. The second index refers to the other chain.
fn add_node_pair<D>(
    pair: &mut SegmentStringPair<'_, D>,
    pt: Point<Real>,
    target_index: usize,
    src_index: usize,
    target_is_first: bool,
) {
    let (target, src): (&mut NodedSegmentString<D>, Option<&mut NodedSegmentString<D>>) =
        match (pair, target_is_first) {
            (SegmentStringPair::Same(s), _) => (&mut **s, None),
            (SegmentStringPair::Distinct(s0, s1), true) => (&mut **s0, Some(&mut **s1)),
            (SegmentStringPair::Distinct(s0, s1), false) => (&mut **s1, Some(&mut **s0)),
        };

    let _ = target.add_intersection(pt, target_index);
    match src {
        Some(src) => {
            let _ = src.add_intersection(pt, src_index);
        }
        None => {
            let _ = target.add_intersection(pt, src_index);
        }
    }
}

/// Are the two segments consecutive in the same chain?
fn is_adjacent<D>(
    pair: &SegmentStringPair<'_, D>,
    segment_index0: usize,
    segment_index1: usize,
) -> bool {
    if !pair.is_same() {
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

#[cfg(test)]
mod tests {
    use super::*;

    fn string(coords: &[[Real; 2]]) -> NodedSegmentString<()> {
        NodedSegmentString::new(coords.iter().map(|c| Point::new(c[0], c[1])).collect(), ())
    }

    #[test]
    fn vertex_near_segment_interior() {
        let mut strings = vec![
            string(&[[0.0, 0.0], [10.0, 0.0]]),
            string(&[[5.0, 0.05], [5.0, 10.0]]),
        ];
        let mut index = SnappingPointIndex::new(0.1);
        let mut adder = SnappingIntersectionAdder::new(0.1, &mut index);
        adder.process_intersections(SegmentStringPair::from_slice(&mut strings, 0, 1), 0, 0);

        let split = strings[0].noded_substrings();
        assert_eq!(split.len(), 2);
        assert_eq!(split[0].points()[1], Point::new(5.0, 0.05));
        // The vertex node of the second chain is one of its endpoints.
        assert_eq!(strings[1].noded_substrings().len(), 1);
    }

    #[test]
    fn vertex_near_segment_endpoint_is_ignored() {
        let mut strings = vec![
            string(&[[0.0, 0.0], [10.0, 0.0]]),
            string(&[[9.95, 0.05], [9.95, 10.0]]),
        ];
        let mut index = SnappingPointIndex::new(0.1);
        let mut adder = SnappingIntersectionAdder::new(0.1, &mut index);
        adder.process_intersections(SegmentStringPair::from_slice(&mut strings, 0, 1), 0, 0);
        assert!(!strings[0].has_nodes());
    }

    #[test]
    fn proper_intersections_are_snapped() {
        let mut strings = vec![
            string(&[[0.0, 0.0], [10.0, 10.0]]),
            string(&[[0.0, 10.0], [10.0, 0.0]]),
        ];
        let mut index = SnappingPointIndex::new(0.5);
        let _ = index.snap(Point::new(5.2, 5.0));
        let mut adder = SnappingIntersectionAdder::new(0.5, &mut index);
        adder.process_intersections(SegmentStringPair::from_slice(&mut strings, 0, 1), 0, 0);

        let split = strings[1].noded_substrings();
        assert_eq!(split[0].points(), &[Point::new(0.0, 10.0), Point::new(5.2, 5.0)]);
    }
}
