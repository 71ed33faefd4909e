use crate::math::{Point, Real};
use crate::noding::intersection_adder::add_intersections;
use crate::noding::{NodedSegmentString, SegmentIntersector, SegmentString, SegmentStringPair};
use crate::utils::{point_segment_distance, LineIntersector};
use alloc::vec::Vec;

/// Finds the points that must become hot pixel nodes before snap-rounding.
///
/// These are the intersections interior to a segment, computed in full precision, and the
/// vertices lying closer than a nearness tolerance to the interior of another segment. Such
/// vertices could be carried across the segment when rounded; making them nodes keeps the
/// topology. Every point found is also added as a node to the chains involved.
#[derive(Clone, Debug)]
pub struct SnapRoundingIntersectionAdder {
    li: LineIntersector,
    nearness_tolerance: Real,
    intersections: Vec<Point<Real>>,
}

impl SnapRoundingIntersectionAdder {
    /// An adder treating vertices closer than `nearness_tolerance` to a segment as nodes.
    pub fn new(nearness_tolerance: Real) -> Self {
        Self {
            li: LineIntersector::new(),
            nearness_tolerance,
            intersections: Vec::new(),
        }
    }

    /// The intersection points and near vertices found.
    pub fn intersections(&self) -> &[Point<Real>] {
        &self.intersections
    }

    /// Consumes this adder, returning the intersection points and near vertices found.
    pub fn into_intersections(self) -> Vec<Point<Real>> {
        self.intersections
    }

    /// If `pt` is near the interior of the segment `[p0, p1]`, records it and adds it as a
    /// node of the `segment_index`-th segment of `target`.
    fn process_near_vertex<D>(
        &mut self,
        pt: Point<Real>,
        target: &mut NodedSegmentString<D>,
        segment_index: usize,
        [p0, p1]: [Point<Real>; 2],
    ) {
        if na::distance(&pt, &p0) < self.nearness_tolerance
            || na::distance(&pt, &p1) < self.nearness_tolerance
        {
            return;
        }

        if point_segment_distance(&pt, &p0, &p1) < self.nearness_tolerance {
            self.intersections.push(pt);
            let _ = target.add_intersection(pt, segment_index);
        }
    }
}

impl<D> SegmentIntersector<D> for SnapRoundingIntersectionAdder {
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

        self.li
            .compute_intersection(&seg0[0], &seg0[1], &seg1[0], &seg1[1]);
        if self.li.has_intersection() && self.li.is_interior_intersection() {
            self.intersections.extend_from_slice(self.li.intersections());
            add_intersections(&self.li, &mut pair, segment_index0, segment_index1);
            return;
        }

        // Segments that do not intersect (or only at their endpoints) may still be close.
        for pt in seg0 {
            self.process_near_vertex(pt, pair.second_mut(), segment_index1, seg1);
        }
        for pt in seg1 {
            self.process_near_vertex(pt, pair.first_mut(), segment_index0, seg0);
        }
    }
}
