use super::{IntersectionDetector, SegmentString};
use crate::math::{Point, Real};
use crate::utils::LineIntersector;
use alloc::vec::Vec;

/// Finds intersections that prevent a set of chains from being correctly noded.
///
/// Two kinds of intersections are detected:
/// - intersections interior to at least one of the two segments, including proper crossings;
/// - vertices interior to a chain that are equal to any vertex of another segment, which
///   includes chain endpoints touching the interior vertex of another chain.
///
/// Coincidences between two chain endpoints are valid nodes and never reported. Only the
/// first kind is reported if [`NodingIntersectionFinder::set_interior_intersections_only`]
/// is enabled.
///
/// By default the search stops at the first intersection found.
#[derive(Clone, Debug, Default)]
pub struct NodingIntersectionFinder {
    li: LineIntersector,
    find_all_intersections: bool,
    check_end_segments_only: bool,
    keep_intersections: bool,
    interior_intersections_only: bool,
    intersection: Option<Point<Real>>,
    intersection_segments: Option<[Point<Real>; 4]>,
    intersections: Vec<Point<Real>>,
    count: usize,
}

impl NodingIntersectionFinder {
    /// A finder stopping at the first intersection found.
    pub fn new(li: LineIntersector) -> Self {
        Self {
            li,
            keep_intersections: true,
            ..Default::default()
        }
    }

    /// A finder stopping at the first intersection found.
    pub fn any_intersection(li: LineIntersector) -> Self {
        Self::new(li)
    }

    /// A finder recording every intersection.
    pub fn all_intersections(li: LineIntersector) -> Self {
        let mut finder = Self::new(li);
        finder.set_find_all_intersections(true);
        finder
    }

    /// A finder recording every intersection interior to a segment, ignoring vertex
    /// coincidences.
    pub fn interior_intersections(li: LineIntersector) -> Self {
        let mut finder = Self::all_intersections(li);
        finder.set_interior_intersections_only(true);
        finder
    }

    /// A finder counting intersections without recording their locations.
    pub fn intersection_counter(li: LineIntersector) -> Self {
        let mut finder = Self::all_intersections(li);
        finder.set_keep_intersections(false);
        finder
    }

    /// A finder counting intersections interior to a segment without recording their
    /// locations.
    pub fn interior_intersection_counter(li: LineIntersector) -> Self {
        let mut finder = Self::interior_intersections(li);
        finder.set_keep_intersections(false);
        finder
    }

    /// Sets whether every intersection is searched for, instead of stopping at the first one.
    pub fn set_find_all_intersections(&mut self, find_all: bool) {
        self.find_all_intersections = find_all;
    }

    /// Sets whether only intersections interior to a segment are reported.
    pub fn set_interior_intersections_only(&mut self, interior_only: bool) {
        self.interior_intersections_only = interior_only;
    }

    /// Sets whether only pairs involving the first or last segment of a chain are tested.
    ///
    /// This is enough to check that chains which are already noded internally are noded
    /// against each other.
    pub fn set_check_end_segments_only(&mut self, end_segments_only: bool) {
        self.check_end_segments_only = end_segments_only;
    }

    /// Sets whether intersection locations are recorded in
    /// [`NodingIntersectionFinder::intersections`].
    pub fn set_keep_intersections(&mut self, keep: bool) {
        self.keep_intersections = keep;
    }

    /// Was an intersection found?
    pub fn has_intersection(&self) -> bool {
        self.intersection.is_some()
    }

    /// The location of the last intersection found.
    pub fn intersection(&self) -> Option<Point<Real>> {
        self.intersection
    }

    /// The endpoints of the two segments of the last intersection found.
    pub fn intersection_segments(&self) -> Option<&[Point<Real>; 4]> {
        self.intersection_segments.as_ref()
    }

    /// The locations of every intersection found, if they are kept.
    pub fn intersections(&self) -> &[Point<Real>] {
        &self.intersections
    }

    /// The number of intersections found.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Consumes this finder, returning the locations of the intersections found.
    pub fn into_intersections(self) -> Vec<Point<Real>> {
        self.intersections
    }
}

impl<S: SegmentString> IntersectionDetector<S> for NodingIntersectionFinder {
    fn process_intersections(
        &mut self,
        string0: &S,
        segment_index0: usize,
        string1: &S,
        segment_index1: usize,
    ) {
        if !self.find_all_intersections && self.has_intersection() {
            return;
        }

        let is_same_string = core::ptr::eq(string0, string1);
        if is_same_string && segment_index0 == segment_index1 {
            return;
        }

        if self.check_end_segments_only
            && !is_end_segment(string0, segment_index0)
            && !is_end_segment(string1, segment_index1)
        {
            return;
        }

        let p00 = string0.point(segment_index0);
        let p01 = string0.point(segment_index0 + 1);
        let p10 = string1.point(segment_index1);
        let p11 = string1.point(segment_index1 + 1);
        let is_end00 = segment_index0 == 0;
        let is_end01 = segment_index0 + 2 == string0.len();
        let is_end10 = segment_index1 == 0;
        let is_end11 = segment_index1 + 2 == string1.len();

        self.li.compute_intersection(&p00, &p01, &p10, &p11);
        let is_interior_intersection =
            self.li.has_intersection() && self.li.is_interior_intersection();

        let mut is_interior_vertex_intersection = false;
        if !self.interior_intersections_only {
            let is_adjacent = is_same_string && segment_index0.abs_diff(segment_index1) <= 1;
            is_interior_vertex_intersection = !is_adjacent
                && (is_interior_vertex_pair(&p00, &p10, is_end00, is_end10)
                    || is_interior_vertex_pair(&p00, &p11, is_end00, is_end11)
                    || is_interior_vertex_pair(&p01, &p10, is_end01, is_end10)
                    || is_interior_vertex_pair(&p01, &p11, is_end01, is_end11));
        }

        if is_interior_intersection || is_interior_vertex_intersection {
            // Equal vertices always intersect, so the oracle reports at least one point.
            let pt = self.li.intersections().first().copied().unwrap_or(p00);
            self.intersection_segments = Some([p00, p01, p10, p11]);
            self.intersection = Some(pt);
            if self.keep_intersections {
                self.intersections.push(pt);
            }
            self.count += 1;
        }
    }

    fn is_done(&self) -> bool {
        !self.find_all_intersections && self.has_intersection()
    }
}

/// Are `p0` and `p1` equal, with at least one of them not being a chain endpoint?
fn is_interior_vertex_pair(p0: &Point<Real>, p1: &Point<Real>, is_end0: bool, is_end1: bool) -> bool {
    !(is_end0 && is_end1) && p0 == p1
}

fn is_end_segment<S: SegmentString>(string: &S, index: usize) -> bool {
    index == 0 || index + 2 >= string.len()
}
