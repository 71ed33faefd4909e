use super::{IntersectionDetector, SegmentString};
use crate::math::{Point, Real};
use crate::utils::LineIntersector;

/// Detects whether any intersection exists between segments, and of which kind.
///
/// By default the search stops at the first intersection. It can be told to keep looking for
/// a proper intersection, or for both a proper and a non-proper one.
#[derive(Clone, Debug, Default)]
pub struct SegmentIntersectionDetector {
    li: LineIntersector,
    find_proper: bool,
    find_all_types: bool,
    has_intersection: bool,
    has_proper_intersection: bool,
    has_non_proper_intersection: bool,
    intersection: Option<Point<Real>>,
    intersection_segments: Option<[Point<Real>; 4]>,
}

impl SegmentIntersectionDetector {
    /// A detector using the given line intersector.
    pub fn new(li: LineIntersector) -> Self {
        Self {
            li,
            ..Default::default()
        }
    }

    /// Sets whether the search continues until a proper intersection is found.
    ///
    /// The recorded location is then the one of a proper intersection whenever one exists.
    pub fn set_find_proper(&mut self, find_proper: bool) {
        self.find_proper = find_proper;
    }

    /// Sets whether the search continues until both a proper and a non-proper intersection
    /// are found.
    pub fn set_find_all_intersection_types(&mut self, find_all_types: bool) {
        self.find_all_types = find_all_types;
    }

    /// Was any intersection found?
    pub fn has_intersection(&self) -> bool {
        self.has_intersection
    }

    /// Was a proper intersection found?
    pub fn has_proper_intersection(&self) -> bool {
        self.has_proper_intersection
    }

    /// Was a non-proper intersection found?
    pub fn has_non_proper_intersection(&self) -> bool {
        self.has_non_proper_intersection
    }

    /// The location of the intersection found.
    pub fn intersection(&self) -> Option<Point<Real>> {
        self.intersection
    }

    /// The endpoints of the two segments of the intersection found.
    pub fn intersection_segments(&self) -> Option<&[Point<Real>; 4]> {
        self.intersection_segments.as_ref()
    }
}

impl<S: SegmentString> IntersectionDetector<S> for SegmentIntersectionDetector {
    fn process_intersections(
        &mut self,
        string0: &S,
        segment_index0: usize,
        string1: &S,
        segment_index1: usize,
    ) {
        if core::ptr::eq(string0, string1) && segment_index0 == segment_index1 {
            return;
        }

        let p00 = string0.point(segment_index0);
        let p01 = string0.point(segment_index0 + 1);
        let p10 = string1.point(segment_index1);
        let p11 = string1.point(segment_index1 + 1);

        self.li.compute_intersection(&p00, &p01, &p10, &p11);
        if !self.li.has_intersection() {
            return;
        }

        self.has_intersection = true;
        let is_proper = self.li.is_proper();
        if is_proper {
            self.has_proper_intersection = true;
        } else {
            self.has_non_proper_intersection = true;
        }

        let save_location = !self.find_proper || is_proper;
        if self.intersection.is_none() || save_location {
            self.intersection = self.li.intersections().first().copied();
            self.intersection_segments = Some([p00, p01, p10, p11]);
        }
    }

    fn is_done(&self) -> bool {
        if self.find_all_types {
            self.has_proper_intersection && self.has_non_proper_intersection
        } else if self.find_proper {
            self.has_proper_intersection
        } else {
            self.has_intersection
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noding::BasicSegmentString;

    fn string(coords: &[[Real; 2]]) -> BasicSegmentString<()> {
        BasicSegmentString::new(coords.iter().map(|c| Point::new(c[0], c[1])).collect(), ())
    }

    #[test]
    fn proper_search_continues_past_touches() {
        let a = string(&[[0.0, 0.0], [10.0, 0.0]]);
        let touching = string(&[[5.0, 0.0], [5.0, 5.0]]);
        let crossing = string(&[[7.0, -1.0], [7.0, 1.0]]);

        let mut detector = SegmentIntersectionDetector::new(LineIntersector::new());
        detector.process_intersections(&a, 0, &touching, 0);
        assert!(IntersectionDetector::<BasicSegmentString<()>>::is_done(&detector));
        assert!(detector.has_non_proper_intersection());

        let mut detector = SegmentIntersectionDetector::new(LineIntersector::new());
        detector.set_find_proper(true);
        detector.process_intersections(&a, 0, &touching, 0);
        assert!(!IntersectionDetector::<BasicSegmentString<()>>::is_done(&detector));
        assert_eq!(detector.intersection(), Some(Point::new(5.0, 0.0)));

        detector.process_intersections(&a, 0, &crossing, 0);
        assert!(IntersectionDetector::<BasicSegmentString<()>>::is_done(&detector));
        assert!(detector.has_proper_intersection());
        assert_eq!(detector.intersection(), Some(Point::new(7.0, 0.0)));
    }

    #[test]
    fn all_types() {
        let a = string(&[[0.0, 0.0], [10.0, 0.0]]);
        let crossing = string(&[[7.0, -1.0], [7.0, 1.0]]);
        let touching = string(&[[5.0, 0.0], [5.0, 5.0]]);

        let mut detector = SegmentIntersectionDetector::new(LineIntersector::new());
        detector.set_find_all_intersection_types(true);
        detector.process_intersections(&a, 0, &crossing, 0);
        assert!(!IntersectionDetector::<BasicSegmentString<()>>::is_done(&detector));
        detector.process_intersections(&a, 0, &touching, 0);
        assert!(IntersectionDetector::<BasicSegmentString<()>>::is_done(&detector));
    }
}
