use super::{NodingError, SegmentString};
use crate::math::{Point, Real};
use crate::utils::LineIntersector;

/// Checks that a set of chains is correctly noded, by testing every pair of segments.
///
/// This is much slower than [`FastNodingValidator`](super::FastNodingValidator) and meant for
/// testing and debugging. The checks run in this order, stopping at the first failure:
/// 1. no chain endpoint equals an interior vertex of a chain;
/// 2. no two segments have an intersection interior to one of them;
/// 3. no chain goes back to the vertex it just left (`a-b-a`).
pub struct NodingValidator<'a, S> {
    strings: &'a [S],
    li: LineIntersector,
}

impl<'a, S: SegmentString> NodingValidator<'a, S> {
    /// A validator for `strings`.
    pub fn new(strings: &'a [S]) -> Self {
        Self {
            strings,
            li: LineIntersector::new(),
        }
    }

    /// Checks that the chains are correctly noded.
    pub fn check_valid(&mut self) -> Result<(), NodingError> {
        self.check_endpoint_vertex_intersections()?;
        self.check_interior_intersections()?;
        self.check_collapses()
    }

    fn check_collapses(&self) -> Result<(), NodingError> {
        for string in self.strings {
            if let Some(w) = string.points().windows(3).find(|w| w[0] == w[2]) {
                return Err(NodingError::Collapse {
                    segment: [w[0], w[1], w[2]],
                });
            }
        }

        Ok(())
    }

    fn check_interior_intersections(&mut self) -> Result<(), NodingError> {
        for (i0, string0) in self.strings.iter().enumerate() {
            for (i1, string1) in self.strings.iter().enumerate() {
                for segment_index0 in 0..string0.len().saturating_sub(1) {
                    for segment_index1 in 0..string1.len().saturating_sub(1) {
                        if i0 == i1 && segment_index0 == segment_index1 {
                            continue;
                        }

                        self.check_segment_pair(string0, segment_index0, string1, segment_index1)?;
                    }
                }
            }
        }

        Ok(())
    }

    fn check_segment_pair(
        &mut self,
        string0: &S,
        segment_index0: usize,
        string1: &S,
        segment_index1: usize,
    ) -> Result<(), NodingError> {
        let p00 = string0.point(segment_index0);
        let p01 = string0.point(segment_index0 + 1);
        let p10 = string1.point(segment_index1);
        let p11 = string1.point(segment_index1 + 1);

        self.li.compute_intersection(&p00, &p01, &p10, &p11);
        if self.li.has_intersection()
            && (self.li.is_proper() || self.li.is_interior_intersection())
        {
            return Err(NodingError::NonNodedIntersection {
                segments: [p00, p01, p10, p11],
                coordinate: self.li.intersections().first().copied(),
            });
        }

        Ok(())
    }

    fn check_endpoint_vertex_intersections(&self) -> Result<(), NodingError> {
        for string in self.strings {
            let pts = string.points();
            if let (Some(first), Some(last)) = (pts.first(), pts.last()) {
                self.check_endpoint_vertex_intersection(first)?;
                self.check_endpoint_vertex_intersection(last)?;
            }
        }

        Ok(())
    }

    fn check_endpoint_vertex_intersection(&self, pt: &Point<Real>) -> Result<(), NodingError> {
        for string in self.strings {
            let pts = string.points();
            let interior = pts.get(1..pts.len().saturating_sub(1)).unwrap_or(&[]);
            if interior.contains(pt) {
                return Err(NodingError::EndpointVertexIntersection { coordinate: *pt });
            }
        }

        Ok(())
    }
}
