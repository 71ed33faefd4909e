use super::{process_self_intersections, NodingError, NodingIntersectionFinder, SegmentString};
use crate::math::{Point, Real};
use crate::utils::LineIntersector;
use alloc::vec::Vec;

/// Checks that a set of chains is correctly noded, using a spatial index.
///
/// The chains are correctly noded if no two segments have an intersection interior to one of
/// them, and no vertex interior to a chain coincides with another vertex. Chain endpoints may
/// coincide. Overlapping collinear segments are reported as intersections.
///
/// The check is run once, the first time a result is requested.
pub struct FastNodingValidator<'a, S> {
    strings: &'a [S],
    find_all_intersections: bool,
    finder: Option<NodingIntersectionFinder>,
}

impl<'a, S: SegmentString> FastNodingValidator<'a, S> {
    /// A validator for `strings`.
    pub fn new(strings: &'a [S]) -> Self {
        Self {
            strings,
            find_all_intersections: false,
            finder: None,
        }
    }

    /// Sets whether every intersection is searched for, instead of stopping at the first one.
    pub fn set_find_all_intersections(&mut self, find_all: bool) {
        self.find_all_intersections = find_all;
    }

    /// Is the set of chains correctly noded?
    pub fn is_valid(&mut self) -> bool {
        !self.execute().has_intersection()
    }

    /// The locations of the intersections found.
    pub fn intersections(&mut self) -> &[Point<Real>] {
        self.execute().intersections()
    }

    /// Checks that the set of chains is correctly noded, returning an error describing the
    /// first intersection found otherwise.
    pub fn check_valid(&mut self) -> Result<(), NodingError> {
        let finder = self.execute();
        match (finder.intersection_segments(), finder.has_intersection()) {
            (Some(segments), true) => {
                let error = NodingError::NonNodedIntersection {
                    segments: *segments,
                    coordinate: finder.intersection(),
                };
                log::debug!("Noding validation failed: {}", error);
                Err(error)
            }
            _ => Ok(()),
        }
    }

    fn execute(&mut self) -> &NodingIntersectionFinder {
        let strings = self.strings;
        let find_all = self.find_all_intersections;
        self.finder.get_or_insert_with(|| {
            let mut finder = NodingIntersectionFinder::new(LineIntersector::new());
            finder.set_find_all_intersections(find_all);
            process_self_intersections(strings, &mut finder, 0.0);
            finder
        })
    }
}

/// The locations of every intersection preventing `strings` from being correctly noded.
pub fn compute_intersections<S: SegmentString>(strings: &[S]) -> Vec<Point<Real>> {
    let mut validator = FastNodingValidator::new(strings);
    validator.set_find_all_intersections(true);
    validator.intersections().to_vec()
}
