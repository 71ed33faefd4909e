use super::{BasicSegmentString, FastNodingValidator, Noder, NodingError};
use alloc::vec::Vec;

/// Wraps a noder, checking that its output is correctly noded.
///
/// Noding fails with [`NodingError::NonNodedIntersection`] if an intersection remains in the
/// output of the wrapped noder.
#[derive(Clone, Debug)]
pub struct ValidatingNoder<N, D> {
    noder: N,
    noded_strings: Vec<BasicSegmentString<D>>,
}

impl<N, D> ValidatingNoder<N, D> {
    /// Wraps `noder`.
    pub fn new(noder: N) -> Self {
        Self {
            noder,
            noded_strings: Vec::new(),
        }
    }

    /// The wrapped noder.
    pub fn inner(&self) -> &N {
        &self.noder
    }
}

impl<D: Clone, N: Noder<D>> Noder<D> for ValidatingNoder<N, D> {
    fn compute_nodes(&mut self, strings: Vec<BasicSegmentString<D>>) -> Result<(), NodingError> {
        self.noded_strings.clear();
        self.noder.compute_nodes(strings)?;
        let noded = self.noder.noded_substrings();
        FastNodingValidator::new(&noded).check_valid()?;
        self.noded_strings = noded;
        Ok(())
    }

    fn noded_substrings(&self) -> Vec<BasicSegmentString<D>> {
        self.noded_strings.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Point;
    use crate::noding::{
        IntersectionDetector, McIndexNoder, SegmentIntersectionDetector, SegmentIntersector,
        SegmentStringPair, SimpleNoder,
    };

    fn strings() -> Vec<BasicSegmentString<()>> {
        vec![
            BasicSegmentString::new(vec![Point::new(0.0, 0.0), Point::new(10.0, 10.0)], ()),
            BasicSegmentString::new(vec![Point::new(0.0, 10.0), Point::new(10.0, 0.0)], ()),
        ]
    }

    #[test]
    fn correct_noding_passes() {
        let mut noder = ValidatingNoder::new(McIndexNoder::default());
        assert_eq!(noder.node(strings()).unwrap().len(), 4);
    }

    #[test]
    fn incorrect_noding_fails() {
        // A noder whose intersector never adds nodes returns its input unchanged.
        let detector = SimpleNoder::new(DetectOnly(SegmentIntersectionDetector::default()));
        let mut noder = ValidatingNoder::new(detector);
        let err = noder.node(strings()).unwrap_err();
        assert_eq!(err.coordinate(), Some(Point::new(5.0, 5.0)));
        assert!(noder.noded_substrings().is_empty());
    }

    struct DetectOnly(SegmentIntersectionDetector);

    impl<D> SegmentIntersector<D> for DetectOnly {
        fn process_intersections(
            &mut self,
            pair: SegmentStringPair<'_, D>,
            segment_index0: usize,
            segment_index1: usize,
        ) {
            self.0
                .process_intersections(pair.first(), segment_index0, pair.second(), segment_index1);
        }
    }
}
