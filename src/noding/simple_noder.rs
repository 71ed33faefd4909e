use super::{
    noded_substrings, to_noded_strings, BasicSegmentString, IntersectionAdder, NodedSegmentString,
    Noder, NodingError, SegmentIntersector, SegmentString, SegmentStringPair,
};
use alloc::vec::Vec;

/// Nodes a set of chains by testing every pair of segments.
///
/// This is quadratic in the number of segments and only meant as a reference for testing
/// faster noders.
#[derive(Clone, Debug)]
pub struct SimpleNoder<D, I = IntersectionAdder> {
    intersector: I,
    noded_strings: Vec<NodedSegmentString<D>>,
}

impl<D> Default for SimpleNoder<D, IntersectionAdder> {
    fn default() -> Self {
        Self::new(IntersectionAdder::default())
    }
}

impl<D, I> SimpleNoder<D, I> {
    /// A noder processing every segment pair with `intersector`.
    pub fn new(intersector: I) -> Self {
        Self {
            intersector,
            noded_strings: Vec::new(),
        }
    }

    /// The intersector processing segment pairs.
    pub fn intersector(&self) -> &I {
        &self.intersector
    }

    /// Runs the intersector on every ordered pair of segments of `strings`.
    pub fn process(&mut self, strings: &mut [NodedSegmentString<D>])
    where
        I: SegmentIntersector<D>,
    {
        for i0 in 0..strings.len() {
            for i1 in 0..strings.len() {
                let n0 = strings[i0].len().saturating_sub(1);
                let n1 = strings[i1].len().saturating_sub(1);

                for segment0 in 0..n0 {
                    for segment1 in 0..n1 {
                        self.intersector.process_intersections(
                            SegmentStringPair::from_slice(strings, i0, i1),
                            segment0,
                            segment1,
                        );

                        if self.intersector.is_done() {
                            return;
                        }
                    }
                }
            }
        }
    }
}

impl<D: Clone, I: SegmentIntersector<D>> Noder<D> for SimpleNoder<D, I> {
    fn compute_nodes(&mut self, strings: Vec<BasicSegmentString<D>>) -> Result<(), NodingError> {
        let mut noded = to_noded_strings(strings);
        self.process(&mut noded);
        self.noded_strings = noded;
        Ok(())
    }

    fn noded_substrings(&self) -> Vec<BasicSegmentString<D>> {
        noded_substrings(&self.noded_strings)
    }
}
