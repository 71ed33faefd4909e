use super::mc_index::MonotoneChainIndex;
use super::{
    noded_substrings, to_noded_strings, BasicSegmentString, IntersectionAdder, NodedSegmentString,
    Noder, NodingError, SegmentIntersector, SegmentStringPair,
};
use crate::math::Real;
use alloc::vec::Vec;

/// Nodes a set of chains in a single pass, using monotone chains and a [`Bvh`] to find
/// candidate segment pairs.
///
/// The candidate pairs are given to a [`SegmentIntersector`] which is responsible for adding
/// nodes to the chains. The default intersector is an [`IntersectionAdder`]. A single pass is
/// not guaranteed to produce a fully noded result when intersection points are rounded.
///
/// [`Bvh`]: crate::partitioning::Bvh
#[derive(Clone, Debug)]
pub struct McIndexNoder<D, I = IntersectionAdder> {
    intersector: I,
    overlap_tolerance: Real,
    noded_strings: Vec<NodedSegmentString<D>>,
}

impl<D> Default for McIndexNoder<D, IntersectionAdder> {
    fn default() -> Self {
        Self::new(IntersectionAdder::default())
    }
}

impl<D, I> McIndexNoder<D, I> {
    /// A noder processing candidate segment pairs with `intersector`.
    pub fn new(intersector: I) -> Self {
        Self {
            intersector,
            overlap_tolerance: 0.0,
            noded_strings: Vec::new(),
        }
    }

    /// Sets the distance under which segment envelopes are considered overlapping.
    ///
    /// A positive tolerance is needed by intersectors detecting segments that are close but do
    /// not intersect.
    pub fn with_overlap_tolerance(mut self, overlap_tolerance: Real) -> Self {
        self.overlap_tolerance = overlap_tolerance;
        self
    }

    /// The intersector processing candidate segment pairs.
    pub fn intersector(&self) -> &I {
        &self.intersector
    }

    /// Mutable reference to the intersector processing candidate segment pairs.
    pub fn intersector_mut(&mut self) -> &mut I {
        &mut self.intersector
    }

    /// Consumes this noder, returning its intersector.
    pub fn into_intersector(self) -> I {
        self.intersector
    }

    /// The chains noded by the last call to [`Noder::compute_nodes`].
    pub fn noded_strings(&self) -> &[NodedSegmentString<D>] {
        &self.noded_strings
    }

    /// Runs the intersector on every candidate segment pair of `strings`, including pairs of
    /// segments from the same chain.
    pub fn process(&mut self, strings: &mut [NodedSegmentString<D>])
    where
        I: SegmentIntersector<D>,
    {
        let index = MonotoneChainIndex::new(&*strings, self.overlap_tolerance);
        let mut candidates = Vec::new();

        for query_id in 0..index.chains().len() {
            candidates.clear();
            index.self_candidates(&*strings, query_id, &mut candidates);

            for pair in &candidates {
                self.intersector.process_intersections(
                    SegmentStringPair::from_slice(strings, pair.string0, pair.string1),
                    pair.segment0,
                    pair.segment1,
                );

                if self.intersector.is_done() {
                    return;
                }
            }
        }
    }
}

impl<D: Clone, I: SegmentIntersector<D>> Noder<D> for McIndexNoder<D, I> {
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
