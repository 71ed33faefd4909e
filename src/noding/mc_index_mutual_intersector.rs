use super::mc_index::MonotoneChainIndex;
use super::monotone_chain::monotone_chains;
use super::{IntersectionDetector, SegmentString};
use crate::math::Real;
use alloc::vec::Vec;

/// Finds the intersections between a fixed base set of chains and other sets of chains.
///
/// The base set is indexed once, at construction. The index is never modified afterward, so
/// a single intersector can be shared and queried from several threads at once.
///
/// Intersections between chains of the same set are not searched for.
#[derive(Clone, Debug)]
pub struct McIndexSegmentSetMutualIntersector<'a, S> {
    base: &'a [S],
    index: MonotoneChainIndex,
}

impl<'a, S: SegmentString> McIndexSegmentSetMutualIntersector<'a, S> {
    /// Indexes the base set `base`.
    pub fn new(base: &'a [S]) -> Self {
        Self::with_overlap_tolerance(base, 0.0)
    }

    /// Indexes the base set `base`, with segment envelopes considered overlapping when closer
    /// than `overlap_tolerance`.
    pub fn with_overlap_tolerance(base: &'a [S], overlap_tolerance: Real) -> Self {
        Self {
            base,
            index: MonotoneChainIndex::new(base, overlap_tolerance),
        }
    }

    /// The indexed base set.
    pub fn base(&self) -> &'a [S] {
        self.base
    }

    /// Runs `detector` on every candidate segment pair made of a segment of the base set and a
    /// segment of `targets`.
    ///
    /// The base segment is always given first to the detector.
    pub fn process<I: IntersectionDetector<S>>(&self, targets: &[S], detector: &mut I) {
        let mut candidates = Vec::new();

        for (i, target) in targets.iter().enumerate() {
            for chain in monotone_chains(i, target.points()) {
                candidates.clear();
                self.index
                    .mutual_candidates(self.base, &chain, target.points(), &mut candidates);

                for pair in &candidates {
                    detector.process_intersections(
                        &self.base[pair.string0],
                        pair.segment0,
                        &targets[pair.string1],
                        pair.segment1,
                    );

                    if detector.is_done() {
                        return;
                    }
                }
            }
        }
    }
}
