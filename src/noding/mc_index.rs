//! Broad phase finding candidate segment pairs with a tree of monotone chains.

use super::monotone_chain::{monotone_chains, MonotoneChain};
use super::{IntersectionDetector, SegmentString};
use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::partitioning::Bvh;
use alloc::vec::Vec;

/// Two segments whose envelopes overlap, identified by chain and segment indices.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SegmentPair {
    /// Index of the chain of the first segment.
    pub string0: usize,
    /// Index of the first segment in its chain.
    pub segment0: usize,
    /// Index of the chain of the second segment.
    pub string1: usize,
    /// Index of the second segment in its chain.
    pub segment1: usize,
}

/// The monotone chains of a set of chains, organized in a static [`Bvh`].
///
/// The index does not keep any reference to the chains it was built from: the same chains
/// must be given to every query.
#[derive(Clone, Debug, Default)]
pub struct MonotoneChainIndex {
    chains: Vec<MonotoneChain>,
    tree: Bvh,
    overlap_tolerance: Real,
}

impl MonotoneChainIndex {
    /// Builds the index of the monotone chains of `strings`.
    ///
    /// Two segments are candidates if their envelopes are closer than `overlap_tolerance`.
    pub fn new<S: SegmentString>(strings: &[S], overlap_tolerance: Real) -> Self {
        let chains: Vec<_> = strings
            .iter()
            .enumerate()
            .flat_map(|(i, s)| monotone_chains(i, s.points()))
            .collect();
        let tree = Bvh::from_iter(
            chains
                .iter()
                .map(|c| c.loosened_aabb(overlap_tolerance))
                .enumerate(),
        );

        Self {
            chains,
            tree,
            overlap_tolerance,
        }
    }

    /// The monotone chains of this index.
    pub fn chains(&self) -> &[MonotoneChain] {
        &self.chains
    }

    /// The tolerance used to select candidate segments.
    pub fn overlap_tolerance(&self) -> Real {
        self.overlap_tolerance
    }

    /// The identifiers of the monotone chains with an envelope intersecting `aabb`.
    pub fn query<'a>(&'a self, aabb: &'a Aabb) -> impl Iterator<Item = usize> + 'a {
        self.tree.intersect_aabb(aabb).map(|id| id as usize)
    }

    /// Pushes to `out` the candidate pairs between the `query_id`-th monotone chain and every
    /// indexed chain with a larger identifier.
    ///
    /// Iterating this over every chain identifier yields each candidate pair of the set once.
    pub fn self_candidates<S: SegmentString>(
        &self,
        strings: &[S],
        query_id: usize,
        out: &mut Vec<SegmentPair>,
    ) {
        let query_chain = &self.chains[query_id];
        let query_aabb = query_chain.loosened_aabb(self.overlap_tolerance);
        let mut segments = Vec::new();

        for test_id in self.query(&query_aabb) {
            if test_id <= query_id {
                continue;
            }

            let test_chain = &self.chains[test_id];
            segments.clear();
            query_chain.compute_overlaps(
                strings[query_chain.string].points(),
                test_chain,
                strings[test_chain.string].points(),
                self.overlap_tolerance,
                &mut segments,
            );

            out.extend(segments.iter().map(|(segment0, segment1)| SegmentPair {
                string0: query_chain.string,
                segment0: *segment0,
                string1: test_chain.string,
                segment1: *segment1,
            }));
        }
    }

    /// Pushes to `out` the candidate pairs between the indexed chains and the monotone chain
    /// `query_chain` of a chain with vertices `query_pts`.
    ///
    /// In the resulting pairs, `string0` and `segment0` refer to the indexed set, while
    /// `string1` is the `string` field of `query_chain`.
    pub fn mutual_candidates<S: SegmentString>(
        &self,
        strings: &[S],
        query_chain: &MonotoneChain,
        query_pts: &[Point<Real>],
        out: &mut Vec<SegmentPair>,
    ) {
        let query_aabb = query_chain.loosened_aabb(self.overlap_tolerance);
        let mut segments = Vec::new();

        for test_id in self.query(&query_aabb) {
            let test_chain = &self.chains[test_id];
            segments.clear();
            test_chain.compute_overlaps(
                strings[test_chain.string].points(),
                query_chain,
                query_pts,
                self.overlap_tolerance,
                &mut segments,
            );

            out.extend(segments.iter().map(|(segment0, segment1)| SegmentPair {
                string0: test_chain.string,
                segment0: *segment0,
                string1: query_chain.string,
                segment1: *segment1,
            }));
        }
    }
}

/// Runs `detector` on every candidate segment pair of `strings`, without modifying them.
///
/// Segments of the same chain are tested against each other too.
pub fn process_self_intersections<S, I>(strings: &[S], detector: &mut I, overlap_tolerance: Real)
where
    S: SegmentString,
    I: IntersectionDetector<S>,
{
    let index = MonotoneChainIndex::new(strings, overlap_tolerance);
    let mut candidates = Vec::new();

    for query_id in 0..index.chains().len() {
        candidates.clear();
        index.self_candidates(strings, query_id, &mut candidates);

        for pair in &candidates {
            detector.process_intersections(
                &strings[pair.string0],
                pair.segment0,
                &strings[pair.string1],
                pair.segment1,
            );

            if detector.is_done() {
                return;
            }
        }
    }
}
