use super::{SnappingIntersectionAdder, SnappingPointIndex};
use crate::math::{Point, Real};
use crate::noding::{
    noded_substrings, BasicSegmentString, McIndexNoder, NodedSegmentString, Noder, NodingError,
    SegmentString,
};
use alloc::vec::Vec;

/// One vertex out of `SEED_SIZE_FACTOR` of every chain is used to seed the snapping index.
const SEED_SIZE_FACTOR: usize = 100;

/// The inverse of the golden ratio, stepping a low-discrepancy sequence.
const PHI_INV: Real = 0.618_033_988_749_894_8;

/// Nodes a set of chains, snapping vertices and intersection points within a tolerance.
///
/// Every vertex is first snapped to the vertices seen before it (the snapping index is seeded
/// with a sample of the vertices of each chain, so the result depends less on the input
/// order), and repeated vertices are removed. A single noding pass then adds nodes at proper
/// intersections, snapped to the same index, and at vertices lying close to another segment.
///
/// The result is usually, but not always, fully noded.
#[derive(Clone, Debug)]
pub struct SnappingNoder<D> {
    snap_tolerance: Real,
    snap_index: SnappingPointIndex,
    noded_strings: Vec<BasicSegmentString<D>>,
}

impl<D> SnappingNoder<D> {
    /// A noder snapping points closer than `snap_tolerance`.
    pub fn new(snap_tolerance: Real) -> Self {
        Self {
            snap_tolerance,
            snap_index: SnappingPointIndex::new(snap_tolerance),
            noded_strings: Vec::new(),
        }
    }

    /// The snapping tolerance.
    pub fn snap_tolerance(&self) -> Real {
        self.snap_tolerance
    }

    /// The index of the snapped points of the last noding.
    pub fn snap_index(&self) -> &SnappingPointIndex {
        &self.snap_index
    }

    fn seed_snap_index(&mut self, strings: &[BasicSegmentString<D>]) {
        for string in strings {
            let pts = string.points();
            let mut rand = 0.0;
            for _ in 0..pts.len() / SEED_SIZE_FACTOR {
                rand = quasirandom(rand);
                let index = (pts.len() as Real * rand) as usize;
                let _ = self.snap_index.snap(pts[index]);
            }
        }
    }

    fn snap_vertices(&mut self, string: BasicSegmentString<D>) -> NodedSegmentString<D> {
        let (pts, data) = string.into_parts();
        let mut snapped: Vec<Point<Real>> = pts
            .into_iter()
            .map(|pt| self.snap_index.snap(pt))
            .collect();
        snapped.dedup();
        NodedSegmentString::new(snapped, data)
    }
}

impl<D: Clone> Noder<D> for SnappingNoder<D> {
    fn compute_nodes(&mut self, strings: Vec<BasicSegmentString<D>>) -> Result<(), NodingError> {
        self.snap_index = SnappingPointIndex::new(self.snap_tolerance);
        self.seed_snap_index(&strings);
        let mut snapped: Vec<_> = strings
            .into_iter()
            .map(|s| self.snap_vertices(s))
            .collect();

        {
            let adder = SnappingIntersectionAdder::new(self.snap_tolerance, &mut self.snap_index);
            let mut noder =
                McIndexNoder::new(adder).with_overlap_tolerance(2.0 * self.snap_tolerance);
            noder.process(&mut snapped);
        }

        log::debug!(
            "Snapping noder merged vertices into {} distinct points.",
            self.snap_index.len()
        );
        self.noded_strings = noded_substrings(&snapped);
        Ok(())
    }

    fn noded_substrings(&self) -> Vec<BasicSegmentString<D>> {
        self.noded_strings.clone()
    }
}

/// The next value of the additive recurrence `x + PHI_INV mod 1`.
fn quasirandom(curr: Real) -> Real {
    let next = curr + PHI_INV;
    if next < 1.0 {
        next
    } else {
        next - next.floor()
    }
}
