use super::{BasicSegmentString, Noder, NodingError, SegmentString};
use alloc::vec::Vec;

/// "Nodes" a set of chains by splitting them into their individual segments.
///
/// No intersection is computed: this is only correct if the input is already fully noded,
/// e.g. the edges of a valid polygonal coverage. It is useful to feed such input to
/// algorithms expecting noded segments, in linear time.
#[derive(Clone, Debug)]
pub struct SegmentExtractingNoder<D> {
    segments: Vec<BasicSegmentString<D>>,
}

impl<D> Default for SegmentExtractingNoder<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> SegmentExtractingNoder<D> {
    /// A new segment-extracting noder.
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }
}

impl<D: Clone> Noder<D> for SegmentExtractingNoder<D> {
    fn compute_nodes(&mut self, strings: Vec<BasicSegmentString<D>>) -> Result<(), NodingError> {
        self.segments = strings
            .iter()
            .flat_map(|s| {
                s.points()
                    .windows(2)
                    .map(|seg| BasicSegmentString::new(seg.to_vec(), s.data().clone()))
            })
            .collect();
        Ok(())
    }

    fn noded_substrings(&self) -> Vec<BasicSegmentString<D>> {
        self.segments.clone()
    }
}
