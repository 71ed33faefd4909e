use super::{BasicSegmentString, Noder, NodingError, SegmentString, UndirectedSegmentKey};
use crate::utils::hashmap::{Entry, HashMap};
use alloc::vec::Vec;

/// Extracts the boundary segments of a polygonal coverage.
///
/// The input must be the rings of a valid coverage, which is already noded: two adjacent
/// polygons share exactly the same vertices along their common edges. A segment is on the
/// boundary if it appears an odd number of times, whatever its direction.
///
/// Each boundary segment is output as a two-point chain carrying the payload of the chain it
/// was first found in. Segments are sorted by chain, then by position in the chain.
#[derive(Clone, Debug)]
pub struct BoundarySegmentNoder<D> {
    segments: Vec<BasicSegmentString<D>>,
}

impl<D> Default for BoundarySegmentNoder<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> BoundarySegmentNoder<D> {
    /// A new boundary segment extractor.
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }
}

impl<D: Clone> Noder<D> for BoundarySegmentNoder<D> {
    fn compute_nodes(&mut self, strings: Vec<BasicSegmentString<D>>) -> Result<(), NodingError> {
        let mut segments: HashMap<UndirectedSegmentKey, (usize, usize)> = HashMap::default();

        for (i, string) in strings.iter().enumerate() {
            for (j, seg) in string.points().windows(2).enumerate() {
                match segments.entry(UndirectedSegmentKey::new(&seg[0], &seg[1])) {
                    Entry::Occupied(entry) => {
                        let _ = entry.remove();
                    }
                    Entry::Vacant(entry) => {
                        let _ = entry.insert((i, j));
                    }
                }
            }
        }

        let mut boundary: Vec<_> = segments.into_values().collect();
        boundary.sort_unstable();

        self.segments = boundary
            .into_iter()
            .map(|(i, j)| {
                let string = &strings[i];
                BasicSegmentString::new(
                    vec![string.point(j), string.point(j + 1)],
                    string.data().clone(),
                )
            })
            .collect();
        Ok(())
    }

    fn noded_substrings(&self) -> Vec<BasicSegmentString<D>> {
        self.segments.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Point, Real};

    fn ring(coords: &[[Real; 2]], data: u32) -> BasicSegmentString<u32> {
        BasicSegmentString::new(coords.iter().map(|c| Point::new(c[0], c[1])).collect(), data)
    }

    #[test]
    fn shared_edges_are_removed() {
        let strings = vec![
            ring(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0]], 0),
            ring(&[[1.0, 0.0], [2.0, 0.0], [2.0, 1.0], [1.0, 1.0], [1.0, 0.0]], 1),
        ];
        let num_segments = crate::noding::segment_count(&strings);

        let result = BoundarySegmentNoder::new().node(strings).unwrap();
        assert_eq!(result.len(), num_segments - 2);
        assert!(result.iter().all(|s| s.len() == 2));
        assert_eq!(
            result[1].points(),
            &[Point::new(1.0, 1.0), Point::new(0.0, 1.0)]
        );
        assert_eq!(result.iter().filter(|s| *s.data() == 1).count(), 3);
        assert!(!result
            .iter()
            .any(|s| s.points().contains(&Point::new(1.0, 0.0))
                && s.points().contains(&Point::new(1.0, 1.0))));
    }
}
