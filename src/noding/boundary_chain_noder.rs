use super::{
    point_key, BasicSegmentString, Noder, NodingError, PointKey, SegmentString,
    UndirectedSegmentKey,
};
use crate::utils::hashmap::{Entry, HashMap};
use crate::utils::hashset::HashSet;
use alloc::vec::Vec;

/// Extracts the boundary of a polygonal coverage as maximal chains.
///
/// The input must be the rings of a valid coverage, which is already noded. A segment is on
/// the boundary if it appears an odd number of times, whatever its direction. Consecutive
/// boundary segments of an input chain are merged into a single output chain, which is then
/// split at every node of the boundary: chain endpoints and interior vertices shared by
/// several chains.
///
/// Output chains follow the input order and carry the payload of their input chain.
#[derive(Clone, Debug)]
pub struct BoundaryChainNoder<D> {
    chains: Vec<BasicSegmentString<D>>,
}

impl<D> Default for BoundaryChainNoder<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> BoundaryChainNoder<D> {
    /// A new boundary chain extractor.
    pub fn new() -> Self {
        Self { chains: Vec::new() }
    }
}

impl<D: Clone> Noder<D> for BoundaryChainNoder<D> {
    fn compute_nodes(&mut self, strings: Vec<BasicSegmentString<D>>) -> Result<(), NodingError> {
        let is_boundary = boundary_flags(&strings);

        let mut chains = Vec::new();
        for (string, flags) in strings.iter().zip(&is_boundary) {
            extract_chains(string, flags, &mut chains);
        }

        let nodes = find_node_points(&chains);
        self.chains = chains
            .into_iter()
            .flat_map(|chain| split_at_nodes(chain, &nodes))
            .collect();
        Ok(())
    }

    fn noded_substrings(&self) -> Vec<BasicSegmentString<D>> {
        self.chains.clone()
    }
}

/// For every chain, flags the segments appearing an odd number of times in the set.
fn boundary_flags<D>(strings: &[BasicSegmentString<D>]) -> Vec<Vec<bool>> {
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

    let mut flags: Vec<Vec<bool>> = strings
        .iter()
        .map(|s| vec![false; s.len().saturating_sub(1)])
        .collect();
    for (i, j) in segments.into_values() {
        flags[i][j] = true;
    }

    flags
}

/// Pushes to `out` the maximal runs of consecutive boundary segments of `string`.
fn extract_chains<D: Clone>(
    string: &BasicSegmentString<D>,
    is_boundary: &[bool],
    out: &mut Vec<BasicSegmentString<D>>,
) {
    let mut end = 0;

    loop {
        let Some(start) = (end..is_boundary.len()).find(|i| is_boundary[*i]) else {
            return;
        };

        end = (start + 1..is_boundary.len())
            .find(|i| !is_boundary[*i])
            .unwrap_or(is_boundary.len());

        out.push(BasicSegmentString::new(
            string.points()[start..=end].to_vec(),
            string.data().clone(),
        ));
    }
}

/// The chain endpoints, and the interior vertices appearing more than once in `chains`.
fn find_node_points<D>(chains: &[BasicSegmentString<D>]) -> HashSet<PointKey> {
    let mut interior_vertices = HashSet::default();
    let mut nodes = HashSet::default();

    for chain in chains {
        let pts = chain.points();
        if let (Some(first), Some(last)) = (pts.first(), pts.last()) {
            let _ = nodes.insert(point_key(first));
            let _ = nodes.insert(point_key(last));
        }

        for pt in pts.iter().take(pts.len().saturating_sub(1)).skip(1) {
            let key = point_key(pt);
            if !interior_vertices.insert(key) {
                let _ = nodes.insert(key);
            }
        }
    }

    nodes
}

/// Splits `chain` at its interior vertices that are nodes.
fn split_at_nodes<D: Clone>(
    chain: BasicSegmentString<D>,
    nodes: &HashSet<PointKey>,
) -> Vec<BasicSegmentString<D>> {
    let pts = chain.points();
    let split_points: Vec<usize> = (1..pts.len().saturating_sub(1))
        .filter(|i| nodes.contains(&point_key(&pts[*i])))
        .collect();

    if split_points.is_empty() {
        return vec![chain];
    }

    let mut result = Vec::with_capacity(split_points.len() + 1);
    let mut start = 0;
    for end in split_points.into_iter().chain(core::iter::once(pts.len() - 1)) {
        result.push(BasicSegmentString::new(
            pts[start..=end].to_vec(),
            chain.data().clone(),
        ));
        start = end;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Point, Real};

    fn string(coords: &[[Real; 2]], data: u32) -> BasicSegmentString<u32> {
        BasicSegmentString::new(coords.iter().map(|c| Point::new(c[0], c[1])).collect(), data)
    }

    fn points(coords: &[[Real; 2]]) -> Vec<Point<Real>> {
        coords.iter().map(|c| Point::new(c[0], c[1])).collect()
    }

    #[test]
    fn two_squares_sharing_an_edge() {
        let strings = vec![
            string(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0]], 0),
            string(&[[1.0, 0.0], [2.0, 0.0], [2.0, 1.0], [1.0, 1.0], [1.0, 0.0]], 1),
        ];

        let result = BoundaryChainNoder::new().node(strings).unwrap();
        let chains: Vec<_> = result.iter().map(|s| s.points().to_vec()).collect();
        assert_eq!(
            chains,
            [
                points(&[[0.0, 0.0], [1.0, 0.0]]),
                points(&[[1.0, 1.0], [0.0, 1.0], [0.0, 0.0]]),
                points(&[[1.0, 0.0], [2.0, 0.0], [2.0, 1.0], [1.0, 1.0]]),
            ]
        );
        assert_eq!(crate::noding::segment_count(&result), 6);
    }

    #[test]
    fn chains_are_split_at_shared_interior_vertices() {
        // Two squares touching at (1, 1), which is an interior vertex of both rings.
        let strings = vec![
            string(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0]], 0),
            string(&[[2.0, 1.0], [2.0, 2.0], [1.0, 2.0], [1.0, 1.0], [2.0, 1.0]], 1),
        ];

        let result = BoundaryChainNoder::new().node(strings).unwrap();
        let chains: Vec<_> = result.iter().map(|s| (*s.data(), s.points().to_vec())).collect();
        assert_eq!(
            chains,
            [
                (0, points(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]])),
                (0, points(&[[1.0, 1.0], [0.0, 1.0], [0.0, 0.0]])),
                (1, points(&[[2.0, 1.0], [2.0, 2.0], [1.0, 2.0], [1.0, 1.0]])),
                (1, points(&[[1.0, 1.0], [2.0, 1.0]])),
            ]
        );
    }
}
