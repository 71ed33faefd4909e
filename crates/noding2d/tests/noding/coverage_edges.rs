use super::string;
use noding2d::math::Real;
use noding2d::noding::{
    segment_count, BasicSegmentString, BoundaryChainNoder, BoundarySegmentNoder, Noder,
    SegmentExtractingNoder, SegmentString, UndirectedSegmentKey,
};
use oorandom::Rand32;
use std::collections::HashSet;

fn unit_square(x: Real, y: Real, id: usize) -> BasicSegmentString<usize> {
    string(
        &[[x, y], [x + 1.0, y], [x + 1.0, y + 1.0], [x, y + 1.0], [x, y]],
        id,
    )
}

/// A coverage made of a random subset of the cells of a grid.
fn random_cells(seed: u64, size: u32) -> Vec<BasicSegmentString<usize>> {
    let mut rng = Rand32::new(seed);
    let mut result = Vec::new();

    for i in 0..size {
        for j in 0..size {
            if rng.rand_range(0..3) != 0 {
                let id = result.len();
                result.push(unit_square(i as Real, j as Real, id));
            }
        }
    }

    result
}

fn shared_segment_count(strings: &[BasicSegmentString<usize>]) -> usize {
    let mut seen = HashSet::new();
    let mut shared = 0;

    for s in strings {
        for seg in s.points().windows(2) {
            if !seen.insert(UndirectedSegmentKey::new(&seg[0], &seg[1])) {
                shared += 1;
            }
        }
    }

    shared
}

#[test]
fn two_squares_sharing_an_edge() {
    let input = vec![unit_square(0.0, 0.0, 0), unit_square(1.0, 0.0, 1)];

    let segments = BoundarySegmentNoder::new().node(input.clone()).unwrap();
    assert_eq!(segments.len(), 6);
    let shared = UndirectedSegmentKey::new(&input[0].point(1), &input[0].point(2));
    assert!(segments
        .iter()
        .all(|s| UndirectedSegmentKey::new(&s.point(0), &s.point(1)) != shared));

    let chains = BoundaryChainNoder::new().node(input).unwrap();
    assert_eq!(segment_count(&chains), 6);
    assert!(chains.iter().all(|s| s
        .points()
        .windows(2)
        .all(|seg| UndirectedSegmentKey::new(&seg[0], &seg[1]) != shared)));
}

#[test]
fn boundary_parity() {
    for seed in [2, 5, 11, 17] {
        let input = random_cells(seed, 6);
        let total = segment_count(&input);
        let shared = shared_segment_count(&input);

        let segments = BoundarySegmentNoder::new().node(input.clone()).unwrap();
        assert_eq!(segments.len(), total - 2 * shared, "seed {}", seed);

        let chains = BoundaryChainNoder::new().node(input).unwrap();
        assert_eq!(segment_count(&chains), total - 2 * shared, "seed {}", seed);
    }
}

#[test]
fn boundary_chains_cover_the_boundary_segments() {
    let input = random_cells(23, 5);

    let key = |s: &[noding2d::math::Point<Real>]| UndirectedSegmentKey::new(&s[0], &s[1]);
    let segments: HashSet<_> = BoundarySegmentNoder::new()
        .node(input.clone())
        .unwrap()
        .iter()
        .map(|s| key(s.points()))
        .collect();
    let chain_segments: HashSet<_> = BoundaryChainNoder::new()
        .node(input)
        .unwrap()
        .iter()
        .flat_map(|s| s.points().windows(2).map(key).collect::<Vec<_>>())
        .collect();

    assert_eq!(segments, chain_segments);
}

#[test]
fn segments_are_extracted_in_order() {
    let input = vec![
        string(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]], 'a'),
        string(&[[5.0, 5.0], [6.0, 6.0]], 'b'),
    ];

    let result = SegmentExtractingNoder::new().node(input).unwrap();
    let data: Vec<_> = result.iter().map(|s| *s.data()).collect();
    assert_eq!(data, ['a', 'a', 'b']);
    assert!(result.iter().all(|s| s.len() == 2));
    assert_eq!(result[1].points()[0], result[0].points()[1]);
}
