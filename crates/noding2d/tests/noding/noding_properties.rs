use super::{brute_force_intersections, random_segments, sorted_endpoints};
use noding2d::noding::snapround::SnapRoundingNoder;
use noding2d::noding::{
    FastNodingValidator, IteratedNoder, McIndexNoder, Noder, NodingValidator, SegmentString,
    SimpleNoder,
};
use noding2d::utils::PrecisionModel;

const SEEDS: [u64; 4] = [1, 7, 42, 1234];

#[test]
fn noded_output_is_valid() {
    for seed in SEEDS {
        let input = random_segments(seed, 40, 30);

        let results = [
            SimpleNoder::default().node(input.clone()).unwrap(),
            McIndexNoder::default().node(input.clone()).unwrap(),
            IteratedNoder::default().node(input.clone()).unwrap(),
            SnapRoundingNoder::new(PrecisionModel::fixed(1.0))
                .unwrap()
                .node(input.clone())
                .unwrap(),
        ];

        for result in &results {
            assert!(FastNodingValidator::new(result).is_valid(), "seed {}", seed);
        }
    }
}

#[test]
fn fast_and_exhaustive_validators_agree() {
    for seed in SEEDS {
        let input = random_segments(seed, 20, 20);
        let noded = McIndexNoder::default().node(input.clone()).unwrap();

        assert!(NodingValidator::new(&noded).check_valid().is_ok());
        assert!(FastNodingValidator::new(&noded).check_valid().is_ok());

        let crossings = brute_force_intersections(&input);
        let has_crossing = crossings
            .iter()
            .any(|pt| input.iter().all(|s| s.point(0) != *pt && s.point(1) != *pt));
        if has_crossing {
            assert!(NodingValidator::new(&input).check_valid().is_err());
            assert!(!FastNodingValidator::new(&input).is_valid());
        }
    }
}

#[test]
fn every_intersection_becomes_an_endpoint() {
    for seed in SEEDS {
        let input = random_segments(seed, 40, 30);
        let expected = brute_force_intersections(&input);

        let noded = McIndexNoder::default().node(input).unwrap();
        let endpoints = sorted_endpoints(&noded);

        for pt in expected {
            assert!(endpoints.contains(&pt), "seed {}: {:?} not noded", seed, pt);
        }
    }
}

#[test]
fn noding_is_idempotent() {
    for seed in SEEDS {
        let input = random_segments(seed, 40, 30);
        let once = McIndexNoder::default().node(input).unwrap();
        let twice = McIndexNoder::default().node(once.clone()).unwrap();
        assert_eq!(once, twice, "seed {}", seed);
    }
}

#[test]
fn brute_force_and_indexed_noders_agree() {
    for seed in SEEDS {
        let input = random_segments(seed, 50, 40);
        let simple = SimpleNoder::default().node(input.clone()).unwrap();
        let indexed = McIndexNoder::default().node(input).unwrap();

        assert_eq!(simple.len(), indexed.len(), "seed {}", seed);
        assert_eq!(sorted_endpoints(&simple), sorted_endpoints(&indexed), "seed {}", seed);
    }
}

#[test]
fn payloads_follow_their_chains() {
    let input = random_segments(3, 30, 20);
    let noded = McIndexNoder::default().node(input.clone()).unwrap();

    for chain in &noded {
        let parent = &input[*chain.data()];
        let (p0, p1) = (parent.point(0), parent.point(1));
        for pt in chain.points() {
            // Intersection points of these inputs are computed exactly.
            let t = (pt - p0).dot(&(p1 - p0)) / (p1 - p0).norm_squared();
            assert!((0.0..=1.0).contains(&t));
            assert_eq!((pt - p0).perp(&(p1 - p0)), 0.0);
        }
    }
}
