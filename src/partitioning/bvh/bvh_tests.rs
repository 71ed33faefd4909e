use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::{Point, Real, Vector};
use crate::partitioning::Bvh;
use alloc::vec::Vec;

fn make_test_aabb(i: usize) -> Aabb {
    let center: Point<Real> = Vector::repeat(i as Real).into();
    Aabb::new(center - Vector::repeat(1.0), center + Vector::repeat(1.0))
}

fn brute_force_query(leaves: &[Aabb], query: &Aabb) -> Vec<u32> {
    leaves
        .iter()
        .enumerate()
        .filter(|(_, leaf)| leaf.intersects(query))
        .map(|(i, _)| i as u32)
        .collect()
}

#[test]
fn bvh_query_matches_brute_force() {
    for len in 0..=100 {
        let leaves: Vec<_> = (0..len).map(make_test_aabb).collect();
        let bvh = Bvh::from_leaves(&leaves);
        assert_eq!(bvh.leaf_count() as usize, len);

        for q in 0..len + 2 {
            let query = make_test_aabb(q).loosened(0.25);
            let mut found: Vec<_> = bvh.intersect_aabb(&query).collect();
            found.sort_unstable();
            assert_eq!(found, brute_force_query(&leaves, &query), "len: {len}, query: {q}");
        }
    }
}

#[test]
fn bvh_handles_coincident_leaves() {
    // All centroids equal: the binned build must fall back to a median split.
    let leaves: Vec<_> = (0..17).map(|_| make_test_aabb(3)).collect();
    let bvh = Bvh::from_leaves(&leaves);
    let query = make_test_aabb(3);
    assert_eq!(bvh.intersect_aabb(&query).count(), 17);
    assert_eq!(bvh.root_aabb(), make_test_aabb(3));
}

#[test]
fn bvh_query_on_flat_leaves() {
    // Axis-aligned segment envelopes have a zero extent along one axis.
    let leaves: Vec<_> = (0..50)
        .map(|i| {
            let x = i as Real;
            Aabb::from_segment(&Point::new(x, 0.0), &Point::new(x + 0.5, 0.0))
        })
        .collect();
    let bvh = Bvh::from_leaves(&leaves);
    let query = Aabb::from_segment(&Point::new(10.25, -1.0), &Point::new(10.25, 1.0));
    assert_eq!(bvh.intersect_aabb(&query).collect::<Vec<_>>(), [10]);
}

#[test]
fn bvh_root_aabb_spans_every_leaf() {
    assert_eq!(Bvh::from_leaves(&[]).root_aabb(), Aabb::new_invalid());

    for len in 1..=4 {
        let leaves: Vec<_> = (0..len).map(make_test_aabb).collect();
        let bvh = Bvh::from_leaves(&leaves);
        let expected = Aabb::new(Point::new(-1.0, -1.0), Point::new(len as Real, len as Real));
        assert_eq!(bvh.root_aabb(), expected, "len: {len}");
    }
}
