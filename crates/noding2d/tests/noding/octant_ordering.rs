use noding2d::math::{Point, Real, Vector};
use noding2d::noding::{NodedSegmentString, Octant, SegmentString};
use oorandom::Rand32;
use std::cmp::Ordering;

const DIRECTIONS: [(Real, Real, Octant); 8] = [
    (2.0, 1.0, Octant::Ene),
    (1.0, 2.0, Octant::Nne),
    (-1.0, 2.0, Octant::Nnw),
    (-2.0, 1.0, Octant::Wnw),
    (-2.0, -1.0, Octant::Wsw),
    (-1.0, -2.0, Octant::Ssw),
    (1.0, -2.0, Octant::Sse),
    (2.0, -1.0, Octant::Ese),
];

#[test]
fn ordering_along_a_segment_is_transitive() {
    let mut rng = Rand32::new(99);
    let origin = Point::new(3.0, -4.0);
    let mut noise = || (rng.rand_float() as Real - 0.5) * 1.0e-3;

    for (dx, dy, octant) in DIRECTIONS {
        let dir = Vector::new(dx, dy);
        assert_eq!(Octant::from_segment(&origin, &(origin + dir)), Some(octant));

        for k in 0..10 {
            let t = k as Real * 0.1;
            let a = origin + dir * t + Vector::new(noise(), noise());
            let b = origin + dir * (t + 0.05) + Vector::new(noise(), noise());
            let c = origin + dir * (t + 0.1) + Vector::new(noise(), noise());

            assert_eq!(octant.compare(&a, &b), Ordering::Less, "{:?}", octant);
            assert_eq!(octant.compare(&b, &c), Ordering::Less, "{:?}", octant);
            assert_eq!(octant.compare(&a, &c), Ordering::Less, "{:?}", octant);
            assert_eq!(octant.compare(&c, &a), Ordering::Greater, "{:?}", octant);
            assert_eq!(octant.compare(&b, &b), Ordering::Equal);
        }
    }
}

#[test]
fn nodes_are_ordered_along_each_segment() {
    for (dx, dy, _) in DIRECTIONS {
        let p1 = Point::new(10.0 * dx, 10.0 * dy);
        let mut string = NodedSegmentString::new(vec![Point::origin(), p1], ());

        // Nodes added in a scrambled order come out in the segment direction.
        for t in [0.7, 0.2, 0.9, 0.5, 0.1] {
            let _ = string.add_intersection(Point::from(p1.coords * t), 0);
        }

        let pts = string.noded_coordinates();
        assert_eq!(pts.len(), 7);
        assert!(pts
            .windows(2)
            .all(|w| (w[1] - w[0]).dot(&p1.coords) > 0.0));
        assert_eq!(string.noded_substrings().len(), 6);
        assert!(string.segment_octant(0) == Octant::from_segment(&pts[0], &p1).unwrap());
    }
}
