use noding2d::math::{Point, Real};
use noding2d::noding::{BasicSegmentString, SegmentString};
use noding2d::utils::LineIntersector;
use oorandom::Rand32;

mod coverage_edges;
mod noder_scenarios;
mod noding_properties;
mod octant_ordering;

pub fn string<D>(coords: &[[Real; 2]], data: D) -> BasicSegmentString<D> {
    BasicSegmentString::new(coords.iter().map(|c| Point::new(c[0], c[1])).collect(), data)
}

/// Random segments with integer endpoints, either axis-aligned or at 45°, so that every
/// intersection point is exactly representable.
pub fn random_segments(seed: u64, count: usize, extent: u32) -> Vec<BasicSegmentString<usize>> {
    let mut rng = Rand32::new(seed);
    let mut result = Vec::with_capacity(count);

    while result.len() < count {
        let x = rng.rand_range(0..extent) as Real;
        let y = rng.rand_range(0..extent) as Real;
        let len = rng.rand_range(1..extent / 2) as Real;
        let (dx, dy) = match rng.rand_range(0..4) {
            0 => (len, 0.0),
            1 => (0.0, len),
            2 => (len, len),
            _ => (len, -len),
        };
        let id = result.len();
        result.push(string(&[[x, y], [x + dx, y + dy]], id));
    }

    result
}

/// Every intersection point between two distinct input chains.
pub fn brute_force_intersections<S: SegmentString>(strings: &[S]) -> Vec<Point<Real>> {
    let mut li = LineIntersector::new();
    let mut result = Vec::new();

    for (i, s0) in strings.iter().enumerate() {
        for s1 in &strings[i + 1..] {
            for seg0 in s0.points().windows(2) {
                for seg1 in s1.points().windows(2) {
                    li.compute_intersection(&seg0[0], &seg0[1], &seg1[0], &seg1[1]);
                    result.extend_from_slice(li.intersections());
                }
            }
        }
    }

    result
}

/// The endpoints of every chain, sorted lexicographically.
pub fn sorted_endpoints<S: SegmentString>(strings: &[S]) -> Vec<Point<Real>> {
    let mut result: Vec<_> = strings
        .iter()
        .filter(|s| !s.is_empty())
        .flat_map(|s| [s.point(0), s.point(s.len() - 1)])
        .collect();
    result.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    result
}
