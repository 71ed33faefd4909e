use crate::math::{Point, Real};

/// The distance from `p` to the segment `[a, b]`.
///
/// Degenerate segments (`a == b`) are handled as a single point.
pub fn point_segment_distance(p: &Point<Real>, a: &Point<Real>, b: &Point<Real>) -> Real {
    if a == b {
        return na::distance(p, a);
    }

    let ab = b - a;
    let len2 = ab.norm_squared();
    let r = (p - a).dot(&ab) / len2;

    if r <= 0.0 {
        na::distance(p, a)
    } else if r >= 1.0 {
        na::distance(p, b)
    } else {
        let s = ((a.y - p.y) * ab.x - (a.x - p.x) * ab.y) / len2;
        s.abs() * len2.sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn distance_to_interior_and_endpoints() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);
        assert_relative_eq!(point_segment_distance(&Point::new(5.0, 3.0), &a, &b), 3.0);
        assert_relative_eq!(point_segment_distance(&Point::new(-3.0, 4.0), &a, &b), 5.0);
        assert_relative_eq!(point_segment_distance(&Point::new(13.0, -4.0), &a, &b), 5.0);
        assert_relative_eq!(point_segment_distance(&Point::new(3.0, 4.0), &a, &a), 5.0);
    }
}
