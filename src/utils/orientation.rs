//! Robust orientation predicate.

use super::DoubleDouble;
use crate::math::{Point, Real};

/// Relative error bound of the floating-point filter of [`orientation_index`].
pub const DP_SAFE_EPSILON: Real = 1e-15;

/// The orientation of a point relative to a directed segment.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// The point lies on the right of the segment.
    Clockwise,
    /// The point lies on the line supporting the segment.
    Collinear,
    /// The point lies on the left of the segment.
    CounterClockwise,
}

impl Orientation {
    /// Converts a sign into an orientation.
    #[inline]
    pub fn from_sign(sign: i32) -> Self {
        match sign.signum() {
            -1 => Orientation::Clockwise,
            0 => Orientation::Collinear,
            _ => Orientation::CounterClockwise,
        }
    }

    /// The sign of this orientation: `-1`, `0`, or `1`.
    #[inline]
    pub fn signum(self) -> i32 {
        match self {
            Orientation::Clockwise => -1,
            Orientation::Collinear => 0,
            Orientation::CounterClockwise => 1,
        }
    }

    /// Is this the collinear orientation?
    #[inline]
    pub fn is_collinear(self) -> bool {
        self == Orientation::Collinear
    }
}

/// The orientation of `q` relative to the directed segment `p1 -> p2`.
///
/// The result is exact for finite inputs: a fast floating-point filter decides most cases and
/// the remaining ones are evaluated with double-double arithmetic.
pub fn orientation_index(p1: &Point<Real>, p2: &Point<Real>, q: &Point<Real>) -> Orientation {
    if let Some(orientation) = orientation_index_filter(p1, p2, q) {
        return orientation;
    }

    let dx1 = DoubleDouble::difference(p2.x, p1.x);
    let dy1 = DoubleDouble::difference(p2.y, p1.y);
    let dx2 = DoubleDouble::difference(q.x, p2.x);
    let dy2 = DoubleDouble::difference(q.y, p2.y);
    Orientation::from_sign((dx1 * dy2 - dy1 * dx2).signum())
}

/// Computes the orientation with plain floats when the result is certainly correct.
fn orientation_index_filter(
    pa: &Point<Real>,
    pb: &Point<Real>,
    pc: &Point<Real>,
) -> Option<Orientation> {
    let detleft = (pa.x - pc.x) * (pb.y - pc.y);
    let detright = (pa.y - pc.y) * (pb.x - pc.x);
    let det = detleft - detright;

    let detsum = if detleft > 0.0 {
        if detright <= 0.0 {
            return Some(sign_of(det));
        }
        detleft + detright
    } else if detleft < 0.0 {
        if detright >= 0.0 {
            return Some(sign_of(det));
        }
        -detleft - detright
    } else {
        return Some(sign_of(det));
    };

    let err_bound = DP_SAFE_EPSILON * detsum;
    if det >= err_bound || -det >= err_bound {
        return Some(sign_of(det));
    }

    None
}

#[inline]
fn sign_of(x: Real) -> Orientation {
    if x > 0.0 {
        Orientation::CounterClockwise
    } else if x < 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_orientations() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);
        assert_eq!(
            orientation_index(&a, &b, &Point::new(5.0, 1.0)),
            Orientation::CounterClockwise
        );
        assert_eq!(
            orientation_index(&a, &b, &Point::new(5.0, -1.0)),
            Orientation::Clockwise
        );
        assert_eq!(
            orientation_index(&a, &b, &Point::new(20.0, 0.0)),
            Orientation::Collinear
        );
    }

    #[test]
    fn near_collinear_points_are_consistent() {
        // The three points are exactly collinear when evaluated with exact arithmetic.
        let p1 = Point::new(0.1, 0.1);
        let p2 = Point::new(0.3, 0.3);
        let q = Point::new(0.2, 0.2);

        let o1 = orientation_index(&p1, &p2, &q);
        let o2 = orientation_index(&p2, &q, &p1);
        let o3 = orientation_index(&q, &p1, &p2);
        assert_eq!(o1, o2);
        assert_eq!(o2, o3);
    }

    #[test]
    fn orientation_is_antisymmetric() {
        let p1 = Point::new(1.0e10, 1.0e-10);
        let p2 = Point::new(-3.0e-7, 7.0e5);
        let q = Point::new(12.5, 0.1 + 0.2);
        let a = orientation_index(&p1, &p2, &q);
        let b = orientation_index(&p2, &p1, &q);
        assert_eq!(a.signum(), -b.signum());
    }
}
