//! Direction sectors and the robust ordering of points along a segment.

use crate::math::{Point, Real};
use core::cmp::Ordering;

/// One of the eight 45° sectors a segment direction can belong to.
///
/// Sectors are numbered counter-clockwise starting from the positive x axis. Axis-aligned
/// directions belong to `Ene`, `Nne`, `Wnw` and `Sse`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Octant {
    /// East-north-east: `dx >= dy >= 0`.
    Ene = 0,
    /// North-north-east: `dy > dx >= 0`.
    Nne = 1,
    /// North-north-west.
    Nnw = 2,
    /// West-north-west.
    Wnw = 3,
    /// West-south-west.
    Wsw = 4,
    /// South-south-west.
    Ssw = 5,
    /// South-south-east.
    Sse = 6,
    /// East-south-east.
    Ese = 7,
}

impl Octant {
    /// The octant of the direction `(dx, dy)`, or `None` for the zero vector.
    pub fn from_direction(dx: Real, dy: Real) -> Option<Octant> {
        if dx == 0.0 && dy == 0.0 {
            return None;
        }

        let adx = dx.abs();
        let ady = dy.abs();

        let octant = if dx >= 0.0 {
            if dy >= 0.0 {
                if adx >= ady {
                    Octant::Ene
                } else {
                    Octant::Nne
                }
            } else if adx >= ady {
                Octant::Ese
            } else {
                Octant::Sse
            }
        } else if dy >= 0.0 {
            if adx >= ady {
                Octant::Wnw
            } else {
                Octant::Nnw
            }
        } else if adx >= ady {
            Octant::Wsw
        } else {
            Octant::Ssw
        };

        Some(octant)
    }

    /// The octant of the segment `p0 -> p1`, or `None` if both points are equal.
    pub fn from_segment(p0: &Point<Real>, p1: &Point<Real>) -> Option<Octant> {
        Self::from_direction(p1.x - p0.x, p1.y - p0.y)
    }

    /// Compares two points lying on, or close to, a segment with this octant.
    ///
    /// The point coming first when walking along the segment direction is `Less`. Only the
    /// signs of the coordinate differences are used, so the ordering stays consistent for
    /// points rounded slightly off the segment.
    pub fn compare(self, p0: &Point<Real>, p1: &Point<Real>) -> Ordering {
        if p0 == p1 {
            return Ordering::Equal;
        }

        let x_sign = relative_sign(p0.x, p1.x);
        let y_sign = relative_sign(p0.y, p1.y);

        match self {
            Octant::Ene => compare_value(x_sign, y_sign),
            Octant::Nne => compare_value(y_sign, x_sign),
            Octant::Nnw => compare_value(y_sign, x_sign.reverse()),
            Octant::Wnw => compare_value(x_sign.reverse(), y_sign),
            Octant::Wsw => compare_value(x_sign.reverse(), y_sign.reverse()),
            Octant::Ssw => compare_value(y_sign.reverse(), x_sign.reverse()),
            Octant::Sse => compare_value(y_sign.reverse(), x_sign),
            Octant::Ese => compare_value(x_sign, y_sign.reverse()),
        }
    }
}

/// The octant of the `index`-th segment of `pts`.
///
/// Zero-length segments and the past-the-end index are reported as [`Octant::Ene`] since every
/// point compares equal on them anyway.
pub(crate) fn segment_octant(pts: &[Point<Real>], index: usize) -> Octant {
    if index + 1 >= pts.len() {
        return Octant::Ene;
    }
    Octant::from_segment(&pts[index], &pts[index + 1]).unwrap_or(Octant::Ene)
}

#[inline]
fn relative_sign(x0: Real, x1: Real) -> Ordering {
    if x0 < x1 {
        Ordering::Less
    } else if x0 > x1 {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

#[inline]
fn compare_value(primary: Ordering, secondary: Ordering) -> Ordering {
    primary.then(secondary)
}
