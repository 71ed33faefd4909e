//! Axis Aligned Bounding Box.

use crate::bounding_volume::BoundingVolume;
use crate::math::{Point, Real, Vector};

/// An Axis-Aligned Bounding Box (AABB).
///
/// This is the envelope type used everywhere in this crate: monotone chains, hot pixels and
/// snapping queries are all bounded by an `Aabb`.
///
/// # Structure
///
/// - **mins**: The point with the smallest coordinates on each axis (bottom-left corner)
/// - **maxs**: The point with the largest coordinates on each axis (top-right corner)
/// - **Invariant**: `mins.x ≤ maxs.x`, `mins.y ≤ maxs.y`
///
/// All the tests are closed: two boxes sharing only a corner intersect, and a box contains the
/// points lying on its boundary.
///
/// # Example
///
/// ```rust
/// use noding2d::bounding_volume::{Aabb, BoundingVolume};
/// use nalgebra::Point2;
///
/// let a = Aabb::from_segment(&Point2::new(0.0, 0.0), &Point2::new(2.0, 1.0));
/// let b = Aabb::from_segment(&Point2::new(2.0, 1.0), &Point2::new(3.0, -1.0));
///
/// assert!(a.intersects(&b));
/// assert_eq!(a.merged(&b).maxs, Point2::new(3.0, 1.0));
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Aabb {
    /// The point with minimum coordinates (bottom-left corner).
    ///
    /// Each component should be less than or equal to the corresponding component in `maxs`.
    pub mins: Point<Real>,

    /// The point with maximum coordinates (top-right corner).
    ///
    /// Each component should be greater than or equal to the corresponding component in `mins`.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates a new AABB from its minimum and maximum corners.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates an invalid AABB with inverted bounds.
    ///
    /// The resulting AABB has `mins` set to maximum values and `maxs` set to
    /// minimum values. This is useful as an initial value for AABB merging
    /// algorithms (similar to starting a min operation with infinity).
    #[inline]
    pub fn new_invalid() -> Self {
        Self::new(
            Vector::repeat(Real::MAX).into(),
            Vector::repeat(-Real::MAX).into(),
        )
    }

    /// The smallest AABB enclosing the segment `[p0, p1]`.
    #[inline]
    pub fn from_segment(p0: &Point<Real>, p1: &Point<Real>) -> Self {
        Self::new(p0.inf(p1), p0.sup(p1))
    }

    /// Creates a new AABB that tightly encloses a set of points.
    ///
    /// Returns an invalid AABB (see [`Aabb::new_invalid`]) if the iterator is empty.
    pub fn from_points<I>(pts: I) -> Self
    where
        I: IntoIterator<Item = Point<Real>>,
    {
        let mut result = Self::new_invalid();
        for pt in pts {
            result.take_point(pt);
        }
        result
    }

    /// Returns the center point of this AABB.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// The extents of this `Aabb`.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// The area of this `Aabb`.
    #[inline]
    pub fn volume(&self) -> Real {
        let extents = self.extents();
        extents.x * extents.y
    }

    /// The half perimeter of this `Aabb`.
    #[inline]
    pub fn half_perimeter(&self) -> Real {
        let extents = self.extents();
        extents.x + extents.y
    }

    /// Enlarges this `Aabb` so it also contains the point `pt`.
    pub fn take_point(&mut self, pt: Point<Real>) {
        self.mins = self.mins.coords.inf(&pt.coords).into();
        self.maxs = self.maxs.coords.sup(&pt.coords).into();
    }

    /// Checks whether this AABB contains a point, boundary included.
    #[inline]
    pub fn contains_local_point(&self, point: &Point<Real>) -> bool {
        point.x >= self.mins.x
            && point.x <= self.maxs.x
            && point.y >= self.mins.y
            && point.y <= self.maxs.y
    }

    /// Checks whether the envelope of the segment `[p0, p1]` intersects this AABB.
    #[inline]
    pub fn intersects_segment_envelope(&self, p0: &Point<Real>, p1: &Point<Real>) -> bool {
        self.intersects(&Aabb::from_segment(p0, p1))
    }
}

impl BoundingVolume for Aabb {
    #[inline]
    fn center(&self) -> Point<Real> {
        self.center()
    }

    #[inline]
    fn intersects(&self, other: &Aabb) -> bool {
        na::partial_le(&self.mins, &other.maxs) && na::partial_ge(&self.maxs, &other.mins)
    }

    #[inline]
    fn contains(&self, other: &Aabb) -> bool {
        na::partial_le(&self.mins, &other.mins) && na::partial_ge(&self.maxs, &other.maxs)
    }

    #[inline]
    fn merge(&mut self, other: &Aabb) {
        self.mins = self.mins.inf(&other.mins);
        self.maxs = self.maxs.sup(&other.maxs);
    }

    #[inline]
    fn merged(&self, other: &Aabb) -> Aabb {
        Aabb {
            mins: self.mins.inf(&other.mins),
            maxs: self.maxs.sup(&other.maxs),
        }
    }

    #[inline]
    fn loosen(&mut self, amount: Real) {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        self.mins += Vector::repeat(-amount);
        self.maxs += Vector::repeat(amount);
    }

    #[inline]
    fn loosened(&self, amount: Real) -> Aabb {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        Aabb {
            mins: self.mins + Vector::repeat(-amount),
            maxs: self.maxs + Vector::repeat(amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_envelope_is_direction_independent() {
        let a = Point::new(3.0, -1.0);
        let b = Point::new(-2.0, 4.0);
        assert_eq!(Aabb::from_segment(&a, &b), Aabb::from_segment(&b, &a));
        assert_eq!(Aabb::from_segment(&a, &b).mins, Point::new(-2.0, -1.0));
    }

    #[test]
    fn closed_intersection_tests() {
        let a = Aabb::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        let corner = Aabb::new(Point::new(1.0, 1.0), Point::new(2.0, 2.0));
        let apart = Aabb::new(Point::new(1.5, 0.0), Point::new(2.0, 1.0));

        assert!(a.intersects(&corner));
        assert!(!a.intersects(&apart));
        assert!(a.loosened(0.5).intersects(&apart));
        assert!(a.contains_local_point(&Point::new(1.0, 0.5)));
    }

    #[test]
    fn invalid_aabb_merges_to_the_other_operand() {
        let a = Aabb::new(Point::new(-1.0, 2.0), Point::new(3.0, 4.0));
        assert_eq!(Aabb::new_invalid().merged(&a), a);
        assert_eq!(
            Aabb::from_points([Point::new(3.0, 2.0), Point::new(-1.0, 4.0)]),
            a
        );
    }
}
