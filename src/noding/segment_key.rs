use crate::math::{Point, Real};
use crate::utils::SortedPair;
use ordered_float::OrderedFloat;

/// A point usable as a hash key.
///
/// `-0.0` and `0.0` are equal keys.
pub type PointKey = [OrderedFloat<Real>; 2];

/// The hash key of a point.
#[inline]
pub fn point_key(pt: &Point<Real>) -> PointKey {
    [OrderedFloat(pt.x), OrderedFloat(pt.y)]
}

/// A segment usable as a hash key, ignoring its direction.
///
/// The keys of `[a, b]` and `[b, a]` are equal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct UndirectedSegmentKey(SortedPair<PointKey>);

impl UndirectedSegmentKey {
    /// The key of the segment `[p0, p1]`.
    pub fn new(p0: &Point<Real>, p1: &Point<Real>) -> Self {
        Self(SortedPair::new(point_key(p0), point_key(p1)))
    }

    /// The endpoints of the segment, lexicographically smallest first.
    pub fn endpoints(&self) -> [Point<Real>; 2] {
        let [[x0, y0], [x1, y1]] = *self.0.as_array();
        [
            Point::new(x0.into_inner(), y0.into_inner()),
            Point::new(x1.into_inner(), y1.into_inner()),
        ]
    }
}
