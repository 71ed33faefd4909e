use super::Octant;
use crate::math::{Point, Real};
use alloc::vec::Vec;

/// A chain of points, the line segments joining consecutive points, and an opaque payload.
///
/// The payload is carried from input chains to the chains resulting from their noding. It is
/// never inspected by noders.
pub trait SegmentString {
    /// The payload attached to this chain.
    type Data;

    /// The vertices of this chain.
    fn points(&self) -> &[Point<Real>];

    /// The payload attached to this chain.
    fn data(&self) -> &Self::Data;

    /// The number of vertices of this chain.
    #[inline]
    fn len(&self) -> usize {
        self.points().len()
    }

    /// Does this chain contain no vertex at all?
    #[inline]
    fn is_empty(&self) -> bool {
        self.points().is_empty()
    }

    /// The `i`-th vertex of this chain.
    #[inline]
    fn point(&self, i: usize) -> Point<Real> {
        self.points()[i]
    }

    /// Is the last vertex equal to the first one?
    fn is_closed(&self) -> bool {
        let pts = self.points();
        match (pts.first(), pts.last()) {
            (Some(first), Some(last)) => pts.len() > 1 && first == last,
            _ => false,
        }
    }

    /// The octant of the `index`-th segment.
    ///
    /// Zero-length segments and the past-the-end index are reported as [`Octant::Ene`].
    #[inline]
    fn segment_octant(&self, index: usize) -> Octant {
        super::octant::segment_octant(self.points(), index)
    }
}

/// A read-only chain of points carrying a payload.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct BasicSegmentString<D> {
    points: Vec<Point<Real>>,
    data: D,
}

impl<D> BasicSegmentString<D> {
    /// Creates a new chain from its vertices and payload.
    pub fn new(points: Vec<Point<Real>>, data: D) -> Self {
        Self { points, data }
    }

    /// Consumes this chain, returning its vertices and payload.
    pub fn into_parts(self) -> (Vec<Point<Real>>, D) {
        (self.points, self.data)
    }

    /// Consumes this chain, returning its vertices.
    pub fn into_points(self) -> Vec<Point<Real>> {
        self.points
    }
}

impl<D> SegmentString for BasicSegmentString<D> {
    type Data = D;

    #[inline]
    fn points(&self) -> &[Point<Real>] {
        &self.points
    }

    #[inline]
    fn data(&self) -> &D {
        &self.data
    }
}

/// The total number of segments of a set of chains.
pub fn segment_count<S: SegmentString>(strings: &[S]) -> usize {
    strings.iter().map(|s| s.len().saturating_sub(1)).sum()
}
