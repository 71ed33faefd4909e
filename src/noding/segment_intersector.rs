//! Processing of candidate segment pairs found by the broad phase.

use super::{NodedSegmentString, SegmentString};

/// Mutable access to the one or two chains involved in a candidate segment pair.
///
/// Both segments may belong to the same chain, in which case only one mutable reference to
/// it exists.
pub enum SegmentStringPair<'a, D> {
    /// Both segments belong to the same chain.
    Same(&'a mut NodedSegmentString<D>),
    /// The segments belong to two distinct chains.
    Distinct(&'a mut NodedSegmentString<D>, &'a mut NodedSegmentString<D>),
}

impl<'a, D> SegmentStringPair<'a, D> {
    /// The pair made of the chains `strings[i0]` and `strings[i1]`.
    pub fn from_slice(strings: &'a mut [NodedSegmentString<D>], i0: usize, i1: usize) -> Self {
        use core::cmp::Ordering;

        match i0.cmp(&i1) {
            Ordering::Equal => SegmentStringPair::Same(&mut strings[i0]),
            Ordering::Less => {
                let (left, right) = strings.split_at_mut(i1);
                SegmentStringPair::Distinct(&mut left[i0], &mut right[0])
            }
            Ordering::Greater => {
                let (left, right) = strings.split_at_mut(i0);
                SegmentStringPair::Distinct(&mut right[0], &mut left[i1])
            }
        }
    }

    /// Do both segments belong to the same chain?
    #[inline]
    pub fn is_same(&self) -> bool {
        matches!(self, SegmentStringPair::Same(_))
    }

    /// The chain of the first segment.
    #[inline]
    pub fn first(&self) -> &NodedSegmentString<D> {
        match self {
            SegmentStringPair::Same(s) => s,
            SegmentStringPair::Distinct(s, _) => s,
        }
    }

    /// The chain of the second segment.
    #[inline]
    pub fn second(&self) -> &NodedSegmentString<D> {
        match self {
            SegmentStringPair::Same(s) => s,
            SegmentStringPair::Distinct(_, s) => s,
        }
    }

    /// Mutable reference to the chain of the first segment.
    #[inline]
    pub fn first_mut(&mut self) -> &mut NodedSegmentString<D> {
        match self {
            SegmentStringPair::Same(s) => s,
            SegmentStringPair::Distinct(s, _) => s,
        }
    }

    /// Mutable reference to the chain of the second segment.
    #[inline]
    pub fn second_mut(&mut self) -> &mut NodedSegmentString<D> {
        match self {
            SegmentStringPair::Same(s) => s,
            SegmentStringPair::Distinct(_, s) => s,
        }
    }
}

/// Processes candidate segment pairs, recording nodes into the chains they belong to.
///
/// Candidates may be false positives: implementors are responsible for computing the actual
/// intersection.
pub trait SegmentIntersector<D> {
    /// Processes the `segment_index0`-th segment of `pair.first()` against the
    /// `segment_index1`-th segment of `pair.second()`.
    fn process_intersections(
        &mut self,
        pair: SegmentStringPair<'_, D>,
        segment_index0: usize,
        segment_index1: usize,
    );

    /// Should the broad phase stop reporting candidates?
    fn is_done(&self) -> bool {
        false
    }
}

/// Processes candidate segment pairs without modifying the chains they belong to.
///
/// This is used by validators and by detectors only interested in the existence or the
/// location of intersections.
pub trait IntersectionDetector<S: SegmentString> {
    /// Processes the `segment_index0`-th segment of `string0` against the `segment_index1`-th
    /// segment of `string1`.
    ///
    /// Both references point to the same chain if the segments belong to the same chain.
    fn process_intersections(
        &mut self,
        string0: &S,
        segment_index0: usize,
        string1: &S,
        segment_index1: usize,
    );

    /// Should the broad phase stop reporting candidates?
    fn is_done(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Point;

    #[test]
    fn pair_from_slice() {
        let mut strings: Vec<_> = (0..3)
            .map(|i| NodedSegmentString::new(vec![Point::new(i as f64, 0.0)], i))
            .collect();

        let pair = SegmentStringPair::from_slice(&mut strings, 2, 0);
        assert!(!pair.is_same());
        assert_eq!(*pair.first().data(), 2);
        assert_eq!(*pair.second().data(), 0);

        let mut pair = SegmentStringPair::from_slice(&mut strings, 1, 1);
        assert!(pair.is_same());
        assert_eq!(*pair.second_mut().data(), 1);
    }
}
