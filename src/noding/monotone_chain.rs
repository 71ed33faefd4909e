//! Decomposition of chains into monotone sections.

use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::{Point, Real};
use alloc::vec::Vec;

/// The quadrant of a non-zero direction vector.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Quadrant {
    NorthEast,
    NorthWest,
    SouthWest,
    SouthEast,
}

impl Quadrant {
    fn from_segment(p0: &Point<Real>, p1: &Point<Real>) -> Self {
        let dx = p1.x - p0.x;
        let dy = p1.y - p0.y;

        if dx >= 0.0 {
            if dy >= 0.0 {
                Quadrant::NorthEast
            } else {
                Quadrant::SouthEast
            }
        } else if dy >= 0.0 {
            Quadrant::NorthWest
        } else {
            Quadrant::SouthWest
        }
    }
}

/// A section of a chain where every segment points towards the same quadrant.
///
/// The coordinates of a monotone chain are both monotone, so the envelope of any of its
/// sub-sections is given by the two end vertices of that sub-section. This allows finding
/// overlapping segments of two chains by binary subdivision.
///
/// A monotone chain does not own its vertices: it refers to the vertices `start..=end` of the
/// `string`-th chain of the set it was built from.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MonotoneChain {
    /// The index of the chain this monotone section belongs to.
    pub string: usize,
    /// The index of the first vertex of this section.
    pub start: usize,
    /// The index of the last vertex of this section.
    pub end: usize,
    /// The envelope of this section.
    pub aabb: Aabb,
}

impl MonotoneChain {
    /// The envelope of this section, enlarged by `tolerance`.
    pub fn loosened_aabb(&self, tolerance: Real) -> Aabb {
        if tolerance > 0.0 {
            self.aabb.loosened(tolerance)
        } else {
            self.aabb
        }
    }

    /// Pushes to `out` every pair of segment indices, one from `self` and one from `other`,
    /// with envelopes overlapping up to `tolerance`.
    ///
    /// `pts` and `other_pts` are the vertices of the chains `self` and `other` belong to.
    /// Envelopes are only tested on sub-sections of at least two segments: pairs of single
    /// segments are always reported.
    pub fn compute_overlaps(
        &self,
        pts: &[Point<Real>],
        other: &MonotoneChain,
        other_pts: &[Point<Real>],
        tolerance: Real,
        out: &mut Vec<(usize, usize)>,
    ) {
        if self.start == self.end || other.start == other.end {
            return;
        }

        compute_overlaps_range(
            pts,
            [self.start, self.end],
            other_pts,
            [other.start, other.end],
            tolerance,
            out,
        );
    }
}

fn compute_overlaps_range(
    pts0: &[Point<Real>],
    [start0, end0]: [usize; 2],
    pts1: &[Point<Real>],
    [start1, end1]: [usize; 2],
    tolerance: Real,
    out: &mut Vec<(usize, usize)>,
) {
    if end0 - start0 == 1 && end1 - start1 == 1 {
        out.push((start0, start1));
        return;
    }

    if !overlaps(
        &pts0[start0],
        &pts0[end0],
        &pts1[start1],
        &pts1[end1],
        tolerance,
    ) {
        return;
    }

    let mid0 = (start0 + end0) / 2;
    let mid1 = (start1 + end1) / 2;

    if start0 < mid0 {
        if start1 < mid1 {
            compute_overlaps_range(pts0, [start0, mid0], pts1, [start1, mid1], tolerance, out);
        }
        if mid1 < end1 {
            compute_overlaps_range(pts0, [start0, mid0], pts1, [mid1, end1], tolerance, out);
        }
    }
    if mid0 < end0 {
        if start1 < mid1 {
            compute_overlaps_range(pts0, [mid0, end0], pts1, [start1, mid1], tolerance, out);
        }
        if mid1 < end1 {
            compute_overlaps_range(pts0, [mid0, end0], pts1, [mid1, end1], tolerance, out);
        }
    }
}

/// Do the envelopes of the segments `[p1, p2]` and `[q1, q2]` overlap, up to `tolerance`?
fn overlaps(
    p1: &Point<Real>,
    p2: &Point<Real>,
    q1: &Point<Real>,
    q2: &Point<Real>,
    tolerance: Real,
) -> bool {
    let p = Aabb::from_segment(p1, p2);
    let q = Aabb::from_segment(q1, q2);

    !(p.mins.x > q.maxs.x + tolerance
        || p.maxs.x < q.mins.x - tolerance
        || p.mins.y > q.maxs.y + tolerance
        || p.maxs.y < q.mins.y - tolerance)
}

/// Decomposes the chain with vertices `pts` into monotone sections.
///
/// Zero-length segments do not break monotonicity and are included in the sections
/// surrounding them. A chain with less than two vertices has no section.
pub fn monotone_chains(string: usize, pts: &[Point<Real>]) -> Vec<MonotoneChain> {
    let mut result = Vec::new();
    if pts.len() < 2 {
        return result;
    }

    let mut start = 0;
    loop {
        let end = find_chain_end(pts, start);
        result.push(MonotoneChain {
            string,
            start,
            end,
            aabb: Aabb::from_segment(&pts[start], &pts[end]),
        });
        start = end;

        if start >= pts.len() - 1 {
            break;
        }
    }

    result
}

/// The index of the last vertex of the monotone section starting at `start`.
fn find_chain_end(pts: &[Point<Real>], start: usize) -> usize {
    let mut safe_start = start;
    // Skip any zero-length segment at the start of the section.
    while safe_start < pts.len() - 1 && pts[safe_start] == pts[safe_start + 1] {
        safe_start += 1;
    }

    if safe_start >= pts.len() - 1 {
        return pts.len() - 1;
    }

    let chain_quadrant = Quadrant::from_segment(&pts[safe_start], &pts[safe_start + 1]);
    let mut last = start + 1;
    while last < pts.len() {
        if pts[last - 1] != pts[last]
            && Quadrant::from_segment(&pts[last - 1], &pts[last]) != chain_quadrant
        {
            break;
        }
        last += 1;
    }

    last - 1
}
