//! Robust intersection of two line segments.

use super::{orientation_index, point_segment_distance, Orientation, PrecisionModel};
use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use arrayvec::ArrayVec;

/// The kind of intersection between two segments.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum IntersectionKind {
    /// The segments do not intersect.
    #[default]
    None,
    /// The segments intersect at a single point.
    Point,
    /// The segments are collinear and overlap along a sub-segment.
    Collinear,
}

/// Computes the intersection of two segments, remembering the inputs and the result so it can
/// be queried afterward.
///
/// Intersections located at an input vertex are reported as that exact vertex. Proper
/// intersections are computed with conditioned homogeneous coordinates and are guaranteed to
/// lie inside the envelopes of both segments. If a fixed precision model is set, proper
/// intersection points are rounded with it.
#[derive(Clone, Debug, Default)]
pub struct LineIntersector {
    precision_model: Option<PrecisionModel>,
    input: [[Point<Real>; 2]; 2],
    kind: IntersectionKind,
    points: ArrayVec<Point<Real>, 2>,
    is_proper: bool,
}

impl LineIntersector {
    /// A line intersector computing intersections in full floating-point precision.
    pub fn new() -> Self {
        Self::default()
    }

    /// A line intersector rounding computed intersection points with `precision_model`.
    pub fn with_precision_model(precision_model: PrecisionModel) -> Self {
        Self {
            precision_model: Some(precision_model),
            ..Self::default()
        }
    }

    /// Sets the precision model applied to computed intersection points.
    pub fn set_precision_model(&mut self, precision_model: Option<PrecisionModel>) {
        self.precision_model = precision_model;
    }

    /// The precision model applied to computed intersection points.
    pub fn precision_model(&self) -> Option<&PrecisionModel> {
        self.precision_model.as_ref()
    }

    /// Computes the intersection of the segments `[p1, p2]` and `[q1, q2]`.
    pub fn compute_intersection(
        &mut self,
        p1: &Point<Real>,
        p2: &Point<Real>,
        q1: &Point<Real>,
        q2: &Point<Real>,
    ) {
        self.input = [[*p1, *p2], [*q1, *q2]];
        self.points.clear();
        self.is_proper = false;
        self.kind = self.compute_intersect(p1, p2, q1, q2);
    }

    fn compute_intersect(
        &mut self,
        p1: &Point<Real>,
        p2: &Point<Real>,
        q1: &Point<Real>,
        q2: &Point<Real>,
    ) -> IntersectionKind {
        if !Aabb::from_segment(p1, p2).intersects_segment_envelope(q1, q2) {
            return IntersectionKind::None;
        }

        let pq1 = orientation_index(p1, p2, q1);
        let pq2 = orientation_index(p1, p2, q2);

        if pq1 != Orientation::Collinear && pq1 == pq2 {
            return IntersectionKind::None;
        }

        let qp1 = orientation_index(q1, q2, p1);
        let qp2 = orientation_index(q1, q2, p2);

        if qp1 != Orientation::Collinear && qp1 == qp2 {
            return IntersectionKind::None;
        }

        let collinear =
            pq1.is_collinear() && pq2.is_collinear() && qp1.is_collinear() && qp2.is_collinear();
        if collinear {
            return self.compute_collinear_intersection(p1, p2, q1, q2);
        }

        // At least one endpoint touches the other segment. Prefer an endpoint shared by both
        // segments, so that the result is independent of the orientation computations.
        if pq1.is_collinear() || pq2.is_collinear() || qp1.is_collinear() || qp2.is_collinear()
        {
            let pt = if p1 == q1 || p1 == q2 {
                *p1
            } else if p2 == q1 || p2 == q2 {
                *p2
            } else if pq1.is_collinear() {
                *q1
            } else if pq2.is_collinear() {
                *q2
            } else if qp1.is_collinear() {
                *p1
            } else {
                *p2
            };
            self.points.push(pt);
        } else {
            self.is_proper = true;
            let pt = self.proper_intersection(p1, p2, q1, q2);
            self.points.push(pt);
        }

        IntersectionKind::Point
    }

    fn compute_collinear_intersection(
        &mut self,
        p1: &Point<Real>,
        p2: &Point<Real>,
        q1: &Point<Real>,
        q2: &Point<Real>,
    ) -> IntersectionKind {
        let p_env = Aabb::from_segment(p1, p2);
        let q_env = Aabb::from_segment(q1, q2);
        let p1q1p2 = p_env.contains_local_point(q1);
        let p1q2p2 = p_env.contains_local_point(q2);
        let q1p1q2 = q_env.contains_local_point(p1);
        let q1p2q2 = q_env.contains_local_point(p2);

        let (a, b, is_point) = if p1q1p2 && p1q2p2 {
            (q1, q2, false)
        } else if q1p1q2 && q1p2q2 {
            (p1, p2, false)
        } else if p1q1p2 && q1p1q2 {
            (q1, p1, q1 == p1 && !p1q2p2 && !q1p2q2)
        } else if p1q1p2 && q1p2q2 {
            (q1, p2, q1 == p2 && !p1q2p2 && !q1p1q2)
        } else if p1q2p2 && q1p1q2 {
            (q2, p1, q2 == p1 && !p1q1p2 && !q1p2q2)
        } else if p1q2p2 && q1p2q2 {
            (q2, p2, q2 == p2 && !p1q1p2 && !q1p1q2)
        } else {
            return IntersectionKind::None;
        };

        self.points.push(*a);
        if is_point {
            IntersectionKind::Point
        } else {
            self.points.push(*b);
            IntersectionKind::Collinear
        }
    }

    fn proper_intersection(
        &self,
        p1: &Point<Real>,
        p2: &Point<Real>,
        q1: &Point<Real>,
        q2: &Point<Real>,
    ) -> Point<Real> {
        let mut pt = homogeneous_intersection(p1, p2, q1, q2)
            .unwrap_or_else(|| nearest_endpoint(p1, p2, q1, q2));

        if !self.is_in_segment_envelopes(&pt) {
            pt = nearest_endpoint(p1, p2, q1, q2);
        }

        match &self.precision_model {
            Some(pm) => pm.make_precise(&pt),
            None => pt,
        }
    }

    fn is_in_segment_envelopes(&self, pt: &Point<Real>) -> bool {
        let [[p1, p2], [q1, q2]] = &self.input;
        Aabb::from_segment(p1, p2).contains_local_point(pt)
            && Aabb::from_segment(q1, q2).contains_local_point(pt)
    }

    /// The kind of the last computed intersection.
    #[inline]
    pub fn kind(&self) -> IntersectionKind {
        self.kind
    }

    /// Did the last computation find an intersection?
    #[inline]
    pub fn has_intersection(&self) -> bool {
        self.kind != IntersectionKind::None
    }

    /// The number of intersection points found: 0, 1 or 2.
    #[inline]
    pub fn intersection_num(&self) -> usize {
        self.points.len()
    }

    /// The `i`-th intersection point.
    ///
    /// # Panics
    /// Panics if `i >= self.intersection_num()`.
    #[inline]
    pub fn intersection(&self, i: usize) -> Point<Real> {
        self.points[i]
    }

    /// All the intersection points.
    #[inline]
    pub fn intersections(&self) -> &[Point<Real>] {
        &self.points
    }

    /// The endpoints of the `segment_index`-th input segment (0 or 1).
    #[inline]
    pub fn endpoint(&self, segment_index: usize, pt_index: usize) -> Point<Real> {
        self.input[segment_index][pt_index]
    }

    /// Is the intersection proper, i.e., interior to both segments and not located at any
    /// vertex?
    ///
    /// Intersections between collinear segments are never proper.
    #[inline]
    pub fn is_proper(&self) -> bool {
        self.has_intersection() && self.is_proper
    }

    /// Is `pt` one of the computed intersection points?
    pub fn is_intersection(&self, pt: &Point<Real>) -> bool {
        self.points.iter().any(|p| p == pt)
    }

    /// Is some intersection point interior to at least one of the input segments?
    pub fn is_interior_intersection(&self) -> bool {
        self.is_interior_intersection_of(0) || self.is_interior_intersection_of(1)
    }

    /// Is some intersection point different from both endpoints of the `segment_index`-th
    /// input segment?
    pub fn is_interior_intersection_of(&self, segment_index: usize) -> bool {
        let [a, b] = &self.input[segment_index];
        self.points.iter().any(|p| p != a && p != b)
    }
}

/// Intersection of the lines supporting two segments, computed in homogeneous coordinates
/// around the center of the envelopes intersection to limit the loss of precision.
fn homogeneous_intersection(
    p1: &Point<Real>,
    p2: &Point<Real>,
    q1: &Point<Real>,
    q2: &Point<Real>,
) -> Option<Point<Real>> {
    let p_env = Aabb::from_segment(p1, p2);
    let q_env = Aabb::from_segment(q1, q2);
    let mid = na::center(&p_env.mins.sup(&q_env.mins), &p_env.maxs.inf(&q_env.maxs));

    let p1 = p1 - mid;
    let p2 = p2 - mid;
    let q1 = q1 - mid;
    let q2 = q2 - mid;

    let px = p1.y - p2.y;
    let py = p2.x - p1.x;
    let pw = p1.x * p2.y - p2.x * p1.y;

    let qx = q1.y - q2.y;
    let qy = q2.x - q1.x;
    let qw = q1.x * q2.y - q2.x * q1.y;

    let x = py * qw - qy * pw;
    let y = qx * pw - px * qw;
    let w = px * qy - qx * py;

    let x_int = x / w;
    let y_int = y / w;

    if !x_int.is_finite() || !y_int.is_finite() {
        return None;
    }

    Some(Point::new(x_int + mid.x, y_int + mid.y))
}

/// The input endpoint closest to the other segment.
fn nearest_endpoint(
    p1: &Point<Real>,
    p2: &Point<Real>,
    q1: &Point<Real>,
    q2: &Point<Real>,
) -> Point<Real> {
    let candidates = [
        (p1, point_segment_distance(p1, q1, q2)),
        (p2, point_segment_distance(p2, q1, q2)),
        (q1, point_segment_distance(q1, p1, p2)),
        (q2, point_segment_distance(q2, p1, p2)),
    ];

    let mut nearest = candidates[0];
    for candidate in &candidates[1..] {
        if candidate.1 < nearest.1 {
            nearest = *candidate;
        }
    }

    *nearest.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intersect(pts: [[Real; 2]; 4]) -> LineIntersector {
        let [p1, p2, q1, q2] = pts.map(|p| Point::new(p[0], p[1]));
        let mut li = LineIntersector::new();
        li.compute_intersection(&p1, &p2, &q1, &q2);
        li
    }

    #[test]
    fn proper_crossing() {
        let li = intersect([[0.0, 0.0], [10.0, 10.0], [0.0, 10.0], [10.0, 0.0]]);
        assert_eq!(li.kind(), IntersectionKind::Point);
        assert!(li.is_proper());
        assert!(li.is_interior_intersection());
        assert_eq!(li.intersection(0), Point::new(5.0, 5.0));
    }

    #[test]
    fn disjoint_segments() {
        let li = intersect([[0.0, 0.0], [1.0, 1.0], [0.0, 10.0], [10.0, 0.0]]);
        assert!(!li.has_intersection());
        assert_eq!(li.intersection_num(), 0);
        assert!(!li.is_proper());
    }

    #[test]
    fn touching_at_endpoint() {
        let li = intersect([[0.0, 0.0], [10.0, 0.0], [10.0, 0.0], [10.0, 10.0]]);
        assert_eq!(li.kind(), IntersectionKind::Point);
        assert!(!li.is_proper());
        assert!(!li.is_interior_intersection());
        assert_eq!(li.intersection(0), Point::new(10.0, 0.0));
    }

    #[test]
    fn endpoint_touching_interior() {
        let li = intersect([[0.0, 0.0], [10.0, 0.0], [5.0, 0.0], [5.0, 10.0]]);
        assert_eq!(li.kind(), IntersectionKind::Point);
        assert!(!li.is_proper());
        assert!(li.is_interior_intersection_of(0));
        assert!(!li.is_interior_intersection_of(1));
        assert!(li.is_intersection(&Point::new(5.0, 0.0)));
    }

    #[test]
    fn collinear_overlap() {
        let li = intersect([[0.0, 0.0], [10.0, 0.0], [5.0, 0.0], [15.0, 0.0]]);
        assert_eq!(li.kind(), IntersectionKind::Collinear);
        assert_eq!(li.intersection_num(), 2);
        assert!(li.is_intersection(&Point::new(5.0, 0.0)));
        assert!(li.is_intersection(&Point::new(10.0, 0.0)));
        assert!(!li.is_proper());
    }

    #[test]
    fn collinear_touching_is_a_point() {
        let li = intersect([[0.0, 0.0], [10.0, 0.0], [10.0, 0.0], [15.0, 0.0]]);
        assert_eq!(li.kind(), IntersectionKind::Point);
        assert_eq!(li.intersection(0), Point::new(10.0, 0.0));
    }

    #[test]
    fn rounded_intersection() {
        let p1 = Point::new(0.0, 0.0);
        let p2 = Point::new(10.0, 3.0);
        let q1 = Point::new(0.0, 3.0);
        let q2 = Point::new(10.0, 0.0);
        let mut li = LineIntersector::with_precision_model(PrecisionModel::fixed(1.0));
        li.compute_intersection(&p1, &p2, &q1, &q2);
        assert!(li.is_proper());
        assert_eq!(li.intersection(0), Point::new(5.0, 2.0));
    }

    #[test]
    fn computed_point_lies_in_both_envelopes() {
        let p1 = Point::new(0.1, 0.3);
        let p2 = Point::new(1.0e6 + 0.7, 3.0e-3);
        let q1 = Point::new(1000.1, -1.0);
        let q2 = Point::new(1000.3, 1.0);
        let mut li = LineIntersector::new();
        li.compute_intersection(&p1, &p2, &q1, &q2);
        assert!(li.is_proper());
        let pt = li.intersection(0);
        assert!(Aabb::from_segment(&p1, &p2).contains_local_point(&pt));
        assert!(Aabb::from_segment(&q1, &q2).contains_local_point(&pt));
    }
}
