use crate::math::{Point, Real};
use alloc::format;
use alloc::string::String;

/// Errors raised by noders and noding validators.
///
/// Intersection detectors never fail: they only record what they find. Errors are raised by the
/// orchestrators deciding that a recorded condition is fatal.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum NodingError {
    /// Iterated noding did not converge.
    #[error("iterated noding failed to converge after {iterations} iterations{}", fmt_near(.coordinate))]
    NonConvergence {
        /// The number of noding passes performed.
        iterations: usize,
        /// A coordinate of a remaining interior intersection, if known.
        coordinate: Option<Point<Real>>,
    },
    /// Two segments of a supposedly noded set intersect.
    #[error("found non-noded intersection between {}", fmt_segment_pair(.segments, .coordinate))]
    NonNodedIntersection {
        /// The endpoints of the two intersecting segments.
        segments: [Point<Real>; 4],
        /// The intersection location, if known.
        coordinate: Option<Point<Real>>,
    },
    /// A chain goes back to a vertex it just left (`a-b-a`).
    #[error("found non-noded collapse at {}", wkt_linestring(segment))]
    Collapse {
        /// The three collapsing vertices.
        segment: [Point<Real>; 3],
    },
    /// The endpoint of a chain coincides with an interior vertex of a chain.
    #[error("found endpoint/interior pair intersection at {}", wkt_point(coordinate))]
    EndpointVertexIntersection {
        /// The location of the coincidence.
        coordinate: Point<Real>,
    },
    /// The scale factor of a rescaling noder is not a finite positive number.
    #[error("invalid scale factor {0}: it must be finite and positive")]
    ScaleFactor(Real),
}

impl NodingError {
    /// The coordinate where the problem was detected, if known.
    pub fn coordinate(&self) -> Option<Point<Real>> {
        match self {
            NodingError::NonConvergence { coordinate, .. }
            | NodingError::NonNodedIntersection { coordinate, .. } => *coordinate,
            NodingError::Collapse { segment } => Some(segment[0]),
            NodingError::EndpointVertexIntersection { coordinate } => Some(*coordinate),
            NodingError::ScaleFactor(_) => None,
        }
    }
}

fn fmt_segment_pair(segments: &[Point<Real>; 4], coordinate: &Option<Point<Real>>) -> String {
    format!(
        "{} and {}{}",
        wkt_segment(&segments[0], &segments[1]),
        wkt_segment(&segments[2], &segments[3]),
        fmt_near(coordinate)
    )
}

fn fmt_near(coordinate: &Option<Point<Real>>) -> String {
    match coordinate {
        Some(pt) => format!(" near {}", wkt_point(pt)),
        None => String::new(),
    }
}

/// Formats a point as `POINT ( x y )`.
pub fn wkt_point(pt: &Point<Real>) -> String {
    format!("POINT ( {} {} )", pt.x, pt.y)
}

/// Formats a segment as `LINESTRING ( x0 y0, x1 y1 )`.
pub fn wkt_segment(p0: &Point<Real>, p1: &Point<Real>) -> String {
    wkt_linestring(&[*p0, *p1])
}

/// Formats a sequence of points as `LINESTRING ( x0 y0, x1 y1, ... )`.
pub fn wkt_linestring(pts: &[Point<Real>]) -> String {
    let mut result = String::from("LINESTRING ( ");
    for (i, pt) in pts.iter().enumerate() {
        if i > 0 {
            result.push_str(", ");
        }
        result.push_str(&format!("{} {}", pt.x, pt.y));
    }
    result.push_str(" )");
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn non_noded_intersection_message() {
        let err = NodingError::NonNodedIntersection {
            segments: [
                Point::new(0.0, 0.0),
                Point::new(10.0, 10.0),
                Point::new(0.0, 10.0),
                Point::new(10.0, 0.0),
            ],
            coordinate: Some(Point::new(5.0, 5.0)),
        };
        assert_eq!(
            err.to_string(),
            "found non-noded intersection between LINESTRING ( 0 0, 10 10 ) and LINESTRING ( 0 10, 10 0 ) near POINT ( 5 5 )"
        );
        assert_eq!(err.coordinate(), Some(Point::new(5.0, 5.0)));
    }

    #[test]
    fn non_convergence_message() {
        let err = NodingError::NonConvergence {
            iterations: 6,
            coordinate: None,
        };
        assert_eq!(
            err.to_string(),
            "iterated noding failed to converge after 6 iterations"
        );
    }
}
