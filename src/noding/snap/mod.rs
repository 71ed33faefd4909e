//! Noding with a snapping tolerance.
//!
//! Vertices and intersection points closer than the snapping tolerance are merged, and
//! vertices lying close to the interior of a segment become nodes of that segment. This
//! absorbs the small inaccuracies of nearly-coincident input linework, at the cost of the
//! result being only approximately noded.

pub use self::snapping_intersection_adder::SnappingIntersectionAdder;
pub use self::snapping_noder::SnappingNoder;
pub use self::snapping_point_index::SnappingPointIndex;

mod snapping_intersection_adder;
mod snapping_noder;
mod snapping_point_index;
