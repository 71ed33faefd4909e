//! Noding of 2D polylines.
//!
//! A set of polylines (here called *chains*, or segment strings) is *noded* when no two of its
//! segments intersect except at shared endpoints. A [`Noder`] takes an arbitrary set of chains
//! and computes a noded set covering the same linework, splitting the input chains at their
//! intersection points.
//!
//! The building blocks are:
//! - chains: [`SegmentString`], [`BasicSegmentString`] and [`NodedSegmentString`], the latter
//!   accumulating the nodes found on a chain;
//! - segment intersectors, called for every candidate pair of segments: the mutating
//!   [`SegmentIntersector`] adding nodes, and the read-only [`IntersectionDetector`];
//! - candidate pair enumeration, either exhaustive ([`SimpleNoder`]) or through the monotone
//!   chain index ([`McIndexNoder`]);
//! - noders built on top of these: [`IteratedNoder`], [`ScaledNoder`], [`ValidatingNoder`],
//!   the [`snap`] and [`snapround`] noders, and the coverage edge extractors
//!   [`SegmentExtractingNoder`], [`BoundarySegmentNoder`] and [`BoundaryChainNoder`];
//! - validators: [`FastNodingValidator`] and the exhaustive [`NodingValidator`].

pub use self::boundary_chain_noder::BoundaryChainNoder;
pub use self::boundary_segment_noder::BoundarySegmentNoder;
pub use self::error::{wkt_linestring, wkt_point, wkt_segment, NodingError};
pub use self::fast_noding_validator::{compute_intersections, FastNodingValidator};
pub use self::intersection_adder::IntersectionAdder;
pub use self::iterated_noder::{IteratedNoder, DEFAULT_MAX_ITERATIONS};
pub use self::mc_index::{process_self_intersections, MonotoneChainIndex, SegmentPair};
pub use self::mc_index_mutual_intersector::McIndexSegmentSetMutualIntersector;
pub use self::mc_index_noder::McIndexNoder;
pub use self::monotone_chain::{monotone_chains, MonotoneChain};
pub use self::noded_segment_string::{noded_substrings, to_noded_strings, NodedSegmentString};
pub use self::noder::Noder;
pub use self::noding_intersection_finder::NodingIntersectionFinder;
pub use self::noding_validator::NodingValidator;
pub use self::octant::Octant;
pub use self::scaled_noder::ScaledNoder;
pub use self::segment_extracting_noder::SegmentExtractingNoder;
pub use self::segment_intersection_detector::SegmentIntersectionDetector;
pub use self::segment_intersector::{IntersectionDetector, SegmentIntersector, SegmentStringPair};
pub use self::segment_key::{point_key, PointKey, UndirectedSegmentKey};
pub use self::segment_node::SegmentNode;
pub use self::segment_node_list::SegmentNodeList;
pub use self::segment_string::{segment_count, BasicSegmentString, SegmentString};
pub use self::simple_noder::SimpleNoder;
pub use self::validating_noder::ValidatingNoder;

pub mod snap;
pub mod snapround;

mod boundary_chain_noder;
mod boundary_segment_noder;
mod error;
mod fast_noding_validator;
mod intersection_adder;
mod iterated_noder;
mod mc_index;
mod mc_index_mutual_intersector;
mod mc_index_noder;
mod monotone_chain;
mod noded_segment_string;
mod noder;
mod noding_intersection_finder;
mod noding_validator;
mod octant;
mod scaled_noder;
mod segment_extracting_noder;
mod segment_intersection_detector;
mod segment_intersector;
mod segment_key;
mod segment_node;
mod segment_node_list;
mod segment_string;
mod simple_noder;
mod validating_noder;
