//! Various unsorted geometrical and logical operators.

pub use self::distance::point_segment_distance;
pub use self::double_double::DoubleDouble;
pub use self::fx_hasher::FxHasher32;
pub use self::line_intersector::{IntersectionKind, LineIntersector};
pub use self::orientation::{orientation_index, Orientation, DP_SAFE_EPSILON};
pub use self::precision_model::{round_half_up, PrecisionModel};
pub use self::sorted_pair::SortedPair;

mod distance;
mod double_double;
mod fx_hasher;
pub mod hashmap;
pub mod hashset;
mod line_intersector;
mod orientation;
mod precision_model;
mod sorted_pair;
