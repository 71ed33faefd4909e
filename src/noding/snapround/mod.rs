//! Snap-rounding: noding on a fixed precision grid.
//!
//! Every vertex and every intersection point is rounded to the center of the grid cell (the
//! *hot pixel*) containing it, and every segment passing through a hot pixel is routed through
//! its center. The result is fully noded on the grid, whatever the rounding errors of the
//! intersection computations.

pub use self::hot_pixel::HotPixel;
pub use self::hot_pixel_index::HotPixelIndex;
pub use self::snap_rounding_intersection_adder::SnapRoundingIntersectionAdder;
pub use self::snap_rounding_noder::{SnapRoundingNoder, NEARNESS_FACTOR};

mod hot_pixel;
mod hot_pixel_index;
mod snap_rounding_intersection_adder;
mod snap_rounding_noder;
