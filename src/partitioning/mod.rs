//! Spatial partitioning tools.

pub use self::bvh::{Bvh, BvhNode, Leaves};
pub use self::kd_tree::{KdNode, KdTree};

mod bvh;
mod kd_tree;
