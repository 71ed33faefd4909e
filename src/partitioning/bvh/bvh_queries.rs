use super::{Bvh, BvhNode};
use crate::bounding_volume::Aabb;

impl Bvh {
    /// Iterates through all the leaves with an AABB intersecting the given `aabb`.
    ///
    /// Leaves are yielded in a fixed depth-first order that only depends on the tree.
    pub fn intersect_aabb<'a>(&'a self, aabb: &'a Aabb) -> impl Iterator<Item = u32> + 'a {
        self.leaves(|node: &BvhNode| node.intersects_aabb(aabb))
    }
}
