use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::{Point, Real};
use alloc::vec::Vec;

/// A pair of tree nodes.
///
/// Both `left` and `right` are guaranteed to be valid except for the only special-case where the
/// tree contains only a single leaf, in which case only `left` is valid. But in every other
/// cases where the tree contains at least 2 leaves, booth `left` and `right` are guaranteed
/// to be valid.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct BvhNodeWide {
    pub(super) left: BvhNode,
    pub(super) right: BvhNode,
}

impl BvhNodeWide {
    #[inline(always)]
    pub(super) fn zeros() -> Self {
        Self {
            left: BvhNode::zeros(),
            right: BvhNode::zeros(),
        }
    }

    /// Merges both nodes contained by `self` to form its parent.
    pub(super) fn merged(&self, my_id: u32) -> BvhNode {
        self.left.merged(&self.right, my_id)
    }
}

/// The node (internal or leaf) of a BVH.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct BvhNode {
    /// Mins coordinates of the node's bounding volume.
    pub(super) mins: Point<Real>,
    /// Children of this node, or the leaf index if this node is a leaf.
    pub(super) children: u32,
    /// Maxs coordinates of this node's bounding volume.
    pub(super) maxs: Point<Real>,
    /// Number of leaves in the subtree rooted at this node.
    pub(super) leaf_count: u32,
}

impl BvhNode {
    #[inline(always)]
    pub(super) fn zeros() -> Self {
        Self {
            mins: Point::origin(),
            children: 0,
            maxs: Point::origin(),
            leaf_count: 0,
        }
    }

    /// Initialized a leaf.
    #[inline(always)]
    pub fn leaf(aabb: Aabb, leaf_data: u32) -> BvhNode {
        Self {
            mins: aabb.mins,
            maxs: aabb.maxs,
            children: leaf_data,
            leaf_count: 1,
        }
    }

    /// Is this node a leaf?
    #[inline(always)]
    pub fn is_leaf(&self) -> bool {
        self.leaf_count == 1
    }

    #[inline(always)]
    pub(super) fn merged(&self, other: &Self, children: u32) -> Self {
        Self {
            mins: self.mins.inf(&other.mins),
            children,
            maxs: self.maxs.sup(&other.maxs),
            leaf_count: self.leaf_count + other.leaf_count,
        }
    }

    /// This node's AABB.
    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb {
            mins: self.mins,
            maxs: self.maxs,
        }
    }

    /// The center of this node's AABB.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// Checks if the AABB of `self` intersects the `other` AABB.
    #[inline]
    pub fn intersects_aabb(&self, other: &Aabb) -> bool {
        na::partial_le(&self.mins, &other.maxs) && na::partial_ge(&self.maxs, &other.mins)
    }
}

/// A static Bounding Volume Hierarchy.
///
/// The tree is built once from a set of leaf AABBs and is read-only afterward: every query
/// takes `&self`, so a single instance can be shared and queried from several threads.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Bvh {
    pub(super) nodes: Vec<BvhNodeWide>,
}

impl Bvh {
    /// Creates a new BVH with a slice of AABBs.
    ///
    /// Each leaf will be associated an index equal to its position into the slice. For example,
    /// the AABB `leaves[42]` is associated to the leaf with index 42.
    pub fn from_leaves(leaves: &[Aabb]) -> Self {
        Self::from_iter(leaves.iter().copied().enumerate())
    }

    /// Creates a new BVH with leaves given by an iterator.
    ///
    /// The iterator yields leaf index and aabbs. The leaf indices will then be read back
    /// by tree traversals and queries.
    ///
    /// Note that the indices are stored internally as `u32`. The iterator expects `usize`
    /// for convenience (so that iterators built with `.enumerate()` can be used directly
    /// without an additional cast of the `usize` index to `u32`).
    #[allow(clippy::should_implement_trait)]
    pub fn from_iter<It>(leaves: It) -> Self
    where
        It: IntoIterator<Item = (usize, Aabb)>,
    {
        let mut leaves: Vec<_> = leaves
            .into_iter()
            .map(|(leaf_id, leaf_aabb)| BvhNode::leaf(leaf_aabb, leaf_id as u32))
            .collect();
        let mut result = Self::default();

        // Handle special cases that don't play well with the rebuilds.
        match leaves.len() {
            0 => {}
            1 => {
                result.nodes.push(BvhNodeWide {
                    left: leaves[0],
                    right: BvhNode::zeros(),
                });
            }
            2 => {
                result.nodes.push(BvhNodeWide {
                    left: leaves[0],
                    right: leaves[1],
                });
            }
            _ => {
                result.nodes.reserve(leaves.len());
                result.nodes.push(BvhNodeWide::zeros());
                result.rebuild_range_binned(0, &mut leaves);
            }
        }

        result
    }

    /// The AABB bounding everything contained by this BVH.
    pub fn root_aabb(&self) -> Aabb {
        match self.leaf_count() {
            0 => Aabb::new_invalid(),
            1 => self.nodes[0].left.aabb(),
            _ => self.nodes[0]
                .left
                .aabb()
                .merged(&self.nodes[0].right.aabb()),
        }
    }

    /// The number of leaves of this tree.
    pub fn leaf_count(&self) -> u32 {
        self.nodes
            .first()
            .map(|root| root.left.leaf_count + root.right.leaf_count)
            .unwrap_or(0)
    }
}
