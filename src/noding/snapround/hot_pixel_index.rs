use super::HotPixel;
use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::{Point, Real};
use crate::noding::NodingError;
use crate::partitioning::KdTree;
use crate::utils::PrecisionModel;
use alloc::vec::Vec;

/// Seed of the shuffling of inserted vertices.
const SHUFFLE_SEED: u64 = 13;

/// The hot pixels of a snap-rounding grid, indexed by their rounded coordinates.
///
/// Chain vertices are usually sorted along the chain, which would degenerate the KD-tree into
/// a list, so they are inserted in a (deterministic) random order.
#[derive(Clone, Debug)]
pub struct HotPixelIndex {
    precision_model: PrecisionModel,
    scale: Real,
    tree: KdTree<HotPixel>,
}

impl HotPixelIndex {
    /// An empty index of the pixels of a grid with cells of width `1 / scale`.
    pub fn new(scale: Real) -> Result<Self, NodingError> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(NodingError::ScaleFactor(scale));
        }

        Ok(Self {
            precision_model: PrecisionModel::fixed(scale),
            scale,
            tree: KdTree::new(),
        })
    }

    /// The number of hot pixels.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Is this index empty?
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// The hot pixel with the given identifier.
    pub fn pixel(&self, id: usize) -> &HotPixel {
        self.tree.node(id).data()
    }

    /// Mutable reference to the hot pixel with the given identifier.
    pub fn pixel_mut(&mut self, id: usize) -> &mut HotPixel {
        self.tree.node_mut(id).data_mut()
    }

    /// Adds the pixels containing every point of `pts`, in a shuffled order.
    pub fn add_points(&mut self, pts: &[Point<Real>]) {
        let mut rng = oorandom::Rand32::new(SHUFFLE_SEED);
        let mut indices: Vec<usize> = (0..pts.len()).collect();

        for remaining in (1..=indices.len()).rev() {
            let j = rng.rand_range(0..remaining as u32) as usize;
            let _ = self.add(&pts[indices[j]]);
            indices[j] = indices[remaining - 1];
        }
    }

    /// Adds the pixels containing every point of `pts`, and marks them as nodes.
    pub fn add_nodes(&mut self, pts: &[Point<Real>]) {
        for pt in pts {
            let id = self.add(pt);
            self.pixel_mut(id).set_to_node();
        }
    }

    /// Adds the pixel containing `pt` and returns its identifier.
    ///
    /// A pixel added more than once contains several vertices, so it becomes a node.
    pub fn add(&mut self, pt: &Point<Real>) -> usize {
        let rounded = self.precision_model.make_precise(pt);

        if let Some(id) = self.tree.query_point(&rounded) {
            self.pixel_mut(id).set_to_node();
            return id;
        }

        self.tree
            .insert(rounded, HotPixel::new(rounded, self.scale))
    }

    /// Collects the identifiers of the pixels that may intersect the segment `[p0, p1]`.
    pub fn query(&self, p0: &Point<Real>, p1: &Point<Real>, out: &mut Vec<usize>) {
        // Enlarged by a whole pixel width to account for the pixel extents.
        let range = Aabb::from_segment(p0, p1).loosened(1.0 / self.scale);
        self.tree.query(&range, out);
    }
}
