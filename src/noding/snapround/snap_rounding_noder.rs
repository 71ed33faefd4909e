use super::{HotPixelIndex, SnapRoundingIntersectionAdder};
use crate::math::{Point, Real};
use crate::noding::{
    noded_substrings, to_noded_strings, BasicSegmentString, McIndexNoder, NodedSegmentString,
    Noder, NodingError, SegmentString,
};
use crate::utils::PrecisionModel;
use alloc::vec::Vec;

/// Vertices closer than a pixel width divided by this factor to a segment are nodes.
pub const NEARNESS_FACTOR: Real = 100.0;

/// Nodes a set of chains with snap-rounding on the grid of a fixed precision model.
///
/// 1. Intersection points, and vertices very close to other segments, are computed in full
///    precision and their pixels become nodes.
/// 2. Every vertex gets a hot pixel.
/// 3. Every chain is rounded. Each original segment is then split at the hot pixels it goes
///    through, except the pixels containing only one of its own endpoints.
/// 4. Vertices located in node pixels are nodes of their chain.
///
/// Chains collapsing to a single point when rounded are removed. The result is fully noded,
/// and all its coordinates lie on the grid. Rounding may make some output chains overlap.
#[derive(Clone, Debug)]
pub struct SnapRoundingNoder<D> {
    precision_model: PrecisionModel,
    scale: Real,
    pixel_index: HotPixelIndex,
    snapped: Vec<NodedSegmentString<D>>,
}

impl<D> SnapRoundingNoder<D> {
    /// A snap-rounding noder on the grid of `precision_model`.
    ///
    /// Fails if the precision model is floating, or if its scale is not finite and positive.
    pub fn new(precision_model: PrecisionModel) -> Result<Self, NodingError> {
        let scale = precision_model.scale().unwrap_or(0.0);
        let pixel_index = HotPixelIndex::new(scale)?;

        Ok(Self {
            precision_model,
            scale,
            pixel_index,
            snapped: Vec::new(),
        })
    }

    /// The precision model of the grid.
    pub fn precision_model(&self) -> &PrecisionModel {
        &self.precision_model
    }

    /// The hot pixels of the last noding.
    pub fn pixel_index(&self) -> &HotPixelIndex {
        &self.pixel_index
    }

    fn round(&self, pt: &Point<Real>) -> Point<Real> {
        self.precision_model.make_precise(pt)
    }

    fn add_intersection_pixels(&mut self, strings: &mut [NodedSegmentString<D>]) {
        let nearness_tolerance = 1.0 / self.scale / NEARNESS_FACTOR;
        let mut noder = McIndexNoder::new(SnapRoundingIntersectionAdder::new(nearness_tolerance));
        noder.process(strings);
        let intersections = noder.into_intersector().into_intersections();
        self.pixel_index.add_nodes(&intersections);
    }

    fn add_vertex_pixels(&mut self, strings: &[NodedSegmentString<D>]) {
        for string in strings {
            self.pixel_index.add_points(string.points());
        }
    }

    /// Rounds the fully noded vertices of `string` and routes each segment through the hot
    /// pixels it crosses.
    ///
    /// Returns `None` if the chain collapses to a single point.
    fn compute_segment_snaps(&mut self, string: &NodedSegmentString<D>) -> Option<NodedSegmentString<D>>
    where
        D: Clone,
    {
        let pts = string.noded_coordinates();
        let mut rounded: Vec<_> = pts.iter().map(|pt| self.round(pt)).collect();
        rounded.dedup();

        if rounded.len() <= 1 {
            return None;
        }

        let mut snapped = NodedSegmentString::new(rounded, string.data().clone());
        let mut snapped_index = 0;

        for segment in pts.windows(2) {
            let curr = snapped.point(snapped_index);
            if self.round(&segment[1]) == curr {
                continue;
            }

            self.snap_segment(&segment[0], &segment[1], &mut snapped, snapped_index);
            snapped_index += 1;
        }

        Some(snapped)
    }

    /// Adds a node to the `segment_index`-th segment of `string` for every hot pixel crossed
    /// by the original segment `[p0, p1]`.
    fn snap_segment(
        &mut self,
        p0: &Point<Real>,
        p1: &Point<Real>,
        string: &mut NodedSegmentString<D>,
        segment_index: usize,
    ) {
        let mut candidates = Vec::new();
        self.pixel_index.query(p0, p1, &mut candidates);

        for id in candidates {
            let pixel = self.pixel_index.pixel(id);

            // A pixel only containing an endpoint of the segment is not a node of the segment.
            if !pixel.is_node() && (pixel.intersects_point(p0) || pixel.intersects_point(p1)) {
                continue;
            }

            if pixel.intersects_segment(p0, p1) {
                let coordinate = *pixel.coordinate();
                let _ = string.add_intersection(coordinate, segment_index);
                self.pixel_index.pixel_mut(id).set_to_node();
            }
        }
    }

    /// Adds a node at every interior vertex of `string` located in a node pixel.
    fn add_vertex_node_snaps(&self, string: &mut NodedSegmentString<D>) {
        let mut candidates = Vec::new();

        for i in 1..string.len().saturating_sub(1) {
            let pt = string.point(i);
            candidates.clear();
            self.pixel_index.query(&pt, &pt, &mut candidates);

            let is_node = candidates.iter().any(|id| {
                let pixel = self.pixel_index.pixel(*id);
                pixel.is_node() && *pixel.coordinate() == pt
            });

            if is_node {
                let _ = string.add_intersection(pt, i);
            }
        }
    }
}

impl<D: Clone> Noder<D> for SnapRoundingNoder<D> {
    fn compute_nodes(&mut self, strings: Vec<BasicSegmentString<D>>) -> Result<(), NodingError> {
        self.pixel_index = HotPixelIndex::new(self.scale)?;
        let mut noded = to_noded_strings(strings);

        self.add_intersection_pixels(&mut noded);
        self.add_vertex_pixels(&noded);

        let mut snapped: Vec<_> = noded
            .iter()
            .filter_map(|s| self.compute_segment_snaps(s))
            .collect();
        for string in &mut snapped {
            self.add_vertex_node_snaps(string);
        }

        log::debug!(
            "Snap-rounded {} chains ({} removed) with {} hot pixels.",
            snapped.len(),
            noded.len() - snapped.len(),
            self.pixel_index.len()
        );
        self.snapped = snapped;
        Ok(())
    }

    fn noded_substrings(&self) -> Vec<BasicSegmentString<D>> {
        noded_substrings(&self.snapped)
    }
}
