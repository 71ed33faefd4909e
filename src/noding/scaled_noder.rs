use super::{BasicSegmentString, Noder, NodingError, SegmentString};
use crate::math::{Point, Real, Vector};
use crate::utils::round_half_up;
use alloc::vec::Vec;

/// Wraps a noder working on integer coordinates, mapping the input to an integer grid and the
/// result back to the input coordinate system.
///
/// Input coordinates are mapped with `round((x - offset) * scale)`, and consecutive points
/// rounded to the same grid point are merged. Since rounding may merge points that were
/// distinct, the result may contain chains collapsing onto themselves. Nothing is mapped if
/// the scale is exactly `1` and the offset is zero.
#[derive(Clone, Debug)]
pub struct ScaledNoder<N> {
    noder: N,
    scale: Real,
    offset: Vector<Real>,
}

impl<N> ScaledNoder<N> {
    /// Wraps `noder`, with coordinates multiplied by `scale`.
    ///
    /// Returns an error if `scale` is not finite and positive.
    pub fn new(noder: N, scale: Real) -> Result<Self, NodingError> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(NodingError::ScaleFactor(scale));
        }

        Ok(Self {
            noder,
            scale,
            offset: Vector::zeros(),
        })
    }

    /// Sets the offset subtracted from coordinates before scaling them.
    pub fn with_offset(mut self, offset: Vector<Real>) -> Self {
        self.offset = offset;
        self
    }

    /// The scale applied to coordinates.
    pub fn scale(&self) -> Real {
        self.scale
    }

    /// The wrapped noder.
    pub fn inner(&self) -> &N {
        &self.noder
    }

    /// Is the mapping to the integer grid the identity?
    pub fn is_integer_precision(&self) -> bool {
        self.scale == 1.0 && self.offset == Vector::zeros()
    }

    fn to_grid(&self, pts: &[Point<Real>]) -> Vec<Point<Real>> {
        let mut result: Vec<Point<Real>> = pts
            .iter()
            .map(|p| {
                Point::new(
                    round_half_up((p.x - self.offset.x) * self.scale),
                    round_half_up((p.y - self.offset.y) * self.scale),
                )
            })
            .collect();
        result.dedup();
        result
    }

    fn from_grid(&self, pt: &Point<Real>) -> Point<Real> {
        Point::new(
            pt.x / self.scale + self.offset.x,
            pt.y / self.scale + self.offset.y,
        )
    }
}

impl<D: Clone, N: Noder<D>> Noder<D> for ScaledNoder<N> {
    fn compute_nodes(&mut self, strings: Vec<BasicSegmentString<D>>) -> Result<(), NodingError> {
        if self.is_integer_precision() {
            return self.noder.compute_nodes(strings);
        }

        let mut num_merged = 0;
        let scaled = strings
            .into_iter()
            .map(|s| {
                let pts = self.to_grid(s.points());
                num_merged += s.len() - pts.len();
                let (_, data) = s.into_parts();
                BasicSegmentString::new(pts, data)
            })
            .collect();

        if num_merged > 0 {
            log::debug!("Rescaling merged {} repeated points.", num_merged);
        }

        self.noder.compute_nodes(scaled)
    }

    fn noded_substrings(&self) -> Vec<BasicSegmentString<D>> {
        let result = self.noder.noded_substrings();
        if self.is_integer_precision() {
            return result;
        }

        result
            .into_iter()
            .map(|s| {
                let (pts, data) = s.into_parts();
                let pts = pts.iter().map(|p| self.from_grid(p)).collect();
                BasicSegmentString::new(pts, data)
            })
            .collect()
    }
}
