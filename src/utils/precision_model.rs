//! Precision models rounding computed coordinates.

use crate::math::{Point, Real};

/// Rounds `x` to the nearest integer, rounding halfway cases towards positive infinity.
#[inline]
pub fn round_half_up(x: Real) -> Real {
    (x + 0.5).floor()
}

/// The precision applied to computed coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum PrecisionModel {
    /// Full floating-point precision, coordinates are never rounded.
    #[default]
    Floating,
    /// Coordinates are rounded to a grid of cell size `1 / scale`.
    Fixed {
        /// The number of grid cells per unit. Must be finite and positive.
        scale: Real,
    },
}

impl PrecisionModel {
    /// A fixed precision model with the given scale.
    pub fn fixed(scale: Real) -> Self {
        PrecisionModel::Fixed { scale }
    }

    /// Is this the floating precision model?
    pub fn is_floating(&self) -> bool {
        matches!(self, PrecisionModel::Floating)
    }

    /// The scale of this model, `None` for floating precision.
    pub fn scale(&self) -> Option<Real> {
        match self {
            PrecisionModel::Floating => None,
            PrecisionModel::Fixed { scale } => Some(*scale),
        }
    }

    /// The width of a grid cell, `0` for floating precision.
    pub fn grid_size(&self) -> Real {
        match self {
            PrecisionModel::Floating => 0.0,
            PrecisionModel::Fixed { scale } => 1.0 / scale,
        }
    }

    /// Rounds a single value to this precision.
    ///
    /// `NaN` values are returned unchanged.
    pub fn make_precise_value(&self, value: Real) -> Real {
        if value.is_nan() {
            return value;
        }

        match *self {
            PrecisionModel::Floating => value,
            PrecisionModel::Fixed { scale } => {
                if scale < 1.0 {
                    // Dividing by the (integral) grid size is more accurate than multiplying by
                    // a fractional scale.
                    let grid_size = round_half_up(1.0 / scale);
                    round_half_up(value / grid_size) * grid_size
                } else {
                    round_half_up(value * scale) / scale
                }
            }
        }
    }

    /// Rounds both coordinates of a point to this precision.
    pub fn make_precise(&self, pt: &Point<Real>) -> Point<Real> {
        Point::new(self.make_precise_value(pt.x), self.make_precise_value(pt.y))
    }
}
