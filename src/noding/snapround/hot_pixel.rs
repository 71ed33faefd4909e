use crate::math::{Point, Real};
use crate::utils::{orientation_index, round_half_up, Orientation};

/// Half the width of a hot pixel, in grid units.
const TOLERANCE: Real = 0.5;

/// A grid cell containing a vertex or an intersection point.
///
/// The pixel covers the half-open square `[x - 0.5, x + 0.5) × [y - 0.5, y + 0.5)` around
/// its center, in grid units. The left and bottom sides belong to the pixel, the right and top
/// sides do not, so every point of the plane lies in exactly one pixel.
///
/// A pixel is a *node* if it contains an intersection point or several vertices. Segments
/// going through a node are always split at it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HotPixel {
    original_pt: Point<Real>,
    scale: Real,
    center: Point<Real>,
    is_node: bool,
}

impl HotPixel {
    /// The pixel of the grid with cells of width `1 / scale` containing `pt`.
    ///
    /// `pt` is expected to be already rounded to the grid.
    pub fn new(pt: Point<Real>, scale: Real) -> Self {
        debug_assert!(scale > 0.0, "the scale factor must be positive");
        let center = if scale == 1.0 {
            pt
        } else {
            Point::new(round_half_up(pt.x * scale), round_half_up(pt.y * scale))
        };

        Self {
            original_pt: pt,
            scale,
            center,
            is_node: false,
        }
    }

    /// The rounded coordinate this pixel was created for.
    pub fn coordinate(&self) -> &Point<Real> {
        &self.original_pt
    }

    /// The scale of the grid.
    pub fn scale(&self) -> Real {
        self.scale
    }

    /// The width of this pixel.
    pub fn width(&self) -> Real {
        1.0 / self.scale
    }

    /// Is this pixel a node?
    pub fn is_node(&self) -> bool {
        self.is_node
    }

    /// Marks this pixel as a node.
    pub fn set_to_node(&mut self) {
        self.is_node = true;
    }

    fn scaled(&self, p: &Point<Real>) -> Point<Real> {
        if self.scale == 1.0 {
            *p
        } else {
            Point::new(p.x * self.scale, p.y * self.scale)
        }
    }

    /// Does `p` lie in this pixel?
    pub fn intersects_point(&self, p: &Point<Real>) -> bool {
        let p = self.scaled(p);
        p.x < self.center.x + TOLERANCE
            && p.x >= self.center.x - TOLERANCE
            && p.y < self.center.y + TOLERANCE
            && p.y >= self.center.y - TOLERANCE
    }

    /// Does the segment `[p0, p1]` intersect this pixel?
    pub fn intersects_segment(&self, p0: &Point<Real>, p1: &Point<Real>) -> bool {
        self.intersects_scaled(self.scaled(p0), self.scaled(p1))
    }

    fn intersects_scaled(&self, p0: Point<Real>, p1: Point<Real>) -> bool {
        // Orient the segment towards positive x.
        let (p, q) = if p0.x > p1.x { (p1, p0) } else { (p0, p1) };

        let minx = self.center.x - TOLERANCE;
        let maxx = self.center.x + TOLERANCE;
        let miny = self.center.y - TOLERANCE;
        let maxy = self.center.y + TOLERANCE;

        if p.x.min(q.x) >= maxx
            || p.x.max(q.x) < minx
            || p.y.min(q.y) >= maxy
            || p.y.max(q.y) < miny
        {
            return false;
        }

        // Axis-aligned segments overlapping the envelope cross the pixel.
        if p.x == q.x || p.y == q.y {
            return true;
        }

        // The segment touching the upper-left corner only intersects the pixel if it goes
        // down towards the right, inside the pixel.
        let orient_ul = orientation_index(&p, &q, &Point::new(minx, maxy));
        if orient_ul == Orientation::Collinear {
            return p.y >= q.y;
        }

        let orient_ur = orientation_index(&p, &q, &Point::new(maxx, maxy));
        if orient_ur == Orientation::Collinear {
            return p.y <= q.y;
        }

        // Crossing the top side.
        if orient_ul != orient_ur {
            return true;
        }

        let orient_ll = orientation_index(&p, &q, &Point::new(minx, miny));
        // The lower-left corner belongs to the pixel.
        if orient_ll == Orientation::Collinear {
            return true;
        }

        // Crossing the left side.
        if orient_ll != orient_ul {
            return true;
        }

        let orient_lr = orientation_index(&p, &q, &Point::new(maxx, miny));
        if orient_lr == Orientation::Collinear {
            return p.y >= q.y;
        }

        // Crossing the bottom side, or the right side.
        orient_ll != orient_lr || orient_lr != orient_ur
    }
}
