//! Axis-aligned bounding boxes in unrounded pixel coordinates.

use crate::{Fp, Vec2};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}
impl Aabb {
    #[inline]
    pub fn new(minx: Fp, miny: Fp, maxx: Fp, maxy: Fp) -> Aabb {
        debug_assert!(!(minx > maxx));
        debug_assert!(!(miny > maxy));

        Aabb {
            min: Vec2::new(minx, miny),
            max: Vec2::new(maxx, maxy),
        }
    }
    #[inline]
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Aabb {
        //! Spans from the top-left corner `pos` across `size`.
        Aabb { min: pos, max: pos + size }
    }

    #[inline]
    pub fn size(self) -> Vec2 {
        self.max - self.min
    }
    #[inline]
    pub fn translate(self, offset: Vec2) -> Aabb {
        Aabb {
            min: self.min + offset,
            max: self.max + offset,
        }
    }
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    #[inline]
    pub fn overlap_test(&self, other: &Aabb) -> bool {
        //! Returns whether the boxes share a region of strictly positive area.
        //! Boxes that only touch along an edge or at a corner do not overlap.
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}
