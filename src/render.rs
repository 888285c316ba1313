//! The boundary towards whatever draws the scene.

use crate::{Fp, Vec2};

/// An integer pixel rectangle, as handed to a [`Canvas`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}
impl Rect {
    #[inline]
    pub fn round(pos: Vec2, size: Vec2) -> Rect {
        //! Rounds each component half away from zero.
        Rect {
            x: round_px(pos.x),
            y: round_px(pos.y),
            width: round_px(size.x),
            height: round_px(size.y),
        }
    }
}

#[inline]
fn round_px(v: Fp) -> i32 {
    // float -> int `as` casts saturate
    v.round() as i32
}

/// A drawing surface the scene can be rendered onto.
///
/// Failures are reported back to the caller but never feed into simulation state.
pub trait Canvas {
    type Error: std::fmt::Debug;

    fn clear(&mut self) -> Result<(), Self::Error>;
    fn fill_rect(&mut self, rect: Rect) -> Result<(), Self::Error>;
}
