//! Rectangular point-mass bodies, integrated under simple Newtonian forces and checked
//! for pairwise axis-aligned overlap every tick.
//!
//! The [`Scene`] owns all bodies and advances them in two phases: every body first computes
//! its hypothetical next state, the [`CollisionChecker`] looks at all of those at once,
//! and only then is each body's state committed. Rendering goes through the [`Canvas`] seam.

pub mod aabb;
pub mod body;
pub mod collide;
pub mod error;
pub mod render;
pub mod scene;
pub mod settings;

pub use aabb::Aabb;
pub use body::Body;
pub use collide::{CollidingSet, CollisionChecker, CollisionPolicy};
pub use error::{Result, SimError};
pub use render::{Canvas, Rect};
pub use scene::{BodyId, Scene, TickReport};
pub use settings::Settings;

#[cfg(not(feature = "f64"))]
pub type Fp = f32;
#[cfg(not(feature = "f64"))]
pub type Vec2 = glam::Vec2;

#[cfg(feature = "f64")]
pub type Fp = f64;
#[cfg(feature = "f64")]
pub type Vec2 = glam::DVec2;

/// Pixels per metre. Converts forces given in newtons into the pixel units bodies integrate in.
pub const M_TO_PX: Fp = 7529.0;
/// Metres per pixel.
pub const PX_TO_M: Fp = 1.0 / M_TO_PX;
