use crate::{aabb::Aabb, error::{Result, SimError}, render::Rect, Fp, Vec2, M_TO_PX};

/// An axis-aligned rectangular point mass.
///
/// Size and mass are fixed at construction. Forces accumulate between ticks and are
/// consumed by [`Body::compute_next_state`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    /// Top-left corner, px
    pos: Vec2,
    /// Width and height, px
    size: Vec2,
    /// Always finite and > 0
    mass: Fp,
    /// Accumulated force for the current tick, kg * px / s^2
    force: Vec2,
    /// Velocity, px / s
    vel: Vec2,
}

#[inline]
fn finite(v: Vec2, what: &'static str) -> Result<Vec2> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(SimError::NonFiniteInput(what))
    }
}

impl Body {
    pub fn new(x: Fp, y: Fp, width: Fp, height: Fp, mass: Fp) -> Result<Body> {
        //! Creates a body at rest with no accumulated force.
        if !mass.is_finite() || mass <= 0.0 {
            return Err(SimError::InvalidMass(mass));
        }
        if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
            return Err(SimError::InvalidSize { width, height });
        }
        let pos = finite(Vec2::new(x, y), "position")?;

        Ok(Body {
            pos,
            size: Vec2::new(width, height),
            mass,
            force: Vec2::ZERO,
            vel: Vec2::ZERO,
        })
    }
    pub fn with_velocity(mut self, vx: Fp, vy: Fp) -> Result<Body> {
        self.vel = finite(Vec2::new(vx, vy), "velocity")?;
        Ok(self)
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }
    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }
    #[inline]
    pub fn mass(&self) -> Fp {
        self.mass
    }
    #[inline]
    pub fn vel(&self) -> Vec2 {
        self.vel
    }
    #[inline]
    pub fn force(&self) -> Vec2 {
        self.force
    }

    pub fn apply_force(&mut self, fx: Fp, fy: Fp) -> Result<()> {
        //! Adds a force in kg * px / s^2 to this tick's accumulator.
        //! A rejected force leaves the accumulator untouched.
        let f = finite(Vec2::new(fx, fy), "force")?;
        self.force = finite(self.force + f, "accumulated force")?;
        Ok(())
    }
    pub fn apply_newton_force(&mut self, fx: Fp, fy: Fp) -> Result<()> {
        //! Adds a force in newtons, converted into pixel units through [`M_TO_PX`].
        let f = finite(Vec2::new(fx, fy), "force")?;
        self.apply_force(f.x * M_TO_PX, f.y * M_TO_PX)
    }

    pub fn compute_next_state(&self, delta_time: Fp) -> Result<Body> {
        //! Returns the state one integration step of `delta_time` seconds later, leaving `self` as is.
        //! The accumulated force is consumed: the returned body carries none.
        if !delta_time.is_finite() {
            return Err(SimError::NonFiniteInput("time step"));
        }
        if delta_time < 0.0 {
            return Err(SimError::NegativeTimeStep(delta_time));
        }

        // a = F / m
        let acc = self.force / self.mass;
        // s = s0 + v0 * t + a * t^2 / 2
        let pos = self.pos + self.vel * delta_time + acc * (delta_time * delta_time * 0.5);
        // v = v0 + a * t
        let vel = self.vel + acc * delta_time;

        Ok(Body {
            pos: finite(pos, "integrated position")?,
            vel: finite(vel, "integrated velocity")?,
            force: Vec2::ZERO,
            ..*self
        })
    }
    pub fn compute_next_state_ms(&self, delta_time_ms: u64) -> Result<Body> {
        self.compute_next_state(delta_time_ms as Fp / 1000.0)
    }

    pub fn halt(&self) -> Body {
        //! Returns this body where it stands, with no velocity and no pending force.
        Body {
            vel: Vec2::ZERO,
            force: Vec2::ZERO,
            ..*self
        }
    }

    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }
    pub fn bounding_box(&self) -> Rect {
        //! Integer pixel rectangle for drawing. Collision checks use [`Body::aabb`] instead.
        Rect::round(self.pos, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PX_TO_M;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn body(x: Fp, y: Fp, mass: Fp) -> Body {
        Body::new(x, y, 50.0, 50.0, mass).unwrap()
    }

    #[test]
    fn rejects_bad_construction() {
        assert_eq!(Body::new(0.0, 0.0, 1.0, 1.0, 0.0), Err(SimError::InvalidMass(0.0)));
        assert_eq!(Body::new(0.0, 0.0, 1.0, 1.0, -2.0), Err(SimError::InvalidMass(-2.0)));
        assert!(matches!(Body::new(0.0, 0.0, 1.0, 1.0, Fp::NAN), Err(SimError::InvalidMass(_))));
        assert_eq!(
            Body::new(0.0, 0.0, -1.0, 1.0, 1.0),
            Err(SimError::InvalidSize { width: -1.0, height: 1.0 })
        );
        assert_eq!(Body::new(Fp::INFINITY, 0.0, 1.0, 1.0, 1.0), Err(SimError::NonFiniteInput("position")));
        assert_eq!(body(0.0, 0.0, 1.0).with_velocity(Fp::NAN, 0.0), Err(SimError::NonFiniteInput("velocity")));

        // zero-sized bodies are allowed
        assert!(Body::new(0.0, 0.0, 0.0, 0.0, 1.0).is_ok());
    }

    #[test]
    fn forces_accumulate() {
        let mut b = body(0.0, 0.0, 1.0);
        b.apply_force(1.0, 2.0).unwrap();
        b.apply_force(3.0, -4.0).unwrap();
        assert_eq!(b.force(), Vec2::new(4.0, -2.0));

        assert_eq!(b.apply_force(Fp::NAN, 0.0), Err(SimError::NonFiniteInput("force")));
        assert_eq!(b.apply_force(0.0, Fp::NEG_INFINITY), Err(SimError::NonFiniteInput("force")));
        assert_eq!(b.force(), Vec2::new(4.0, -2.0));
    }

    #[test]
    fn newton_force_is_scaled() {
        let mut b = body(0.0, 0.0, 1.0);
        b.apply_newton_force(1.0, -0.5).unwrap();
        assert_relative_eq!(b.force(), Vec2::new(M_TO_PX, -0.5 * M_TO_PX));
        assert_relative_eq!(M_TO_PX * PX_TO_M, 1.0);
    }

    #[test]
    fn zero_delta_is_identity() {
        let mut b = body(12.5, -3.0, 2.0).with_velocity(4.0, -7.0).unwrap();
        b.apply_force(100.0, 30.0).unwrap();

        let next = b.compute_next_state(0.0).unwrap();
        assert_eq!(next.pos(), b.pos());
        assert_eq!(next.vel(), b.vel());
        assert_eq!(next.size(), b.size());
        assert_eq!(next.mass(), b.mass());
        assert_eq!(next.force(), Vec2::ZERO);
    }

    #[test]
    fn force_free_motion() {
        let b = body(10.0, 20.0, 3.0).with_velocity(6.0, -2.0).unwrap();
        let next = b.compute_next_state(0.25).unwrap();
        assert_abs_diff_eq!(next.pos(), Vec2::new(11.5, 19.5), epsilon = 1e-5);
        assert_eq!(next.vel(), b.vel());
    }

    #[test]
    fn constant_force_step() {
        let mut b = body(100.0, 100.0, 1.0);
        b.apply_force(0.0, 10.0).unwrap();

        let next = b.compute_next_state(1.0).unwrap();
        assert_relative_eq!(next.pos(), Vec2::new(100.0, 105.0));
        assert_relative_eq!(next.vel(), Vec2::new(0.0, 10.0));
        assert_eq!(next.force(), Vec2::ZERO);

        // the receiver is untouched
        assert_eq!(b.pos(), Vec2::new(100.0, 100.0));
        assert_eq!(b.force(), Vec2::new(0.0, 10.0));
    }

    #[test]
    fn mass_scaling() {
        let step = |mass: Fp| {
            let mut b = body(0.0, 0.0, mass);
            b.apply_force(10.0, 4.0).unwrap();
            b.compute_next_state(0.5).unwrap()
        };
        let light = step(1.0);
        let heavy = step(2.0);
        assert_relative_eq!(heavy.vel(), light.vel() * 0.5);
        assert_relative_eq!(heavy.pos(), light.pos() * 0.5);
    }

    #[test]
    fn millisecond_step() {
        let mut b = body(0.0, 0.0, 1.0).with_velocity(100.0, 0.0).unwrap();
        b.apply_force(0.0, 2.0).unwrap();
        let next = b.compute_next_state_ms(500).unwrap();
        assert_abs_diff_eq!(next.pos(), Vec2::new(50.0, 0.25), epsilon = 1e-5);
        assert_abs_diff_eq!(next.vel(), Vec2::new(100.0, 1.0), epsilon = 1e-5);
    }

    #[test]
    fn rejects_bad_time_steps() {
        let b = body(0.0, 0.0, 1.0);
        assert_eq!(b.compute_next_state(-0.1), Err(SimError::NegativeTimeStep(-0.1)));
        assert_eq!(b.compute_next_state(Fp::NAN), Err(SimError::NonFiniteInput("time step")));
        assert_eq!(b.compute_next_state(Fp::INFINITY), Err(SimError::NonFiniteInput("time step")));
    }

    #[test]
    fn halt_keeps_place() {
        let mut b = body(3.0, 4.0, 1.0).with_velocity(9.0, 9.0).unwrap();
        b.apply_force(1.0, 1.0).unwrap();
        let h = b.halt();
        assert_eq!(h.pos(), b.pos());
        assert_eq!(h.vel(), Vec2::ZERO);
        assert_eq!(h.force(), Vec2::ZERO);
    }

    #[test]
    fn bounding_box_rounds() {
        let b = Body::new(10.5, -2.5, 49.25, 50.75, 1.0).unwrap();
        assert_eq!(b.bounding_box(), Rect { x: 11, y: -3, width: 49, height: 51 });
        assert_eq!(b.aabb(), Aabb::new(10.5, -2.5, 59.75, 48.25));
    }
}
