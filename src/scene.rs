//! The simulation driver: owns every body and advances them together.

use fnv::FnvBuildHasher;
use indexmap::IndexMap;
use log::{debug, trace, warn};

use crate::{
    body::Body,
    collide::CollisionChecker,
    error::{Result, SimError},
    render::{Canvas, Rect},
    settings::Settings,
    Fp,
};

/// Handle to a body owned by a [`Scene`]. Never reused, even after the body is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(u64);

/// What happened during one [`Scene::tick`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Bodies whose step was refused because it would have overlapped another body, in scene order.
    pub held: Vec<BodyId>,
}

#[derive(Debug, Clone, Default)]
pub struct Scene {
    /// Insertion ordered, which is also the order collisions are checked in.
    bodies: IndexMap<BodyId, Body, FnvBuildHasher>,
    next_id: u64,
    checker: CollisionChecker,
}

impl Scene {
    pub fn new(checker: CollisionChecker) -> Scene {
        Scene {
            bodies: IndexMap::default(),
            next_id: 0,
            checker,
        }
    }

    pub fn playground(settings: &Settings) -> Result<Scene> {
        //! Scatters `settings.body_count` identical bodies over the screen, placed from `settings.seed`.
        let mut rng = fastrand::Rng::with_seed(settings.seed);
        let mut scene = Scene::default();
        for _ in 0..settings.body_count {
            let x = rng.u32(0..settings.screen_width.max(1)) as Fp;
            let y = rng.u32(0..settings.screen_height.max(1)) as Fp;
            scene.add_body(Body::new(
                x,
                y,
                settings.body_width,
                settings.body_height,
                settings.body_mass,
            )?);
        }
        debug!("playground scene with {} bodies (seed {})", scene.len(), settings.seed);
        Ok(scene)
    }

    #[inline]
    pub fn checker(&self) -> &CollisionChecker {
        &self.checker
    }

    pub fn add_body(&mut self, body: Body) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        self.bodies.insert(id, body);
        id
    }
    pub fn remove_body(&mut self, id: BodyId) -> Option<Body> {
        self.bodies.shift_remove(&id)
    }

    #[inline]
    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(&id)
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.bodies.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = (BodyId, &Body)> + '_ {
        self.bodies.iter().map(|(&id, b)| (id, b))
    }

    pub fn apply_force(&mut self, id: BodyId, fx: Fp, fy: Fp) -> Result<()> {
        self.bodies
            .get_mut(&id)
            .ok_or(SimError::UnknownBody(id))?
            .apply_force(fx, fy)
    }
    pub fn apply_newton_force(&mut self, id: BodyId, fx: Fp, fy: Fp) -> Result<()> {
        self.bodies
            .get_mut(&id)
            .ok_or(SimError::UnknownBody(id))?
            .apply_newton_force(fx, fy)
    }

    pub fn tick(&mut self, delta_time: Fp) -> Result<TickReport> {
        //! Advances every body by `delta_time` seconds.
        //!
        //! All next states are computed and checked against each other before any is committed.
        //! A body whose next state overlaps another's stays where it is and loses its velocity.
        //! On error nothing is committed.
        trace!("tick: {} bodies, dt {}", self.bodies.len(), delta_time);

        let next = self
            .bodies
            .values()
            .map(|b| b.compute_next_state(delta_time))
            .collect::<Result<Vec<Body>>>()?;
        let colliding = self.checker.check_collisions(&next)?;

        let mut report = TickReport { held: Vec::with_capacity(colliding.len()) };
        for (i, ((&id, body), next)) in self.bodies.iter_mut().zip(next).enumerate() {
            if colliding.contains(&i) {
                *body = body.halt();
                report.held.push(id);
            } else {
                *body = next;
            }
        }

        if !report.held.is_empty() {
            debug!("held back {:?}", report.held);
        }
        Ok(report)
    }
    pub fn tick_ms(&mut self, delta_time_ms: u64) -> Result<TickReport> {
        self.tick(delta_time_ms as Fp / 1000.0)
    }

    pub fn rects(&self) -> Vec<(BodyId, Rect)> {
        self.bodies.iter().map(|(&id, b)| (id, b.bounding_box())).collect()
    }

    pub fn redraw<C: Canvas>(&self, canvas: &mut C) -> std::result::Result<(), C::Error> {
        //! Clears `canvas` and fills in every body's bounding box.
        let res = canvas
            .clear()
            .and_then(|()| self.bodies.values().try_for_each(|b| canvas.fill_rect(b.bounding_box())));
        if let Err(e) = &res {
            warn!("redraw failed: {:?}", e);
        }
        res
    }
}
