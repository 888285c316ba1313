//! Pairwise overlap detection.
//!
//! Every unordered pair is tested once, O(n^2) in the number of bodies. That is fine for the
//! tens of bodies a scene holds; a broad phase (grid, sweep and prune) would slot in here
//! by narrowing down which pairs [`CollisionChecker::scan`] visits.

use fnv::FnvBuildHasher;
use indexmap::IndexSet;

use crate::{aabb::Aabb, body::Body, error::{Result, SimError}};

/// Indices into the checked slice, in the order they were first found colliding.
pub type CollidingSet = IndexSet<usize, FnvBuildHasher>;

/// Which members of a colliding pair get reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollisionPolicy {
    /// Both bodies of every colliding pair.
    Symmetric,
    /// Only the lower-indexed body of each pair. A body that only ever collides with
    /// lower-indexed bodies goes unreported.
    LowerIndexOnly,
}
impl Default for CollisionPolicy {
    fn default() -> Self {
        CollisionPolicy::Symmetric
    }
}

/// Stateless AABB overlap query over a snapshot of bodies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionChecker {
    pub policy: CollisionPolicy,
}

impl CollisionChecker {
    pub fn new(policy: CollisionPolicy) -> CollisionChecker {
        CollisionChecker { policy }
    }

    pub fn check_collisions(&self, bodies: &[Body]) -> Result<CollidingSet> {
        //! Returns the indices of bodies overlapping at least one other body, per `self.policy`.
        //! Fewer than two bodies never collide.
        let mut set = CollidingSet::default();
        let policy = self.policy;
        Self::scan(bodies, |i, j| {
            set.insert(i);
            if policy == CollisionPolicy::Symmetric {
                set.insert(j);
            }
        })?;
        Ok(set)
    }

    pub fn colliding_pairs(&self, bodies: &[Body]) -> Result<Vec<(usize, usize)>> {
        //! Returns every overlapping pair `(i, j)` with `i < j`, in scan order.
        let mut pairs = Vec::new();
        Self::scan(bodies, |i, j| pairs.push((i, j)))?;
        Ok(pairs)
    }

    fn scan(bodies: &[Body], mut hit: impl FnMut(usize, usize)) -> Result<()> {
        // NaN compares false everywhere, which would read as "no overlap"
        let mut boxes: Vec<Aabb> = Vec::with_capacity(bodies.len());
        for b in bodies {
            let aabb = b.aabb();
            if !aabb.is_finite() {
                return Err(SimError::NonFiniteInput("body extent"));
            }
            boxes.push(aabb);
        }

        for (i, a) in boxes.iter().enumerate() {
            for (j, b) in boxes.iter().enumerate().skip(i + 1) {
                if a.overlap_test(b) {
                    hit(i, j);
                }
            }
        }
        Ok(())
    }
}
