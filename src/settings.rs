use std::time::Duration;

use crate::Fp;

/// Compiled-in configuration of the playground scene and its frame loop.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub screen_width: u32,
    pub screen_height: u32,
    pub body_count: usize,
    pub body_width: Fp,
    pub body_height: Fp,
    pub body_mass: Fp,
    /// Upper bound on frames per second. `0` disables the cap.
    pub fps_limit: u32,
    /// Seeds the placement of bodies, so runs are reproducible.
    pub seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            screen_width: 1920,
            screen_height: 1080,
            body_count: 5,
            body_width: 50.0,
            body_height: 50.0,
            body_mass: 1.0,
            fps_limit: 60,
            seed: 0,
        }
    }
}

impl Settings {
    pub fn frame_budget(&self) -> Duration {
        //! Minimum duration of one frame, `Duration::ZERO` when uncapped.
        if self.fps_limit == 0 {
            Duration::ZERO
        } else {
            Duration::from_millis(1000 / u64::from(self.fps_limit))
        }
    }
}
