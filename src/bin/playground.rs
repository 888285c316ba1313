//! Headless run of the playground scene: a fixed number of frame-capped ticks, with every
//! frame's rectangles sent to the log instead of a window.

use std::{convert::Infallible, thread, time::Instant};

use rectsim::{Canvas, Fp, Rect, Scene, Settings};

const FRAMES: u64 = 300;
/// Downward pull applied to every body each frame, newtons
const GRAVITY: Fp = 0.002;

struct LogCanvas {
    frame: u64,
}
impl Canvas for LogCanvas {
    type Error = Infallible;

    fn clear(&mut self) -> Result<(), Infallible> {
        self.frame += 1;
        Ok(())
    }
    fn fill_rect(&mut self, rect: Rect) -> Result<(), Infallible> {
        log::trace!("frame {}: {:?}", self.frame, rect);
        Ok(())
    }
}

fn main() -> Result<(), anyhow::Error> {
    use simplelog::LevelFilter::{Info, Off};
    simplelog::TermLogger::init(
        Info,
        simplelog::ConfigBuilder::new()
            .set_target_level(Off)
            .set_location_level(Off)
            .build(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    let settings = Settings::default();
    let mut scene = Scene::playground(&settings)?;
    let mut canvas = LogCanvas { frame: 0 };
    log::info!("{} bodies on a {}x{} screen", scene.len(), settings.screen_width, settings.screen_height);

    let ids: Vec<_> = scene.iter().map(|(id, _)| id).collect();
    let budget = settings.frame_budget();
    let mut last_frame_end = Instant::now();
    let mut held = 0;
    for _ in 0..FRAMES {
        let frame_start = Instant::now();
        let delta = frame_start.duration_since(last_frame_end);

        for &id in &ids {
            scene.apply_newton_force(id, 0.0, GRAVITY)?;
        }
        held += scene.tick_ms(delta.as_millis() as u64)?.held.len();
        if let Err(e) = scene.redraw(&mut canvas) {
            match e {}
        }

        let frame_end = Instant::now();
        last_frame_end = frame_end;
        let spent = frame_end.duration_since(frame_start);
        if spent < budget {
            thread::sleep(budget - spent);
        }
    }

    log::info!("{} frames, {} held-back body steps", canvas.frame, held);
    for (id, rect) in scene.rects() {
        log::info!("{:?} at {:?}", id, rect);
    }
    Ok(())
}
