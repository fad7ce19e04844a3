//! Windowless benchmark run: fixed-step simulation with periodic bursts

use std::time::Duration;

use glam::Vec2;
use web_time::Instant;

use bunnymark_core::Bounds;

use crate::config::BunnymarkConfig;
use crate::state::DemoState;

/// Fixed simulation step for headless runs
pub const HEADLESS_DT: f32 = 1.0 / 60.0;

/// Frames between simulated clicks in the window centre
const CLICK_EVERY: u64 = 60;

/// Outcome of a headless run
#[derive(Debug, Clone)]
pub struct HeadlessReport {
    pub frames: u64,
    pub bunnies: usize,
    pub total_update: Duration,
}

impl HeadlessReport {
    /// Mean wall time spent in the swarm update per frame
    pub fn mean_update(&self) -> Duration {
        if self.frames == 0 {
            Duration::ZERO
        } else {
            self.total_update.div_f64(self.frames as f64)
        }
    }
}

/// Simulate `frames` frames in the configured window bounds, clicking once
/// per second of simulated time in the middle of the window
pub fn run_headless(config: &BunnymarkConfig, frames: u64) -> HeadlessReport {
    let bounds = Bounds::from_size(config.window.width, config.window.height);
    let mut state = DemoState::new(
        &config.swarm,
        config.hud.refresh_interval(),
        config.hud.background,
        bounds,
        1.0,
    );
    let center = Vec2::new(bounds.width / 2.0, bounds.height / 2.0);

    let mut total_update = Duration::ZERO;
    for frame in 0..frames {
        if frame % CLICK_EVERY == 0 {
            state.spawn_at(center);
        }

        let start = Instant::now();
        state.step(HEADLESS_DT, bounds);
        total_update += start.elapsed();

        if frame > 0 && frame % CLICK_EVERY == 0 {
            log::debug!(
                "Frame {}: {} bunnies, last update {:?}",
                frame,
                state.swarm().len(),
                start.elapsed()
            );
        }
    }

    let report = HeadlessReport {
        frames,
        bunnies: state.swarm().len(),
        total_update,
    };
    log::info!(
        "Headless run: {} frames, {} bunnies, mean update {:?}",
        report.frames,
        report.bunnies,
        report.mean_update()
    );
    report
}
