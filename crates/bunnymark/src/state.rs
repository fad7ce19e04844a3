//! Frame-loop state shared by the windowed app and headless runs
//!
//! Owns the swarm, the frame clock, the HUD labels and the spawn RNG, and
//! knows nothing about windows or GPUs.

use std::time::Duration;

use glam::Vec2;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;

use bunnymark_core::{Background, Bounds, FrameClock, HudLabels, Swarm};

use crate::config::SwarmConfig;

/// Simulation state advanced once per frame
pub struct DemoState {
    swarm: Swarm,
    clock: FrameClock,
    labels: HudLabels,
    rng: Xoshiro256StarStar,
    background: Background,

    /// Sprite size in physical pixels
    sprite_size: Vec2,
    spawn_per_click: usize,
    max_speed: f32,
}

impl DemoState {
    /// Build the state and scatter the initial bunnies over `bounds`.
    ///
    /// `pixel_density` scales the configured (logical) sprite size.
    pub fn new(
        config: &SwarmConfig,
        refresh_interval: Duration,
        background: Background,
        bounds: Bounds,
        pixel_density: f32,
    ) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        log::debug!("Spawn RNG seed: {seed}");

        let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
        let sprite_size = Vec2::new(config.sprite_width, config.sprite_height) * pixel_density;

        let mut swarm = Swarm::with_capacity(config.initial_capacity);
        swarm.spawn_scattered(
            bounds,
            sprite_size,
            config.initial_count,
            config.max_speed,
            &mut rng,
        );

        Self {
            swarm,
            clock: FrameClock::new(),
            labels: HudLabels::new(refresh_interval),
            rng,
            background,
            sprite_size,
            spawn_per_click: config.spawn_per_click,
            max_speed: config.max_speed,
        }
    }

    /// Spawn one click's worth of bunnies centred on `position` (physical px)
    pub fn spawn_at(&mut self, position: Vec2) -> usize {
        self.swarm.spawn_burst(
            position,
            self.sprite_size,
            self.spawn_per_click,
            self.max_speed,
            &mut self.rng,
        )
    }

    /// Advance one frame at timestamp `now`: update the swarm, then refresh
    /// labels if due. Returns the delta that was applied.
    pub fn frame(&mut self, now: Duration, bounds: Bounds) -> f32 {
        let dt = self.clock.tick(now);
        self.swarm.update(dt, bounds);
        self.labels.frame(now, self.swarm.len());
        dt
    }

    /// Advance by an explicit delta, bypassing the clock
    pub fn step(&mut self, dt: f32, bounds: Bounds) {
        self.swarm.update(dt, bounds);
    }

    /// Rescale sprite size for bunnies spawned from now on
    pub fn set_pixel_density(&mut self, config: &SwarmConfig, pixel_density: f32) {
        self.sprite_size = Vec2::new(config.sprite_width, config.sprite_height) * pixel_density;
    }

    pub fn swarm(&self) -> &Swarm {
        &self.swarm
    }

    pub fn labels(&self) -> &HudLabels {
        &self.labels
    }

    pub fn sprite_size(&self) -> Vec2 {
        self.sprite_size
    }

    /// Clear colour at `elapsed` since start
    pub fn clear_color(&self, elapsed: Duration) -> [f64; 4] {
        self.background.clear_color_at(elapsed.as_secs_f32())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(initial: usize, density: f32) -> DemoState {
        let config = SwarmConfig {
            initial_count: initial,
            seed: Some(1),
            ..SwarmConfig::default()
        };
        DemoState::new(
            &config,
            Duration::from_secs(1),
            Background::White,
            Bounds::new(352.0, 430.0),
            density,
        )
    }

    #[test]
    fn test_initial_population() {
        let state = state(1, 1.0);
        assert_eq!(state.swarm().len(), 1);
        assert_eq!(state.sprite_size(), Vec2::new(26.0, 37.0));
    }

    #[test]
    fn test_pixel_density_scales_sprites() {
        let state = state(3, 2.0);
        assert_eq!(state.sprite_size(), Vec2::new(52.0, 74.0));
        for bunny in state.swarm() {
            assert_eq!(bunny.rect.size(), Vec2::new(52.0, 74.0));
        }
    }

    #[test]
    fn test_click_spawns_configured_burst() {
        let mut state = state(1, 1.0);
        assert_eq!(state.spawn_at(Vec2::new(176.0, 215.0)), 1000);
        assert_eq!(state.swarm().len(), 1001);
    }

    #[test]
    fn test_first_frame_has_zero_delta() {
        let mut state = state(5, 1.0);
        let before: Vec<_> = state.swarm().iter().map(|b| b.rect).collect();

        let dt = state.frame(Duration::from_millis(250), Bounds::new(352.0, 430.0));

        assert_eq!(dt, 0.0);
        let after: Vec<_> = state.swarm().iter().map(|b| b.rect).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_labels_follow_frames() {
        let mut state = state(1, 1.0);
        let bounds = Bounds::new(352.0, 430.0);
        state.spawn_at(Vec2::new(100.0, 100.0));

        state.frame(Duration::from_millis(500), bounds);
        assert_eq!(state.labels().count_text(), None);

        state.frame(Duration::from_millis(1000), bounds);
        assert_eq!(state.labels().count_text(), Some("Bunnies: 1001"));
        assert_eq!(state.labels().fps_text(), "FPS: 2");
    }

    #[test]
    fn test_seeded_runs_repeat() {
        let a = state(50, 1.0);
        let b = state(50, 1.0);
        let rects_a: Vec<_> = a.swarm().iter().copied().collect();
        let rects_b: Vec<_> = b.swarm().iter().copied().collect();
        assert_eq!(rects_a, rects_b);
    }

    #[test]
    fn test_unseeded_runs_differ() {
        let config = SwarmConfig {
            initial_count: 50,
            seed: None,
            ..SwarmConfig::default()
        };
        let make = || {
            DemoState::new(
                &config,
                Duration::from_secs(1),
                Background::White,
                Bounds::new(352.0, 430.0),
                1.0,
            )
        };
        let rects_a: Vec<_> = make().swarm().iter().copied().collect();
        let rects_b: Vec<_> = make().swarm().iter().copied().collect();
        assert_ne!(rects_a, rects_b);
    }
}
