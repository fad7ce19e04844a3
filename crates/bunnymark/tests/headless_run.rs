//! Windowless runs through the public API

use std::time::Duration;

use glam::Vec2;

use bunnymark::BunnymarkConfig;
use bunnymark::DemoState;
use bunnymark::cli::Args;
use bunnymark::headless::run_headless;
use bunnymark_core::{Background, Bounds};
use clap::Parser;

fn seeded_config() -> BunnymarkConfig {
    let mut config = BunnymarkConfig::default();
    config.swarm.seed = Some(7);
    config
}

#[test]
fn test_headless_run_with_cli_overrides() {
    let args = Args::parse_from([
        "bunnymark",
        "--spawn-per-click",
        "10",
        "--initial",
        "5",
        "--seed",
        "3",
        "--headless",
        "121",
    ]);
    let mut config = BunnymarkConfig::default();
    args.apply(&mut config);
    config.validate().expect("overridden config should be valid");

    let report = run_headless(&config, args.headless.unwrap_or(0));

    // Clicks on frames 0, 60 and 120
    assert_eq!(report.frames, 121);
    assert_eq!(report.bunnies, 5 + 3 * 10);
}

#[test]
fn test_headless_runs_repeat_with_seed() {
    let config = seeded_config();
    let a = run_headless(&config, 90);
    let b = run_headless(&config, 90);
    assert_eq!(a.bunnies, b.bunnies);
}

#[test]
fn test_frame_loop_keeps_bunnies_near_window() {
    let config = seeded_config();
    let bounds = Bounds::from_size(config.window.width, config.window.height);
    let mut state = DemoState::new(
        &config.swarm,
        config.hud.refresh_interval(),
        Background::White,
        bounds,
        1.0,
    );
    state.spawn_at(Vec2::new(176.0, 215.0));

    // Two simulated seconds at 60 Hz
    for frame in 0..=120u64 {
        state.frame(Duration::from_millis(frame * 1000 / 60), bounds);
    }

    let slack = config.swarm.max_speed / 60.0 * 2.0;
    for bunny in state.swarm() {
        let pos = bunny.rect.position();
        assert!(pos.x >= -slack && pos.x <= bounds.width + slack);
        assert!(pos.y >= -slack && pos.y <= bounds.height + slack);
    }
    assert_eq!(state.labels().count_text(), Some("Bunnies: 1001"));
}

#[test]
fn test_pulse_background_changes_over_time() {
    let mut config = seeded_config();
    config.hud.background = Background::Pulse;
    let state = DemoState::new(
        &config.swarm,
        config.hud.refresh_interval(),
        config.hud.background,
        Bounds::new(352.0, 430.0),
        1.0,
    );

    let start = state.clear_color(Duration::ZERO);
    let later = state.clear_color(Duration::from_millis(1500));
    assert_ne!(start, later);
}
