//! Bunnymark - sprite swarm stress test

use clap::Parser;

use bunnymark::cli::Args;
use bunnymark::headless::run_headless;
use bunnymark::{App, BunnymarkConfig};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut config = BunnymarkConfig::load_from(args.config.as_deref())?;
    args.apply(&mut config);
    config.validate()?;

    if let Some(frames) = args.headless {
        log::info!("Starting Bunnymark headless for {frames} frames");
        let report = run_headless(&config, frames);
        println!(
            "{} frames, {} bunnies, mean update {:?}",
            report.frames,
            report.bunnies,
            report.mean_update()
        );
        return Ok(());
    }

    log::info!("Starting Bunnymark");

    pollster::block_on(run(config))
}

async fn run(config: BunnymarkConfig) -> anyhow::Result<()> {
    let (app, event_loop) = App::new(config).await?;
    App::run(event_loop, app)
}
