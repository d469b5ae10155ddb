//! Demo binary: runs a breathing session headlessly against the trace
//! sink and prints the session record as JSON on exit.

use std::time::Duration;

use clap::Parser;

use orrery_app::error::PacerResult;
use orrery_app::session::SessionClock;
use orrery_app::sink::TraceSink;
use orrery_app::state::PacerRuntime;
use orrery_core::config::PacerConfig;
use orrery_core::enums::RefreshPolicy;
use orrery_engine::engine::EngineConfig;

#[derive(Parser)]
#[command(name = "orrery")]
#[command(about = "ORRERY breathing pacer demo session")]
struct Args {
    /// RNG seed (same seed = same animation).
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Layout viewport size in layout units.
    #[arg(long, default_value = "400")]
    bounding_size: f64,

    /// Number of orbiting satellites.
    #[arg(long, default_value = "24")]
    satellites: i32,

    /// Inhale duration in seconds.
    #[arg(long, default_value = "4")]
    inhale: f64,

    /// Post-inhale hold duration in seconds.
    #[arg(long, default_value = "1")]
    hold: f64,

    /// Exhale duration in seconds.
    #[arg(long, default_value = "4")]
    exhale: f64,

    /// Post-exhale rest duration in seconds.
    #[arg(long, default_value = "1")]
    rest: f64,

    /// Size variance percentage.
    #[arg(long, default_value = "0")]
    size_variance: f64,

    /// Lateral (angular) variance percentage.
    #[arg(long, default_value = "0")]
    lateral_variance: f64,

    /// Radial (distance) variance percentage.
    #[arg(long, default_value = "0")]
    radial_variance: f64,

    /// Animate satellite sizes toward fresh per-cycle targets.
    #[arg(long, default_value = "false")]
    dynamic_size: bool,

    /// Session length in seconds.
    #[arg(long, default_value = "12")]
    run_secs: u64,
}

fn main() -> PacerResult<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let pacer = PacerConfig {
        satellite_count: args.satellites,
        inhale_secs: args.inhale,
        hold_secs: args.hold,
        exhale_secs: args.exhale,
        rest_secs: args.rest,
        size_variance_pct: args.size_variance,
        lateral_variance_pct: args.lateral_variance,
        radial_variance_pct: args.radial_variance,
        dynamic_size: args.dynamic_size,
        ..PacerConfig::default()
    };

    let clock = SessionClock::start(pacer.clone());
    let runtime = PacerRuntime::new();
    runtime.start(
        EngineConfig {
            seed: args.seed,
            bounding_size: args.bounding_size,
            refresh_policy: RefreshPolicy::default(),
            pacer,
        },
        Box::new(TraceSink),
    )?;

    std::thread::sleep(Duration::from_secs(args.run_secs));

    let cycles = runtime.snapshot()?.map(|frame| frame.cycle).unwrap_or(0);
    runtime.shutdown()?;

    let record = clock.finish(cycles);
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}
