//! Service Status Dashboard Binary

use chrono::Utc;
use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use status_dashboard::{Config, Dashboard, DashboardError, Resolution, Result, render};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "status_dashboard", version, about = "Service status dashboard")]
struct Cli {
    /// Sampling resolution for the history grid (15min or 1hr)
    #[arg(long, env = "DASHBOARD_RESOLUTION")]
    resolution: Option<Resolution>,

    /// Seed for the synthetic history generator; drawn from the OS when omitted
    #[arg(long, env = "DASHBOARD_SEED")]
    seed: Option<u64>,

    /// Output format
    #[arg(long, default_value = "text")]
    format: OutputFormat,

    /// Comma-separated service names overriding the configured registry
    #[arg(long, value_delimiter = ',')]
    services: Vec<String>,
}

fn main() {
    initialize_tracing();

    info!(
        "Starting status dashboard v{}",
        env!("CARGO_PKG_VERSION")
    );

    if let Err(e) = run() {
        error!("Dashboard failed: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if !cli.services.is_empty() {
        config.service_names = cli.services.clone();
    }

    if let Err(e) = config.validate() {
        return Err(DashboardError::Config(e));
    }

    let resolution = cli.resolution.unwrap_or(config.default_resolution);
    info!(
        "Dashboard configuration - Services: {}, Window: {}h, Resolution: {}",
        config.service_names.join(", "),
        config.history_window_hours,
        resolution
    );

    let dashboard = Dashboard::new(config)?;
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let snapshot = dashboard.snapshot(resolution, Utc::now(), &mut rng)?;

    let rendered = match cli.format {
        OutputFormat::Text => render::render_text(&snapshot),
        OutputFormat::Json => render::render_json(&snapshot)?,
    };
    println!("{}", rendered);

    Ok(())
}

/// Initialize structured logging
fn initialize_tracing() {
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let filter_layer = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(&log_level))
        .unwrap();

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
