use std::io;

use clap::Parser;
use landscape::{build, read_rows, Jitter, LandscapeConfig, LandscapeError};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "landscape_summary")]
#[command(about = "Read organisation rows (JSON array) from stdin and print the dashboard summary")]
struct Args {
    /// Show only organisations flagged relevant (`--relevant-only=false` turns
    /// off LANDSCAPE_RELEVANT_ONLY)
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    relevant_only: Option<bool>,

    /// Restrict to a sector (repeatable)
    #[arg(long)]
    sector: Vec<String>,

    /// Restrict to a target area (repeatable)
    #[arg(long)]
    target_area: Vec<String>,

    /// Jitter RNG seed. Falls back to LANDSCAPE_JITTER_SEED.
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum jitter in degrees (0 disables). Falls back to LANDSCAPE_JITTER_SPAN.
    #[arg(long)]
    jitter: Option<f64>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = apply_args(LandscapeConfig::from_env()?, &args)?;

    let rows = read_rows(io::stdin().lock())?;
    info!(rows = rows.len(), "Read organisation rows");

    let dashboard = build(rows, &config);

    let output = if args.pretty {
        serde_json::to_string_pretty(&dashboard)?
    } else {
        serde_json::to_string(&dashboard)?
    };
    println!("{}", output);

    Ok(())
}

/// Command-line flags win over environment values.
fn apply_args(mut config: LandscapeConfig, args: &Args) -> Result<LandscapeConfig, LandscapeError> {
    if let Some(relevant_only) = args.relevant_only {
        config.filters.relevant_only = relevant_only;
    }
    if !args.sector.is_empty() {
        config.filters.sectors = args.sector.clone();
    }
    if !args.target_area.is_empty() {
        config.filters.target_areas = args.target_area.clone();
    }
    if args.seed.is_some() || args.jitter.is_some() {
        config.jitter = Jitter::new(
            args.seed.unwrap_or(config.jitter.seed()),
            args.jitter.unwrap_or(config.jitter.span()),
        )?;
    }
    Ok(config)
}
