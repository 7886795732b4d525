//! statsieve-score: Compute the ranking score of a raw player stats dump
//!
//! The dump is filtered with the configured include/omit lists before
//! scoring. Players with no SkyWars or BedWars games have no score.
//!
//! Usage:
//!   statsieve-score playerStats.json
//!   statsieve-score --raw --breakdown < playerStats.json

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::Value;
use statsieve::{calculate_breakdown, load_stats, FilterConfig, Rating};
use std::io::{stdin, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "statsieve-score")]
#[command(about = "Compute a player's ranking score from raw stats", long_about = None)]
struct Args {
    /// Input file (use stdin if omitted)
    #[arg(value_name = "FILE")]
    input: Option<String>,

    /// JSON config with "include", "omit" and "weights" (defaults if omitted)
    #[arg(long, short = 'c')]
    config: Option<String>,

    /// Print the unrounded score, including NaN and inf
    #[arg(long)]
    raw: bool,

    /// Print the per-namespace parts as JSON
    #[arg(long)]
    breakdown: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "statsieve=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => FilterConfig::from_path(path)?,
        None => FilterConfig::default(),
    };

    let raw: Value = match &args.input {
        Some(path) => load_stats(path)?,
        None => serde_json::from_reader(BufReader::new(stdin()))
            .context("Failed to parse JSON from stdin")?,
    };

    let filtered = config.filter().apply(&raw);
    let breakdown = calculate_breakdown(&filtered, &config.weights);

    if args.breakdown {
        // serde_json writes non-finite floats as null
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
    }

    if args.raw {
        println!("{}", breakdown.total);
    } else {
        println!("Estimated ELO: {}", Rating(breakdown.total));
    }

    Ok(())
}
