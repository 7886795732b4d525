//! statsieve-filter: Prune a raw player stats dump down to the scored fields
//!
//! Usage:
//!   # Filter a dump and print the filtered tree
//!   statsieve-filter playerStats.json
//!
//!   # Write filteredStats.json and structure.json into a directory
//!   statsieve-filter playerStats.json --output-dir ./out
//!
//!   # Print only the key layout, using custom pattern lists
//!   cat playerStats.json | statsieve-filter --config sieve.json --structure-only

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::Value;
use statsieve::{generate_structure, load_stats, save_stats_and_structure, FilterConfig};
use std::io::{stdin, BufReader};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "statsieve-filter")]
#[command(about = "Filter player stats with include/omit patterns", long_about = None)]
struct Args {
    /// Input file (use stdin if omitted)
    #[arg(value_name = "FILE")]
    input: Option<String>,

    /// JSON config with "include", "omit" and "weights" (defaults if omitted)
    #[arg(long, short = 'c')]
    config: Option<String>,

    /// Write filteredStats.json and structure.json into this directory
    #[arg(long, short = 'o')]
    output_dir: Option<String>,

    /// Print the structure instead of the filtered tree
    #[arg(long, conflicts_with = "output_dir")]
    structure_only: bool,

    /// Compact output (no pretty-printing)
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => FilterConfig::from_path(path)?,
        None => FilterConfig::default(),
    };
    let filter = config.filter();

    let raw: Value = match &args.input {
        Some(path) => load_stats(path)?,
        None => serde_json::from_reader(BufReader::new(stdin()))
            .context("Failed to parse JSON from stdin")?,
    };

    if let Some(output_dir) = &args.output_dir {
        let artifacts = save_stats_and_structure(&raw, &filter, output_dir)?;
        info!(
            filtered = %artifacts.filtered_path.display(),
            structure = %artifacts.structure_path.display(),
            "done"
        );
        return Ok(());
    }

    let filtered = filter.apply(&raw);
    let value = if args.structure_only {
        generate_structure(&filtered)
    } else {
        filtered
    };

    let output = if args.compact {
        serde_json::to_string(&value)?
    } else {
        serde_json::to_string_pretty(&value)?
    };

    println!("{}", output);

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "statsieve=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
