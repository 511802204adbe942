//! multi-search - locate ascending targets in a sorted sequence
//!
//! Usage:
//!   multi-search [--sequence 1,2,3] [--targets 1,3] [--prepare] [--json]

use anyhow::{Context, ensure};
use clap::Parser;
use utilkit::search::{MultiSearch, SortedSlice, TargetReport, is_strictly_sorted, prepare_targets};

#[derive(Parser)]
#[command(name = "multi-search")]
#[command(about = "Find several ascending targets in a sorted sequence with binary search")]
struct Cli {
    /// Strictly ascending sequence to search, comma separated
    #[arg(long, value_delimiter = ',', default_values_t = vec![1, 2, 3, 4, 5, 6, 7])]
    sequence: Vec<i64>,

    /// Strictly ascending targets to locate, comma separated
    #[arg(long, value_delimiter = ',', default_values_t = vec![1, 4, 6, 8])]
    targets: Vec<i64>,

    /// Sort and deduplicate the targets before searching
    #[arg(long)]
    prepare: bool,

    /// Print the per-target reports as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    utilkit::telemetry::init(utilkit::telemetry::DEFAULT_FILTER);
    let cli = Cli::parse();

    let sequence = SortedSlice::new(cli.sequence.as_slice())
        .context("--sequence must be strictly ascending")?;
    let targets = if cli.prepare {
        prepare_targets(cli.targets)
    } else {
        cli.targets
    };
    ensure!(
        is_strictly_sorted(&targets),
        "--targets must be strictly ascending (use --prepare to sort and deduplicate them)"
    );

    let reports: Vec<TargetReport<i64>> = MultiSearch::new(sequence.as_slice(), targets).collect();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            println!("{report}");
        }
    }
    Ok(())
}
