//! parallel-demo - compare the parallel work processor with serial execution
//!
//! Runs the sample file workload on I/O threads and the nested-loop workload
//! on the CPU pool, then runs the same work serially. Both runs are timed.

use std::io;
use std::ops::Range;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use utilkit::parallel::{
    DEFAULT_PAYLOAD_REPEAT, FileWorkload, ParallelConfig, ParallelWorkProcessor, TaskTimer,
    generate_and_iterate, suffix_ranges,
};

#[derive(Parser)]
#[command(name = "parallel-demo")]
#[command(about = "Time I/O threads plus a CPU pool against serial execution")]
struct Cli {
    /// Number of I/O workers
    #[arg(long, default_value_t = 3)]
    io_workers: usize,

    /// Files each I/O worker creates and deletes
    #[arg(long, default_value_t = 100)]
    files_per_worker: usize,

    /// Copies of the printable character set written to each file
    #[arg(long, default_value_t = DEFAULT_PAYLOAD_REPEAT)]
    payload_repeat: usize,

    /// Directory for the temporary files (default: system temp directory)
    #[arg(long)]
    directory: Option<PathBuf>,

    /// Number of CPU workers
    #[arg(long, default_value_t = 2)]
    cpu_workers: usize,

    /// List size for each CPU worker (work grows with its square)
    #[arg(long, default_value_t = 10_000)]
    list_size: usize,

    /// Threads in the CPU pool (default: number of logical CPUs)
    #[arg(long)]
    cpu_parallelism: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    utilkit::telemetry::init(utilkit::telemetry::DEFAULT_FILTER);
    let cli = Cli::parse();

    let mut config = ParallelConfig::default();
    if let Some(cpu_parallelism) = cli.cpu_parallelism {
        config = config.with_cpu_parallelism(cpu_parallelism);
    }
    let processor = ParallelWorkProcessor::new(config);

    let workload = FileWorkload::new(cli.directory.unwrap_or_else(std::env::temp_dir))
        .with_payload_repeat(cli.payload_repeat);
    let io_arguments = suffix_ranges(cli.io_workers, cli.files_per_worker).with_context(|| {
        format!(
            "{} I/O workers with {} files each exceeds the file suffix range",
            cli.io_workers, cli.files_per_worker
        )
    })?;
    let cpu_arguments = vec![cli.list_size; cli.cpu_workers];

    {
        let _timer = TaskTimer::start("parallel processor tasks");
        let report = processor.run(
            |suffixes: Range<usize>| workload.write_and_delete(suffixes),
            io_arguments.clone(),
            generate_and_iterate,
            cpu_arguments.clone(),
        )?;
        let files = report
            .io_results
            .into_iter()
            .sum::<io::Result<usize>>()
            .with_context(|| format!("file workload failed in {}", workload.directory().display()))?;
        tracing::info!(
            files,
            iterations = report.cpu_results.iter().sum::<u64>(),
            "parallel run complete"
        );
    }

    {
        let _timer = TaskTimer::start("serial process of tasks");
        for suffixes in io_arguments {
            workload
                .write_and_delete(suffixes)
                .with_context(|| format!("file workload failed in {}", workload.directory().display()))?;
        }
        for size in cpu_arguments {
            generate_and_iterate(size);
        }
    }

    Ok(())
}
