//! Fire-and-join launcher for I/O-bound and CPU-bound workers.
//!
//! I/O workers each get a dedicated, named OS thread so blocking calls
//! overlap. CPU workers are mapped over a fixed-size rayon pool sized by
//! [`ParallelConfig::cpu_parallelism`]. Both phases start every task before
//! joining any, always join every task, and return results in argument
//! order. There is no queueing, cancellation or retry.

use std::panic::{self, AssertUnwindSafe};
use std::thread;
use std::time::Duration;

use rayon::prelude::*;

use super::config::ParallelConfig;
use super::error::{ParallelError, WorkerKind, panic_message};
use super::timer::time_task;

/// Runs `worker` once per argument, each call on its own named thread.
///
/// All threads are started before any is joined. Results are returned in
/// argument order.
///
/// # Errors
///
/// - [`ParallelError::ThreadSpawn`] if a thread could not be started (the
///   already started ones are still joined)
/// - [`ParallelError::WorkerPanicked`] for the first worker, by index, that
///   panicked
///
/// # Examples
///
/// ```rust
/// use utilkit::parallel::{run_io_tasks, ParallelConfig};
///
/// let lengths = run_io_tasks(|text: &str| text.len(), vec!["a", "bb", "ccc"], &ParallelConfig::default())
///     .unwrap();
/// assert_eq!(lengths, vec![1, 2, 3]);
/// ```
pub fn run_io_tasks<A, R, F>(
    worker: F,
    arguments: Vec<A>,
    config: &ParallelConfig,
) -> Result<Vec<R>, ParallelError>
where
    F: Fn(A) -> R + Sync,
    A: Send,
    R: Send,
{
    let worker = &worker;

    thread::scope(|scope| {
        let mut handles = Vec::with_capacity(arguments.len());
        let mut spawn_error = None;

        for (index, argument) in arguments.into_iter().enumerate() {
            let spawned = thread::Builder::new()
                .name(config.io_thread_name(index))
                .spawn_scoped(scope, move || worker(argument));
            match spawned {
                Ok(handle) => handles.push(handle),
                Err(source) => {
                    spawn_error = Some(ParallelError::ThreadSpawn { index, source });
                    break;
                }
            }
        }
        tracing::info!(threads = handles.len(), "started all IO threads");

        let mut results = Vec::with_capacity(handles.len());
        let mut first_panic = None;
        for (index, handle) in handles.into_iter().enumerate() {
            match handle.join() {
                Ok(result) => results.push(result),
                Err(payload) => {
                    let message = panic_message(payload.as_ref());
                    tracing::error!(index, %message, "IO worker panicked");
                    first_panic.get_or_insert(ParallelError::WorkerPanicked {
                        kind: WorkerKind::Io,
                        index,
                        message,
                    });
                }
            }
        }

        if let Some(error) = spawn_error.or(first_panic) {
            return Err(error);
        }
        tracing::info!(threads = results.len(), "all IO threads have finished");
        Ok(results)
    })
}

/// Maps `worker` over the arguments on a dedicated pool of
/// `config.cpu_parallelism` threads.
///
/// The pool lives only for the duration of the call. Results are returned
/// in argument order.
///
/// # Errors
///
/// - [`ParallelError::InvalidParallelism`] if the pool size is 0
/// - [`ParallelError::PoolBuild`] if the pool could not be created
/// - [`ParallelError::WorkerPanicked`] for the first worker, by index, that
///   panicked
///
/// # Examples
///
/// ```rust
/// use utilkit::parallel::{run_cpu_tasks, ParallelConfig};
///
/// let config = ParallelConfig::default().with_cpu_parallelism(2);
/// let squares = run_cpu_tasks(|value: u64| value * value, vec![1, 2, 3], &config).unwrap();
/// assert_eq!(squares, vec![1, 4, 9]);
/// ```
pub fn run_cpu_tasks<A, R, F>(
    worker: F,
    arguments: Vec<A>,
    config: &ParallelConfig,
) -> Result<Vec<R>, ParallelError>
where
    F: Fn(A) -> R + Sync,
    A: Send,
    R: Send,
{
    config.validate()?;

    let prefix = config.cpu_thread_prefix.clone();
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.cpu_parallelism)
        .thread_name(move |slot| format!("{prefix}-{slot}"))
        .build()?;

    let task_count = arguments.len();
    tracing::info!(
        tasks = task_count,
        threads = config.cpu_parallelism,
        "started all CPU tasks"
    );

    let outcomes: Vec<Result<R, String>> = pool.install(|| {
        arguments
            .into_par_iter()
            .map(|argument| {
                panic::catch_unwind(AssertUnwindSafe(|| worker(argument)))
                    .map_err(|payload| panic_message(payload.as_ref()))
            })
            .collect()
    });

    let mut results = Vec::with_capacity(task_count);
    for (index, outcome) in outcomes.into_iter().enumerate() {
        match outcome {
            Ok(result) => results.push(result),
            Err(message) => {
                tracing::error!(index, %message, "CPU worker panicked");
                return Err(ParallelError::WorkerPanicked {
                    kind: WorkerKind::Cpu,
                    index,
                    message,
                });
            }
        }
    }

    tracing::info!(tasks = task_count, "finished all CPU tasks");
    Ok(results)
}

/// Results of one [`ParallelWorkProcessor::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParallelReport<IoResult, CpuResult> {
    /// I/O worker results, in argument order.
    pub io_results: Vec<IoResult>,
    /// CPU worker results, in argument order.
    pub cpu_results: Vec<CpuResult>,
    /// Wall-clock time of the I/O phase.
    pub io_elapsed: Duration,
    /// Wall-clock time of the CPU phase.
    pub cpu_elapsed: Duration,
}

impl<IoResult, CpuResult> ParallelReport<IoResult, CpuResult> {
    /// Total wall-clock time of both phases.
    pub fn elapsed(&self) -> Duration {
        self.io_elapsed + self.cpu_elapsed
    }
}

/// Runs an I/O phase on threads, then a CPU phase on a pool.
///
/// # Examples
///
/// ```rust
/// use utilkit::parallel::{ParallelConfig, ParallelWorkProcessor};
///
/// let processor = ParallelWorkProcessor::new(ParallelConfig::default().with_cpu_parallelism(2));
/// let report = processor
///     .run(
///         |name: &str| name.to_uppercase(),
///         vec!["a", "b"],
///         |size: usize| (0..size).sum::<usize>(),
///         vec![10, 100],
///     )
///     .unwrap();
///
/// assert_eq!(report.io_results, vec!["A", "B"]);
/// assert_eq!(report.cpu_results, vec![45, 4950]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ParallelWorkProcessor {
    config: ParallelConfig,
}

impl ParallelWorkProcessor {
    /// Creates a processor with the given configuration.
    #[must_use]
    pub const fn new(config: ParallelConfig) -> Self {
        Self { config }
    }

    /// The processor configuration.
    pub const fn config(&self) -> &ParallelConfig {
        &self.config
    }

    /// Runs `io_worker` over `io_arguments` on threads, then `cpu_worker`
    /// over `cpu_arguments` on the pool.
    ///
    /// Either argument list may be empty. The CPU phase does not start if
    /// the I/O phase failed.
    ///
    /// # Errors
    ///
    /// Any error from [`run_io_tasks`] or [`run_cpu_tasks`].
    pub fn run<IoArgument, IoResult, IoWorker, CpuArgument, CpuResult, CpuWorker>(
        &self,
        io_worker: IoWorker,
        io_arguments: Vec<IoArgument>,
        cpu_worker: CpuWorker,
        cpu_arguments: Vec<CpuArgument>,
    ) -> Result<ParallelReport<IoResult, CpuResult>, ParallelError>
    where
        IoWorker: Fn(IoArgument) -> IoResult + Sync,
        IoArgument: Send,
        IoResult: Send,
        CpuWorker: Fn(CpuArgument) -> CpuResult + Sync,
        CpuArgument: Send,
        CpuResult: Send,
    {
        let (io_results, io_elapsed) = time_task("IO tasks", || {
            run_io_tasks(io_worker, io_arguments, &self.config)
        });
        let io_results = io_results?;

        let (cpu_results, cpu_elapsed) = time_task("CPU tasks", || {
            run_cpu_tasks(cpu_worker, cpu_arguments, &self.config)
        });
        let cpu_results = cpu_results?;

        Ok(ParallelReport {
            io_results,
            cpu_results,
            io_elapsed,
            cpu_elapsed,
        })
    }
}
