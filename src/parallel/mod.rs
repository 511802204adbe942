//! Running I/O-bound and CPU-bound workers in parallel.
//!
//! - [`run_io_tasks`]: one named OS thread per argument
//! - [`run_cpu_tasks`]: a dedicated, fixed-size worker pool
//! - [`ParallelWorkProcessor`]: the I/O phase followed by the CPU phase,
//!   each timed
//! - [`TaskTimer`] and [`time_task`]: log how long a named task took
//! - [`FileWorkload`] and [`generate_and_iterate`]: sample workers
//!
//! Every launched worker is joined before a function returns. A panicking
//! worker does not abort the others; it is reported as
//! [`ParallelError::WorkerPanicked`] once everything has finished.
//!
//! # Examples
//!
//! ```rust
//! use utilkit::parallel::{generate_and_iterate, ParallelConfig, ParallelWorkProcessor};
//!
//! let processor = ParallelWorkProcessor::new(ParallelConfig::default());
//! let report = processor
//!     .run(
//!         |index: usize| index * 2,
//!         vec![1, 2, 3],
//!         generate_and_iterate,
//!         vec![10, 20],
//!     )
//!     .unwrap();
//!
//! assert_eq!(report.io_results, vec![2, 4, 6]);
//! assert_eq!(report.cpu_results, vec![100, 400]);
//! ```

mod config;
mod error;
mod processor;
mod timer;
mod workload;

pub use config::DEFAULT_CPU_THREAD_PREFIX;
pub use config::DEFAULT_IO_THREAD_PREFIX;
pub use config::ParallelConfig;
pub use error::ParallelError;
pub use error::WorkerKind;
pub use processor::ParallelReport;
pub use processor::ParallelWorkProcessor;
pub use processor::run_cpu_tasks;
pub use processor::run_io_tasks;
pub use timer::TaskTimer;
pub use timer::time_task;
pub use workload::DEFAULT_PAYLOAD_REPEAT;
pub use workload::FILE_PREFIX;
pub use workload::FileWorkload;
pub use workload::PRINTABLE;
pub use workload::generate_and_iterate;
pub use workload::suffix_ranges;
