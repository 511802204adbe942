//! Error types for the parallel work processor.

use std::any::Any;
use std::fmt;
use std::io;

use thiserror::Error;

/// Which phase a worker belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkerKind {
    /// A worker running on its own I/O thread.
    Io,
    /// A worker running on the CPU pool.
    Cpu,
}

impl fmt::Display for WorkerKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io => write!(formatter, "IO"),
            Self::Cpu => write!(formatter, "CPU"),
        }
    }
}

/// Errors raised while launching or joining workers.
///
/// Worker return values are passed through untouched; only failures of the
/// launcher itself and worker panics end up here.
#[derive(Debug, Error)]
pub enum ParallelError {
    /// The CPU pool was configured with zero threads.
    #[error("cpu parallelism must be greater than 0")]
    InvalidParallelism,

    /// The operating system refused to start an I/O thread.
    #[error("failed to spawn IO thread for task {index}")]
    ThreadSpawn {
        /// Index of the task whose thread could not be started.
        index: usize,
        /// Underlying OS error.
        #[source]
        source: io::Error,
    },

    /// The CPU pool could not be built.
    #[error("failed to build CPU worker pool")]
    PoolBuild(#[from] rayon::ThreadPoolBuildError),

    /// A worker panicked. Every other worker was still joined.
    #[error("{kind} worker for task {index} panicked: {message}")]
    WorkerPanicked {
        /// Phase of the worker.
        kind: WorkerKind,
        /// Index of the task (its position in the argument list).
        index: usize,
        /// Panic payload, if it was a string.
        message: String,
    },
}

/// Renders a panic payload as text.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|message| (*message).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string panic payload".to_string())
}
