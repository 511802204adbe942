//! Configuration for the parallel work processor.

use super::error::ParallelError;

/// Default thread-name prefix for I/O workers.
pub const DEFAULT_IO_THREAD_PREFIX: &str = "io-worker";

/// Default thread-name prefix for CPU pool threads.
pub const DEFAULT_CPU_THREAD_PREFIX: &str = "cpu-worker";

/// Configuration for [`ParallelWorkProcessor`](super::ParallelWorkProcessor).
///
/// # Examples
///
/// ```rust
/// use utilkit::parallel::ParallelConfig;
///
/// let config = ParallelConfig::default().with_cpu_parallelism(2);
/// assert_eq!(config.cpu_parallelism, 2);
/// assert_eq!(config.io_thread_name(3), "io-worker-3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParallelConfig {
    /// Number of threads in the CPU pool (default: number of logical CPUs).
    pub cpu_parallelism: usize,
    /// Prefix for I/O thread names; the task index is appended.
    pub io_thread_prefix: String,
    /// Prefix for CPU pool thread names; the pool slot is appended.
    pub cpu_thread_prefix: String,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            cpu_parallelism: num_cpus::get(),
            io_thread_prefix: DEFAULT_IO_THREAD_PREFIX.to_string(),
            cpu_thread_prefix: DEFAULT_CPU_THREAD_PREFIX.to_string(),
        }
    }
}

impl ParallelConfig {
    /// Returns a copy with the CPU pool size replaced.
    #[must_use]
    pub fn with_cpu_parallelism(mut self, cpu_parallelism: usize) -> Self {
        self.cpu_parallelism = cpu_parallelism;
        self
    }

    /// Returns a copy with the I/O thread-name prefix replaced.
    #[must_use]
    pub fn with_io_thread_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.io_thread_prefix = prefix.into();
        self
    }

    /// Returns a copy with the CPU thread-name prefix replaced.
    #[must_use]
    pub fn with_cpu_thread_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.cpu_thread_prefix = prefix.into();
        self
    }

    /// Checks the configuration can build a worker pool.
    ///
    /// # Errors
    ///
    /// Returns [`ParallelError::InvalidParallelism`] if `cpu_parallelism` is 0.
    pub fn validate(&self) -> Result<(), ParallelError> {
        if self.cpu_parallelism == 0 {
            return Err(ParallelError::InvalidParallelism);
        }
        Ok(())
    }

    /// Name given to the I/O thread running task `index`.
    #[must_use]
    pub fn io_thread_name(&self, index: usize) -> String {
        format!("{}-{index}", self.io_thread_prefix)
    }

    /// Name given to CPU pool thread `slot`.
    #[must_use]
    pub fn cpu_thread_name(&self, slot: usize) -> String {
        format!("{}-{slot}", self.cpu_thread_prefix)
    }
}
