//! Wall-clock timing of named tasks.

use std::time::{Duration, Instant};

/// Logs how long a named task took when dropped.
///
/// # Examples
///
/// ```rust
/// use utilkit::parallel::TaskTimer;
///
/// {
///     let _timer = TaskTimer::start("serial process of tasks");
///     // ... work ...
/// } // logs "serial process of tasks took 0.000 seconds to finish"
/// ```
#[derive(Debug)]
pub struct TaskTimer {
    name: String,
    started: Instant,
}

impl TaskTimer {
    /// Starts timing `name`.
    #[must_use = "the timer logs when dropped; binding it to `_` drops it immediately"]
    pub fn start(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            started: Instant::now(),
        }
    }

    /// The task name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Time elapsed since the timer started.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

impl Drop for TaskTimer {
    fn drop(&mut self) {
        let seconds = self.elapsed().as_secs_f64();
        tracing::info!(
            task = %self.name,
            seconds,
            "{} took {seconds:.3} seconds to finish",
            self.name
        );
    }
}

/// Runs `task` inside a [`TaskTimer`] and returns its value with the elapsed
/// time.
///
/// # Examples
///
/// ```rust
/// use utilkit::parallel::time_task;
///
/// let (sum, elapsed) = time_task("sum", || (1..=10).sum::<i32>());
/// assert_eq!(sum, 55);
/// assert!(elapsed.as_secs() < 60);
/// ```
pub fn time_task<R>(name: &str, task: impl FnOnce() -> R) -> (R, Duration) {
    let timer = TaskTimer::start(name);
    let value = task();
    let elapsed = timer.elapsed();
    drop(timer);
    (value, elapsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::thread;

    #[rstest]
    fn elapsed_grows_while_running() {
        let timer = TaskTimer::start("sleep");
        thread::sleep(Duration::from_millis(5));
        assert!(timer.elapsed() >= Duration::from_millis(5));
        assert_eq!(timer.name(), "sleep");
    }

    #[rstest]
    fn time_task_returns_value_and_duration() {
        let (value, elapsed) = time_task("sleep", || {
            thread::sleep(Duration::from_millis(5));
            "done"
        });
        assert_eq!(value, "done");
        assert!(elapsed >= Duration::from_millis(5));
    }
}
