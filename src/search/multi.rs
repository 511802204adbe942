//! Locating several ascending targets with a shrinking window.
//!
//! When the targets are ascending and unique, every hit at index `i` proves
//! that all later targets live strictly after `i`. [`MultiSearch`] uses this
//! to start each search at the successor of the previous hit instead of at
//! the front of the sequence. A miss leaves the window untouched.
//!
//! # Examples
//!
//! ```rust
//! use utilkit::search::{MultiSearch, SearchOutcome};
//!
//! let sequence = [1, 2, 3, 4, 5, 6, 7];
//! let mut driver = MultiSearch::new(&sequence, [1, 4, 6, 8]);
//!
//! let first = driver.next().unwrap();
//! assert_eq!(first.outcome(), SearchOutcome::Found(0));
//! assert_eq!(driver.window().start(), 1);
//! ```

use std::borrow::Borrow;
use std::fmt;

use super::binary::binary_search_within;
use super::outcome::{SearchOutcome, SearchReport};
use super::window::SearchWindow;

/// The result for one target of a multi-target search.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetReport<Q> {
    target: Q,
    window: SearchWindow,
    report: SearchReport,
}

impl<Q> TargetReport<Q> {
    /// The target that was searched for.
    #[inline]
    pub const fn target(&self) -> &Q {
        &self.target
    }

    /// The window the search ran in.
    #[inline]
    pub const fn window(&self) -> SearchWindow {
        self.window
    }

    /// The search report.
    #[inline]
    pub const fn report(&self) -> SearchReport {
        self.report
    }

    /// Shorthand for `self.report().outcome()`.
    #[inline]
    pub const fn outcome(&self) -> SearchOutcome {
        self.report.outcome()
    }

    /// Consumes the report, returning the target.
    #[inline]
    pub fn into_target(self) -> Q {
        self.target
    }
}

impl<Q: fmt::Display> fmt::Display for TargetReport<Q> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome() {
            SearchOutcome::Found(index) => {
                write!(formatter, "found target {} at {index}", self.target)?;
            }
            SearchOutcome::NotFound => {
                write!(formatter, "couldn't find target {}", self.target)?;
            }
        }
        write!(
            formatter,
            " (binary searched {} times)",
            self.report.comparisons()
        )
    }
}

/// Lazily searches `sequence` for each target in turn, narrowing the window
/// after every hit.
///
/// Targets must be ascending and unique (see
/// [`prepare_targets`](super::prepare_targets)). Unordered targets are not
/// detected; they may be reported missing even though they are present.
pub struct MultiSearch<'a, T, I> {
    sequence: &'a [T],
    targets: I,
    window: SearchWindow,
}

impl<'a, T, I> MultiSearch<'a, T, I>
where
    I: Iterator,
{
    /// Starts a search over the whole of `sequence`.
    pub fn new<J>(sequence: &'a [T], targets: J) -> Self
    where
        J: IntoIterator<IntoIter = I>,
    {
        Self::with_window(sequence, targets, SearchWindow::full(sequence.len()))
    }

    /// Starts a search confined to `window`.
    pub fn with_window<J>(sequence: &'a [T], targets: J, window: SearchWindow) -> Self
    where
        J: IntoIterator<IntoIter = I>,
    {
        Self {
            sequence,
            targets: targets.into_iter(),
            window: window.clamp(sequence.len()),
        }
    }

    /// The window the next target will be searched in.
    #[inline]
    pub const fn window(&self) -> SearchWindow {
        self.window
    }
}

impl<T, I> Iterator for MultiSearch<'_, T, I>
where
    I: Iterator,
    I::Item: Ord + fmt::Debug,
    T: Borrow<I::Item>,
{
    type Item = TargetReport<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let target = self.targets.next()?;
        let window = self.window;
        let report = binary_search_within(self.sequence, &target, window);

        match report.outcome() {
            SearchOutcome::Found(index) => {
                tracing::info!(
                    target_value = ?target,
                    index,
                    comparisons = report.comparisons(),
                    "found target"
                );
                self.window = window.advance_past(index);
            }
            SearchOutcome::NotFound => {
                tracing::info!(
                    target_value = ?target,
                    comparisons = report.comparisons(),
                    "couldn't find target"
                );
            }
        }

        Some(TargetReport {
            target,
            window,
            report,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.targets.size_hint()
    }
}

impl<T, I> fmt::Debug for MultiSearch<'_, T, I> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("MultiSearch")
            .field("sequence_len", &self.sequence.len())
            .field("window", &self.window)
            .finish_non_exhaustive()
    }
}

/// Searches `sequence` for every target and collects the reports in target
/// order.
///
/// # Examples
///
/// ```rust
/// use utilkit::search::{search_many, SearchOutcome};
///
/// let reports = search_many(&[1, 2, 3, 4, 5, 6, 7], [1, 4, 6, 8]);
/// let indices: Vec<Option<usize>> = reports.iter().map(|report| report.outcome().index()).collect();
/// assert_eq!(indices, vec![Some(0), Some(3), Some(5), None]);
/// ```
pub fn search_many<T, Q, J>(sequence: &[T], targets: J) -> Vec<TargetReport<Q>>
where
    J: IntoIterator<Item = Q>,
    Q: Ord + fmt::Debug,
    T: Borrow<Q>,
{
    MultiSearch::new(sequence, targets).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const SEQUENCE: [i32; 7] = [1, 2, 3, 4, 5, 6, 7];

    #[rstest]
    fn finds_example_targets() {
        let outcomes: Vec<SearchOutcome> = search_many(&SEQUENCE, [1, 4, 6, 8])
            .iter()
            .map(TargetReport::outcome)
            .collect();
        assert_eq!(
            outcomes,
            vec![
                SearchOutcome::Found(0),
                SearchOutcome::Found(3),
                SearchOutcome::Found(5),
                SearchOutcome::NotFound,
            ]
        );
    }

    #[rstest]
    fn window_advances_after_hit_at_index_zero() {
        let reports = search_many(&SEQUENCE, [1, 2]);
        assert_eq!(reports[0].window(), SearchWindow::full(7));
        assert_eq!(reports[1].window().start(), 1);
        assert_eq!(reports[1].outcome(), SearchOutcome::Found(1));
    }

    #[rstest]
    fn miss_leaves_window_unchanged() {
        let sequence = [10, 20, 30, 40];
        let reports = search_many(&sequence, [20, 25, 40]);
        assert_eq!(reports[1].outcome(), SearchOutcome::NotFound);
        assert_eq!(reports[1].window(), reports[2].window());
        assert_eq!(reports[2].window().start(), 2);
        assert_eq!(reports[2].outcome(), SearchOutcome::Found(3));
    }

    #[rstest]
    fn window_records_narrowing_for_each_target() {
        let starts: Vec<usize> = search_many(&SEQUENCE, [1, 4, 6, 8])
            .iter()
            .map(|report| report.window().start())
            .collect();
        assert_eq!(starts, vec![0, 1, 4, 6]);
    }

    #[rstest]
    fn with_window_confines_search() {
        let reports: Vec<_> =
            MultiSearch::with_window(&SEQUENCE, [2, 5], SearchWindow::inclusive(2, 6)).collect();
        assert_eq!(reports[0].outcome(), SearchOutcome::NotFound);
        assert_eq!(reports[1].outcome(), SearchOutcome::Found(4));
    }

    #[rstest]
    fn empty_targets_yield_nothing() {
        assert!(search_many(&SEQUENCE, Vec::<i32>::new()).is_empty());
    }

    #[rstest]
    fn empty_sequence_reports_every_target_missing() {
        let empty: [i32; 0] = [];
        let reports = search_many(&empty, [1, 2]);
        assert!(reports.iter().all(|report| report.outcome().is_not_found()));
        assert!(reports.iter().all(|report| report.report().comparisons() == 0));
    }

    #[rstest]
    fn display_mentions_target_and_comparisons() {
        let reports = search_many(&SEQUENCE, [4, 8]);
        assert_eq!(
            reports[0].to_string(),
            "found target 4 at 3 (binary searched 1 times)"
        );
        assert!(reports[1].to_string().starts_with("couldn't find target 8"));
    }
}
