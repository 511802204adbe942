//! Results of a single binary search.

use std::fmt;

/// Where a target ended up after a binary search.
///
/// Index `0` is a regular hit (`Found(0)`) and is never conflated with
/// absence.
///
/// # Examples
///
/// ```rust
/// use utilkit::search::SearchOutcome;
///
/// let hit = SearchOutcome::Found(0);
/// assert!(hit.is_found());
/// assert_eq!(hit.index(), Some(0));
///
/// let miss = SearchOutcome::NotFound;
/// assert_eq!(miss.index(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SearchOutcome {
    /// The target sits at this index of the searched sequence.
    Found(usize),
    /// The target does not occur inside the searched window.
    NotFound,
}

impl SearchOutcome {
    /// Returns the located index, if any.
    #[inline]
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        match self {
            Self::Found(index) => Some(index),
            Self::NotFound => None,
        }
    }

    /// Returns `true` for `Found`.
    #[inline]
    #[must_use]
    pub const fn is_found(self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Returns `true` for `NotFound`.
    #[inline]
    #[must_use]
    pub const fn is_not_found(self) -> bool {
        matches!(self, Self::NotFound)
    }
}

impl From<Option<usize>> for SearchOutcome {
    fn from(index: Option<usize>) -> Self {
        index.map_or(Self::NotFound, Self::Found)
    }
}

impl From<SearchOutcome> for Option<usize> {
    fn from(outcome: SearchOutcome) -> Self {
        outcome.index()
    }
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found(index) => write!(formatter, "found at {index}"),
            Self::NotFound => write!(formatter, "not found"),
        }
    }
}

/// The outcome of one search together with the number of loop iterations
/// it took.
///
/// The comparison count is diagnostic only; two searches with the same
/// outcome are equally correct regardless of their counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchReport {
    outcome: SearchOutcome,
    comparisons: usize,
}

impl SearchReport {
    /// Creates a report.
    #[inline]
    #[must_use]
    pub const fn new(outcome: SearchOutcome, comparisons: usize) -> Self {
        Self {
            outcome,
            comparisons,
        }
    }

    /// Returns the search outcome.
    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> SearchOutcome {
        self.outcome
    }

    /// Returns how many times the search loop ran.
    #[inline]
    #[must_use]
    pub const fn comparisons(&self) -> usize {
        self.comparisons
    }

    /// Shorthand for `self.outcome().index()`.
    #[inline]
    #[must_use]
    pub const fn index(&self) -> Option<usize> {
        self.outcome.index()
    }
}

impl fmt::Display for SearchReport {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{} after {} comparison(s)",
            self.outcome, self.comparisons
        )
    }
}
