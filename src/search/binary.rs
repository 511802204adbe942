//! Binary search confined to a window.
//!
//! Unlike [`slice::binary_search`], these functions search only the given
//! [`SearchWindow`] and report how many loop iterations they needed. The
//! midpoint sequence is the textbook one:
//!
//! ```text
//! midpoint = start + (end - start) / 2
//! element >  target  =>  end   = midpoint - 1
//! element <  target  =>  start = midpoint + 1
//! ```
//!
//! The searched window must be sorted in strictly ascending order. This is
//! not checked: an unsorted window yields a wrong answer, never a panic.

use std::borrow::Borrow;
use std::cmp::Ordering;

use super::outcome::{SearchOutcome, SearchReport};
use super::window::SearchWindow;

/// Searches `window` of `sequence` using a comparator.
///
/// `compare` receives an element and returns how it orders relative to the
/// target, as in [`slice::binary_search_by`]. The window is clamped to the
/// sequence, so no element outside `sequence` is ever touched.
///
/// # Complexity
///
/// O(log W) where W is the window width.
///
/// # Examples
///
/// ```rust
/// use utilkit::search::{binary_search_by, SearchOutcome, SearchWindow};
///
/// let words = ["ant", "bee", "cat", "dog"];
/// let report = binary_search_by(&words, SearchWindow::full(words.len()), |word| word.cmp(&"cat"));
/// assert_eq!(report.outcome(), SearchOutcome::Found(2));
/// ```
pub fn binary_search_by<T, F>(sequence: &[T], window: SearchWindow, mut compare: F) -> SearchReport
where
    F: FnMut(&T) -> Ordering,
{
    let window = window.clamp(sequence.len());
    let mut start = window.start();
    let mut limit = window.limit();
    let mut comparisons = 0;

    while start < limit {
        comparisons += 1;
        let midpoint = start + (limit - 1 - start) / 2;
        match compare(&sequence[midpoint]) {
            Ordering::Equal => {
                tracing::trace!(comparisons, index = midpoint, "binary search hit");
                return SearchReport::new(SearchOutcome::Found(midpoint), comparisons);
            }
            Ordering::Greater => limit = midpoint,
            Ordering::Less => start = midpoint + 1,
        }
    }

    tracing::trace!(comparisons, "binary search exhausted window");
    SearchReport::new(SearchOutcome::NotFound, comparisons)
}

/// Searches `window` of `sequence` for `target`.
///
/// # Examples
///
/// ```rust
/// use utilkit::search::{binary_search_within, SearchOutcome, SearchWindow};
///
/// let sequence = [7];
/// let report = binary_search_within(&sequence, &7, SearchWindow::inclusive(0, 0));
/// assert_eq!(report.outcome(), SearchOutcome::Found(0));
/// assert_eq!(report.comparisons(), 1);
/// ```
pub fn binary_search_within<T, Q>(sequence: &[T], target: &Q, window: SearchWindow) -> SearchReport
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    binary_search_by(sequence, window, |element| element.borrow().cmp(target))
}

/// Searches the whole of `sequence` for `target`.
///
/// # Examples
///
/// ```rust
/// use utilkit::search::{binary_search, SearchOutcome};
///
/// let sequence = [1, 2, 3, 4, 5, 6, 7];
/// assert_eq!(binary_search(&sequence, &4).outcome(), SearchOutcome::Found(3));
/// assert_eq!(binary_search(&sequence, &8).outcome(), SearchOutcome::NotFound);
/// ```
pub fn binary_search<T, Q>(sequence: &[T], target: &Q) -> SearchReport
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    binary_search_within(sequence, target, SearchWindow::full(sequence.len()))
}

/// Windowed binary search as a method on sorted sequences.
///
/// Implemented for slices; `Vec<T>`, arrays and
/// [`SortedSlice`](super::SortedSlice) reach it through deref.
///
/// # Examples
///
/// ```rust
/// use utilkit::search::{OrderedSearch, SearchWindow};
///
/// let sequence = vec![10, 20, 30, 40];
/// assert_eq!(sequence.ordered_search(&30).index(), Some(2));
/// assert_eq!(
///     sequence
///         .ordered_search_within(&10, SearchWindow::inclusive(1, 3))
///         .index(),
///     None
/// );
/// ```
pub trait OrderedSearch<T> {
    /// Searches the whole sequence for `target`.
    fn ordered_search<Q>(&self, target: &Q) -> SearchReport
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized;

    /// Searches only `window` for `target`.
    fn ordered_search_within<Q>(&self, target: &Q, window: SearchWindow) -> SearchReport
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized;
}

impl<T> OrderedSearch<T> for [T] {
    #[inline]
    fn ordered_search<Q>(&self, target: &Q) -> SearchReport
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        binary_search(self, target)
    }

    #[inline]
    fn ordered_search_within<Q>(&self, target: &Q, window: SearchWindow) -> SearchReport
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        binary_search_within(self, target, window)
    }
}
