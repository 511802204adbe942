//! Ordering checks and the validated [`SortedSlice`] wrapper.
//!
//! The search functions assume their input is strictly ascending and never
//! check it. Callers that receive untrusted sequences can validate them here
//! once, and callers whose target list may be unordered can normalize it with
//! [`prepare_targets`].

use std::ops::Deref;

use thiserror::Error;

/// Returns `true` if every element is strictly less than its successor.
///
/// # Examples
///
/// ```rust
/// use utilkit::search::is_strictly_sorted;
///
/// assert!(is_strictly_sorted(&[1, 2, 3]));
/// assert!(!is_strictly_sorted(&[1, 1, 2]));
/// assert!(is_strictly_sorted::<i32>(&[]));
/// ```
#[inline]
pub fn is_strictly_sorted<T: Ord>(slice: &[T]) -> bool {
    first_order_violation(slice).is_none()
}

/// Returns the index of the first element that is not strictly greater than
/// its predecessor.
pub fn first_order_violation<T: Ord>(slice: &[T]) -> Option<usize> {
    slice
        .windows(2)
        .position(|pair| pair[0] >= pair[1])
        .map(|position| position + 1)
}

/// Sorts `targets` ascending and drops duplicates.
///
/// This establishes the ordering the multi-target driver relies on, at
/// O(T log T) for T targets.
///
/// # Examples
///
/// ```rust
/// use utilkit::search::prepare_targets;
///
/// assert_eq!(prepare_targets([6, 1, 8, 4, 6, 1]), vec![1, 4, 6, 8]);
/// ```
pub fn prepare_targets<T, I>(targets: I) -> Vec<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut prepared: Vec<T> = targets.into_iter().collect();
    prepared.sort_unstable();
    prepared.dedup();
    prepared
}

/// A sequence is not strictly ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("sequence is not strictly ascending at index {position}")]
pub struct OrderViolation {
    /// Index of the first element that is not greater than the one before it.
    pub position: usize,
}

/// A slice known to be strictly ascending.
///
/// Derefs to `[T]`, so every slice method (including
/// [`OrderedSearch`](super::OrderedSearch)) is available.
///
/// # Examples
///
/// ```rust
/// use utilkit::search::{OrderedSearch, SortedSlice};
///
/// let data = [2, 3, 5, 7, 11];
/// let sorted = SortedSlice::new(&data).unwrap();
/// assert_eq!(sorted.ordered_search(&7).index(), Some(3));
///
/// let error = SortedSlice::new(&[3, 2]).unwrap_err();
/// assert_eq!(error.position, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortedSlice<'a, T> {
    elements: &'a [T],
}

impl<'a, T: Ord> SortedSlice<'a, T> {
    /// Wraps `elements` after checking they are strictly ascending.
    ///
    /// # Errors
    ///
    /// Returns [`OrderViolation`] pointing at the first out-of-order element.
    pub fn new(elements: &'a [T]) -> Result<Self, OrderViolation> {
        match first_order_violation(elements) {
            Some(position) => Err(OrderViolation { position }),
            None => Ok(Self { elements }),
        }
    }
}

impl<'a, T> SortedSlice<'a, T> {
    /// Returns the underlying slice.
    #[inline]
    #[must_use]
    pub const fn as_slice(&self) -> &'a [T] {
        self.elements
    }
}

impl<T> Deref for SortedSlice<'_, T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.elements
    }
}

impl<'a, T: Ord> TryFrom<&'a [T]> for SortedSlice<'a, T> {
    type Error = OrderViolation;

    fn try_from(elements: &'a [T]) -> Result<Self, Self::Error> {
        Self::new(elements)
    }
}
