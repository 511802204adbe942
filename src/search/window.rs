//! Inclusive index windows into a sorted sequence.

use std::fmt;

/// An inclusive index range `[start, end]` that a binary search is confined
/// to.
///
/// Stored half-open (`start..limit`) so that narrowing below index `0`
/// never underflows; the public accessors speak in inclusive bounds.
/// A window with `start > end` is empty.
///
/// Every constructor keeps `limit >= start`, so an empty window is always
/// stored as `start..start`. Two windows are equal exactly when they have
/// the same `start` and the same `end`.
///
/// # Examples
///
/// ```rust
/// use utilkit::search::SearchWindow;
///
/// let window = SearchWindow::full(7);
/// assert_eq!(window.start(), 0);
/// assert_eq!(window.end(), Some(6));
///
/// let single = SearchWindow::inclusive(0, 0);
/// assert_eq!(single.len(), 1);
///
/// assert!(SearchWindow::full(0).is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SearchWindow {
    start: usize,
    limit: usize,
}

impl SearchWindow {
    #[inline]
    const fn bounded(start: usize, limit: usize) -> Self {
        Self {
            start,
            limit: if limit < start { start } else { limit },
        }
    }

    /// The window covering an entire sequence of `length` elements.
    #[inline]
    #[must_use]
    pub const fn full(length: usize) -> Self {
        Self {
            start: 0,
            limit: length,
        }
    }

    /// The window `[start, end]`, both bounds included.
    ///
    /// `end + 1` saturates, so `inclusive(start, usize::MAX)` ends at
    /// `usize::MAX - 1`. No slice is long enough to notice.
    #[inline]
    #[must_use]
    pub const fn inclusive(start: usize, end: usize) -> Self {
        Self::bounded(start, end.saturating_add(1))
    }

    /// A window containing no indices.
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self { start: 0, limit: 0 }
    }

    /// Builds a window from optional caller bounds over a sequence of
    /// `length` elements.
    ///
    /// A missing `start` defaults to `0` and a missing `end` to the last
    /// index. A supplied bound is taken literally, so `Some(0)` as `end`
    /// yields the one-element window `[start, 0]` rather than the full
    /// range. An `end` past the last element is clamped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use utilkit::search::SearchWindow;
    ///
    /// assert_eq!(SearchWindow::resolve(7, None, None), SearchWindow::full(7));
    /// assert_eq!(SearchWindow::resolve(7, Some(0), Some(0)).end(), Some(0));
    /// assert_eq!(SearchWindow::resolve(3, Some(1), Some(10)).end(), Some(2));
    /// ```
    #[must_use]
    pub fn resolve(length: usize, start: Option<usize>, end: Option<usize>) -> Self {
        let start = start.unwrap_or(0);
        let window = match end {
            Some(end) => Self::inclusive(start, end),
            None => Self::bounded(start, length),
        };
        window.clamp(length)
    }

    /// Shrinks the window so it never reaches past a sequence of `length`
    /// elements.
    #[inline]
    #[must_use]
    pub fn clamp(self, length: usize) -> Self {
        Self::bounded(self.start, self.limit.min(length))
    }

    /// The window that starts just after `index` and keeps the current end.
    ///
    /// Used to skip the already-consumed prefix once `index` was found.
    #[inline]
    #[must_use]
    pub const fn advance_past(self, index: usize) -> Self {
        Self::bounded(index.saturating_add(1), self.limit)
    }

    /// First index of the window.
    #[inline]
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Last index of the window, or `None` if the window is empty.
    #[inline]
    #[must_use]
    pub const fn end(&self) -> Option<usize> {
        if self.start < self.limit {
            Some(self.limit - 1)
        } else {
            None
        }
    }

    /// One past the last index of the window.
    #[inline]
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Number of indices covered.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.limit.saturating_sub(self.start)
    }

    /// Returns `true` if the window covers no index.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.limit
    }

    /// Returns `true` if `index` lies inside the window.
    #[inline]
    #[must_use]
    pub const fn contains(&self, index: usize) -> bool {
        self.start <= index && index < self.limit
    }
}

impl fmt::Display for SearchWindow {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end() {
            Some(end) => write!(formatter, "[{}, {end}]", self.start),
            None => write!(formatter, "[]"),
        }
    }
}

// =============================================================================
// Serde Support
// =============================================================================

/// Wire form: inclusive `start` and `end`, with `end: null` for an empty
/// window.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct InclusiveBounds {
    start: usize,
    end: Option<usize>,
}

#[cfg(feature = "serde")]
impl serde::Serialize for SearchWindow {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        InclusiveBounds {
            start: self.start,
            end: self.end(),
        }
        .serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SearchWindow {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bounds = InclusiveBounds::deserialize(deserializer)?;
        Ok(bounds.end.map_or(Self::bounded(bounds.start, bounds.start), |end| {
            Self::inclusive(bounds.start, end)
        }))
    }
}
