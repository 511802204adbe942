//! Ordered search over sorted, duplicate-free sequences.
//!
//! This module provides:
//!
//! - [`binary_search`], [`binary_search_within`], [`binary_search_by`]:
//!   textbook binary search confined to a [`SearchWindow`], returning a
//!   [`SearchReport`] with the outcome and the number of loop iterations
//! - [`OrderedSearch`]: the same operations as slice methods
//! - [`MultiSearch`] and [`search_many`]: walk an ascending target list,
//!   starting each search just after the previous hit
//! - [`SortedSlice`], [`is_strictly_sorted`], [`prepare_targets`]: optional
//!   validation and normalization of inputs
//!
//! # Preconditions
//!
//! The searched sequence must be strictly ascending and, for the
//! multi-target driver, so must the targets. Neither is checked by the
//! search itself: violating them produces wrong answers, never panics.
//!
//! # Examples
//!
//! ```rust
//! use utilkit::search::{binary_search_within, SearchOutcome, SearchWindow};
//!
//! let sequence = [1, 2, 3, 4, 5, 6, 7];
//!
//! // Searching only [4, 6] skips everything before index 4.
//! let report = binary_search_within(&sequence, &6, SearchWindow::inclusive(4, 6));
//! assert_eq!(report.outcome(), SearchOutcome::Found(5));
//!
//! let report = binary_search_within(&sequence, &2, SearchWindow::inclusive(4, 6));
//! assert_eq!(report.outcome(), SearchOutcome::NotFound);
//! ```

mod binary;
mod multi;
mod outcome;
mod sorted;
mod window;

pub use binary::OrderedSearch;
pub use binary::binary_search;
pub use binary::binary_search_by;
pub use binary::binary_search_within;
pub use multi::MultiSearch;
pub use multi::TargetReport;
pub use multi::search_many;
pub use outcome::SearchOutcome;
pub use outcome::SearchReport;
pub use sorted::OrderViolation;
pub use sorted::SortedSlice;
pub use sorted::first_order_violation;
pub use sorted::is_strictly_sorted;
pub use sorted::prepare_targets;
pub use window::SearchWindow;
