//! # utilkit
//!
//! Small, independent utilities built around ordered data and simple
//! fan-out work.
//!
//! ## Overview
//!
//! - **Ordered Search**: binary search over an inclusive window of a sorted
//!   slice, with a driver that walks an ascending target list and narrows the
//!   window after every hit
//! - **Parallel Work Processor**: runs I/O-bound workers on named threads and
//!   CPU-bound workers on a dedicated pool, then joins everything
//! - **Casing**: lowercases the first word of a sentence and capitalizes the
//!   rest
//!
//! ## Feature Flags
//!
//! - `search`: ordered search (default)
//! - `parallel`: parallel work processor (default)
//! - `casing`: sentence casing (default)
//! - `serde`: `Serialize`/`Deserialize` for the search data types
//! - `cli`: demo binaries and log subscriber setup
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use utilkit::prelude::*;
//!
//! let sequence = [1, 2, 3, 4, 5, 6, 7];
//! let indices: Vec<SearchOutcome> = search_many(&sequence, [1, 4, 6, 8])
//!     .into_iter()
//!     .map(|report| report.outcome())
//!     .collect();
//!
//! assert_eq!(
//!     indices,
//!     vec![
//!         SearchOutcome::Found(0),
//!         SearchOutcome::Found(3),
//!         SearchOutcome::Found(5),
//!         SearchOutcome::NotFound,
//!     ]
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use utilkit::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "search")]
    pub use crate::search::*;

    #[cfg(feature = "parallel")]
    pub use crate::parallel::*;

    #[cfg(feature = "casing")]
    pub use crate::casing::*;
}

#[cfg(feature = "search")]
pub mod search;

#[cfg(feature = "parallel")]
pub mod parallel;

#[cfg(feature = "casing")]
pub mod casing;

#[cfg(feature = "cli")]
pub mod telemetry;
