//! # collars
//!
//! Collection utilities for Rust: generic traversal, transformation,
//! reduction and combination over ordered sequences and keyed collections,
//! plus a handful of function wrappers.
//!
//! ## Overview
//!
//! Everything is layered on a small primitive set:
//!
//! - **Traversal**: [`each`](collection::each) visits every element of a
//!   sequence or every entry of a keyed collection
//! - **Folding**: [`fold`](collection::fold) and [`reduce`](collection::reduce)
//! - **Derived operations**: `map`, `pluck`, `select`, `reject`, `every`, `any`,
//!   `contains`, `uniq`, `flatten`
//! - **Slicing, combination and ordering**: `first`, `last`, `zip`,
//!   `intersection`, `difference`, `sort_by`, `shuffle`
//! - **Merging**: `extend`, `defaults`
//! - **Function wrappers**: [`once`](function::once), [`memoize`](function::memoize)
//!   and [`delay`](schedule::delay)
//!
//! All collection operations are eager: results are materialized before they
//! are returned.
//!
//! ## Feature Flags
//!
//! - `collection`: Traversal, folding and every collection operation
//! - `shuffle`: Random permutation of sequences (pulls in `rand`)
//! - `function`: `once` and `memoize` wrappers
//! - `schedule`: `delay` and the schedulers it runs on (pulls in `tokio`)
//! - `serde`: Serialization support for [`Nested`](collection::Nested)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! # #[cfg(feature = "collection")]
//! # {
//! use collars::prelude::*;
//!
//! let values = vec![1, 2, 3, 4];
//! let doubled = map(&values, |value| value * 2);
//! assert_eq!(doubled, vec![2, 4, 6, 8]);
//!
//! let sum = reduce(&values, |accumulator, value, _, _| accumulator + value, None);
//! assert_eq!(sum, Some(10));
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports every operation of the enabled modules.
///
/// # Usage
///
/// ```rust
/// use collars::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "collection")]
    pub use crate::collection::*;

    #[cfg(feature = "function")]
    pub use crate::function::*;

    #[cfg(feature = "schedule")]
    pub use crate::schedule::*;
}

#[cfg(feature = "collection")]
pub mod collection;

#[cfg(feature = "function")]
pub mod function;

#[cfg(feature = "schedule")]
pub mod schedule;
