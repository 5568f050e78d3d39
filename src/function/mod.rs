//! Function wrappers with private state.
//!
//! - [`once`]: runs a function on its first call only and replays the result
//! - [`memoize`]: caches results per argument key
//!
//! Each wrapper owns its state; creating a wrapper never affects another
//! one. Neither wrapper is thread-safe.
//!
//! # Examples
//!
//! ```rust
//! use collars::function::{memoize, once};
//!
//! let configuration = once(|| vec!["debug".to_string()]);
//! assert_eq!(configuration.call(), vec!["debug".to_string()]);
//!
//! let length = memoize(|text: String| text.len());
//! assert_eq!(length.call("hello".to_string()), 5);
//! ```

mod cache_key;
mod memoize;
mod once;

pub use cache_key::CacheKey;
pub use memoize::{Memoized, memoize};
pub use once::{Once, once};
