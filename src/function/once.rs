//! A function wrapper that runs its function at most once.
//!
//! # Examples
//!
//! ```rust
//! use collars::function::once;
//! use std::cell::Cell;
//!
//! let calls = Cell::new(0);
//! let initialize = once(|| {
//!     calls.set(calls.get() + 1);
//!     "ready"
//! });
//!
//! assert_eq!(initialize.call(), "ready");
//! assert_eq!(initialize.call(), "ready");
//! assert_eq!(calls.get(), 1);
//! ```

use std::cell::RefCell;
use std::fmt;

/// The state of a [`Once`] wrapper.
enum OnceState<T, F> {
    /// The function has not run yet.
    Pending(F),
    /// The function ran and produced this result.
    Ready(T),
    /// The function panicked, or re-entered the wrapper, while running.
    Poisoned,
}

/// A function wrapper that calls its function on the first invocation only.
///
/// Every invocation, including the first, returns a clone of the result of
/// that single call. The function takes no arguments.
///
/// Each wrapper owns its cached result; two wrappers never share state.
///
/// # Thread Safety
///
/// This type is NOT thread-safe (it is `!Sync`). Wrap it in a `Mutex` to
/// share it between threads.
///
/// # Panics
///
/// If the wrapped function panics, or calls back into the same wrapper, the
/// wrapper becomes poisoned and every later call panics.
pub struct Once<T, F = fn() -> T> {
    state: RefCell<OnceState<T, F>>,
}

impl<T: Clone, F: FnOnce() -> T> Once<T, F> {
    /// Wraps `function`. Nothing runs until [`call`](Self::call).
    #[inline]
    pub const fn new(function: F) -> Self {
        Self {
            state: RefCell::new(OnceState::Pending(function)),
        }
    }

    /// Returns the cached result, running the function if this is the first call.
    ///
    /// # Panics
    ///
    /// Panics if the wrapper has been poisoned.
    pub fn call(&self) -> T {
        if let OnceState::Ready(value) = &*self.state.borrow() {
            return value.clone();
        }
        self.initialize()
    }

    fn initialize(&self) -> T {
        let previous = std::mem::replace(&mut *self.state.borrow_mut(), OnceState::Poisoned);
        match previous {
            OnceState::Pending(function) => {
                // The borrow is released while `function` runs, so a
                // re-entrant call finds the wrapper poisoned.
                let value = function();
                *self.state.borrow_mut() = OnceState::Ready(value.clone());
                value
            }
            OnceState::Ready(value) => {
                let result = value.clone();
                *self.state.borrow_mut() = OnceState::Ready(value);
                result
            }
            OnceState::Poisoned => panic!("Once instance has been poisoned"),
        }
    }
}

impl<T, F> Once<T, F> {
    /// Returns `true` once the function has run to completion.
    #[inline]
    pub fn is_called(&self) -> bool {
        matches!(&*self.state.borrow(), OnceState::Ready(_))
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Once<T, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        match &*state {
            OnceState::Ready(value) => formatter.debug_tuple("Once").field(value).finish(),
            OnceState::Pending(_) => formatter.debug_tuple("Once").field(&"<pending>").finish(),
            OnceState::Poisoned => formatter.debug_tuple("Once").field(&"<poisoned>").finish(),
        }
    }
}

static_assertions::assert_not_impl_any!(Once<i32>: Sync);

/// Wraps `function` so that it runs at most once.
///
/// Shorthand for [`Once::new`].
#[inline]
pub const fn once<T: Clone, F: FnOnce() -> T>(function: F) -> Once<T, F> {
    Once::new(function)
}
