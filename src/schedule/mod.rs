//! Deferred function invocation.
//!
//! [`delay`] hands a function and its arguments to a [`Scheduler`], which
//! runs it once its minimum delay has elapsed. The scheduler is passed in
//! explicitly; this module keeps no global timer.
//!
//! Two schedulers are provided:
//!
//! - [`TokioScheduler`]: sleeps on a Tokio runtime's timer
//! - [`ManualScheduler`]: runs tasks when its virtual clock is advanced
//!
//! # Ordering
//!
//! Each task runs no earlier than its own delay after it was scheduled.
//! Tasks with different delays are not guaranteed to run in the order they
//! were scheduled.
//!
//! # Examples
//!
//! ```rust
//! use collars::schedule::{delay, ManualScheduler};
//! use std::sync::mpsc;
//! use std::time::Duration;
//!
//! let scheduler = ManualScheduler::new();
//! let (sender, receiver) = mpsc::channel();
//!
//! delay(&scheduler, move |(name, count)| sender.send(format!("{name}:{count}")).unwrap(), Duration::from_secs(1), ("retry", 3));
//! assert!(receiver.try_recv().is_err());
//!
//! scheduler.advance(Duration::from_secs(1));
//! assert_eq!(receiver.try_recv().unwrap(), "retry:3");
//! ```

mod error;
mod manual;
mod runtime;

pub use error::ScheduleError;
pub use manual::ManualScheduler;
pub use runtime::TokioScheduler;

use std::time::Duration;

/// A unit of deferred work.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// A facility that runs tasks after a minimum delay.
///
/// Implementations must run every scheduled task exactly once, no earlier
/// than `after` from the moment it was scheduled, as long as the scheduler's
/// host stays alive. `schedule` must return without waiting for the task.
pub trait Scheduler {
    /// Arranges for `task` to run once `after` has elapsed.
    fn schedule(&self, after: Duration, task: Task);
}

impl<S: Scheduler + ?Sized> Scheduler for &S {
    #[inline]
    fn schedule(&self, after: Duration, task: Task) {
        (**self).schedule(after, task);
    }
}

impl<S: Scheduler + ?Sized> Scheduler for std::sync::Arc<S> {
    #[inline]
    fn schedule(&self, after: Duration, task: Task) {
        (**self).schedule(after, task);
    }
}

/// Invokes `function(arguments)` once, no earlier than `wait` from now.
///
/// Returns immediately; the call happens later on `scheduler`. There is no
/// way to cancel it.
///
/// # Examples
///
/// ```rust
/// use collars::schedule::{delay, ManualScheduler};
/// use std::sync::{Arc, Mutex};
/// use std::time::Duration;
///
/// let scheduler = ManualScheduler::new();
/// let greeting = Arc::new(Mutex::new(String::new()));
///
/// let target = Arc::clone(&greeting);
/// delay(
///     &scheduler,
///     move |name: &str| *target.lock().unwrap() = format!("hello {name}"),
///     Duration::from_millis(100),
///     "world",
/// );
///
/// scheduler.advance(Duration::from_millis(100));
/// assert_eq!(*greeting.lock().unwrap(), "hello world");
/// ```
pub fn delay<S, F, A>(scheduler: &S, function: F, wait: Duration, arguments: A)
where
    S: Scheduler + ?Sized,
    F: FnOnce(A) + Send + 'static,
    A: Send + 'static,
{
    scheduler.schedule(wait, Box::new(move || function(arguments)));
}
