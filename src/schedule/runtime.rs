//! Scheduling on a Tokio runtime.

use std::time::Duration;

use tokio::runtime::Handle;

use super::{ScheduleError, Scheduler, Task};

/// A [`Scheduler`] backed by a Tokio runtime's timer.
///
/// Each scheduled task is spawned onto the runtime, sleeps for its delay
/// and then runs. Tasks are detached: they keep running after the
/// scheduler is dropped, for as long as the runtime is alive.
///
/// # Panics
///
/// The runtime must have its timer enabled (`enable_time` or
/// `enable_all` on the builder). Scheduling on a runtime without one
/// panics in [`Scheduler::schedule`], at the `delay` call site, instead of
/// dropping the task on a worker thread.
///
/// # Examples
///
/// ```rust
/// use collars::schedule::{delay, TokioScheduler};
/// use std::time::Duration;
/// use tokio::sync::oneshot;
///
/// # tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(async {
/// let scheduler = TokioScheduler::current().expect("inside a runtime");
/// let (sender, receiver) = oneshot::channel();
///
/// delay(&scheduler, move |value| { let _ = sender.send(value); }, Duration::from_millis(5), 7);
/// assert_eq!(receiver.await.unwrap(), 7);
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    handle: Handle,
}

impl TokioScheduler {
    /// Schedules on the runtime behind `handle`.
    #[inline]
    pub const fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Schedules on the runtime the caller is running in.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::RuntimeUnavailable`] when called outside a
    /// Tokio runtime.
    pub fn current() -> Result<Self, ScheduleError> {
        let handle = Handle::try_current()?;
        Ok(Self::new(handle))
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&self, after: Duration, task: Task) {
        tracing::debug!(delay = ?after, "scheduling delayed task on tokio");
        // Created under the handle so a runtime without a timer panics here.
        let sleep = {
            let _guard = self.handle.enter();
            tokio::time::sleep(after)
        };
        self.handle.spawn(async move {
            sleep.await;
            tracing::trace!("running delayed task");
            task();
        });
    }
}
