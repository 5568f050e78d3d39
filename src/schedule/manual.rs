//! A scheduler driven by an explicit virtual clock.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::fmt;
use std::time::Duration;

use parking_lot::Mutex;

use super::{Scheduler, Task};

/// A [`Scheduler`] whose clock only moves when [`advance`](Self::advance)
/// is called.
///
/// Useful for hosts that drive their own event loop, and for tests that need
/// delayed work to happen at an exact, reproducible moment. Tasks run on the
/// thread calling `advance`.
///
/// # Examples
///
/// ```rust
/// use collars::schedule::{delay, ManualScheduler};
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::time::Duration;
///
/// let scheduler = ManualScheduler::new();
/// let fired = Arc::new(AtomicUsize::new(0));
///
/// let counter = Arc::clone(&fired);
/// delay(&scheduler, move |step| { counter.fetch_add(step, Ordering::SeqCst); }, Duration::from_millis(50), 1);
///
/// scheduler.advance(Duration::from_millis(49));
/// assert_eq!(fired.load(Ordering::SeqCst), 0);
///
/// scheduler.advance(Duration::from_millis(1));
/// assert_eq!(fired.load(Ordering::SeqCst), 1);
/// ```
pub struct ManualScheduler {
    state: Mutex<ManualState>,
}

struct ManualState {
    now: Duration,
    next_sequence: u64,
    pending: BinaryHeap<Reverse<PendingTask>>,
}

/// A task waiting for its due time, ordered by due time then by scheduling order.
struct PendingTask {
    due: Duration,
    sequence: u64,
    task: Task,
}

impl PartialEq for PendingTask {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PendingTask {}

impl PartialOrd for PendingTask {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PendingTask {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.due, self.sequence).cmp(&(other.due, other.sequence))
    }
}

impl ManualScheduler {
    /// Creates a scheduler whose clock reads zero.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(ManualState {
                now: Duration::ZERO,
                next_sequence: 0,
                pending: BinaryHeap::new(),
            }),
        }
    }

    /// Returns the current virtual time.
    pub fn now(&self) -> Duration {
        self.state.lock().now
    }

    /// Returns the number of tasks that have not run yet.
    pub fn pending(&self) -> usize {
        self.state.lock().pending.len()
    }

    /// Moves the clock forward by `by`, running every task that falls due.
    ///
    /// Tasks run in due-time order; tasks due at the same time run in the
    /// order they were scheduled. A task may schedule further tasks; those run
    /// too if they fall due within the same advance. Returns the number of
    /// tasks run.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.state.lock().now.saturating_add(by);
        let mut executed = 0;

        loop {
            let next = {
                let mut state = self.state.lock();
                match state.pending.peek() {
                    Some(Reverse(pending)) if pending.due <= target => {
                        let due = pending.due;
                        state.now = due;
                        state.pending.pop()
                    }
                    _ => None,
                }
            };
            // The lock is released here so a running task can schedule more.
            let Some(Reverse(pending)) = next else {
                break;
            };
            tracing::trace!(due = ?pending.due, sequence = pending.sequence, "running delayed task");
            (pending.task)();
            executed += 1;
        }

        self.state.lock().now = target;
        executed
    }
}

impl Default for ManualScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, after: Duration, task: Task) {
        let mut state = self.state.lock();
        let due = state.now.saturating_add(after);
        let sequence = state.next_sequence;
        state.next_sequence += 1;
        tracing::debug!(?due, sequence, "scheduling delayed task on manual clock");
        state.pending.push(Reverse(PendingTask {
            due,
            sequence,
            task,
        }));
    }
}

impl fmt::Debug for ManualScheduler {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        formatter
            .debug_struct("ManualScheduler")
            .field("now", &state.now)
            .field("pending", &state.pending.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::Arc;

    #[rstest]
    fn test_pending_task_order_breaks_ties_by_sequence() {
        let early = PendingTask {
            due: Duration::from_millis(5),
            sequence: 1,
            task: Box::new(|| {}),
        };
        let late = PendingTask {
            due: Duration::from_millis(5),
            sequence: 2,
            task: Box::new(|| {}),
        };
        assert!(early < late);
    }

    #[rstest]
    fn test_advance_moves_clock_even_without_tasks() {
        let scheduler = ManualScheduler::new();
        assert_eq!(scheduler.advance(Duration::from_secs(2)), 0);
        assert_eq!(scheduler.now(), Duration::from_secs(2));
    }

    #[rstest]
    fn test_task_scheduled_by_task_runs_within_same_advance() {
        let scheduler = Arc::new(ManualScheduler::new());
        let log = Arc::new(Mutex::new(Vec::new()));

        let inner_scheduler = Arc::clone(&scheduler);
        let inner_log = Arc::clone(&log);
        scheduler.schedule(
            Duration::from_millis(10),
            Box::new(move || {
                inner_log.lock().push("outer");
                let nested_log = Arc::clone(&inner_log);
                inner_scheduler.schedule(
                    Duration::from_millis(10),
                    Box::new(move || nested_log.lock().push("inner")),
                );
            }),
        );

        assert_eq!(scheduler.advance(Duration::from_millis(25)), 2);
        assert_eq!(*log.lock(), vec!["outer", "inner"]);
        assert_eq!(scheduler.pending(), 0);
    }
}
