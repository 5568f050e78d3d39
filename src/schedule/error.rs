//! Error types for the scheduling module.

/// Represents errors that can occur when setting up a scheduler.
///
/// Scheduling itself never fails once a scheduler exists; only obtaining a
/// scheduler can.
///
/// # Examples
///
/// ```rust
/// use collars::schedule::{ScheduleError, TokioScheduler};
///
/// // Outside a Tokio runtime there is nothing to schedule on.
/// let error = TokioScheduler::current().unwrap_err();
/// assert!(matches!(error, ScheduleError::RuntimeUnavailable { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// No Tokio runtime is available on the current thread.
    RuntimeUnavailable {
        /// Why the runtime could not be reached.
        reason: String,
    },
}

impl std::fmt::Display for ScheduleError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RuntimeUnavailable { reason } => {
                write!(formatter, "no runtime available for scheduling: {reason}")
            }
        }
    }
}

impl std::error::Error for ScheduleError {}

impl From<tokio::runtime::TryCurrentError> for ScheduleError {
    fn from(error: tokio::runtime::TryCurrentError) -> Self {
        Self::RuntimeUnavailable {
            reason: error.to_string(),
        }
    }
}
