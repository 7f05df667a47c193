use crate::domain::models::{NotificationId, Submission};
use std::time::Duration;

/// A scheduled task, keyed by the thing it affects so it can be replaced or
/// cancelled with a single lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKey {
    AutoDismiss(NotificationId),
    RemoveNotification(NotificationId),
    BlurGrace,
    SubmitFallback(usize),
    InitialFocus,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Schedule { key: TaskKey, after: Duration },
    Cancel(TaskKey),
    Submit(Submission),
}
