use super::{action::Action, command::TaskKey};
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::AbortHandle;

/// Delayed tasks keyed by what they affect. At most one task per key is
/// pending; scheduling an existing key replaces it.
pub struct Scheduler {
    tasks: HashMap<TaskKey, AbortHandle>,
    tx: mpsc::Sender<Action>,
}

impl Scheduler {
    #[must_use]
    pub fn new(tx: mpsc::Sender<Action>) -> Self {
        Self {
            tasks: HashMap::new(),
            tx,
        }
    }

    pub fn schedule(&mut self, key: TaskKey, after: Duration) {
        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(after).await;
            let _ = tx.send(Action::Timer(key)).await;
        });
        if let Some(previous) = self.tasks.insert(key, handle.abort_handle()) {
            previous.abort();
        }
        tracing::trace!(?key, ?after, "Task scheduled");
    }

    /// Returns `false` when nothing was pending under `key`.
    pub fn cancel(&mut self, key: TaskKey) -> bool {
        match self.tasks.remove(&key) {
            Some(handle) => {
                handle.abort();
                tracing::trace!(?key, "Task cancelled");
                true
            }
            None => false,
        }
    }

    /// Forgets a task whose timer has been delivered. A delivery can arrive
    /// after its key was rescheduled, so only a finished task is dropped.
    pub fn complete(&mut self, key: TaskKey) {
        if self.tasks.get(&key).is_some_and(AbortHandle::is_finished) {
            self.tasks.remove(&key);
        }
    }

    #[must_use]
    pub fn is_pending(&self, key: TaskKey) -> bool {
        self.tasks.get(&key).is_some_and(|h| !h.is_finished())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.values().filter(|h| !h.is_finished()).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn cancel_all(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
