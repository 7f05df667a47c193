use crate::app::{
    action::{Action, UpdateResult},
    command::{Command, TaskKey},
    state::AppState,
};
use crate::domain::models::{NotificationId, Severity};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::ShowFlash(text, severity) => UpdateResult::Handled(show(state, text, *severity)),
        Action::DismissFlash(id) => UpdateResult::Handled(dismiss(state, *id)),
        Action::Timer(TaskKey::AutoDismiss(id)) => {
            UpdateResult::Handled(begin_exit(state, *id).into_iter().collect())
        }
        Action::Timer(TaskKey::RemoveNotification(id)) => {
            if state.notifications.remove(*id) {
                tracing::debug!(%id, "Flash removed");
            }
            UpdateResult::Handled(Vec::new())
        }
        Action::Tick => {
            state.notifications.settle();
            UpdateResult::Handled(Vec::new())
        }
        _ => UpdateResult::NotHandled,
    }
}

pub fn show(state: &mut AppState, text: &str, severity: Severity) -> Vec<Command> {
    let id = state.notifications.push(text, severity);
    tracing::debug!(%id, ?severity, text, "Flash shown");
    vec![Command::Schedule {
        key: TaskKey::AutoDismiss(id),
        after: state.timings.notification_ttl(),
    }]
}

/// Manual dismissal: drops the pending auto-dismiss so removal happens once.
pub fn dismiss(state: &mut AppState, id: NotificationId) -> Vec<Command> {
    match begin_exit(state, id) {
        Some(remove) => vec![Command::Cancel(TaskKey::AutoDismiss(id)), remove],
        None => Vec::new(),
    }
}

fn begin_exit(state: &mut AppState, id: NotificationId) -> Option<Command> {
    state.notifications.begin_dismiss(id).then(|| Command::Schedule {
        key: TaskKey::RemoveNotification(id),
        after: state.timings.notification_exit(),
    })
}
