use super::{bootstrap, navigation::set_focus, notifications};
use crate::app::{
    action::{Action, UpdateResult},
    command::{Command, TaskKey},
    state::{
        forms::{MSG_ENTER_NAME, MSG_NAME_NOT_FOUND, MSG_SELECT_AREA},
        AppState, Focus,
    },
};
use crate::domain::models::{Page, Severity, Submission};
use chrono::Local;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        // --- Area form ---
        Action::AreaNext => {
            let next = match state.area_form.selected {
                _ if state.areas.is_empty() => None,
                Some(i) => Some((i + 1).min(state.areas.len() - 1)),
                None => Some(0),
            };
            UpdateResult::Handled(change_area(state, next))
        }
        Action::AreaPrev => {
            let prev = state.area_form.selected.map(|i| i.saturating_sub(1));
            UpdateResult::Handled(change_area(state, prev))
        }
        Action::AreaPick(index) => {
            if *index >= state.areas.len() {
                return UpdateResult::Handled(Vec::new());
            }
            let mut commands = set_focus(state, Focus::AreaSelect);
            commands.extend(change_area(state, Some(*index)));
            UpdateResult::Handled(commands)
        }
        Action::SubmitArea => UpdateResult::Handled(submit_area(state)),

        // --- Entry form ---
        Action::SubmitEntry(button) => UpdateResult::Handled(submit_entry(state, *button)),
        Action::Timer(TaskKey::SubmitFallback(index)) => {
            if let Some(button) = state.entry_form.buttons.get_mut(*index) {
                button.restore();
                tracing::debug!(button = index, "Submit button re-enabled");
            }
            UpdateResult::Handled(Vec::new())
        }

        // --- Submission outcomes ---
        Action::SubmissionAccepted(submission, message) => {
            tracing::info!(submission = %submission.describe(), "Submission accepted");
            if let Submission::Area { area } = submission {
                state.active_area = Some(area.clone());
            }
            state
                .pending_flashes
                .push((message.clone(), Severity::Success));
            UpdateResult::Handled(bootstrap::navigate(state, Page::SignIn))
        }
        Action::SubmissionRejected(submission, message) => {
            tracing::warn!(submission = %submission.describe(), error = %message, "Submission rejected");
            // The page stays put; the fallback timer re-enables the button
            UpdateResult::Handled(notifications::show(state, message, Severity::Error))
        }
        _ => UpdateResult::NotHandled,
    }
}

fn change_area(state: &mut AppState, selected: Option<usize>) -> Vec<Command> {
    if state.page != Page::AreaSelect {
        return Vec::new();
    }
    if selected != state.area_form.selected {
        state.area_form.selected = selected;
        state.area_form.error.hide();
    }
    Vec::new()
}

fn submit_area(state: &mut AppState) -> Vec<Command> {
    if state.page != Page::AreaSelect {
        return Vec::new();
    }
    match state.selected_area().map(str::to_string) {
        Some(area) => {
            state.area_form.error.hide();
            vec![Command::Submit(Submission::Area { area })]
        }
        None => {
            state.area_form.error.show(MSG_SELECT_AREA);
            set_focus(state, Focus::AreaSelect)
        }
    }
}

fn submit_entry(state: &mut AppState, index: usize) -> Vec<Command> {
    if !state.has_entry_field() {
        return Vec::new();
    }
    let Some(pressed) = state.entry_form.buttons.get(index) else {
        return Vec::new();
    };
    if pressed.disabled {
        return Vec::new();
    }
    if let Some(direction) = pressed.direction {
        state.entry_form.direction = Some(direction);
    }
    state.entry_form.clicked = Some(index);
    let mut commands = set_focus(state, Focus::Button(index));

    let raw_input = state.entry_form.text_area.value();
    let entry = raw_input.trim();

    if entry.is_empty() {
        state.entry_form.error.show(MSG_ENTER_NAME);
        commands.extend(set_focus(state, Focus::Entry));
        return commands;
    }

    let membership = state.directory.check(entry);
    let Some(name) = membership.resolve(entry).map(str::to_string) else {
        state.entry_form.error.show(MSG_NAME_NOT_FOUND);
        commands.extend(set_focus(state, Focus::Entry));
        return commands;
    };

    state.entry_form.error.hide();

    if let Some(pressed) = state.entry_form.buttons.get_mut(index) {
        pressed.start_processing();
        commands.push(Command::Schedule {
            key: TaskKey::SubmitFallback(index),
            after: state.timings.submit_fallback(),
        });
    }

    commands.push(Command::Submit(Submission::Entry {
        name,
        raw_input,
        area: state.active_area.clone(),
        direction: state.entry_form.direction.unwrap_or_default(),
        submitted_at: Local::now(),
    }));
    commands
}
