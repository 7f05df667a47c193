use super::{navigation::set_focus, notifications};
use crate::app::{
    action::{Action, UpdateResult},
    command::{Command, TaskKey},
    state::{AppState, AreaForm, EntryForm, Focus, SuggestionPanel},
};
use crate::domain::models::Page;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::Ready => UpdateResult::Handled(ready(state)),
        Action::Timer(TaskKey::InitialFocus) => {
            let mut commands = Vec::new();
            if state.has_entry_field() {
                commands = set_focus(state, Focus::Entry);
                state.entry_form.text_area.select_all();
            }
            UpdateResult::Handled(commands)
        }
        _ => UpdateResult::NotHandled,
    }
}

/// Wires the current page. Running it twice for the same page does nothing.
pub fn ready(state: &mut AppState) -> Vec<Command> {
    if state.bootstrapped {
        return Vec::new();
    }
    state.bootstrapped = true;
    tracing::debug!(
        page = ?state.page,
        autocomplete = state.has_entry_field() && state.directory.has_names(),
        "Page wired"
    );

    let mut commands = Vec::new();
    for (text, severity) in std::mem::take(&mut state.pending_flashes) {
        commands.extend(notifications::show(state, &text, severity));
    }

    if state.has_entry_field() {
        commands.push(Command::Schedule {
            key: TaskKey::InitialFocus,
            after: state.timings.initial_focus(),
        });
    }
    commands
}

/// Replaces the current page with a fresh `page` and wires it. Tasks that
/// belonged to the old page are cancelled. Flash messages survive.
pub fn navigate(state: &mut AppState, page: Page) -> Vec<Command> {
    let mut commands: Vec<Command> = (0..state.entry_form.buttons.len())
        .map(|i| Command::Cancel(TaskKey::SubmitFallback(i)))
        .collect();
    commands.push(Command::Cancel(TaskKey::BlurGrace));
    commands.push(Command::Cancel(TaskKey::InitialFocus));

    state.page = page;
    state.focus = Focus::None;
    state.area_form = AreaForm::default();
    state.entry_form = EntryForm::default();
    state.suggestions = SuggestionPanel::default();
    state.bootstrapped = false;

    commands.extend(ready(state));
    commands
}
