use super::navigation::set_focus;
use crate::app::{
    action::{Action, UpdateResult},
    command::{Command, TaskKey},
    state::{AppState, Focus},
};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::EntryInput(key) => {
            if !state.has_entry_field() {
                return UpdateResult::Handled(Vec::new());
            }
            let changed = state.entry_form.text_area.edit(*key);
            if changed && state.directory.has_names() {
                let query = state.entry_form.text_area.value();
                let directory = state.directory.clone();
                state.suggestions.refresh(&query, &directory);
                tracing::debug!(
                    query = %query.trim(),
                    matches = state.suggestions.matches.len(),
                    "Suggestions refreshed"
                );
            }
            UpdateResult::Handled(Vec::new())
        }
        Action::SuggestionNext => {
            if state.suggestions.is_visible() {
                state.suggestions.select_next();
            }
            UpdateResult::Handled(Vec::new())
        }
        Action::SuggestionPrev => {
            if state.suggestions.is_visible() {
                state.suggestions.select_prev();
            }
            UpdateResult::Handled(Vec::new())
        }
        Action::SuggestionAccept => {
            let chosen = state
                .suggestions
                .is_visible()
                .then(|| state.suggestions.highlighted().map(str::to_string))
                .flatten();
            match chosen {
                Some(name) => UpdateResult::Handled(commit(state, &name)),
                // Swallowed: Enter with nothing highlighted does not submit
                None => UpdateResult::Handled(Vec::new()),
            }
        }
        Action::SuggestionClicked(index) => {
            let chosen = state
                .suggestions
                .is_visible()
                .then(|| state.suggestions.get(*index).map(str::to_string))
                .flatten();
            match chosen {
                Some(name) => UpdateResult::Handled(commit(state, &name)),
                None => UpdateResult::Handled(Vec::new()),
            }
        }
        Action::SuggestionDismiss => {
            state.suggestions.hide();
            UpdateResult::Handled(Vec::new())
        }
        Action::Timer(TaskKey::BlurGrace) => {
            if state.focus != Focus::Entry {
                state.suggestions.hide();
            }
            UpdateResult::Handled(Vec::new())
        }
        _ => UpdateResult::NotHandled,
    }
}

/// Writes the chosen name into the entry, closes the panel and refocuses.
fn commit(state: &mut AppState, name: &str) -> Vec<Command> {
    tracing::debug!(name, "Suggestion chosen");
    state.entry_form.text_area.set_value(name);
    state.suggestions.hide();
    set_focus(state, Focus::Entry)
}
