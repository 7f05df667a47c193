use crate::app::{
    action::{Action, UpdateResult},
    command::{Command, TaskKey},
    state::{AppState, Focus},
};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::FocusNext => UpdateResult::Handled(cycle(state, 1)),
        Action::FocusPrev => UpdateResult::Handled(cycle(state, -1)),
        Action::FocusField(target) => UpdateResult::Handled(set_focus(state, *target)),
        _ => UpdateResult::NotHandled,
    }
}

/// Moves focus, scheduling the blur-grace hide when the entry field loses
/// focus with suggestions open. Focusing the entry cancels a pending hide.
pub fn set_focus(state: &mut AppState, target: Focus) -> Vec<Command> {
    let was_entry = state.focus == Focus::Entry;
    state.focus = target;

    if target == Focus::Entry {
        vec![Command::Cancel(TaskKey::BlurGrace)]
    } else if was_entry && state.suggestions.is_visible() {
        vec![Command::Schedule {
            key: TaskKey::BlurGrace,
            after: state.timings.blur_grace(),
        }]
    } else {
        Vec::new()
    }
}

fn cycle(state: &mut AppState, step: isize) -> Vec<Command> {
    let order = state.focus_order();
    if order.is_empty() {
        return Vec::new();
    }
    let len = order.len() as isize;
    let next = match order.iter().position(|f| *f == state.focus) {
        Some(i) => (i as isize + step).rem_euclid(len),
        None if step > 0 => 0,
        None => len - 1,
    };
    set_focus(state, order[next as usize])
}
