use super::{
    action::{Action, UpdateResult},
    command::Command,
    features,
    state::AppState,
};

type Handler = fn(&mut AppState, &Action) -> UpdateResult;

// First handler to claim an action wins.
const HANDLERS: [Handler; 5] = [
    features::bootstrap::update,
    features::navigation::update,
    features::suggestions::update,
    features::forms::update,
    features::notifications::update,
];

pub fn update(state: &mut AppState, action: Action) -> Vec<Command> {
    match action {
        Action::Quit => {
            state.should_quit = true;
            return Vec::new();
        }
        Action::Resize(..) => return Vec::new(),
        _ => {}
    }

    for handler in HANDLERS {
        if let UpdateResult::Handled(commands) = handler(state, &action) {
            return commands;
        }
    }

    tracing::trace!(?action, "Unhandled action");
    Vec::new()
}
