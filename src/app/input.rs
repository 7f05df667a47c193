use crate::app::{
    action::Action,
    state::{AppState, Focus},
    ui,
};
use crate::components::suggestion_panel;
use crate::domain::models::Page;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect, Size};

pub fn map_event_to_action(
    event: Event,
    app_state: &AppState<'_>,
    terminal_size: Size,
) -> Option<Action> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Release => None,
        Event::Key(key) => map_key(key, app_state),
        Event::Mouse(mouse) => map_mouse(mouse, app_state, terminal_size),
        Event::Resize(w, h) => Some(Action::Resize(w, h)),
        _ => None,
    }
}

fn map_key(key: KeyEvent, state: &AppState<'_>) -> Option<Action> {
    if let Some(action) = state.keymap.get_action(key) {
        return Some(action);
    }

    match state.focus {
        Focus::Entry if state.has_entry_field() => {
            if state.suggestions.is_visible() {
                match key.code {
                    KeyCode::Down => return Some(Action::SuggestionNext),
                    KeyCode::Up => return Some(Action::SuggestionPrev),
                    KeyCode::Enter => return Some(Action::SuggestionAccept),
                    KeyCode::Esc => return Some(Action::SuggestionDismiss),
                    _ => {}
                }
            }
            match key.code {
                // Implicit submission goes through the first button
                KeyCode::Enter => Some(Action::SubmitEntry(0)),
                _ => Some(Action::EntryInput(key)),
            }
        }
        Focus::AreaSelect => match key.code {
            KeyCode::Down | KeyCode::Char('j') => Some(Action::AreaNext),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::AreaPrev),
            KeyCode::Enter => Some(Action::SubmitArea),
            _ => None,
        },
        Focus::AreaSubmit => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::SubmitArea),
            _ => None,
        },
        Focus::Button(i) => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::SubmitEntry(i)),
            _ => None,
        },
        _ => None,
    }
}

fn map_mouse(mouse: MouseEvent, state: &AppState<'_>, terminal_size: Size) -> Option<Action> {
    let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);
    let layout = ui::get_layout(area, state);
    let pos = Position::new(mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            // Topmost first: flashes, then the dropdown, then the form
            if let Some(slot) = layout
                .flashes
                .iter()
                .find(|s| s.is_interactive() && s.area.contains(pos))
            {
                return Some(Action::DismissFlash(slot.id));
            }

            if let Some(dropdown) = layout.suggestions {
                if dropdown.contains(pos) {
                    return suggestion_panel::row_at(
                        dropdown,
                        pos.y,
                        state.suggestions.matches.len(),
                    )
                    .map(Action::SuggestionClicked);
                }
            }

            match state.page {
                Page::SignIn => {
                    if layout.entry.contains(pos) {
                        return Some(Action::FocusField(Focus::Entry));
                    }
                    if let Some(i) = layout.buttons.iter().position(|r| r.contains(pos)) {
                        return Some(Action::SubmitEntry(i));
                    }
                }
                Page::AreaSelect => {
                    if layout.area_list.contains(pos) {
                        let index = (pos.y - layout.area_list.y) as usize;
                        return (index < state.areas.len()).then_some(Action::AreaPick(index));
                    }
                    if layout.area_submit.contains(pos) {
                        return Some(Action::SubmitArea);
                    }
                }
            }

            // Clicking empty space blurs whatever had focus
            (state.focus != Focus::None).then_some(Action::FocusField(Focus::None))
        }
        MouseEventKind::ScrollDown if layout.area_list.contains(pos) => Some(Action::AreaNext),
        MouseEventKind::ScrollUp if layout.area_list.contains(pos) => Some(Action::AreaPrev),
        _ => None,
    }
}
