use crate::app::state::{AppState, Focus};
use crate::components::{
    flash::{self, FlashSlot, FlashStack},
    footer::Footer,
    form_controls::{button_rects, ButtonView, ErrorLine, BUTTON_WIDTH},
    header::Header,
    helpers::{centered_rect_fixed, draw_drop_shadow},
    suggestion_panel::{self, SuggestionList},
};
use crate::domain::models::Page;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph},
    Frame,
};

const CARD_WIDTH: u16 = 56;
pub const CONTINUE_LABEL: &str = "Continue";

/// Every clickable region of the current frame. Rects of controls that are
/// not on the current page are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppLayout {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
    pub card: Rect,
    pub area_list: Rect,
    pub area_error: Rect,
    pub area_submit: Rect,
    pub entry: Rect,
    pub entry_error: Rect,
    pub buttons: Vec<Rect>,
    pub suggestions: Option<Rect>,
    pub flashes: Vec<FlashSlot>,
}

fn card_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .padding(Padding::new(2, 2, 1, 1))
}

pub fn get_layout(area: Rect, state: &AppState) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);

    let mut layout = AppLayout {
        header: main[0],
        body: main[1],
        footer: main[2],
        flashes: flash::layout(main[1], &state.notifications),
        ..Default::default()
    };

    match state.page {
        Page::AreaSelect => {
            let list_height = state.areas.len().max(1) as u16;
            layout.card = centered_rect_fixed(CARD_WIDTH, list_height + 8, layout.body);
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1),           // Title
                    Constraint::Length(1),           // Spacer
                    Constraint::Length(list_height), // Areas
                    Constraint::Length(1),           // Error
                    Constraint::Length(1),           // Continue
                    Constraint::Min(0),
                ])
                .split(card_block().inner(layout.card));
            layout.area_list = rows[2];
            layout.area_error = rows[3];
            layout.area_submit = Rect {
                width: BUTTON_WIDTH.min(rows[4].width),
                ..rows[4]
            };
        }
        Page::SignIn => {
            layout.card = centered_rect_fixed(CARD_WIDTH, 12, layout.body);
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1), // Title
                    Constraint::Length(1), // Area
                    Constraint::Length(1), // Spacer
                    Constraint::Length(3), // Entry
                    Constraint::Length(1), // Error
                    Constraint::Length(1), // Buttons
                    Constraint::Min(0),
                ])
                .split(card_block().inner(layout.card));
            layout.entry = rows[3];
            layout.entry_error = rows[4];
            layout.buttons = button_rects(rows[5], state.entry_form.buttons.len());
            if state.suggestions.is_visible() {
                layout.suggestions = Some(suggestion_panel::area_below(
                    layout.entry,
                    state.suggestions.matches.len(),
                    layout.body,
                ));
            }
        }
    }

    layout
}

pub fn draw(f: &mut Frame, state: &mut AppState) {
    if f.area().width == 0 || f.area().height == 0 {
        return;
    }

    let layout = get_layout(f.area(), state);

    // The text area carries its own chrome, so set it up before borrowing
    let entry_focused = state.focus == Focus::Entry;
    let entry_border = if entry_focused {
        state.theme.border_focus
    } else {
        state.theme.border
    };
    let cursor_style = if entry_focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };
    let placeholder_style = state.theme.placeholder;
    let field_style = if entry_focused {
        state.theme.field_focus
    } else {
        state.theme.field
    };
    let text_area = &mut state.entry_form.text_area;
    text_area.set_block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(entry_border)
            .title(" Name "),
    );
    text_area.set_style(field_style);
    text_area.set_cursor_style(cursor_style);
    text_area.set_placeholder_style(placeholder_style);

    let state = &*state;
    let theme = &state.theme;

    // --- Header ---
    let title = match state.page {
        Page::AreaSelect => "Select area",
        Page::SignIn => "Sign in / out",
    };
    let clock = chrono::Local::now().format("%H:%M").to_string();
    f.render_widget(
        Header {
            title,
            area_name: state.active_area.as_deref(),
            clock: &clock,
            theme,
        },
        layout.header,
    );

    // --- Card ---
    draw_drop_shadow(f.buffer_mut(), layout.card, layout.body);
    f.render_widget(Clear, layout.card);
    f.render_widget(
        card_block()
            .border_style(theme.border)
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled("CHECK-IN", theme.title),
                Span::raw(" "),
            ])),
        layout.card,
    );
    let inner = card_block().inner(layout.card);
    let heading = Rect { height: 1, ..inner };

    match state.page {
        Page::AreaSelect => {
            f.render_widget(
                Paragraph::new(Span::styled("Choose your area", theme.title)),
                heading,
            );
            draw_area_list(f, state, layout.area_list);
            f.render_widget(
                ErrorLine {
                    region: &state.area_form.error,
                    theme,
                },
                layout.area_error,
            );
            f.render_widget(
                ButtonView {
                    label: CONTINUE_LABEL,
                    focused: state.focus == Focus::AreaSubmit,
                    disabled: false,
                    theme,
                },
                layout.area_submit,
            );
        }
        Page::SignIn => {
            f.render_widget(
                Paragraph::new(Span::styled("Enter your name", theme.title)),
                heading,
            );
            if let Some(area) = &state.active_area {
                f.render_widget(
                    Paragraph::new(Line::from(vec![
                        Span::styled("Area: ", theme.label),
                        Span::styled(area.as_str(), theme.field),
                    ])),
                    Rect {
                        y: heading.y.saturating_add(1),
                        ..heading
                    }
                    .intersection(inner),
                );
            }
            f.render_widget(&state.entry_form.text_area, layout.entry);
            f.render_widget(
                ErrorLine {
                    region: &state.entry_form.error,
                    theme,
                },
                layout.entry_error,
            );
            for (i, (button, rect)) in state
                .entry_form
                .buttons
                .iter()
                .zip(&layout.buttons)
                .enumerate()
            {
                f.render_widget(
                    ButtonView::new(button, state.focus == Focus::Button(i), theme),
                    *rect,
                );
            }
            if let Some(rect) = layout.suggestions {
                f.render_widget(
                    SuggestionList {
                        panel: &state.suggestions,
                        theme,
                    },
                    rect,
                );
            }
        }
    }

    // --- Flash messages ---
    if state.notifications.has_container() {
        f.render_widget(
            FlashStack {
                queue: &state.notifications,
                theme,
            },
            layout.body,
        );
    }

    // --- Footer ---
    f.render_widget(Footer { state, theme }, layout.footer);
}

fn draw_area_list(f: &mut Frame, state: &AppState, area: Rect) {
    let theme = &state.theme;
    if state.areas.is_empty() {
        f.render_widget(
            Paragraph::new(Span::styled("No areas configured", theme.dimmed)),
            area,
        );
        return;
    }

    let focused = state.focus == Focus::AreaSelect;
    for (i, name) in state.areas.iter().enumerate() {
        let y = area.y + i as u16;
        if y >= area.bottom() {
            break;
        }
        let selected = state.area_form.selected == Some(i);
        let (marker, style) = match (selected, focused) {
            (true, true) => ("▸ ", theme.list_selected),
            (true, false) => ("• ", theme.list_item.add_modifier(Modifier::BOLD)),
            (false, _) => ("  ", theme.list_item),
        };
        let width = area.width.saturating_sub(2) as usize;
        f.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(marker, style),
                Span::styled(format!("{name:<width$}"), style),
            ])),
            Rect { y, height: 1, ..area },
        );
    }
}
