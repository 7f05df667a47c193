use crate::app::state::SuggestionPanel;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Widget},
};

/// Where the dropdown goes: directly under `entry`, as tall as its rows
/// plus borders, clipped to `bounds`.
#[must_use]
pub fn area_below(entry: Rect, rows: usize, bounds: Rect) -> Rect {
    let height = (rows as u16).saturating_add(2);
    Rect::new(entry.x, entry.bottom(), entry.width, height).intersection(bounds)
}

/// A dropdown clipped by the screen edge drops its bottom border so the
/// last visible line is still a row.
#[must_use]
pub fn borders_for(area: Rect, rows: usize) -> Borders {
    if usize::from(area.height) >= rows + 2 {
        Borders::ALL
    } else {
        Borders::TOP | Borders::LEFT | Borders::RIGHT
    }
}

/// Index of the row under screen line `y`, if any.
#[must_use]
pub fn row_at(area: Rect, y: u16, rows: usize) -> Option<usize> {
    let bottom = if borders_for(area, rows).contains(Borders::BOTTOM) {
        area.bottom().saturating_sub(1)
    } else {
        area.bottom()
    };
    if y <= area.y || y >= bottom {
        return None;
    }
    let index = (y - area.y - 1) as usize;
    (index < rows).then_some(index)
}

pub struct SuggestionList<'a> {
    pub panel: &'a SuggestionPanel,
    pub theme: &'a Theme,
}

impl Widget for SuggestionList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        Clear.render(area, buf);
        let block = Block::default()
            .borders(borders_for(area, self.panel.matches.len()))
            .border_style(self.theme.border_focus)
            .style(self.theme.suggestion);
        let inner = block.inner(area);
        block.render(area, buf);

        for (i, name) in self.panel.matches.iter().enumerate() {
            let y = inner.y + i as u16;
            if y >= inner.bottom() {
                break;
            }
            let style = if self.panel.selected == Some(i) {
                self.theme.suggestion_selected
            } else {
                self.theme.suggestion
            };
            let width = inner.width as usize;
            let line = Line::from(Span::styled(format!(" {name:<width$}"), style));
            buf.set_line(inner.x, y, &line, inner.width);
        }
    }
}
