use crate::app::state::{ErrorRegion, SubmitButton};
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Wide enough for the longest label, including "Processing...".
pub const BUTTON_WIDTH: u16 = 17;
pub const BUTTON_GAP: u16 = 2;

/// Lays `count` buttons out left to right from the start of `row`.
#[must_use]
pub fn button_rects(row: Rect, count: usize) -> Vec<Rect> {
    (0..count as u16)
        .map(|i| {
            let x = row.x.saturating_add(i * (BUTTON_WIDTH + BUTTON_GAP));
            Rect::new(x, row.y, BUTTON_WIDTH, row.height.min(1)).intersection(row)
        })
        .collect()
}

pub struct ButtonView<'a> {
    pub label: &'a str,
    pub focused: bool,
    pub disabled: bool,
    pub theme: &'a Theme,
}

impl<'a> ButtonView<'a> {
    #[must_use]
    pub fn new(button: &'a SubmitButton, focused: bool, theme: &'a Theme) -> Self {
        Self {
            label: &button.label,
            focused,
            disabled: button.disabled,
            theme,
        }
    }
}

impl Widget for ButtonView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = if self.disabled {
            self.theme.button_disabled
        } else if self.focused {
            self.theme.button_focus
        } else {
            self.theme.button
        };
        Paragraph::new(Line::from(Span::styled(self.label, style)))
            .alignment(Alignment::Center)
            .style(style)
            .render(area, buf);
    }
}

pub struct ErrorLine<'a> {
    pub region: &'a ErrorRegion,
    pub theme: &'a Theme,
}

impl Widget for ErrorLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.region.visible {
            return;
        }
        Paragraph::new(Span::styled(
            self.region.text.as_str(),
            self.theme.error_text,
        ))
        .render(area, buf);
    }
}
