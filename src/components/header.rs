use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Header<'a> {
    pub title: &'a str,
    pub area_name: Option<&'a str>,
    pub clock: &'a str,
    pub theme: &'a Theme,
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![
            Span::styled(" ✔ CHECK-IN ", self.theme.header_logo),
            Span::raw(" "),
            Span::styled(self.title, self.theme.header),
        ];
        if let Some(name) = self.area_name {
            spans.push(Span::styled("  │  ", self.theme.header_item));
            spans.push(Span::styled(name, self.theme.header_item));
        }

        let used: usize = spans.iter().map(Span::width).sum();
        let clock = format!("{} ", self.clock);
        let padding = (area.width as usize).saturating_sub(used + clock.chars().count());
        spans.push(Span::styled(" ".repeat(padding), self.theme.header));
        spans.push(Span::styled(clock, self.theme.header_item));

        Paragraph::new(Line::from(spans))
            .style(self.theme.header)
            .render(area, buf);
    }
}
