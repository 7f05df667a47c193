use super::helpers::dim_area;
use crate::app::state::{NotificationPhase, NotificationQueue};
use crate::domain::models::NotificationId;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

pub const MAX_WIDTH: u16 = 48;
const MAX_TEXT_LINES: u16 = 3;
const LEAVING_SHIFT: u16 = 4;
pub const CLOSE_GLYPH: &str = "×";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlashSlot {
    pub id: NotificationId,
    pub area: Rect,
    pub close: Rect,
    pub phase: NotificationPhase,
}

impl FlashSlot {
    /// Entering slots sit off-screen and take no clicks.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.phase != NotificationPhase::Entering && !self.area.is_empty()
    }
}

/// Stacks flashes down the top-right corner of `area`, oldest first.
#[must_use]
pub fn layout(area: Rect, queue: &NotificationQueue) -> Vec<FlashSlot> {
    let width = MAX_WIDTH.min(area.width);
    let text_width = width.saturating_sub(4).max(1);
    let mut y = area.y;
    let mut slots = Vec::new();

    for n in queue.items() {
        if y >= area.bottom() {
            break;
        }
        let text_len = n.text.chars().count() as u16;
        let lines = text_len.div_ceil(text_width).clamp(1, MAX_TEXT_LINES);
        let height = (lines + 2).min(area.bottom() - y);

        let x = match n.phase {
            NotificationPhase::Entering => area.right(),
            NotificationPhase::Shown => area.right() - width,
            NotificationPhase::Leaving => (area.right() - width).saturating_add(LEAVING_SHIFT),
        };
        let slot_area = Rect::new(x, y, width, height).intersection(area);
        let close = Rect::new(slot_area.right().saturating_sub(3), y, 1, 1).intersection(slot_area);

        slots.push(FlashSlot {
            id: n.id,
            area: slot_area,
            close,
            phase: n.phase,
        });
        y += height;
    }
    slots
}

pub struct FlashStack<'a> {
    pub queue: &'a NotificationQueue,
    pub theme: &'a Theme,
}

impl Widget for FlashStack<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let slots = layout(area, self.queue);
        for (slot, n) in slots.iter().zip(self.queue.items()) {
            if slot.area.is_empty() {
                continue;
            }
            let style = self.theme.flash(n.severity);
            Clear.render(slot.area, buf);
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(style)
                .style(style)
                .title(Line::from(vec![
                    Span::raw(" "),
                    Span::styled(n.severity.label(), style),
                    Span::raw(" "),
                ]));
            let inner = block.inner(slot.area);
            block.render(slot.area, buf);

            if !slot.close.is_empty() {
                buf.set_string(slot.close.x, slot.close.y, CLOSE_GLYPH, self.theme.flash_close);
            }

            Paragraph::new(n.text.as_str())
                .style(style)
                .wrap(Wrap { trim: true })
                .render(
                    Rect {
                        x: inner.x.saturating_add(1),
                        width: inner.width.saturating_sub(2),
                        ..inner
                    },
                    buf,
                );

            if n.phase == NotificationPhase::Leaving {
                dim_area(buf, slot.area);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Severity;

    #[test]
    fn test_slots_stack_top_right() {
        let mut queue = NotificationQueue::default();
        queue.push("Signed in", Severity::Success);
        queue.push("Something went wrong", Severity::Error);
        queue.settle();

        let area = Rect::new(0, 1, 80, 22);
        let slots = layout(area, &queue);
        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0].area, Rect::new(32, 1, 48, 3));
        assert_eq!(slots[1].area.y, 4);
        assert!(slots[0].area.contains(slots[0].close.as_position()));
        assert!(slots.iter().all(FlashSlot::is_interactive));
    }

    #[test]
    fn test_entering_slot_is_off_screen() {
        let mut queue = NotificationQueue::default();
        queue.push("New", Severity::Info);
        let slots = layout(Rect::new(0, 0, 80, 24), &queue);
        assert!(slots[0].area.is_empty());
        assert!(!slots[0].is_interactive());
    }

    #[test]
    fn test_long_text_grows_slot() {
        let mut queue = NotificationQueue::default();
        queue.push(&"x".repeat(100), Severity::Warning);
        queue.settle();
        let slots = layout(Rect::new(0, 0, 80, 24), &queue);
        assert_eq!(slots[0].area.height, 5);
    }

    #[test]
    fn test_render_shows_text_and_close() {
        let mut queue = NotificationQueue::default();
        queue.push("Area selected", Severity::Success);
        queue.settle();
        let area = Rect::new(0, 0, 60, 6);
        let mut buf = Buffer::empty(area);
        FlashStack {
            queue: &queue,
            theme: &Theme::default(),
        }
        .render(area, &mut buf);

        let rendered: String = (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n");
        assert!(rendered.contains("Area selected"));
        assert!(rendered.contains(CLOSE_GLYPH));
        assert!(rendered.contains("SUCCESS"));
    }
}
