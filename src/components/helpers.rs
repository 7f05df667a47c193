use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
};

pub fn dim_area(buf: &mut Buffer, area: Rect) {
    let area = area.intersection(buf.area);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let cell = &mut buf[(x, y)];
            cell.set_style(cell.style().add_modifier(Modifier::DIM));
        }
    }
}

/// A horizontally centered box of `width` columns (clamped to `r`) and a
/// fixed `height`, vertically centered in `r`.
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(r.height.saturating_sub(height) / 2),
            Constraint::Length(height.min(r.height)),
            Constraint::Min(0),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(r.width.saturating_sub(width) / 2),
            Constraint::Length(width.min(r.width)),
            Constraint::Min(0),
        ])
        .split(rows[1])[1]
}

pub fn draw_drop_shadow(buf: &mut Buffer, area: Rect, terminal_area: Rect) {
    let shadow_area = Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width,
        height: area.height,
    }
    .intersection(terminal_area)
    .intersection(buf.area);

    for y in shadow_area.top()..shadow_area.bottom() {
        for x in shadow_area.left()..shadow_area.right() {
            let cell = &mut buf[(x, y)];
            cell.set_style(Style::default().bg(Color::Black));
            cell.set_symbol(" ");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fixed_clamps_to_parent() {
        let parent = Rect::new(0, 0, 40, 10);
        let r = centered_rect_fixed(60, 6, parent);
        assert_eq!(r.width, 40);
        assert_eq!(r.height, 6);
        assert_eq!(r.y, 2);

        let r = centered_rect_fixed(20, 4, parent);
        assert_eq!(r, Rect::new(10, 3, 20, 4));
    }

    #[test]
    fn test_shadow_stays_inside_terminal() {
        let terminal = Rect::new(0, 0, 10, 5);
        let mut buf = Buffer::empty(terminal);
        draw_drop_shadow(&mut buf, Rect::new(6, 2, 6, 4), terminal);
        assert_eq!(buf[(9, 4)].style().bg, Some(Color::Black));
        assert_ne!(buf[(6, 2)].style().bg, Some(Color::Black));
    }
}
