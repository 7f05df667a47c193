use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;
use std::ops::{Deref, DerefMut};
use tui_textarea::{CursorMove, TextArea};

const PLACEHOLDER: &str = "Start typing your name...";

/// Single-line text field backed by `tui-textarea`.
pub struct AppTextArea<'a>(pub TextArea<'a>);

impl Default for AppTextArea<'_> {
    fn default() -> Self {
        let mut area = TextArea::default();
        area.set_cursor_line_style(Style::default());
        area.set_placeholder_text(PLACEHOLDER);
        Self(area)
    }
}

impl AppTextArea<'_> {
    #[must_use]
    pub fn value(&self) -> String {
        self.0.lines().concat()
    }

    /// Overwrites the text and parks the cursor at the end.
    pub fn set_value(&mut self, value: &str) {
        let mut area = Self::default();
        area.0.insert_str(value);
        *self = area;
    }

    /// Applies a key press. Returns whether the text changed.
    pub fn edit(&mut self, key: crossterm::event::KeyEvent) -> bool {
        let before = self.value();
        self.0.input(key);
        if self.0.lines().len() > 1 {
            // Line breaks are never part of a name
            let (row, col) = self.0.cursor();
            let offset: usize = self.0.lines()[..row]
                .iter()
                .map(|l| l.chars().count())
                .sum::<usize>()
                + col;
            let joined = self.value();
            self.set_value(&joined);
            self.0.move_cursor(CursorMove::Jump(0, offset as u16));
        }
        self.value() != before
    }
}

impl Clone for AppTextArea<'_> {
    fn clone(&self) -> Self {
        let mut area = TextArea::new(self.0.lines().to_vec());
        area.set_cursor_line_style(Style::default());
        area.set_placeholder_text(PLACEHOLDER);
        let (row, col) = self.0.cursor();
        area.move_cursor(CursorMove::Jump(row as u16, col as u16));
        Self(area)
    }
}

impl std::fmt::Debug for AppTextArea<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppTextArea")
            .field("value", &self.value())
            .field("cursor", &self.0.cursor())
            .finish()
    }
}

impl PartialEq for AppTextArea<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.0.lines() == other.0.lines() && self.0.cursor() == other.0.cursor()
    }
}

impl<'a> Deref for AppTextArea<'a> {
    type Target = TextArea<'a>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for AppTextArea<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Widget for &AppTextArea<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self.0, area, buf);
    }
}
