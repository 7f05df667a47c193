use crate::domain::models::Severity;
use ratatui::style::{Modifier, Style};
use serde::{Deserialize, Serialize};

pub mod catppuccin;
pub mod nord;
pub mod palette;

pub use palette::{dim_color, Palette};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub border_focus: Style,

    pub header: Style,
    pub header_logo: Style,
    pub header_item: Style,

    pub title: Style,
    pub label: Style,
    pub placeholder: Style,

    pub field: Style,
    pub field_focus: Style,

    pub list_item: Style,
    pub list_selected: Style,
    pub suggestion: Style,
    pub suggestion_selected: Style,

    pub error_text: Style,

    pub button: Style,
    pub button_focus: Style,
    pub button_disabled: Style,

    pub flash_info: Style,
    pub flash_success: Style,
    pub flash_warning: Style,
    pub flash_error: Style,
    pub flash_close: Style,

    pub footer_segment_key: Style,
    pub footer_segment_val: Style,
    pub footer: Style,

    pub dimmed: Style,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaletteType {
    #[default]
    Nord,
    CatppuccinMocha,
}

impl Theme {
    #[must_use]
    pub fn from_palette_type(t: PaletteType) -> Self {
        match t {
            PaletteType::Nord => Self::from_palette(&nord::NORD),
            PaletteType::CatppuccinMocha => Self::from_palette(&catppuccin::CATPPUCCIN_MOCHA),
        }
    }

    #[must_use]
    pub fn from_palette(p: &Palette) -> Self {
        let flash = |fg| Style::default().fg(fg).bg(dim_color(fg, 0.25));
        Self {
            border: Style::default().fg(p.surface2),
            border_focus: Style::default().fg(p.blue),

            header: Style::default().bg(p.mantle).fg(p.text),
            header_logo: Style::default()
                .bg(p.blue)
                .fg(p.base)
                .add_modifier(Modifier::BOLD),
            header_item: Style::default().bg(p.mantle).fg(p.subtext0),

            title: Style::default().fg(p.mauve).add_modifier(Modifier::BOLD),
            label: Style::default().fg(p.subtext0),
            placeholder: Style::default().fg(p.overlay0).add_modifier(Modifier::ITALIC),

            field: Style::default().fg(p.text),
            field_focus: Style::default().fg(p.text).bg(p.surface0),

            list_item: Style::default().fg(p.text),
            list_selected: Style::default()
                .bg(p.surface1)
                .fg(p.sapphire)
                .add_modifier(Modifier::BOLD),
            suggestion: Style::default().fg(p.text).bg(p.mantle),
            suggestion_selected: Style::default()
                .fg(p.base)
                .bg(p.blue)
                .add_modifier(Modifier::BOLD),

            error_text: Style::default().fg(p.red).add_modifier(Modifier::BOLD),

            button: Style::default().fg(p.text).bg(p.surface1),
            button_focus: Style::default()
                .fg(p.base)
                .bg(p.green)
                .add_modifier(Modifier::BOLD),
            button_disabled: Style::default()
                .fg(p.overlay0)
                .bg(p.surface0)
                .add_modifier(Modifier::DIM),

            flash_info: flash(p.blue),
            flash_success: flash(p.green),
            flash_warning: flash(p.yellow),
            flash_error: flash(p.red),
            flash_close: Style::default().fg(p.peach),

            footer_segment_key: Style::default().fg(p.base).bg(p.surface2),
            footer_segment_val: Style::default().fg(p.subtext0).bg(p.mantle),
            footer: Style::default().bg(p.mantle),

            dimmed: Style::default().add_modifier(Modifier::DIM),
        }
    }

    #[must_use]
    pub fn flash(&self, severity: Severity) -> Style {
        match severity {
            Severity::Info => self.flash_info,
            Severity::Success => self.flash_success,
            Severity::Warning => self.flash_warning,
            Severity::Error => self.flash_error,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette_type(PaletteType::default())
    }
}
