use super::keymap::{KeyConfig, KeyMap};
use crate::config::{Config, Timings};
use crate::domain::directory::NameDirectory;
use crate::domain::models::{Page, Severity};
use crate::theme::Theme;
use std::sync::Arc;

pub mod forms;
pub mod input;
pub mod notifications;
pub mod suggestions;

// Re-exports
pub use forms::{AreaForm, EntryForm, ErrorRegion, SubmitButton};
pub use input::AppTextArea;
pub use notifications::{Notification, NotificationPhase, NotificationQueue};
pub use suggestions::{PanelVisibility, SuggestionPanel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    None,
    AreaSelect, // The area list
    AreaSubmit, // "Continue"
    Entry,      // The name field
    Button(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState<'a> {
    // --- Lifecycle ---
    pub should_quit: bool,
    pub page: Page,
    pub bootstrapped: bool,
    pub focus: Focus,

    // --- Session data (read-only after startup) ---
    pub directory: Arc<NameDirectory>,
    pub areas: Vec<String>,
    pub active_area: Option<String>,

    // --- Forms ---
    pub area_form: AreaForm,
    pub entry_form: EntryForm<'a>,
    pub suggestions: SuggestionPanel,

    // --- Flash messages ---
    pub notifications: NotificationQueue,
    pub pending_flashes: Vec<(String, Severity)>, // Shown once the page is wired

    // --- Config ---
    pub timings: Timings,
    pub keymap: Arc<KeyMap>,
    pub theme: Theme,
}

impl AppState<'_> {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            directory: Arc::new(config.directory.clone()),
            areas: config.areas.clone(),
            timings: config.timings,
            keymap: Arc::new(KeyMap::from_config(&config.keys)),
            theme: Theme::from_palette_type(config.theme),
            pending_flashes: config
                .warnings
                .iter()
                .map(|w| (w.clone(), Severity::Warning))
                .chain(config.notices.iter().cloned())
                .collect(),
            ..Default::default()
        }
    }

    /// Starts directly on the sign-in page when `area` is a known area.
    pub fn preselect_area(&mut self, area: &str) -> bool {
        if self.areas.iter().any(|a| a == area) {
            self.active_area = Some(area.to_string());
            self.page = Page::SignIn;
            true
        } else {
            self.pending_flashes.push((
                format!("Invalid area '{area}'. Please select a valid area."),
                Severity::Error,
            ));
            false
        }
    }

    #[must_use]
    pub fn has_entry_field(&self) -> bool {
        self.page == Page::SignIn
    }

    /// Focusable controls of the current page, in tab order.
    #[must_use]
    pub fn focus_order(&self) -> Vec<Focus> {
        match self.page {
            Page::AreaSelect => vec![Focus::AreaSelect, Focus::AreaSubmit],
            Page::SignIn => std::iter::once(Focus::Entry)
                .chain((0..self.entry_form.buttons.len()).map(Focus::Button))
                .collect(),
        }
    }

    #[must_use]
    pub fn selected_area(&self) -> Option<&str> {
        self.area_form
            .selected
            .and_then(|i| self.areas.get(i))
            .map(String::as_str)
    }
}

impl Default for AppState<'_> {
    fn default() -> Self {
        Self {
            should_quit: false,
            page: Page::AreaSelect,
            bootstrapped: false,
            focus: Focus::None,
            directory: Arc::new(NameDirectory::default()),
            areas: Vec::new(),
            active_area: None,
            area_form: AreaForm::default(),
            entry_form: EntryForm::default(),
            suggestions: SuggestionPanel::default(),
            notifications: NotificationQueue::default(),
            pending_flashes: Vec::new(),
            timings: Timings::default(),
            keymap: Arc::new(KeyMap::from_config(&KeyConfig::default())),
            theme: Theme::default(),
        }
    }
}
