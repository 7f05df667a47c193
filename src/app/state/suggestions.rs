use crate::domain::directory::NameDirectory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelVisibility {
    #[default]
    Hidden,
    Visible,
}

/// The autocomplete dropdown under the entry field.
///
/// `selected == None` means nothing is highlighted. The highlight is reset
/// whenever the match list changes or the panel hides.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SuggestionPanel {
    pub visibility: PanelVisibility,
    pub matches: Vec<String>,
    pub selected: Option<usize>,
}

impl SuggestionPanel {
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visibility == PanelVisibility::Visible
    }

    /// Recomputes matches for a new query. Shows the panel only when
    /// something matched.
    pub fn refresh(&mut self, query: &str, directory: &NameDirectory) {
        self.matches = directory.suggest(query);
        self.selected = None;
        self.visibility = if self.matches.is_empty() {
            PanelVisibility::Hidden
        } else {
            PanelVisibility::Visible
        };
    }

    pub fn hide(&mut self) {
        self.visibility = PanelVisibility::Hidden;
        self.matches.clear();
        self.selected = None;
    }

    pub fn select_next(&mut self) {
        if self.matches.is_empty() {
            return;
        }
        let last = self.matches.len() - 1;
        self.selected = Some(match self.selected {
            Some(i) => (i + 1).min(last),
            None => 0,
        });
    }

    pub fn select_prev(&mut self) {
        self.selected = match self.selected {
            Some(0) | None => None,
            Some(i) => Some(i - 1),
        };
    }

    #[must_use]
    pub fn highlighted(&self) -> Option<&str> {
        self.selected.and_then(|i| self.get(i))
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.matches.get(index).map(String::as_str)
    }
}
