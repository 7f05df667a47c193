use super::name_filter;
use std::collections::HashMap;

/// Result of checking a trimmed entry against the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Membership {
    Name,
    /// A card number, resolved to the name it belongs to.
    Card(String),
    Unknown,
    /// No name list was supplied, so nothing can be checked.
    Unchecked,
}

impl Membership {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        !matches!(self, Membership::Unknown)
    }

    /// The person an accepted entry stands for.
    #[must_use]
    pub fn resolve<'a>(&'a self, entry: &'a str) -> Option<&'a str> {
        match self {
            Membership::Card(name) => Some(name),
            Membership::Name | Membership::Unchecked => Some(entry),
            Membership::Unknown => None,
        }
    }
}

/// Turns an exported "Last, First" into "First Last".
#[must_use]
pub fn normalize_name(raw: &str) -> String {
    match raw.split_once(',') {
        Some((last, first)) => format!("{} {}", first.trim(), last.trim())
            .trim()
            .to_string(),
        None => raw.trim().to_string(),
    }
}

/// The valid names and card numbers for this session. Immutable once built.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NameDirectory {
    names: Option<Vec<String>>,
    cards: HashMap<String, String>,
}

impl NameDirectory {
    /// `cards` pairs a card number with the name it belongs to.
    #[must_use]
    pub fn new(names: Option<Vec<String>>, cards: Vec<(String, String)>) -> Self {
        Self {
            names,
            cards: cards
                .into_iter()
                .map(|(card, name)| (card.trim().to_lowercase(), normalize_name(&name)))
                .filter(|(card, name)| !card.is_empty() && !name.is_empty())
                .collect(),
        }
    }

    #[must_use]
    pub fn with_names(self, names: Vec<String>) -> Self {
        Self {
            names: Some(names),
            ..self
        }
    }

    #[must_use]
    pub fn names(&self) -> Option<&[String]> {
        self.names.as_deref()
    }

    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Autocomplete is only wired when a name list exists.
    #[must_use]
    pub fn has_names(&self) -> bool {
        self.names.is_some()
    }

    #[must_use]
    pub fn suggest(&self, query: &str) -> Vec<String> {
        match &self.names {
            Some(names) => name_filter::filter(query, names),
            None => Vec::new(),
        }
    }

    /// Case-insensitive card lookup first, then an exact name match.
    #[must_use]
    pub fn check(&self, entry: &str) -> Membership {
        if let Some(name) = self.cards.get(&entry.to_lowercase()) {
            return Membership::Card(name.clone());
        }
        match &self.names {
            None => Membership::Unchecked,
            Some(names) if names.iter().any(|n| n == entry) => Membership::Name,
            Some(_) => Membership::Unknown,
        }
    }
}
