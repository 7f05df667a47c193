use crate::app::keymap::KeyConfig;
use crate::domain::directory::{normalize_name, NameDirectory};
use crate::domain::models::Severity;
use crate::theme::PaletteType;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    pub notification_ttl_ms: u64,
    pub notification_exit_ms: u64,
    pub blur_grace_ms: u64,
    pub submit_fallback_ms: u64,
    pub initial_focus_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            notification_ttl_ms: 5000,
            notification_exit_ms: 300,
            blur_grace_ms: 150,
            submit_fallback_ms: 3000,
            initial_focus_ms: 100,
        }
    }
}

impl Timings {
    #[must_use]
    pub fn notification_ttl(&self) -> Duration {
        Duration::from_millis(self.notification_ttl_ms)
    }

    #[must_use]
    pub fn notification_exit(&self) -> Duration {
        Duration::from_millis(self.notification_exit_ms)
    }

    #[must_use]
    pub fn blur_grace(&self) -> Duration {
        Duration::from_millis(self.blur_grace_ms)
    }

    #[must_use]
    pub fn submit_fallback(&self) -> Duration {
        Duration::from_millis(self.submit_fallback_ms)
    }

    #[must_use]
    pub fn initial_focus(&self) -> Duration {
        Duration::from_millis(self.initial_focus_ms)
    }
}

// `names`/`cards` are read as raw values so a malformed list or table degrades
// instead of failing the whole file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawDirectory {
    names: Option<toml::Value>,
    cards: Option<toml::Value>,
}

// Severity is free text; unknown values show as info.
#[derive(Debug, Deserialize)]
struct RawNotice {
    text: String,
    #[serde(default)]
    severity: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
    directory: RawDirectory,
    areas: Vec<String>,
    notices: Vec<RawNotice>,
    timings: Timings,
    theme: PaletteType,
    keys: KeyConfig,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub directory: NameDirectory,
    pub areas: Vec<String>,
    pub timings: Timings,
    pub theme: PaletteType,
    pub keys: KeyConfig,
    /// Messages flashed once the first page is up.
    pub notices: Vec<(String, Severity)>,
    /// Problems found while loading, shown as warning flashes on startup.
    pub warnings: Vec<String>,
}

impl Config {
    /// Loads `path` if given, otherwise `~/.config/checkin/config.toml` when it
    /// exists, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(p) => Some(p.to_path_buf()),
            None => default_config_path().filter(|p| p.exists()),
        };

        match path {
            Some(path) => {
                let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
                    path: path.clone(),
                    source,
                })?;
                tracing::debug!(path = %path.display(), "Loading config");
                Self::from_toml(&content).map_err(|source| ConfigError::Parse { path, source })
            }
            None => Ok(Self::default()),
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        let raw: RawConfig = toml::from_str(content)?;
        let mut warnings = Vec::new();

        let names = raw
            .directory
            .names
            .and_then(|v| string_list("names", v, &mut warnings));
        let cards = raw
            .directory
            .cards
            .map(|v| card_table(v, &mut warnings))
            .unwrap_or_default();

        Ok(Self {
            directory: NameDirectory::new(names, cards),
            areas: raw
                .areas
                .into_iter()
                .map(|a| a.trim().to_string())
                .filter(|a| !a.is_empty())
                .collect(),
            timings: raw.timings,
            theme: raw.theme,
            keys: raw.keys,
            notices: raw
                .notices
                .into_iter()
                .filter(|n| !n.text.trim().is_empty())
                .map(|n| (n.text, Severity::parse_lenient(&n.severity)))
                .collect(),
            warnings,
        })
    }

    /// Replaces the name list with the contents of a one-name-per-line file.
    /// "Last, First" lines are read as "First Last".
    pub fn with_names_file(mut self, path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let names = content
            .lines()
            .map(str::trim)
            .map(normalize_name)
            .filter(|n| !n.is_empty())
            .collect();
        self.directory = self.directory.with_names(names);
        Ok(self)
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("checkin");
        path.push("config.toml");
        path
    })
}

fn string_list(field: &str, value: toml::Value, warnings: &mut Vec<String>) -> Option<Vec<String>> {
    let toml::Value::Array(items) = value else {
        tracing::warn!(field, "Expected a list; feature disabled");
        warnings.push(format!("Directory {field} is not a list; {field} are disabled"));
        return None;
    };

    let total = items.len();
    let list: Vec<String> = items
        .into_iter()
        .filter_map(|item| match item {
            toml::Value::String(s) => Some(s),
            _ => None,
        })
        .collect();

    if list.len() != total {
        tracing::warn!(field, skipped = total - list.len(), "Skipped non-text entries");
        warnings.push(format!(
            "Skipped {} non-text {field} entries",
            total - list.len()
        ));
    }
    Some(list)
}

// Card number -> holder's name.
fn card_table(value: toml::Value, warnings: &mut Vec<String>) -> Vec<(String, String)> {
    let toml::Value::Table(table) = value else {
        tracing::warn!(field = "cards", "Expected a table; cards disabled");
        warnings.push("Directory cards is not a table; cards are disabled".to_string());
        return Vec::new();
    };

    let total = table.len();
    let cards: Vec<(String, String)> = table
        .into_iter()
        .filter_map(|(card, name)| match name {
            toml::Value::String(name) => Some((card, name)),
            _ => None,
        })
        .collect();

    if cards.len() != total {
        tracing::warn!(field = "cards", skipped = total - cards.len(), "Skipped non-text entries");
        warnings.push(format!("Skipped {} non-text cards entries", total - cards.len()));
    }
    cards
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::directory::Membership;
    use std::io::Write;

    #[test]
    fn test_defaults_without_file() {
        let config = Config::from_toml("").unwrap();
        assert!(!config.directory.has_names());
        assert!(config.areas.is_empty());
        assert_eq!(config.timings, Timings::default());
        assert_eq!(config.timings.notification_ttl(), Duration::from_millis(5000));
        assert!(config.warnings.is_empty());
    }

    #[test]
    fn test_full_config() {
        let config = Config::from_toml(
            r#"
            areas = ["Library", " Gym ", ""]
            theme = "catppuccin-mocha"

            [directory]
            names = ["Ada Lovelace", "Alan Turing"]

            [directory.cards]
            "C-1" = "Turing, Alan"

            [timings]
            blur_grace_ms = 200
            "#,
        )
        .unwrap();

        assert_eq!(config.areas, vec!["Library".to_string(), "Gym".to_string()]);
        assert_eq!(config.theme, PaletteType::CatppuccinMocha);
        assert_eq!(config.timings.blur_grace_ms, 200);
        assert_eq!(config.timings.submit_fallback_ms, 3000);
        assert_eq!(config.directory.check("Alan Turing"), Membership::Name);
        assert_eq!(
            config.directory.check("c-1"),
            Membership::Card("Alan Turing".to_string())
        );
    }

    #[test]
    fn test_notices_parse_severity_leniently() {
        let config = Config::from_toml(
            r#"
            [[notices]]
            text = "Library closes at 18:00"
            severity = "warning"

            [[notices]]
            text = "Welcome"
            severity = "shiny"

            [[notices]]
            text = "  "
            "#,
        )
        .unwrap();
        assert_eq!(
            config.notices,
            vec![
                ("Library closes at 18:00".to_string(), Severity::Warning),
                ("Welcome".to_string(), Severity::Info),
            ]
        );
    }

    #[test]
    fn test_non_list_names_degrade_with_warning() {
        let config = Config::from_toml(
            r#"
            [directory]
            names = "Ada Lovelace"
            "#,
        )
        .unwrap();
        assert!(!config.directory.has_names());
        assert_eq!(config.warnings.len(), 1);
        assert!(config.warnings[0].contains("names"));
    }

    #[test]
    fn test_non_text_entries_are_skipped() {
        let config = Config::from_toml(
            r#"
            [directory]
            names = ["Ada Lovelace", 42]
            "#,
        )
        .unwrap();
        assert_eq!(
            config.directory.names(),
            Some(&["Ada Lovelace".to_string()][..])
        );
        assert_eq!(config.warnings.len(), 1);
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "areas = [").unwrap();
        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_names_file_overrides_list() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Grace Hopper\n\n  Barbara Liskov  ").unwrap();
        let config = Config::from_toml("[directory]\nnames = [\"Ada\"]\n")
            .unwrap()
            .with_names_file(file.path())
            .unwrap();
        assert_eq!(
            config.directory.names(),
            Some(&["Grace Hopper".to_string(), "Barbara Liskov".to_string()][..])
        );
    }

    #[test]
    fn test_names_file_reorders_last_first() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Lovelace, Ada\nHopper,Grace").unwrap();
        let config = Config::default().with_names_file(file.path()).unwrap();
        assert_eq!(
            config.directory.names(),
            Some(&["Ada Lovelace".to_string(), "Grace Hopper".to_string()][..])
        );
        assert_eq!(config.directory.check("Ada Lovelace"), Membership::Name);
    }

    #[test]
    fn test_card_list_instead_of_table_degrades() {
        let config = Config::from_toml(
            r#"
            [directory]
            names = ["Ada Lovelace"]
            cards = ["C-1"]
            "#,
        )
        .unwrap();
        assert_eq!(config.directory.card_count(), 0);
        assert_eq!(config.warnings.len(), 1);
        assert!(config.warnings[0].contains("cards"));
    }
}
