use chrono::{DateTime, Local};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NotificationId(pub u64);

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which way a person is moving through the check-in point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    In,
    Out,
}

impl Direction {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::In => "in",
            Direction::Out => "out",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    /// Lenient parse: anything unrecognised is shown as `Info`.
    #[must_use]
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "success" => Severity::Success,
            "warning" => Severity::Warning,
            "error" => Severity::Error,
            _ => Severity::Info,
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Success => "SUCCESS",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    AreaSelect,
    SignIn,
}

/// What leaves the interaction layer once a form passes validation.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Area {
        area: String,
    },
    Entry {
        name: String,
        raw_input: String,
        area: Option<String>,
        direction: Direction,
        submitted_at: DateTime<Local>,
    },
}

impl Submission {
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Submission::Area { area } => format!("area {area}"),
            Submission::Entry {
                name,
                direction,
                area,
                ..
            } => format!(
                "{name} {direction} at {}",
                area.as_deref().unwrap_or("(no area)")
            ),
        }
    }
}
