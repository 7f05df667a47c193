use super::action::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct KeyConfig {
    /// Extra global bindings: key spec ("ctrl+q", "f2") -> action name.
    pub custom: HashMap<String, String>,
}

/// Bindings that apply whatever control has focus.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyMap {
    pub global: HashMap<KeyEvent, Action>,
}

impl KeyMap {
    pub fn from_config(config: &KeyConfig) -> Self {
        let mut global = HashMap::new();

        global.insert(key(KeyCode::Tab), Action::FocusNext);
        global.insert(key(KeyCode::BackTab), Action::FocusPrev);
        global.insert(
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            Action::FocusPrev,
        );
        global.insert(ctrl('c'), Action::Quit);
        global.insert(ctrl('q'), Action::Quit);

        for (spec, name) in &config.custom {
            match (parse_key(spec), parse_action(name)) {
                (Some(event), Some(action)) => {
                    global.insert(event, action);
                }
                _ => tracing::warn!(key = %spec, action = %name, "Ignoring invalid key binding"),
            }
        }

        Self { global }
    }

    pub fn get_action(&self, event: KeyEvent) -> Option<Action> {
        // Terminals differ in the kind/state bits they report
        let normalized = KeyEvent::new(event.code, event.modifiers);
        self.global.get(&normalized).cloned()
    }
}

/// Parses specs like `"ctrl+q"`, `"f10"`, `"shift+tab"` or `"x"`.
pub fn parse_key(spec: &str) -> Option<KeyEvent> {
    let spec = spec.trim().to_lowercase();
    let mut parts: Vec<&str> = spec.split('+').map(str::trim).collect();
    let code_part = parts.pop()?;
    let mut modifiers = KeyModifiers::empty();
    for part in parts {
        match part {
            "ctrl" | "control" => modifiers.insert(KeyModifiers::CONTROL),
            "alt" => modifiers.insert(KeyModifiers::ALT),
            "shift" => modifiers.insert(KeyModifiers::SHIFT),
            _ => return None,
        }
    }

    let code = match code_part {
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "enter" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "space" => KeyCode::Char(' '),
        f if f.len() > 1 && f.starts_with('f') => KeyCode::F(f[1..].parse().ok()?),
        c => {
            let mut chars = c.chars();
            let ch = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            KeyCode::Char(ch)
        }
    };
    Some(KeyEvent::new(code, modifiers))
}

pub fn parse_action(name: &str) -> Option<Action> {
    match name.trim() {
        "quit" => Some(Action::Quit),
        "focus-next" => Some(Action::FocusNext),
        "focus-prev" => Some(Action::FocusPrev),
        "submit-area" => Some(Action::SubmitArea),
        "sign-in" => Some(Action::SubmitEntry(0)),
        "sign-out" => Some(Action::SubmitEntry(1)),
        _ => None,
    }
}

fn key(code: impl Into<KeyCode>) -> KeyEvent {
    KeyEvent::new(code.into(), KeyModifiers::empty())
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}
