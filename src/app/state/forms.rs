use super::input::AppTextArea;
use crate::domain::models::Direction;

pub const MSG_SELECT_AREA: &str = "Please select an area";
pub const MSG_ENTER_NAME: &str = "Please enter a name";
pub const MSG_NAME_NOT_FOUND: &str = "Name not found. Please select from the suggestions.";
pub const PROCESSING_LABEL: &str = "Processing...";

/// One error line per form. Hiding keeps the text until the next `show`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ErrorRegion {
    pub text: String,
    pub visible: bool,
}

impl ErrorRegion {
    pub fn show(&mut self, message: &str) {
        self.text = message.to_string();
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmitButton {
    pub label: String,
    pub original_label: Option<String>,
    pub direction: Option<Direction>,
    pub disabled: bool,
}

impl SubmitButton {
    #[must_use]
    pub fn new(label: &str, direction: Option<Direction>) -> Self {
        Self {
            label: label.to_string(),
            original_label: None,
            direction,
            disabled: false,
        }
    }

    pub fn start_processing(&mut self) {
        if self.original_label.is_none() {
            self.original_label = Some(self.label.clone());
        }
        self.disabled = true;
        self.label = PROCESSING_LABEL.to_string();
    }

    pub fn restore(&mut self) {
        self.disabled = false;
        if let Some(original) = &self.original_label {
            self.label.clone_from(original);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AreaForm {
    pub selected: Option<usize>,
    pub error: ErrorRegion,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EntryForm<'a> {
    pub text_area: AppTextArea<'a>,
    /// The hidden direction field; written when a button carrying one is used.
    pub direction: Option<Direction>,
    pub clicked: Option<usize>,
    pub buttons: Vec<SubmitButton>,
    pub error: ErrorRegion,
}

impl Default for EntryForm<'_> {
    fn default() -> Self {
        Self {
            text_area: AppTextArea::default(),
            direction: None,
            clicked: None,
            buttons: vec![
                SubmitButton::new("Sign in", Some(Direction::In)),
                SubmitButton::new("Sign out", Some(Direction::Out)),
            ],
            error: ErrorRegion::default(),
        }
    }
}
