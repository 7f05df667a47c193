use crate::app::command::{Command, TaskKey};
use crate::app::state::Focus;
use crate::domain::models::{NotificationId, Severity, Submission};

#[derive(Debug, Clone, PartialEq)]
pub enum UpdateResult {
    Handled(Vec<Command>),
    NotHandled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,
    Ready, // Page drawn, wire features up

    // --- Focus ---
    FocusNext,
    FocusPrev,
    FocusField(Focus),

    // --- Entry field & suggestions ---
    EntryInput(crossterm::event::KeyEvent), // Edit the entry text
    SuggestionNext,                         // ArrowDown
    SuggestionPrev,                         // ArrowUp
    SuggestionAccept,                       // Enter on the highlighted row
    SuggestionDismiss,                      // Escape
    SuggestionClicked(usize),               // Pointer pick

    // --- Area form ---
    AreaNext,
    AreaPrev,
    AreaPick(usize),
    SubmitArea,

    // --- Entry form ---
    SubmitEntry(usize), // Index of the activated submit button

    // --- Flash messages ---
    ShowFlash(String, Severity),
    DismissFlash(NotificationId),

    // --- Async Results ---
    Timer(TaskKey),
    SubmissionAccepted(Submission, String),
    SubmissionRejected(Submission, String),
}
