pub mod flash;
pub mod footer;
pub mod form_controls;
pub mod header;
pub mod helpers;
pub mod suggestion_panel;
