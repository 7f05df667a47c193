pub mod bootstrap;
pub mod forms;
pub mod navigation;
pub mod notifications;
pub mod suggestions;
