pub mod directory;
pub mod models;
pub mod name_filter;
pub mod sink;
