//! Reporter module for output formatting

pub mod console;
pub mod html;
pub mod json;

pub use console::ConsoleReporter;
pub use html::{export_builtin_templates, HtmlReporter};
pub use json::JsonReporter;
