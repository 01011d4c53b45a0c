//! Link formatting using Handlebars.
//!
//! Issue and bug link targets are configurable Handlebars formats, e.g.
//! `{{server}}/browse/{{key}}`. This module compiles them once and renders
//! markdown links from them.

mod error;
mod renderer;

pub use error::TemplateError;
pub use renderer::{create_handlebars_registry, LinkFormatter};

/// Formats a markdown link.
///
/// Format: "[{text}]({url})"
#[must_use]
pub fn markdown_link(text: &str, url: &str) -> String {
    format!("[{text}]({url})")
}
