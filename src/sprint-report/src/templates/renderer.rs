//! Link template renderer.

use handlebars::{no_escape, Handlebars};
use serde_json::json;

const BROWSE_TEMPLATE: &str = "browse-url";
const BUG_TEMPLATE: &str = "bug-url";

/// Creates a configured Handlebars registry.
///
/// The registry is configured with:
/// - No HTML escaping (link targets are emitted verbatim)
/// - Strict mode (catches misspelled variables)
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();

    // Disable HTML escaping for markdown output
    hbs.register_escape_fn(no_escape);

    // Enable strict mode to catch missing variables
    hbs.set_strict_mode(true);

    hbs
}

/// Builds link targets for issues and embedded bug references.
pub struct LinkFormatter {
    handlebars: Handlebars<'static>,
    server: String,
}

impl LinkFormatter {
    /// Compiles the two link formats for `server`.
    ///
    /// # Arguments
    ///
    /// * `server` - Issue tracker base URL; a trailing slash is dropped
    /// * `browse_url_format` - Issue link format, receives `server` and `key`
    /// * `bug_url_format` - Bug link format, receives `id`
    ///
    /// # Errors
    ///
    /// Returns an error if either format is not a valid template.
    pub fn new(
        server: &str,
        browse_url_format: &str,
        bug_url_format: &str,
    ) -> Result<Self, super::TemplateError> {
        let mut handlebars = create_handlebars_registry();
        handlebars.register_template_string(BROWSE_TEMPLATE, browse_url_format)?;
        handlebars.register_template_string(BUG_TEMPLATE, bug_url_format)?;

        Ok(Self {
            handlebars,
            server: server.trim_end_matches('/').to_string(),
        })
    }

    /// Renders the browse URL of an issue.
    ///
    /// # Errors
    ///
    /// Returns an error if the format references an unknown variable.
    pub fn issue_url(&self, key: &str) -> Result<String, super::TemplateError> {
        let data = json!({ "server": self.server, "key": key });
        Ok(self.handlebars.render(BROWSE_TEMPLATE, &data)?)
    }

    /// Renders the bug tracker URL for a bug identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the format references an unknown variable.
    pub fn bug_url(&self, id: &str) -> Result<String, super::TemplateError> {
        let data = json!({ "id": id });
        Ok(self.handlebars.render(BUG_TEMPLATE, &data)?)
    }
}
