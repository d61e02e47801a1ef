use crate::application::dto::RemovalResponse;
use crate::shared::Result;

/// ReportFormatter port for rendering a removal response
///
/// Implementations turn the structured outcome into text for the user or
/// for other tools (plain text, JSON).
pub trait ReportFormatter {
    /// Renders the response
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, response: &RemovalResponse) -> Result<String>;
}
