use crate::application::dto::{RemovalRequest, RemovalResponse};
use crate::shared::Result;

/// ExtensionRemovalPort - Inbound port for the remove-extensions use case
///
/// This port defines the interface that external adapters (CLI, API, etc.)
/// use to trigger extension removal.
pub trait ExtensionRemovalPort {
    /// Removes the dependencies selected by the request's queries
    ///
    /// # Arguments
    /// * `request` - Project path, raw queries and options
    ///
    /// # Returns
    /// A response describing what was removed, what was not found and
    /// whether the descriptor changed
    ///
    /// # Errors
    /// Returns an error only when the build descriptor cannot be read or
    /// written. Queries that match nothing are reported in the response.
    fn remove_extensions(&self, request: RemovalRequest) -> Result<RemovalResponse>;
}
