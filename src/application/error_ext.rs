//! Error conversion helpers for collaborator calls
//!
//! Provides an extension trait for attaching context to collaborator failures.

use crate::application::{ApplicationError, ApplicationResult};
use crate::infrastructure::traits::CollaboratorError;

/// Extension trait for converting collaborator results to `ApplicationResult`.
pub trait CollaboratorResultExt<T> {
    /// Wrap a collaborator failure with the action that triggered it.
    ///
    /// # Example
    /// ```ignore
    /// self.directory
    ///     .headquartered_guilds()
    ///     .with_action("load headquartered guilds")?;
    /// ```
    fn with_action(self, action: &str) -> ApplicationResult<T>;
}

impl<T> CollaboratorResultExt<T> for Result<T, CollaboratorError> {
    fn with_action(self, action: &str) -> ApplicationResult<T> {
        self.map_err(|source| ApplicationError::OperationFailed {
            context: action.to_string(),
            source,
        })
    }
}
