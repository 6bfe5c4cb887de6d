use common::UniqueEntityId;
use delivery::RepositoryError;
use thiserror::Error;

/// Errors that can occur while sending notifications.
#[derive(Debug, Error)]
pub enum NotificationError {
    /// A notification with this id is already stored.
    #[error("Notification already exists: {id}")]
    AlreadyExists { id: UniqueEntityId },

    /// Saving a notification that was never created.
    #[error("Notification not found: {id}")]
    NotFound { id: UniqueEntityId },

    /// Looking up the package behind an event failed.
    #[error("Package lookup failed: {0}")]
    PackageLookup(#[from] RepositoryError),
}
