//! Delivery error types.

use thiserror::Error;

use crate::package::PackageError;
use crate::repositories::RepositoryError;

/// Errors returned by the delivery use cases.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// A referenced id did not resolve.
    #[error("Resource not found: {resource}")]
    ResourceNotFound { resource: &'static str },

    /// A package business rule was violated.
    #[error("Package error: {0}")]
    Package(#[from] PackageError),

    /// An error occurred in a repository.
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

impl DeliveryError {
    pub(crate) fn not_found(resource: &'static str) -> Self {
        DeliveryError::ResourceNotFound { resource }
    }
}
