//! Package aggregate and related types.

mod aggregate;
mod attachment;
mod code;
mod events;
mod history;
mod history_list;
mod status;

pub use aggregate::{NewPackage, Package};
pub use attachment::PackageAttachment;
pub use code::PackageCode;
pub use events::{PackageEvent, PackageEventData, PackageEventKind};
pub use history::{NewPackageHistory, PackageHistory};
pub use history_list::PackageHistoryList;
pub use status::PackageStatus;

use thiserror::Error;

/// Errors that can occur during package operations.
#[derive(Debug, Error)]
pub enum PackageError {
    /// Text does not name a known package status.
    #[error("Invalid package status: '{value}'")]
    UnknownStatus { value: String },

    /// The transition table does not allow this move.
    #[error("Invalid package status transition: cannot move from {from} to {to}")]
    InvalidStatusTransition {
        from: PackageStatus,
        to: PackageStatus,
    },

    /// Malformed or future-dated package code.
    #[error("Invalid package code: '{code}'")]
    InvalidPackageCode { code: String },

    /// A package cannot be delivered without proof of delivery.
    #[error("Package cannot be delivered without an attachment")]
    MissingAttachment,
}

impl PackageError {
    /// Returns true for errors about the package status itself.
    pub fn is_invalid_status(&self) -> bool {
        matches!(
            self,
            PackageError::UnknownStatus { .. } | PackageError::InvalidStatusTransition { .. }
        )
    }
}
