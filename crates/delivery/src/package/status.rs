//! Package status state machine.

use serde::{Deserialize, Serialize};

use super::PackageError;

/// The state of a package in its delivery lifecycle.
///
/// State transitions:
/// ```text
/// Pending ─► AwaitingPickup ─► PickedUp ─► AtDistributionCenter ◄─► InTransit
///                                                                      │
///                      Returned ◄─ FailedDelivery ◄─► OutForDelivery ◄─┘
///                                                          │
///                                                          └─► Delivered
///
/// every state before Delivered except FailedDelivery ──► Canceled
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PackageStatus {
    /// Registered, not yet handed to a delivery person.
    #[default]
    Pending,

    /// A delivery person was assigned and will collect the package.
    AwaitingPickup,

    PickedUp,

    AtDistributionCenter,

    InTransit,

    OutForDelivery,

    /// Handed to the recipient with proof attached (terminal state).
    Delivered,

    /// A delivery attempt did not succeed.
    FailedDelivery,

    /// Sent back to the sender (terminal state).
    Returned,

    /// Canceled before delivery (terminal state).
    Canceled,
}

impl PackageStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [PackageStatus; 10] = [
        PackageStatus::Pending,
        PackageStatus::AwaitingPickup,
        PackageStatus::PickedUp,
        PackageStatus::AtDistributionCenter,
        PackageStatus::InTransit,
        PackageStatus::OutForDelivery,
        PackageStatus::Delivered,
        PackageStatus::FailedDelivery,
        PackageStatus::Returned,
        PackageStatus::Canceled,
    ];

    /// Creates a status from its snake_case name.
    pub fn create(value: &str) -> Result<Self, PackageError> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| PackageError::UnknownStatus {
                value: value.to_string(),
            })
    }

    /// Returns the statuses reachable from this one in a single step.
    pub fn allowed_transitions(&self) -> &'static [PackageStatus] {
        use PackageStatus::*;

        match self {
            Pending => &[AwaitingPickup, Canceled],
            AwaitingPickup => &[PickedUp, Canceled],
            PickedUp => &[AtDistributionCenter, Canceled],
            AtDistributionCenter => &[InTransit, Canceled],
            InTransit => &[OutForDelivery, AtDistributionCenter, Canceled],
            OutForDelivery => &[Delivered, FailedDelivery, Canceled],
            FailedDelivery => &[OutForDelivery, Returned],
            Delivered | Returned | Canceled => &[],
        }
    }

    /// Returns true if `next` is reachable from this status in one step.
    pub fn can_transition_to(&self, next: PackageStatus) -> bool {
        self.allowed_transitions().contains(&next)
    }

    /// Returns `next` if the move is legal. `self` is left untouched.
    pub fn transition_to(&self, next: PackageStatus) -> Result<PackageStatus, PackageError> {
        if !self.can_transition_to(next) {
            return Err(PackageError::InvalidStatusTransition {
                from: *self,
                to: next,
            });
        }

        Ok(next)
    }

    /// Returns true if this is a terminal state (no further transitions possible).
    pub fn is_final_state(&self) -> bool {
        matches!(
            self,
            PackageStatus::Delivered | PackageStatus::Returned | PackageStatus::Canceled
        )
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, PackageStatus::Pending)
    }

    pub fn is_awaiting_pickup(&self) -> bool {
        matches!(self, PackageStatus::AwaitingPickup)
    }

    pub fn is_picked_up(&self) -> bool {
        matches!(self, PackageStatus::PickedUp)
    }

    pub fn is_at_distribution_center(&self) -> bool {
        matches!(self, PackageStatus::AtDistributionCenter)
    }

    pub fn is_in_transit(&self) -> bool {
        matches!(self, PackageStatus::InTransit)
    }

    pub fn is_out_for_delivery(&self) -> bool {
        matches!(self, PackageStatus::OutForDelivery)
    }

    pub fn is_delivered(&self) -> bool {
        matches!(self, PackageStatus::Delivered)
    }

    pub fn is_failed_delivery(&self) -> bool {
        matches!(self, PackageStatus::FailedDelivery)
    }

    pub fn is_returned(&self) -> bool {
        matches!(self, PackageStatus::Returned)
    }

    pub fn is_canceled(&self) -> bool {
        matches!(self, PackageStatus::Canceled)
    }

    /// Returns the status name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageStatus::Pending => "pending",
            PackageStatus::AwaitingPickup => "awaiting_pickup",
            PackageStatus::PickedUp => "picked_up",
            PackageStatus::AtDistributionCenter => "at_distribution_center",
            PackageStatus::InTransit => "in_transit",
            PackageStatus::OutForDelivery => "out_for_delivery",
            PackageStatus::Delivered => "delivered",
            PackageStatus::FailedDelivery => "failed_delivery",
            PackageStatus::Returned => "returned",
            PackageStatus::Canceled => "canceled",
        }
    }
}

impl std::fmt::Display for PackageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PackageStatus {
    type Err = PackageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::create(s)
    }
}
