//! Package domain events.

use std::fmt;

use chrono::{DateTime, Utc};
use common::UniqueEntityId;
use domain_events::DomainEvent;
use serde::{Deserialize, Serialize};

use super::PackageHistory;

/// Events raised by the package aggregate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum PackageEvent {
    /// Package was registered by an admin.
    PackageRegistered(PackageEventData),

    /// A delivery person was assigned to the package.
    PackageAssigned(PackageEventData),
}

/// Payload shared by every package event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageEventData {
    /// The history entry recorded alongside the event.
    pub package_history: PackageHistory,
    pub package_id: UniqueEntityId,
    pub occurred_at: DateTime<Utc>,
}

/// Routing key for package events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PackageEventKind {
    Registered,
    Assigned,
}

impl PackageEventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageEventKind::Registered => "package registered",
            PackageEventKind::Assigned => "package assigned",
        }
    }
}

impl fmt::Display for PackageEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PackageEvent {
    pub fn registered(package_id: UniqueEntityId, package_history: PackageHistory) -> Self {
        PackageEvent::PackageRegistered(PackageEventData {
            package_history,
            package_id,
            occurred_at: Utc::now(),
        })
    }

    pub fn assigned(package_id: UniqueEntityId, package_history: PackageHistory) -> Self {
        PackageEvent::PackageAssigned(PackageEventData {
            package_history,
            package_id,
            occurred_at: Utc::now(),
        })
    }

    pub fn data(&self) -> &PackageEventData {
        match self {
            PackageEvent::PackageRegistered(data) | PackageEvent::PackageAssigned(data) => data,
        }
    }

    pub fn package_history(&self) -> &PackageHistory {
        &self.data().package_history
    }
}

impl DomainEvent for PackageEvent {
    type Kind = PackageEventKind;

    fn kind(&self) -> PackageEventKind {
        match self {
            PackageEvent::PackageRegistered(_) => PackageEventKind::Registered,
            PackageEvent::PackageAssigned(_) => PackageEventKind::Assigned,
        }
    }

    fn aggregate_id(&self) -> UniqueEntityId {
        self.data().package_id
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.data().occurred_at
    }
}
