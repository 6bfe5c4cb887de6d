//! Package history entries.

use chrono::{DateTime, Utc};
use common::{Entity, UniqueEntityId};
use serde::{Deserialize, Serialize};

use super::PackageStatus;

/// Properties used to create a [`PackageHistory`].
#[derive(Debug, Clone)]
pub struct NewPackageHistory {
    pub package_id: UniqueEntityId,
    /// `None` only for the entry recorded when the package is registered.
    pub from_status: Option<PackageStatus>,
    pub to_status: PackageStatus,
    pub author_id: UniqueEntityId,
    pub delivery_person_id: Option<UniqueEntityId>,
    pub description: Option<String>,
    /// Defaults to now.
    pub created_at: Option<DateTime<Utc>>,
}

/// An immutable audit record of one package event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageHistory {
    id: UniqueEntityId,
    package_id: UniqueEntityId,
    from_status: Option<PackageStatus>,
    to_status: PackageStatus,
    author_id: UniqueEntityId,
    delivery_person_id: Option<UniqueEntityId>,
    description: Option<String>,
    created_at: DateTime<Utc>,
}

impl PackageHistory {
    /// Creates a history entry with a fresh identity.
    pub fn create(props: NewPackageHistory) -> Self {
        Self::create_with_id(props, UniqueEntityId::new())
    }

    /// Creates a history entry with a known identity, e.g. when loading.
    pub fn create_with_id(props: NewPackageHistory, id: UniqueEntityId) -> Self {
        Self {
            id,
            package_id: props.package_id,
            from_status: props.from_status,
            to_status: props.to_status,
            author_id: props.author_id,
            delivery_person_id: props.delivery_person_id,
            description: props.description,
            created_at: props.created_at.unwrap_or_else(Utc::now),
        }
    }

    pub fn package_id(&self) -> UniqueEntityId {
        self.package_id
    }

    pub fn from_status(&self) -> Option<PackageStatus> {
        self.from_status
    }

    pub fn to_status(&self) -> PackageStatus {
        self.to_status
    }

    pub fn author_id(&self) -> UniqueEntityId {
        self.author_id
    }

    pub fn delivery_person_id(&self) -> Option<UniqueEntityId> {
        self.delivery_person_id
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Entity for PackageHistory {
    fn id(&self) -> UniqueEntityId {
        self.id
    }
}
