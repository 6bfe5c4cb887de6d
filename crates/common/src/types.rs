use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an entity or aggregate instance.
///
/// Wraps a UUID so identities of packages, people and history entries
/// share one comparable type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UniqueEntityId(Uuid);

impl UniqueEntityId {
    /// Creates a new random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an identifier from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for UniqueEntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for UniqueEntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for UniqueEntityId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl From<Uuid> for UniqueEntityId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<UniqueEntityId> for Uuid {
    fn from(id: UniqueEntityId) -> Self {
        id.0
    }
}

/// Anything with a stable identity.
///
/// Two entities are the same entity when their identifiers match,
/// regardless of their other attributes.
pub trait Entity {
    fn id(&self) -> UniqueEntityId;

    fn same_identity_as(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_entity_id_new_creates_unique_ids() {
        let id1 = UniqueEntityId::new();
        let id2 = UniqueEntityId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn unique_entity_id_from_uuid_preserves_value() {
        let uuid = Uuid::new_v4();
        let id = UniqueEntityId::from_uuid(uuid);
        assert_eq!(id.as_uuid(), uuid);
    }

    #[test]
    fn unique_entity_id_parses_its_display_form() {
        let id = UniqueEntityId::new();
        let parsed: UniqueEntityId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn unique_entity_id_rejects_garbage() {
        assert!("non-existent-package-id".parse::<UniqueEntityId>().is_err());
    }

    #[test]
    fn unique_entity_id_serializes_transparently() {
        let id = UniqueEntityId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{id}\""));
    }
}
