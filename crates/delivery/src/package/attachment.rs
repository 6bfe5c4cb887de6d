use common::{Entity, UniqueEntityId};
use serde::{Deserialize, Serialize};

/// Proof of delivery linked to a package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageAttachment {
    id: UniqueEntityId,
    package_id: UniqueEntityId,
    attachment_id: UniqueEntityId,
}

impl PackageAttachment {
    pub fn create(package_id: UniqueEntityId, attachment_id: UniqueEntityId) -> Self {
        Self::create_with_id(package_id, attachment_id, UniqueEntityId::new())
    }

    pub fn create_with_id(
        package_id: UniqueEntityId,
        attachment_id: UniqueEntityId,
        id: UniqueEntityId,
    ) -> Self {
        Self {
            id,
            package_id,
            attachment_id,
        }
    }

    pub fn package_id(&self) -> UniqueEntityId {
        self.package_id
    }

    /// Identifier of the stored file.
    pub fn attachment_id(&self) -> UniqueEntityId {
        self.attachment_id
    }
}

impl Entity for PackageAttachment {
    fn id(&self) -> UniqueEntityId {
        self.id
    }
}
