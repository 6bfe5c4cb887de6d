use std::sync::Arc;

use common::{Entity, UniqueEntityId};
use tracing::info;

use crate::error::DeliveryError;
use crate::package::{NewPackage, Package};
use crate::repositories::{
    AdminPeopleRepository, DeliveryPeopleRepository, PackagesRepository,
    RecipientPeopleRepository,
};

/// Input for [`RegisterPackage`].
#[derive(Debug, Clone)]
pub struct RegisterPackageRequest {
    pub name: String,
    pub recipient_id: UniqueEntityId,
    pub recipient_address: String,
    pub postal_code: String,
    /// Assign a courier up front. Must resolve when given.
    pub delivery_person_id: Option<UniqueEntityId>,
    pub author_id: UniqueEntityId,
}

/// Registers a new package on behalf of an admin.
///
/// The registration history entry is written together with the package,
/// and subscribers to `package registered` run before this returns.
pub struct RegisterPackage {
    packages: Arc<dyn PackagesRepository>,
    delivery_people: Arc<dyn DeliveryPeopleRepository>,
    admin_people: Arc<dyn AdminPeopleRepository>,
    recipient_people: Arc<dyn RecipientPeopleRepository>,
}

impl RegisterPackage {
    pub fn new(
        packages: Arc<dyn PackagesRepository>,
        delivery_people: Arc<dyn DeliveryPeopleRepository>,
        admin_people: Arc<dyn AdminPeopleRepository>,
        recipient_people: Arc<dyn RecipientPeopleRepository>,
    ) -> Self {
        Self {
            packages,
            delivery_people,
            admin_people,
            recipient_people,
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(&self, request: RegisterPackageRequest) -> Result<Package, DeliveryError> {
        let delivery_lookup = async {
            match request.delivery_person_id {
                Some(id) => self.delivery_people.find_by_id(id).await,
                None => Ok(None),
            }
        };

        let (author, delivery_person, recipient) = tokio::join!(
            self.admin_people.find_by_id(request.author_id),
            delivery_lookup,
            self.recipient_people.find_by_id(request.recipient_id),
        );

        let author = author?.ok_or_else(|| DeliveryError::not_found("admin"))?;

        let delivery_person = delivery_person?;
        if request.delivery_person_id.is_some() && delivery_person.is_none() {
            return Err(DeliveryError::not_found("delivery"));
        }

        let recipient = recipient?.ok_or_else(|| DeliveryError::not_found("recipient"))?;

        let mut package = Package::create(NewPackage {
            name: request.name,
            recipient_id: recipient.id(),
            recipient_address: request.recipient_address,
            postal_code: request.postal_code,
            author_id: author.id(),
            delivery_person_id: delivery_person.map(|person| person.id()),
            ..NewPackage::default()
        })?;
        package.mark_as_registered(author.id());

        let package = self.packages.register(package).await?;

        metrics::counter!("packages_registered_total").increment(1);
        info!(code = %package.code(), "Package registered");

        Ok(package)
    }
}
