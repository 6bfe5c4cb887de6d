use std::sync::Arc;

use common::{Entity, UniqueEntityId};
use domain_events::AggregateRoot;
use tracing::info;

use crate::error::DeliveryError;
use crate::package::{Package, PackageStatus};
use crate::repositories::{AdminPeopleRepository, DeliveryPeopleRepository, PackagesRepository};

/// Input for [`AssignPackageToADeliveryPerson`].
#[derive(Debug, Clone)]
pub struct AssignPackageToADeliveryPersonRequest {
    pub package_id: UniqueEntityId,
    pub delivery_person_id: UniqueEntityId,
    pub author_id: UniqueEntityId,
    pub description: Option<String>,
}

/// Hands a pending package to a courier.
///
/// Moves the package to `awaiting_pickup` and records the assignment, so a
/// successful call adds two history entries.
pub struct AssignPackageToADeliveryPerson {
    packages: Arc<dyn PackagesRepository>,
    delivery_people: Arc<dyn DeliveryPeopleRepository>,
    admin_people: Arc<dyn AdminPeopleRepository>,
}

impl AssignPackageToADeliveryPerson {
    pub fn new(
        packages: Arc<dyn PackagesRepository>,
        delivery_people: Arc<dyn DeliveryPeopleRepository>,
        admin_people: Arc<dyn AdminPeopleRepository>,
    ) -> Self {
        Self {
            packages,
            delivery_people,
            admin_people,
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(
        &self,
        request: AssignPackageToADeliveryPersonRequest,
    ) -> Result<Package, DeliveryError> {
        let (author, delivery_person, package) = tokio::join!(
            self.admin_people.find_by_id(request.author_id),
            self.delivery_people.find_by_id(request.delivery_person_id),
            self.packages.find_by_id(request.package_id),
        );

        let author = author?.ok_or_else(|| DeliveryError::not_found("admin"))?;
        let delivery_person =
            delivery_person?.ok_or_else(|| DeliveryError::not_found("delivery"))?;
        let mut package = package?.ok_or_else(|| DeliveryError::not_found("package"))?;

        let previous_status = package.status();
        package.update_status(PackageStatus::AwaitingPickup, author.id(), None)?;
        package.assign_delivery_person(
            delivery_person.id(),
            author.id(),
            previous_status,
            request.description,
        );

        let package = self
            .packages
            .update(package)
            .await?
            .ok_or_else(|| DeliveryError::not_found("package"))?;

        metrics::counter!("package_status_transitions_total", "to" => PackageStatus::AwaitingPickup.as_str())
            .increment(1);
        info!(
            package_id = %package.id(),
            delivery_person_id = %delivery_person.id(),
            "Package assigned to delivery person"
        );

        Ok(package)
    }
}
