use std::sync::Arc;

use common::{Entity, UniqueEntityId};
use domain_events::AggregateRoot;
use tracing::info;

use crate::error::DeliveryError;
use crate::package::{Package, PackageAttachment, PackageStatus};
use crate::repositories::{AdminPeopleRepository, PackagesRepository};

/// Input for [`UpdatePackageStatus`].
#[derive(Debug, Clone)]
pub struct UpdatePackageStatusRequest {
    pub package_id: UniqueEntityId,
    pub author_id: UniqueEntityId,
    pub status: PackageStatus,
    /// Proof of delivery, attached before the status changes.
    pub attachment_id: Option<UniqueEntityId>,
    pub description: Option<String>,
}

/// Moves a package along its lifecycle.
pub struct UpdatePackageStatus {
    packages: Arc<dyn PackagesRepository>,
    admin_people: Arc<dyn AdminPeopleRepository>,
}

impl UpdatePackageStatus {
    pub fn new(
        packages: Arc<dyn PackagesRepository>,
        admin_people: Arc<dyn AdminPeopleRepository>,
    ) -> Self {
        Self {
            packages,
            admin_people,
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(
        &self,
        request: UpdatePackageStatusRequest,
    ) -> Result<Package, DeliveryError> {
        let (author, package) = tokio::join!(
            self.admin_people.find_by_id(request.author_id),
            self.packages.find_by_id(request.package_id),
        );

        let author = author?.ok_or_else(|| DeliveryError::not_found("admin"))?;
        let mut package = package?.ok_or_else(|| DeliveryError::not_found("package"))?;

        if let Some(attachment_id) = request.attachment_id {
            package.add_attachment(PackageAttachment::create(package.id(), attachment_id));
        }

        let previous_status = package.status();
        package.update_status(request.status, author.id(), request.description)?;

        let package = self
            .packages
            .update(package)
            .await?
            .ok_or_else(|| DeliveryError::not_found("package"))?;

        metrics::counter!("package_status_transitions_total", "to" => request.status.as_str())
            .increment(1);
        info!(
            package_id = %package.id(),
            from = %previous_status,
            to = %request.status,
            "Package status updated"
        );

        Ok(package)
    }
}
