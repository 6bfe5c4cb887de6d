use std::sync::Arc;

use tracing::debug;

use crate::error::DeliveryError;
use crate::package::{NewPackageHistory, PackageHistory};
use crate::repositories::{
    AdminPeopleRepository, DeliveryPeopleRepository, PackagesHistoryRepository,
    PackagesRepository,
};

/// Input for [`RegisterPackageHistory`].
#[derive(Debug, Clone)]
pub struct RegisterPackageHistoryRequest {
    pub history: NewPackageHistory,
}

/// Stores a history entry recorded outside the package aggregate.
///
/// The author and package must exist; the delivery person is checked only
/// when the entry names one.
pub struct RegisterPackageHistory {
    packages: Arc<dyn PackagesRepository>,
    histories: Arc<dyn PackagesHistoryRepository>,
    admin_people: Arc<dyn AdminPeopleRepository>,
    delivery_people: Arc<dyn DeliveryPeopleRepository>,
}

impl RegisterPackageHistory {
    pub fn new(
        packages: Arc<dyn PackagesRepository>,
        histories: Arc<dyn PackagesHistoryRepository>,
        admin_people: Arc<dyn AdminPeopleRepository>,
        delivery_people: Arc<dyn DeliveryPeopleRepository>,
    ) -> Self {
        Self {
            packages,
            histories,
            admin_people,
            delivery_people,
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(
        &self,
        request: RegisterPackageHistoryRequest,
    ) -> Result<PackageHistory, DeliveryError> {
        let props = request.history;

        let delivery_lookup = async {
            match props.delivery_person_id {
                Some(id) => self.delivery_people.find_by_id(id).await,
                None => Ok(None),
            }
        };

        let (author, delivery_person, package) = tokio::join!(
            self.admin_people.find_by_id(props.author_id),
            delivery_lookup,
            self.packages.find_by_id(props.package_id),
        );

        if author?.is_none() {
            return Err(DeliveryError::not_found("admin"));
        }

        if props.delivery_person_id.is_some() && delivery_person?.is_none() {
            return Err(DeliveryError::not_found("delivery"));
        }

        if package?.is_none() {
            return Err(DeliveryError::not_found("package"));
        }

        let history = self.histories.register(PackageHistory::create(props)).await?;
        debug!(package_id = %history.package_id(), "Package history registered");

        Ok(history)
    }
}
