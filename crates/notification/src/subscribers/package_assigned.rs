use std::sync::Arc;

use async_trait::async_trait;
use delivery::{PackageEvent, PackageEventKind, PackagesRepository};
use domain_events::{DomainEvents, EventHandler, HandlerError};
use tracing::debug;

use super::truncate;
use crate::send_notification::{SendNotification, SendNotificationRequest};

const DEFAULT_TITLE: &str = "Package assigned to a delivery person";
const NAME_LIMIT: usize = 10;

/// Tells the recipient that a courier will pick up their package.
pub struct OnPackageAssignedSendNotification {
    packages: Arc<dyn PackagesRepository>,
    send_notification: Arc<SendNotification>,
}

impl OnPackageAssignedSendNotification {
    pub fn new(
        packages: Arc<dyn PackagesRepository>,
        send_notification: Arc<SendNotification>,
    ) -> Self {
        Self {
            packages,
            send_notification,
        }
    }

    /// Creates the subscriber and registers it on `events`.
    pub async fn subscribe(
        events: &DomainEvents<PackageEvent>,
        packages: Arc<dyn PackagesRepository>,
        send_notification: Arc<SendNotification>,
    ) -> Arc<Self> {
        let subscriber = Arc::new(Self::new(packages, send_notification));
        events
            .register(PackageEventKind::Assigned, subscriber.clone())
            .await;
        subscriber
    }
}

#[async_trait]
impl EventHandler<PackageEvent> for OnPackageAssignedSendNotification {
    fn name(&self) -> &'static str {
        "on_package_assigned_send_notification"
    }

    async fn handle(&self, event: &PackageEvent) -> Result<(), HandlerError> {
        let PackageEvent::PackageAssigned(data) = event else {
            return Ok(());
        };

        let Some(package) = self.packages.find_by_id(data.package_id).await? else {
            debug!(package_id = %data.package_id, "Assigned package not found, skipping");
            return Ok(());
        };

        let title = data
            .package_history
            .description()
            .unwrap_or(DEFAULT_TITLE)
            .to_string();
        let content = format!(
            "Delivery person was assigned to get a package: {}, the package code is: {}",
            truncate(package.name(), NAME_LIMIT),
            package.code()
        );

        self.send_notification
            .execute(SendNotificationRequest {
                recipient_id: package.recipient_id(),
                title,
                content,
            })
            .await?;

        Ok(())
    }
}
