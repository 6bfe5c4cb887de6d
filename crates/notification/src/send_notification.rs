use std::sync::Arc;

use common::{Entity, UniqueEntityId};
use tracing::info;

use crate::error::NotificationError;
use crate::notification::{NewNotification, Notification};
use crate::repository::NotificationsRepository;

/// Input for [`SendNotification`].
#[derive(Debug, Clone)]
pub struct SendNotificationRequest {
    pub recipient_id: UniqueEntityId,
    pub title: String,
    pub content: String,
}

/// Creates and stores a notification for a recipient.
pub struct SendNotification {
    notifications: Arc<dyn NotificationsRepository>,
}

impl SendNotification {
    pub fn new(notifications: Arc<dyn NotificationsRepository>) -> Self {
        Self { notifications }
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(
        &self,
        request: SendNotificationRequest,
    ) -> Result<Notification, NotificationError> {
        let notification = Notification::create(NewNotification {
            recipient_id: request.recipient_id,
            title: request.title,
            content: request.content,
            created_at: None,
        });

        let notification = self.notifications.create(notification).await?;

        metrics::counter!("notifications_sent_total").increment(1);
        info!(
            notification_id = %notification.id(),
            recipient_id = %notification.recipient_id(),
            "Notification sent"
        );

        Ok(notification)
    }
}
