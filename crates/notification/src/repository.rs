//! Notification storage.

use std::sync::Arc;

use async_trait::async_trait;
use common::{Entity, UniqueEntityId};
use tokio::sync::RwLock;

use crate::error::NotificationError;
use crate::notification::Notification;

#[async_trait]
pub trait NotificationsRepository: Send + Sync {
    async fn create(&self, notification: Notification) -> Result<Notification, NotificationError>;

    async fn find_by_id(
        &self,
        id: UniqueEntityId,
    ) -> Result<Option<Notification>, NotificationError>;

    /// Overwrites a stored notification.
    async fn save(&self, notification: Notification) -> Result<Notification, NotificationError>;
}

/// In-memory notification storage.
#[derive(Clone, Default)]
pub struct InMemoryNotificationsRepository {
    items: Arc<RwLock<Vec<Notification>>>,
}

impl InMemoryNotificationsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of every stored notification, oldest first.
    pub async fn items(&self) -> Vec<Notification> {
        self.items.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

#[async_trait]
impl NotificationsRepository for InMemoryNotificationsRepository {
    async fn create(&self, notification: Notification) -> Result<Notification, NotificationError> {
        let mut items = self.items.write().await;

        if items.iter().any(|item| item.same_identity_as(&notification)) {
            return Err(NotificationError::AlreadyExists {
                id: notification.id(),
            });
        }

        items.push(notification.clone());
        Ok(notification)
    }

    async fn find_by_id(
        &self,
        id: UniqueEntityId,
    ) -> Result<Option<Notification>, NotificationError> {
        let items = self.items.read().await;
        Ok(items.iter().find(|item| item.id() == id).cloned())
    }

    async fn save(&self, notification: Notification) -> Result<Notification, NotificationError> {
        let mut items = self.items.write().await;

        let slot = items
            .iter_mut()
            .find(|item| item.same_identity_as(&notification))
            .ok_or(NotificationError::NotFound {
                id: notification.id(),
            })?;
        *slot = notification.clone();

        Ok(notification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::NewNotification;

    #[tokio::test]
    async fn test_create_and_find() {
        let repository = InMemoryNotificationsRepository::new();
        let notification = Notification::create(NewNotification::default());

        repository.create(notification.clone()).await.unwrap();

        let found = repository.find_by_id(notification.id()).await.unwrap();
        assert_eq!(found, Some(notification.clone()));

        let duplicate = repository.create(notification).await;
        assert!(matches!(
            duplicate,
            Err(NotificationError::AlreadyExists { .. })
        ));
    }

    #[tokio::test]
    async fn test_save_persists_read_state() {
        let repository = InMemoryNotificationsRepository::new();
        let mut notification = repository
            .create(Notification::create(NewNotification::default()))
            .await
            .unwrap();

        notification.read();
        repository.save(notification.clone()).await.unwrap();

        let stored = repository
            .find_by_id(notification.id())
            .await
            .unwrap()
            .unwrap();
        assert!(stored.is_read());
    }

    #[tokio::test]
    async fn test_save_unknown_notification_fails() {
        let repository = InMemoryNotificationsRepository::new();
        let result = repository
            .save(Notification::create(NewNotification::default()))
            .await;

        assert!(matches!(result, Err(NotificationError::NotFound { .. })));
        assert!(repository.is_empty().await);
    }
}
