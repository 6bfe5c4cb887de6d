use chrono::{DateTime, Utc};
use common::{Entity, UniqueEntityId};
use serde::{Deserialize, Serialize};

/// Properties used to create a [`Notification`].
#[derive(Debug, Clone, Default)]
pub struct NewNotification {
    pub recipient_id: UniqueEntityId,
    pub title: String,
    pub content: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// A message addressed to one person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    id: UniqueEntityId,
    recipient_id: UniqueEntityId,
    title: String,
    content: String,
    created_at: DateTime<Utc>,
    read_at: Option<DateTime<Utc>>,
}

impl Notification {
    pub fn create(props: NewNotification) -> Self {
        Self::create_with_id(props, UniqueEntityId::new())
    }

    pub fn create_with_id(props: NewNotification, id: UniqueEntityId) -> Self {
        Self {
            id,
            recipient_id: props.recipient_id,
            title: props.title,
            content: props.content,
            created_at: props.created_at.unwrap_or_else(Utc::now),
            read_at: None,
        }
    }

    /// Marks the notification as read. Reading twice keeps the first time.
    pub fn read(&mut self) {
        if self.read_at.is_none() {
            self.read_at = Some(Utc::now());
        }
    }

    pub fn recipient_id(&self) -> UniqueEntityId {
        self.recipient_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn read_at(&self) -> Option<DateTime<Utc>> {
        self.read_at
    }

    pub fn is_read(&self) -> bool {
        self.read_at.is_some()
    }
}

impl Entity for Notification {
    fn id(&self) -> UniqueEntityId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_notification_is_unread() {
        let notification = Notification::create(NewNotification {
            title: "Hello".to_string(),
            content: "World".to_string(),
            ..Default::default()
        });

        assert!(!notification.is_read());
        assert_eq!(notification.title(), "Hello");
        assert_eq!(notification.content(), "World");
    }

    #[test]
    fn test_read_keeps_first_timestamp() {
        let mut notification = Notification::create(NewNotification::default());

        notification.read();
        let first = notification.read_at();
        notification.read();

        assert!(notification.is_read());
        assert_eq!(notification.read_at(), first);
    }
}
