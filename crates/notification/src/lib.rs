//! Recipient notifications.
//!
//! This crate provides:
//! - `Notification` entity and its repository
//! - `SendNotification` use case
//! - Subscribers that notify recipients when packages are registered or assigned

pub mod error;
pub mod notification;
pub mod repository;
pub mod send_notification;
pub mod subscribers;

pub use error::NotificationError;
pub use notification::{NewNotification, Notification};
pub use repository::{InMemoryNotificationsRepository, NotificationsRepository};
pub use send_notification::{SendNotification, SendNotificationRequest};
pub use subscribers::{OnPackageAssignedSendNotification, OnPackageRegisteredSendNotification};
