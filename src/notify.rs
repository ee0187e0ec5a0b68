use chrono::Utc;
use tracing::info;

use crate::error::ApiError;
use crate::ids;
use crate::models::{Notification, NotificationStatus};
use crate::store::{Collection, JsonStore};

/// Appends one unread notification to the feed. Called after every
/// successful order create/update/delete.
pub async fn create_notification(
    store: &JsonStore,
    message: String,
) -> Result<Notification, ApiError> {
    let _guard = store.lock(Collection::Notifications).await;
    let mut notifications: Vec<Notification> = store.load(Collection::Notifications)?;

    let id = ids::unique_entity_id(|candidate| {
        notifications
            .iter()
            .any(|notification| notification.id == candidate)
    })
    .ok_or(ApiError::IdExhausted)?;

    let notification = Notification {
        id,
        message,
        status: NotificationStatus::Unread,
        created_at: Utc::now(),
    };
    notifications.push(notification.clone());
    store.save(Collection::Notifications, &notifications)?;

    info!("Notification {} recorded: {}", notification.id, notification.message);

    Ok(notification)
}
