use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use std::collections::HashMap;
use tracing::info;

use crate::AppState;
use crate::error::ApiError;
use crate::models::{Notification, NotificationStatus};
use crate::store::Collection;
use crate::validate::ValidationError;

pub async fn list_notifications(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<Notification>>, ApiError> {
    let guard = state.store.lock(Collection::Notifications).await;
    let notifications: Vec<Notification> = state.store.load(Collection::Notifications)?;
    drop(guard);

    let mut filtered: Vec<Notification> = match params.get("status") {
        None => notifications,
        Some(raw) => match raw.parse::<NotificationStatus>() {
            Ok(status) => notifications
                .into_iter()
                .filter(|notification| notification.status == status)
                .collect(),
            Err(_) => Vec::new(),
        },
    };

    filtered.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    Ok(Json(filtered))
}

#[derive(Debug, Deserialize)]
pub struct NotificationPatch {
    pub status: Option<String>,
}

pub async fn update_notification_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<NotificationPatch>,
) -> Result<Json<Notification>, ApiError> {
    let status: NotificationStatus = payload
        .status
        .as_deref()
        .unwrap_or_default()
        .parse()
        .map_err(|_| ValidationError("status must be one of: read, unread".to_string()))?;

    let _guard = state.store.lock(Collection::Notifications).await;
    let mut notifications: Vec<Notification> = state.store.load(Collection::Notifications)?;

    let notification = notifications
        .iter_mut()
        .find(|notification| notification.id == id)
        .ok_or(ApiError::NotFound("Notification"))?;
    notification.status = status;
    let updated = notification.clone();

    state.store.save(Collection::Notifications, &notifications)?;

    info!("Notification {} marked {}", updated.id, updated.status);

    Ok(Json(updated))
}
