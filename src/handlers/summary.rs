use axum::Json;
use axum::extract::State;
use serde::Serialize;
use std::collections::HashSet;

use crate::AppState;
use crate::error::ApiError;
use crate::models::{Notification, NotificationStatus, Order, OrderStatus};
use crate::store::Collection;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_orders: usize,
    pub total_completed_orders: usize,
    pub total_active_orders: usize,
    pub total_not_started_orders: usize,
    pub total_revenue: f64,
    pub unique_customers: usize,
    pub total_notifications: usize,
    pub total_unread_notifications: usize,
}

/// Dashboard aggregation over the orders and notifications collections.
/// "Active" means shipped, "not started" means pending.
pub async fn get_summary(State(state): State<AppState>) -> Result<Json<Summary>, ApiError> {
    let guard = state.store.lock(Collection::Orders).await;
    let orders: Vec<Order> = state.store.load(Collection::Orders)?;
    drop(guard);
    let guard = state.store.lock(Collection::Notifications).await;
    let notifications: Vec<Notification> = state.store.load(Collection::Notifications)?;
    drop(guard);

    let count_status = |status: OrderStatus| {
        orders.iter().filter(|order| order.status == status).count()
    };

    let unique_customers = orders
        .iter()
        .map(|order| order.customer_name.as_str())
        .collect::<HashSet<_>>()
        .len();

    Ok(Json(Summary {
        total_orders: orders.len(),
        total_completed_orders: count_status(OrderStatus::Completed),
        total_active_orders: count_status(OrderStatus::Shipped),
        total_not_started_orders: count_status(OrderStatus::Pending),
        total_revenue: orders.iter().map(|order| order.total_amount).sum(),
        unique_customers,
        total_notifications: notifications.len(),
        total_unread_notifications: notifications
            .iter()
            .filter(|notification| notification.status == NotificationStatus::Unread)
            .count(),
    }))
}
