use axum::Router;
use axum::routing::{get, patch};
use std::sync::Arc;

pub mod catalog;
pub mod config;
pub mod error;
pub mod handlers;
pub mod ids;
pub mod models;
pub mod notify;
pub mod pricing;
pub mod store;
pub mod validate;

pub use store::JsonStore;

pub const DEFAULT_PAGE_LIMIT: usize = 10;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<JsonStore>,
}

impl AppState {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/orders",
            get(handlers::orders::list_orders).post(handlers::orders::create_order),
        )
        .route(
            "/api/orders/{id}",
            get(handlers::orders::get_order)
                .put(handlers::orders::update_order)
                .delete(handlers::orders::delete_order),
        )
        .route("/api/items", get(handlers::items::list_items))
        .route(
            "/api/notifications",
            get(handlers::notifications::list_notifications),
        )
        .route(
            "/api/notifications/{id}",
            patch(handlers::notifications::update_notification_status),
        )
        .route("/api/summary", get(handlers::summary::get_summary))
        .with_state(state)
}
