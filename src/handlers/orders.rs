use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::info;

use crate::error::ApiError;
use crate::models::{CatalogItem, Order, OrderItem, OrderStatus};
use crate::store::Collection;
use crate::validate::{self, ValidationError};
use crate::{AppState, DEFAULT_PAGE_LIMIT, catalog, ids, notify, pricing};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemPayload {
    pub id: Option<String>,
    pub quantity: Option<i64>,
    pub name: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
}

/// Client-writable order fields. Server-owned fields (id, timestamps,
/// tracking number, billing address) are never read from the payload.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    pub customer_name: Option<String>,
    pub shipping_address: Option<String>,
    pub items: Option<Vec<OrderItemPayload>>,
    pub status: Option<String>,
    pub discount: Option<f64>,
    pub shipping_fee: Option<f64>,
    pub tax: Option<f64>,
    pub payment_status: Option<String>,
    pub shipping_method: Option<String>,
    pub estimated_delivery: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPage {
    pub page: usize,
    pub limit: usize,
    pub total_pages: usize,
    pub total_orders: usize,
    pub orders: Vec<Order>,
}

fn materialize_items(payloads: Vec<OrderItemPayload>) -> Vec<OrderItem> {
    payloads
        .into_iter()
        .map(|item| OrderItem {
            id: item.id.unwrap_or_default(),
            name: item.name.unwrap_or_default(),
            quantity: u32::try_from(item.quantity.unwrap_or(0)).unwrap_or_default(),
            price: item.price.unwrap_or_default(),
            image_url: item.image_url.unwrap_or_default(),
        })
        .collect()
}

pub async fn list_orders(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<OrderPage>, ApiError> {
    let guard = state.store.lock(Collection::Orders).await;
    let orders: Vec<Order> = state.store.load(Collection::Orders)?;
    drop(guard);

    let page = params
        .get("page")
        .and_then(|raw| raw.parse::<usize>().ok())
        .unwrap_or(1)
        .max(1);
    let limit = params
        .get("limit")
        .and_then(|raw| raw.parse::<usize>().ok())
        .unwrap_or(DEFAULT_PAGE_LIMIT)
        .max(1);

    // An unknown status value matches nothing rather than failing the request.
    let mut filtered: Vec<Order> = match params.get("status") {
        None => orders,
        Some(raw) => match raw.parse::<OrderStatus>() {
            Ok(status) => orders
                .into_iter()
                .filter(|order| order.status == status)
                .collect(),
            Err(_) => Vec::new(),
        },
    };

    filtered.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let total_orders = filtered.len();
    let total_pages = total_orders.div_ceil(limit);
    // A page offset beyond usize is just an empty page, not a fault.
    let orders: Vec<Order> = match page.saturating_sub(1).checked_mul(limit) {
        Some(start) => filtered.into_iter().skip(start).take(limit).collect(),
        None => Vec::new(),
    };

    Ok(Json(OrderPage {
        page,
        limit,
        total_pages,
        total_orders,
        orders,
    }))
}

pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Order>, ApiError> {
    let _guard = state.store.lock(Collection::Orders).await;
    let orders: Vec<Order> = state.store.load(Collection::Orders)?;
    orders
        .into_iter()
        .find(|order| order.id == id)
        .map(Json)
        .ok_or(ApiError::NotFound("Order"))
}

pub async fn create_order(
    State(state): State<AppState>,
    Json(payload): Json<OrderPayload>,
) -> Result<(StatusCode, Json<Order>), ApiError> {
    validate::validate_create(&payload)?;

    let guard = state.store.lock(Collection::Orders).await;
    let mut orders: Vec<Order> = state.store.load(Collection::Orders)?;
    let existing_items: Vec<CatalogItem> = state.store.load(Collection::Items)?;

    let id = ids::unique_entity_id(|candidate| orders.iter().any(|order| order.id == candidate))
        .ok_or(ApiError::IdExhausted)?;

    let mut items = materialize_items(payload.items.unwrap_or_default());
    catalog::enrich_items(&mut items, &existing_items);

    let discount = payload.discount.unwrap_or_default();
    let shipping_fee = payload.shipping_fee.unwrap_or_default();
    let tax = payload.tax.unwrap_or_default();
    let shipping_address = payload.shipping_address.unwrap_or_default();
    let now = Utc::now();

    let order = Order {
        id,
        created_at: now,
        updated_at: now,
        customer_name: payload.customer_name.unwrap_or_default(),
        billing_address: shipping_address.clone(),
        shipping_address,
        total_amount: pricing::calculate_total_amount(&items, discount, shipping_fee, tax),
        items,
        status: OrderStatus::Pending,
        discount,
        shipping_fee,
        tax,
        payment_status: "unpaid".to_string(),
        shipping_method: payload.shipping_method.unwrap_or_default(),
        tracking_number: ids::random_tracking_number(),
        estimated_delivery: payload.estimated_delivery.unwrap_or_default(),
    };

    orders.push(order.clone());
    state.store.save(Collection::Orders, &orders)?;
    drop(guard);

    notify::create_notification(
        &state.store,
        format!("Order #{} has been created.", order.id),
    )
    .await?;

    info!("Order {} created for {}", order.id, order.customer_name);

    Ok((StatusCode::CREATED, Json(order)))
}

pub async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<OrderPayload>,
) -> Result<Json<Order>, ApiError> {
    validate::validate_update(&payload)?;

    let guard = state.store.lock(Collection::Orders).await;
    let mut orders: Vec<Order> = state.store.load(Collection::Orders)?;
    let existing_items: Vec<CatalogItem> = state.store.load(Collection::Items)?;

    let index = orders
        .iter()
        .position(|order| order.id == id)
        .ok_or(ApiError::NotFound("Order"))?;
    let order = &mut orders[index];

    if let Some(status) = &payload.status {
        // Membership was checked by validation; legality depends on the
        // current state and is checked here.
        let next: OrderStatus = status
            .parse()
            .map_err(|_| ValidationError(format!("status must be a known value: {status}")))?;
        if !order.status.can_transition_to(next) {
            return Err(ValidationError(format!(
                "illegal status transition: {} -> {}",
                order.status, next
            ))
            .into());
        }
        order.status = next;
    }

    if let Some(customer_name) = payload.customer_name {
        order.customer_name = customer_name;
    }
    if let Some(shipping_address) = payload.shipping_address {
        order.shipping_address = shipping_address;
    }
    if let Some(items) = payload.items {
        order.items = materialize_items(items);
    }
    if let Some(discount) = payload.discount {
        order.discount = discount;
    }
    if let Some(shipping_fee) = payload.shipping_fee {
        order.shipping_fee = shipping_fee;
    }
    if let Some(tax) = payload.tax {
        order.tax = tax;
    }
    if let Some(payment_status) = payload.payment_status {
        order.payment_status = payment_status;
    }
    if let Some(shipping_method) = payload.shipping_method {
        order.shipping_method = shipping_method;
    }
    if let Some(estimated_delivery) = payload.estimated_delivery {
        order.estimated_delivery = estimated_delivery;
    }

    catalog::enrich_items(&mut order.items, &existing_items);
    order.total_amount =
        pricing::calculate_total_amount(&order.items, order.discount, order.shipping_fee, order.tax);
    order.updated_at = Utc::now();

    let updated = order.clone();
    state.store.save(Collection::Orders, &orders)?;
    drop(guard);

    notify::create_notification(
        &state.store,
        format!("Order #{} has been updated.", updated.id),
    )
    .await?;

    info!("Order {} updated", updated.id);

    Ok(Json(updated))
}

pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Order>, ApiError> {
    let guard = state.store.lock(Collection::Orders).await;
    let mut orders: Vec<Order> = state.store.load(Collection::Orders)?;

    let index = orders
        .iter()
        .position(|order| order.id == id)
        .ok_or(ApiError::NotFound("Order"))?;
    let removed = orders.remove(index);

    state.store.save(Collection::Orders, &orders)?;
    drop(guard);

    notify::create_notification(
        &state.store,
        format!("Order #{} has been deleted.", removed.id),
    )
    .await?;

    info!("Order {} deleted", removed.id);

    Ok(Json(removed))
}
