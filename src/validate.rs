use thiserror::Error;

use crate::handlers::orders::OrderPayload;
use crate::models::OrderStatus;

/// All structural problems with a payload, joined into one message.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

/// Full structural check for `POST /api/orders`: every field of the schema
/// is required.
pub fn validate_create(payload: &OrderPayload) -> Result<(), ValidationError> {
    finish(collect_errors(payload, true))
}

/// Structural check for `PUT /api/orders/{id}`: constraints apply to the
/// fields present in the payload, absent fields are left untouched.
pub fn validate_update(payload: &OrderPayload) -> Result<(), ValidationError> {
    finish(collect_errors(payload, false))
}

fn finish(errors: Vec<String>) -> Result<(), ValidationError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError(errors.join("; ")))
    }
}

fn collect_errors(payload: &OrderPayload, require_all: bool) -> Vec<String> {
    let mut errors = Vec::new();

    check_text(&mut errors, "customerName", &payload.customer_name, require_all);
    check_text(&mut errors, "shippingAddress", &payload.shipping_address, require_all);
    check_text(&mut errors, "estimatedDelivery", &payload.estimated_delivery, require_all);

    match &payload.items {
        None if require_all => errors.push("items is required".to_string()),
        None => {}
        Some(items) if items.is_empty() => {
            errors.push("items must contain at least 1 item".to_string());
        }
        Some(items) => {
            for (index, item) in items.iter().enumerate() {
                if item.id.as_deref().is_none_or(|id| id.trim().is_empty()) {
                    errors.push(format!("items[{index}].id is required"));
                }
                match item.quantity {
                    None => errors.push(format!("items[{index}].quantity is required")),
                    Some(quantity) if quantity < 1 => {
                        errors.push(format!("items[{index}].quantity must be at least 1"));
                    }
                    Some(quantity) if quantity > i64::from(u32::MAX) => {
                        errors.push(format!(
                            "items[{index}].quantity must be at most {}",
                            u32::MAX
                        ));
                    }
                    Some(_) => {}
                }
            }
        }
    }

    check_amount(&mut errors, "shippingFee", payload.shipping_fee, require_all);
    check_amount(&mut errors, "discount", payload.discount, require_all);
    check_amount(&mut errors, "tax", payload.tax, require_all);

    if let Some(status) = &payload.status {
        if status.parse::<OrderStatus>().is_err() {
            errors.push(
                "status must be one of: completed, shipped, pending, cancelled".to_string(),
            );
        }
    }

    errors
}

fn check_text(errors: &mut Vec<String>, field: &str, value: &Option<String>, required: bool) {
    match value {
        None if required => errors.push(format!("{field} is required")),
        Some(text) if text.trim().is_empty() => {
            errors.push(format!("{field} must not be empty"));
        }
        _ => {}
    }
}

fn check_amount(errors: &mut Vec<String>, field: &str, value: Option<f64>, required: bool) {
    match value {
        None if required => errors.push(format!("{field} is required")),
        Some(amount) if amount < 0.0 => {
            errors.push(format!("{field} must be greater than or equal to 0"));
        }
        _ => {}
    }
}
