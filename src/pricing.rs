use crate::models::OrderItem;

/// Final amount for an order: items subtotal minus discount plus shipping
/// fee plus tax. Plain f64 arithmetic, no rounding policy.
pub fn calculate_total_amount(
    items: &[OrderItem],
    discount: f64,
    shipping_fee: f64,
    tax: f64,
) -> f64 {
    let items_total: f64 = items
        .iter()
        .map(|item| item.price * f64::from(item.quantity))
        .sum();
    items_total - discount + shipping_fee + tax
}
