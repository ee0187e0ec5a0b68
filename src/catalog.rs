use crate::models::{CatalogItem, OrderItem};

/// Overwrites each line item's name, price and image with the canonical
/// catalog values when an exact id match exists. Client-supplied values
/// survive only for unknown ids; quantity is always taken from the client.
pub fn enrich_items(items: &mut [OrderItem], catalog: &[CatalogItem]) {
    for item in items {
        if let Some(entry) = catalog.iter().find(|existing| existing.id == item.id) {
            item.name = entry.name.clone();
            item.price = entry.price;
            item.image_url = entry.image_url.clone();
        }
    }
}
