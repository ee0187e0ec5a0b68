use serde::{Deserialize, Serialize};

/// One catalog entry. Read-only from the order subsystem's perspective;
/// used as a lookup table keyed by id during item enrichment.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
}
