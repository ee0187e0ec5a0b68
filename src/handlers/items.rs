use axum::Json;
use axum::extract::State;

use crate::AppState;
use crate::error::ApiError;
use crate::models::CatalogItem;
use crate::store::Collection;

/// Full catalog, as stored.
pub async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<CatalogItem>>, ApiError> {
    let _guard = state.store.lock(Collection::Items).await;
    let items: Vec<CatalogItem> = state.store.load(Collection::Items)?;
    Ok(Json(items))
}
