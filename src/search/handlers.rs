use super::composer::compose_filter;
use super::types::SearchParams;
use crate::items::error::ApiError;
use crate::items::types::Item;
use crate::storage::SharedStore;

use axum::extract::Query;
use axum::{Extension, Json};

pub async fn handle_search(
    Query(pairs): Query<Vec<(String, String)>>,
    Extension(store): Extension<SharedStore>,
) -> Result<Json<Vec<Item>>, ApiError> {
    let criteria = SearchParams::from_pairs(pairs).criteria();
    let filter = compose_filter(&criteria);
    tracing::debug!("Search {:?} -> {}", criteria, filter.to_query());

    let items = store
        .find(&filter)
        .await?
        .into_iter()
        .map(Item::from_document)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(items))
}
