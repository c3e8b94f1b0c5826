use super::error::ApiError;
use super::types::Item;
use super::validation::validate_item;
use crate::storage::{Filter, SharedStore};

use axum::extract::Path;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::{Extension, Json};

pub async fn handle_list_items(
    Extension(store): Extension<SharedStore>,
) -> Result<Json<Vec<Item>>, ApiError> {
    let items = store
        .find(&Filter::all())
        .await?
        .into_iter()
        .map(Item::from_document)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(items))
}

pub async fn handle_get_item(
    Path(id): Path<String>,
    Extension(store): Extension<SharedStore>,
) -> Result<Json<Item>, ApiError> {
    match store.find_by_id(&id).await? {
        Some(document) => Ok(Json(Item::from_document(document)?)),
        None => Err(ApiError::NotFound),
    }
}

pub async fn handle_create_item(
    Extension(store): Extension<SharedStore>,
    Json(item): Json<Item>,
) -> Result<impl IntoResponse, ApiError> {
    validate_item(&item).map_err(ApiError::Validation)?;

    let mut created = Item { id: None, ..item };
    let id = store.insert_one(created.to_document()?).await?;
    tracing::debug!("Created item {}", id);

    let location = format!("/items/{}", id);
    created.id = Some(id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

pub async fn handle_replace_item(
    Path(id): Path<String>,
    Extension(store): Extension<SharedStore>,
    Json(item): Json<Item>,
) -> Result<StatusCode, ApiError> {
    validate_item(&item).map_err(ApiError::Validation)?;

    let outcome = store.replace_one(&id, item.to_document()?).await?;
    if outcome.matched_count == 0 {
        return Err(ApiError::NotFound);
    }

    tracing::debug!("Replaced item {} (modified={})", id, outcome.modified_count);
    Ok(StatusCode::NO_CONTENT)
}

pub async fn handle_delete_item(
    Path(id): Path<String>,
    Extension(store): Extension<SharedStore>,
) -> Result<StatusCode, ApiError> {
    let outcome = store.delete_one(&id).await?;
    if outcome.deleted_count == 0 {
        return Err(ApiError::NotFound);
    }

    tracing::debug!("Deleted item {}", id);
    Ok(StatusCode::NO_CONTENT)
}
