use super::validation::ValidationErrors;
use crate::storage::StorageError;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Item not found")]
    NotFound,

    #[error("Validation failed: {0:?}")]
    Validation(ValidationErrors),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Body of a 400 response for a rejected item.
#[derive(Debug, Serialize, Deserialize)]
pub struct ValidationProblem {
    pub title: String,
    pub status: u16,
    pub errors: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::Validation(errors) => {
                tracing::debug!("Rejected item: {:?}", errors.errors);
                (
                    StatusCode::BAD_REQUEST,
                    Json(ValidationProblem {
                        title: "One or more validation errors occurred.".to_string(),
                        status: StatusCode::BAD_REQUEST.as_u16(),
                        errors: errors.errors,
                    }),
                )
                    .into_response()
            }
            ApiError::Storage(e) => {
                tracing::error!("Storage operation failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        error: "internal storage error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
