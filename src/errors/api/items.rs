use poem_openapi::payload::Json;

use crate::errors::internal::ItemStoreError;
use crate::types::dto::{
    CreateItemApiResponse, DeleteItemApiResponse, ErrorCode, ErrorEnvelope, GetItemApiResponse,
    UpdateItemApiResponse,
};

// Conversion point from store failures to item endpoint responses.
//
// Each endpoint only declares the statuses its store operation can produce. Only create
// allocates ids, so only create reports invariant violations, as a generic 500 that keeps
// internal details away from the client. A variant an operation never returns is logged
// and folded into that endpoint's closest status.

impl From<&ItemStoreError> for ErrorEnvelope {
    fn from(err: &ItemStoreError) -> Self {
        match err {
            ItemStoreError::InvariantViolation(_) => internal_error_envelope(),
            _ => ErrorEnvelope::new(err.code(), err.to_string()),
        }
    }
}

fn internal_error_envelope() -> ErrorEnvelope {
    ErrorEnvelope::new(ErrorCode::InternalError, "An internal error occurred")
}

fn log_internal(operation: &str, err: &ItemStoreError) {
    tracing::error!("Unexpected error in {}: {}", operation, err);
}

impl From<ItemStoreError> for CreateItemApiResponse {
    fn from(err: ItemStoreError) -> Self {
        match &err {
            ItemStoreError::Validation => CreateItemApiResponse::BadRequest(Json((&err).into())),
            ItemStoreError::ItemExists { .. } => {
                CreateItemApiResponse::Conflict(Json((&err).into()))
            }
            _ => {
                log_internal("create_item", &err);
                CreateItemApiResponse::InternalError(Json(internal_error_envelope()))
            }
        }
    }
}

impl From<ItemStoreError> for GetItemApiResponse {
    fn from(err: ItemStoreError) -> Self {
        match &err {
            ItemStoreError::ItemNotFound { .. } => {
                GetItemApiResponse::NotFound(Json((&err).into()))
            }
            // lookups never validate, rename or allocate
            ItemStoreError::Validation
            | ItemStoreError::ItemExists { .. }
            | ItemStoreError::InvariantViolation(_) => {
                log_internal("get_item", &err);
                GetItemApiResponse::NotFound(Json((&err).into()))
            }
        }
    }
}

impl From<ItemStoreError> for UpdateItemApiResponse {
    fn from(err: ItemStoreError) -> Self {
        match &err {
            ItemStoreError::Validation => UpdateItemApiResponse::BadRequest(Json((&err).into())),
            ItemStoreError::ItemNotFound { .. } => {
                UpdateItemApiResponse::NotFound(Json((&err).into()))
            }
            ItemStoreError::ItemExists { .. } => {
                UpdateItemApiResponse::Conflict(Json((&err).into()))
            }
            // update keeps the existing id
            ItemStoreError::InvariantViolation(_) => {
                log_internal("update_item", &err);
                UpdateItemApiResponse::Conflict(Json((&err).into()))
            }
        }
    }
}

impl From<ItemStoreError> for DeleteItemApiResponse {
    fn from(err: ItemStoreError) -> Self {
        match &err {
            ItemStoreError::ItemNotFound { .. } => {
                DeleteItemApiResponse::NotFound(Json((&err).into()))
            }
            ItemStoreError::Validation
            | ItemStoreError::ItemExists { .. }
            | ItemStoreError::InvariantViolation(_) => {
                log_internal("delete_item", &err);
                DeleteItemApiResponse::NotFound(Json((&err).into()))
            }
        }
    }
}
