use poem_openapi::{payload::Json, ApiResponse};

use crate::types::dto::items::{
    ErrorCode, ErrorEnvelope, ItemEnvelope, ItemListEnvelope, MessageEnvelope,
};

/// API response for listing items
#[derive(ApiResponse, Debug)]
pub enum ListItemsApiResponse {
    /// Successfully retrieved items
    #[oai(status = 200)]
    Ok(Json<ItemListEnvelope>),
}

/// API response for creating an item
#[derive(ApiResponse, Debug)]
#[oai(bad_request_handler = "create_item_bad_request")]
pub enum CreateItemApiResponse {
    /// Item successfully created
    #[oai(status = 201)]
    Created(Json<ItemEnvelope>),

    /// Validation failed
    #[oai(status = 400)]
    BadRequest(Json<ErrorEnvelope>),

    /// An item with this name already exists
    #[oai(status = 409)]
    Conflict(Json<ErrorEnvelope>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorEnvelope>),
}

/// API response for fetching a single item
#[derive(ApiResponse, Debug)]
pub enum GetItemApiResponse {
    /// Item found
    #[oai(status = 200)]
    Ok(Json<ItemEnvelope>),

    /// Item not found
    #[oai(status = 404)]
    NotFound(Json<ErrorEnvelope>),
}

/// API response for updating an item
#[derive(ApiResponse, Debug)]
#[oai(bad_request_handler = "update_item_bad_request")]
pub enum UpdateItemApiResponse {
    /// Item successfully updated
    #[oai(status = 200)]
    Ok(Json<ItemEnvelope>),

    /// Validation failed
    #[oai(status = 400)]
    BadRequest(Json<ErrorEnvelope>),

    /// Item not found
    #[oai(status = 404)]
    NotFound(Json<ErrorEnvelope>),

    /// Another item already uses this name
    #[oai(status = 409)]
    Conflict(Json<ErrorEnvelope>),
}

/// API response for deleting an item
#[derive(ApiResponse, Debug)]
pub enum DeleteItemApiResponse {
    /// Item deleted
    #[oai(status = 200)]
    Ok(Json<MessageEnvelope>),

    /// Item not found
    #[oai(status = 404)]
    NotFound(Json<ErrorEnvelope>),
}

/// Envelope for request bodies rejected before they reach the store
///
/// Covers malformed JSON, missing fields and unknown fields.
pub fn body_validation_envelope(err: &poem::Error) -> ErrorEnvelope {
    ErrorEnvelope::new(
        ErrorCode::ValidationError,
        "Validation failed: name and description are required",
    )
    .with_details(err.to_string())
}

fn create_item_bad_request(err: poem::Error) -> CreateItemApiResponse {
    tracing::debug!("Rejected create item body: {}", err);
    CreateItemApiResponse::BadRequest(Json(body_validation_envelope(&err)))
}

fn update_item_bad_request(err: poem::Error) -> UpdateItemApiResponse {
    tracing::debug!("Rejected update item body: {}", err);
    UpdateItemApiResponse::BadRequest(Json(body_validation_envelope(&err)))
}
