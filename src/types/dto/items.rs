use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use crate::types::internal::ItemRecord;

/// Request model for creating or updating an item
#[derive(Object, Debug, Clone, Serialize, Deserialize)]
#[oai(deny_unknown_fields)]
pub struct CreateItemDto {
    /// Name of the item, unique across all items
    pub name: String,

    /// Description of the item
    pub description: String,
}

impl CreateItemDto {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Response model representing an item
#[derive(Object, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique identifier for the item
    pub id: String,

    /// Name of the item
    pub name: String,

    /// Description of the item
    pub description: String,

    /// Timestamp when the item was created (ISO 8601 format)
    pub created_at: String,
}

impl From<ItemRecord> for Item {
    fn from(record: ItemRecord) -> Self {
        Self {
            created_at: record.created_at_iso(),
            id: record.id,
            name: record.name,
            description: record.description,
        }
    }
}

/// Machine-readable error code carried by every failure envelope
#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[oai(rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// A required field is missing or empty
    ValidationError,
    /// Another item already uses the requested name
    ItemExists,
    /// No item has the requested id
    ItemNotFound,
    /// The server hit an unexpected condition
    InternalError,
}

/// Success envelope wrapping a single item
#[derive(Object, Debug, Clone, Serialize, Deserialize)]
pub struct ItemEnvelope {
    pub data: Item,
}

/// Success envelope wrapping the ordered item list
#[derive(Object, Debug, Clone, Serialize, Deserialize)]
pub struct ItemListEnvelope {
    pub data: Vec<Item>,
}

/// Confirmation payload returned by delete
#[derive(Object, Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable confirmation
    pub message: String,
}

/// Success envelope wrapping a confirmation message
#[derive(Object, Debug, Clone, Serialize, Deserialize)]
pub struct MessageEnvelope {
    pub data: MessageResponse,
}

/// Failure envelope shared by every item endpoint
#[derive(Object, Debug, Clone, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    /// Human-readable error message
    pub error: String,

    /// Error code identifier
    pub code: ErrorCode,

    /// Parser output for malformed request bodies
    #[oai(skip_serializing_if_is_none)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorEnvelope {
    pub fn new(code: ErrorCode, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code,
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}
