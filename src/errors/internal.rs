use thiserror::Error;

use crate::types::dto::ErrorCode;

/// Failure branch of every item store operation
///
/// The store never panics on bad input; each rejected request comes back as one of
/// these variants and leaves the collection untouched. API endpoints convert them to
/// response envelopes in `errors::api::items`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ItemStoreError {
    /// `name` or `description` is missing or empty
    #[error("Validation failed: name and description are required")]
    Validation,

    /// Another item already uses this name
    #[error("Item with this name already exists")]
    ItemExists { name: String },

    /// No item has this id
    #[error("Item not found")]
    ItemNotFound { id: String },

    /// Store state contradicts its own invariants (programming defect)
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

impl ItemStoreError {
    /// Error code reported to API clients
    pub fn code(&self) -> ErrorCode {
        match self {
            ItemStoreError::Validation => ErrorCode::ValidationError,
            ItemStoreError::ItemExists { .. } => ErrorCode::ItemExists,
            ItemStoreError::ItemNotFound { .. } => ErrorCode::ItemNotFound,
            ItemStoreError::InvariantViolation(_) => ErrorCode::InternalError,
        }
    }

    pub fn item_exists(name: impl Into<String>) -> Self {
        Self::ItemExists { name: name.into() }
    }

    pub fn item_not_found(id: impl Into<String>) -> Self {
        Self::ItemNotFound { id: id.into() }
    }
}
