use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};
use crate::stores::ItemStore;
use crate::types::dto::{
    CreateItemApiResponse, CreateItemDto, DeleteItemApiResponse, GetItemApiResponse, Item,
    ItemEnvelope, ItemListEnvelope, ListItemsApiResponse, MessageEnvelope, MessageResponse,
    UpdateItemApiResponse,
};
use std::sync::Arc;

/// Items CRUD API
pub struct ItemsApi {
    item_store: Arc<ItemStore>,
}

impl ItemsApi {
    /// Create a new ItemsApi backed by the given store
    pub fn new(item_store: Arc<ItemStore>) -> Self {
        Self { item_store }
    }
}

/// API tags for item endpoints
#[derive(Tags)]
enum ApiTags {
    /// Item management endpoints
    Items,
}

#[OpenApi]
impl ItemsApi {
    /// Get all items
    ///
    /// Returns every item in creation order
    #[oai(path = "/items", method = "get", tag = "ApiTags::Items")]
    async fn list_items(&self) -> ListItemsApiResponse {
        let items = self.item_store.list().into_iter().map(Item::from).collect();

        ListItemsApiResponse::Ok(Json(ItemListEnvelope { data: items }))
    }

    /// Create a new item
    ///
    /// Accepts item details and returns the created item with generated ID and timestamp
    #[oai(path = "/items", method = "post", tag = "ApiTags::Items")]
    async fn create_item(&self, body: Json<CreateItemDto>) -> CreateItemApiResponse {
        match self.item_store.create(&body) {
            Ok(record) => CreateItemApiResponse::Created(Json(ItemEnvelope {
                data: record.into(),
            })),
            Err(err) => err.into(),
        }
    }

    /// Get item by ID
    #[oai(path = "/items/:id", method = "get", tag = "ApiTags::Items")]
    async fn get_item(&self, id: Path<String>) -> GetItemApiResponse {
        match self.item_store.get_by_id(&id) {
            Ok(record) => GetItemApiResponse::Ok(Json(ItemEnvelope {
                data: record.into(),
            })),
            Err(err) => err.into(),
        }
    }

    /// Update an item
    ///
    /// Replaces name and description; id and creation time are kept
    #[oai(path = "/items/:id", method = "put", tag = "ApiTags::Items")]
    async fn update_item(
        &self,
        id: Path<String>,
        body: Json<CreateItemDto>,
    ) -> UpdateItemApiResponse {
        match self.item_store.update(&id, &body) {
            Ok(record) => UpdateItemApiResponse::Ok(Json(ItemEnvelope {
                data: record.into(),
            })),
            Err(err) => err.into(),
        }
    }

    /// Delete an item
    #[oai(path = "/items/:id", method = "delete", tag = "ApiTags::Items")]
    async fn delete_item(&self, id: Path<String>) -> DeleteItemApiResponse {
        match self.item_store.delete(&id) {
            Ok(_) => DeleteItemApiResponse::Ok(Json(MessageEnvelope {
                data: MessageResponse {
                    message: "Item deleted successfully".to_string(),
                },
            })),
            Err(err) => err.into(),
        }
    }
}
