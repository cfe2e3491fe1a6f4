// Wire types exposed through the OpenAPI surface
pub mod common;
pub mod item_responses;
pub mod items;

pub use common::HealthResponse;
pub use item_responses::{
    CreateItemApiResponse, DeleteItemApiResponse, GetItemApiResponse, ListItemsApiResponse,
    UpdateItemApiResponse,
};
pub use items::{
    CreateItemDto, ErrorCode, ErrorEnvelope, Item, ItemEnvelope, ItemListEnvelope,
    MessageEnvelope, MessageResponse,
};
