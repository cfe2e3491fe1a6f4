// Stores layer - Owned in-memory state
pub mod item_store;

pub use item_store::ItemStore;
