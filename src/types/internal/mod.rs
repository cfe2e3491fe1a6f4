// Internal domain types, never serialized directly
pub mod item;

pub use item::ItemRecord;
