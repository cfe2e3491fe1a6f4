// API-facing error conversions
pub mod items;
