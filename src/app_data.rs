use std::sync::Arc;

use crate::config::ServerSettings;
use crate::errors::ItemStoreError;
use crate::stores::ItemStore;

/// Process-wide application data
///
/// Created once in main.rs (or once per test) and handed to the API layer. The item
/// store lives here instead of in a global so each instance starts from a clean slate.
pub struct AppData {
    pub settings: ServerSettings,
    pub item_store: Arc<ItemStore>,
}

impl AppData {
    /// Build the stores and seed the demo item when enabled
    ///
    /// # Errors
    ///
    /// Returns `ItemStoreError` when seeding is rejected by the store
    pub fn init(settings: ServerSettings) -> Result<Self, ItemStoreError> {
        tracing::info!("Initializing AppData...");

        let item_store = Arc::new(ItemStore::new());

        if settings.seed_sample_item() {
            let sample = item_store.seed_sample_item()?;
            tracing::debug!("Seeded sample item {}", sample.id);
        }

        tracing::info!("AppData initialization complete");

        Ok(Self {
            settings,
            item_store,
        })
    }
}
