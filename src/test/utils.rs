// Test utilities shared across unit tests
// Only compiled when running tests

use std::sync::Arc;

use crate::app_data::AppData;
use crate::config::{MockEnvironment, ServerSettings};
use crate::stores::ItemStore;

/// Creates an empty item store
pub fn create_test_store() -> Arc<ItemStore> {
    Arc::new(ItemStore::new())
}

/// Creates settings from the given variables on top of an empty environment
///
/// Seeding is disabled unless the caller sets `SEED_SAMPLE_ITEM` explicitly.
pub fn create_test_settings(vars: &[(&str, &str)]) -> ServerSettings {
    let env = MockEnvironment::empty()
        .with_var("SEED_SAMPLE_ITEM", "false")
        .with_vars(vars);
    ServerSettings::from_env_provider(Arc::new(env)).expect("Failed to build test settings")
}

/// Creates application data with an empty store
pub fn create_test_app_data() -> AppData {
    AppData::init(create_test_settings(&[])).expect("Failed to init test app data")
}
