// Common test utilities for integration tests

use std::sync::Arc;

use itty_bitty_api::api::build_app;
use itty_bitty_api::config::{MockEnvironment, ServerSettings};
use itty_bitty_api::AppData;
use poem::test::TestClient;
use poem::Endpoint;

/// Creates application data from the given variables
///
/// Seeding is disabled unless `SEED_SAMPLE_ITEM` is passed explicitly.
pub fn setup_app_data(vars: &[(&str, &str)]) -> AppData {
    let env = MockEnvironment::empty()
        .with_var("SEED_SAMPLE_ITEM", "false")
        .with_vars(vars);
    let settings =
        ServerSettings::from_env_provider(Arc::new(env)).expect("Failed to build test settings");

    AppData::init(settings).expect("Failed to init app data")
}

/// Creates a test client for the full application with an empty store
pub fn setup_test_client() -> TestClient<impl Endpoint> {
    setup_test_client_with(&[])
}

/// Creates a test client for the full application using the given variables
pub fn setup_test_client_with(vars: &[(&str, &str)]) -> TestClient<impl Endpoint> {
    let app_data = setup_app_data(vars);
    TestClient::new(build_app(&app_data))
}
