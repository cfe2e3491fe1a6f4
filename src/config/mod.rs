pub mod config_spec;
mod env_provider;
pub mod errors;
mod logging;
mod server_settings;

pub use config_spec::ConfigSpec;
pub use env_provider::{EnvironmentProvider, MockEnvironment, SystemEnvironment};
pub use errors::ApplicationError;
pub use logging::{init_logging, init_logging_with, LoggingConfig, LoggingError};
pub use server_settings::ServerSettings;
