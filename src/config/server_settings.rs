use std::fmt;
use std::sync::Arc;

use crate::config::config_spec::ConfigSpec;
use crate::config::errors::ApplicationError;
use crate::config::{EnvironmentProvider, SystemEnvironment};

pub const DEFAULT_CORS_ORIGINS: &str = "http://localhost:5173,http://localhost:4200";

/// Settings needed to start the HTTP server
#[derive(Clone)]
pub struct ServerSettings {
    server_host: String,
    server_port: u16,
    public_url: String,
    cors_origins: Vec<String>,
    seed_sample_item: bool,
}

impl ServerSettings {
    /// Load server settings from the given environment provider
    pub fn from_env_provider(
        env_provider: Arc<dyn EnvironmentProvider + Send + Sync>,
    ) -> Result<Self, ApplicationError> {
        let env = env_provider.as_ref();

        let server_host = ConfigSpec::new()
            .env_override("HOST")
            .default_value("0.0.0.0")
            .validator(ConfigSpec::validate_host_address)
            .load(env)?;

        let port_value = ConfigSpec::new()
            .env_override("PORT")
            .default_value("3000")
            .load(env)?;
        let server_port = ConfigSpec::parse_port(&port_value, "PORT")?;

        let default_public_url = format!("http://localhost:{}", server_port);
        let public_url = ConfigSpec::new()
            .env_override("PUBLIC_URL")
            .default_value(&default_public_url)
            .min_length(1)
            .load(env)?
            .trim_end_matches('/')
            .to_string();

        let cors_value = ConfigSpec::new()
            .env_override("CORS_ORIGINS")
            .default_value(DEFAULT_CORS_ORIGINS)
            .load(env)?;
        let cors_origins = ConfigSpec::parse_list(&cors_value);

        let seed_value = ConfigSpec::new()
            .env_override("SEED_SAMPLE_ITEM")
            .default_value("true")
            .load(env)?;
        let seed_sample_item = ConfigSpec::parse_bool(&seed_value, "SEED_SAMPLE_ITEM")?;

        Ok(Self {
            server_host,
            server_port,
            public_url,
            cors_origins,
            seed_sample_item,
        })
    }

    /// Convenience method that uses the system environment provider
    pub fn from_env() -> Result<Self, ApplicationError> {
        Self::from_env_provider(Arc::new(SystemEnvironment))
    }

    pub fn server_host(&self) -> &str {
        &self.server_host
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Externally reachable base URL, without trailing slash
    pub fn public_url(&self) -> &str {
        &self.public_url
    }

    pub fn cors_origins(&self) -> &[String] {
        &self.cors_origins
    }

    pub fn seed_sample_item(&self) -> bool {
        self.seed_sample_item
    }
}

impl fmt::Debug for ServerSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerSettings")
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("public_url", &self.public_url)
            .field("cors_origins", &self.cors_origins)
            .field("seed_sample_item", &self.seed_sample_item)
            .finish()
    }
}
