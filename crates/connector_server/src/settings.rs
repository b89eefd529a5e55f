//! Application settings, layered from the environment config file and
//! `CONNECTOR__`-prefixed environment variables.

use connector_core::configuration::ConnectorSettings;
use connector_env::logger::config::Log;
use masking::Secret;
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: Server,
    #[serde(default)]
    pub log: Log,
    pub platform: PlatformSettings,
    pub marketplace: MarketplaceSettings,
    pub connector: ConnectorSettings,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Platform API endpoint and credentials.
#[derive(Clone, Debug, Deserialize)]
pub struct PlatformSettings {
    pub base_url: String,
    pub app_key: String,
    pub app_token: Secret<String>,
}

/// Marketplace API endpoint and credentials.
#[derive(Clone, Debug, Deserialize)]
pub struct MarketplaceSettings {
    pub base_url: String,
    pub api_token: Secret<String>,
}

impl Settings {
    /// Loads `config/<env>.toml` relative to the workspace root, then applies
    /// environment overrides (`CONNECTOR__SERVER__PORT=8081` and the like).
    pub fn new() -> Result<Self, config::ConfigError> {
        let environment = connector_env::which();
        let config_path = connector_env::workspace_path()
            .join("config")
            .join(environment.config_file());

        config::Config::builder()
            .add_source(config::File::from(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("CONNECTOR")
                    .try_parsing(true)
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }
}
