use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use folio_contact::{ContactDesk, FormOptions, StatusBoard, Web3FormsRelay};
use serde::Deserialize;
use std::{env, time::Duration};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub relay: RelayConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub site: SiteConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RelayConfig {
    #[serde(default = "default_relay_endpoint")]
    pub endpoint: String,
    /// Web3Forms access key attached to every submission
    #[serde(default)]
    pub access_key: String,
}

fn default_relay_endpoint() -> String {
    Web3FormsRelay::DEFAULT_ENDPOINT.to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ContactConfig {
    #[serde(default = "default_status_clear_ms")]
    pub status_clear_ms: u64,
    /// Keep typed values when the relay rejects a message or cannot be reached
    #[serde(default)]
    pub retain_on_failure: bool,
    #[serde(default = "default_visitor_idle_secs")]
    pub visitor_idle_secs: u64,
    /// Upper bound on contact forms kept in memory
    #[serde(default = "default_max_visits")]
    pub max_visits: usize,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            status_clear_ms: default_status_clear_ms(),
            retain_on_failure: false,
            visitor_idle_secs: default_visitor_idle_secs(),
            max_visits: default_max_visits(),
        }
    }
}

fn default_status_clear_ms() -> u64 {
    StatusBoard::DEFAULT_CLEAR_AFTER.as_millis() as u64
}

fn default_visitor_idle_secs() -> u64 {
    ContactDesk::DEFAULT_IDLE_AFTER.as_secs()
}

fn default_max_visits() -> usize {
    ContactDesk::DEFAULT_MAX_VISITS
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SiteConfig {
    /// TOML file replacing the embedded portfolio content
    #[serde(default)]
    pub content_path: Option<String>,
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (FOLIO__RELAY__ACCESS_KEY, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("relay.endpoint", Web3FormsRelay::DEFAULT_ENDPOINT)?
            .set_default("relay.access_key", "")?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, ignored if not found
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("FOLIO")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(access_key) = env::var("WEB3FORMS_ACCESS_KEY") {
            builder = builder.set_override("relay.access_key", access_key)?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.relay.access_key.trim().is_empty() {
            return Err("Relay access_key must be set".to_string());
        }

        match url::Url::parse(&self.relay.endpoint) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => {
                return Err(format!(
                    "Relay endpoint must be http(s), got scheme {}",
                    url.scheme()
                ));
            }
            Err(e) => return Err(format!("Relay endpoint is not a valid URL: {e}")),
        }

        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.contact.status_clear_ms == 0 {
            return Err("Contact status_clear_ms must be greater than 0".to_string());
        }
        if self.contact.max_visits == 0 {
            return Err("Contact max_visits must be greater than 0".to_string());
        }

        Ok(())
    }

    pub fn form_options(&self) -> FormOptions {
        FormOptions {
            access_key: self.relay.access_key.to_owned(),
            retain_on_failure: self.contact.retain_on_failure,
            status_clear_after: Duration::from_millis(self.contact.status_clear_ms),
        }
    }

    pub fn visitor_idle_after(&self) -> Duration {
        Duration::from_secs(self.contact.visitor_idle_secs)
    }
}
