//! Configuration file parsing for the server.
//!
//! Loads settings from TOML files with environment-variable fallbacks for
//! the two credentials. Both credentials are validated for presence before
//! the server binds; a missing token is a startup failure, never a runtime
//! crash mid-request.

use scribe_pipeline::PipelineConfig;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Environment variable carrying the document-store token
pub const STORE_TOKEN_ENV: &str = "SCRIBE_STORE_TOKEN";

/// Environment variable carrying the generator API key
pub const GENERATOR_KEY_ENV: &str = "SCRIBE_GENERATOR_API_KEY";

/// Server configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Missing required field
    #[error("Missing required configuration field: {0}")]
    MissingField(String),

    /// A field is present but invalid
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Server configuration loaded from TOML and the environment
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1")
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Bind port (e.g., 8080)
    #[serde(default = "default_bind_port")]
    pub bind_port: u16,

    /// Document-store collaborator settings
    #[serde(default)]
    pub store: StoreConfig,

    /// Generator collaborator settings
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Pipeline tunables
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

/// Document-store collaborator settings
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Auth token; falls back to `SCRIBE_STORE_TOKEN`
    #[serde(default)]
    pub token: String,

    /// Store API endpoint
    #[serde(default = "default_store_endpoint")]
    pub endpoint: String,
}

/// Generator collaborator settings
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    /// API key; falls back to `SCRIBE_GENERATOR_API_KEY`
    #[serde(default)]
    pub api_key: String,

    /// Generator API endpoint
    #[serde(default = "default_generator_endpoint")]
    pub endpoint: String,

    /// Model used for completions
    #[serde(default = "default_model")]
    pub model: String,
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_bind_port() -> u16 {
    8080
}

fn default_store_endpoint() -> String {
    scribe_store::notion::DEFAULT_ENDPOINT.to_string()
}

fn default_generator_endpoint() -> String {
    scribe_llm::openai::DEFAULT_ENDPOINT.to_string()
}

fn default_model() -> String {
    scribe_llm::openai::DEFAULT_MODEL.to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            endpoint: default_store_endpoint(),
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: default_generator_endpoint(),
            model: default_model(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file, then apply env fallbacks and validate
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: ServerConfig = toml::from_str(&contents)?;
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Build configuration from defaults and the environment alone
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = ServerConfig {
            bind_address: default_bind_address(),
            bind_port: default_bind_port(),
            store: StoreConfig::default(),
            generator: GeneratorConfig::default(),
            pipeline: PipelineConfig::default(),
        };
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    fn apply_env(&mut self) {
        if self.store.token.is_empty() {
            if let Ok(token) = std::env::var(STORE_TOKEN_ENV) {
                self.store.token = token;
            }
        }
        if self.generator.api_key.is_empty() {
            if let Ok(key) = std::env::var(GENERATOR_KEY_ENV) {
                self.generator.api_key = key;
            }
        }
    }

    /// Validate credential presence and pipeline tunables
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store.token.is_empty() {
            return Err(ConfigError::MissingField("store.token".to_string()));
        }
        if self.generator.api_key.is_empty() {
            return Err(ConfigError::MissingField("generator.api_key".to_string()));
        }
        self.pipeline.validate().map_err(ConfigError::Invalid)?;
        Ok(())
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_toml() {
        let toml = r#"
            bind_address = "0.0.0.0"
            bind_port = 9000

            [store]
            token = "secret-store-token"
            endpoint = "http://localhost:7001"

            [generator]
            api_key = "sk-test"
            model = "gpt-4o"

            [pipeline]
            page_size = 50
            prompt_text_cap = 15000
            append_header = false
        "#;

        let config: ServerConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.bind_address, "0.0.0.0");
        assert_eq!(config.bind_port, 9000);
        assert_eq!(config.store.token, "secret-store-token");
        assert_eq!(config.store.endpoint, "http://localhost:7001");
        assert_eq!(config.generator.model, "gpt-4o");
        assert_eq!(config.pipeline.page_size, 50);
        assert!(!config.pipeline.append_header);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_fill_missing_sections() {
        let toml = r#"
            [store]
            token = "t"

            [generator]
            api_key = "k"
        "#;

        let config: ServerConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.pipeline.page_size, 100);
        assert_eq!(config.generator.model, default_model());
    }

    #[test]
    fn test_missing_store_token_rejected() {
        let toml = r#"
            [generator]
            api_key = "k"
        "#;

        let config: ServerConfig = toml::from_str(toml).unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::MissingField(field) if field == "store.token"));
    }

    #[test]
    fn test_missing_generator_key_rejected() {
        let toml = r#"
            [store]
            token = "t"
        "#;

        let config: ServerConfig = toml::from_str(toml).unwrap();
        let err = config.validate().unwrap_err();
        assert!(
            matches!(err, ConfigError::MissingField(field) if field == "generator.api_key")
        );
    }

    #[test]
    fn test_invalid_pipeline_rejected() {
        let toml = r#"
            [store]
            token = "t"

            [generator]
            api_key = "k"

            [pipeline]
            page_size = 0
        "#;

        let config: ServerConfig = toml::from_str(toml).unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }
}
