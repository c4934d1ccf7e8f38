//! Configuration management for ftpgate
//!
//! Loads the startup configuration from `config.toml` with environment
//! overrides. All values are fixed for the process lifetime; there is no
//! runtime reconfiguration.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::server::ServerIdentity;

/// Server startup configuration, loaded once during initialization.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// IP address to bind the control connection
    pub bind_address: String,

    /// Port for the control connection (1-65535)
    pub port: u16,

    /// Directory path presented to clients in PWD replies. Never used for
    /// real file access.
    pub root_label: String,

    /// The single accepted username
    pub username: String,

    /// The single accepted password
    pub password: String,

    /// Maximum accepted length of one command line
    pub max_command_length: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 2121,
            root_label: "/".to_string(),
            username: "user".to_string(),
            password: "pass".to_string(),
            max_command_length: 512,
        }
    }
}

impl ServerConfig {
    /// Load configuration from config.toml with FTPGATE_* environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config"))
            .add_source(Environment::with_prefix("FTPGATE"))
            .build()?;

        let config: ServerConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::Message("port cannot be 0".into()));
        }

        if self.root_label.is_empty() {
            return Err(ConfigError::Message("root_label cannot be empty".into()));
        }

        if self.username.is_empty() || self.password.is_empty() {
            return Err(ConfigError::Message(
                "username and password cannot be empty".into(),
            ));
        }

        if self.max_command_length == 0 {
            return Err(ConfigError::Message(
                "max_command_length must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Get bind address and port as a socket address string
    pub fn control_socket(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }

    /// Build the immutable identity shared by all sessions
    pub fn identity(&self) -> ServerIdentity {
        ServerIdentity {
            root_label: self.root_label.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }
}
