// ABOUTME: Configuration loading and validation for the greeter server.
// ABOUTME: Reads GREETER_* environment variables into listener and route options.

use thiserror::Error;

use crate::listener::{DEFAULT_LISTENER_NAME, ListenerConfig};

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not a valid boolean: {value:?} (expected true/false, 1/0, yes/no)")]
    InvalidFlag { var: &'static str, value: String },

    #[error("GREETER_LISTENER must not be empty")]
    EmptyListenerName,
}

/// Which variant of the service to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceOptions {
    /// Send the resolved name through the injected Reverser before greeting.
    pub reverse: bool,
    /// Register the /healthz route.
    pub healthz: bool,
}

impl Default for ServiceOptions {
    fn default() -> Self {
        Self {
            reverse: false,
            healthz: true,
        }
    }
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreeterConfig {
    pub listener: ListenerConfig,
    pub options: ServiceOptions,
}

impl GreeterConfig {
    /// Load configuration from environment variables with sensible defaults.
    ///
    /// Environment variables:
    /// - GREETER_LISTENER: logical listener name (default: lis)
    /// - GREETER_LOCAL_ADDRESS: host:port to bind (default: an ephemeral localhost port)
    /// - GREETER_REVERSE: reverse names before greeting (default: false)
    /// - GREETER_HEALTHZ: serve /healthz (default: true)
    pub fn from_env() -> Result<Self, ConfigError> {
        let name = std::env::var("GREETER_LISTENER")
            .unwrap_or_else(|_| DEFAULT_LISTENER_NAME.to_string());
        if name.trim().is_empty() {
            return Err(ConfigError::EmptyListenerName);
        }

        let local_address = std::env::var("GREETER_LOCAL_ADDRESS")
            .ok()
            .filter(|a| !a.is_empty());

        let defaults = ServiceOptions::default();
        let reverse = env_flag("GREETER_REVERSE", defaults.reverse)?;
        let healthz = env_flag("GREETER_HEALTHZ", defaults.healthz)?;

        Ok(Self {
            listener: ListenerConfig {
                name,
                local_address,
            },
            options: ServiceOptions { reverse, healthz },
        })
    }
}

fn env_flag(var: &'static str, default: bool) -> Result<bool, ConfigError> {
    match std::env::var(var) {
        Ok(value) if value.is_empty() => Ok(default),
        Ok(value) => parse_flag(&value).ok_or(ConfigError::InvalidFlag { var, value }),
        Err(_) => Ok(default),
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
