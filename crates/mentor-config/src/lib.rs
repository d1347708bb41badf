//! Mentor configuration system.
//!
//! Provides TOML-based configuration for the model and logging, plus the
//! credential resolver that looks up the Gemini API key in the environment.
//! All config sections use defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mentor_config::{load_config, resolve_api_key};
//!
//! let config = load_config().expect("failed to load config");
//! let connected = resolve_api_key().is_some();
//! println!("model {} (connected: {connected})", config.model.name);
//! ```

pub mod credentials;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use credentials::{resolve_api_key, CredentialResolver, CredentialSource};
pub use schema::{LogLevel, LoggingConfig, MentorConfig, ModelConfig};

use std::path::Path;

use mentor_common::ConfigError;

/// Load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, creating a default
/// if none exists, and validates the result.
pub fn load_config() -> Result<MentorConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path. The file must exist.
pub fn load_config_from(path: &Path) -> Result<MentorConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &MentorConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
