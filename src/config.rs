//! Chat transport configuration.
//!
//! Credentials and endpoints are carried by an explicit [`ChatConfig`] that
//! is handed to the transport layer at construction time; nothing reads
//! ambient state after loading. Loading is layered: built-in defaults, an
//! optional TOML file, then a `SAVANT_`-prefixed environment overlay.

use crate::error::SavantError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for the chat-completion transport and the transcript sink.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// API key sent as a bearer token with every request.
    #[serde(default)]
    pub api_key: String,

    /// Chat-completions endpoint URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Directory receiving one transcript artifact per invocation.
    #[serde(default = "default_transcript_dir")]
    pub transcript_dir: PathBuf,
}

fn default_endpoint() -> String {
    crate::transport::openai::OPENAI_CHAT_COMPLETIONS_URL.to_string()
}

fn default_transcript_dir() -> PathBuf {
    PathBuf::from("logs")
}

impl ChatConfig {
    /// Configuration with the given key and defaults for everything else.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: default_endpoint(),
            transcript_dir: default_transcript_dir(),
        }
    }

    /// Load configuration from an optional TOML file and the environment.
    ///
    /// Environment keys use the `SAVANT_` prefix (`SAVANT_API_KEY`,
    /// `SAVANT_ENDPOINT`, ...). An empty key falls back to
    /// `OPENAI_API_KEY`; a key must come from somewhere.
    pub fn load(file: Option<&Path>) -> Result<Self, SavantError> {
        let mut builder = config::Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path.to_path_buf()));
        }
        builder = builder.add_source(
            config::Environment::with_prefix("SAVANT")
                .separator("__")
                .try_parsing(true),
        );

        let mut loaded: ChatConfig = builder
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| SavantError::Config(format!("Failed to load chat configuration: {}", e)))?;

        if loaded.api_key.is_empty() {
            if let Ok(key) = std::env::var("OPENAI_API_KEY") {
                loaded.api_key = key;
            }
        }
        if loaded.api_key.is_empty() {
            return Err(SavantError::Config(
                "API key required (set api_key in the config file, SAVANT_API_KEY, or OPENAI_API_KEY)"
                    .to_string(),
            ));
        }

        Ok(loaded)
    }
}

/// Default config file location in the platform config directory.
pub fn default_config_path() -> Result<PathBuf, SavantError> {
    Ok(project_dirs()?.config_dir().join("config.toml"))
}

/// Default backing-store location in the platform data directory.
pub fn default_registry_path() -> Result<PathBuf, SavantError> {
    Ok(project_dirs()?.data_dir().join("experts.json"))
}

fn project_dirs() -> Result<directories::ProjectDirs, SavantError> {
    directories::ProjectDirs::from("", "savant", "savant").ok_or_else(|| {
        SavantError::Config("Could not determine platform directories (HOME not set)".to_string())
    })
}
