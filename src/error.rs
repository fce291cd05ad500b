//! Crate-wide error type.

use thiserror::Error;

/// Errors surfaced by expert, registry, transport, and workflow operations.
#[derive(Debug, Error)]
pub enum SavantError {
    /// Remote chat-completion call failed. Never retried; propagates to the
    /// immediate caller.
    #[error("transport error: {0}")]
    Transport(String),

    /// Backing store, staging file, or transcript artifact was unreadable
    /// or unwritable.
    #[error("file access error: {0}")]
    FileAccess(String),

    /// Backing store exists but could not be read or parsed at construction.
    #[error("registry load error: {0}")]
    RegistryLoad(String),

    /// Lookup of an unknown expert name.
    #[error("expert not found: {0}")]
    NotFound(String),

    /// A model response could not be parsed as an expert definition.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid or missing configuration.
    #[error("configuration error: {0}")]
    Config(String),
}
