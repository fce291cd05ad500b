//! Expert registry: persistent, name-keyed collection of expert records.

use crate::error::SavantError;
use crate::expert::{ExpertDefinition, ExpertRecord};
use crate::transcript::TranscriptSink;
use crate::transport::ClientResolver;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Name-keyed collection of serialized experts with an optional backing
/// file.
///
/// When bound to a path, every insertion rewrites the whole file. Deletion
/// touches only the in-memory map; the file keeps the entry until an
/// explicit [`ExpertRegistry::save`].
pub struct ExpertRegistry {
    experts: HashMap<String, ExpertRecord>,
    path: Option<PathBuf>,
    resolver: Arc<dyn ClientResolver>,
    sink: TranscriptSink,
}

impl ExpertRegistry {
    /// Create an empty, unbound registry.
    pub fn new(resolver: Arc<dyn ClientResolver>, sink: TranscriptSink) -> Self {
        Self {
            experts: HashMap::new(),
            path: None,
            resolver,
            sink,
        }
    }

    /// Hydrate a registry from a backing file and bind it to that path.
    ///
    /// A missing, unreadable, or malformed file fails the construction;
    /// there is no partial or best-effort load.
    pub fn load(
        path: impl Into<PathBuf>,
        resolver: Arc<dyn ClientResolver>,
        sink: TranscriptSink,
    ) -> Result<Self, SavantError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            SavantError::RegistryLoad(format!(
                "Failed to read registry file {}: {}",
                path.display(),
                e
            ))
        })?;
        let experts: HashMap<String, ExpertRecord> =
            serde_json::from_str(&content).map_err(|e| {
                SavantError::RegistryLoad(format!(
                    "Failed to parse registry file {}: {}",
                    path.display(),
                    e
                ))
            })?;

        tracing::debug!(path = %path.display(), count = experts.len(), "loaded expert registry");
        Ok(Self {
            experts,
            path: Some(path),
            resolver,
            sink,
        })
    }

    /// Store an expert under its name and rewrite the backing file when one
    /// is bound. Collisions overwrite silently.
    pub fn add_expert(&mut self, expert: &ExpertDefinition) -> Result<(), SavantError> {
        let record = expert.serialize();
        tracing::debug!(name = %record.name, "registering expert");
        self.experts.insert(record.name.clone(), record);
        if let Some(path) = self.path.clone() {
            self.save(&path)?;
        }
        Ok(())
    }

    /// Remove an expert from the in-memory map.
    ///
    /// A bound backing file keeps the entry until an explicit save.
    pub fn delete_expert(&mut self, name: &str) -> Result<(), SavantError> {
        self.experts
            .remove(name)
            .ok_or_else(|| SavantError::NotFound(name.to_string()))?;
        tracing::debug!(%name, "deleted expert");
        Ok(())
    }

    /// Rebuild a live definition, with a fresh transport binding, from the
    /// stored record.
    pub fn get_expert(&self, name: &str) -> Result<ExpertDefinition, SavantError> {
        let record = self
            .experts
            .get(name)
            .ok_or_else(|| SavantError::NotFound(name.to_string()))?;
        ExpertDefinition::from_record(record.clone(), Arc::clone(&self.resolver), self.sink.clone())
    }

    /// Sorted names of all stored experts.
    pub fn list_experts(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.experts.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.experts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.experts.is_empty()
    }

    /// Serialize the whole mapping to `path`, overwriting it.
    pub fn save(&self, path: &Path) -> Result<(), SavantError> {
        let content = serde_json::to_string_pretty(&self.experts)
            .map_err(|e| SavantError::FileAccess(format!("Failed to serialize registry: {}", e)))?;
        std::fs::write(path, content).map_err(|e| {
            SavantError::FileAccess(format!(
                "Failed to write registry file {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(())
    }

    /// The resolver used to rebuild transport bindings.
    pub fn resolver(&self) -> Arc<dyn ClientResolver> {
        Arc::clone(&self.resolver)
    }

    /// The transcript sink shared with reconstructed experts.
    pub fn transcript_sink(&self) -> TranscriptSink {
        self.sink.clone()
    }
}
