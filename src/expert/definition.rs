//! Expert definitions: one prompting persona and its transport binding.

use crate::error::SavantError;
use crate::expert::{ModelParams, ParamUpdate};
use crate::transcript::TranscriptSink;
use crate::transport::{ChatClient, ChatRequest, ClientResolver};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// Persisted form of an expert: the six serialized fields.
///
/// This is what the registry stores and what round-trips through the
/// authoring workflows. The transport binding is never serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpertRecord {
    pub name: String,
    pub system_message: String,
    pub description: Option<String>,
    pub example_input: Option<String>,
    pub example_output: Option<String>,
    pub model_params: ModelParams,
}

/// A live expert: record fields plus a transport binding.
///
/// The binding is rebuilt through the resolver after every update, so the
/// next invocation always reflects the current parameters. Field access
/// goes through the named update operations; there is no other mutation
/// path.
pub struct ExpertDefinition {
    record: ExpertRecord,
    resolver: Arc<dyn ClientResolver>,
    client: Box<dyn ChatClient>,
    sink: TranscriptSink,
}

impl ExpertDefinition {
    /// Create an expert, filling absent parameters with the defaults.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        system_message: impl Into<String>,
        description: Option<String>,
        example_input: Option<String>,
        example_output: Option<String>,
        model_params: Option<ModelParams>,
        resolver: Arc<dyn ClientResolver>,
        sink: TranscriptSink,
    ) -> Result<Self, SavantError> {
        let record = ExpertRecord {
            name: name.into(),
            system_message: system_message.into(),
            description,
            example_input,
            example_output,
            model_params: model_params.unwrap_or_default(),
        };
        Self::from_record(record, resolver, sink)
    }

    /// Rebuild a live expert from its persisted record.
    pub fn from_record(
        record: ExpertRecord,
        resolver: Arc<dyn ClientResolver>,
        sink: TranscriptSink,
    ) -> Result<Self, SavantError> {
        if record.name.trim().is_empty() {
            return Err(SavantError::Config("Expert name cannot be empty".to_string()));
        }
        let client = resolver.client_for(&record.model_params)?;
        Ok(Self {
            record,
            resolver,
            client,
            sink,
        })
    }

    pub fn name(&self) -> &str {
        &self.record.name
    }

    pub fn system_message(&self) -> &str {
        &self.record.system_message
    }

    pub fn description(&self) -> Option<&str> {
        self.record.description.as_deref()
    }

    pub fn example_input(&self) -> Option<&str> {
        self.record.example_input.as_deref()
    }

    pub fn example_output(&self) -> Option<&str> {
        self.record.example_output.as_deref()
    }

    pub fn model_params(&self) -> &ModelParams {
        &self.record.model_params
    }

    /// Serialized six-field form used for persistence and round-tripping.
    pub fn serialize(&self) -> ExpertRecord {
        self.record.clone()
    }

    /// The system-level instruction sent with every request.
    ///
    /// Regenerated on each call so field edits are reflected immediately.
    /// Absent examples render as the literal `None` marker, which existing
    /// expert prompts were authored against.
    pub fn render_system_content(&self) -> String {
        format!(
            "System Message: {}\n\nExample Input: {}\n\nExample Output: {}",
            self.record.system_message,
            self.record.example_input.as_deref().unwrap_or("None"),
            self.record.example_output.as_deref().unwrap_or("None"),
        )
    }

    /// JSON object of the five editable fields, excluding model parameters.
    ///
    /// Used as the base text of the improvement workflow.
    pub fn editable_fields_literal(&self) -> String {
        serde_json::json!({
            "name": self.record.name,
            "system_message": self.record.system_message,
            "description": self.record.description,
            "example_input": self.record.example_input,
            "example_output": self.record.example_output,
        })
        .to_string()
    }

    /// Send one message and return the response text.
    ///
    /// The exchange is recorded to the transcript sink unconditionally; a
    /// sink failure aborts the call like any other error.
    pub fn invoke(&self, message: &str) -> Result<String, SavantError> {
        tracing::debug!(expert = %self.record.name, "invoking expert");
        let request = ChatRequest {
            system: self.render_system_content(),
            user: message.to_string(),
        };
        let response = self.client.complete(&request)?;
        self.sink.record(&self.record.name, message, &response)?;
        Ok(response)
    }

    /// Send a batch of messages as one transport call.
    ///
    /// Responses come back in message order: `responses[i]` answers
    /// `messages[i]`. The whole batch is recorded as a single artifact.
    pub fn invoke_bulk(&self, messages: &[String]) -> Result<Vec<String>, SavantError> {
        tracing::debug!(expert = %self.record.name, count = messages.len(), "invoking expert in bulk");
        let system = self.render_system_content();
        let requests: Vec<ChatRequest> = messages
            .iter()
            .map(|message| ChatRequest {
                system: system.clone(),
                user: message.clone(),
            })
            .collect();
        let responses = self.client.complete_batch(&requests)?;
        self.sink
            .record_batch(&self.record.name, messages, &responses)?;
        Ok(responses)
    }

    /// Read a file verbatim and send its whole content as one message.
    pub fn invoke_from_file(&self, path: &Path) -> Result<String, SavantError> {
        let message = std::fs::read_to_string(path).map_err(|e| {
            SavantError::FileAccess(format!("Failed to read {}: {}", path.display(), e))
        })?;
        self.invoke(&message)
    }

    /// Update one generation parameter and rebuild the transport binding.
    pub fn update_param(&mut self, update: ParamUpdate) -> Result<(), SavantError> {
        self.record.model_params.apply(update);
        self.rebind()
    }

    pub fn set_system_message(
        &mut self,
        system_message: impl Into<String>,
    ) -> Result<(), SavantError> {
        self.record.system_message = system_message.into();
        self.rebind()
    }

    pub fn set_description(&mut self, description: Option<String>) -> Result<(), SavantError> {
        self.record.description = description;
        self.rebind()
    }

    pub fn set_example_input(&mut self, example_input: Option<String>) -> Result<(), SavantError> {
        self.record.example_input = example_input;
        self.rebind()
    }

    pub fn set_example_output(
        &mut self,
        example_output: Option<String>,
    ) -> Result<(), SavantError> {
        self.record.example_output = example_output;
        self.rebind()
    }

    fn rebind(&mut self) -> Result<(), SavantError> {
        self.client = self.resolver.client_for(&self.record.model_params)?;
        Ok(())
    }
}
