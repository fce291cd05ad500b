//! Strict parsing of model responses into expert drafts.

use crate::error::SavantError;
use crate::expert::{ExpertRecord, ModelParams};
use serde::Deserialize;

/// Field set a model must produce to define a new expert.
///
/// Parsed, never evaluated. Unknown fields are rejected; absent optional
/// fields and parameters fall back to the defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExpertDraft {
    pub name: String,
    pub system_message: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub example_input: Option<String>,
    #[serde(default)]
    pub example_output: Option<String>,
    #[serde(default)]
    pub model_params: Option<ModelParams>,
}

impl ExpertDraft {
    pub fn into_record(self) -> ExpertRecord {
        ExpertRecord {
            name: self.name,
            system_message: self.system_message,
            description: self.description,
            example_input: self.example_input,
            example_output: self.example_output,
            model_params: self.model_params.unwrap_or_default(),
        }
    }
}

/// Parse a model response as an expert draft.
///
/// Models wrap their output in prose or a fenced code block, so parsing
/// starts at the outermost JSON object. Missing required fields, unknown
/// fields, and an empty name are all parse errors.
pub fn parse_expert_draft(text: &str) -> Result<ExpertDraft, SavantError> {
    let body = extract_object(text)
        .ok_or_else(|| SavantError::Parse("Response contains no JSON object".to_string()))?;
    let draft: ExpertDraft = serde_json::from_str(body).map_err(|e| {
        SavantError::Parse(format!("Response is not a valid expert definition: {}", e))
    })?;
    if draft.name.trim().is_empty() {
        return Err(SavantError::Parse(
            "Expert definition has an empty name".to_string(),
        ));
    }
    Ok(draft)
}

// Slice from the first '{' to the last '}'.
fn extract_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}
