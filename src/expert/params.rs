//! Generation parameters carried by every expert.

use serde::{Deserialize, Serialize};

/// Remote generation parameters.
///
/// The six recognized keys form a closed record; fields missing from a
/// serialized form take the documented defaults, unknown keys are rejected
/// at parse time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelParams {
    #[serde(default = "default_model_name")]
    pub model_name: String,

    #[serde(default)]
    pub temperature: f32,

    #[serde(default = "default_frequency_penalty")]
    pub frequency_penalty: f32,

    #[serde(default = "default_presence_penalty")]
    pub presence_penalty: f32,

    /// Number of choices generated per request.
    #[serde(default = "default_choices")]
    pub n: u32,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

fn default_model_name() -> String {
    "gpt-4".to_string()
}

fn default_frequency_penalty() -> f32 {
    1.0
}

fn default_presence_penalty() -> f32 {
    0.5
}

fn default_choices() -> u32 {
    1
}

fn default_max_tokens() -> u32 {
    512
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            model_name: default_model_name(),
            temperature: 0.0,
            frequency_penalty: default_frequency_penalty(),
            presence_penalty: default_presence_penalty(),
            n: default_choices(),
            max_tokens: default_max_tokens(),
        }
    }
}

/// One update to a recognized generation parameter.
///
/// This closed set is the only way to change parameters on a live expert.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamUpdate {
    ModelName(String),
    Temperature(f32),
    FrequencyPenalty(f32),
    PresencePenalty(f32),
    Choices(u32),
    MaxTokens(u32),
}

impl ModelParams {
    /// Apply one parameter update in place.
    pub fn apply(&mut self, update: ParamUpdate) {
        match update {
            ParamUpdate::ModelName(value) => self.model_name = value,
            ParamUpdate::Temperature(value) => self.temperature = value,
            ParamUpdate::FrequencyPenalty(value) => self.frequency_penalty = value,
            ParamUpdate::PresencePenalty(value) => self.presence_penalty = value,
            ParamUpdate::Choices(value) => self.n = value,
            ParamUpdate::MaxTokens(value) => self.max_tokens = value,
        }
    }

    /// Validate the parameter set before a transport binding is built.
    pub fn validate(&self) -> Result<(), String> {
        if self.model_name.trim().is_empty() {
            return Err("Model name cannot be empty".to_string());
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(format!(
                "Temperature must be between 0.0 and 2.0, got {}",
                self.temperature
            ));
        }
        if self.n == 0 {
            return Err("Choice count must be at least 1".to_string());
        }
        Ok(())
    }
}
