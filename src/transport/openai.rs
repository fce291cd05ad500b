//! OpenAI-style chat-completions client.
//!
//! Blocking HTTP against a chat-completions endpoint. Credentials and the
//! endpoint come from an explicit [`ChatConfig`]; generation parameters are
//! fixed at construction and a new client is built when they change.

use crate::config::ChatConfig;
use crate::error::SavantError;
use crate::expert::ModelParams;
use crate::transport::{ChatClient, ChatRequest, ClientResolver};
use serde::{Deserialize, Serialize};

/// Default OpenAI chat-completions endpoint.
pub const OPENAI_CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    temperature: f32,
    frequency_penalty: f32,
    presence_penalty: f32,
    n: u32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: String,
}

/// Blocking client bound to one endpoint, key, and parameter set.
pub struct OpenAiChatClient {
    http: reqwest::blocking::Client,
    endpoint: String,
    api_key: String,
    params: ModelParams,
}

impl OpenAiChatClient {
    pub fn new(config: &ChatConfig, params: &ModelParams) -> Result<Self, SavantError> {
        params.validate().map_err(SavantError::Config)?;
        if config.api_key.is_empty() {
            return Err(SavantError::Config("API key required".to_string()));
        }
        Ok(Self {
            http: reqwest::blocking::Client::new(),
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
            params: params.clone(),
        })
    }

    fn build_request_body<'a>(&'a self, request: &'a ChatRequest) -> CompletionRequest<'a> {
        CompletionRequest {
            model: &self.params.model_name,
            messages: vec![
                Message {
                    role: "system",
                    content: &request.system,
                },
                Message {
                    role: "user",
                    content: &request.user,
                },
            ],
            temperature: self.params.temperature,
            frequency_penalty: self.params.frequency_penalty,
            presence_penalty: self.params.presence_penalty,
            n: self.params.n,
            max_tokens: self.params.max_tokens,
        }
    }

    fn dispatch(&self, request: &ChatRequest) -> Result<String, SavantError> {
        tracing::debug!(model = %self.params.model_name, "issuing chat completion request");

        let body = self.build_request_body(request);
        let response = self
            .http
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .map_err(|e| SavantError::Transport(format!("Chat completion request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(SavantError::Transport(format!(
                "Chat completion returned {}: {}",
                status, body
            )));
        }

        let parsed: CompletionResponse = response.json().map_err(|e| {
            SavantError::Transport(format!("Failed to parse chat completion response: {}", e))
        })?;

        let choice = parsed.choices.into_iter().next().ok_or_else(|| {
            SavantError::Transport("Chat completion response contained no choices".to_string())
        })?;
        Ok(choice.message.content)
    }
}

impl ChatClient for OpenAiChatClient {
    fn complete(&self, request: &ChatRequest) -> Result<String, SavantError> {
        self.dispatch(request)
    }

    /// The completions endpoint takes one message list per call, so a batch
    /// is issued as sequential calls inside this single blocking operation.
    /// The first choice of each response keeps `responses[i]` aligned with
    /// `requests[i]`.
    fn complete_batch(&self, requests: &[ChatRequest]) -> Result<Vec<String>, SavantError> {
        let mut responses = Vec::with_capacity(requests.len());
        for request in requests {
            responses.push(self.dispatch(request)?);
        }
        Ok(responses)
    }
}

/// Resolver producing OpenAI clients from one shared configuration.
pub struct OpenAiResolver {
    config: ChatConfig,
}

impl OpenAiResolver {
    pub fn new(config: ChatConfig) -> Self {
        Self { config }
    }
}

impl ClientResolver for OpenAiResolver {
    fn client_for(&self, params: &ModelParams) -> Result<Box<dyn ChatClient>, SavantError> {
        Ok(Box::new(OpenAiChatClient::new(&self.config, params)?))
    }
}
