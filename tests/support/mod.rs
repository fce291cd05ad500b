//! Shared transport stubs for integration tests.
#![allow(dead_code)]

use savant::error::SavantError;
use savant::expert::ModelParams;
use savant::transport::{ChatClient, ChatRequest, ClientResolver};
use std::collections::HashMap;

/// Client tagging each batch response with its request index.
pub struct EchoClient;

impl ChatClient for EchoClient {
    fn complete(&self, request: &ChatRequest) -> Result<String, SavantError> {
        Ok(format!("echo: {}", request.user))
    }

    fn complete_batch(&self, requests: &[ChatRequest]) -> Result<Vec<String>, SavantError> {
        Ok(requests
            .iter()
            .enumerate()
            .map(|(i, request)| format!("{}:{}", i, request.user))
            .collect())
    }
}

pub struct EchoResolver;

impl ClientResolver for EchoResolver {
    fn client_for(&self, _params: &ModelParams) -> Result<Box<dyn ChatClient>, SavantError> {
        Ok(Box::new(EchoClient))
    }
}

/// Client returning one canned response regardless of input.
pub struct ScriptedClient {
    response: String,
}

impl ChatClient for ScriptedClient {
    fn complete(&self, _request: &ChatRequest) -> Result<String, SavantError> {
        Ok(self.response.clone())
    }

    fn complete_batch(&self, requests: &[ChatRequest]) -> Result<Vec<String>, SavantError> {
        Ok(vec![self.response.clone(); requests.len()])
    }
}

/// Resolver keyed on `model_name`, so each seeded expert can be given its
/// own canned response.
pub struct ScriptedResolver {
    responses: HashMap<String, String>,
}

impl ScriptedResolver {
    pub fn new(entries: &[(&str, &str)]) -> Self {
        Self {
            responses: entries
                .iter()
                .map(|(model, response)| (model.to_string(), response.to_string()))
                .collect(),
        }
    }
}

impl ClientResolver for ScriptedResolver {
    fn client_for(&self, params: &ModelParams) -> Result<Box<dyn ChatClient>, SavantError> {
        let response = self
            .responses
            .get(&params.model_name)
            .cloned()
            .ok_or_else(|| {
                SavantError::Config(format!(
                    "No scripted response for model {}",
                    params.model_name
                ))
            })?;
        Ok(Box::new(ScriptedClient { response }))
    }
}
