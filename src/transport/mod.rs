//! Chat transport boundary.
//!
//! Translates an expert's rendered system content plus a user message into
//! a remote chat-completion call. The rest of the crate only sees the
//! [`ChatClient`] and [`ClientResolver`] traits; the concrete HTTP client
//! lives behind them.

pub mod openai;

pub use openai::{OpenAiChatClient, OpenAiResolver};

use crate::error::SavantError;
use crate::expert::ModelParams;

/// One two-part generation request: system content plus a user message.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub system: String,
    pub user: String,
}

/// Blocking chat-completion client bound to one set of generation
/// parameters.
pub trait ChatClient {
    /// Generate a single response text.
    fn complete(&self, request: &ChatRequest) -> Result<String, SavantError>;

    /// Generate one response per request, in request order.
    ///
    /// `responses[i]` corresponds to `requests[i]`; the whole batch either
    /// returns or fails as a unit.
    fn complete_batch(&self, requests: &[ChatRequest]) -> Result<Vec<String>, SavantError>;
}

/// Builds transport clients from generation parameters.
///
/// Experts rebuild their binding through this trait after every parameter
/// change, so a resolver must hand out a fully configured client each call.
pub trait ClientResolver: Send + Sync {
    fn client_for(&self, params: &ModelParams) -> Result<Box<dyn ChatClient>, SavantError>;
}
