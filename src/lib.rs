//! Savant: Language-Expert Registry and Authoring Workflows
//!
//! An expert bundles a system prompt, an optional few-shot example, and
//! generation parameters for one chat-completion persona. The registry
//! persists experts to a JSON backing file; the authoring workflows use
//! existing experts to generate and improve new ones.

pub mod authoring;
pub mod config;
pub mod error;
pub mod expert;
pub mod logging;
pub mod registry;
pub mod transcript;
pub mod transport;
