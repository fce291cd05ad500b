//! Authoring workflows: experts that write experts.
//!
//! Two procedures compose registry lookups and expert invocations to
//! produce new definitions. Prompt generation expands a free-text idea and
//! registers the result; prompt improvement critiques an existing expert
//! and hands the candidate back to the caller without registering it.

mod parse;

pub use parse::{parse_expert_draft, ExpertDraft};

use crate::error::SavantError;
use crate::expert::ExpertDefinition;
use crate::registry::ExpertRegistry;
use std::path::Path;

/// Expert that expands a rough idea into a full proposal.
pub const IDEA_EXPANDER: &str = "PromptIdeaExpander";
/// Expert that turns a proposal into a structured expert definition.
pub const PROMPT_GENERATOR: &str = "PromptGeneratorV2";
/// Expert that critiques an existing prompt.
pub const PROMPT_IMPROVER: &str = "PromptImproverV2";
/// Expert that folds critique back into a structured definition.
pub const SUGGESTION_INCORPORATOR: &str = "PromptSuggestionIncorporator";

/// Generate a new expert from a free-text idea file and register it.
///
/// The idea file's whole content seeds the expansion. A generator response
/// that fails the draft parse is fatal for the workflow.
pub fn generate_prompt(
    registry: &mut ExpertRegistry,
    idea_file: &Path,
) -> Result<ExpertDefinition, SavantError> {
    let expander = registry.get_expert(IDEA_EXPANDER)?;
    let generator = registry.get_expert(PROMPT_GENERATOR)?;

    let expanded = expander.invoke_from_file(idea_file)?;
    let instruction = format!("Generate a prompt from the following proposal:\n{}", expanded);
    let formatted = generator.invoke(&instruction)?;

    let draft = parse_expert_draft(&formatted)?;
    let expert = ExpertDefinition::from_record(
        draft.into_record(),
        registry.resolver(),
        registry.transcript_sink(),
    )?;
    registry.add_expert(&expert)?;

    tracing::info!(
        name = %expert.name(),
        content = %expert.render_system_content(),
        "registered generated expert"
    );
    Ok(expert)
}

/// Improve an expert's prompt via critique, returning the candidate
/// without registering it.
///
/// The improver critiques the target's rendered system content; the
/// incorporator folds that critique into a new definition. An incorporator
/// response that fails the draft parse yields `Ok(None)` — the caller
/// decides whether a usable candidate gets persisted. Lookup and transport
/// failures still propagate.
pub fn improve_expert(
    target: &ExpertDefinition,
    registry: &ExpertRegistry,
) -> Result<Option<ExpertDefinition>, SavantError> {
    let improver = registry.get_expert(PROMPT_IMPROVER)?;
    let incorporator = registry.get_expert(SUGGESTION_INCORPORATOR)?;

    let recommendations = improver.invoke(&target.render_system_content())?;
    tracing::info!(target = %target.name(), %recommendations, "collected prompt recommendations");

    let base = target.editable_fields_literal();
    let prompt = format!("Base Prompt:\n{}\n\n{}", base, recommendations);
    let response = incorporator.invoke(&prompt)?;

    match parse_expert_draft(&response) {
        Ok(draft) => {
            let expert = ExpertDefinition::from_record(
                draft.into_record(),
                registry.resolver(),
                registry.transcript_sink(),
            )?;
            Ok(Some(expert))
        }
        Err(err) => {
            tracing::warn!(target = %target.name(), error = %err, "failed to parse suggested expert");
            Ok(None)
        }
    }
}
