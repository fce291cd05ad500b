//! Filesystem contract tests for the expert registry.

mod support;

use savant::expert::ExpertDefinition;
use savant::registry::ExpertRegistry;
use savant::transcript::TranscriptSink;
use std::sync::Arc;
use support::EchoResolver;
use tempfile::TempDir;

fn expert(registry: &ExpertRegistry, name: &str) -> ExpertDefinition {
    ExpertDefinition::new(
        name,
        "a system message",
        Some(format!("{} description", name)),
        None,
        None,
        None,
        registry.resolver(),
        registry.transcript_sink(),
    )
    .unwrap()
}

#[test]
fn add_on_a_bound_registry_persists_immediately() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("experts.json");

    let mut unbound = ExpertRegistry::new(
        Arc::new(EchoResolver),
        TranscriptSink::new(temp_dir.path().join("logs")),
    );
    let alpha = expert(&unbound, "Alpha");
    unbound.add_expert(&alpha).unwrap();
    unbound.save(&path).unwrap();

    let mut bound = ExpertRegistry::load(
        &path,
        Arc::new(EchoResolver),
        TranscriptSink::new(temp_dir.path().join("logs")),
    )
    .unwrap();
    let beta = expert(&bound, "Beta");
    bound.add_expert(&beta).unwrap();

    // No explicit save: the insertion itself must have rewritten the file.
    let reloaded = ExpertRegistry::load(
        &path,
        Arc::new(EchoResolver),
        TranscriptSink::new(temp_dir.path().join("logs")),
    )
    .unwrap();
    assert_eq!(reloaded.list_experts(), vec!["Alpha", "Beta"]);
    assert_eq!(
        reloaded.get_expert("Alpha").unwrap().serialize(),
        alpha.serialize()
    );
    assert_eq!(
        reloaded.get_expert("Beta").unwrap().serialize(),
        beta.serialize()
    );
}

#[test]
fn delete_leaves_the_backing_file_unchanged_until_save() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("experts.json");
    let sink = TranscriptSink::new(temp_dir.path().join("logs"));

    let mut registry = ExpertRegistry::new(Arc::new(EchoResolver), sink.clone());
    let alpha = expert(&registry, "Alpha");
    let beta = expert(&registry, "Beta");
    registry.add_expert(&alpha).unwrap();
    registry.add_expert(&beta).unwrap();
    registry.save(&path).unwrap();

    let mut bound = ExpertRegistry::load(&path, Arc::new(EchoResolver), sink.clone()).unwrap();
    bound.delete_expert("Beta").unwrap();
    assert_eq!(bound.list_experts(), vec!["Alpha"]);

    // The file still carries the deleted entry.
    let stale = ExpertRegistry::load(&path, Arc::new(EchoResolver), sink.clone()).unwrap();
    assert_eq!(stale.list_experts(), vec!["Alpha", "Beta"]);

    // An explicit save reflects the deletion.
    bound.save(&path).unwrap();
    let fresh = ExpertRegistry::load(&path, Arc::new(EchoResolver), sink).unwrap();
    assert_eq!(fresh.list_experts(), vec!["Alpha"]);
}

#[test]
fn backing_file_is_a_name_keyed_json_mapping() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("experts.json");

    let mut registry = ExpertRegistry::new(
        Arc::new(EchoResolver),
        TranscriptSink::new(temp_dir.path().join("logs")),
    );
    let alpha = expert(&registry, "Alpha");
    registry.add_expert(&alpha).unwrap();
    registry.save(&path).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let entry = parsed.get("Alpha").expect("Alpha entry should exist");
    assert_eq!(entry["name"], "Alpha");
    assert_eq!(entry["system_message"], "a system message");
    assert_eq!(entry["model_params"]["model_name"], "gpt-4");
    assert_eq!(entry["model_params"]["max_tokens"], 512);
}
