//! E2E del gate de input usando la secuencia de ejemplo de convo-skills.

use convo_core::channel::MemoryChannel;
use convo_core::engine::DialogEngine;
use convo_core::event::InMemoryEventStore;
use convo_skills::{sample_action_sequence, FixedCustomerIds, SampleActionInput, SampleActionOutput};
use serde_json::json;

#[test]
fn e2e_suspend_then_resume_drives_to_completion() {
    let definition = sample_action_sequence(FixedCustomerIds(7));
    let mut engine = DialogEngine::with_sequence(InMemoryEventStore::default(), definition);
    let channel = MemoryChannel::new();

    let handle = engine.start(&channel, None).expect("start should suspend");
    assert_eq!(handle.suspended_index(), Some(0));
    assert_eq!(handle.prompt().expect("prompt").prompt_id, "namePrompt");
    // Nada se envió mientras el run está suspendido.
    assert!(channel.sent().is_empty());

    let done = engine.resume(&channel, handle.run_id, json!("Alice")).expect("resume");
    let output = done.output().expect("completed output");
    assert_eq!(SampleActionOutput::from_value(output), Some(SampleActionOutput { customer_id: 7 }));
    assert_eq!(channel.sent(), vec!["Hello, Alice"]);
}

#[test]
fn e2e_prefilled_input_skips_the_prompt_entirely() {
    let definition = sample_action_sequence(FixedCustomerIds(7));
    let mut engine = DialogEngine::with_sequence(InMemoryEventStore::default(), definition);
    let channel = MemoryChannel::new();

    let input = SampleActionInput::new("Bob");
    let handle = engine.start(&channel, Some(input.to_value())).expect("start should complete");
    assert!(handle.is_completed());
    assert_eq!(channel.sent(), vec!["Hello, Bob"]);

    // El gate nunca se observó: sin InputRequested ni InputProvided.
    let variants = engine.event_variants(handle.run_id);
    assert!(!variants.contains(&"U"));
    assert!(!variants.contains(&"V"));
}

#[test]
fn e2e_greeting_is_sent_exactly_once_per_run() {
    let definition = sample_action_sequence(FixedCustomerIds(1));
    let mut engine = DialogEngine::with_sequence(InMemoryEventStore::default(), definition);
    let channel = MemoryChannel::new();

    let handle = engine.start(&channel, None).expect("start");
    let _ = engine.resume(&channel, handle.run_id, json!("Ana")).expect("resume");
    assert_eq!(channel.sent().len(), 1, "side effect must not repeat on resumption");
}
