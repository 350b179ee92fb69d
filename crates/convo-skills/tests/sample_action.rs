//! Escenarios end-to-end de la acción de saludo.

use convo_core::channel::MemoryChannel;
use convo_core::engine::{DialogEngine, RunState};
use convo_core::event::InMemoryEventStore;
use convo_skills::{sample_action_sequence, FixedCustomerIds, SampleActionInput, SampleActionOutput};
use serde_json::json;

fn engine_with_fixed_id(id: i32) -> DialogEngine<InMemoryEventStore> {
    DialogEngine::with_sequence(InMemoryEventStore::default(), sample_action_sequence(FixedCustomerIds(id)))
}

#[test]
fn alice_scenario_prompts_greets_and_completes() {
    let mut engine = engine_with_fixed_id(1234);
    let channel = MemoryChannel::new();

    // start → Suspended(0) pidiendo el nombre.
    let handle = engine.start(&channel, None).expect("start should suspend");
    match &handle.state {
        RunState::Suspended { step_index, prompt } => {
            assert_eq!(*step_index, 0);
            assert_eq!(prompt.prompt_id, "namePrompt");
        }
        other => panic!("expected Suspended, got {:?}", other),
    }

    // resume("Alice") → saludo enviado y run completado.
    let done = engine.resume(&channel, handle.run_id, json!("Alice")).expect("resume");
    assert_eq!(channel.sent(), vec!["Hello, Alice"]);
    let output = done.output().expect("output");
    assert_eq!(SampleActionOutput::from_value(output),
               Some(SampleActionOutput { customer_id: 1234 }));
}

#[test]
fn bob_scenario_with_prefilled_name_never_suspends() {
    let mut engine = engine_with_fixed_id(99);
    let channel = MemoryChannel::new();

    let input = SampleActionInput::new("Bob");
    let handle = engine.start(&channel, Some(input.to_value())).expect("straight to completion");
    assert!(handle.is_completed());
    assert_eq!(channel.sent(), vec!["Hello, Bob"]);
    assert!(!engine.event_variants(handle.run_id).contains(&"U"),
            "no InputRequested may be observed for a prefilled run");
}

#[test]
fn empty_name_in_input_still_prompts() {
    let mut engine = engine_with_fixed_id(1);
    let channel = MemoryChannel::new();

    // Campo presente pero vacío: no es un nombre utilizable.
    let handle = engine.start(&channel, Some(json!({"name": ""}))).expect("start");
    assert_eq!(handle.suspended_index(), Some(0));
}

#[test]
fn customer_id_comes_from_the_injected_source() {
    let mut engine = engine_with_fixed_id(7);
    let channel = MemoryChannel::new();
    let handle = engine.start(&channel, Some(SampleActionInput::new("Eve").to_value()))
                       .expect("completes");
    assert_eq!(handle.output().expect("output")["customerId"], 7);
}
