use convo_core::channel::NullChannel;
use convo_core::engine::DialogEngine;
use convo_core::errors::SequencerError;
use convo_core::event::InMemoryEventStore;
use convo_core::model::StepContext;
use convo_core::sequence::build_sequence;
use convo_core::step::{StepDefinition, StepKind, StepResult};
use serde_json::json;

struct Done;
impl StepDefinition for Done {
    fn id(&self) -> &str {
        "done"
    }
    fn run(&self, _ctx: &StepContext) -> StepResult {
        StepResult::Complete { output: json!(1) }
    }
    fn kind(&self) -> StepKind {
        StepKind::Terminal
    }
}

#[test]
fn empty_sequence_is_a_config_error_not_exhaustion() {
    let mut engine = DialogEngine::with_sequence(InMemoryEventStore::default(), build_sequence(vec![]));
    let channel = NullChannel;
    let err = engine.start(&channel, None).expect_err("precondition violation");
    assert_eq!(err, SequencerError::EmptySequence);
    // Se rechaza antes de cualquier invocación: ni run ni eventos.
    assert!(engine.run_ids().is_empty());
}

#[test]
fn resume_on_completed_run_fails_with_invalid_state() {
    let mut engine = DialogEngine::new().first_step(Done).build();
    let channel = NullChannel;
    let handle = engine.start(&channel, None).expect("completes");
    assert!(handle.is_completed());

    let err = engine.resume(&channel, handle.run_id, json!("late")).expect_err("terminal run");
    assert_eq!(err, SequencerError::InvalidState);
}

#[test]
fn resume_on_unknown_run_fails_with_unknown_run() {
    let mut engine = DialogEngine::new().first_step(Done).build();
    let channel = NullChannel;
    let err = engine.resume(&channel, uuid::Uuid::new_v4(), json!("x")).expect_err("no such run");
    assert_eq!(err, SequencerError::UnknownRun);
}
