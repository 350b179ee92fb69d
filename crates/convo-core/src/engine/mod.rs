//! Engine module for the dialog step sequencer.
//!
//! Provides the core engine, the builder pattern and the run handle types
//! for suspendable step-sequence execution.

pub mod builder;
pub mod core;
pub mod run;

pub use builder::{EngineBuilder, EngineBuilderInit};
pub use core::DialogEngine;
pub use run::{RunHandle, RunState};

pub use crate::event::{EventStore, InMemoryEventStore, RunEvent, RunEventKind};
pub use crate::sequence::{build_sequence, SequenceDefinition};
pub use crate::step::{StepResult, StepKind};
