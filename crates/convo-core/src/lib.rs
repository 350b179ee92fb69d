//! convo-core: Secuenciador lineal de pasos de diálogo (D1)
pub mod channel;
pub mod constants;
pub mod engine;
pub mod errors;
pub mod event;
pub mod hashing;
pub mod model;
pub mod sequence;
pub mod step;


pub use channel::{MemoryChannel, NullChannel, OutputChannel};
pub use engine::{DialogEngine, RunHandle, RunState};
pub use errors::SequencerError;
pub use event::{EventStore, InMemoryEventStore, RunEvent, RunEventKind};
pub use model::{PromptSpec, StepContext};
pub use sequence::{build_sequence, SequenceDefinition};
pub use step::{StepDefinition, StepKind, StepResult};
