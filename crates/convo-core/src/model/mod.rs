//! Modelo neutral del secuenciador.
//!
//! El motor no interpreta la semántica de los datos que circulan entre pasos:
//! - el input inicial y el valor acarreado son `serde_json::Value` genérico;
//! - los tipos de dominio (inputs/outputs de una acción concreta) viven en
//!   crates superiores y se serializan a `Value` en la frontera.

pub mod context;
pub mod prompt;

pub use context::StepContext;
pub use prompt::PromptSpec;
