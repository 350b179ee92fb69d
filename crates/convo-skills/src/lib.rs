//! convo-skills: Capa de skill de ejemplo sobre convo-core.
//!
//! Este crate provee:
//! - Modelos tipados de la acción (`SampleActionInput`, `SampleActionOutput`)
//!   con sus nombres de campo de wire originales.
//! - Los tres pasos del diálogo de saludo: `PromptForName` → `GreetUser` →
//!   `End`.
//! - `CustomerIdSource`: capacidad inyectada de generación de ids, en lugar
//!   de una fuente aleatoria global (determinismo en tests).
//!
//! Nota: el core sólo conoce `serde_json::Value`; aquí los tipos de dominio
//! se serializan a payload JSON en la frontera.

pub mod idgen;
pub mod models;
pub mod steps;

pub use idgen::{CustomerIdSource, FixedCustomerIds, UuidCustomerIds};
pub use models::{SampleActionInput, SampleActionOutput};
pub use steps::{sample_action_sequence, End, GreetUser, PromptForName};
