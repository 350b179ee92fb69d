//! Registro de eventos del run.
//!
//! El secuenciador es observable a través de un log append-only en lugar de
//! un logger: cada transición relevante de un run queda como `RunEvent` en un
//! `EventStore`. Los tests y el host inspeccionan ese log para auditar qué
//! pasó y en qué orden.

pub mod store;
pub mod types;

pub use store::{EventStore, InMemoryEventStore};
pub use types::{RunEvent, RunEventKind};
