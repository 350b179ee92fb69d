//! Tipos de evento del run y estructura `RunEvent`.
//!
//! Rol en el secuenciador:
//! - Cada `start`/`resume` emite eventos a un `EventStore` append-only.
//! - El enum `RunEventKind` define el contrato observable y estable del motor.
//!
//! Invariantes:
//! - `RunStarted` debe ser el primer evento de un `run_id`.
//! - `InputRequested` para un índice siempre viene precedido por el
//!   `StepEntered` de ese índice.
//! - Un run bien formado termina con exactamente uno de
//!   `RunCompleted`/`RunFailed`.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::errors::SequencerError;
use crate::model::PromptSpec;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RunEventKind {
    /// Emisión inicial de un run: fija la `definition_hash` y cantidad de
    /// pasos de la secuencia que lo gobierna.
    RunStarted { definition_hash: String, step_count: usize },
    /// Un paso fue invocado. No implica que haya avanzado.
    StepEntered { step_index: usize, step_id: String },
    /// Un paso devolvió `Continue`; el cursor avanza.
    StepCompleted { step_index: usize, step_id: String },
    /// Un paso pidió input externo; el run queda suspendido en ese índice.
    InputRequested {
        step_index: usize,
        step_id: String,
        prompt: PromptSpec,
    },
    /// El host suministró el valor esperado; el mismo índice se re-invoca.
    InputProvided { step_index: usize, value: Value },
    /// Evento de cierre exitoso con el payload de salida del run.
    RunCompleted { output: Value },
    /// Evento de cierre por error de protocolo o configuración.
    RunFailed { error: SequencerError },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunEvent {
    pub seq: u64, // asignado por el EventStore (orden de append)
    pub run_id: Uuid,
    pub kind: RunEventKind,
    pub ts: DateTime<Utc>, // metadato, no participa en identidad alguna
}
