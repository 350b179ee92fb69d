//! Errores específicos del secuenciador (todos errores de programación).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fallos del secuenciador. Ninguno representa un fallo de entorno: el motor
/// no hace I/O, así que no existe una clase transitoria que reintentar.
#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum SequencerError {
    #[error("step sequence is empty")] EmptySequence,
    #[error("sequence exhausted without a terminal step")] SequenceExhausted,
    #[error("step {0} requested input twice in a row")] ProtocolViolation(usize),
    #[error("run is not in a resumable state")] InvalidState,
    #[error("unknown run id")] UnknownRun,
    #[error("internal: {0}")] Internal(String),
}
