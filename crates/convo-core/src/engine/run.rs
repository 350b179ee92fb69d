//! Handle y estados de un run.
//!
//! Un `RunHandle` sustituye a los objetos de continuación implícitos de un
//! framework de diálogo: es un valor explícito que el host conserva mientras
//! el run está suspendido y descarta para abandonarlo. Abandonar un run antes
//! de `Completed` es válido y no deja nada que deshacer.

use serde_json::Value;
use uuid::Uuid;

use crate::errors::SequencerError;
use crate::model::PromptSpec;

/// Estados del ciclo de vida de un run.
///
/// Transiciones válidas:
/// - `Pending` -> `Suspended` | `Completed` (vía `start`)
/// - `Suspended` -> `Suspended` | `Completed` | `Failed` (vía `resume`)
///
/// `Completed` y `Failed` son terminales.
#[derive(Debug, Clone, PartialEq)]
pub enum RunState {
    /// El run existe pero aún no se invocó ningún paso.
    Pending,
    /// El run espera input externo en `step_index`.
    Suspended { step_index: usize, prompt: PromptSpec },
    /// El run terminó; `output` es inmutable.
    Completed { output: Value },
    /// El run terminó por error de protocolo o configuración.
    Failed { error: SequencerError },
}

/// Vista del estado de un run en un instante dado.
#[derive(Debug, Clone, PartialEq)]
pub struct RunHandle {
    pub run_id: Uuid,
    pub state: RunState,
}

impl RunHandle {
    pub fn is_suspended(&self) -> bool {
        matches!(self.state, RunState::Suspended { .. })
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.state, RunState::Completed { .. })
    }

    /// Índice del paso en que está suspendido el run, si aplica.
    pub fn suspended_index(&self) -> Option<usize> {
        match &self.state {
            RunState::Suspended { step_index, .. } => Some(*step_index),
            _ => None,
        }
    }

    /// Prompt pendiente de respuesta, si el run está suspendido.
    pub fn prompt(&self) -> Option<&PromptSpec> {
        match &self.state {
            RunState::Suspended { prompt, .. } => Some(prompt),
            _ => None,
        }
    }

    /// Payload de salida si el run completó.
    pub fn output(&self) -> Option<&Value> {
        match &self.state {
            RunState::Completed { output } => Some(output),
            _ => None,
        }
    }
}
