use serde_json::Value;

use crate::model::PromptSpec;

/// Resultado abstracto de ejecutar un step. Exactamente una variante por
/// invocación.
#[derive(Debug, Clone, PartialEq)]
pub enum StepResult {
    /// Avanzar al siguiente paso; `value` queda acarreado como su entrada.
    Continue { value: Option<Value> },
    /// Suspender el run en este índice hasta que llegue input externo.
    WaitForInput { prompt: PromptSpec },
    /// Terminar el run con `output` como resultado inmutable.
    Complete { output: Value },
}
