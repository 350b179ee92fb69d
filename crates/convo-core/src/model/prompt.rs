//! Descriptor opaco de prompt.
//!
//! Un `PromptSpec` dice *qué* pedir, nunca *cómo* renderizarlo. El engine lo
//! transporta sin modificarlo: del paso al host (vía `RunState::Suspended` y
//! el evento `InputRequested`) y de vuelta como valor suministrado en
//! `resume`. El render localizado pertenece al host.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptSpec {
    /// Identificador estable de la respuesta/prompt (p.ej. "namePrompt").
    pub prompt_id: String,
    /// Esquema opcional del valor esperado (no interpretado por el core).
    pub schema: Option<Value>,
    /// Pista legible opcional para el host.
    pub hint: Option<String>,
}

impl PromptSpec {
    pub fn new(prompt_id: impl Into<String>) -> Self {
        Self { prompt_id: prompt_id.into(),
               schema: None,
               hint: None }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}
