//! Secuencia de tres pasos: pedir nombre, saludar, cerrar con un id.
//!
//! La política "saltar el prompt si el dato ya vino" es decisión del primer
//! paso, no un atajo del engine: `PromptForName` inspecciona el input inicial
//! y sólo suspende si no hay nombre utilizable.

use serde_json::json;

use convo_core::model::{PromptSpec, StepContext};
use convo_core::sequence::{build_sequence, SequenceDefinition};
use convo_core::step::{StepDefinition, StepKind, StepResult};

use crate::idgen::CustomerIdSource;
use crate::models::SampleActionOutput;

/// Paso 1: obtener el nombre.
///
/// Orden de resolución:
/// 1. valor acarreado (el prompt ya fue respondido vía `resume`);
/// 2. campo `name` no vacío del input inicial (prompt innecesario);
/// 3. suspender pidiendo `namePrompt`.
pub struct PromptForName;

impl StepDefinition for PromptForName {
    fn id(&self) -> &str {
        "prompt-for-name"
    }

    fn run(&self, ctx: &StepContext) -> StepResult {
        if let Some(answer) = ctx.carried_str() {
            return StepResult::Continue { value: Some(json!(answer)) };
        }
        if let Some(name) = ctx.initial_field("name") {
            // El caller ya suministró el nombre; no hay nada que preguntar.
            return StepResult::Continue { value: Some(json!(name)) };
        }
        StepResult::WaitForInput { prompt: PromptSpec::new("namePrompt").with_hint("What is your name?") }
    }

    fn kind(&self) -> StepKind {
        StepKind::Prompt
    }
}

/// Paso 2: saludar por el canal y reenviar el nombre al siguiente paso.
///
/// El envío ocurre a lo sumo una vez por run: un paso completado nunca se
/// re-invoca.
pub struct GreetUser;

impl StepDefinition for GreetUser {
    fn id(&self) -> &str {
        "greet-user"
    }

    fn run(&self, ctx: &StepContext) -> StepResult {
        let name = ctx.carried_str().unwrap_or_default();
        ctx.channel.send(&format!("Hello, {}", name));
        StepResult::Continue { value: ctx.carried.cloned() }
    }

    fn kind(&self) -> StepKind {
        StepKind::Notify
    }
}

/// Paso 3 (terminal): sintetiza el `SampleActionOutput` con un id pedido a la
/// fuente inyectada.
pub struct End {
    ids: Box<dyn CustomerIdSource>,
}

impl End {
    pub fn new(ids: impl CustomerIdSource + 'static) -> Self {
        Self { ids: Box::new(ids) }
    }
}

impl StepDefinition for End {
    fn id(&self) -> &str {
        "end"
    }

    fn run(&self, _ctx: &StepContext) -> StepResult {
        let output = SampleActionOutput { customer_id: self.ids.next_id() };
        StepResult::Complete { output: output.to_value() }
    }

    fn kind(&self) -> StepKind {
        StepKind::Terminal
    }
}

/// Definición completa de la acción de ejemplo.
pub fn sample_action_sequence(ids: impl CustomerIdSource + 'static) -> SequenceDefinition {
    build_sequence(vec![Box::new(PromptForName), Box::new(GreetUser), Box::new(End::new(ids))])
}
