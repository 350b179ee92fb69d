//! Builder para `DialogEngine`.
//!
//! Notas de diseño
//! - `EngineBuilderInit` representa el estado inicial del builder: el store
//!   de eventos debe estar presente antes de declarar pasos.
//! - `EngineBuilder` acumula los pasos en orden como
//!   `Vec<Box<dyn StepDefinition>>`; el orden de `add_step` es el orden de
//!   ejecución.
//! - `build` deriva la definición (con su hash) a partir de los pasos
//!   acumulados.
//!
//! Ejemplo de uso (comentario):
//!
//! ```ignore
//! // let engine = DialogEngine::new()
//! //     .first_step(PromptForName)
//! //     .add_step(GreetUser)
//! //     .add_step(End::new(ids))
//! //     .build();
//! ```

use crate::engine::DialogEngine;
use crate::event::EventStore;
use crate::sequence::build_sequence;
use crate::step::StepDefinition;

/// Estado inicial del builder.
pub struct EngineBuilderInit<E: EventStore> {
    /// Store de eventos que usará el engine.
    pub event_store: E,
}

impl<E: EventStore> EngineBuilderInit<E> {
    /// Declara el primer paso de la secuencia y transiciona al builder
    /// completo.
    #[inline]
    pub fn first_step<S>(self, step: S) -> EngineBuilder<E>
        where S: StepDefinition + 'static
    {
        EngineBuilder { event_store: self.event_store,
                        steps: vec![Box::new(step)] }
    }
}

/// Builder principal que acumula pasos en orden de ejecución.
pub struct EngineBuilder<E: EventStore> {
    event_store: E,
    steps: Vec<Box<dyn StepDefinition>>,
}

impl<E: EventStore> EngineBuilder<E> {
    /// Añade el siguiente paso de la secuencia.
    #[inline]
    pub fn add_step<S>(mut self, next: S) -> Self
        where S: StepDefinition + 'static
    {
        self.steps.push(Box::new(next));
        self
    }

    /// Construye el `DialogEngine` final. Consume el builder y deriva la
    /// definición de secuencia (con su hash) a partir de los pasos.
    #[inline]
    pub fn build(self) -> DialogEngine<E> {
        let definition = build_sequence(self.steps);
        DialogEngine::with_sequence(self.event_store, definition)
    }
}
