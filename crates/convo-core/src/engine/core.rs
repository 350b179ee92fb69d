//! Core DialogEngine implementation

use std::collections::HashMap;

use serde_json::Value;
use uuid::Uuid;

use crate::channel::OutputChannel;
use crate::engine::run::{RunHandle, RunState};
use crate::engine::EngineBuilderInit;
use crate::errors::SequencerError;
use crate::event::{EventStore, RunEvent, RunEventKind};
use crate::model::StepContext;
use crate::sequence::SequenceDefinition;
use crate::step::StepResult;

/// Estado interno de un run. Propiedad exclusiva del engine; los pasos sólo
/// lo ven a través de `StepContext`.
struct RunRecord {
    cursor: usize,
    initial: Option<Value>, // input pre-suministrado, inmutable tras start
    carried: Option<Value>, // resultado del paso anterior
    resumed_at: Option<usize>, // índice cuyo input acaba de llegar (detección de ProtocolViolation)
    state: RunState,
}

/// Motor de ejecución de secuencias de diálogo.
///
/// Responsable de recorrer la lista ordenada de pasos, decidir por resultado
/// de paso si continuar, suspender o terminar, y dejar cada transición en el
/// `EventStore`. Un run es estrictamente secuencial; runs independientes no
/// comparten estado mutable entre sí.
pub struct DialogEngine<E>
    where E: EventStore
{
    event_store: E,
    definition: SequenceDefinition,
    runs: HashMap<Uuid, RunRecord>,
}

impl DialogEngine<crate::event::InMemoryEventStore> {
    /// Crea un nuevo builder con store de eventos in-memory.
    #[inline]
    pub fn new() -> EngineBuilderInit<crate::event::InMemoryEventStore> {
        EngineBuilderInit { event_store: crate::event::InMemoryEventStore::default() }
    }
}

impl<E> DialogEngine<E>
    where E: EventStore
{
    /// Crea un nuevo builder para configurar el engine sobre `event_store`.
    #[inline]
    pub fn builder(event_store: E) -> EngineBuilderInit<E> {
        EngineBuilderInit { event_store }
    }

    /// Crea un engine con una definición ya construida.
    pub fn with_sequence(event_store: E, definition: SequenceDefinition) -> Self {
        Self { event_store,
               definition,
               runs: HashMap::new() }
    }

    /// Comienza un run nuevo en el índice 0.
    ///
    /// `initial` es el input pre-suministrado para todo el run (inmutable una
    /// vez comenzado). Una secuencia vacía es un error de configuración y se
    /// rechaza antes de invocar nada.
    pub fn start(&mut self, channel: &dyn OutputChannel, initial: Option<Value>) -> Result<RunHandle, SequencerError> {
        if self.definition.is_empty() {
            return Err(SequencerError::EmptySequence);
        }

        let run_id = Uuid::new_v4();
        self.event_store
            .append_kind(run_id,
                         RunEventKind::RunStarted { definition_hash: self.definition.definition_hash.clone(),
                                                    step_count: self.definition.len() });
        self.runs.insert(run_id,
                         RunRecord { cursor: 0,
                                     initial,
                                     carried: None,
                                     resumed_at: None,
                                     state: RunState::Pending });
        self.advance(run_id, channel)
    }

    /// Reanuda un run suspendido con el valor que esperaba.
    ///
    /// El valor queda acarreado como "resultado del paso anterior" y se
    /// re-invoca el mismo índice que pidió el input. Ese paso debe producir
    /// ahora `Continue` o `Complete`; un segundo `WaitForInput` consecutivo en
    /// el mismo índice es un bug del paso y el run falla con
    /// `ProtocolViolation`.
    pub fn resume(&mut self, channel: &dyn OutputChannel, run_id: Uuid, value: Value) -> Result<RunHandle, SequencerError> {
        let step_index = {
            let record = self.runs.get(&run_id).ok_or(SequencerError::UnknownRun)?;
            match &record.state {
                RunState::Suspended { step_index, .. } => *step_index,
                _ => return Err(SequencerError::InvalidState),
            }
        };

        self.event_store
            .append_kind(run_id, RunEventKind::InputProvided { step_index, value: value.clone() });

        let record = self.run_mut(run_id)?;
        record.carried = Some(value);
        record.resumed_at = Some(step_index);
        self.advance(run_id, channel)
    }

    /// Vista actual del estado de un run, si existe.
    pub fn handle(&self, run_id: Uuid) -> Option<RunHandle> {
        self.runs.get(&run_id).map(|r| RunHandle { run_id, state: r.state.clone() })
    }

    /// Ids de todos los runs conocidos por este engine.
    pub fn run_ids(&self) -> Vec<Uuid> {
        self.runs.keys().copied().collect()
    }

    /// Lista eventos de un run (orden de append).
    pub fn list_events(&self, run_id: Uuid) -> Vec<RunEvent> {
        self.event_store.list(run_id)
    }

    /// Variante compacta de eventos para aserciones en tests.
    pub fn event_variants(&self, run_id: Uuid) -> Vec<&'static str> {
        self.event_store
            .list(run_id)
            .iter()
            .map(|e| match e.kind {
                RunEventKind::RunStarted { .. } => "I",
                RunEventKind::StepEntered { .. } => "S",
                RunEventKind::StepCompleted { .. } => "F",
                RunEventKind::InputRequested { .. } => "U",
                RunEventKind::InputProvided { .. } => "V",
                RunEventKind::RunCompleted { .. } => "C",
                RunEventKind::RunFailed { .. } => "X",
            })
            .collect()
    }

    /// Avanza el run desde su cursor hasta suspensión, cierre o fallo.
    fn advance(&mut self, run_id: Uuid, channel: &dyn OutputChannel) -> Result<RunHandle, SequencerError> {
        loop {
            let (cursor, resumed_at) = {
                let record = self.runs.get(&run_id).ok_or(SequencerError::UnknownRun)?;
                (record.cursor, record.resumed_at)
            };

            // Lista agotada sin paso terminal: bug de configuración de la
            // secuencia, no del motor.
            if cursor >= self.definition.len() {
                return self.fail_run(run_id, SequencerError::SequenceExhausted);
            }

            let step_id = self.definition.steps[cursor].id().to_string();
            self.event_store
                .append_kind(run_id, RunEventKind::StepEntered { step_index: cursor, step_id: step_id.clone() });

            let result = {
                let record = self.runs.get(&run_id).ok_or(SequencerError::UnknownRun)?;
                let ctx = StepContext { initial: record.initial.as_ref(),
                                        carried: record.carried.as_ref(),
                                        channel };
                self.definition.steps[cursor].run(&ctx)
            };

            match result {
                StepResult::Continue { value } => {
                    self.event_store
                        .append_kind(run_id, RunEventKind::StepCompleted { step_index: cursor, step_id });
                    let record = self.run_mut(run_id)?;
                    record.carried = value;
                    record.cursor += 1;
                    record.resumed_at = None;
                }
                StepResult::WaitForInput { prompt } => {
                    // El índice que acaba de recibir input no puede volver a
                    // pedirlo en la misma reanudación.
                    if resumed_at == Some(cursor) {
                        return self.fail_run(run_id, SequencerError::ProtocolViolation(cursor));
                    }
                    self.event_store
                        .append_kind(run_id,
                                     RunEventKind::InputRequested { step_index: cursor,
                                                                    step_id,
                                                                    prompt: prompt.clone() });
                    let record = self.run_mut(run_id)?;
                    record.state = RunState::Suspended { step_index: cursor, prompt };
                    return Ok(RunHandle { run_id, state: record.state.clone() });
                }
                StepResult::Complete { output } => {
                    self.event_store
                        .append_kind(run_id, RunEventKind::RunCompleted { output: output.clone() });
                    let record = self.run_mut(run_id)?;
                    record.state = RunState::Completed { output };
                    return Ok(RunHandle { run_id, state: record.state.clone() });
                }
            }
        }
    }

    fn fail_run(&mut self, run_id: Uuid, error: SequencerError) -> Result<RunHandle, SequencerError> {
        self.event_store
            .append_kind(run_id, RunEventKind::RunFailed { error: error.clone() });
        if let Some(record) = self.runs.get_mut(&run_id) {
            record.state = RunState::Failed { error: error.clone() };
        }
        Err(error)
    }

    fn run_mut(&mut self, run_id: Uuid) -> Result<&mut RunRecord, SequencerError> {
        self.runs.get_mut(&run_id).ok_or(SequencerError::UnknownRun)
    }
}
