use crate::model::StepContext;
use super::run_result::StepResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind { Prompt, Notify, Terminal }

/// Trait que define un Step. Implementaciones deben ser deterministas
/// respecto al contexto recibido; cualquier efecto observable (enviar un
/// mensaje por el canal) ocurre a lo sumo una vez por paso y run, porque un
/// paso completado nunca se re-invoca.
pub trait StepDefinition {
    /// Identificador estable y único dentro de la secuencia.
    fn id(&self) -> &str;

    /// Nombre opcional amigable.
    fn name(&self) -> &str { self.id() }

    /// Ejecución del step contra el contexto del run.
    fn run(&self, ctx: &StepContext) -> StepResult;

    /// Tipo general del step.
    fn kind(&self) -> StepKind;
}
