use serde_json::Value;

use crate::channel::OutputChannel;

/// Contexto de ejecución entregado a `StepDefinition::run`.
///
/// Se construye una vez por invocación de paso y sólo presta referencias:
/// el estado real del run (input inicial, valor acarreado) es propiedad del
/// engine y se descarta al terminar el run.
pub struct StepContext<'a> {
    pub initial: Option<&'a Value>, // input pre-suministrado para todo el run (inmutable)
    pub carried: Option<&'a Value>, // resultado del paso anterior (None en el primer paso sin resume)
    pub channel: &'a dyn OutputChannel,
}

impl<'a> StepContext<'a> {
    /// Campo string no vacío dentro del input inicial, si existe.
    ///
    /// Es el soporte de la política "saltar el prompt si ya vino el dato":
    /// la decisión es del paso, el engine no tiene atajo alguno.
    pub fn initial_field(&self, field: &str) -> Option<&'a str> {
        self.initial?
            .get(field)?
            .as_str()
            .filter(|s| !s.is_empty())
    }

    /// Valor acarreado interpretado como string, si aplica.
    pub fn carried_str(&self) -> Option<&'a str> {
        self.carried?.as_str()
    }
}
