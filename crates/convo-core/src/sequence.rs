//! Definición inmutable de una secuencia de pasos.
//!
//! La identidad de una secuencia es su `definition_hash`: blake3 sobre el
//! JSON canonicalizado de `{version del secuenciador, ids de pasos en orden}`.
//! El hash viaja en `RunStarted` para poder atribuir cualquier run a la
//! definición exacta que lo produjo.

use serde_json::json;

use crate::hashing::{hash_str, to_canonical_json};
use crate::step::StepDefinition;

pub struct SequenceDefinition {
    pub steps: Vec<Box<dyn StepDefinition>>,
    pub definition_hash: String,
}

impl SequenceDefinition {
    pub fn new(steps: Vec<Box<dyn StepDefinition>>, definition_hash: String) -> Self {
        Self { steps, definition_hash }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Construye la definición extrayendo los ids de los pasos en orden.
pub fn build_sequence(steps: Vec<Box<dyn StepDefinition>>) -> SequenceDefinition {
    let ids: Vec<&str> = steps.iter().map(|s| s.id()).collect();
    let ids_json = json!({
        "sequencer_version": crate::constants::SEQUENCER_VERSION,
        "step_ids": ids,
    });
    let definition_hash = hash_str(&to_canonical_json(&ids_json));
    SequenceDefinition::new(steps, definition_hash)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StepContext;
    use crate::step::{StepKind, StepResult};
    use serde_json::json;

    struct Named(&'static str);
    impl StepDefinition for Named {
        fn id(&self) -> &str {
            self.0
        }
        fn run(&self, _ctx: &StepContext) -> StepResult {
            StepResult::Complete { output: json!(null) }
        }
        fn kind(&self) -> StepKind {
            StepKind::Terminal
        }
    }

    #[test]
    fn hash_depends_on_step_ids_and_order() {
        let a = build_sequence(vec![Box::new(Named("x")), Box::new(Named("y"))]);
        let b = build_sequence(vec![Box::new(Named("y")), Box::new(Named("x"))]);
        let c = build_sequence(vec![Box::new(Named("x")), Box::new(Named("y"))]);
        assert_ne!(a.definition_hash, b.definition_hash);
        assert_eq!(a.definition_hash, c.definition_hash);
    }
}
