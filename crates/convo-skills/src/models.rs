//! Modelos tipados de la acción de ejemplo.
//!
//! Los nombres de campo serializados (`name`, `customerId`) son el contrato
//! de wire de la acción; el core nunca los interpreta.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Input opcional suministrado por el caller al comenzar el run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleActionInput {
    pub name: String,
}

impl SampleActionInput {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Payload neutral para `DialogEngine::start`.
    pub fn to_value(&self) -> Value {
        json!({ "name": self.name })
    }
}

/// Resultado del paso terminal; se vuelve el resultado del run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleActionOutput {
    #[serde(rename = "customerId")]
    pub customer_id: i32,
}

impl SampleActionOutput {
    pub fn to_value(&self) -> Value {
        json!({ "customerId": self.customer_id })
    }

    pub fn from_value(value: &Value) -> Option<Self> {
        serde_json::from_value(value.clone()).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_round_trips_with_wire_field_name() {
        let out = SampleActionOutput { customer_id: 42 };
        let v = out.to_value();
        assert_eq!(v["customerId"], 42);
        assert_eq!(SampleActionOutput::from_value(&v), Some(out));
    }
}
