//! Definiciones relacionadas a Steps.
//!
//! En el secuenciador D1, un Step es una unidad determinista que consume el
//! estado previo del run y produce exactamente uno de tres resultados:
//! - `Continue`: avanzar al siguiente índice, acarreando un valor opcional.
//! - `WaitForInput`: suspender el run hasta que el host suministre un valor.
//! - `Complete`: terminar el run con el payload de salida.
//!
//! Los pasos no comparten estado mutable entre sí salvo a través del
//! `StepContext`.

pub mod definition;
mod run_result;

pub use definition::{StepDefinition, StepKind};
pub use run_result::StepResult;
