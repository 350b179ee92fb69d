//! Constantes del secuenciador.
//!
//! Valores estáticos que participan en la identidad de las definiciones de
//! secuencia. `SEQUENCER_VERSION` entra en el hash de definición: un cambio
//! de versión del motor invalida la identidad aunque los pasos no cambien.

/// Versión lógica del secuenciador (D1). Mantener estable mientras no haya
/// cambios incompatibles en el contrato de eventos o de pasos.
pub const SEQUENCER_VERSION: &str = "D1.0";
