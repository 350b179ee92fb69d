//! Hash de contenido (blake3, hex) sobre strings y valores canonicalizados.

use serde_json::Value;

use super::to_canonical_json;

/// Hash hex de un string.
pub fn hash_str(s: &str) -> String {
    blake3::hash(s.as_bytes()).to_hex().to_string()
}

/// Hash hex de un `Value` JSON, previa canonicalización.
pub fn hash_value(value: &Value) -> String {
    hash_str(&to_canonical_json(value))
}
