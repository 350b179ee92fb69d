//! Generación de ids de cliente como capacidad inyectada.
//!
//! El paso terminal no toca ninguna fuente aleatoria global: recibe un
//! `CustomerIdSource`. En producción se usa la variante sembrada por uuid;
//! en tests, una fija.

use uuid::Uuid;

pub trait CustomerIdSource {
    fn next_id(&self) -> i32;
}

/// Ids no negativos derivados de un uuid v4 fresco.
#[derive(Debug, Default)]
pub struct UuidCustomerIds;

impl CustomerIdSource for UuidCustomerIds {
    fn next_id(&self) -> i32 {
        let bytes = Uuid::new_v4().into_bytes();
        let raw = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        (raw & 0x7fff_ffff) as i32
    }
}

/// Fuente determinista para tests: siempre el mismo id.
#[derive(Debug, Clone, Copy)]
pub struct FixedCustomerIds(pub i32);

impl CustomerIdSource for FixedCustomerIds {
    fn next_id(&self) -> i32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_ids_are_non_negative() {
        let ids = UuidCustomerIds;
        for _ in 0..32 {
            assert!(ids.next_id() >= 0);
        }
    }
}
