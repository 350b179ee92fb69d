//! Canal de salida del host.
//!
//! Contrato fire-and-forget: el engine entrega el texto ya resuelto y no
//! observa el resultado del envío; la propagación de fallos de transporte es
//! responsabilidad del canal, no del secuenciador.

use std::cell::RefCell;

pub trait OutputChannel {
    fn send(&self, text: &str);
}

/// Canal nulo: descarta todo. Útil para runs sin efectos observables.
#[derive(Debug, Default)]
pub struct NullChannel;

impl OutputChannel for NullChannel {
    fn send(&self, _text: &str) {}
}

/// Canal in-memory que acumula los mensajes enviados, para tests.
#[derive(Debug, Default)]
pub struct MemoryChannel {
    sent: RefCell<Vec<String>>,
}

impl MemoryChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copia de los mensajes enviados hasta el momento (orden de envío).
    pub fn sent(&self) -> Vec<String> {
        self.sent.borrow().clone()
    }
}

impl OutputChannel for MemoryChannel {
    fn send(&self, text: &str) {
        self.sent.borrow_mut().push(text.to_string());
    }
}
