use std::collections::HashMap;

use chrono::Utc;
use log::debug;
use uuid::Uuid;

use super::{TraceEvent, TraceEventKind};

/// Almacenamiento de eventos append-only.
pub trait EventStore {
    /// Agrega un evento a partir de su kind y devuelve el evento completo (con seq y ts).
    fn append_kind(&mut self, run_id: Uuid, kind: TraceEventKind) -> TraceEvent;
    /// Lista eventos de una ejecución (orden ascendente por seq).
    fn list(&self, run_id: Uuid) -> Vec<TraceEvent>;
    /// Descarta todos los eventos almacenados.
    fn clear(&mut self);
}

#[derive(Debug, Default)]
pub struct InMemoryEventStore {
    pub inner: HashMap<Uuid, Vec<TraceEvent>>,
}

impl EventStore for InMemoryEventStore {
    fn append_kind(&mut self, run_id: Uuid, kind: TraceEventKind) -> TraceEvent {
        let vec = self.inner.entry(run_id).or_default();
        let seq = vec.len() as u64;
        let ev = TraceEvent { seq,
                              run_id,
                              kind,
                              ts: Utc::now() };
        debug!("append_kind run_id={run_id} seq={seq}");
        vec.push(ev.clone());
        ev
    }

    fn list(&self, run_id: Uuid) -> Vec<TraceEvent> {
        self.inner.get(&run_id).cloned().unwrap_or_default()
    }

    fn clear(&mut self) {
        debug!("clear runs={}", self.inner.len());
        self.inner.clear();
    }
}
