//! Tipos de evento de traza y estructura `TraceEvent`.
//!
//! Rol en la ejecución:
//! - Cada `run` del `KruskalEngine` emite eventos a un `EventStore`
//!   append-only.
//! - Los eventos resumen la traza (orden de aristas, decisiones, cierre) para
//!   observadores externos; la traza completa vive en `StepHistory`.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::engine::TreeGoal;
use crate::graph::{Edge, Weight};
use crate::step::StepAction;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TraceEventKind {
    /// Primer evento de un `run_id`: fija objetivo, tamaños y el orden de
    /// aristas ya ordenado.
    RunInitialized {
        goal: TreeGoal,
        node_count: usize,
        edge_count: usize,
        sorted_edges: Vec<Edge>,
    },
    /// Se registró un step en la traza.
    StepRecorded {
        step_index: usize,
        action: StepAction,
        edge: Option<Edge>,
    },
    /// Cierre de la ejecución con el fingerprint de la traza.
    RunCompleted {
        tree_edge_count: usize,
        total_weight: Weight,
        trace_fingerprint: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceEvent {
    pub seq: u64, // asignado por el EventStore (orden append)
    pub run_id: Uuid,
    pub kind: TraceEventKind,
    pub ts: DateTime<Utc>, // metadato (no entra en fingerprint)
}
