//! kruskal-core: generador determinista de trazas de Kruskal.
//!
//! Ejecuta el algoritmo una vez sobre un grafo ponderado no dirigido, registra
//! cada decisión como un `Step` inmutable y expone la secuencia a través de
//! `StepHistory` para navegación hacia adelante y hacia atrás.
pub mod constants;
pub mod engine;
pub mod errors;
pub mod event;
pub mod graph;
pub mod hashing;
pub mod history;
pub mod step;
pub mod union_find;

pub use engine::{sort_edges, KruskalEngine, TreeGoal};
pub use errors::KruskalError;
pub use event::{EventStore, InMemoryEventStore, TraceEvent, TraceEventKind};
pub use graph::{Edge, Graph, Node, Weight};
pub use history::{StepHistory, TraceSummary};
pub use step::{Step, StepAction, StepOutcome};
pub use union_find::{Component, UnionFind, UnionFindSnapshot};

/// Punto de entrada para la capa de presentación.
///
/// `maximize = false` busca el árbol de expansión mínima, `true` el máximo.
/// Equivale a un `KruskalEngine` en memoria descartado tras la llamada.
pub fn run<I, N>(nodes: I, edges: Vec<Edge>, maximize: bool) -> Result<StepHistory, KruskalError>
    where I: IntoIterator<Item = N>,
          N: Into<Node>
{
    KruskalEngine::new().run(nodes, edges, TreeGoal::from_maximize(maximize))
}
