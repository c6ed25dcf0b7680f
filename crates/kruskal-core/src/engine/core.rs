//! Core KruskalEngine implementation

use indexmap::IndexSet;
use log::{debug, info};
use uuid::Uuid;

use super::{sort_edges, TreeGoal};
use crate::errors::KruskalError;
use crate::event::{EventStore, InMemoryEventStore, TraceEvent, TraceEventKind};
use crate::graph::{validate_edges, Edge, Graph, Node, Weight};
use crate::history::StepHistory;
use crate::step::{Step, StepAction, StepOutcome};
use crate::union_find::UnionFind;

/// Motor de ejecución de Kruskal con traza determinista.
///
/// Sólo mantiene el store de eventos entre ejecuciones: el union-find se crea
/// dentro de cada `run` y se descarta al devolver el historial.
///
/// Con `InMemoryEventStore` los eventos de todas las ejecuciones (incluida la
/// lista ordenada de aristas de cada `RunInitialized`) se acumulan mientras
/// viva el engine. Para ejecuciones sueltas usar `crate::run`, que descarta el
/// engine al terminar, o `clear_events` entre ejecuciones.
#[derive(Debug)]
pub struct KruskalEngine<E>
    where E: EventStore
{
    event_store: E,
    last_run_id: Option<Uuid>,
}

impl KruskalEngine<InMemoryEventStore> {
    /// Crea un engine con store de eventos en memoria
    pub fn new() -> Self {
        Self::with_store(InMemoryEventStore::default())
    }
}

impl Default for KruskalEngine<InMemoryEventStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> KruskalEngine<E> where E: EventStore
{
    pub fn with_store(event_store: E) -> Self {
        Self { event_store,
               last_run_id: None }
    }

    pub fn event_store(&self) -> &E {
        &self.event_store
    }

    /// `run_id` de la última ejecución exitosa.
    pub fn last_run_id(&self) -> Option<Uuid> {
        self.last_run_id
    }

    /// Ejecuta sobre un `Graph` ya construido.
    pub fn run_graph(&mut self, graph: &Graph, goal: TreeGoal) -> Result<StepHistory, KruskalError> {
        self.run(graph.nodes().iter().cloned(), graph.edges().to_vec(), goal)
    }

    /// Ejecuta Kruskal y devuelve la traza completa.
    ///
    /// Valida referencias antes de crear cualquier estado de union-find. Un
    /// grafo vacío o disconexo no es error: produce un bosque parcial.
    pub fn run<I, N>(&mut self, nodes: I, edges: Vec<Edge>, goal: TreeGoal) -> Result<StepHistory, KruskalError>
        where I: IntoIterator<Item = N>,
              N: Into<Node>
    {
        let nodes: IndexSet<Node> = nodes.into_iter().map(Into::into).collect();
        validate_edges(&nodes, &edges)?;

        let sorted = sort_edges(&edges, goal);
        let run_id = Uuid::new_v4();
        info!("run:start run_id={run_id} goal={goal} nodes={} edges={}",
              nodes.len(),
              sorted.len());

        self.event_store.append_kind(run_id,
                                     TraceEventKind::RunInitialized { goal,
                                                                      node_count: nodes.len(),
                                                                      edge_count: sorted.len(),
                                                                      sorted_edges: sorted.clone() });

        let steps = trace_steps(&nodes, &sorted)?;
        for s in &steps {
            self.event_store.append_kind(run_id,
                                         TraceEventKind::StepRecorded { step_index: s.index(),
                                                                        action: s.action(),
                                                                        edge: s.edge().cloned() });
        }

        let history = StepHistory::new(run_id, goal, nodes.len(), sorted, steps);
        let last = history.final_step();
        self.event_store.append_kind(run_id,
                                     TraceEventKind::RunCompleted { tree_edge_count: last.tree_edge_count(),
                                                                    total_weight: last.total_weight(),
                                                                    trace_fingerprint: history.fingerprint().to_string() });
        info!("run:done run_id={run_id} steps={} tree_edges={} total_weight={}",
              history.len(),
              last.tree_edge_count(),
              last.total_weight());

        self.last_run_id = Some(run_id);
        Ok(history)
    }

    /// Descarta los eventos acumulados y olvida la última ejecución.
    pub fn clear_events(&mut self) {
        self.event_store.clear();
        self.last_run_id = None;
    }

    /// Lista eventos de una ejecución
    pub fn events_for(&self, run_id: Uuid) -> Vec<TraceEvent> {
        self.event_store.list(run_id)
    }

    /// Eventos de la última ejecución
    pub fn events(&self) -> Option<Vec<TraceEvent>> {
        self.last_run_id.map(|rid| self.event_store.list(rid))
    }

    /// Variante compacta de eventos de una ejecución
    pub fn event_variants(&self, run_id: Uuid) -> Vec<&'static str> {
        self.events_for(run_id)
            .iter()
            .map(|e| match e.kind {
                TraceEventKind::RunInitialized { .. } => "I",
                TraceEventKind::StepRecorded { .. } => "S",
                TraceEventKind::RunCompleted { .. } => "C",
            })
            .collect()
    }
}

/// Recorre las aristas ya ordenadas y registra cada decisión.
///
/// Por arista: un `Considering` con el estado previo y luego `Added` (estado
/// tras la unión) o `Rejected` (estado idéntico al previo). Cierra con un
/// único `Completed`.
fn trace_steps(nodes: &IndexSet<Node>, sorted: &[Edge]) -> Result<Vec<Step>, KruskalError> {
    let mut uf = UnionFind::new(nodes);
    let mut tree: Vec<Edge> = Vec::new();
    let mut total: Weight = 0;
    let mut steps: Vec<Step> = Vec::with_capacity(2 * sorted.len() + 1);

    for edge in sorted {
        let root_u = uf.find(&edge.u)?;
        let root_v = uf.find(&edge.v)?;

        let before = uf.snapshot();
        steps.push(Step::new(steps.len(),
                             Some(edge.clone()),
                             StepAction::Considering,
                             None,
                             tree.clone(),
                             total,
                             before.clone()));

        if root_u != root_v {
            total = total.checked_add(edge.weight)
                         .ok_or(KruskalError::WeightOverflow { total,
                                                               weight: edge.weight })?;
            tree.push(edge.clone());
            uf.union(&root_u, &root_v)?;
            debug!("step:added edge={edge} total_weight={total}");
            steps.push(Step::new(steps.len(),
                                 Some(edge.clone()),
                                 StepAction::Added,
                                 Some(StepOutcome::Accepted),
                                 tree.clone(),
                                 total,
                                 uf.snapshot()));
        } else {
            debug!("step:rejected edge={edge} root={root_u}");
            steps.push(Step::new(steps.len(),
                                 Some(edge.clone()),
                                 StepAction::Rejected,
                                 Some(StepOutcome::FormsCycle),
                                 tree.clone(),
                                 total,
                                 before));
        }
    }

    steps.push(Step::new(steps.len(),
                         None,
                         StepAction::Completed,
                         Some(StepOutcome::SpanningTreeFound),
                         tree,
                         total,
                         uf.snapshot()));
    Ok(steps)
}
