//! Historial navegable de una traza.
//!
//! `StepHistory` envuelve la secuencia de `Step` con un cursor acotado a
//! `[0, len-1]`. `advance`/`retreat` son las únicas transiciones y en los
//! extremos son no-ops (no envuelven ni fallan). Mover el cursor requiere
//! `&mut self`: compartirlo entre hilos exige sincronización externa.

use serde::Serialize;
use uuid::Uuid;

use crate::engine::TreeGoal;
use crate::errors::KruskalError;
use crate::graph::{Edge, Weight};
use crate::hashing::trace_fingerprint;
use crate::step::{Step, StepAction};

#[derive(Debug, Clone, Serialize)]
pub struct StepHistory {
    run_id: Uuid,
    goal: TreeGoal,
    node_count: usize,
    sorted_edges: Vec<Edge>,
    steps: Vec<Step>,
    cursor: usize,
    fingerprint: String,
}

/// Resumen del resultado final de una ejecución.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceSummary {
    pub goal: TreeGoal,
    pub tree_edge_count: usize,
    /// `node_count - 1` (0 para grafos vacíos).
    pub expected_edge_count: usize,
    pub total_weight: Weight,
    /// `false` si el grafo era disconexo: el resultado es un bosque.
    pub spans_all_nodes: bool,
}

impl StepHistory {
    pub(crate) fn new(run_id: Uuid, goal: TreeGoal, node_count: usize, sorted_edges: Vec<Edge>, steps: Vec<Step>) -> Self {
        let fingerprint = trace_fingerprint(goal, &steps);
        Self { run_id,
               goal,
               node_count,
               sorted_edges,
               steps,
               cursor: 0,
               fingerprint }
    }

    /// Reconstruye un historial a partir de steps ya registrados.
    ///
    /// El orden de aristas se deriva de los steps `Considering` y la cantidad
    /// de nodos del snapshot del último paso.
    pub fn from_steps(goal: TreeGoal, steps: Vec<Step>) -> Result<Self, KruskalError> {
        let last = steps.last().ok_or(KruskalError::EmptyHistory)?;
        let node_count = last.union_find().len();
        let sorted_edges = steps.iter()
                                .filter(|s| s.action() == StepAction::Considering)
                                .filter_map(|s| s.edge().cloned())
                                .collect();
        Ok(Self::new(Uuid::new_v4(), goal, node_count, sorted_edges, steps))
    }

    /// Step bajo el cursor.
    pub fn current(&self) -> &Step {
        &self.steps[self.cursor]
    }

    /// Avanza una posición salvo en el último índice. Devuelve si se movió.
    pub fn advance(&mut self) -> bool {
        if self.cursor + 1 < self.steps.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Retrocede una posición salvo en el índice 0. Devuelve si se movió.
    pub fn retreat(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    /// `(índice, longitud)` para mostrar "paso i/n".
    pub fn position(&self) -> (usize, usize) {
        (self.cursor, self.steps.len())
    }

    /// Acceso aleatorio acotado; devuelve el cursor resultante.
    pub fn seek(&mut self, index: usize) -> usize {
        self.cursor = index.min(self.steps.len() - 1);
        self.cursor
    }

    pub fn rewind(&mut self) {
        self.cursor = 0;
    }

    pub fn fast_forward(&mut self) {
        self.cursor = self.steps.len() - 1;
    }

    pub fn is_at_start(&self) -> bool {
        self.cursor == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.cursor + 1 == self.steps.len()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Siempre `false`: la traza contiene al menos el paso final.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    pub fn final_step(&self) -> &Step {
        &self.steps[self.steps.len() - 1]
    }

    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    pub fn goal(&self) -> TreeGoal {
        self.goal
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Aristas en el orden en que el motor las consideró.
    pub fn sorted_edges(&self) -> &[Edge] {
        &self.sorted_edges
    }

    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn summary(&self) -> TraceSummary {
        let last = self.final_step();
        let expected_edge_count = self.node_count.saturating_sub(1);
        TraceSummary { goal: self.goal,
                       tree_edge_count: last.tree_edge_count(),
                       expected_edge_count,
                       total_weight: last.total_weight(),
                       spans_all_nodes: last.tree_edge_count() == expected_edge_count }
    }
}

impl<'a> IntoIterator for &'a StepHistory {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::run;

    fn history() -> StepHistory {
        run(["A", "B", "C"],
            vec![Edge::new("A", "B", 5), Edge::new("B", "C", 3), Edge::new("A", "C", 10)],
            false).unwrap()
    }

    #[test]
    fn cursor_clamps_at_both_ends() {
        let mut h = history();
        assert_eq!(h.position(), (0, 7));
        assert!(!h.retreat());
        assert_eq!(h.position(), (0, 7));

        h.fast_forward();
        assert!(h.is_at_end());
        assert!(!h.advance());
        assert_eq!(h.position(), (6, 7));
        assert!(h.current().is_final());
    }

    #[test]
    fn advance_then_retreat_round_trips() {
        let mut h = history();
        for start in 0..h.len() {
            h.seek(start);
            let moved = h.advance();
            h.retreat();
            if moved {
                assert_eq!(h.position().0, start);
            } else {
                // último índice: advance no-op, retreat sí mueve
                assert_eq!(start, h.len() - 1);
                assert_eq!(h.position().0, start - 1);
            }
        }
    }

    #[test]
    fn seek_is_clamped() {
        let mut h = history();
        assert_eq!(h.seek(3), 3);
        assert_eq!(h.current().index(), 3);
        assert_eq!(h.seek(999), 6);
        h.rewind();
        assert!(h.is_at_start());
    }

    #[test]
    fn from_steps_rejects_empty_and_rebuilds_metadata() {
        assert_eq!(StepHistory::from_steps(TreeGoal::Minimum, vec![]).unwrap_err(),
                   KruskalError::EmptyHistory);

        let h = history();
        let rebuilt = StepHistory::from_steps(h.goal(), h.steps().to_vec()).unwrap();
        assert_eq!(rebuilt.sorted_edges(), h.sorted_edges());
        assert_eq!(rebuilt.node_count(), 3);
        assert_eq!(rebuilt.fingerprint(), h.fingerprint());
        assert_ne!(rebuilt.run_id(), h.run_id());
    }

    #[test]
    fn summary_reports_spanning_tree() {
        let s = history().summary();
        assert_eq!(s.tree_edge_count, 2);
        assert_eq!(s.expected_edge_count, 2);
        assert_eq!(s.total_weight, 8);
        assert!(s.spans_all_nodes);
    }
}
