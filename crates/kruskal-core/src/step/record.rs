use serde::{Deserialize, Serialize};

use super::{StepAction, StepOutcome};
use crate::errors::KruskalError;
use crate::graph::{Edge, Weight};
use crate::union_find::{Component, UnionFindSnapshot};

/// Snapshot inmutable de un punto de decisión.
///
/// Todo el contenido es copia por valor: mutar el union-find vivo después de
/// registrar el paso no lo altera.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    index: usize,
    edge: Option<Edge>, // None sólo en el paso final
    action: StepAction,
    outcome: Option<StepOutcome>,
    tree_edges: Vec<Edge>, // estado tras este paso
    total_weight: Weight,
    union_find: UnionFindSnapshot,
}

impl Step {
    pub(crate) fn new(index: usize,
                      edge: Option<Edge>,
                      action: StepAction,
                      outcome: Option<StepOutcome>,
                      tree_edges: Vec<Edge>,
                      total_weight: Weight,
                      union_find: UnionFindSnapshot)
                      -> Self {
        Self { index,
               edge,
               action,
               outcome,
               tree_edges,
               total_weight,
               union_find }
    }

    /// Posición 0-based dentro de la traza.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn edge(&self) -> Option<&Edge> {
        self.edge.as_ref()
    }

    pub fn action(&self) -> StepAction {
        self.action
    }

    pub fn outcome(&self) -> Option<StepOutcome> {
        self.outcome
    }

    /// Texto del resultado (`None` en `Considering`).
    pub fn result(&self) -> Option<&'static str> {
        self.outcome.map(|o| o.description())
    }

    pub fn tree_edges(&self) -> &[Edge] {
        &self.tree_edges
    }

    pub fn tree_edge_count(&self) -> usize {
        self.tree_edges.len()
    }

    pub fn total_weight(&self) -> Weight {
        self.total_weight
    }

    pub fn union_find(&self) -> &UnionFindSnapshot {
        &self.union_find
    }

    pub fn components(&self) -> Result<Vec<Component>, KruskalError> {
        self.union_find.components()
    }

    pub fn is_final(&self) -> bool {
        matches!(self.action, StepAction::Completed)
    }
}
