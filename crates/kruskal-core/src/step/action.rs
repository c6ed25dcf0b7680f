use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{OUTCOME_ACCEPTED, OUTCOME_FORMS_CYCLE, OUTCOME_TREE_FOUND};

/// Acción registrada en un `Step`.
///
/// Secuencia por arista: `Considering` seguido de `Added` o `Rejected`. La
/// traza termina siempre con un único `Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepAction {
    /// Arista bajo consideración, antes de decidir.
    Considering,
    /// La arista entró al árbol.
    Added,
    /// La arista cerraría un ciclo.
    Rejected,
    /// Paso final.
    Completed,
}

impl StepAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepAction::Considering => "considering",
            StepAction::Added => "added",
            StepAction::Rejected => "rejected",
            StepAction::Completed => "completed",
        }
    }

    /// `true` para acciones que cierran la decisión sobre una arista.
    pub fn is_decision(&self) -> bool {
        matches!(self, StepAction::Added | StepAction::Rejected)
    }
}

impl fmt::Display for StepAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Descripción del resultado de un paso decidido.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepOutcome {
    Accepted,
    FormsCycle,
    SpanningTreeFound,
}

impl StepOutcome {
    pub fn description(&self) -> &'static str {
        match self {
            StepOutcome::Accepted => OUTCOME_ACCEPTED,
            StepOutcome::FormsCycle => OUTCOME_FORMS_CYCLE,
            StepOutcome::SpanningTreeFound => OUTCOME_TREE_FOUND,
        }
    }
}

impl fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
