//! Errores específicos del core.
//!
//! Todos los fallos son fatales para la llamada a `run` y se devuelven de
//! forma síncrona; no hay reintentos porque el cálculo es puro.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::graph::{Node, Weight};

#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum KruskalError {
    /// Una arista referencia un nodo que no está en el conjunto de nodos.
    #[error("edge #{edge_index} references unknown node '{node}'")]
    UnknownEndpoint { edge_index: usize, node: Node },
    /// `find`/`union` recibió un nodo nunca registrado en el union-find.
    #[error("node '{0}' is not registered in the union-find")]
    UnregisteredNode(Node),
    /// La suma de pesos del árbol no cabe en `Weight`.
    #[error("total weight overflow adding {weight} to {total}")]
    WeightOverflow { total: Weight, weight: Weight },
    #[error("a step history needs at least one step")]
    EmptyHistory,
}
