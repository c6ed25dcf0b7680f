use std::fmt;

use serde::{Deserialize, Serialize};

use super::Node;

/// Peso de una arista. Entero, por lo que siempre es finito.
pub type Weight = i64;

/// Arista no dirigida `(u, v)` con su peso.
///
/// El orden de `u`/`v` sólo refleja cómo llegó la arista; el motor no lo
/// interpreta. Duplicados y lazos se toleran y se procesan uno a uno.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub u: Node,
    pub v: Node,
    pub weight: Weight,
}

impl Edge {
    pub fn new(u: impl Into<Node>, v: impl Into<Node>, weight: Weight) -> Self {
        Self { u: u.into(),
               v: v.into(),
               weight }
    }

    /// `true` si la arista une `a` y `b` en cualquier orden.
    pub fn joins(&self, a: &Node, b: &Node) -> bool {
        (&self.u == a && &self.v == b) || (&self.u == b && &self.v == a)
    }

    pub fn is_self_loop(&self) -> bool {
        self.u == self.v
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} ({})", self.u, self.v, self.weight)
    }
}

impl<U: Into<Node>, V: Into<Node>> From<(U, V, Weight)> for Edge {
    fn from((u, v, weight): (U, V, Weight)) -> Self {
        Self::new(u, v, weight)
    }
}
