//! Grafo ponderado no dirigido consumido por el motor.
//!
//! El grafo no impone conexidad ni unicidad de aristas: eso es política del
//! colaborador que lo genera. Sólo valida que cada arista referencie nodos
//! existentes.

mod edge;
mod node;

pub use edge::{Edge, Weight};
pub use node::Node;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::errors::KruskalError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GraphParts")]
pub struct Graph {
    nodes: IndexSet<Node>,
    edges: Vec<Edge>,
}

/// Forma serializada de `Graph`; al deserializar pasa por `Graph::new`.
#[derive(Deserialize)]
struct GraphParts {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl TryFrom<GraphParts> for Graph {
    type Error = KruskalError;

    fn try_from(parts: GraphParts) -> Result<Self, Self::Error> {
        Graph::new(parts.nodes, parts.edges)
    }
}

impl Graph {
    /// Construye un grafo validando que toda arista referencie nodos del
    /// conjunto. Nodos repetidos se colapsan conservando la primera aparición.
    pub fn new<I, N>(nodes: I, edges: Vec<Edge>) -> Result<Self, KruskalError>
        where I: IntoIterator<Item = N>,
              N: Into<Node>
    {
        let nodes: IndexSet<Node> = nodes.into_iter().map(Into::into).collect();
        validate_edges(&nodes, &edges)?;
        Ok(Self { nodes, edges })
    }

    /// Grafo cuyos nodos son los extremos de `edges`, en orden de aparición.
    pub fn from_edges(edges: Vec<Edge>) -> Self {
        let mut nodes = IndexSet::new();
        for e in &edges {
            nodes.insert(e.u.clone());
            nodes.insert(e.v.clone());
        }
        Self { nodes, edges }
    }

    pub fn nodes(&self) -> &IndexSet<Node> {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Valida referencias de aristas contra el conjunto de nodos.
///
/// Devuelve el primer extremo desconocido (en orden de lista y `u` antes que
/// `v`).
pub fn validate_edges(nodes: &IndexSet<Node>, edges: &[Edge]) -> Result<(), KruskalError> {
    for (edge_index, e) in edges.iter().enumerate() {
        for endpoint in [&e.u, &e.v] {
            if !nodes.contains(endpoint) {
                return Err(KruskalError::UnknownEndpoint { edge_index,
                                                           node: endpoint.clone() });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_unknown_endpoint() {
        let err = Graph::new(["A", "B"], vec![Edge::new("A", "B", 1), Edge::new("B", "Z", 2)]).unwrap_err();
        assert_eq!(err,
                   KruskalError::UnknownEndpoint { edge_index: 1,
                                                   node: Node::from("Z") });
    }

    #[test]
    fn duplicate_nodes_collapse_in_first_seen_order() {
        let g = Graph::new(["B", "A", "B"], vec![]).unwrap();
        let order: Vec<&str> = g.nodes().iter().map(Node::as_str).collect();
        assert_eq!(order, vec!["B", "A"]);
    }

    #[test]
    fn from_edges_collects_endpoints() {
        let g = Graph::from_edges(vec![Edge::new("C", "A", 4), Edge::new("A", "B", 1)]);
        let order: Vec<&str> = g.nodes().iter().map(Node::as_str).collect();
        assert_eq!(order, vec!["C", "A", "B"]);
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn duplicate_edges_are_kept() {
        let g = Graph::new(["A", "B"], vec![Edge::new("A", "B", 1), Edge::new("B", "A", 1)]).unwrap();
        assert_eq!(g.edge_count(), 2);
        assert!(g.edges()[1].joins(&Node::from("A"), &Node::from("B")));
    }

    #[test]
    fn deserialize_validates_references() {
        let ok: Graph = serde_json::from_str(r#"{"nodes":["A","B"],"edges":[{"u":"A","v":"B","weight":2}]}"#).unwrap();
        assert_eq!(ok, Graph::new(["A", "B"], vec![Edge::new("A", "B", 2)]).unwrap());

        let err = serde_json::from_str::<Graph>(r#"{"nodes":["A"],"edges":[{"u":"A","v":"Q","weight":2}]}"#).unwrap_err();
        assert!(err.to_string().contains("unknown node 'Q'"), "{err}");
    }

    #[test]
    fn serialized_graph_round_trips_through_validation() {
        let g = Graph::new(["B", "A"], vec![Edge::new("A", "B", 7)]).unwrap();
        let back: Graph = serde_json::from_value(serde_json::to_value(&g).unwrap()).unwrap();
        assert_eq!(back, g);
    }
}
