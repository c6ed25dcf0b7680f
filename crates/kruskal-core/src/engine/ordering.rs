//! Orden de consideración de aristas.
//!
//! Ordenación estable sólo por peso: ante empate decide el orden de entrada.
//! La traza es reproducible únicamente si el llamador entrega las aristas en
//! el mismo orden; no hay desempate canónico por extremos.

use super::TreeGoal;
use crate::graph::Edge;

pub fn sort_edges(edges: &[Edge], goal: TreeGoal) -> Vec<Edge> {
    let mut sorted = edges.to_vec();
    match goal {
        TreeGoal::Minimum => sorted.sort_by(|a, b| a.weight.cmp(&b.weight)),
        TreeGoal::Maximum => sorted.sort_by(|a, b| b.weight.cmp(&a.weight)),
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(edges: &[Edge]) -> Vec<String> {
        edges.iter().map(|e| format!("{}{}", e.u, e.v)).collect()
    }

    #[test]
    fn ascending_keeps_tie_order() {
        let edges = vec![Edge::new("C", "D", 2), Edge::new("A", "B", 1), Edge::new("B", "C", 2), Edge::new("A", "D", 1)];
        assert_eq!(labels(&sort_edges(&edges, TreeGoal::Minimum)), vec!["AB", "AD", "CD", "BC"]);
    }

    #[test]
    fn descending_keeps_tie_order() {
        let edges = vec![Edge::new("C", "D", 2), Edge::new("A", "B", 1), Edge::new("B", "C", 2), Edge::new("A", "D", 1)];
        assert_eq!(labels(&sort_edges(&edges, TreeGoal::Maximum)), vec!["CD", "BC", "AB", "AD"]);
    }
}
