//! Lectura de grafos desde JSON.
//!
//! Formato:
//! ```json
//! { "nodes": ["A", "B"], "edges": [ { "u": "A", "v": "B", "weight": 5 } ] }
//! ```
//! `nodes` es opcional; si falta se toman los extremos de las aristas en
//! orden de aparición.
use std::fs;
use std::path::Path;

use kruskal_core::{Edge, Graph, Node};
use log::debug;
use serde::Deserialize;

use crate::errors::AppError;

#[derive(Debug, Deserialize)]
struct GraphDocument {
    #[serde(default)]
    nodes: Option<Vec<Node>>,
    edges: Vec<Edge>,
}

pub fn parse_graph(input: &str) -> Result<Graph, AppError> {
    let doc: GraphDocument = serde_json::from_str(input)?;
    let graph = match doc.nodes {
        Some(nodes) => Graph::new(nodes, doc.edges)?,
        None => Graph::from_edges(doc.edges),
    };
    Ok(graph)
}

pub fn load_graph(path: impl AsRef<Path>) -> Result<Graph, AppError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let graph = parse_graph(&raw)?;
    debug!("graph loaded path={} nodes={} edges={}",
           path.display(),
           graph.node_count(),
           graph.edge_count());
    Ok(graph)
}
