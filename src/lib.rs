//! kruskal-trace
//!
//! Capa de aplicación sobre `kruskal-core`:
//! - `graph_file` carga grafos desde JSON.
//! - `config` lee la configuración de entorno (.env).
//! - `errors` unifica errores de IO, parseo, configuración y del core.
//!
//! El motor, los steps y el historial se re-exportan tal cual desde el core.

pub mod config;
pub mod errors;
pub mod graph_file;

pub use config::TraceConfig;
pub use errors::AppError;
pub use graph_file::{load_graph, parse_graph};
pub use kruskal_core::*;

/// Carga el grafo y ejecuta la traza en un solo paso.
pub fn trace_file(path: impl AsRef<std::path::Path>, goal: TreeGoal) -> Result<StepHistory, AppError> {
    let graph = load_graph(path)?;
    Ok(KruskalEngine::new().run_graph(&graph, goal)?)
}
