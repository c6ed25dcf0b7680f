//! Constantes del motor core.
//!
//! `ENGINE_VERSION` forma parte del input del fingerprint de la traza: un
//! cambio de versión cambia los fingerprints aunque el grafo sea el mismo.

/// Versión lógica del generador de trazas. Mantener estable mientras el
/// formato de `Step` no cambie de forma incompatible.
pub const ENGINE_VERSION: &str = "K1.0";

/// Descripción del resultado cuando una arista entra al árbol.
pub const OUTCOME_ACCEPTED: &str = "accepted (does not form a cycle)";
/// Descripción del resultado cuando una arista cerraría un ciclo.
pub const OUTCOME_FORMS_CYCLE: &str = "forms a cycle";
/// Descripción del paso final.
pub const OUTCOME_TREE_FOUND: &str = "spanning tree found";
