//! Configuración de la aplicación.
//! Carga variables de entorno (.env) una sola vez y expone `TraceConfig`.
//!
//! Variables:
//! - `KRUSKAL_GOAL`: `min` (por defecto) o `max`.
//! - `KRUSKAL_GRAPH`: ruta del grafo JSON si no se pasa `--graph`.
//! - `RUST_LOG`: filtro de logs (lo consume `env_logger`).
use std::env;
use std::path::PathBuf;

use dotenvy::dotenv;
use kruskal_core::TreeGoal;
use once_cell::sync::Lazy;

use crate::errors::AppError;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

/// Forzar carga temprana de .env desde el binario.
pub fn init_dotenv() {
    Lazy::force(&DOTENV_LOADED);
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TraceConfig {
    pub goal: TreeGoal,
    pub graph_path: Option<PathBuf>,
}

impl TraceConfig {
    pub fn from_env() -> Result<Self, AppError> {
        init_dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Igual que `from_env` pero con una fuente de variables inyectable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
        where F: Fn(&str) -> Option<String>
    {
        let goal = match lookup("KRUSKAL_GOAL") {
            Some(raw) => raw.parse::<TreeGoal>()
                            .map_err(|e| AppError::Config(format!("KRUSKAL_GOAL: {e}")))?,
            None => TreeGoal::default(),
        };
        let graph_path = lookup("KRUSKAL_GRAPH").filter(|p| !p.trim().is_empty())
                                                 .map(PathBuf::from);
        Ok(Self { goal, graph_path })
    }
}
