use kruskal_core::KruskalError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Error en IO: {0}")]
    Io(#[from] std::io::Error),
    #[error("Error de parseo JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Error de configuración: {0}")]
    Config(String),
    #[error("Grafo inválido: {0}")]
    Kruskal(#[from] KruskalError),
}

impl AppError {
    /// Código de salida del binario para este error.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Io(_) | AppError::Parse(_) => 3,
            AppError::Config(_) => 2,
            AppError::Kruskal(_) => 4,
        }
    }
}
