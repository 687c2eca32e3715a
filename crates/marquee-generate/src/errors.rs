use thiserror::Error;

/// Errors emitted by the generation engine.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid options: {0}")]
    InvalidOptions(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

impl GenerationError {
    /// Underlying I/O error, when the failure came from the filesystem.
    pub fn io_error(&self) -> Option<&std::io::Error> {
        match self {
            GenerationError::Io(err) => Some(err),
            GenerationError::Csv(err) => match err.kind() {
                csv::ErrorKind::Io(err) => Some(err),
                _ => None,
            },
            _ => None,
        }
    }
}
