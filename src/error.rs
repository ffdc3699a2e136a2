use thiserror::Error;
use trellis_core::ConfigError;

/// Errors raised while loading or rendering a JSON document.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Document JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid render config: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Document has no pages")]
    Empty,
}
