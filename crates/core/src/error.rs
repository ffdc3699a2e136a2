use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid tag name for '{field}': '{value}'")]
    InvalidTag { field: &'static str, value: String },
}

/// Errors raised while streaming markup to a writer.
///
/// Building and optimizing a tree cannot fail; only the output side can.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
