use thiserror::Error;

/// Errors emitted while reading or writing application preferences.
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    /// Filesystem operation failed.
    #[error("config IO failed")]
    Io(#[from] std::io::Error),
    /// JSON serialization or deserialization failed.
    #[error("config JSON failed")]
    Json(#[from] serde_json::Error),
}
