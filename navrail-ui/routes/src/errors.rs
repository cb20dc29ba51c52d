use thiserror::Error;

/// Errors emitted while reading or validating a route catalog.
#[derive(Debug, Error)]
pub enum RouteCatalogError {
    /// Filesystem operation failed.
    #[error("route catalog IO failed")]
    Io(#[from] std::io::Error),
    /// JSON deserialization failed.
    #[error("route catalog JSON failed")]
    Json(#[from] serde_json::Error),
    /// The catalog parsed but describes an unusable route tree.
    #[error("invalid route catalog: {message}")]
    Invalid { message: String },
}
