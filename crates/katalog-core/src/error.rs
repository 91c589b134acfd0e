use thiserror::Error;

/// Top-level error type for katalog.
#[derive(Debug, Error)]
pub enum KatalogError {
    /// A base field that the entity type does not register.
    #[error("unknown field '{field}' on {entity}")]
    UnknownField { entity: &'static str, field: String },

    /// Lookup of a catalog record by id failed.
    #[error("{entity} #{id} not found")]
    NotFound { entity: &'static str, id: u64 },

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
