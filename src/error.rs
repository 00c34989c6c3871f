// src/error.rs
use thiserror::Error;

/// Reasons a `ResolutionConfig` is rejected before it reaches the resolver.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("default colors must not be empty")]
    EmptyDefault,

    #[error("baseline colors must not be empty")]
    EmptyBaseline,

    #[error("{dictionary} entry \"{key}\" has no colors")]
    EmptyColors {
        dictionary: &'static str,
        key: String,
    },

    #[error("{dictionary} entry has an empty key")]
    EmptyKey { dictionary: &'static str },

    #[error("similarity threshold {0} is outside [0, 1]")]
    InvalidThreshold(f64),
}

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed dictionary JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed dictionary snapshot: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("invalid resolution config: {0}")]
    Invalid(#[from] ConfigError),
}

/// Upstream failures of the product backend. These stop at the catalog
/// adapter and are never surfaced through a resolution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("network error: {0}")]
    Network(String),

    #[error("not authorized")]
    Unauthorized,

    #[error("product {0} not found")]
    NotFound(u64),

    #[error("malformed product record: {0}")]
    Malformed(String),
}
