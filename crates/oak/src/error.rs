//! Error types for oak.
//!
//! Errors only arise while defining, wrapping, resolving, or calling
//! predicates with a malformed argument shape. A predicate never fails
//! because of the value it classifies.

/// Oak error types covering all operations.
#[derive(Debug, thiserror::Error)]
pub enum OakError {
    #[error("No rewrite rule matched predicate name '{name}'")]
    NameDerivation { name: String },

    #[error("Predicate not found: {namespace}.{name}")]
    NotFound { namespace: String, name: String },

    #[error("Invalid arguments for {predicate}: {reason}")]
    Arguments { predicate: String, reason: String },

    #[error("Predicate {predicate} belongs to namespace '{expected}', not '{actual}'")]
    ForeignNamespace {
        predicate: String,
        expected: String,
        actual: String,
    },

    #[error("Invalid rule set: {0}")]
    InvalidRules(String),

    #[error("Unknown kind: {0}")]
    UnknownKind(String),

    #[error("Unknown rule position: {0}")]
    UnknownPosition(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for OakError {
    fn from(e: serde_json::Error) -> Self {
        OakError::Serialization(e.to_string())
    }
}

/// Convenience Result alias.
pub type Result<T> = std::result::Result<T, OakError>;
