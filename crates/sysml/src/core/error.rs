//! Core error types for model admission
//!
//! Every failure the model can report is a variant of [`ModelError`]. All of
//! them are raised synchronously to the caller; nothing is retried.

use thiserror::Error;

/// Which end of a relationship an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Source,
    Target,
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endpoint::Source => write!(f, "source"),
            Endpoint::Target => write!(f, "target"),
        }
    }
}

/// Errors raised while reading from or writing to a [`crate::Model`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error(
        "{key:?} is not a valid key. Keys should be a string containing a dash-separated \
         element and integer, e.g., 'partProperty-42'"
    )]
    InvalidKey { key: String },

    #[error("Unknown kind: {kind:?} is not a registered element or relationship kind")]
    UnknownKind { kind: String },

    #[error("Type mismatch at {key}: expected {expected}, found {found}")]
    TypeMismatch {
        key: String,
        expected: String,
        found: String,
    },

    #[error("Referential integrity error: {endpoint} {element} of {relationship} does not exist in model")]
    ReferentialIntegrity {
        relationship: String,
        endpoint: Endpoint,
        element: String,
    },

    #[error("Schema violation: {source_type} and {target_type} are not a valid source-target pair for {kind}")]
    SchemaViolation {
        kind: String,
        source_type: String,
        target_type: String,
    },

    #[error("Key not found: {key:?} is neither an element nor a relationship in the model")]
    KeyNotFound { key: String },

    #[error(
        "Invalid package label {label:?}: labels must be non-empty, must not look like a \
         generated key, and cannot change while used as a key"
    )]
    InvalidPackageLabel { label: String },

    #[error("Element {element} is still referenced by {relationship}")]
    ElementInUse {
        element: String,
        relationship: String,
    },

    #[error("Diagram generation is not supported yet: {diagram}")]
    DiagramUnsupported { diagram: String },
}

impl ModelError {
    /// Create a new invalid key error
    pub fn invalid_key(key: impl Into<String>) -> Self {
        Self::InvalidKey { key: key.into() }
    }

    /// Create a new unknown kind error
    pub fn unknown_kind(kind: impl Into<String>) -> Self {
        Self::UnknownKind { kind: kind.into() }
    }

    /// Create a new key-not-found error
    pub fn key_not_found(key: impl Into<String>) -> Self {
        Self::KeyNotFound { key: key.into() }
    }

    /// Create a new type mismatch error
    pub fn type_mismatch(
        key: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::TypeMismatch {
            key: key.into(),
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// The key, label or kind the error is about
    pub fn subject(&self) -> &str {
        match self {
            ModelError::InvalidKey { key }
            | ModelError::TypeMismatch { key, .. }
            | ModelError::KeyNotFound { key } => key,
            ModelError::UnknownKind { kind } | ModelError::SchemaViolation { kind, .. } => kind,
            ModelError::ReferentialIntegrity { relationship, .. } => relationship,
            ModelError::InvalidPackageLabel { label } => label,
            ModelError::ElementInUse { element, .. } => element,
            ModelError::DiagramUnsupported { diagram } => diagram,
        }
    }
}
