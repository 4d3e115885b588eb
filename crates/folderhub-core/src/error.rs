//! Unified application error types for FolderHub.
//!
//! Every crate reports failures as [`AppError`] so that callers can branch
//! on [`ErrorKind`] and propagate with the `?` operator.

use std::fmt;
use thiserror::Error;

/// Error kind categorization used across the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// The referenced folder does not exist (in the requested scope).
    NotFound,
    /// Source and destination belong to different organizations.
    CrossOrgMove,
    /// Source and destination are the same folder.
    NoOpMove,
    /// Destination is the source itself or one of its descendants.
    CyclicMove,
    /// A name resolved to more than one folder within its scope.
    Ambiguous,
    /// The move would give two folders of one organization the same path.
    PathConflict,
    /// The folder sequence violates a hierarchy invariant.
    Validation,
    /// Folder data could not be read or decoded.
    Load,
    /// A serialization error occurred.
    Serialization,
    /// A configuration error occurred.
    Configuration,
    /// An internal error occurred.
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::CrossOrgMove => write!(f, "CROSS_ORG_MOVE"),
            Self::NoOpMove => write!(f, "NO_OP_MOVE"),
            Self::CyclicMove => write!(f, "CYCLIC_MOVE"),
            Self::Ambiguous => write!(f, "AMBIGUOUS"),
            Self::PathConflict => write!(f, "PATH_CONFLICT"),
            Self::Validation => write!(f, "VALIDATION"),
            Self::Load => write!(f, "LOAD"),
            Self::Serialization => write!(f, "SERIALIZATION"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// The unified application error used throughout FolderHub.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Whether this error is of the given kind.
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create a cross-organization move error.
    pub fn cross_org_move(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CrossOrgMove, message)
    }

    /// Create a no-op move error.
    pub fn no_op_move(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NoOpMove, message)
    }

    /// Create a cyclic move error.
    pub fn cyclic_move(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CyclicMove, message)
    }

    /// Create an ambiguity error.
    pub fn ambiguous(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Ambiguous, message)
    }

    /// Create a path conflict error.
    pub fn path_conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::PathConflict, message)
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create a load error.
    pub fn load(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Load, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorKind::Load, format!("I/O error: {err}"), err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}
