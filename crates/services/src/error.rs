//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use quiz_core::model::SubjectId;

/// Errors emitted while loading question banks.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BankError {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {origin}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("{origin}: bank must be a list of questions or an object of lists")]
    Shape { origin: String },
    #[error("subject {0} is listed more than once")]
    DuplicateSubject(SubjectId),
}

/// Errors emitted by `QuizSession`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("session already completed")]
    Completed,
}

/// Errors emitted by `SessionFlowController`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FlowError {
    #[error("unknown subject: {0}")]
    UnknownSubject(String),
    #[error("unknown assignment: {0}")]
    UnknownAssignment(String),
    #[error("no subject selected")]
    NoSubject,
    #[error("no quiz in progress")]
    NoActiveQuiz,
    #[error(transparent)]
    Session(#[from] SessionError),
}
