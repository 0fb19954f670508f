//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use quiz_core::model::QuizPhase;
use storage::StorageError;

use crate::sessions::QuizEvent;

/// Errors emitted by the quiz state machine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("the answer key contains no numeric problem ids")]
    NoProblems,
    #[error("problem index {index} is out of range (0..{len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("{event:?} is not allowed on the {phase} screen")]
    InvalidTransition { phase: QuizPhase, event: QuizEvent },
    #[error("answers can only be entered on the solution screen, not {0}")]
    NotAcceptingInput(QuizPhase),
    #[error("sub-question {0:?} does not belong to the current problem")]
    UnknownSubQuestion(String),
}

/// Errors emitted while rendering an image as a PDF page.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PdfError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot decode image {}: {reason}", .path.display())]
    Decode { path: PathBuf, reason: String },
    #[error("image {} has zero width or height", .path.display())]
    EmptyImage { path: PathBuf },
}

/// Errors emitted while producing downloadable files.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExportError {
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Pdf(#[from] PdfError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}
