use std::path::PathBuf;
use std::sync::Arc;

use quiz_core::model::{AnswerKey, AssetIndex};
use thiserror::Error;

use crate::fs::FsRepository;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("no readable answer key csv in {} ({candidates} candidates)", .dir.display())]
    NoAnswerKey { dir: PathBuf, candidates: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Read-only lookup tables built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizContent {
    pub answer_key: AnswerKey,
    pub assets: AssetIndex,
}

/// Repository contract for quiz content.
pub trait ContentRepository: Send + Sync {
    /// Load the answer key and asset index.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NoAnswerKey` when no answer key can be parsed,
    /// or other storage errors.
    fn load_content(&self) -> Result<QuizContent, StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    content: QuizContent,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new(content: QuizContent) -> Self {
        Self { content }
    }
}

impl ContentRepository for InMemoryRepository {
    fn load_content(&self) -> Result<QuizContent, StorageError> {
        Ok(self.content.clone())
    }
}

/// Content repository behind a trait object for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub content: Arc<dyn ContentRepository>,
}

impl Storage {
    #[must_use]
    pub fn filesystem(dir: impl Into<PathBuf>) -> Self {
        Self {
            content: Arc::new(FsRepository::new(dir)),
        }
    }

    #[must_use]
    pub fn in_memory(content: QuizContent) -> Self {
        Self {
            content: Arc::new(InMemoryRepository::new(content)),
        }
    }
}
