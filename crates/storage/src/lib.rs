#![forbid(unsafe_code)]

pub mod fs;
pub mod repository;

pub use repository::{ContentRepository, InMemoryRepository, QuizContent, Storage, StorageError};
