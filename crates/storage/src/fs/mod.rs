use std::path::{Path, PathBuf};

use tracing::info;

use crate::repository::{ContentRepository, QuizContent, StorageError};

pub mod answer_key;
pub mod assets;

pub use answer_key::{AnswerKeyError, TextEncoding, load_answer_key, try_load};
pub use assets::{AssetName, AssetPrefixes, find_csv_files, scan_assets};

/// Reads quiz content from one flat directory of images and CSV files.
#[derive(Debug, Clone)]
pub struct FsRepository {
    dir: PathBuf,
    prefixes: AssetPrefixes,
}

impl FsRepository {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            prefixes: AssetPrefixes::default(),
        }
    }

    #[must_use]
    pub fn with_prefixes(mut self, prefixes: AssetPrefixes) -> Self {
        self.prefixes = prefixes;
        self
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ContentRepository for FsRepository {
    fn load_content(&self) -> Result<QuizContent, StorageError> {
        let assets = scan_assets(&self.dir, &self.prefixes)?;
        let csvs = find_csv_files(&self.dir)?;
        let answer_key = load_answer_key(&csvs).ok_or_else(|| StorageError::NoAnswerKey {
            dir: self.dir.clone(),
            candidates: csvs.len(),
        })?;
        info!(
            dir = %self.dir.display(),
            problems = answer_key.problem_ids().len(),
            "quiz content loaded"
        );
        Ok(QuizContent { answer_key, assets })
    }
}
