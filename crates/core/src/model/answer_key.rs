use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::model::ids::ProblemId;

/// One row of the answer key. Identity is `(problem id, sub-question)`.
///
/// All fields hold canonical strings; `id` is kept verbatim so rows whose id
/// is not a plain integer survive loading but never become quiz problems.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerKeyRow {
    pub title: String,
    pub id: String,
    pub sub_question: String,
    pub difficulty: String,
    pub correct_answer: String,
    pub explain_video_url: Option<String>,
}

impl AnswerKeyRow {
    /// The row's problem id, if the id column holds a plain integer.
    #[must_use]
    pub fn problem_id(&self) -> Option<ProblemId> {
        self.id.parse().ok()
    }
}

/// Immutable answer key loaded once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerKey {
    rows: Vec<AnswerKeyRow>,
    source: Option<PathBuf>,
}

impl AnswerKey {
    #[must_use]
    pub fn new(rows: Vec<AnswerKeyRow>) -> Self {
        Self { rows, source: None }
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }

    #[must_use]
    pub fn rows(&self) -> &[AnswerKeyRow] {
        &self.rows
    }

    /// Path of the CSV this key was read from, when loaded from disk.
    #[must_use]
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Sorted, distinct problem ids.
    #[must_use]
    pub fn problem_ids(&self) -> Vec<ProblemId> {
        self.rows
            .iter()
            .filter_map(AnswerKeyRow::problem_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Rows for one problem ordered by sub-question label.
    #[must_use]
    pub fn rows_for(&self, id: ProblemId) -> Vec<&AnswerKeyRow> {
        let mut rows: Vec<&AnswerKeyRow> = self
            .rows
            .iter()
            .filter(|row| row.problem_id() == Some(id))
            .collect();
        rows.sort_by(|a, b| a.sub_question.cmp(&b.sub_question));
        rows
    }

    /// First non-empty explanation video link among the problem's rows.
    #[must_use]
    pub fn video_for(&self, id: ProblemId) -> Option<&str> {
        self.rows_for(id)
            .into_iter()
            .filter_map(|row| row.explain_video_url.as_deref())
            .map(str::trim)
            .find(|url| !url.is_empty())
    }

    /// Title of the problem, taken from its first row.
    #[must_use]
    pub fn title_for(&self, id: ProblemId) -> Option<&str> {
        self.rows_for(id).first().map(|row| row.title.as_str())
    }
}
