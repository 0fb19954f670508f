use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};

use crate::model::ids::{ProblemId, RecordKey};
use crate::model::record::AnswerRecord;

/// Screen of the quiz flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuizPhase {
    #[default]
    Problem,
    Solution,
    Explain,
    End,
}

impl fmt::Display for QuizPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QuizPhase::Problem => "problem",
            QuizPhase::Solution => "solution",
            QuizPhase::Explain => "explain",
            QuizPhase::End => "end",
        };
        f.write_str(name)
    }
}

/// Mutable progress of one quiz-taking session.
///
/// Owned by whoever drives the session and passed explicitly to every
/// transition; nothing here is global.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub phase: QuizPhase,
    /// Index into the sorted list of distinct problem ids.
    pub current_index: usize,
    pub start_time: DateTime<Utc>,
    /// Reset only when moving on to the next problem.
    pub problem_start_time: DateTime<Utc>,
    pub answers: BTreeMap<RecordKey, AnswerRecord>,
    pub graded: bool,
    pub user_name: String,
}

impl SessionState {
    /// Fresh session starting at the first problem.
    #[must_use]
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            phase: QuizPhase::Problem,
            current_index: 0,
            start_time: now,
            problem_start_time: now,
            answers: BTreeMap::new(),
            graded: false,
            user_name: String::new(),
        }
    }

    /// Records belonging to one problem, ordered by sub-question.
    pub fn records_for(
        &self,
        id: ProblemId,
    ) -> impl Iterator<Item = (&RecordKey, &AnswerRecord)> + '_ {
        self.answers
            .iter()
            .filter(move |(key, _)| key.problem_id == id)
    }
}
