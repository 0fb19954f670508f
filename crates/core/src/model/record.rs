use serde::{Deserialize, Serialize};

use crate::model::answer_key::AnswerKeyRow;

//
// ─── VERDICT ──────────────────────────────────────────────────────────────────
//

/// Grading outcome of one sub-question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Verdict {
    Correct,
    Incorrect,
    #[default]
    Ungraded,
}

impl Verdict {
    /// Exact comparison after trimming both sides.
    ///
    /// Case-sensitive, no numeric equivalence: `"3"` and `"3.0"` differ.
    #[must_use]
    pub fn grade(user_input: &str, correct_answer: &str) -> Self {
        if user_input.trim() == correct_answer.trim() {
            Verdict::Correct
        } else {
            Verdict::Incorrect
        }
    }

    /// Label shown on screen and written to the results CSV.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Verdict::Correct => "正解！",
            Verdict::Incorrect => "不正解",
            Verdict::Ungraded => "",
        }
    }

    #[must_use]
    pub fn is_graded(self) -> bool {
        !matches!(self, Verdict::Ungraded)
    }
}

//
// ─── ANSWER RECORD ────────────────────────────────────────────────────────────
//

/// What the user entered for one sub-question and how it was graded.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub user_input: String,
    pub correct_answer: String,
    pub verdict: Verdict,
    pub per_problem_elapsed_secs: u64,
    pub cumulative_elapsed_secs: u64,
    pub difficulty: String,
    pub title: String,
}

impl AnswerRecord {
    /// Empty, ungraded record created when the input field first appears.
    #[must_use]
    pub fn pending(row: &AnswerKeyRow) -> Self {
        Self {
            difficulty: row.difficulty.clone(),
            title: row.title.clone(),
            ..Self::default()
        }
    }

    /// Fully graded record; replaces any previous record for the same key.
    #[must_use]
    pub fn graded(
        row: &AnswerKeyRow,
        user_input: &str,
        per_problem_elapsed_secs: u64,
        cumulative_elapsed_secs: u64,
    ) -> Self {
        let user_input = user_input.trim().to_string();
        let correct_answer = row.correct_answer.trim().to_string();
        let verdict = Verdict::grade(&user_input, &correct_answer);
        Self {
            user_input,
            correct_answer,
            verdict,
            per_problem_elapsed_secs,
            cumulative_elapsed_secs,
            difficulty: row.difficulty.clone(),
            title: row.title.clone(),
        }
    }
}
