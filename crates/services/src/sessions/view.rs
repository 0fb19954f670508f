use quiz_core::model::{ProblemId, SessionState, Verdict};
use quiz_core::time::{DurationUnits, seconds_to_hms_with};

/// One line of the grading table on the solution screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradedRow {
    pub sub_question: String,
    pub user_input: String,
    pub correct_answer: String,
    pub verdict: Verdict,
}

/// One line of the final results table and of the exported CSV.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub problem_id: ProblemId,
    pub sub_question: String,
    pub user_input: String,
    pub correct_answer: String,
    pub verdict: Verdict,
    pub per_problem_time: String,
    pub cumulative_time: String,
    pub title: String,
    pub difficulty: String,
}

/// Grading table for one problem; empty until the problem has been graded.
#[must_use]
pub fn graded_rows(state: &SessionState, id: ProblemId) -> Vec<GradedRow> {
    if !state.graded {
        return Vec::new();
    }
    state
        .records_for(id)
        .map(|(key, record)| GradedRow {
            sub_question: key.sub_question.clone(),
            user_input: record.user_input.clone(),
            correct_answer: record.correct_answer.clone(),
            verdict: record.verdict,
        })
        .collect()
}

/// Every record of the session, ordered by problem id then sub-question.
#[must_use]
pub fn result_rows(state: &SessionState, units: DurationUnits) -> Vec<ResultRow> {
    state
        .answers
        .iter()
        .map(|(key, record)| ResultRow {
            problem_id: key.problem_id,
            sub_question: key.sub_question.clone(),
            user_input: record.user_input.clone(),
            correct_answer: record.correct_answer.clone(),
            verdict: record.verdict,
            per_problem_time: seconds_to_hms_with(record.per_problem_elapsed_secs, units),
            cumulative_time: seconds_to_hms_with(record.cumulative_elapsed_secs, units),
            title: record.title.clone(),
            difficulty: record.difficulty.clone(),
        })
        .collect()
}
