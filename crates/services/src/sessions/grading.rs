use std::collections::BTreeMap;

use quiz_core::model::{AnswerKey, AnswerRecord, ProblemId, RecordKey};

/// Grade every sub-question of `id`, overwriting its records wholesale.
///
/// Input is read from the existing record (empty when absent) and compared
/// with the canonical answer after trimming both sides.
pub(crate) fn grade_problem(
    key: &AnswerKey,
    id: ProblemId,
    answers: &mut BTreeMap<RecordKey, AnswerRecord>,
    per_problem_secs: u64,
    cumulative_secs: u64,
) {
    for row in key.rows_for(id) {
        let record_key = RecordKey::new(id, row.sub_question.as_str());
        let input = answers
            .get(&record_key)
            .map(|record| record.user_input.clone())
            .unwrap_or_default();
        let record = AnswerRecord::graded(row, &input, per_problem_secs, cumulative_secs);
        answers.insert(record_key, record);
    }
}
