use std::sync::Arc;

use quiz_core::model::{AnswerKey, AnswerRecord, ProblemId, QuizPhase, RecordKey, SessionState};
use tracing::debug;

use super::grading::grade_problem;
use super::progress::{QuizProgress, TimerSnapshot};
use crate::Clock;
use crate::error::SessionError;

/// User action driving the quiz flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizEvent {
    /// Problem → Solution.
    EnterAnswers,
    /// Problem → Explain, without answering.
    Skip,
    /// Solution → Solution, grading every sub-question of the problem.
    Grade,
    /// Solution → Problem.
    Back,
    /// Solution → Explain.
    Explain,
    /// Explain → next Problem, or End after the last one.
    Next,
    /// End → fresh session at the first problem.
    Restart,
}

/// The quiz state machine.
///
/// Holds only read-only inputs (answer key, clock); all mutable progress lives
/// in the `SessionState` passed to each call.
#[derive(Debug, Clone)]
pub struct QuizMachine {
    key: Arc<AnswerKey>,
    ids: Vec<ProblemId>,
    clock: Clock,
}

impl QuizMachine {
    #[must_use]
    pub fn new(key: Arc<AnswerKey>, clock: Clock) -> Self {
        let ids = key.problem_ids();
        Self { key, ids, clock }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn answer_key(&self) -> &AnswerKey {
        &self.key
    }

    /// Sorted distinct problem ids the quiz walks through.
    #[must_use]
    pub fn problem_ids(&self) -> &[ProblemId] {
        &self.ids
    }

    /// A fresh session at the first problem, both timers starting now.
    #[must_use]
    pub fn start(&self) -> SessionState {
        SessionState::new(self.clock.now())
    }

    /// Problem id at the session's current index.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoProblems` for an empty quiz and
    /// `SessionError::IndexOutOfRange` if the index is past the end.
    pub fn current_problem(&self, state: &SessionState) -> Result<ProblemId, SessionError> {
        if self.ids.is_empty() {
            return Err(SessionError::NoProblems);
        }
        self.ids
            .get(state.current_index)
            .copied()
            .ok_or(SessionError::IndexOutOfRange {
                index: state.current_index,
                len: self.ids.len(),
            })
    }

    /// Whether another problem follows the current one.
    #[must_use]
    pub fn has_next(&self, state: &SessionState) -> bool {
        state.current_index + 1 < self.ids.len()
    }

    /// Apply one event, returning the phase the session is now in.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` for events the current phase
    /// does not accept, leaving the state untouched, and the errors of
    /// [`Self::current_problem`] when the session index is unusable.
    pub fn transition(
        &self,
        state: &mut SessionState,
        event: QuizEvent,
    ) -> Result<QuizPhase, SessionError> {
        let from = state.phase;
        let id = self.current_problem(state)?;

        match (from, event) {
            (QuizPhase::Problem, QuizEvent::EnterAnswers) => {
                self.ensure_records(state, id);
                state.phase = QuizPhase::Solution;
            }
            (QuizPhase::Problem, QuizEvent::Skip) | (QuizPhase::Solution, QuizEvent::Explain) => {
                state.graded = false;
                state.phase = QuizPhase::Explain;
            }
            (QuizPhase::Solution, QuizEvent::Grade) => {
                let per_problem = self.clock.elapsed_secs(state.problem_start_time);
                let cumulative = self.clock.elapsed_secs(state.start_time);
                grade_problem(&self.key, id, &mut state.answers, per_problem, cumulative);
                state.graded = true;
            }
            (QuizPhase::Solution, QuizEvent::Back) => {
                state.graded = false;
                state.phase = QuizPhase::Problem;
            }
            (QuizPhase::Explain, QuizEvent::Next) => {
                if self.has_next(state) {
                    state.current_index += 1;
                    state.problem_start_time = self.clock.now();
                    state.graded = false;
                    state.phase = QuizPhase::Problem;
                } else {
                    state.phase = QuizPhase::End;
                }
            }
            (QuizPhase::End, QuizEvent::Restart) => {
                *state = self.start();
            }
            (phase, event) => return Err(SessionError::InvalidTransition { phase, event }),
        }

        debug!(problem = id.value(), ?event, %from, to = %state.phase, "quiz transition");
        Ok(state.phase)
    }

    /// Store what the user typed for one sub-question of the current problem.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotAcceptingInput` outside the solution screen and
    /// `SessionError::UnknownSubQuestion` for labels the problem does not have.
    pub fn record_input(
        &self,
        state: &mut SessionState,
        sub_question: &str,
        text: &str,
    ) -> Result<(), SessionError> {
        if state.phase != QuizPhase::Solution {
            return Err(SessionError::NotAcceptingInput(state.phase));
        }
        let id = self.current_problem(state)?;
        let row = self
            .key
            .rows_for(id)
            .into_iter()
            .find(|row| row.sub_question == sub_question)
            .ok_or_else(|| SessionError::UnknownSubQuestion(sub_question.to_string()))?;

        let record = state
            .answers
            .entry(RecordKey::new(id, sub_question))
            .or_insert_with(|| AnswerRecord::pending(row));
        record.user_input = text.to_string();
        Ok(())
    }

    /// Point-in-time snapshot of both timers.
    #[must_use]
    pub fn timers(&self, state: &SessionState) -> TimerSnapshot {
        TimerSnapshot {
            per_problem_secs: self.clock.elapsed_secs(state.problem_start_time),
            cumulative_secs: self.clock.elapsed_secs(state.start_time),
        }
    }

    /// Position of the current problem within the quiz.
    ///
    /// # Errors
    ///
    /// Same as [`Self::current_problem`].
    pub fn progress(&self, state: &SessionState) -> Result<QuizProgress, SessionError> {
        let problem_id = self.current_problem(state)?;
        Ok(QuizProgress {
            position: state.current_index + 1,
            total: self.ids.len(),
            problem_id,
        })
    }

    fn ensure_records(&self, state: &mut SessionState, id: ProblemId) {
        for row in self.key.rows_for(id) {
            state
                .answers
                .entry(RecordKey::new(id, row.sub_question.as_str()))
                .or_insert_with(|| AnswerRecord::pending(row));
        }
    }
}
