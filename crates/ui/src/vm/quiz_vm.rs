use std::sync::Arc;

use quiz_core::model::{ProblemId, QuizPhase, RecordKey, SessionState};
use quiz_core::time::DurationUnits;
use services::{GradedRow, QuizEvent, QuizMachine, ResultRow, graded_rows, result_rows};

use crate::views::ViewError;
use crate::vm::time_fmt::{progress_label, timer_label};

/// Answer field for one sub-question on the solution screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputRowVm {
    pub sub_question: String,
    pub value: String,
}

/// Owns the running session and exposes it in display form.
pub struct QuizVm {
    machine: Arc<QuizMachine>,
    state: SessionState,
    units: DurationUnits,
    error: Option<ViewError>,
}

impl QuizVm {
    #[must_use]
    pub fn new(machine: Arc<QuizMachine>, units: DurationUnits) -> Self {
        let state = machine.start();
        Self {
            machine,
            state,
            units,
            error: None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.state.phase
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn error(&self) -> Option<&ViewError> {
        self.error.as_ref()
    }

    pub fn set_error(&mut self, error: Option<ViewError>) {
        self.error = error;
    }

    /// # Errors
    ///
    /// Returns `ViewError::NoProblems` or `ViewError::ProblemOutOfRange` when
    /// the session has no current problem.
    pub fn current_problem(&self) -> Result<ProblemId, ViewError> {
        Ok(self.machine.current_problem(&self.state)?)
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.machine.has_next(&self.state)
    }

    /// # Errors
    ///
    /// Same as [`Self::current_problem`].
    pub fn progress_label(&self) -> Result<String, ViewError> {
        Ok(progress_label(self.machine.progress(&self.state)?))
    }

    #[must_use]
    pub fn timer_label(&self) -> String {
        timer_label(self.machine.timers(&self.state), self.units)
    }

    #[must_use]
    pub fn title(&self) -> Option<String> {
        let id = self.current_problem().ok()?;
        self.machine
            .answer_key()
            .title_for(id)
            .map(str::to_string)
            .filter(|title| !title.is_empty())
    }

    #[must_use]
    pub fn video_url(&self) -> Option<String> {
        let id = self.current_problem().ok()?;
        self.machine.answer_key().video_for(id).map(str::to_string)
    }

    /// Apply one event; failures are kept for display instead of returned.
    pub fn dispatch(&mut self, event: QuizEvent) {
        self.error = self
            .machine
            .transition(&mut self.state, event)
            .err()
            .map(ViewError::from);
    }

    pub fn set_input(&mut self, sub_question: &str, text: &str) {
        if let Err(err) = self.machine.record_input(&mut self.state, sub_question, text) {
            self.error = Some(err.into());
        }
    }

    pub fn set_user_name(&mut self, name: String) {
        self.state.user_name = name;
    }

    /// One field per sub-question of the current problem.
    #[must_use]
    pub fn input_rows(&self) -> Vec<InputRowVm> {
        let Ok(id) = self.current_problem() else {
            return Vec::new();
        };
        self.machine
            .answer_key()
            .rows_for(id)
            .into_iter()
            .map(|row| {
                let value = self
                    .state
                    .answers
                    .get(&RecordKey::new(id, row.sub_question.as_str()))
                    .map(|record| record.user_input.clone())
                    .unwrap_or_default();
                InputRowVm {
                    sub_question: row.sub_question.clone(),
                    value,
                }
            })
            .collect()
    }

    #[must_use]
    pub fn graded_rows(&self) -> Vec<GradedRow> {
        self.current_problem()
            .map(|id| graded_rows(&self.state, id))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn result_rows(&self) -> Vec<ResultRow> {
        result_rows(&self.state, self.units)
    }
}
