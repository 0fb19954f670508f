use quiz_core::model::ProblemId;
use quiz_core::time::{DurationUnits, seconds_to_hms_with};

/// Aggregated view of quiz progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    /// One-based position of the current problem.
    pub position: usize,
    pub total: usize,
    pub problem_id: ProblemId,
}

/// Both timers at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimerSnapshot {
    pub per_problem_secs: u64,
    pub cumulative_secs: u64,
}

impl TimerSnapshot {
    #[must_use]
    pub fn per_problem_text(&self, units: DurationUnits) -> String {
        seconds_to_hms_with(self.per_problem_secs, units)
    }

    #[must_use]
    pub fn cumulative_text(&self, units: DurationUnits) -> String {
        seconds_to_hms_with(self.cumulative_secs, units)
    }
}
