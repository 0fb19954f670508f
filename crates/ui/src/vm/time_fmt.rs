use quiz_core::time::DurationUnits;
use services::{QuizProgress, TimerSnapshot};

#[must_use]
pub fn progress_label(progress: QuizProgress) -> String {
    format!(
        "問題 {} / {}（ID: {}）",
        progress.position, progress.total, progress.problem_id
    )
}

#[must_use]
pub fn timer_label(timers: TimerSnapshot, units: DurationUnits) -> String {
    format!(
        "この問題: {} ／ 累計: {}",
        timers.per_problem_text(units),
        timers.cumulative_text(units)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::ProblemId;
    use quiz_core::time::{EN_UNITS, JA_UNITS};

    #[test]
    fn progress_shows_position_and_id() {
        let progress = QuizProgress {
            position: 2,
            total: 5,
            problem_id: ProblemId::new(14),
        };
        assert_eq!(progress_label(progress), "問題 2 / 5（ID: 14）");
    }

    #[test]
    fn timer_uses_unit_words() {
        let timers = TimerSnapshot {
            per_problem_secs: 75,
            cumulative_secs: 3725,
        };
        assert_eq!(
            timer_label(timers, JA_UNITS),
            "この問題: 1分15秒 ／ 累計: 1時間2分5秒"
        );
        assert_eq!(timer_label(timers, EN_UNITS), "この問題: 1m15s ／ 累計: 1h2m5s");
    }
}
