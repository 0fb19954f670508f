mod grading;
mod machine;
mod progress;
mod view;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use machine::{QuizEvent, QuizMachine};
pub use progress::{QuizProgress, TimerSnapshot};
pub use view::{GradedRow, ResultRow, graded_rows, result_rows};
