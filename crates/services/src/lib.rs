#![forbid(unsafe_code)]

pub mod app_services;
pub mod config;
pub mod error;
pub mod export;
pub mod sessions;

pub use quiz_core::Clock;

pub use app_services::AppServices;
pub use config::{DEFAULT_OUTPUT_SUBDIR, QuizConfig};
pub use error::{AppServicesError, ExportError, PdfError, SessionError};
pub use export::{DownloadFile, ExportOutcome, ExportService, SaveOutcome};
pub use sessions::{
    GradedRow, QuizEvent, QuizMachine, QuizProgress, ResultRow, TimerSnapshot, graded_rows,
    result_rows,
};
