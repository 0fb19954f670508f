use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use quiz_core::model::{AssetRole, ProblemId};
use quiz_core::time::DurationUnits;
use services::{ExportService, QuizMachine};

pub trait UiApp: Send + Sync {
    fn quiz_machine(&self) -> Arc<QuizMachine>;
    fn exports(&self) -> Arc<ExportService>;

    /// Asset for one problem, if the content directory has one.
    fn asset_path(&self, role: AssetRole, id: ProblemId) -> Option<PathBuf>;

    fn refresh_interval(&self) -> Duration;
    fn units(&self) -> DurationUnits;
}

#[derive(Clone)]
pub struct AppContext {
    app: Arc<dyn UiApp>,
    quiz_machine: Arc<QuizMachine>,
    exports: Arc<ExportService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: Arc<dyn UiApp>) -> Self {
        let quiz_machine = app.quiz_machine();
        let exports = app.exports();
        Self {
            app,
            quiz_machine,
            exports,
        }
    }

    #[must_use]
    pub fn quiz_machine(&self) -> Arc<QuizMachine> {
        Arc::clone(&self.quiz_machine)
    }

    #[must_use]
    pub fn exports(&self) -> Arc<ExportService> {
        Arc::clone(&self.exports)
    }

    #[must_use]
    pub fn asset_path(&self, role: AssetRole, id: ProblemId) -> Option<PathBuf> {
        self.app.asset_path(role, id)
    }

    #[must_use]
    pub fn refresh_interval(&self) -> Duration {
        self.app.refresh_interval()
    }

    #[must_use]
    pub fn units(&self) -> DurationUnits {
        self.app.units()
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
