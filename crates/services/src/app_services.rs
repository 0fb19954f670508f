use std::sync::Arc;

use quiz_core::model::{AssetLookup, AssetRole, ProblemId};
use storage::{QuizContent, Storage};
use tracing::info;

use crate::Clock;
use crate::config::QuizConfig;
use crate::error::AppServicesError;
use crate::export::ExportService;
use crate::sessions::QuizMachine;

/// Assembles app-facing services around the loaded quiz content.
#[derive(Clone)]
pub struct AppServices {
    config: QuizConfig,
    content: Arc<QuizContent>,
    machine: Arc<QuizMachine>,
    exports: Arc<ExportService>,
}

impl AppServices {
    /// Load content from storage and build the services on top of it.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Storage` if no answer key can be loaded or
    /// the content directory is unreadable.
    pub fn load(
        config: QuizConfig,
        clock: Clock,
        storage: &Storage,
    ) -> Result<Self, AppServicesError> {
        let content = storage.content.load_content()?;
        Ok(Self::from_content(config, clock, content))
    }

    #[must_use]
    pub fn from_content(config: QuizConfig, clock: Clock, content: QuizContent) -> Self {
        let machine = Arc::new(QuizMachine::new(
            Arc::new(content.answer_key.clone()),
            clock,
        ));
        let exports = Arc::new(ExportService::new(
            clock,
            config.units,
            config.output_dir.clone(),
        ));
        info!(
            problems = machine.problem_ids().len(),
            output_dir = %config.output_dir.display(),
            "quiz services ready"
        );
        Self {
            config,
            content: Arc::new(content),
            machine,
            exports,
        }
    }

    #[must_use]
    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    #[must_use]
    pub fn machine(&self) -> Arc<QuizMachine> {
        Arc::clone(&self.machine)
    }

    #[must_use]
    pub fn exports(&self) -> Arc<ExportService> {
        Arc::clone(&self.exports)
    }

    /// Asset path for one problem and role.
    #[must_use]
    pub fn asset(&self, role: AssetRole, id: ProblemId) -> AssetLookup<'_> {
        self.content.assets.lookup(role, id)
    }
}

impl std::fmt::Debug for AppServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppServices")
            .field("config", &self.config)
            .field("problems", &self.machine.problem_ids().len())
            .finish_non_exhaustive()
    }
}
