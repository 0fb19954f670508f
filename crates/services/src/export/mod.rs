use std::path::{Path, PathBuf};

use quiz_core::model::SessionState;
use quiz_core::time::DurationUnits;
use tracing::info;

use crate::Clock;
use crate::error::ExportError;

pub mod pdf;
pub mod results;

pub use pdf::{Placement, asset_pdf, fit_to_page};
pub use results::{DownloadFile, ExportOutcome, export_results, results_csv, results_file_name};

/// Where a requested download ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(PathBuf),
    NameRequired,
}

/// Produces downloads and writes them into the output directory.
#[derive(Debug, Clone)]
pub struct ExportService {
    clock: Clock,
    units: DurationUnits,
    output_dir: PathBuf,
}

impl ExportService {
    #[must_use]
    pub fn new(clock: Clock, units: DurationUnits, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            clock,
            units,
            output_dir: output_dir.into(),
        }
    }

    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Results CSV in memory, stamped with the service clock.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::Csv` if encoding fails.
    pub fn results(&self, state: &SessionState) -> Result<ExportOutcome, ExportError> {
        export_results(state, self.units, self.clock.now())
    }

    /// Write the results CSV into the output directory.
    ///
    /// # Errors
    ///
    /// Returns `ExportError` if encoding or writing fails.
    pub fn save_results(&self, state: &SessionState) -> Result<SaveOutcome, ExportError> {
        match self.results(state)? {
            ExportOutcome::Ready(file) => Ok(SaveOutcome::Saved(self.write(&file)?)),
            ExportOutcome::NameRequired => Ok(SaveOutcome::NameRequired),
        }
    }

    /// Render an asset as a PDF and write it into the output directory.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::Pdf` if rendering fails or `ExportError::Io` if
    /// the file cannot be written.
    pub fn save_asset_pdf(&self, asset: &Path) -> Result<PathBuf, ExportError> {
        let file = asset_pdf(asset)?;
        self.write(&file)
    }

    fn write(&self, file: &DownloadFile) -> Result<PathBuf, ExportError> {
        std::fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(&file.file_name);
        std::fs::write(&path, &file.bytes)?;
        info!(path = %path.display(), bytes = file.bytes.len(), "download written");
        Ok(path)
    }
}
