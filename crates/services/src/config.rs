use std::path::PathBuf;
use std::time::Duration;

use quiz_core::time::DurationUnits;

/// Subdirectory of the content directory that receives downloads by default.
///
/// The content scan is non-recursive, so files written here are never read
/// back as answer keys or assets.
pub const DEFAULT_OUTPUT_SUBDIR: &str = "results";

/// Runtime knobs resolved by the binary and shared by the services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    /// Directory scanned for problem/solution images and the answer key.
    pub content_dir: PathBuf,
    /// Directory that receives results CSVs and PDF renditions.
    pub output_dir: PathBuf,
    /// How often on-screen timers are refreshed.
    pub refresh_interval: Duration,
    pub units: DurationUnits,
}

impl QuizConfig {
    #[must_use]
    pub fn new(content_dir: impl Into<PathBuf>) -> Self {
        let content_dir = content_dir.into();
        Self {
            output_dir: content_dir.join(DEFAULT_OUTPUT_SUBDIR),
            content_dir,
            refresh_interval: Duration::from_secs(1),
            units: DurationUnits::default(),
        }
    }

    #[must_use]
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    #[must_use]
    pub fn with_refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = interval;
        self
    }

    #[must_use]
    pub fn with_units(mut self, units: DurationUnits) -> Self {
        self.units = units;
        self
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self::new(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn downloads_default_to_results_subdirectory() {
        let config = QuizConfig::new("/quiz");
        assert_eq!(config.output_dir, PathBuf::from("/quiz/results"));
        let config = config.with_output_dir("/elsewhere");
        assert_eq!(config.output_dir, PathBuf::from("/elsewhere"));
    }
}
