use std::path::{Path, PathBuf};

use quiz_core::model::{AssetIndex, AssetRole, ProblemId};
use tracing::{debug, warn};

use crate::repository::StorageError;

/// Extensions (lowercase, no dot) accepted as problem/solution assets.
pub const ASSET_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "pdf"];

/// File name prefixes mapped to asset roles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPrefixes {
    pub problem: Vec<String>,
    pub solution: Vec<String>,
}

impl Default for AssetPrefixes {
    fn default() -> Self {
        Self {
            problem: vec!["問題".into(), "Problem".into()],
            solution: vec![
                "解答".into(),
                "解説".into(),
                "Answer".into(),
                "Explanation".into(),
            ],
        }
    }
}

/// Classification of one file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetName {
    Problem(ProblemId),
    Solution(ProblemId),
    /// No known prefix, or not an asset extension.
    Unrecognized,
    /// Known prefix, but the remainder is not an integer id.
    Malformed(String),
}

impl AssetPrefixes {
    /// Classify a path by extension and file-stem prefix.
    #[must_use]
    pub fn classify(&self, path: &Path) -> AssetName {
        if !has_asset_extension(path) {
            return AssetName::Unrecognized;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            return AssetName::Unrecognized;
        };

        let candidates = [
            (AssetRole::Problem, &self.problem),
            (AssetRole::Solution, &self.solution),
        ];
        for (role, prefixes) in candidates {
            let Some(rest) = prefixes.iter().find_map(|p| stem.strip_prefix(p.as_str())) else {
                continue;
            };
            return match rest.parse::<ProblemId>() {
                Ok(id) => match role {
                    AssetRole::Problem => AssetName::Problem(id),
                    AssetRole::Solution => AssetName::Solution(id),
                },
                Err(err) => AssetName::Malformed(err.to_string()),
            };
        }
        AssetName::Unrecognized
    }
}

fn has_asset_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .is_some_and(|ext| ASSET_EXTENSIONS.contains(&ext.as_str()))
}

/// List regular files in `dir` (non-recursive), sorted by file name.
///
/// # Errors
///
/// Returns `StorageError::Io` if the directory cannot be read.
pub fn list_files(dir: &Path) -> Result<Vec<PathBuf>, StorageError> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            files.push(entry.path());
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// CSV files in `dir`, sorted by file name.
///
/// # Errors
///
/// Returns `StorageError::Io` if the directory cannot be read.
pub fn find_csv_files(dir: &Path) -> Result<Vec<PathBuf>, StorageError> {
    Ok(list_files(dir)?
        .into_iter()
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
        })
        .collect())
}

/// Build the asset index from the files directly inside `dir`.
///
/// Files are visited in file-name order, so the lexicographically last file
/// wins when two map to the same role and id.
///
/// # Errors
///
/// Returns `StorageError::Io` if the directory cannot be read.
pub fn scan_assets(dir: &Path, prefixes: &AssetPrefixes) -> Result<AssetIndex, StorageError> {
    let mut index = AssetIndex::new();
    for path in list_files(dir)? {
        let (role, id) = match prefixes.classify(&path) {
            AssetName::Problem(id) => (AssetRole::Problem, id),
            AssetName::Solution(id) => (AssetRole::Solution, id),
            AssetName::Malformed(reason) => {
                debug!(path = %path.display(), %reason, "ignoring asset with malformed id");
                continue;
            }
            AssetName::Unrecognized => continue,
        };
        if let Some(previous) = index.insert(role, id, path.clone()) {
            warn!(
                ?role,
                id = id.value(),
                kept = %path.display(),
                dropped = %previous.display(),
                "duplicate asset id"
            );
        }
    }
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::AssetLookup;

    fn classify(name: &str) -> AssetName {
        AssetPrefixes::default().classify(Path::new(name))
    }

    #[test]
    fn classifies_japanese_and_english_prefixes() {
        assert_eq!(classify("問題3.png"), AssetName::Problem(ProblemId::new(3)));
        assert_eq!(classify("解答3.jpg"), AssetName::Solution(ProblemId::new(3)));
        assert_eq!(classify("解説12.JPEG"), AssetName::Solution(ProblemId::new(12)));
        assert_eq!(classify("Problem5.pdf"), AssetName::Problem(ProblemId::new(5)));
        assert_eq!(classify("Explanation5.png"), AssetName::Solution(ProblemId::new(5)));
    }

    #[test]
    fn ignores_unknown_prefixes_and_extensions() {
        assert_eq!(classify("表紙1.png"), AssetName::Unrecognized);
        assert_eq!(classify("問題1.txt"), AssetName::Unrecognized);
        assert_eq!(classify("answers.csv"), AssetName::Unrecognized);
    }

    #[test]
    fn flags_non_integer_remainder() {
        assert!(matches!(classify("問題1a.png"), AssetName::Malformed(_)));
        assert!(matches!(classify("問題.png"), AssetName::Malformed(_)));
    }

    #[test]
    fn scan_keeps_lexicographically_last_duplicate() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["問題1.png", "問題1.jpg", "解説2.png", "問題x.png", "notes.txt"] {
            std::fs::write(dir.path().join(name), b"x").unwrap();
        }
        std::fs::create_dir(dir.path().join("問題9.png")).unwrap();

        let index = scan_assets(dir.path(), &AssetPrefixes::default()).unwrap();
        assert_eq!(index.len(AssetRole::Problem), 1);
        assert_eq!(
            index.lookup(AssetRole::Problem, ProblemId::new(1)),
            AssetLookup::Found(dir.path().join("問題1.png").as_path())
        );
        assert_eq!(
            index.lookup(AssetRole::Solution, ProblemId::new(2)),
            AssetLookup::Found(dir.path().join("解説2.png").as_path())
        );
    }

    #[test]
    fn finds_csv_files_only() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.csv", "a.CSV", "問題1.png"] {
            std::fs::write(dir.path().join(name), b"x").unwrap();
        }
        let found = find_csv_files(dir.path()).unwrap();
        let names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.CSV", "b.csv"]);
    }
}
