use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::model::ids::ProblemId;

/// Which screen an asset belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetRole {
    Problem,
    Solution,
}

/// Result of looking up the asset for one problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetLookup<'a> {
    Found(&'a Path),
    NotFound,
}

/// Problem and solution asset paths keyed by problem id.
///
/// At most one asset per `(role, id)`; inserting again replaces the entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetIndex {
    problems: BTreeMap<ProblemId, PathBuf>,
    solutions: BTreeMap<ProblemId, PathBuf>,
}

impl AssetIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an asset, returning the path it displaced, if any.
    pub fn insert(&mut self, role: AssetRole, id: ProblemId, path: PathBuf) -> Option<PathBuf> {
        self.map_mut(role).insert(id, path)
    }

    #[must_use]
    pub fn lookup(&self, role: AssetRole, id: ProblemId) -> AssetLookup<'_> {
        match self.map(role).get(&id) {
            Some(path) => AssetLookup::Found(path.as_path()),
            None => AssetLookup::NotFound,
        }
    }

    #[must_use]
    pub fn len(&self, role: AssetRole) -> usize {
        self.map(role).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.problems.is_empty() && self.solutions.is_empty()
    }

    fn map(&self, role: AssetRole) -> &BTreeMap<ProblemId, PathBuf> {
        match role {
            AssetRole::Problem => &self.problems,
            AssetRole::Solution => &self.solutions,
        }
    }

    fn map_mut(&mut self, role: AssetRole) -> &mut BTreeMap<ProblemId, PathBuf> {
        match role {
            AssetRole::Problem => &mut self.problems,
            AssetRole::Solution => &mut self.solutions,
        }
    }
}
