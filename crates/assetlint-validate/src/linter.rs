//! Asset name linting
//!
//! Runs the naming checks over batches of asset paths (an import) or over
//! the whole project, warning about incorrectly named assets.

use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, warn};

use crate::asset::{AssetRef, AssetStore};
use crate::naming::{NamingViolation, check_asset, evaluate_with};
use crate::reporter::ViolationLogger;
use crate::resolver::resolve;
use crate::settings::RuleRepository;
use crate::suggestion::suggest_with;
use crate::Result;

/// One incorrectly named asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LintFinding {
    pub path: String,
    pub name: String,
    pub suggested_name: String,
    pub violations: Vec<NamingViolation>,
}

/// Lints assets of a store against one rule repository
pub struct AssetNameLinter<'a, S: AssetStore + ?Sized> {
    store: &'a S,
    repository: &'a RuleRepository,
}

impl<'a, S: AssetStore + ?Sized> AssetNameLinter<'a, S> {
    pub fn new(store: &'a S, repository: &'a RuleRepository) -> Self {
        Self { store, repository }
    }

    pub fn repository(&self) -> &RuleRepository {
        self.repository
    }

    fn asset(&self, path: &str) -> AssetRef {
        AssetRef::snapshot(self.store, path)
    }

    /// Check one asset; `None` when it is named correctly
    pub fn lint_asset(&self, path: &str) -> Option<LintFinding> {
        let asset = self.asset(path);
        let violations = check_asset(&asset, self.repository);
        if violations.is_empty() {
            return None;
        }

        Some(LintFinding {
            path: asset.path().to_string(),
            name: asset.name().to_string(),
            suggested_name: suggest_with(&asset, &resolve(&asset, self.repository)),
            violations,
        })
    }

    pub fn is_named_according_to_rule(&self, path: &str) -> bool {
        let asset = self.asset(path);
        evaluate_with(&asset, &resolve(&asset, self.repository)).is_compliant()
    }

    pub fn suggested_name_for(&self, path: &str) -> String {
        let asset = self.asset(path);
        suggest_with(&asset, &resolve(&asset, self.repository))
    }

    /// Lint the paths not yet in `already_seen`, warning about each new
    /// violation when the repository asks for it. Returns how many of them
    /// violate.
    pub fn lint_batch<I, P>(&self, paths: I, already_seen: &mut HashSet<String>) -> usize
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        self.lint_batch_with(paths, already_seen, |_| {})
    }

    /// [`Self::lint_batch`], also handing each new violation to `on_violation`
    pub fn lint_batch_with<I, P, F>(
        &self,
        paths: I,
        already_seen: &mut HashSet<String>,
        mut on_violation: F,
    ) -> usize
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
        F: FnMut(&LintFinding),
    {
        let mut count = 0;
        for path in paths {
            let path = path.as_ref();
            if path.trim().is_empty() || !already_seen.insert(path.to_string()) {
                continue;
            }
            match self.lint_asset(path) {
                Some(finding) => {
                    count += 1;
                    if self.repository.warn_on_incorrect {
                        warn!(
                            path = %finding.path,
                            suggested = %finding.suggested_name,
                            "{} is not named according to the naming rules, suggested name is {}",
                            finding.name,
                            finding.suggested_name
                        );
                    }
                    on_violation(&finding);
                }
                None => debug!(path, "Asset named correctly or not linted"),
            }
        }
        count
    }

    /// Lint the assets touched by an import: imported first, then moved.
    /// A path appearing in both is linted once.
    pub fn lint_import<I, M, P, Q>(&self, imported: I, moved: M) -> usize
    where
        I: IntoIterator<Item = P>,
        M: IntoIterator<Item = Q>,
        P: AsRef<str>,
        Q: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let count = self.lint_batch(imported, &mut seen) + self.lint_batch(moved, &mut seen);

        if count > 1 && self.repository.warn_on_incorrect {
            warn!(
                count,
                "There are {count} incorrectly named assets, write a log or use the batch renamer to fix them"
            );
        }
        count
    }

    /// Paths of every incorrectly named asset in the project, in listing order
    pub fn violating_asset_paths(&self) -> Result<Vec<String>> {
        let paths = self.store.list_all_asset_paths()?;
        Ok(paths
            .into_iter()
            .filter(|path| !self.is_named_according_to_rule(path))
            .collect())
    }

    /// Every finding of a full project scan
    pub fn scan_project(&self) -> Result<Vec<LintFinding>> {
        let paths = self.store.list_all_asset_paths()?;
        Ok(paths
            .iter()
            .filter_map(|path| self.lint_asset(path))
            .collect())
    }

    /// Feed every violating asset to `logger`; returns how many were logged
    pub fn log_violating_assets(&self, logger: &mut dyn ViolationLogger) -> Result<usize> {
        let paths = self.violating_asset_paths()?;
        for path in &paths {
            logger.log_violation(&self.store.name(path), path);
        }
        Ok(paths.len())
    }
}
