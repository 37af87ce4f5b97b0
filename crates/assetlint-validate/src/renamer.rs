//! Batch renaming
//!
//! A [`RenameBatch`] holds one [`RenameOperation`] per asset, pre-filled with
//! the asset's current name and its suggested name. Operations are edited,
//! then executed through an [`AssetRenamer`]; invalid or unsafe renames are
//! skipped and failures are counted, never aborting the batch.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::asset::{AssetRef, AssetStore, name_of};
use crate::resolver::resolve;
use crate::settings::RuleRepository;
use crate::store::InMemoryAssetStore;
use crate::suggestion::suggest_with;
use crate::{Result, ValidationError};

/// Renames one asset, keeping its extension. Returns the new path.
pub trait AssetRenamer {
    fn rename(&mut self, path: &str, new_name: &str) -> Result<String>;
}

/// Characters no file name may contain on any supported platform
const INVALID_FILE_NAME_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

pub fn is_valid_file_name(name: &str) -> bool {
    !name
        .chars()
        .any(|c| c.is_control() || INVALID_FILE_NAME_CHARS.contains(&c))
}

fn renamed_path(path: &str, new_name: &str) -> String {
    let (dir, file) = match path.rfind('/') {
        Some(slash) => (&path[..=slash], &path[slash + 1..]),
        None => ("", path),
    };
    match file.rfind('.') {
        Some(dot) => format!("{dir}{new_name}{}", &file[dot..]),
        None => format!("{dir}{new_name}"),
    }
}

/// Renames assets on disk together with their `.meta` sibling
#[derive(Debug, Clone)]
pub struct FileSystemRenamer {
    root: PathBuf,
}

impl FileSystemRenamer {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn rename_error(path: &str, message: impl Into<String>) -> ValidationError {
        ValidationError::Rename {
            path: path.to_string(),
            message: message.into(),
        }
    }
}

impl AssetRenamer for FileSystemRenamer {
    fn rename(&mut self, path: &str, new_name: &str) -> Result<String> {
        let new_path = renamed_path(path, new_name);
        let source = self.root.join(path);
        let target = self.root.join(&new_path);

        if !source.is_file() {
            return Err(Self::rename_error(path, "asset does not exist"));
        }
        if target.exists() {
            return Err(Self::rename_error(
                path,
                format!("an asset named {new_path} already exists"),
            ));
        }

        let source_meta = self.root.join(format!("{path}.meta"));
        let target_meta = self.root.join(format!("{new_path}.meta"));
        let has_meta = source_meta.is_file();
        if has_meta && target_meta.exists() {
            return Err(Self::rename_error(
                path,
                format!("a meta file {new_path}.meta already exists"),
            ));
        }

        std::fs::rename(&source, &target)
            .map_err(|e| Self::rename_error(path, e.to_string()))?;

        // The asset and its meta file move together or not at all.
        if has_meta {
            if let Err(e) = std::fs::rename(&source_meta, &target_meta) {
                let mut message = format!("meta file: {e}");
                if let Err(restore) = std::fs::rename(&target, &source) {
                    message.push_str(&format!(", and moving the asset back failed: {restore}"));
                }
                return Err(Self::rename_error(path, message));
            }
        }

        debug!(from = path, to = %new_path, "Renamed asset");
        Ok(new_path)
    }
}

impl AssetRenamer for InMemoryAssetStore {
    fn rename(&mut self, path: &str, new_name: &str) -> Result<String> {
        let new_path = renamed_path(path, new_name);
        if self.get(&new_path).is_some() {
            return Err(ValidationError::Rename {
                path: path.to_string(),
                message: format!("an asset named {new_path} already exists"),
            });
        }
        let asset = self.remove(path).ok_or_else(|| ValidationError::Rename {
            path: path.to_string(),
            message: "asset does not exist".to_string(),
        })?;
        self.insert(asset.relocated(new_path.as_str()));
        Ok(new_path)
    }
}

/// Renaming of a single asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenameOperation {
    pub path: String,
    pub current_name: String,
    /// Name to rename to; starts as the current name
    pub new_name: String,
    pub suggested_name: String,
    /// Unselected operations are skipped
    pub selected: bool,
}

impl RenameOperation {
    pub fn new<S: AssetStore + ?Sized>(
        store: &S,
        repository: &RuleRepository,
        path: &str,
    ) -> Self {
        let asset = AssetRef::snapshot(store, path);
        let suggested_name = suggest_with(&asset, &resolve(&asset, repository));
        Self {
            path: path.to_string(),
            current_name: asset.name().to_string(),
            new_name: name_of(path),
            suggested_name,
            selected: true,
        }
    }

    pub fn use_suggested_name(&mut self) {
        self.new_name.clone_from(&self.suggested_name);
    }

    /// Why this operation must be skipped, if it must
    ///
    /// `active_document` is the name of the document currently open in the
    /// editor; renaming it from under the editor is refused.
    pub fn validate(&self, active_document: Option<&str>) -> std::result::Result<(), SkipReason> {
        if !self.selected {
            return Err(SkipReason::NotSelected);
        }
        if self.new_name.is_empty() {
            return Err(SkipReason::EmptyName);
        }
        if self.path.is_empty() {
            return Err(SkipReason::EmptyPath);
        }
        if !is_valid_file_name(&self.new_name) {
            return Err(SkipReason::InvalidCharacters);
        }
        if self.new_name == self.current_name {
            return Err(SkipReason::Unchanged);
        }
        if active_document.is_some_and(|doc| doc == self.current_name) {
            return Err(SkipReason::ActiveDocument);
        }
        Ok(())
    }
}

/// Why a rename was not attempted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SkipReason {
    NotSelected,
    EmptyName,
    EmptyPath,
    InvalidCharacters,
    Unchanged,
    ActiveDocument,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSelected => write!(f, "not selected"),
            Self::EmptyName => write!(f, "new name is empty"),
            Self::EmptyPath => write!(f, "asset path is empty"),
            Self::InvalidCharacters => write!(f, "new name contains invalid characters"),
            Self::Unchanged => write!(f, "name is unchanged"),
            Self::ActiveDocument => write!(f, "asset is the active document"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RenameOutcome {
    Renamed { new_path: String },
    Skipped(SkipReason),
    Failed(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenameSummary {
    pub renamed: usize,
    pub skipped: usize,
    pub failed: usize,
    /// Outcome per operation, in batch order
    pub outcomes: Vec<(String, RenameOutcome)>,
}

impl RenameSummary {
    fn record(&mut self, path: &str, outcome: RenameOutcome) {
        match outcome {
            RenameOutcome::Renamed { .. } => self.renamed += 1,
            RenameOutcome::Skipped(_) => self.skipped += 1,
            RenameOutcome::Failed(_) => self.failed += 1,
        }
        self.outcomes.push((path.to_string(), outcome));
    }
}

impl fmt::Display for RenameSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Renamed {} asset(s), skipped {} asset(s), and failed to rename {} asset(s).",
            self.renamed, self.skipped, self.failed
        )
    }
}

/// Operations over a set of assets, listed in pages
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenameBatch {
    operations: Vec<RenameOperation>,
}

impl RenameBatch {
    pub const PAGE_LENGTH: usize = 23;

    pub fn from_paths<S, I, P>(store: &S, repository: &RuleRepository, paths: I) -> Self
    where
        S: AssetStore + ?Sized,
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        Self {
            operations: paths
                .into_iter()
                .map(|path| RenameOperation::new(store, repository, path.as_ref()))
                .collect(),
        }
    }

    pub fn operations(&self) -> &[RenameOperation] {
        &self.operations
    }

    pub fn operations_mut(&mut self) -> &mut [RenameOperation] {
        &mut self.operations
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn set_names_to_suggested(&mut self) {
        self.operations
            .iter_mut()
            .for_each(RenameOperation::use_suggested_name);
    }

    /// Number of pages; an empty batch still has one (empty) page
    pub fn page_count(&self) -> usize {
        self.operations.len().div_ceil(Self::PAGE_LENGTH).max(1)
    }

    /// Operations on the zero-based page `index`; empty past the last page
    pub fn page(&self, index: usize) -> &[RenameOperation] {
        let start = index.saturating_mul(Self::PAGE_LENGTH).min(self.operations.len());
        let end = (start + Self::PAGE_LENGTH).min(self.operations.len());
        &self.operations[start..end]
    }

    /// Attempt every operation in order
    pub fn execute(
        &self,
        renamer: &mut dyn AssetRenamer,
        active_document: Option<&str>,
    ) -> RenameSummary {
        let mut summary = RenameSummary::default();

        for operation in &self.operations {
            let outcome = match operation.validate(active_document) {
                Err(reason) => {
                    debug!(path = %operation.path, %reason, "Skipped rename");
                    RenameOutcome::Skipped(reason)
                }
                Ok(()) => match renamer.rename(&operation.path, &operation.new_name) {
                    Ok(new_path) => RenameOutcome::Renamed { new_path },
                    Err(e) => {
                        warn!(path = %operation.path, error = %e, "Failed to rename asset");
                        RenameOutcome::Failed(e.to_string())
                    }
                },
            };
            summary.record(&operation.path, outcome);
        }

        info!(
            renamed = summary.renamed,
            skipped = summary.skipped,
            failed = summary.failed,
            "{summary}"
        );
        summary
    }
}
