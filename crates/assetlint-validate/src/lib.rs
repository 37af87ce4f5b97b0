//! Asset Naming Validation
//!
//! This crate decides whether the assets of a Unity-style project follow the
//! naming conventions configured in a rule repository:
//! - Prefix rules (e.g. `T_` for every `Texture2D`)
//! - Suffix rules (e.g. `_Variant` for prefab variants)
//! - Infix rules that rewrite the whole base name (e.g. strip spaces)
//!
//! For each asset it produces a verdict and a suggested corrected name, and
//! offers batch linting, violation logs and batch renaming on top of that.
//!
//! ```ignore
//! use assetlint_validate::{AssetNameLinter, FileSystemAssetStore, RuleRepository};
//!
//! let store = FileSystemAssetStore::new("/projects/game");
//! let repository = RuleRepository::load("/projects/game/Assets/naming.assetlint.yml")?;
//! let linter = AssetNameLinter::new(&store, &repository);
//!
//! for path in linter.violating_asset_paths()? {
//!     println!("{path} -> {}", linter.suggested_name_for(&path));
//! }
//! ```

pub mod violation_trait;
#[macro_use]
pub mod violation_macro;

pub mod asset;
pub mod store;

pub mod rules;
pub mod settings;

pub mod ignore;
pub mod naming;
pub mod resolver;
pub mod suggestion;

pub mod linter;
pub mod renamer;
pub mod reporter;

use std::path::PathBuf;
use thiserror::Error;

pub use asset::{AssetRef, AssetStore, name_of};
pub use ignore::is_ignored;
pub use linter::{AssetNameLinter, LintFinding};
pub use naming::{NamingViolation, Verdict, evaluate, is_compliant};
pub use renamer::{
    AssetRenamer, FileSystemRenamer, RenameBatch, RenameOperation, RenameOutcome, RenameSummary,
    SkipReason,
};
pub use reporter::{CsvLogger, JsonLogger, LogFormat, TextLogger, ViolationLogger};
pub use resolver::{ResolvedRules, resolve};
pub use rules::{
    NamingRule, RegexDerivedRule, ReplaceInfixRule, RuleContext, RuleFactory, RuleSpec,
    TypePrefixRule, VariantSuffixRule,
};
pub use settings::{RepositoryFile, RuleRepository, active_repository, discover_repositories};
pub use store::{FileSystemAssetStore, InMemoryAssetStore};
pub use suggestion::suggest;
pub use violation_trait::{Violation, ViolationExt};

/// Result type for validation operations
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Validation error types
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error in {file}: {message}")]
    Parse { file: PathBuf, message: String },

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid regex pattern: {0}")]
    InvalidRegex(String),

    #[error(
        "There are {count} enabled rule repositories in the project, make sure only one is enabled"
    )]
    MultipleActiveRepositories { count: usize, sources: Vec<PathBuf> },

    #[error("Failed to rename {path}: {message}")]
    Rename { path: String, message: String },
}

/// Severity level for violations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "ERROR"),
            Self::Warning => write!(f, "WARNING"),
            Self::Info => write!(f, "INFO"),
        }
    }
}
