//! Rule repositories
//!
//! A repository is a YAML file (`*.assetlint.yml`) holding the ordered
//! naming rules plus the global toggles. Several may exist in a project, but
//! only one may be enabled at a time.

use std::path::{Path, PathBuf};

use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, error, info};
use walkdir::WalkDir;

use crate::rules::{NamingRule, RuleFactory, RuleSpec};
use crate::{Result, ValidationError};

pub const REPOSITORY_SUFFIXES: [&str; 2] = [".assetlint.yml", ".assetlint.yaml"];
pub const DEFAULT_REPOSITORY_PATH: &str = "Assets/Editor/naming.assetlint.yml";

fn default_true() -> bool {
    true
}

/// On-disk form of a rule repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Warn on the console when an asset is named incorrectly
    #[serde(default = "default_true")]
    pub warn_on_incorrect: bool,
    /// Exempt scripts from prefix and suffix rules
    #[serde(default = "default_true")]
    pub ignore_script_assets: bool,
    /// Unreadable entries are kept as [`RuleSpec::Unrecognized`] and written
    /// back unchanged
    #[serde(
        default,
        deserialize_with = "deserialize_rules",
        serialize_with = "serialize_rules"
    )]
    pub rules: Vec<RuleSpec>,
    /// Assets whose path contains any of these are not linted
    #[serde(default)]
    pub ignored_paths: Vec<String>,
    /// Asset identities (GUIDs) or exact paths that are not linted
    #[serde(default)]
    pub ignored_assets: Vec<String>,
}

fn deserialize_rules<'de, D>(deserializer: D) -> std::result::Result<Vec<RuleSpec>, D::Error>
where
    D: Deserializer<'de>,
{
    let definitions = Option::<Vec<serde_yaml::Value>>::deserialize(deserializer)?;
    Ok(definitions
        .unwrap_or_default()
        .into_iter()
        .map(RuleSpec::from_definition)
        .collect())
}

fn serialize_rules<S>(rules: &[RuleSpec], serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut seq = serializer.serialize_seq(Some(rules.len()))?;
    for rule in rules {
        match rule {
            RuleSpec::Unrecognized { definition, .. } => seq.serialize_element(definition)?,
            spec => seq.serialize_element(spec)?,
        }
    }
    seq.end()
}

impl Default for RepositoryFile {
    fn default() -> Self {
        Self {
            name: None,
            enabled: true,
            warn_on_incorrect: true,
            ignore_script_assets: true,
            rules: RuleSpec::defaults(),
            ignored_paths: Vec::new(),
            ignored_assets: Vec::new(),
        }
    }
}

/// Compiled rule repository passed into every evaluation
#[derive(Debug)]
pub struct RuleRepository {
    pub name: Option<String>,
    pub enabled: bool,
    pub warn_on_incorrect: bool,
    pub ignore_script_assets: bool,
    pub ignored_paths: Vec<String>,
    pub ignored_assets: Vec<String>,
    rules: Vec<Box<dyn NamingRule>>,
    specs: Vec<RuleSpec>,
    config_errors: Vec<String>,
    source: Option<PathBuf>,
}

impl Default for RuleRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleRepository {
    /// Empty, enabled repository with default toggles and no rules
    pub fn new() -> Self {
        Self {
            name: None,
            enabled: true,
            warn_on_incorrect: true,
            ignore_script_assets: true,
            ignored_paths: Vec::new(),
            ignored_assets: Vec::new(),
            rules: Vec::new(),
            specs: Vec::new(),
            config_errors: Vec::new(),
            source: None,
        }
    }

    /// Compile a repository file. Misconfigured rules are kept but never
    /// match; their errors are available through [`Self::config_errors`].
    pub fn from_file(file: RepositoryFile) -> Self {
        let (rules, errors) = RuleFactory::build_all(&file.rules);
        Self {
            name: file.name,
            enabled: file.enabled,
            warn_on_incorrect: file.warn_on_incorrect,
            ignore_script_assets: file.ignore_script_assets,
            ignored_paths: file.ignored_paths,
            ignored_assets: file.ignored_assets,
            rules,
            specs: file.rules,
            config_errors: errors.iter().map(ToString::to_string).collect(),
            source: None,
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let file: RepositoryFile = serde_yaml::from_str(content)?;
        Ok(Self::from_file(file))
    }

    /// Load a repository file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let file: RepositoryFile =
            serde_yaml::from_str(&content).map_err(|e| ValidationError::Parse {
                file: path.to_path_buf(),
                message: format!("YAML parse error: {e}"),
            })?;

        let mut repository = Self::from_file(file);
        repository.source = Some(path.to_path_buf());
        debug!(
            path = %path.display(),
            rules = repository.rules.len(),
            "Loaded rule repository"
        );
        Ok(repository)
    }

    /// Load the repository at `path`, creating a default one if it is missing
    pub fn load_or_create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::load(path);
        }

        let mut repository = Self::from_file(RepositoryFile::default());
        repository.save(path)?;
        repository.source = Some(path.to_path_buf());
        info!(path = %path.display(), "Created default rule repository");
        Ok(repository)
    }

    /// Write the repository back as YAML. Rules added with
    /// [`Self::with_rule`] have no declarative form and are not written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(&self.to_file())?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    pub fn to_file(&self) -> RepositoryFile {
        RepositoryFile {
            name: self.name.clone(),
            enabled: self.enabled,
            warn_on_incorrect: self.warn_on_incorrect,
            ignore_script_assets: self.ignore_script_assets,
            rules: self.specs.clone(),
            ignored_paths: self.ignored_paths.clone(),
            ignored_assets: self.ignored_assets.clone(),
        }
    }

    /// Append an already-built rule
    pub fn with_rule(mut self, rule: impl NamingRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Append a rule from its declarative spec
    pub fn with_spec(mut self, spec: RuleSpec) -> Self {
        let (mut rules, errors) = RuleFactory::build_all(std::slice::from_ref(&spec));
        self.rules.append(&mut rules);
        self.config_errors
            .extend(errors.iter().map(ToString::to_string));
        self.specs.push(spec);
        self
    }

    pub fn with_ignore_script_assets(mut self, ignore: bool) -> Self {
        self.ignore_script_assets = ignore;
        self
    }

    pub fn with_warn_on_incorrect(mut self, warn: bool) -> Self {
        self.warn_on_incorrect = warn;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_ignored_path(mut self, path: impl Into<String>) -> Self {
        self.ignore_path(path);
        self
    }

    pub fn with_ignored_asset(mut self, asset: impl Into<String>) -> Self {
        self.ignore_asset(asset);
        self
    }

    /// Ignore a new path (no duplicates)
    pub fn ignore_path(&mut self, path: impl Into<String>) {
        let path = path.into();
        if !self.ignored_paths.contains(&path) {
            self.ignored_paths.push(path);
        }
    }

    /// Ignore a new asset by identity or exact path (no duplicates)
    pub fn ignore_asset(&mut self, asset: impl Into<String>) {
        let asset = asset.into();
        if !self.ignored_assets.contains(&asset) {
            self.ignored_assets.push(asset);
        }
    }

    /// Rules in authoring order
    pub fn rules(&self) -> impl Iterator<Item = &dyn NamingRule> + '_ {
        self.rules.iter().map(|rule| &**rule)
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    pub fn specs(&self) -> &[RuleSpec] {
        &self.specs
    }

    pub fn config_errors(&self) -> &[String] {
        &self.config_errors
    }

    /// File the repository was loaded from, if any
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

fn is_repository_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| REPOSITORY_SUFFIXES.iter().any(|s| name.ends_with(s)))
}

/// Find and load every repository file under `root`, sorted by path
///
/// A file that cannot be read or parsed is logged and skipped.
pub fn discover_repositories(root: impl AsRef<Path>) -> Result<Vec<RuleRepository>> {
    let root = root.as_ref();
    let mut paths = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|e| ValidationError::Io(std::io::Error::other(e)))?;
        if entry.file_type().is_file() && is_repository_file(entry.path()) {
            paths.push(entry.into_path());
        }
    }

    paths.sort();
    Ok(paths
        .iter()
        .filter_map(|path| match RuleRepository::load(path) {
            Ok(repository) => Some(repository),
            Err(e) => {
                error!(path = %path.display(), error = %e, "Skipping unreadable rule repository");
                None
            }
        })
        .collect())
}

/// The single enabled repository, if any
///
/// More than one enabled repository is a misconfiguration: it is reported
/// loudly and nothing should be linted.
pub fn active_repository(repositories: &[RuleRepository]) -> Result<Option<&RuleRepository>> {
    let enabled: Vec<&RuleRepository> = repositories.iter().filter(|r| r.enabled).collect();

    if enabled.len() <= 1 {
        return Ok(enabled.into_iter().next());
    }

    let sources: Vec<PathBuf> = enabled
        .iter()
        .filter_map(|r| r.source().map(Path::to_path_buf))
        .collect();
    error!(
        count = enabled.len(),
        "There are more than one enabled rule repositories in the project! Make sure only one is enabled!"
    );
    Err(ValidationError::MultipleActiveRepositories {
        count: enabled.len(),
        sources,
    })
}
