//! Command implementations

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use assetlint_validate::settings::DEFAULT_REPOSITORY_PATH;
use assetlint_validate::{
    AssetNameLinter, FileSystemAssetStore, FileSystemRenamer, LintFinding, LogFormat, RenameBatch,
    RuleRepository, Violation, active_repository, discover_repositories,
};
use tracing::{info, warn};

use crate::cli::{Cli, Command};
use crate::config::{AppConfig, ConfigLoader, DEFAULT_CONFIG_FILENAME};
use crate::logging::init_logging;

/// Load configuration, initialize logging and run the selected command
pub fn run(cli: Cli) -> Result<ExitCode> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let mut config = loader.load()?;
    if let Some(project) = cli.project {
        config.project_root = project;
    }
    if let Some(repository) = cli.repository {
        config.repository = Some(repository);
    }

    init_logging(&config.logging)?;
    execute(&config, &loader, cli.command)
}

/// Run one command against an already loaded configuration
pub fn execute(config: &AppConfig, loader: &ConfigLoader, command: Command) -> Result<ExitCode> {
    match command {
        Command::Check { paths, json } => check(config, &paths, json),
        Command::Suggest { path } => suggest(config, &path),
        Command::Log { format } => log(config, format.unwrap_or(config.log_format)),
        Command::Rename {
            paths,
            apply,
            active_document,
            page,
        } => rename(config, paths, apply, active_document.as_deref(), page),
        Command::Init => init(config, loader),
        Command::Ignore { paths, assets } => ignore(config, &paths, &assets),
    }
}

/// The rule repository to lint with, if there is one
///
/// An explicitly configured repository wins; otherwise the single enabled
/// repository under `Assets/` is used. Several enabled repositories is an
/// error.
pub fn load_repository(config: &AppConfig) -> Result<Option<RuleRepository>> {
    if let Some(path) = config.repository_path() {
        let repository = RuleRepository::load(&path)
            .with_context(|| format!("Failed to load rule repository {}", path.display()))?;
        return Ok(repository.enabled.then_some(repository));
    }

    let assets_dir = config.project_root.join("Assets");
    if !assets_dir.is_dir() {
        return Ok(None);
    }

    let repositories = discover_repositories(&assets_dir)
        .with_context(|| format!("Failed to read rule repositories under {}", assets_dir.display()))?;
    active_repository(&repositories)?;
    Ok(repositories.into_iter().find(|repository| repository.enabled))
}

fn require_repository(config: &AppConfig) -> Result<Option<RuleRepository>> {
    let repository = load_repository(config)?;
    if repository.is_none() {
        warn!("No enabled rule repository found, run `assetlint init` to create one");
    }
    Ok(repository)
}

fn check(config: &AppConfig, paths: &[String], json: bool) -> Result<ExitCode> {
    let Some(repository) = require_repository(config)? else {
        return Ok(ExitCode::SUCCESS);
    };
    let store = FileSystemAssetStore::new(&config.project_root);
    let linter = AssetNameLinter::new(&store, &repository);

    let findings: Vec<LintFinding> = if paths.is_empty() {
        linter.scan_project()?
    } else {
        let mut seen = HashSet::new();
        let mut findings = Vec::new();
        linter.lint_batch_with(paths, &mut seen, |finding| findings.push(finding.clone()));
        findings
    };

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&findings).context("Failed to serialize findings")?
        );
    } else {
        for finding in &findings {
            for violation in &finding.violations {
                println!("{}: [{}] {}", finding.path, violation.id(), violation);
            }
        }
        println!("{} incorrectly named asset(s)", findings.len());
    }

    if findings.len() > 1 && repository.warn_on_incorrect {
        warn!(
            count = findings.len(),
            "Several assets are named incorrectly, run `assetlint rename` to fix them"
        );
    }

    Ok(if findings.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn suggest(config: &AppConfig, path: &str) -> Result<ExitCode> {
    let Some(repository) = require_repository(config)? else {
        return Ok(ExitCode::SUCCESS);
    };
    let store = FileSystemAssetStore::new(&config.project_root);
    let linter = AssetNameLinter::new(&store, &repository);

    println!("{}", linter.suggested_name_for(path));
    Ok(ExitCode::SUCCESS)
}

fn log(config: &AppConfig, format: LogFormat) -> Result<ExitCode> {
    let Some(repository) = require_repository(config)? else {
        return Ok(ExitCode::SUCCESS);
    };
    let store = FileSystemAssetStore::new(&config.project_root);
    let linter = AssetNameLinter::new(&store, &repository);

    let mut logger = format.logger();
    let count = linter.log_violating_assets(logger.as_mut())?;
    let path = logger
        .generate_log(&config.log_dir_path())
        .context("Failed to write naming log")?;

    println!("{count} naming inconsistencies logged to {}", path.display());
    Ok(ExitCode::SUCCESS)
}

fn rename(
    config: &AppConfig,
    paths: Vec<String>,
    apply: bool,
    active_document: Option<&str>,
    page: usize,
) -> Result<ExitCode> {
    let Some(repository) = require_repository(config)? else {
        return Ok(ExitCode::SUCCESS);
    };
    let store = FileSystemAssetStore::new(&config.project_root);
    let linter = AssetNameLinter::new(&store, &repository);

    let paths = if paths.is_empty() {
        linter.violating_asset_paths()?
    } else {
        paths
    };
    let mut batch = RenameBatch::from_paths(&store, &repository, &paths);
    batch.set_names_to_suggested();

    if !apply {
        let index = page.clamp(1, batch.page_count()) - 1;
        println!("Page {} of {}", index + 1, batch.page_count());
        for operation in batch.page(index) {
            println!(
                "{} -> {}    ({})",
                operation.current_name, operation.new_name, operation.path
            );
        }
        return Ok(ExitCode::SUCCESS);
    }

    let mut renamer = FileSystemRenamer::new(config.project_root.clone());
    let summary = batch.execute(&mut renamer, active_document);
    println!("{summary}");

    Ok(if summary.failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// `root`-relative form of `path` with `/` separators
fn project_relative(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Some(parts.join("/"))
}

fn init(config: &AppConfig, loader: &ConfigLoader) -> Result<ExitCode> {
    let path = config
        .repository_path()
        .unwrap_or_else(|| config.project_root.join(DEFAULT_REPOSITORY_PATH));

    if path.exists() {
        println!("Rule repository already exists at {}", path.display());
    } else {
        let mut repository = RuleRepository::load_or_create(&path)
            .with_context(|| format!("Failed to create rule repository {}", path.display()))?;
        // The repository file lives among the assets; keep it out of its own lint.
        if let Some(relative) = project_relative(&config.project_root, &path) {
            repository.ignore_asset(relative);
            repository.save(&path)?;
        }
        println!("Created rule repository at {}", path.display());
    }

    let config_path: PathBuf = config.project_root.join(DEFAULT_CONFIG_FILENAME);
    if !config_path.exists() {
        loader.save_to_file(&AppConfig::default(), &config_path)?;
        info!(path = %config_path.display(), "Created configuration file");
    }
    Ok(ExitCode::SUCCESS)
}

fn ignore(config: &AppConfig, paths: &[String], assets: &[String]) -> Result<ExitCode> {
    if paths.is_empty() && assets.is_empty() {
        bail!("Nothing to ignore, pass --path or --asset");
    }
    let Some(mut repository) = require_repository(config)? else {
        return Ok(ExitCode::FAILURE);
    };
    let Some(source) = repository.source().map(Path::to_path_buf) else {
        bail!("The active rule repository has no file to save to");
    };

    for path in paths {
        repository.ignore_path(path.as_str());
    }
    for asset in assets {
        repository.ignore_asset(asset.as_str());
    }
    repository.save(&source)?;

    println!(
        "{} now ignores {} path(s) and {} asset(s)",
        source.display(),
        repository.ignored_paths.len(),
        repository.ignored_assets.len()
    );
    Ok(ExitCode::SUCCESS)
}
