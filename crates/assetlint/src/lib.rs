//! Asset naming linter - command line front-end
//!
//! Wires the rule evaluation engine of `assetlint-validate` to a project on
//! disk: configuration loading, logging setup and the `assetlint` commands.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;

pub use cli::{Cli, Command};
pub use commands::{execute, load_repository, run};
pub use config::{AppConfig, ConfigLoader, LoggingConfig};
