//! Command line definition

use std::path::PathBuf;

use assetlint_validate::LogFormat;
use clap::{Parser, Subcommand};

/// Command line interface for the asset naming linter
#[derive(Parser, Debug)]
#[command(name = "assetlint")]
#[command(about = "Lint asset names of a Unity project against naming rules")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Project root (the directory holding `Assets/`)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Rule repository file, instead of the one discovered in the project
    #[arg(short, long, global = true)]
    pub repository: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Lint the given assets, or the whole project when none are given
    Check {
        /// Project-relative asset paths, e.g. `Assets/Art/player.png`
        paths: Vec<String>,

        /// Print findings as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the suggested name of an asset
    Suggest {
        path: String,
    },

    /// Write a log of every incorrectly named asset
    Log {
        /// Log format (defaults to the configured one)
        #[arg(short, long)]
        format: Option<LogFormat>,
    },

    /// Rename incorrectly named assets to their suggested names
    Rename {
        /// Assets to rename (defaults to every incorrectly named asset)
        paths: Vec<String>,

        /// Perform the renames; without it the planned renames are listed
        #[arg(long)]
        apply: bool,

        /// Name of the document open in the editor, which is never renamed
        #[arg(long)]
        active_document: Option<String>,

        /// Page of planned renames to list (1-based)
        #[arg(long, default_value_t = 1)]
        page: usize,
    },

    /// Create a default rule repository (and config file) if none exist
    Init,

    /// Add entries to the active rule repository's ignore lists
    Ignore {
        /// Ignore every asset whose path contains this text
        #[arg(long = "path")]
        paths: Vec<String>,

        /// Ignore the asset with this GUID or exact path
        #[arg(long = "asset")]
        assets: Vec<String>,
    },
}
