//! CLI argument parsing module for yarn-sync

use crate::dependency_tree::DEFAULT_YARN;
use crate::domain::PolicyFlags;
use crate::orchestrator::SyncOptions;
use clap::Parser;
use std::path::PathBuf;

/// Sync `yarn.lock` package versions into package.json
#[derive(Parser, Debug, Clone)]
#[command(
    name = "yarn-sync",
    version,
    about = "Sync yarn.lock package versions into package.json"
)]
pub struct CliArgs {
    /// Directory where the yarn.lock file is located (default: current directory)
    #[arg(short = 'd', long = "dir", value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Directory of the project with the target package.json (default: --dir)
    #[arg(
        short = 'p',
        long = "dirPackageJson",
        visible_alias = "dir-package-json",
        value_name = "PATH"
    )]
    pub dir_package_json: Option<PathBuf>,

    /// Overwrite package.json instead of writing package.json.yarn
    #[arg(short = 's', long)]
    pub save: bool,

    /// Keep the ^, ~ or other range prefix in front of the synced version
    #[arg(short = 'k', long = "keepPrefix", visible_alias = "keep-prefix")]
    pub keep_prefix: bool,

    /// Keep versions pinned to a git repository (containing '+')
    #[arg(short = 'g', long = "keepGit", visible_alias = "keep-git")]
    pub keep_git: bool,

    /// Keep link: versions
    #[arg(short = 'l', long = "keepLink", visible_alias = "keep-link")]
    pub keep_link: bool,

    /// Keep versions containing any of these substrings, comma separated (e.g. "+,link:")
    #[arg(
        short = 'a',
        long = "keepVariable",
        visible_alias = "keep-variable",
        value_name = "LIST",
        value_delimiter = ','
    )]
    pub keep_variable: Option<Vec<String>>,

    /// Read captured `yarn list --json --depth 1` output instead of running yarn
    #[arg(long, value_name = "FILE")]
    pub tree_file: Option<PathBuf>,

    /// yarn executable used to list the resolved tree
    #[arg(long, env = "YARN_SYNC_YARN", default_value = DEFAULT_YARN, value_name = "BIN")]
    pub yarn: String,

    // General options
    /// Dry run mode - show what would be synced without writing files
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - minimal output
    #[arg(short, long)]
    pub quiet: bool,

    // Output options
    /// Output results in JSON format
    #[arg(long, conflicts_with = "diff")]
    pub json: bool,

    /// Show changed versions in diff format
    #[arg(long)]
    pub diff: bool,

    /// Disable colored text output
    #[arg(long)]
    pub no_color: bool,
}

impl CliArgs {
    /// Directory containing yarn.lock
    pub fn lockfile_dir(&self) -> PathBuf {
        self.dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    /// Directory containing the root package.json
    pub fn package_dir(&self) -> PathBuf {
        self.dir_package_json
            .clone()
            .unwrap_or_else(|| self.lockfile_dir())
    }

    /// Build the version preservation policy
    pub fn policy(&self) -> PolicyFlags {
        PolicyFlags {
            save: self.save,
            keep_prefix: self.keep_prefix,
            keep_git: self.keep_git,
            keep_link: self.keep_link,
            keep_variable: self.keep_variable.clone(),
        }
    }

    /// Build the sync options
    pub fn sync_options(&self) -> SyncOptions {
        SyncOptions::new(self.policy()).with_dry_run(self.dry_run)
    }
}
