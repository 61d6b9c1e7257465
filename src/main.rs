//! yarn-sync - sync yarn.lock resolved versions into package.json

use anyhow::Context;
use clap::Parser;
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;
use yarn_sync::cli::CliArgs;
use yarn_sync::dependency_tree::{FileTreeProvider, TreeProvider, YarnTreeProvider};
use yarn_sync::error::ConfigError;
use yarn_sync::logging::init_logging;
use yarn_sync::manifest::MANIFEST_FILENAME;
use yarn_sync::orchestrator::Synchronizer;
use yarn_sync::output::{create_formatter, OutputConfig};
use yarn_sync::progress::Progress;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_logging(args.verbose, args.quiet);

    match run(args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    let output_config = OutputConfig::from_cli(args.json, args.diff, args.verbose, args.quiet)
        .with_color(!args.no_color && io::stdout().is_terminal());

    let lockfile_dir = std::path::absolute(args.lockfile_dir()).map_err(|e| {
        ConfigError::InvalidPath {
            path: args.lockfile_dir(),
            message: e.to_string(),
        }
    })?;
    let package_dir = std::path::absolute(args.package_dir()).map_err(|e| {
        ConfigError::InvalidPath {
            path: args.package_dir(),
            message: e.to_string(),
        }
    })?;

    if args.verbose {
        eprintln!("yarn-sync v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Lockfile dir: {}", lockfile_dir.display());
        eprintln!("Package dir: {}", package_dir.display());
        if args.dry_run {
            eprintln!("Mode: dry-run");
        }
    }

    // Resolve the tree before touching any manifest
    let provider: Box<dyn TreeProvider> = match &args.tree_file {
        Some(path) => Box::new(FileTreeProvider::new(path)),
        None => {
            if !lockfile_dir.is_dir() {
                return Err(ConfigError::InvalidPath {
                    path: lockfile_dir,
                    message: "not a directory".to_string(),
                }
                .into());
            }
            Box::new(YarnTreeProvider::new(&args.yarn, &lockfile_dir))
        }
    };

    let mut progress = Progress::new(output_config.shows_progress());
    progress.spinner("Resolving dependency tree...");
    let tree = provider.dependency_tree();
    progress.finish_and_clear();
    let tree = tree.context("failed to resolve the dependency tree")?;

    let manifest_path = package_dir.join(MANIFEST_FILENAME);
    let mut synchronizer = Synchronizer::new(args.sync_options());
    let summary = synchronizer.run(&manifest_path, &tree)?;

    let formatter = create_formatter(output_config);
    let mut stdout = io::stdout().lock();
    formatter.format(&summary, &mut stdout)?;
    stdout.flush()?;

    if summary.has_failures() {
        // Partial success - some outputs could not be written
        Ok(ExitCode::from(2))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
