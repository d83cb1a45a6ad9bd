//! Command-line argument definitions

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Scaffold AI-assistant skill files for Playwright test suites
#[derive(Debug, Parser)]
#[command(name = "skillwright", version, about)]
pub struct Cli {
    /// Enable debug-level logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate skill files for the selected platforms and packs
    Init(InitArgs),
}

/// Arguments for `skillwright init`
///
/// With no `--platform`/`--pack` flags the command runs the interactive
/// wizard; with them it runs non-interactively (project-info flags fall back
/// to their documented defaults).
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Target platform (claude, cursor, copilot, generic); repeatable
    #[arg(long = "platform", value_name = "ID")]
    pub platforms: Vec<String>,

    /// Skill pack (core, playwright-cli, templates); repeatable
    #[arg(long = "pack", value_name = "ID")]
    pub packs: Vec<String>,

    /// Project name substituted into templated docs
    #[arg(long)]
    pub project_name: Option<String>,

    /// Base URL of the environment the suite targets
    #[arg(long)]
    pub base_url: Option<String>,

    /// Import path of a custom test fixture ("none" for @playwright/test)
    #[arg(long)]
    pub fixture_import_path: Option<String>,

    /// Directory holding page object classes
    #[arg(long)]
    pub page_objects_dir: Option<String>,

    /// Directory pattern holding spec files
    #[arg(long)]
    pub test_dir: Option<String>,

    /// Destination root to write layouts under
    #[arg(long, default_value = ".")]
    pub dest: PathBuf,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_repeatable_platform_and_pack_flags() {
        let cli = Cli::parse_from([
            "skillwright",
            "init",
            "--platform",
            "claude",
            "--platform",
            "cursor",
            "--pack",
            "core",
            "-y",
        ]);
        let Command::Init(args) = cli.command;
        assert_eq!(args.platforms, vec!["claude", "cursor"]);
        assert_eq!(args.packs, vec!["core"]);
        assert!(args.yes);
    }

    #[test]
    fn dest_defaults_to_current_directory() {
        let cli = Cli::parse_from(["skillwright", "init"]);
        let Command::Init(args) = cli.command;
        assert_eq!(args.dest, PathBuf::from("."));
        assert!(args.platforms.is_empty());
    }
}
