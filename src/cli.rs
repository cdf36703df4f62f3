//! CLI definitions: argument parsing, subcommands, and help text.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

pub use clap_complete::generate;

const AFTER_HELP: &str = "\
EXAMPLES:
  paths-only                        List . into file_paths.txt
  paths-only -C web -o web.txt      List ./web into web.txt
  paths-only -o - | grep '\\.rs$'     Print paths to stdout
  paths-only -e target -e .venv     Also skip target/ and .venv/
  paths-only --no-default-excludes  Skip nothing
  paths-only completions bash       Generate bash completions

ENVIRONMENT:
  PATHS_ONLY_OUTPUT    Output file when --output is not given
  PATHS_ONLY_EXCLUDE   Comma-separated extra directory names to skip
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Write every file path under a directory to file_paths.txt, skipping heavy folders",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory to list (default: current directory)
    #[arg(short = 'C', long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Output file, or '-' for stdout (default: file_paths.txt)
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<String>,

    /// Extra directory name to skip (repeatable)
    #[arg(short = 'e', long = "exclude", value_name = "NAME")]
    pub exclude: Vec<String>,

    /// Don't skip the built-in heavy folders (node_modules, .git, dist, ...)
    #[arg(long)]
    pub no_default_excludes: bool,

    /// Sort entries by name within each directory
    #[arg(long)]
    pub sort: bool,

    /// Descend into symlinked directories
    #[arg(long)]
    pub follow_links: bool,

    /// Maximum depth to descend (1 = only direct children)
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }
}
