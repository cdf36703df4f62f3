//! Application run modes: logger init, path collection, shell completions.

use std::io;

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::{self, Args};
use crate::core::app;
use crate::core::collector::{self, OutputTarget};
use crate::core::config::Config;

/// Initialize env_logger on stderr. `RUST_LOG` wins over -v/-q.
pub fn init_logger(args: &Args) {
    let log_level = args.log_level();
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .target(env_logger::Target::Stderr)
        .try_init();
}

/// Collect paths and print a completion message.
///
/// When paths go to stdout the message goes to stderr so the listing stays clean.
pub fn run_collect(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    log::debug!("{} {}", app::NAME, app::VERSION);
    log::debug!(
        "Listing {} into {} ({} excluded names: {})",
        config.root.display(),
        config.output,
        config.exclusions.len(),
        config.exclusions.iter().collect::<Vec<_>>().join(", ")
    );

    if config.exclusions.is_empty() {
        log::info!("No directories excluded; listing everything");
    }

    let summary = collector::collect(
        &config.root,
        &config.exclusions,
        &config.output,
        &config.options,
    )?;

    let mut message = format!(
        "Done! Wrote {} paths to {} (excluded heavy folders)",
        summary.files, config.output
    );
    if summary.skipped > 0 {
        message.push_str(&format!("; skipped {} unreadable entries", summary.skipped));
    }
    match config.output {
        OutputTarget::Stdout => eprintln!("{}", message),
        OutputTarget::File(_) => println!("{}", message),
    }
    Ok(())
}

/// Write a completion script for `shell` to stdout.
pub fn print_completions(shell: Shell) {
    let mut cmd = Args::command();
    let name = cmd.get_name().to_string();
    cli::generate(shell, &mut cmd, name, &mut io::stdout());
}
