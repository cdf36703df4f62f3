//! # paths-only
//!
//! Writes the relative path of every file under a directory to
//! `file_paths.txt`, one per line, skipping heavy folders such as
//! `node_modules`, `.git`, and build output.
//!
//! With no arguments it lists the current directory with the built-in
//! exclusions. Flags and `PATHS_ONLY_*` environment variables can change the
//! root, the output, and the excluded names.

mod cli;
mod core;
mod run;

use clap::Parser;
use dotenv::dotenv;

use crate::cli::{Args, Commands};

fn main() {
    // Load environment variables from .env file
    dotenv().ok();

    let args = Args::parse();
    run::init_logger(&args);

    if let Some(Commands::Completions { shell }) = &args.command {
        run::print_completions(*shell);
        return;
    }

    let config = core::config::load(&args).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = run::run_collect(&config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
