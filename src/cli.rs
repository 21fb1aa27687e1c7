use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "file-organizer", author, version, about)]
pub struct Args {
    /// Print diagnostic logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Organize files in specified directory
    Organize {
        /// Directory to organize (defaults to the current directory)
        directory: Option<PathBuf>,

        /// Preview changes without moving files
        #[arg(short, long)]
        dry_run: bool,

        /// Execute file organization immediately
        #[arg(short, long)]
        execute: bool,
    },

    /// Run in interactive mode
    #[command(visible_alias = "i")]
    Interactive,

    /// Show information about the CLI
    Info,
}

/// Dry run unless `--execute` was given on its own.
pub fn resolve_dry_run(dry_run: bool, execute: bool) -> bool {
    dry_run || !execute
}
