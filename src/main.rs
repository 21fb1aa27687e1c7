use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::path::Path;
use tracing::level_filters::LevelFilter;

use file_organizer::cli::{Args, Command, resolve_dry_run};
use file_organizer::organizer::{OrganizeReport, OrganizeRequest, organize};
use file_organizer::prompt::{ask_directory_and_mode, confirm_execute};
use file_organizer::report::{
    create_progress_bar, print_banner, print_info, print_results, print_summary,
};

fn init_logging(verbose: bool) {
    let level = if verbose { LevelFilter::DEBUG } else { LevelFilter::OFF };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();
}

fn run_organize(directory: &Path, dry_run: bool) -> Result<OrganizeReport> {
    let pb = create_progress_bar();
    let result = organize(&OrganizeRequest::new(directory, dry_run), Some(&pb));
    pb.finish_and_clear();

    let report = result?;
    print_results(&report);
    print_summary(&report);
    Ok(report)
}

fn interactive(cwd: &Path) -> Result<()> {
    let choice = ask_directory_and_mode(cwd)?;
    run_organize(&choice.directory, choice.dry_run)?;

    if choice.dry_run && confirm_execute()? {
        run_organize(&choice.directory, false)?;
    }
    Ok(())
}

fn run(args: Args) -> Result<()> {
    let cwd = std::env::current_dir().context("cannot get current directory")?;

    match args.command {
        Some(Command::Organize {
            directory,
            dry_run,
            execute,
        }) => {
            let target = directory.unwrap_or_else(|| cwd.clone());
            run_organize(&target, resolve_dry_run(dry_run, execute))?;
        }
        Some(Command::Interactive) | None => interactive(&cwd)?,
        Some(Command::Info) => print_info(),
    }
    Ok(())
}

fn main() {
    let args = Args::parse();

    if args.no_color {
        colored::control::set_override(false);
    }
    init_logging(args.verbose);
    print_banner();

    if let Err(e) = run(args) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}
