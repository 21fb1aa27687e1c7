use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

use crate::organizer::{OrganizeReport, OutcomeKind};

pub fn print_banner() {
    let version = env!("CARGO_PKG_VERSION");
    println!(
        "{} v{}\n{}",
        "[ File Organizer ]".bright_cyan().bold(),
        version,
        "→ Organize files by extension into folders\n------------------------------------------"
            .dimmed()
    );
}

pub fn create_progress_bar() -> ProgressBar {
    let pb = ProgressBar::new(0);
    let style = ProgressStyle::with_template("{spinner:.green} {msg:.bold.dimmed} [{pos}/{len}]")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ");
    pb.set_style(style);
    pb
}

fn dry_tag(dry_run: bool) -> &'static str {
    if dry_run { "[DRY RUN] " } else { "" }
}

/// One console line per outcome, uncolored.
pub fn outcome_line(kind: &OutcomeKind, name: &str) -> String {
    match kind {
        OutcomeKind::FolderCreated { folder } => format!("✓ Created folder: {}", folder),
        OutcomeKind::WouldCreateFolder { folder } => {
            format!("✓ {}Would create folder: {}", dry_tag(true), folder)
        }
        OutcomeKind::Moved { folder, target } | OutcomeKind::WouldMove { folder, target } => {
            let dry = matches!(kind, OutcomeKind::WouldMove { .. });
            let renamed = if target != name {
                format!(" (renamed to {})", target)
            } else {
                String::new()
            };
            format!("→ {}Moved: {} → {}/{}", dry_tag(dry), name, folder, renamed)
        }
        OutcomeKind::Failed { message } => format!("✗ Error processing {}: {}", name, message),
    }
}

pub fn print_results(report: &OrganizeReport) {
    println!(
        "{}",
        format!("\n📁 Organizing files in: {}\n", report.directory.display()).blue()
    );

    for outcome in &report.outcomes {
        let line = outcome_line(&outcome.kind, &outcome.name);
        match outcome.kind {
            OutcomeKind::FolderCreated { .. } | OutcomeKind::WouldCreateFolder { .. } => {
                println!("{}", line.green())
            }
            OutcomeKind::Moved { .. } | OutcomeKind::WouldMove { .. } => {
                println!("{}", line.yellow())
            }
            OutcomeKind::Failed { .. } => println!("{}", line.red()),
        }
    }

    if !report.skipped.is_empty() {
        println!("\n{}", "Skipped (no extension):".yellow().bold());
        for name in &report.skipped {
            println!("  {}", name.dimmed());
        }
    }
}

pub fn print_summary(report: &OrganizeReport) {
    let stats = &report.stats;
    println!("{}", "\n📊 Summary:".cyan());
    if report.dry_run {
        println!("   {} {}", "Would move:".cyan(), stats.moved.to_string().bold());
        println!(
            "   {} {}",
            "Would create folders:".cyan(),
            stats.folders_created.to_string().bold()
        );
    } else {
        println!("   {} {}", "Files processed:".green(), stats.moved.to_string().bold());
        println!(
            "   {} {}",
            "Folders created:".green(),
            stats.folders_created.to_string().bold()
        );
    }
    println!("   {} {}", "Errors:".red(), stats.errors.to_string().bold());

    if report.dry_run {
        println!(
            "{}",
            "\n🔍 This was a dry run. Use --execute to actually move files.".magenta()
        );
    }
    println!();
}

pub fn print_info() {
    println!("{}", "\n📋 File Organizer CLI".cyan());
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!("\nThis tool organizes files by their extensions into separate folders.");
    println!("\nExamples:");
    println!("  file-organizer organize /path/to/directory --dry-run");
    println!("  file-organizer organize --execute");
    println!("  file-organizer interactive");
}
