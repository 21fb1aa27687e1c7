use anyhow::{Context, Result};
use dialoguer::{Confirm, Input, theme::Theme};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Default)]
struct PlainTheme;

impl Theme for PlainTheme {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractiveChoice {
    pub directory: PathBuf,
    pub dry_run: bool,
}

pub fn validate_directory(input: &str) -> Result<(), String> {
    match fs::metadata(Path::new(input)) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err("Please enter a valid directory path".to_string()),
        Err(_) => Err("Directory does not exist".to_string()),
    }
}

pub fn ask_directory_and_mode(default_dir: &Path) -> Result<InteractiveChoice> {
    let theme = PlainTheme;

    let directory: String = Input::<String>::with_theme(&theme)
        .with_prompt("Enter the directory path to organize")
        .default(default_dir.display().to_string())
        .validate_with(|input: &String| validate_directory(input))
        .interact_text()
        .context("failed to read user input")?;

    let dry_run = Confirm::with_theme(&theme)
        .with_prompt("Do you want to preview changes first (dry run)?")
        .default(true)
        .interact()
        .context("failed to read user input")?;

    Ok(InteractiveChoice {
        directory: PathBuf::from(directory),
        dry_run,
    })
}

pub fn confirm_execute() -> Result<bool> {
    Confirm::with_theme(&PlainTheme)
        .with_prompt("Execute the file organization?")
        .default(false)
        .interact()
        .context("failed to read user input")
}
