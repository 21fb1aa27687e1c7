use indicatif::ProgressBar;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::classify::{Classification, classify};
use crate::error::{OrganizeError, Result};
use crate::ops::{FolderOutcome, MoveOutcome, ensure_folder, move_file};

#[derive(Debug, Clone)]
pub struct OrganizeRequest {
    pub directory: PathBuf,
    pub dry_run: bool,
}

impl OrganizeRequest {
    pub fn new(directory: impl Into<PathBuf>, dry_run: bool) -> Self {
        Self {
            directory: directory.into(),
            dry_run,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrganizeStats {
    pub moved: usize,
    pub folders_created: usize,
    pub errors: usize,
}

/// A file that has a destination, before anything is created or moved.
#[derive(Debug, Clone)]
pub struct ClassifiedEntry {
    pub original_path: PathBuf,
    pub extension: String,
    pub folder: String,
    pub destination: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeKind {
    FolderCreated { folder: String },
    WouldCreateFolder { folder: String },
    Moved { folder: String, target: String },
    WouldMove { folder: String, target: String },
    Failed { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryOutcome {
    pub name: String,
    pub kind: OutcomeKind,
}

#[derive(Debug, Clone, Default)]
pub struct OrganizeReport {
    pub directory: PathBuf,
    pub dry_run: bool,
    pub stats: OrganizeStats,
    pub outcomes: Vec<EntryOutcome>,
    pub skipped: Vec<String>,
}

impl OrganizeReport {
    fn record(&mut self, name: &str, kind: OutcomeKind) {
        self.outcomes.push(EntryOutcome {
            name: name.to_string(),
            kind,
        });
    }

    fn fail(&mut self, name: &str, err: &io::Error) {
        warn!(entry = name, error = %err, "entry failed");
        self.stats.errors += 1;
        self.record(
            name,
            OutcomeKind::Failed {
                message: err.to_string(),
            },
        );
    }
}

fn check_directory(directory: &Path) -> Result<()> {
    match fs::metadata(directory) {
        Ok(meta) if meta.is_dir() => Ok(()),
        _ => Err(OrganizeError::DirectoryNotFound {
            path: directory.to_path_buf(),
        }),
    }
}

/// Sorts the immediate files of `request.directory` into `<ext>_files` folders.
///
/// Only a missing or unreadable root fails the call. Every per-entry I/O error
/// is counted in the returned stats and processing moves on to the next entry.
/// Nothing is rolled back if the pass is interrupted.
///
/// `pb`, when given, ticks once per directory entry.
pub fn organize(request: &OrganizeRequest, pb: Option<&ProgressBar>) -> Result<OrganizeReport> {
    let directory = request.directory.as_path();
    check_directory(directory)?;

    let entries: Vec<_> = fs::read_dir(directory)
        .map_err(|source| OrganizeError::ReadDir {
            path: directory.to_path_buf(),
            source,
        })?
        .collect();

    let mut report = OrganizeReport {
        directory: directory.to_path_buf(),
        dry_run: request.dry_run,
        ..Default::default()
    };
    // Extensions whose folder this pass created, or would create in a dry run.
    let mut new_folders: HashSet<String> = HashSet::new();

    if let Some(pb) = pb {
        pb.set_length(entries.len() as u64);
    }

    for entry in entries {
        if let Some(pb) = pb {
            pb.inc(1);
        }

        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                report.fail("<unreadable entry>", &e);
                continue;
            }
        };

        // The lossy name drives classification and messages; the move keeps the raw name.
        let os_name = entry.file_name();
        let name = os_name.to_string_lossy().into_owned();
        if let Some(pb) = pb {
            pb.set_message(format!("Processing {}", name));
        }

        let path = entry.path();
        let meta = match fs::metadata(&path) {
            Ok(meta) => meta,
            Err(e) => {
                report.fail(&name, &e);
                continue;
            }
        };

        if meta.is_dir() {
            continue;
        }

        let classified = match classify(&name) {
            Classification::Skip => {
                debug!(entry = %name, "no extension, skipped");
                report.skipped.push(name);
                continue;
            }
            Classification::Process { extension, folder } => ClassifiedEntry {
                destination: directory.join(&folder).join(&os_name),
                original_path: path,
                extension,
                folder,
            },
        };

        process_entry(&name, classified, &mut new_folders, request.dry_run, &mut report);
    }

    Ok(report)
}

fn process_entry(
    name: &str,
    entry: ClassifiedEntry,
    new_folders: &mut HashSet<String>,
    dry_run: bool,
    report: &mut OrganizeReport,
) {
    if !new_folders.contains(&entry.extension) {
        match ensure_folder(&report.directory, &entry.folder, dry_run) {
            Ok(outcome) => {
                debug!(folder = %entry.folder, ?outcome, "folder checked");
                if outcome.is_new() {
                    report.stats.folders_created += 1;
                    new_folders.insert(entry.extension.clone());
                    let folder = entry.folder.clone();
                    let kind = match outcome {
                        FolderOutcome::WouldCreate => OutcomeKind::WouldCreateFolder { folder },
                        _ => OutcomeKind::FolderCreated { folder },
                    };
                    report.record(name, kind);
                }
            }
            Err(e) => {
                report.fail(name, &e);
                return;
            }
        }
    }

    match move_file(&entry.original_path, &entry.destination, dry_run) {
        Ok(outcome) => {
            report.stats.moved += 1;
            let target = outcome
                .target()
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| name.to_string());
            debug!(entry = name, %target, folder = %entry.folder, "moved");
            let folder = entry.folder;
            let kind = match outcome {
                MoveOutcome::Moved(_) => OutcomeKind::Moved { folder, target },
                MoveOutcome::WouldMove(_) => OutcomeKind::WouldMove { folder, target },
            };
            report.record(name, kind);
        }
        Err(e) => report.fail(name, &e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn run(dir: &Path, dry_run: bool) -> OrganizeReport {
        organize(&OrganizeRequest::new(dir, dry_run), None).unwrap()
    }

    #[test]
    fn missing_directory_is_fatal() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");

        let err = organize(&OrganizeRequest::new(&missing, false), None).unwrap_err();
        assert!(matches!(err, OrganizeError::DirectoryNotFound { .. }));
        assert!(!missing.exists());
    }

    #[test]
    fn file_path_is_not_a_directory() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("plain.txt");
        fs::write(&file, b"x").unwrap();

        let err = organize(&OrganizeRequest::new(&file, true), None).unwrap_err();
        assert!(matches!(err, OrganizeError::DirectoryNotFound { .. }));
    }

    #[test]
    fn dry_run_counts_each_new_folder_once() {
        let dir = TempDir::new().unwrap();
        for name in ["a.jpg", "b.JPG", "c.jpg"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }

        let report = run(dir.path(), true);

        assert_eq!(
            report.stats,
            OrganizeStats {
                moved: 3,
                folders_created: 1,
                errors: 0
            }
        );
        assert!(!dir.path().join("jpg_files").exists());
    }

    #[test]
    fn existing_folder_is_reused_without_counting() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("txt_files")).unwrap();
        fs::write(dir.path().join("a.txt"), b"x").unwrap();

        let report = run(dir.path(), false);

        assert_eq!(report.stats.folders_created, 0);
        assert_eq!(report.stats.moved, 1);
        assert!(dir.path().join("txt_files/a.txt").is_file());
    }

    #[test]
    fn skipped_files_are_not_counted() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("LICENSE"), b"x").unwrap();
        fs::write(dir.path().join(".hidden"), b"x").unwrap();

        let report = run(dir.path(), false);

        assert_eq!(report.stats, OrganizeStats::default());
        assert_eq!(report.skipped.len(), 2);
        assert!(report.outcomes.is_empty());
    }

    #[test]
    fn blocked_folder_fails_only_that_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("log_files"), b"not a dir").unwrap();
        fs::write(dir.path().join("app.log"), b"x").unwrap();
        fs::write(dir.path().join("app.rs"), b"x").unwrap();

        let report = run(dir.path(), false);

        assert_eq!(report.stats.errors, 1);
        assert_eq!(report.stats.moved, 1);
        assert!(dir.path().join("app.log").is_file());
        assert!(dir.path().join("rs_files/app.rs").is_file());
        assert!(report.outcomes.iter().any(|o| o.name == "app.log"
            && matches!(o.kind, OutcomeKind::Failed { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn broken_symlink_counts_as_error() {
        let dir = TempDir::new().unwrap();
        std::os::unix::fs::symlink(dir.path().join("missing.bin"), dir.path().join("link.bin"))
            .unwrap();

        let report = run(dir.path(), false);

        assert_eq!(report.stats.errors, 1);
        assert_eq!(report.stats.moved, 0);
    }

    #[test]
    fn progress_bar_ticks_per_entry() {
        let dir = TempDir::new().unwrap();
        for name in ["a.txt", "b.md", "NOTES"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }
        let pb = ProgressBar::hidden();

        organize(&OrganizeRequest::new(dir.path(), true), Some(&pb)).unwrap();

        assert_eq!(pb.length(), Some(3));
        assert_eq!(pb.position(), 3);
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_name_is_kept_on_move() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = TempDir::new().unwrap();
        let raw = OsStr::from_bytes(b"bad\xff.txt");
        fs::write(dir.path().join(raw), b"x").unwrap();

        let report = run(dir.path(), false);

        assert_eq!(report.stats.moved, 1);
        assert_eq!(report.stats.errors, 0);
        let names: Vec<_> = fs::read_dir(dir.path().join("txt_files"))
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![raw.to_os_string()]);
    }

    #[cfg(unix)]
    #[test]
    fn unlistable_directory_is_fatal() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let locked = dir.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::write(locked.join("a.txt"), b"x").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Privileged users can list it anyway.
        let listable = fs::read_dir(&locked).is_ok();
        let result = organize(&OrganizeRequest::new(&locked, false), None);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        if listable {
            return;
        }

        assert!(matches!(result, Err(OrganizeError::ReadDir { .. })));
        assert!(locked.join("a.txt").is_file());
    }

    #[cfg(unix)]
    #[test]
    fn denied_move_counts_as_error() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let folder = dir.path().join("txt_files");
        fs::create_dir(&folder).unwrap();
        fs::write(dir.path().join("a.txt"), b"x").unwrap();
        fs::set_permissions(&folder, fs::Permissions::from_mode(0o555)).unwrap();

        let writable = fs::write(folder.join(".write_check"), b"").is_ok();
        let report = run(dir.path(), false);
        fs::set_permissions(&folder, fs::Permissions::from_mode(0o755)).unwrap();
        if writable {
            return;
        }

        assert_eq!(report.stats.moved, 0);
        assert_eq!(report.stats.errors, 1);
        assert!(dir.path().join("a.txt").is_file());
        assert!(matches!(
            report.outcomes.last().map(|o| &o.kind),
            Some(OutcomeKind::Failed { .. })
        ));
    }
}
