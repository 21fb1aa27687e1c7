use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FolderOutcome {
    Created,
    WouldCreate,
    AlreadyExisted,
}

impl FolderOutcome {
    pub fn is_new(self) -> bool {
        !matches!(self, FolderOutcome::AlreadyExisted)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved(PathBuf),
    WouldMove(PathBuf),
}

impl MoveOutcome {
    pub fn target(&self) -> &Path {
        match self {
            MoveOutcome::Moved(p) | MoveOutcome::WouldMove(p) => p,
        }
    }
}

/// First free `<stem>_<n>.<ext>` next to `target`, or `target` itself when free.
pub fn unique_path(target: &Path) -> PathBuf {
    if !target.exists() {
        return target.to_path_buf();
    }

    let parent = target.parent().unwrap_or_else(|| Path::new(""));
    let stem = target
        .file_stem()
        .map(OsStr::to_os_string)
        .unwrap_or_else(|| OsString::from("file"));
    let ext = target.extension();

    let candidate = |i: u64| {
        let mut name = stem.clone();
        name.push(format!("_{}", i));
        if let Some(extension) = ext {
            name.push(".");
            name.push(extension);
        }
        parent.join(name)
    };

    let mut i = 1;
    loop {
        let path = candidate(i);
        if !path.exists() {
            return path;
        }
        i += 1;
    }
}

pub fn ensure_folder(directory: &Path, folder: &str, dry_run: bool) -> io::Result<FolderOutcome> {
    let path = directory.join(folder);

    if path.is_dir() {
        return Ok(FolderOutcome::AlreadyExisted);
    }

    if path.exists() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} exists and is not a directory", path.display()),
        ));
    }

    if dry_run {
        return Ok(FolderOutcome::WouldCreate);
    }

    match fs::create_dir(&path) {
        Ok(()) => Ok(FolderOutcome::Created),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && path.is_dir() => {
            Ok(FolderOutcome::AlreadyExisted)
        }
        Err(e) => Err(e),
    }
}

/// Moves `src` to `dest`, or to a suffixed sibling of `dest` if that name is taken.
pub fn move_file(src: &Path, dest: &Path, dry_run: bool) -> io::Result<MoveOutcome> {
    let target = unique_path(dest);

    if dry_run {
        return Ok(MoveOutcome::WouldMove(target));
    }

    fs::rename(src, &target)?;
    Ok(MoveOutcome::Moved(target))
}
