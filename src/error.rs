use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum OrganizeError {
    #[error("directory does not exist or is not a directory: {}", .path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error("cannot read directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, OrganizeError>;
