/// Suffix appended to an extension token to name its destination folder.
pub const FOLDER_SUFFIX: &str = "_files";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// No usable extension; the file stays where it is.
    Skip,
    Process { extension: String, folder: String },
}

/// Lowercased text after the last '.' of `name`.
///
/// A dot in the first position only marks a hidden file, so `.gitignore`
/// has no extension, while `archive.tar.gz` yields `gz`.
pub fn extension_token(name: &str) -> Option<String> {
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_lowercase())
}

pub fn folder_for(extension: &str) -> String {
    format!("{}{}", extension, FOLDER_SUFFIX)
}

pub fn classify(name: &str) -> Classification {
    match extension_token(name) {
        Some(extension) => {
            let folder = folder_for(&extension);
            Classification::Process { extension, folder }
        }
        None => Classification::Skip,
    }
}
