//! Sorts the files of a directory into sibling `<ext>_files` folders.

pub mod classify;
pub mod cli;
pub mod error;
pub mod ops;
pub mod organizer;
pub mod prompt;
pub mod report;

pub use classify::{Classification, classify};
pub use error::OrganizeError;
pub use organizer::{OrganizeReport, OrganizeRequest, OrganizeStats, organize};
