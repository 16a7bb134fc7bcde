//! Error types for extended attribute access

use std::io;
use std::path::{Path, PathBuf};
use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AttrError {
    #[error("I/O error: {0}")]
    Io(io::Error),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Attribute not found: {0}")]
    NotFound(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    #[error("Extended attributes not supported on this platform or filesystem")]
    Unsupported,

    #[error("Invalid attribute name: {0:?}")]
    InvalidName(String),

    #[error("Attribute {name} is not valid UTF-8: {source}")]
    InvalidUtf8 {
        name: String,
        #[source]
        source: FromUtf8Error,
    },
}

impl AttrError {
    /// Classify an OS error raised while operating on `path`
    pub(crate) fn from_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => AttrError::FileNotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => AttrError::PermissionDenied(path.to_path_buf()),
            io::ErrorKind::Unsupported => AttrError::Unsupported,
            _ => AttrError::Io(err),
        }
    }
}
