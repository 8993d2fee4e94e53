//! Source buffers and loading them from disk.

use std::io;
use std::path::{Path, PathBuf};

/// A source buffer plus the name diagnostics refer to it by.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceFile {
    pub name: String,
    pub text: String,
}

/// Failure to read a source file.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("cannot find file '{}'", .path.display())]
    NotFound { path: PathBuf },
    #[error("permission denied reading '{}'", .path.display())]
    PermissionDenied { path: PathBuf },
    #[error("'{}' contains invalid UTF-8 data", .path.display())]
    InvalidUtf8 { path: PathBuf },
    #[error("error reading '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SourceFile {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        SourceFile {
            name: name.into(),
            text: text.into(),
        }
    }

    /// Read `path` as UTF-8. The file is named by `path` as given.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(text) => Ok(SourceFile::new(path.display().to_string(), text)),
            Err(e) => {
                let path = path.to_path_buf();
                Err(match e.kind() {
                    io::ErrorKind::NotFound => SourceError::NotFound { path },
                    io::ErrorKind::PermissionDenied => SourceError::PermissionDenied { path },
                    io::ErrorKind::InvalidData => SourceError::InvalidUtf8 { path },
                    _ => SourceError::Io { path, source: e },
                })
            }
        }
    }
}
