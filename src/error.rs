//! Error types for the loader library.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoaderError {
    /// No qualifying source file in the directory.
    #[error("No .{extension} files found in {}", .dir.display())]
    NoSourceFiles { dir: PathBuf, extension: String },

    #[error("Source directory not found: {}", .0.display())]
    MissingSourceDir(PathBuf),

    /// A single source file could not be read or is not valid UTF-8.
    #[error("Error reading {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid settings: {0}")]
    Config(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, LoaderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_source_files_display() {
        let err = LoaderError::NoSourceFiles {
            dir: PathBuf::from("laws"),
            extension: "txt".to_string(),
        };
        assert_eq!(err.to_string(), "No .txt files found in laws");
    }

    #[test]
    fn read_file_names_the_file() {
        let err = LoaderError::ReadFile {
            path: PathBuf::from("famous_cases.x.txt"),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, "bad utf-8"),
        };
        let msg = err.to_string();
        assert!(msg.contains("famous_cases.x.txt"));
        assert!(msg.contains("bad utf-8"));
    }
}
