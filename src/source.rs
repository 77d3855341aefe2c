use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{LoaderError, Result};

/// Qualifying source files of one directory, in file-name order.
///
/// Consumed once; scanning again means calling [`scan`] again.
#[derive(Debug)]
pub struct SourceFiles {
    inner: std::vec::IntoIter<PathBuf>,
}

impl SourceFiles {
    pub fn remaining(&self) -> &[PathBuf] {
        self.inner.as_slice()
    }
}

impl Iterator for SourceFiles {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for SourceFiles {}

/// List non-empty regular files with the given extension in `dir`.
pub fn scan(dir: &Path, extension: &str) -> Result<SourceFiles> {
    if !dir.is_dir() {
        return Err(LoaderError::MissingSourceDir(dir.to_path_buf()));
    }
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some(extension) {
            continue;
        }
        let meta = fs::metadata(&path)?;
        if meta.is_file() && meta.len() > 0 {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(SourceFiles {
        inner: files.into_iter(),
    })
}

pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| LoaderError::ReadFile {
        path: path.to_path_buf(),
        source,
    })
}

pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(files: SourceFiles) -> Vec<String> {
        files.map(|p| file_name(&p)).collect()
    }

    #[test]
    fn sorted_non_empty_txt_only() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b_law.txt"), "ماده 1 ب").unwrap();
        fs::write(dir.path().join("a_law.txt"), "ماده 1 الف").unwrap();
        fs::write(dir.path().join("empty_law.txt"), "").unwrap();
        fs::write(dir.path().join("notes.md"), "ماده 1").unwrap();
        fs::create_dir(dir.path().join("nested.txt")).unwrap();

        let files = scan(dir.path(), "txt").unwrap();
        assert_eq!(files.len(), 2);
        assert_eq!(names(files), vec!["a_law.txt", "b_law.txt"]);
    }

    #[test]
    fn empty_dir_yields_nothing() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(scan(dir.path(), "txt").unwrap().len(), 0);
    }

    #[test]
    fn missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let err = scan(&dir.path().join("nope"), "txt").unwrap_err();
        assert!(matches!(err, LoaderError::MissingSourceDir(_)));
    }

    #[test]
    fn invalid_utf8_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.txt");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();
        let err = read_text(&path).unwrap_err();
        assert!(matches!(err, LoaderError::ReadFile { .. }));
    }
}
