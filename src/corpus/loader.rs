//! Reading one-document-per-file corpus directories.

use std::fs;
use std::path::{Path, PathBuf};

use log::warn;

use crate::error::{PolarityError, Result};

/// Read every regular file directly inside `dir` as one document.
///
/// Files are visited in path order so the resulting corpus is the same on
/// every platform. Invalid UTF-8 is replaced rather than rejected; files that
/// cannot be read are skipped with a warning.
pub fn load_directory<P: AsRef<Path>>(dir: P) -> Result<Vec<String>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(PolarityError::corpus(format!(
            "{} is not a directory",
            dir.display()
        )));
    }

    let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file())
        .collect();
    paths.sort();

    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        match fs::read(&path) {
            Ok(bytes) => documents.push(String::from_utf8_lossy(&bytes).into_owned()),
            Err(e) => warn!("skipping {}: {e}", path.display()),
        }
    }
    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_directory_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "second").unwrap();
        fs::write(dir.path().join("a.txt"), "first").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("c.txt"), "ignored").unwrap();

        let documents = load_directory(dir.path()).unwrap();
        assert_eq!(documents, vec!["first", "second"]);
    }

    #[test]
    fn test_load_directory_lossy_utf8() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("bad.txt"), b"caf\xe9 ok").unwrap();

        let documents = load_directory(dir.path()).unwrap();
        assert_eq!(documents.len(), 1);
        assert!(documents[0].ends_with(" ok"));
    }

    #[test]
    fn test_load_directory_missing() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_directory(dir.path().join("missing"));
        assert!(matches!(result, Err(PolarityError::Corpus(_))));
    }
}
