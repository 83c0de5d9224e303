//! Opinion lexicon files.
//!
//! One entry per line. Lines starting with `;` are comments (the header of
//! the common Hu & Liu word lists uses them); blank lines are ignored.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::info;

use crate::error::Result;

/// Read a lexicon file into a sorted set of entries.
pub fn load_lexicon<P: AsRef<Path>>(path: P) -> Result<BTreeSet<String>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let lexicon = parse_lexicon(BufReader::new(file))?;
    info!("loaded {} lexicon entries from {}", lexicon.len(), path.display());
    Ok(lexicon)
}

/// Parse lexicon entries from any buffered reader.
pub fn parse_lexicon<R: BufRead>(reader: R) -> Result<BTreeSet<String>> {
    let mut entries = BTreeSet::new();
    for line in reader.lines() {
        let line = line?;
        if line.starts_with(';') {
            continue;
        }
        let entry = line.trim();
        if !entry.is_empty() {
            entries.insert(entry.to_string());
        }
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lexicon() {
        let input = ";; Opinion Lexicon\n;\n\n  a+\nabound \nabounds\n\nabound\n";
        let lexicon = parse_lexicon(input.as_bytes()).unwrap();

        let entries: Vec<&str> = lexicon.iter().map(String::as_str).collect();
        assert_eq!(entries, vec!["a+", "abound", "abounds"]);
    }

    #[test]
    fn test_comment_marker_only_at_line_start() {
        let lexicon = parse_lexicon("  ;not-a-comment\n".as_bytes()).unwrap();
        assert!(lexicon.contains(";not-a-comment"));
    }

    #[test]
    fn test_load_lexicon_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("positive-words.txt");
        std::fs::write(&path, "; header\nlove\nlike\n").unwrap();

        let lexicon = load_lexicon(&path).unwrap();
        assert_eq!(lexicon.len(), 2);
        assert!(lexicon.contains("love"));

        assert!(load_lexicon(dir.path().join("missing.txt")).is_err());
    }
}
