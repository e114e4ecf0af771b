//! Detection of cloud-sync "conflicted copy" duplicates.
//!
//! Sync services resolve concurrent edits by writing a sibling file with a
//! marker in its name ("conflicted copy", "conflict", "duplicate"). When the
//! store file has such siblings the user may be looking at stale data, so we
//! warn on open and expose an explicit scan command.

use std::fs;
use std::path::{Path, PathBuf};

const MARKERS: [&str; 3] = ["conflicted copy", "conflict", "duplicate"];

/// Scan the store file's directory for likely sync-conflict duplicates.
///
/// A candidate is any other `.json` file whose lowercased name contains both
/// the store file's stem and one of the conflict markers. Scan errors are
/// treated as "no conflicts"; this is a heuristic convenience, not a check
/// that may block opening the file.
pub fn conflict_candidates(store_path: &Path) -> Vec<PathBuf> {
    let Some(folder) = store_path.parent() else {
        return Vec::new();
    };
    let Some(stem) = store_path.file_stem().and_then(|s| s.to_str()) else {
        return Vec::new();
    };
    let stem = stem.to_lowercase();

    let Ok(entries) = fs::read_dir(folder) else {
        return Vec::new();
    };

    let mut out: Vec<PathBuf> = entries
        .flatten()
        .map(|e| e.path())
        .filter(|p| {
            if p == store_path || p.extension().and_then(|e| e.to_str()) != Some("json") {
                return false;
            }
            let name = match p.file_name().and_then(|n| n.to_str()) {
                Some(n) => n.to_lowercase(),
                None => return false,
            };
            name.contains(&stem) && MARKERS.iter().any(|m| name.contains(m))
        })
        .collect();
    out.sort();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let p = dir.join(name);
        fs::write(&p, "{}").unwrap();
        p
    }

    #[test]
    fn test_detects_conflicted_copies() {
        let dir = tempfile::tempdir().unwrap();
        let store = touch(dir.path(), "board.json");
        let dropbox = touch(
            dir.path(),
            "board (conflicted copy 2026-08-29).json",
        );
        let generic = touch(dir.path(), "board-conflict.json");
        touch(dir.path(), "board.json.bak");
        touch(dir.path(), "other.json");
        touch(dir.path(), "notes.txt");

        let hits = conflict_candidates(&store);
        assert_eq!(hits, {
            let mut v = vec![dropbox, generic];
            v.sort();
            v
        });
    }

    #[test]
    fn test_store_file_itself_excluded() {
        let dir = tempfile::tempdir().unwrap();
        // The store's own name contains "conflict" but must not match itself.
        let store = touch(dir.path(), "conflict-log.json");
        assert!(conflict_candidates(&store).is_empty());
    }

    #[test]
    fn test_missing_folder_is_empty() {
        let path = Path::new("/nonexistent/dir/board.json");
        assert!(conflict_candidates(path).is_empty());
    }
}
