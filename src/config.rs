//! Per-user configuration: last-opened store file and the recent-files list.
//!
//! The config lives in its own small JSON file under `~/.taskboard` (or
//! `$TASKBOARD_HOME` when set). A missing or unreadable config is treated as
//! empty; the store file itself is never affected by config problems.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::state::StoreError;

/// Maximum number of entries kept in the recent-files list.
pub const MAX_RECENT: usize = 8;

const CONFIG_FILE: &str = "config.json";

/// User configuration persisted between runs.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Store file opened last; the default for the next run.
    pub data_file: Option<PathBuf>,
    /// Recently opened store files, most recent first.
    #[serde(default)]
    pub recent: Vec<PathBuf>,
}

/// Resolve the per-user config directory.
pub fn config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("TASKBOARD_HOME") {
        return PathBuf::from(dir);
    }
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".taskboard")
}

impl Config {
    /// Load config from `dir`, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load(dir: &Path) -> Self {
        let path = dir.join(CONFIG_FILE);
        match fs::read_to_string(&path) {
            Ok(buf) => serde_json::from_str(&buf).unwrap_or_default(),
            Err(_) => Config::default(),
        }
    }

    /// Save config to `dir`, creating the directory on demand. Entries whose
    /// files have disappeared are pruned on the way out.
    pub fn save(&mut self, dir: &Path) -> Result<(), StoreError> {
        self.recent.retain(|p| p.exists());
        fs::create_dir_all(dir).map_err(|e| StoreError::io(dir, e))?;
        let path = dir.join(CONFIG_FILE);
        let data = serde_json::to_string_pretty(self).unwrap();
        fs::write(&path, data).map_err(|e| StoreError::io(&path, e))?;
        Ok(())
    }

    /// Record `path` as the current store file and promote it to the front of
    /// the recent list.
    pub fn touch_recent(&mut self, path: &Path) {
        let path = path.to_path_buf();
        self.recent.retain(|p| p != &path);
        self.recent.insert(0, path.clone());
        self.recent.truncate(MAX_RECENT);
        self.data_file = Some(path);
    }

    /// Recent entries that still exist on disk, most recent first.
    pub fn existing_recent(&self) -> Vec<PathBuf> {
        self.recent.iter().filter(|p| p.exists()).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_load_missing_is_default() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Config::load(dir.path()), Config::default());
    }

    #[test]
    fn test_load_corrupt_is_default() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "][").unwrap();
        assert_eq!(Config::load(dir.path()), Config::default());
    }

    #[test]
    fn test_touch_recent_promotes_and_dedupes() {
        let mut cfg = Config::default();
        cfg.touch_recent(Path::new("/tmp/a.json"));
        cfg.touch_recent(Path::new("/tmp/b.json"));
        cfg.touch_recent(Path::new("/tmp/a.json"));

        assert_eq!(
            cfg.recent,
            vec![PathBuf::from("/tmp/a.json"), PathBuf::from("/tmp/b.json")]
        );
        assert_eq!(cfg.data_file, Some(PathBuf::from("/tmp/a.json")));
    }

    #[test]
    fn test_recent_capped() {
        let mut cfg = Config::default();
        for i in 0..MAX_RECENT + 3 {
            cfg.touch_recent(Path::new(&format!("/tmp/{i}.json")));
        }
        assert_eq!(cfg.recent.len(), MAX_RECENT);
        assert_eq!(cfg.recent[0], PathBuf::from("/tmp/10.json"));
    }

    #[test]
    fn test_save_round_trip_and_prunes_missing() {
        let dir = tempfile::tempdir().unwrap();
        let cfg_dir = dir.path().join("cfg");

        let existing = dir.path().join("board.json");
        fs::write(&existing, "{}").unwrap();

        let mut cfg = Config::default();
        cfg.touch_recent(&dir.path().join("gone.json"));
        cfg.touch_recent(&existing);
        cfg.save(&cfg_dir).unwrap();

        let loaded = Config::load(&cfg_dir);
        assert_eq!(loaded.recent, vec![existing.clone()]);
        assert_eq!(loaded.data_file, Some(existing));
    }

    #[test]
    fn test_existing_recent_skips_missing() {
        let dir = tempfile::tempdir().unwrap();
        let existing = dir.path().join("here.json");
        fs::write(&existing, "{}").unwrap();

        let mut cfg = Config::default();
        cfg.touch_recent(&dir.path().join("gone.json"));
        cfg.touch_recent(&existing);
        assert_eq!(cfg.existing_recent(), vec![existing]);
    }
}
