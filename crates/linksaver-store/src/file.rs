// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// File-system backend — the collection lives in `<home>/.link-saver/links.json`.

use std::path::{Path, PathBuf};

use linksaver_core::error::{LinkSaverError, Result};
use tracing::{debug, instrument};

use crate::backend::LinkStore;

/// Directory under the home directory holding all app data.
pub const ROOT_DIR: &str = ".link-saver";

/// File name of the persisted link collection.
pub const LINKS_FILE: &str = "links.json";

/// Stores the collection as a single JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store under `<home>/.link-saver/`.  Fails only when no home directory
    /// can be resolved.
    pub fn in_home_dir() -> Result<Self> {
        let home = home_dir().ok_or(LinkSaverError::NoHomeDir)?;
        Ok(Self::in_dir(home.join(ROOT_DIR)))
    }

    /// Store under an explicit directory (tests point this at a temp dir).
    pub fn in_dir(root: impl Into<PathBuf>) -> Self {
        Self {
            path: root.into().join(LINKS_FILE),
        }
    }

    /// Full path of the links file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LinkStore for FileStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Option<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(data) => Some(data),
            Err(e) => {
                // Absent file and unreadable file are the same "no data" case.
                debug!(error = %e, "links file not readable");
                None
            }
        }
    }

    #[instrument(skip_all, fields(path = %self.path.display(), len = json.len()))]
    fn save(&self, json: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, json)?;
        debug!("collection written");
        Ok(())
    }
}

fn home_dir() -> Option<PathBuf> {
    #[cfg(windows)]
    let var = "USERPROFILE";
    #[cfg(not(windows))]
    let var = "HOME";

    std::env::var_os(var).map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_before_any_save_is_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileStore::in_dir(dir.path().join(ROOT_DIR));
        assert_eq!(store.load(), None);
    }

    #[test]
    fn save_creates_missing_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let root = dir.path().join(ROOT_DIR);
        assert!(!root.exists());

        let store = FileStore::in_dir(&root);
        store.save("[]").expect("save");

        assert!(root.is_dir());
        assert!(store.path().is_file());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileStore::in_dir(dir.path().join(ROOT_DIR));

        store.save(r#"[{"url":"https://a.com"}]"#).expect("save");
        let loaded = store.load().expect("data present");

        let value: serde_json::Value = serde_json::from_str(&loaded).expect("valid json");
        assert_eq!(value[0]["url"], "https://a.com");
    }

    #[test]
    fn second_save_overwrites_without_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileStore::in_dir(dir.path().join(ROOT_DIR));

        store.save("[1]").expect("first save");
        store.save("[1,2]").expect("second save");
        assert_eq!(store.load().as_deref(), Some("[1,2]"));
    }
}
