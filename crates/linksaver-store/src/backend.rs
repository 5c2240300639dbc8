// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Storage backend trait and environment-based backend selection.

use linksaver_core::error::Result;
use tracing::info;

use crate::file::FileStore;
use crate::memory::MemoryStore;

/// Persists the link collection as a single JSON blob.
///
/// Implementations never panic. `load` folds every failure — file absent,
/// storage empty, unreadable data — into `None`; the caller cannot
/// distinguish "never written" from "unreadable", matching the single
/// best-effort contract of the storage layer.
pub trait LinkStore: Send + Sync {
    /// The raw JSON string, or `None` if nothing usable is stored.
    fn load(&self) -> Option<String>;

    /// Persist the full collection, creating any missing directory first.
    /// A second save over existing data must succeed.
    fn save(&self, json: &str) -> Result<()>;
}

/// Inspect the environment and pick a storage backend.
///
/// A resolvable home directory selects the file backend; its absence is the
/// normal "no native storage" case and selects the in-memory backend — never
/// an error.  Called once at startup; the chosen backend is injected into
/// [`crate::LinkService`] rather than re-probed per call.
pub fn select_backend() -> Box<dyn LinkStore> {
    match FileStore::in_home_dir() {
        Ok(store) => {
            info!(path = %store.path().display(), "using file storage");
            Box::new(store)
        }
        Err(_) => {
            info!("no home directory, using in-memory storage");
            Box::new(MemoryStore::new())
        }
    }
}
