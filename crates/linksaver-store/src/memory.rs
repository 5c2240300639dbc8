// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// In-memory backend — the fallback when no home directory is available,
// modelled on browser local storage: a single string value under a fixed key.
//
// An earlier incarnation of this fallback stored an unserialized value under
// the key, which broke the load round trip; this backend always stores the
// serialized JSON string it was given, and a test pins that behaviour.

use std::collections::HashMap;
use std::sync::Mutex;

use linksaver_core::error::Result;
use tracing::debug;

use crate::backend::LinkStore;

/// The single storage key, matching the local-storage layout.
pub const STORAGE_KEY: &str = "data";

/// Keeps the collection in process memory for the lifetime of the app.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LinkStore for MemoryStore {
    fn load(&self) -> Option<String> {
        let entries = self.entries.lock().expect("memory store lock poisoned");
        entries.get(STORAGE_KEY).cloned()
    }

    fn save(&self, json: &str) -> Result<()> {
        let mut entries = self.entries.lock().expect("memory store lock poisoned");
        entries.insert(STORAGE_KEY.to_string(), json.to_string());
        debug!(len = json.len(), "collection stored in memory");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_before_any_save_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.load(), None);
    }

    /// The original local-storage fallback stored a raw (unserialized) value,
    /// so loads could never parse. This pins the fixed behaviour: what comes
    /// back is exactly the serialized JSON that went in.
    #[test]
    fn stores_serialized_json_verbatim() {
        let store = MemoryStore::new();
        let json = r#"[{"url":"https://a.com"}]"#;
        store.save(json).expect("save");

        let loaded = store.load().expect("data present");
        assert_eq!(loaded, json);
        let value: serde_json::Value = serde_json::from_str(&loaded).expect("valid json");
        assert!(value.is_array());
    }

    #[test]
    fn second_save_replaces_first() {
        let store = MemoryStore::new();
        store.save("[]").expect("save");
        store.save(r#"["x"]"#).expect("save");
        assert_eq!(store.load().as_deref(), Some(r#"["x"]"#));
    }
}
