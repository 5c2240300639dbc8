// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Central service layer — wires the storage backend, validator, and platform
// bridge together and provides async-friendly methods for the Dioxus UI.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use linksaver_backend::WebpageValidator;
use linksaver_bridge::platform_bridge;
use linksaver_bridge::traits::{NativeBrowserOpen, NativeClipboard, PlatformBridge};
use linksaver_core::AppConfig;
use linksaver_core::error::Result;
use linksaver_core::types::{Link, LinkId};
use linksaver_store::{LinkService, select_backend};
use tracing::info;

use super::data_dir;

/// Shared application services accessible from all Dioxus components via
/// `use_context::<AppServices>()`.
///
/// All fields are cheaply cloneable (Arc-wrapped) so that the struct can be
/// passed into closures and async blocks without lifetime issues.
#[derive(Clone)]
pub struct AppServices {
    service: Arc<LinkService<WebpageValidator>>,
    bridge: Arc<dyn PlatformBridge>,
    config: Arc<Mutex<AppConfig>>,
    data_dir: PathBuf,
}

impl AppServices {
    /// Initialise all services.  Call once at app startup.
    ///
    /// Picks the storage backend for this environment (file system when a
    /// home directory exists, in-memory otherwise) and loads the persisted
    /// config.  Fails only when the HTTP client for link validation cannot
    /// be constructed.
    pub fn init() -> Result<Self> {
        let dir = data_dir::data_dir();
        info!(path = %dir.display(), "initialising app services");

        let service = LinkService::new(select_backend(), WebpageValidator::new()?);
        let config = load_config(&dir).unwrap_or_default();
        let bridge: Arc<dyn PlatformBridge> = Arc::from(platform_bridge());

        info!(platform = bridge.platform_name(), "app services initialised");

        Ok(Self {
            service: Arc::new(service),
            bridge,
            config: Arc::new(Mutex::new(config)),
            data_dir: dir,
        })
    }

    // -- Links ---------------------------------------------------------------

    /// The stored collection; empty when nothing was ever saved.
    pub fn links(&self) -> Result<Vec<Link>> {
        self.service.load_links()
    }

    /// Validate a candidate and append it to the collection.
    ///
    /// When metadata fetching is disabled in the config the candidate is
    /// checked syntactically and stored without touching the network.
    pub async fn add_link(&self, candidate: Link) -> Result<Link> {
        if self.config().auto_fetch_metadata {
            self.service.add_link(candidate).await
        } else {
            self.service.add_link_offline(candidate)
        }
    }

    /// Persist an edited link.
    pub fn update_link(&self, link: &Link) -> Result<bool> {
        self.service.replace_link(link)
    }

    /// Flip a link's complete flag and persist it.
    pub fn toggle_complete(&self, link: &Link) -> Result<bool> {
        let mut updated = link.clone();
        updated.complete = !updated.complete;
        self.service.replace_link(&updated)
    }

    /// Delete a link.
    pub fn delete_link(&self, id: LinkId) -> Result<bool> {
        self.service.remove_link(id)
    }

    /// Generate sample links and store them (debug builds only).
    #[cfg(debug_assertions)]
    pub fn generate_samples(&self) -> Result<usize> {
        let mut links = self.service.load_links()?;
        let samples = linksaver_backend::sample::sample_links(10);
        let count = samples.len();
        links.extend(samples);
        self.service.save_links(&links)?;
        info!(count, "sample links generated");
        Ok(count)
    }

    // -- Platform bridge -----------------------------------------------------

    /// Open a link in its configured browser.
    pub fn open_link(&self, link: &Link) -> Result<()> {
        self.bridge.open_link(&link.url, link.browser)
    }

    /// Copy a link's URL to the clipboard.
    pub fn copy_url(&self, link: &Link) -> Result<()> {
        self.bridge.copy_text(&link.url)
    }

    /// Current clipboard text, for prefilling the add-link form.
    pub fn clipboard_text(&self) -> Result<Option<String>> {
        self.bridge.read_text()
    }

    /// OS name of the running platform.
    pub fn platform_name(&self) -> String {
        self.bridge.platform_name().to_string()
    }

    // -- Config Persistence --------------------------------------------------

    /// Get a clone of the current config.
    pub fn config(&self) -> AppConfig {
        self.config.lock().expect("config lock poisoned").clone()
    }

    /// Update and persist the config.
    pub fn save_config(&self, config: &AppConfig) -> Result<()> {
        *self.config.lock().expect("config lock poisoned") = config.clone();
        persist_config(&self.data_dir, config)
    }

    /// Path to the data directory.
    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }
}

// -- Config file persistence -------------------------------------------------

const CONFIG_FILE: &str = "config.json";

fn load_config(data_dir: &std::path::Path) -> Option<AppConfig> {
    let path = data_dir.join(CONFIG_FILE);
    let data = std::fs::read_to_string(&path).ok()?;
    serde_json::from_str(&data).ok()
}

fn persist_config(data_dir: &std::path::Path, config: &AppConfig) -> Result<()> {
    let path = data_dir.join(CONFIG_FILE);
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(&path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use linksaver_core::types::Browser;

    #[test]
    fn config_round_trips_through_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = AppConfig {
            default_browser: Browser::Firefox,
            auto_fetch_metadata: false,
            show_completed: false,
        };

        persist_config(dir.path(), &config).expect("persist");
        let loaded = load_config(dir.path()).expect("load");

        assert_eq!(loaded.default_browser, Browser::Firefox);
        assert!(!loaded.auto_fetch_metadata);
        assert!(!loaded.show_completed);
    }

    #[test]
    fn missing_config_is_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(load_config(dir.path()).is_none());
    }
}
