// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Global application state — reactive signals for the Dioxus UI.

use linksaver_core::AppConfig;
use linksaver_core::human_errors::humanize_error;
use linksaver_core::types::Link;

use crate::services::app_services::AppServices;

/// Shared state accessible to all pages via `use_context`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The loaded link collection, newest last (storage order).
    pub links: Vec<Link>,
    /// Tag currently filtering the home list, if any.
    pub filter_tag: Option<String>,
    /// Application settings.
    pub config: AppConfig,
    /// Status message for user feedback.
    pub status_message: Option<String>,
}

impl AppState {
    /// Create initial state from the backend services.
    pub fn new(svc: &AppServices) -> Self {
        let config = svc.config();
        let links = match svc.links() {
            Ok(links) => links,
            Err(e) => {
                tracing::error!(error = %e, "loading links failed");
                Vec::new()
            }
        };

        Self {
            links,
            filter_tag: None,
            config,
            status_message: None,
        }
    }

    /// Reload the link list from storage, surfacing failures as a status
    /// message.
    pub fn refresh(&mut self, svc: &AppServices) {
        match svc.links() {
            Ok(links) => self.links = links,
            Err(e) => self.status_message = Some(humanize_error(&e).message),
        }
    }

    /// Links visible under the current filter and config.
    pub fn visible_links(&self) -> Vec<&Link> {
        self.links
            .iter()
            .filter(|l| self.config.show_completed || !l.complete)
            .filter(|l| match &self.filter_tag {
                Some(tag) => l.tags.iter().any(|t| t == tag),
                None => true,
            })
            .collect()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            links: Vec::new(),
            filter_tag: None,
            config: AppConfig::default(),
            status_message: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linksaver_core::types::Link;

    #[test]
    fn visible_links_respects_show_completed() {
        let mut state = AppState::default();
        state.links = vec![
            Link::new("https://a.com"),
            Link::new("https://b.com").complete(true),
        ];

        assert_eq!(state.visible_links().len(), 2);

        state.config.show_completed = false;
        let visible = state.visible_links();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].url, "https://a.com");
    }

    #[test]
    fn visible_links_respects_tag_filter() {
        let mut state = AppState::default();
        state.links = vec![
            Link::new("https://a.com").tags("Rust Videos"),
            Link::new("https://b.com").tags("Cooking"),
        ];

        state.filter_tag = Some("Rust".into());
        let visible = state.visible_links();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].url, "https://a.com");
    }
}
